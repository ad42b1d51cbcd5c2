use std::time::Instant;

use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use pipseed_core::{Record, RecordKind, RecordSet};

use crate::errors::GenerationError;
use crate::faker_rs::provider_for;
use crate::provider::FakeValueProvider;
use crate::schema::fields_for;

/// Generates records of any kind from one locale-bound provider.
///
/// The RNG is owned by the generator. Build it with [`RecordGenerator::with_seed`]
/// to get the same records on every run.
pub struct RecordGenerator {
    provider: Box<dyn FakeValueProvider>,
    rng: ChaCha8Rng,
}

impl RecordGenerator {
    /// Generator for `locale`, seeded from OS entropy, with "now" as the
    /// reference time for relative dates.
    pub fn new(locale: &str) -> Result<Self, GenerationError> {
        Self::with_reference_time(locale, chrono::Utc::now().naive_utc())
    }

    pub fn with_reference_time(
        locale: &str,
        reference: NaiveDateTime,
    ) -> Result<Self, GenerationError> {
        let provider = provider_for(locale, reference)?;
        Ok(Self::from_provider(provider))
    }

    /// Wraps an arbitrary provider implementation.
    pub fn from_provider(provider: Box<dyn FakeValueProvider>) -> Self {
        Self {
            provider,
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Builds `count` records of `kind`, each holding the kind's full field set
    /// in declared order. Negative counts are rejected.
    pub fn generate(&mut self, kind: RecordKind, count: i64) -> Result<RecordSet, GenerationError> {
        let count = usize::try_from(count).map_err(|_| {
            GenerationError::InvalidArgument(format!(
                "count must be a non-negative integer, got {count}"
            ))
        })?;

        let start = Instant::now();
        info!(
            kind = %kind,
            count,
            locale = %self.provider.locale(),
            "generation started"
        );

        let fields = fields_for(kind);
        let mut records = Vec::new();
        records.try_reserve(count).map_err(|err| {
            GenerationError::InvalidArgument(format!("cannot hold {count} records: {err}"))
        })?;
        for _ in 0..count {
            let mut record = Record::with_capacity(fields.len());
            for field in fields {
                let value = (field.generate)(self.provider.as_ref(), &mut self.rng);
                record.insert(field.name, value);
            }
            records.push(record);
        }

        debug!(
            kind = %kind,
            fields = fields.len(),
            records = records.len(),
            "records assembled"
        );
        info!(
            kind = %kind,
            count = records.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "generation finished"
        );

        Ok(records)
    }
}

/// Name-based entry point: validates `kind`, then generates `count` records
/// for `locale`.
pub fn generate_records(
    kind: &str,
    count: i64,
    locale: &str,
) -> Result<RecordSet, GenerationError> {
    let kind: RecordKind = kind.parse()?;
    RecordGenerator::new(locale)?.generate(kind, count)
}
