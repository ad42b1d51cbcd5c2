//! Field tables: for every record kind, the ordered fields and how each one is
//! produced from the fake-value provider.

use rand::RngCore;
use rand::seq::IndexedRandom;

use pipseed_core::{FieldValue, RecordKind};

use crate::provider::FakeValueProvider;

pub const PRICE_RANGE: (f64, f64) = (1.0, 1000.0);
pub const AMOUNT_RANGE: (f64, f64) = (1.0, 10000.0);
pub const TRANSACTION_STATUSES: &[&str] = &["pending", "completed", "failed", "refunded"];

const DESCRIPTION_MAX_CHARS: usize = 200;
const SKU_PATTERN: &str = "???-########";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

type FieldFn = fn(&dyn FakeValueProvider, &mut dyn RngCore) -> FieldValue;

/// A named field and the function that generates its value.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub generate: FieldFn,
}

impl FieldSpec {
    const fn new(name: &'static str, generate: FieldFn) -> Self {
        Self { name, generate }
    }
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec").field("name", &self.name).finish()
    }
}

const PERSON: &[FieldSpec] = &[
    FieldSpec::new("id", id),
    FieldSpec::new("first_name", |p, rng| p.first_name(rng).into()),
    FieldSpec::new("last_name", |p, rng| p.last_name(rng).into()),
    FieldSpec::new("email", |p, rng| p.email(rng).into()),
    FieldSpec::new("phone", |p, rng| p.phone_number(rng).into()),
    FieldSpec::new("date_of_birth", |p, rng| {
        p.date_of_birth(rng).format("%Y-%m-%d").to_string().into()
    }),
    FieldSpec::new("address", single_line_address),
];

const ADDRESS: &[FieldSpec] = &[
    FieldSpec::new("id", id),
    FieldSpec::new("street", |p, rng| p.street_address(rng).into()),
    FieldSpec::new("city", |p, rng| p.city(rng).into()),
    FieldSpec::new("state", |p, rng| p.state(rng).into()),
    FieldSpec::new("country", |p, rng| p.country(rng).into()),
    FieldSpec::new("postal_code", |p, rng| p.postcode(rng).into()),
    FieldSpec::new("latitude", |p, rng| p.latitude(rng).to_string().into()),
    FieldSpec::new("longitude", |p, rng| p.longitude(rng).to_string().into()),
];

const COMPANY: &[FieldSpec] = &[
    FieldSpec::new("id", id),
    FieldSpec::new("name", |p, rng| p.company_name(rng).into()),
    FieldSpec::new("email", |p, rng| p.company_email(rng).into()),
    FieldSpec::new("phone", |p, rng| p.phone_number(rng).into()),
    FieldSpec::new("website", |p, rng| p.url(rng).into()),
    FieldSpec::new("industry", |p, rng| p.bs(rng).into()),
    FieldSpec::new("address", single_line_address),
];

const PRODUCT: &[FieldSpec] = &[
    FieldSpec::new("id", id),
    FieldSpec::new("name", |p, rng| p.catch_phrase(rng).into()),
    FieldSpec::new("description", |p, rng| {
        p.text(DESCRIPTION_MAX_CHARS, rng).into()
    }),
    FieldSpec::new("price", |p, rng| money(p, PRICE_RANGE, rng)),
    FieldSpec::new("sku", |p, rng| p.bothify(SKU_PATTERN, rng).into()),
    FieldSpec::new("barcode", |p, rng| p.ean13(rng).into()),
    FieldSpec::new("category", |p, rng| p.word(rng).into()),
];

const TRANSACTION: &[FieldSpec] = &[
    FieldSpec::new("id", id),
    FieldSpec::new("transaction_id", id),
    FieldSpec::new("amount", |p, rng| money(p, AMOUNT_RANGE, rng)),
    FieldSpec::new("currency", |p, rng| p.currency_code(rng).into()),
    FieldSpec::new("date", |p, rng| {
        p.date_time_this_year(rng).format(TIMESTAMP_FORMAT).to_string().into()
    }),
    FieldSpec::new("status", status),
    FieldSpec::new("description", |p, rng| p.sentence(rng).into()),
];

const USER: &[FieldSpec] = &[
    FieldSpec::new("id", id),
    FieldSpec::new("username", |p, rng| p.username(rng).into()),
    FieldSpec::new("email", |p, rng| p.email(rng).into()),
    FieldSpec::new("password_hash", |p, rng| p.sha256(rng).into()),
    FieldSpec::new("created_at", |p, rng| {
        p.date_time_this_decade(rng).format(TIMESTAMP_FORMAT).to_string().into()
    }),
    FieldSpec::new("last_login", |p, rng| {
        p.date_time_this_year(rng).format(TIMESTAMP_FORMAT).to_string().into()
    }),
    FieldSpec::new("is_active", |p, rng| p.boolean(rng).into()),
];

/// Ordered field table for `kind`.
pub fn fields_for(kind: RecordKind) -> &'static [FieldSpec] {
    match kind {
        RecordKind::Person => PERSON,
        RecordKind::Address => ADDRESS,
        RecordKind::Company => COMPANY,
        RecordKind::Product => PRODUCT,
        RecordKind::Transaction => TRANSACTION,
        RecordKind::User => USER,
    }
}

pub fn field_names(kind: RecordKind) -> Vec<&'static str> {
    fields_for(kind).iter().map(|field| field.name).collect()
}

fn id(provider: &dyn FakeValueProvider, rng: &mut dyn RngCore) -> FieldValue {
    provider.uuid(rng).into()
}

fn single_line_address(provider: &dyn FakeValueProvider, rng: &mut dyn RngCore) -> FieldValue {
    flatten_lines(&provider.address(rng)).into()
}

fn money(
    provider: &dyn FakeValueProvider,
    (min, max): (f64, f64),
    rng: &mut dyn RngCore,
) -> FieldValue {
    FieldValue::Float(round_cents(provider.uniform(min, max, rng)))
}

fn status(_provider: &dyn FakeValueProvider, rng: &mut dyn RngCore) -> FieldValue {
    TRANSACTION_STATUSES
        .choose(rng)
        .copied()
        .unwrap_or("pending")
        .into()
}

/// Joins the lines of `text` with `", "`.
pub fn flatten_lines(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
