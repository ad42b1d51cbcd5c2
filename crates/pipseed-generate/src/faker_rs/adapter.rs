use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use fake::Fake;
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryName, PostCode, StateAbbr, StateName, StreetName,
};
use fake::faker::boolean::raw::Boolean;
use fake::faker::company::raw::{Bs, CatchPhrase, CompanyName};
use fake::faker::currency::raw::CurrencyCode;
use fake::faker::internet::raw::{DomainSuffix, FreeEmail, Username};
use fake::faker::impls::address::CityNameGenFn;
use fake::faker::lorem::raw::{Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{DE_DE, Data, EN, FR_FR, JA_JP, PT_BR, ZH_CN};
use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};

use crate::errors::GenerationError;
use crate::faker_rs::locales::LocaleKey;
use crate::provider::FakeValueProvider;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MAX_AGE_YEARS: i64 = 115;
const COORDINATE_SCALE: f64 = 1_000_000.0;

/// Builds the provider for a locale identifier such as `en_US`.
///
/// `reference` is the "now" used by birth dates and the this-year/this-decade
/// timestamps.
pub fn provider_for(
    locale: &str,
    reference: NaiveDateTime,
) -> Result<Box<dyn FakeValueProvider>, GenerationError> {
    let key = LocaleKey::parse(locale).ok_or_else(|| {
        GenerationError::InvalidArgument(format!(
            "unsupported locale '{}'. Supported locales: {}",
            locale,
            LocaleKey::supported()
        ))
    })?;

    let provider: Box<dyn FakeValueProvider> = match key {
        LocaleKey::EnUs => Box::new(FakeRsProvider::new(EN, key, reference)),
        LocaleKey::FrFr => Box::new(FakeRsProvider::new(FR_FR, key, reference)),
        LocaleKey::DeDe => Box::new(FakeRsProvider::new(DE_DE, key, reference)),
        LocaleKey::PtBr => Box::new(FakeRsProvider::new(PT_BR, key, reference)),
        LocaleKey::JaJp => Box::new(FakeRsProvider::new(JA_JP, key, reference)),
        LocaleKey::ZhCn => Box::new(FakeRsProvider::new(ZH_CN, key, reference)),
    };
    Ok(provider)
}

/// [`FakeValueProvider`] backed by the `fake` crate's locale-generic fakers.
pub struct FakeRsProvider<L> {
    locale: L,
    key: LocaleKey,
    reference: NaiveDateTime,
}

impl<L: Data + CityNameGenFn + Copy> FakeRsProvider<L> {
    pub fn new(locale: L, key: LocaleKey, reference: NaiveDateTime) -> Self {
        Self {
            locale,
            key,
            reference,
        }
    }

    fn between(&self, start: NaiveDateTime, rng: &mut dyn RngCore) -> NaiveDateTime {
        let span = (self.reference - start).num_seconds().max(0);
        start + TimeDelta::seconds(rng.random_range(0..=span))
    }

    fn year_start(&self, year: i32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or(self.reference)
    }
}

impl<L: Data + CityNameGenFn + Copy> FakeValueProvider for FakeRsProvider<L> {
    fn locale(&self) -> &str {
        self.key.as_str()
    }

    fn uuid(&self, rng: &mut dyn RngCore) -> String {
        let bytes: [u8; 16] = rng.random();
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }

    fn first_name(&self, rng: &mut dyn RngCore) -> String {
        FirstName(self.locale).fake_with_rng(rng)
    }

    fn last_name(&self, rng: &mut dyn RngCore) -> String {
        LastName(self.locale).fake_with_rng(rng)
    }

    fn email(&self, rng: &mut dyn RngCore) -> String {
        FreeEmail(self.locale).fake_with_rng(rng)
    }

    fn company_email(&self, rng: &mut dyn RngCore) -> String {
        let user: String = Username(self.locale).fake_with_rng(rng);
        let company: String = CompanyName(self.locale).fake_with_rng(rng);
        let suffix: String = DomainSuffix(self.locale).fake_with_rng(rng);
        format!("{}@{}.{}", slug(&user, "contact"), slug(&company, "company"), suffix)
    }

    fn username(&self, rng: &mut dyn RngCore) -> String {
        Username(self.locale).fake_with_rng(rng)
    }

    fn phone_number(&self, rng: &mut dyn RngCore) -> String {
        PhoneNumber(self.locale).fake_with_rng(rng)
    }

    fn address(&self, rng: &mut dyn RngCore) -> String {
        let street = self.street_address(rng);
        let city = self.city(rng);
        let postcode = self.postcode(rng);
        match self.key {
            LocaleKey::EnUs => {
                let state: String = StateAbbr(self.locale).fake_with_rng(rng);
                format!("{street}\n{city}, {state} {postcode}")
            }
            LocaleKey::PtBr => {
                let state: String = StateAbbr(self.locale).fake_with_rng(rng);
                format!("{street}\n{city} - {state}\n{postcode}")
            }
            LocaleKey::FrFr | LocaleKey::DeDe => format!("{street}\n{postcode} {city}"),
            LocaleKey::JaJp => {
                let prefecture = self.state(rng);
                format!("〒{postcode}\n{prefecture}{city}{street}")
            }
            LocaleKey::ZhCn => {
                let province = self.state(rng);
                format!("{province}{city}{street}\n{postcode}")
            }
        }
    }

    fn street_address(&self, rng: &mut dyn RngCore) -> String {
        let number: String = BuildingNumber(self.locale).fake_with_rng(rng);
        let street: String = StreetName(self.locale).fake_with_rng(rng);
        format!("{number} {street}")
    }

    fn city(&self, rng: &mut dyn RngCore) -> String {
        CityName(self.locale).fake_with_rng(rng)
    }

    fn state(&self, rng: &mut dyn RngCore) -> String {
        StateName(self.locale).fake_with_rng(rng)
    }

    fn country(&self, rng: &mut dyn RngCore) -> String {
        CountryName(self.locale).fake_with_rng(rng)
    }

    fn postcode(&self, rng: &mut dyn RngCore) -> String {
        PostCode(self.locale).fake_with_rng(rng)
    }

    fn latitude(&self, rng: &mut dyn RngCore) -> f64 {
        coordinate(90.0, rng)
    }

    fn longitude(&self, rng: &mut dyn RngCore) -> f64 {
        coordinate(180.0, rng)
    }

    fn company_name(&self, rng: &mut dyn RngCore) -> String {
        CompanyName(self.locale).fake_with_rng(rng)
    }

    fn bs(&self, rng: &mut dyn RngCore) -> String {
        Bs(self.locale).fake_with_rng(rng)
    }

    fn url(&self, rng: &mut dyn RngCore) -> String {
        let name: String = LastName(self.locale).fake_with_rng(rng);
        let suffix: String = DomainSuffix(self.locale).fake_with_rng(rng);
        format!("https://www.{}.{}/", slug(&name, "example"), suffix)
    }

    fn catch_phrase(&self, rng: &mut dyn RngCore) -> String {
        CatchPhrase(self.locale).fake_with_rng(rng)
    }

    fn text(&self, max_chars: usize, rng: &mut dyn RngCore) -> String {
        let mut text = String::new();
        loop {
            let sentence = self.sentence(rng);
            let needed = if text.is_empty() {
                sentence.chars().count()
            } else {
                text.chars().count() + 1 + sentence.chars().count()
            };
            if needed > max_chars {
                if text.is_empty() {
                    text = truncate_chars(&sentence, max_chars);
                }
                break;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&sentence);
        }
        text
    }

    fn word(&self, rng: &mut dyn RngCore) -> String {
        Word(self.locale).fake_with_rng(rng)
    }

    fn sentence(&self, rng: &mut dyn RngCore) -> String {
        Sentence(self.locale, 4..10).fake_with_rng(rng)
    }

    fn bothify(&self, pattern: &str, rng: &mut dyn RngCore) -> String {
        pattern
            .chars()
            .map(|ch| match ch {
                '?' => char::from(LETTERS[rng.random_range(0..LETTERS.len())]),
                '#' => char::from(b'0' + rng.random_range(0..=9_u8)),
                other => other,
            })
            .collect()
    }

    fn ean13(&self, rng: &mut dyn RngCore) -> String {
        let mut digits = [0_u8; 13];
        for digit in digits.iter_mut().take(12) {
            *digit = rng.random_range(0..=9);
        }
        digits[12] = ean_check_digit(&digits[..12]);
        digits.iter().map(|d| char::from(b'0' + *d)).collect()
    }

    fn currency_code(&self, rng: &mut dyn RngCore) -> String {
        CurrencyCode(self.locale).fake_with_rng(rng)
    }

    fn date_of_birth(&self, rng: &mut dyn RngCore) -> NaiveDate {
        let today = self.reference.date();
        let offset = rng.random_range(0..=MAX_AGE_YEARS * 365);
        today - TimeDelta::days(offset)
    }

    fn date_time_this_year(&self, rng: &mut dyn RngCore) -> NaiveDateTime {
        let start = self.year_start(self.reference.year());
        self.between(start, rng)
    }

    fn date_time_this_decade(&self, rng: &mut dyn RngCore) -> NaiveDateTime {
        let year = self.reference.year();
        let start = self.year_start(year - year.rem_euclid(10));
        self.between(start, rng)
    }

    fn boolean(&self, rng: &mut dyn RngCore) -> bool {
        Boolean(self.locale, 50).fake_with_rng(rng)
    }

    fn sha256(&self, rng: &mut dyn RngCore) -> String {
        let seed: [u8; 32] = rng.random();
        hex::encode(Sha256::digest(seed))
    }

    fn uniform(&self, min: f64, max: f64, rng: &mut dyn RngCore) -> f64 {
        if min >= max {
            return min;
        }
        rng.random_range(min..=max)
    }
}

fn coordinate(bound: f64, rng: &mut dyn RngCore) -> f64 {
    let value: f64 = rng.random_range(-bound..=bound);
    (value * COORDINATE_SCALE).round() / COORDINATE_SCALE
}

fn ean_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(idx, d)| u32::from(*d) * if idx % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Lowercase ASCII alphanumerics of `value`, or `fallback` when none remain.
fn slug(value: &str, fallback: &str) -> String {
    let slug: String = value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid reference")
    }

    fn provider() -> FakeRsProvider<EN> {
        FakeRsProvider::new(EN, LocaleKey::EnUs, reference())
    }

    #[test]
    fn ean13_check_digit_is_valid() {
        assert_eq!(ean_check_digit(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let code = provider().ean13(&mut rng);
        assert_eq!(code.len(), 13);
        let digits: Vec<u8> = code.bytes().map(|b| b - b'0').collect();
        assert_eq!(ean_check_digit(&digits[..12]), digits[12]);
    }

    #[test]
    fn bothify_replaces_placeholders_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sku = provider().bothify("???-########", &mut rng);
        assert_eq!(sku.len(), 12);
        assert!(sku[..3].chars().all(|ch| ch.is_ascii_alphabetic()));
        assert_eq!(&sku[3..4], "-");
        assert!(sku[4..].chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn timestamps_stay_within_their_window() {
        let provider = provider();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let this_year = provider.date_time_this_year(&mut rng);
            assert_eq!(this_year.year(), 2024);
            assert!(this_year <= reference());

            let this_decade = provider.date_time_this_decade(&mut rng);
            assert!((2020..=2024).contains(&this_decade.year()));
            assert!(this_decade <= reference());

            let birth = provider.date_of_birth(&mut rng);
            assert!(birth <= reference().date());
            assert!(birth.year() >= 2024 - 116);
        }
    }

    #[test]
    fn uuid_is_version_four() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let value = provider().uuid(&mut rng);
        let parsed = uuid::Uuid::parse_str(&value).expect("valid uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn text_respects_max_chars() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for max in [5, 40, 200] {
            let text = provider().text(max, &mut rng);
            assert!(!text.is_empty());
            assert!(text.chars().count() <= max);
        }
    }

    #[test]
    fn sha256_is_hex_digest() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let digest = provider().sha256(&mut rng);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn address_layout_follows_locale() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let us = provider().address(&mut rng);
        let lines: Vec<&str> = us.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(", "));

        let ja = FakeRsProvider::new(JA_JP, LocaleKey::JaJp, reference()).address(&mut rng);
        assert!(ja.starts_with('〒'));
        assert_eq!(ja.lines().count(), 2);

        let fr = FakeRsProvider::new(FR_FR, LocaleKey::FrFr, reference()).address(&mut rng);
        let second = fr.lines().nth(1).expect("city line");
        assert!(!second.contains(", "));
    }

    #[test]
    fn unsupported_locale_is_rejected() {
        let result = provider_for("xx_XX", reference());
        assert!(matches!(result, Err(GenerationError::InvalidArgument(_))));
    }

    #[test]
    fn slug_falls_back_for_non_ascii() {
        assert_eq!(slug("O'Connor & Sons", "x"), "oconnorsons");
        assert_eq!(slug("山田", "example"), "example");
    }
}
