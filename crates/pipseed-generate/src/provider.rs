use chrono::{NaiveDate, NaiveDateTime};
use rand::RngCore;

/// Source of locale-aware fake primitive values.
///
/// The provider is bound to one locale when it is built. Randomness is always
/// supplied by the caller so that a seeded RNG yields reproducible records.
pub trait FakeValueProvider {
    /// Locale identifier the provider was built for (e.g. `en_US`).
    fn locale(&self) -> &str;

    /// Version 4 UUID in hyphenated textual form.
    fn uuid(&self, rng: &mut dyn RngCore) -> String;

    fn first_name(&self, rng: &mut dyn RngCore) -> String;
    fn last_name(&self, rng: &mut dyn RngCore) -> String;
    fn email(&self, rng: &mut dyn RngCore) -> String;
    fn company_email(&self, rng: &mut dyn RngCore) -> String;
    fn username(&self, rng: &mut dyn RngCore) -> String;
    fn phone_number(&self, rng: &mut dyn RngCore) -> String;

    /// Postal address, possibly spanning several lines.
    fn address(&self, rng: &mut dyn RngCore) -> String;
    fn street_address(&self, rng: &mut dyn RngCore) -> String;
    fn city(&self, rng: &mut dyn RngCore) -> String;
    fn state(&self, rng: &mut dyn RngCore) -> String;
    fn country(&self, rng: &mut dyn RngCore) -> String;
    fn postcode(&self, rng: &mut dyn RngCore) -> String;
    fn latitude(&self, rng: &mut dyn RngCore) -> f64;
    fn longitude(&self, rng: &mut dyn RngCore) -> f64;

    fn company_name(&self, rng: &mut dyn RngCore) -> String;
    /// Business-speak phrase, used as a company's industry.
    fn bs(&self, rng: &mut dyn RngCore) -> String;
    fn url(&self, rng: &mut dyn RngCore) -> String;
    fn catch_phrase(&self, rng: &mut dyn RngCore) -> String;

    /// Prose of at most `max_chars` characters.
    fn text(&self, max_chars: usize, rng: &mut dyn RngCore) -> String;
    fn word(&self, rng: &mut dyn RngCore) -> String;
    fn sentence(&self, rng: &mut dyn RngCore) -> String;

    /// Replaces `?` with a random ASCII letter and `#` with a random digit.
    fn bothify(&self, pattern: &str, rng: &mut dyn RngCore) -> String;
    /// Thirteen digit EAN barcode with a valid check digit.
    fn ean13(&self, rng: &mut dyn RngCore) -> String;
    fn currency_code(&self, rng: &mut dyn RngCore) -> String;

    fn date_of_birth(&self, rng: &mut dyn RngCore) -> NaiveDate;
    fn date_time_this_year(&self, rng: &mut dyn RngCore) -> NaiveDateTime;
    fn date_time_this_decade(&self, rng: &mut dyn RngCore) -> NaiveDateTime;

    fn boolean(&self, rng: &mut dyn RngCore) -> bool;
    /// Hex digest of a SHA-256 over random bytes.
    fn sha256(&self, rng: &mut dyn RngCore) -> String;
    /// Uniform draw from `[min, max]`.
    fn uniform(&self, min: f64, max: f64, rng: &mut dyn RngCore) -> f64;
}
