//! Field generators: pure functions from a seed to one mock value.
//!
//! Every generator builds an independent `ChaCha8Rng` from the seed it is
//! given, so calls never share random state: concurrent calls cannot
//! interfere, and two calls with equal seeds diverge identically. The seed
//! source decides the mode — wall-clock nanoseconds for fresh draws,
//! [`chained_seed`](crate::seed::chained_seed) for reproducible ones — while
//! the sampling logic below is common to both.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::collection::ReferenceData;
use crate::error::GenerateError;

/// Gender selector for name draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    /// Flip a seed-derived boolean to choose the pool.
    #[default]
    Any,
    /// Draw from the male name pool.
    Male,
    /// Draw from the female name pool.
    Female,
}

/// Output format for country draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryFormat {
    /// Official country name.
    Name,
    /// Two-letter ISO code.
    Iso2,
    /// Three-letter ISO code.
    Iso3,
}

/// Output format for US state draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    /// Full state name.
    Name,
    /// Two-letter postal code.
    Code,
}

/// Validated half-open integer range `[min, max)`.
///
/// Replaces the source material's variadic range arguments with explicit
/// defaulting: one template argument is an upper bound over `[0, max)`, two
/// arguments are `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    /// Inclusive lower bound.
    pub min: i64,
    /// Exclusive upper bound.
    pub max: i64,
}

impl NumberRange {
    /// Build a range from a template call's positional arguments.
    ///
    /// With `second` absent the range is `[0, first)`; otherwise it is
    /// `[first, second)`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidRange`] when the resulting range holds
    /// no values.
    pub fn from_args(first: i64, second: Option<i64>) -> Result<Self, GenerateError> {
        let (min, max) = match second {
            Some(max) => (first, max),
            None => (0, first),
        };
        if min >= max {
            return Err(GenerateError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }
}

fn rng_for(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn pick<'a, T>(seed: u64, pool: &'a [T], name: &'static str) -> Result<&'a T, GenerateError> {
    pool.choose(&mut rng_for(seed))
        .ok_or(GenerateError::EmptyPool { pool: name })
}

/// Draw a first name.
///
/// With [`Gender::Any`] the pool is chosen by a boolean derived from the same
/// seed, using a random stream separate from the one that draws the name.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyPool`] if the selected pool is empty.
pub fn first_name(
    data: &ReferenceData,
    seed: u64,
    gender: Gender,
) -> Result<String, GenerateError> {
    let (pool, name) = match gender {
        Gender::Male => (data.male_names(), "male_names"),
        Gender::Female => (data.female_names(), "female_names"),
        Gender::Any => {
            if boolean(seed) {
                (data.male_names(), "male_names")
            } else {
                (data.female_names(), "female_names")
            }
        }
    };
    pick(seed, pool, name).cloned()
}

/// Draw a last name.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyPool`] if the last-name pool is empty.
pub fn last_name(data: &ReferenceData, seed: u64) -> Result<String, GenerateError> {
    pick(seed, data.last_names(), "last_names").cloned()
}

/// Compose a full name from the first- and last-name draws for one seed.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyPool`] if either pool is empty.
pub fn full_name(
    data: &ReferenceData,
    seed: u64,
    gender: Gender,
) -> Result<String, GenerateError> {
    Ok(format!(
        "{} {}",
        first_name(data, seed, gender)?,
        last_name(data, seed)?
    ))
}

/// Compose an email address from one seed.
///
/// Lower-cases the first- and last-name draws and appends a domain draw:
/// `{first}.{last}.example@{domain}`. All three components derive from the
/// same seed, so the chained form reproduces byte-identically.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyPool`] if any contributing pool is empty.
pub fn email(data: &ReferenceData, seed: u64) -> Result<String, GenerateError> {
    let first = first_name(data, seed, Gender::Any)?.to_lowercase();
    let last = last_name(data, seed)?.to_lowercase();
    let domain = pick(seed, data.email_domains(), "email_domains")?;
    Ok(format!("{first}.{last}.example@{domain}"))
}

/// Draw a city: the capital of a uniformly drawn country.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyPool`] if the country pool is empty.
pub fn city(data: &ReferenceData, seed: u64) -> Result<String, GenerateError> {
    Ok(pick(seed, data.countries(), "countries")?.capital.clone())
}

/// Draw a country in the requested format.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyPool`] if the country pool is empty.
pub fn country(
    data: &ReferenceData,
    seed: u64,
    format: CountryFormat,
) -> Result<String, GenerateError> {
    let record = pick(seed, data.countries(), "countries")?;
    Ok(match format {
        CountryFormat::Name => record.name.clone(),
        CountryFormat::Iso2 => record.iso2.clone(),
        CountryFormat::Iso3 => record.iso3.clone(),
    })
}

/// Draw a US state in the requested format.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyPool`] if the state pool is empty.
pub fn state_usa(
    data: &ReferenceData,
    seed: u64,
    format: StateFormat,
) -> Result<String, GenerateError> {
    let record = pick(seed, data.states(), "usa_states")?;
    Ok(match format {
        StateFormat::Name => record.name.clone(),
        StateFormat::Code => record.code.clone(),
    })
}

/// Draw a boolean.
#[must_use]
pub fn boolean(seed: u64) -> bool {
    rng_for(seed).random_range(0..2_u8) > 0
}

/// Draw a boolean rendered as `"true"` or `"false"`.
#[must_use]
pub fn boolean_string(seed: u64) -> &'static str {
    if boolean(seed) { "true" } else { "false" }
}

/// Draw an integer from `[range.min, range.max)`.
#[must_use]
pub fn number(seed: u64, range: NumberRange) -> i64 {
    rng_for(seed).random_range(range.min..range.max)
}

/// Draw a float from `[range.min, range.max)`.
///
/// When `precision` is given the result is truncated, not rounded, to that
/// many decimal digits via scale-multiply-truncate-divide. The truncation
/// bias is deliberate and matched by tests.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "uniform scaling and decimal truncation are the point of this generator"
)]
pub fn float(seed: u64, range: NumberRange, precision: Option<u32>) -> f64 {
    let unit: f64 = rng_for(seed).random();
    // Widths near the full i64 span overflow integer subtraction, so the
    // spread is computed in float space.
    let spread = range.max as f64 - range.min as f64;
    let mut result = unit * spread + range.min as f64;
    if let Some(digits) = precision {
        let factor = 10_f64.powi(digits.min(15).cast_signed());
        result = ((result * factor) as i64) as f64 / factor;
    }
    result
}

/// Draw an IPv4 address: four octet draws from one random stream.
#[must_use]
pub fn ipv4(seed: u64) -> String {
    let mut rng = rng_for(seed);
    let octets: [u8; 4] = rng.random();
    let [a, b, c, d] = octets;
    format!("{a}.{b}.{c}.{d}")
}

/// Draw a filler paragraph.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyPool`] if the paragraph pool is empty.
pub fn paragraph(data: &ReferenceData, seed: u64) -> Result<String, GenerateError> {
    pick(seed, data.paragraphs(), "paragraphs").cloned()
}
