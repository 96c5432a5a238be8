//! Immutable reference data backing the field generators.
//!
//! A [`ReferenceData`] collection is loaded once at process start and never
//! mutated afterwards. Construction validates that every sequence is
//! non-empty, so categorical draws never observe an empty pool.

use std::path::Path;

use serde::Deserialize;

use crate::error::CollectionError;

/// A country record with its ISO codes and capital city.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    /// Official country name.
    pub name: String,
    /// Two-letter ISO 3166-1 code.
    pub iso2: String,
    /// Three-letter ISO 3166-1 code.
    pub iso3: String,
    /// Capital city.
    pub capital: String,
}

/// A United States state record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsState {
    /// Full state name.
    pub name: String,
    /// Two-letter postal code.
    pub code: String,
}

/// A language record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    /// English name of the language.
    pub name: String,
    /// ISO 639-1 code.
    pub code: String,
}

/// Immutable collection of reference values used by the generators.
///
/// Load it once with [`ReferenceData::builtin`] or
/// [`ReferenceData::from_dir`] and share it behind an `Arc`; generation only
/// ever reads from it.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    countries: Vec<Country>,
    states: Vec<UsState>,
    languages: Vec<Language>,
    male_names: Vec<String>,
    female_names: Vec<String>,
    last_names: Vec<String>,
    email_domains: Vec<String>,
    paragraphs: Vec<String>,
}

/// File names expected inside a dataset directory.
const DATASET_FILES: [(&str, &str); 8] = [
    ("countries", "countries.json"),
    ("usa_states", "usa_states.json"),
    ("languages", "languages.json"),
    ("male_names", "male_names.json"),
    ("female_names", "female_names.json"),
    ("last_names", "last_names.json"),
    ("email_domains", "email_domains.json"),
    ("paragraphs", "paragraphs.json"),
];

fn parse_dataset<T>(name: &'static str, json: &str) -> Result<Vec<T>, CollectionError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(json).map_err(|err| CollectionError::ParseError {
        name,
        message: err.to_string(),
    })
}

fn read_dataset<T>(dir: &Path, name: &'static str, file: &str) -> Result<Vec<T>, CollectionError>
where
    T: for<'de> Deserialize<'de>,
{
    let path = dir.join(file);
    let json = std::fs::read_to_string(&path).map_err(|err| CollectionError::IoError {
        path: path.clone(),
        message: err.to_string(),
    })?;
    parse_dataset(name, &json)
}

fn ensure_non_empty<T>(name: &'static str, values: &[T]) -> Result<(), CollectionError> {
    if values.is_empty() {
        return Err(CollectionError::EmptyDataset { name });
    }
    Ok(())
}

impl ReferenceData {
    /// Load the datasets embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError`] if an embedded dataset fails to parse or
    /// is empty; both indicate a packaging defect rather than runtime input.
    pub fn builtin() -> Result<Self, CollectionError> {
        Self::from_parts(
            parse_dataset("countries", include_str!("../data/countries.json"))?,
            parse_dataset("usa_states", include_str!("../data/usa_states.json"))?,
            parse_dataset("languages", include_str!("../data/languages.json"))?,
            parse_dataset("male_names", include_str!("../data/male_names.json"))?,
            parse_dataset("female_names", include_str!("../data/female_names.json"))?,
            parse_dataset("last_names", include_str!("../data/last_names.json"))?,
            parse_dataset("email_domains", include_str!("../data/email_domains.json"))?,
            parse_dataset("paragraphs", include_str!("../data/paragraphs.json"))?,
        )
    }

    /// Load every dataset from a directory of JSON files.
    ///
    /// The directory must contain `countries.json`, `usa_states.json`,
    /// `languages.json`, `male_names.json`, `female_names.json`,
    /// `last_names.json`, `email_domains.json`, and `paragraphs.json`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError`] when a file is unreadable, fails to parse,
    /// or parses to an empty sequence.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CollectionError> {
        let dir = dir.as_ref();
        let [countries, usa_states, languages, male_names, female_names, last_names, email_domains, paragraphs] =
            DATASET_FILES;
        Self::from_parts(
            read_dataset(dir, countries.0, countries.1)?,
            read_dataset(dir, usa_states.0, usa_states.1)?,
            read_dataset(dir, languages.0, languages.1)?,
            read_dataset(dir, male_names.0, male_names.1)?,
            read_dataset(dir, female_names.0, female_names.1)?,
            read_dataset(dir, last_names.0, last_names.1)?,
            read_dataset(dir, email_domains.0, email_domains.1)?,
            read_dataset(dir, paragraphs.0, paragraphs.1)?,
        )
    }

    #[expect(
        clippy::too_many_arguments,
        reason = "flat constructor for a record with one field per dataset"
    )]
    fn from_parts(
        countries: Vec<Country>,
        states: Vec<UsState>,
        languages: Vec<Language>,
        male_names: Vec<String>,
        female_names: Vec<String>,
        last_names: Vec<String>,
        email_domains: Vec<String>,
        paragraphs: Vec<String>,
    ) -> Result<Self, CollectionError> {
        ensure_non_empty("countries", &countries)?;
        ensure_non_empty("usa_states", &states)?;
        ensure_non_empty("languages", &languages)?;
        ensure_non_empty("male_names", &male_names)?;
        ensure_non_empty("female_names", &female_names)?;
        ensure_non_empty("last_names", &last_names)?;
        ensure_non_empty("email_domains", &email_domains)?;
        ensure_non_empty("paragraphs", &paragraphs)?;
        Ok(Self {
            countries,
            states,
            languages,
            male_names,
            female_names,
            last_names,
            email_domains,
            paragraphs,
        })
    }

    /// Country records.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// United States state records.
    #[must_use]
    pub fn states(&self) -> &[UsState] {
        &self.states
    }

    /// Language records.
    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Male first names.
    #[must_use]
    pub fn male_names(&self) -> &[String] {
        &self.male_names
    }

    /// Female first names.
    #[must_use]
    pub fn female_names(&self) -> &[String] {
        &self.female_names
    }

    /// Last names.
    #[must_use]
    pub fn last_names(&self) -> &[String] {
        &self.last_names
    }

    /// Email domains.
    #[must_use]
    pub fn email_domains(&self) -> &[String] {
        &self.email_domains
    }

    /// Filler paragraphs. Entries are single-line so values can sit directly
    /// inside JSON string literals.
    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }
}
