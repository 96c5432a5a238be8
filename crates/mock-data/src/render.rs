//! Template rendering integration.
//!
//! Binds every field generator into a minijinja environment, in both
//! unchained (fresh-seeded) and chained (`*Chain(key, …)`) form, together
//! with the raw identifier and a loop-range helper, then executes the user
//! template. The two forms share one sampling implementation and differ only
//! in where the seed comes from.

use std::sync::Arc;

use minijinja::{Environment, Value, context};

use crate::collection::ReferenceData;
use crate::error::{GenerateError, RenderError};
use crate::fields::{self, CountryFormat, Gender, NumberRange, StateFormat};
use crate::seed::{fresh_seed, identifier_seed};

/// Ephemeral state for one render call: the identifier, its derived seed,
/// and a handle on the reference data. Dropped when rendering returns.
struct GenerationContext {
    seed: u64,
    data: Arc<ReferenceData>,
}

fn arg_error(err: GenerateError) -> minijinja::Error {
    minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, err.to_string())
}

impl GenerationContext {
    fn new(identifier: &str, data: Arc<ReferenceData>) -> Self {
        Self {
            seed: identifier_seed(identifier),
            data,
        }
    }

    /// Seed for a chained call: identifier seed offset by the chain key.
    fn chained(&self, key: i64) -> u64 {
        self.seed.wrapping_add(key.cast_unsigned())
    }

    fn first_name(&self, seed: u64, gender: Gender) -> Result<String, minijinja::Error> {
        fields::first_name(&self.data, seed, gender).map_err(arg_error)
    }

    fn last_name(&self, seed: u64) -> Result<String, minijinja::Error> {
        fields::last_name(&self.data, seed).map_err(arg_error)
    }

    fn full_name(&self, seed: u64, gender: Gender) -> Result<String, minijinja::Error> {
        fields::full_name(&self.data, seed, gender).map_err(arg_error)
    }

    fn email(&self, seed: u64) -> Result<String, minijinja::Error> {
        fields::email(&self.data, seed).map_err(arg_error)
    }

    fn city(&self, seed: u64) -> Result<String, minijinja::Error> {
        fields::city(&self.data, seed).map_err(arg_error)
    }

    fn country(&self, seed: u64, format: CountryFormat) -> Result<String, minijinja::Error> {
        fields::country(&self.data, seed, format).map_err(arg_error)
    }

    fn state_usa(&self, seed: u64, format: StateFormat) -> Result<String, minijinja::Error> {
        fields::state_usa(&self.data, seed, format).map_err(arg_error)
    }

    fn number(&self, seed: u64, first: i64, second: Option<i64>) -> Result<i64, minijinja::Error> {
        let range = NumberRange::from_args(first, second).map_err(arg_error)?;
        Ok(fields::number(seed, range))
    }

    fn float(
        &self,
        seed: u64,
        first: i64,
        second: Option<i64>,
        precision: Option<u32>,
    ) -> Result<f64, minijinja::Error> {
        let range = NumberRange::from_args(first, second).map_err(arg_error)?;
        Ok(fields::float(seed, range, precision))
    }

    fn paragraph(&self, seed: u64) -> Result<String, minijinja::Error> {
        fields::paragraph(&self.data, seed).map_err(arg_error)
    }
}

/// Register one fresh/chained function pair.
///
/// `$fresh` receives the generation context and a fresh seed; the chained
/// twin receives the seed derived from the identifier and the template's
/// chain key. Extra argument lists are spliced into both signatures.
macro_rules! seeded_pair {
    ($env:expr, $ctx:expr, $name:literal, $chain_name:literal,
     |$g:ident, $seed:ident $(, $arg:ident : $ty:ty)*| $body:expr) => {{
        let $g = Arc::clone($ctx);
        $env.add_function($name, move |$($arg: $ty),*| {
            let $seed = fresh_seed();
            $body
        });
        let $g = Arc::clone($ctx);
        $env.add_function($chain_name, move |key: i64 $(, $arg: $ty)*| {
            let $seed = $g.chained(key);
            $body
        });
    }};
}

#[expect(
    clippy::too_many_lines,
    reason = "a flat catalogue of generator registrations reads better than scattered helpers"
)]
fn install_functions(env: &mut Environment<'_>, ctx: &Arc<GenerationContext>) {
    seeded_pair!(env, ctx, "FirstName", "FirstNameChain", |g, seed| g
        .first_name(seed, Gender::Any));
    seeded_pair!(env, ctx, "FirstNameMale", "FirstNameMaleChain", |g, seed| g
        .first_name(seed, Gender::Male));
    seeded_pair!(
        env,
        ctx,
        "FirstNameFemale",
        "FirstNameFemaleChain",
        |g, seed| g.first_name(seed, Gender::Female)
    );
    seeded_pair!(env, ctx, "LastName", "LastNameChain", |g, seed| g
        .last_name(seed));
    seeded_pair!(env, ctx, "FullName", "FullNameChain", |g, seed| g
        .full_name(seed, Gender::Any));
    seeded_pair!(env, ctx, "FullNameMale", "FullNameMaleChain", |g, seed| g
        .full_name(seed, Gender::Male));
    seeded_pair!(
        env,
        ctx,
        "FullNameFemale",
        "FullNameFemaleChain",
        |g, seed| g.full_name(seed, Gender::Female)
    );
    seeded_pair!(env, ctx, "Email", "EmailChain", |g, seed| g.email(seed));
    seeded_pair!(env, ctx, "City", "CityChain", |g, seed| g.city(seed));
    seeded_pair!(env, ctx, "FullCountry", "FullCountryChain", |g, seed| g
        .country(seed, CountryFormat::Name));
    seeded_pair!(
        env,
        ctx,
        "TwoCharCountry",
        "TwoCharCountryChain",
        |g, seed| g.country(seed, CountryFormat::Iso2)
    );
    seeded_pair!(
        env,
        ctx,
        "ThreeCharCountry",
        "ThreeCharCountryChain",
        |g, seed| g.country(seed, CountryFormat::Iso3)
    );
    seeded_pair!(env, ctx, "StateUsaCode", "StateUsaCodeChain", |g, seed| g
        .state_usa(seed, StateFormat::Code));
    seeded_pair!(env, ctx, "StateUsaName", "StateUsaNameChain", |g, seed| g
        .state_usa(seed, StateFormat::Name));
    seeded_pair!(env, ctx, "Boolean", "BooleanChain", |g, seed| {
        let _ = &g;
        fields::boolean(seed)
    });
    seeded_pair!(env, ctx, "BooleanString", "BooleanStringChain", |g, seed| {
        let _ = &g;
        fields::boolean_string(seed)
    });
    seeded_pair!(
        env,
        ctx,
        "Number",
        "NumberChain",
        |g, seed, first: i64, second: Option<i64>| g.number(seed, first, second)
    );
    seeded_pair!(
        env,
        ctx,
        "NumberString",
        "NumberStringChain",
        |g, seed, first: i64, second: Option<i64>| g
            .number(seed, first, second)
            .map(|value| value.to_string())
    );
    seeded_pair!(
        env,
        ctx,
        "Float",
        "FloatChain",
        |g, seed, first: i64, second: Option<i64>, precision: Option<u32>| g
            .float(seed, first, second, precision)
    );
    seeded_pair!(
        env,
        ctx,
        "Decimal",
        "DecimalChain",
        |g, seed, first: i64, second: Option<i64>, precision: Option<u32>| g
            .float(seed, first, second, precision)
    );
    seeded_pair!(env, ctx, "IPv4", "IPv4Chain", |g, seed| {
        let _ = &g;
        fields::ipv4(seed)
    });
    seeded_pair!(env, ctx, "Paragraph", "ParagraphChain", |g, seed| g
        .paragraph(seed));

    env.add_function("Range", |n: i64| -> Result<Vec<i64>, minijinja::Error> {
        if n < 0 {
            return Err(minijinja::Error::new(
                minijinja::ErrorKind::InvalidOperation,
                format!("Range expects a non-negative bound, got {n}"),
            ));
        }
        Ok((1..=n).collect())
    });
}

/// Render a template against an identifier and a reference data collection.
///
/// Unchained generator calls draw fresh time-derived seeds; `*Chain(key, …)`
/// calls derive their seeds from the identifier, so re-rendering with the
/// same identifier reproduces them byte-identically. The output is opaque
/// text — callers decide whether it must be valid JSON, XML, or anything
/// else.
///
/// # Errors
///
/// Returns [`RenderError`] on template syntax errors and on generator
/// argument errors (for example an empty numeric range); no partial output
/// is produced.
pub fn render(
    template: &str,
    identifier: &str,
    data: &Arc<ReferenceData>,
) -> Result<String, RenderError> {
    let ctx = Arc::new(GenerationContext::new(identifier, Arc::clone(data)));
    let mut env = Environment::new();
    install_functions(&mut env, &ctx);
    env.add_global("hash", Value::from(identifier));
    let tmpl = env.template_from_str(template)?;
    Ok(tmpl.render(context! {})?)
}
