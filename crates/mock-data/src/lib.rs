//! Deterministic hash-seeded mock data generation and template rendering.
//!
//! This crate turns an opaque identifier string into reproducible fake data:
//! the identifier is hashed into a 64-bit seed, and every chained generator
//! call derives its output from that seed plus a caller-chosen key. Templates
//! are plain [minijinja](https://docs.rs/minijinja) text with a catalogue of
//! generator functions registered, so the same identifier and template always
//! produce the same document.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Embedded reference datasets (names, countries, states, languages) with
//!   an optional on-disk override
//! - Seed derivation: identifier hashing, key chaining, and fresh
//!   time-derived seeds
//! - Field generators for names, emails, places, numbers, floats, booleans,
//!   IPv4 addresses, and text
//! - Template rendering with chained and unchained generator variants
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mock_data::{ReferenceData, render};
//!
//! let data = Arc::new(ReferenceData::builtin().expect("embedded datasets parse"));
//! let template = r#"{"name": "{{ FullNameChain(0) }}"}"#;
//!
//! let first = render(template, "user-42", &data).expect("render succeeds");
//! let second = render(template, "user-42", &data).expect("render succeeds");
//!
//! assert_eq!(first, second);
//! ```

mod collection;
mod error;
pub mod fields;
mod render;
pub mod seed;

pub use collection::{Country, Language, ReferenceData, UsState};
pub use error::{CollectionError, GenerateError, RenderError};
pub use fields::{CountryFormat, Gender, NumberRange, StateFormat};
pub use render::render;
