//! Core of the **strictschema** workspace: a shape-descriptor model and the
//! recursive engine that turns a described Rust type into a JSON Schema
//! accepted by strict-mode structured-output APIs (e.g. OpenAI's
//! *response_format = json_schema* with `strict: true`).
//!
//! Strict mode narrows JSON Schema considerably: every object node must set
//! `additionalProperties` explicitly, every declared property must be listed
//! in `required`, and optionality is expressed as a union with `"null"`
//! instead of omission. This crate produces exactly that dialect and nothing
//! else — there is no `$ref` support and open-ended maps are rejected.
//!
//! Rust has no runtime reflection, so types opt in by describing their own
//! shape through the [`shape::DescribeShape`] trait and the fluent
//! [`shape::RecordBuilder`]:
//!
//! ```rust
//! use strictschema_core::generate_schema;
//! use strictschema_core::shape::{DescribeShape, Shape};
//!
//! struct Address;
//!
//! impl DescribeShape for Address {
//!     fn shape() -> Shape {
//!         Shape::record::<Self>("Address")
//!             .field::<String>("city", "city")
//!             .field::<String>("country", "country")
//!             .field::<Option<String>>("postal_code", "postalCode,omit-if-empty")
//!             .finish()
//!     }
//! }
//!
//! let schema = generate_schema::<Address>().unwrap();
//! assert_eq!(schema["additionalProperties"], serde_json::json!(false));
//! ```
//!
//! Module overview:
//!
//! | Module            | What it provides                                          |
//! |-------------------|-----------------------------------------------------------|
//! | [`shape`]         | Descriptor model, `DescribeShape`, std-library impls      |
//! | [`convert`]       | Recursive dispatch, record/sequence builders, guard       |
//! | [`options`]       | [`options::SchemaOptions`] (`additionalProperties`, depth)|
//! | [`generate`]      | Public entry points and functional options                |
//! | [`error`]         | [`error::SchemaError`] and the crate-wide `Result` alias  |

pub mod convert;
pub mod error;
pub mod generate;
pub mod options;
pub mod shape;

mod tag;

pub use convert::{Converted, Schema, TraversalGuard};
pub use error::{Result, SchemaError};
pub use generate::{
    generate_schema, generate_schema_json, generate_schema_json_with, generate_schema_with,
    with_max_depth, SchemaOption,
};
pub use options::SchemaOptions;
pub use shape::{DescribeShape, RecordBuilder, Shape};
