//! # `strictschema` – typed JSON Schema for strict structured outputs
//!
//! LLM providers that validate structured outputs (OpenAI's
//! *response_format = json_schema* with `strict: true` being the canonical
//! example) accept only a narrow JSON Schema dialect: every object must set
//! `additionalProperties`, every declared property must appear in
//! `required`, and optional fields are expressed as a union with `"null"`
//! rather than by omission. Writing those schemas by hand is tedious and
//! easy to get subtly wrong; this crate generates them from a description
//! of your response type.
//!
//! | Crate                    | What it provides                                         |
//! |--------------------------|----------------------------------------------------------|
//! | **`strictschema-core`**  | Shape descriptors, the conversion engine, entry points   |
//! | **`strictschema`**       | This umbrella: a single dependency line for the stack    |
//!
//! ## Design philosophy
//!
//! * **No procedural macros** – Shapes are described with ordinary trait
//!   impls and a fluent builder, so you can read and extend the code
//!   without magic.
//! * **Inline everything** – No `$ref`; repeated substructures are inlined
//!   because most providers will not resolve references.
//! * **Typed failure** – Unsupported kinds (maps, most prominently) and
//!   circular or too-deep types surface as [`SchemaError`] variants, never
//!   as a half-built schema.
//!
//! ## Quick example
//!
//! ```rust
//! use strictschema::{generate_schema_json, DescribeShape, Shape};
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
//! let json = generate_schema_json::<Address>().unwrap();
//! // Ready to use as the `schema` member of a json_schema response format.
//! assert!(json.contains("\"additionalProperties\":false"));
//! ```
//!
//! See `examples/generate_address.rs` for the full round trip: schema out,
//! model reply back in through `serde`.
#![doc(html_root_url = "https://docs.rs/strictschema/latest")]

pub use strictschema_core::*;
