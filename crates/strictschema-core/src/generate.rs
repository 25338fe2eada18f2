//! Public entry points.
//!
//! A thin layer over [`crate::convert`]: it validates the root shape,
//! applies functional options on top of [`SchemaOptions::default`], runs
//! the engine with a fresh [`TraversalGuard`] at depth 0 and hands the
//! finished [`Schema`] back untouched. The `*_json` variants additionally
//! marshal the schema into a JSON string, ready to drop into a provider's
//! *response_format* request field.
//!
//! ```rust
//! use strictschema_core::{generate_schema_with, with_max_depth};
//! use strictschema_core::shape::{DescribeShape, Shape};
//!
//! struct Person;
//!
//! impl DescribeShape for Person {
//!     fn shape() -> Shape {
//!         Shape::record::<Self>("Person")
//!             .field::<String>("name", "name")
//!             .field::<i64>("age", "age")
//!             .finish()
//!     }
//! }
//!
//! let schema = generate_schema_with::<Person>(vec![with_max_depth(20)]).unwrap();
//! assert_eq!(schema["type"], serde_json::json!("object"));
//! ```

use crate::convert::{type_schema, Converted, Schema, TraversalGuard};
use crate::error::{Result, SchemaError};
use crate::options::SchemaOptions;
use crate::shape::{DescribeShape, Shape};

/// A deferred tweak to [`SchemaOptions`], applied on top of the defaults
/// once per generation call.
pub struct SchemaOption(Box<dyn FnOnce(&mut SchemaOptions)>);

impl SchemaOption {
    fn apply(self, options: &mut SchemaOptions) {
        (self.0)(options)
    }
}

/// Override the maximum nesting depth (default 50). A depth that is too
/// small for the described type surfaces as [`SchemaError::CircularRef`].
pub fn with_max_depth(depth: usize) -> SchemaOption {
    SchemaOption(Box::new(move |options| options.max_depth = depth))
}

/// Generate the strict-dialect schema for `T` with default options.
///
/// `T`'s shape must resolve to a record after indirection stripping —
/// the strict dialect only accepts an object at the schema root.
pub fn generate_schema<T: DescribeShape>() -> Result<Schema> {
    generate_schema_with::<T>(Vec::new())
}

/// Generate the strict-dialect schema for `T`, applying `options` on top
/// of [`SchemaOptions::default`].
pub fn generate_schema_with<T: DescribeShape>(options: Vec<SchemaOption>) -> Result<Schema> {
    let root = match T::shape().resolve() {
        Shape::Record(record) => record,
        _ => return Err(SchemaError::InvalidRoot),
    };

    let mut resolved = SchemaOptions::default();
    for option in options {
        option.apply(&mut resolved);
    }

    let mut guard = TraversalGuard::new();
    let converted = type_schema(Shape::Record(root), &mut guard, 0, &resolved);
    debug_assert!(guard.is_empty(), "traversal guard leaked an in-progress marker");

    match converted? {
        Converted::Node(schema) => Ok(schema),
        Converted::Primitive(_) => Err(SchemaError::InvalidRoot),
    }
}

/// [`generate_schema`] followed by [`serde_json::to_string`].
pub fn generate_schema_json<T: DescribeShape>() -> Result<String> {
    generate_schema_json_with::<T>(Vec::new())
}

/// [`generate_schema_with`] followed by [`serde_json::to_string`].
pub fn generate_schema_json_with<T: DescribeShape>(options: Vec<SchemaOption>) -> Result<String> {
    let schema = generate_schema_with::<T>(options)?;
    Ok(serde_json::to_string(&schema)?)
}
