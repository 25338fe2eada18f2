//! The shape-descriptor model.
//!
//! Rust exposes no field lists or tags at runtime, so the conversion engine
//! operates on an explicit description of a type instead: a [`Shape`]. Types
//! opt in through [`DescribeShape`], usually by composing the fluent
//! [`RecordBuilder`]:
//!
//! ```rust
//! use strictschema_core::shape::{DescribeShape, Shape};
//!
//! struct Item;
//!
//! impl DescribeShape for Item {
//!     fn shape() -> Shape {
//!         Shape::record::<Self>("Item")
//!             .field::<String>("id", "id")
//!             .field::<Vec<String>>("tags", "tags,omit-if-empty")
//!             .finish()
//!     }
//! }
//! ```
//!
//! Field and element shapes are stored as plain `fn() -> Shape` thunks
//! rather than eager values. Laziness is what lets a self-referential type
//! (`Node { next: Option<Box<Node>> }`) be *described* without recursing at
//! description time — the engine expands thunks on demand and detects the
//! cycle with its traversal guard, exactly the way reflection-based
//! implementations lean on the laziness of their type handles.
//!
//! Implementations for the standard library are provided for all primitive
//! widths, `Vec<T>`, fixed-size arrays, the common pointer wrappers, and —
//! so that the engine can *reject* them with a typed error — the map types.

use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// Lazy handle to a shape. A plain function pointer keeps descriptors
/// `Copy`, `Send` and `Sync` without any allocation.
pub type ShapeFn = fn() -> Shape;

/// Description of one type as seen by the conversion engine.
#[derive(Clone, Debug)]
pub enum Shape {
    /// UTF-8 text. Classified as `"string"`.
    String,
    /// Classified as `"boolean"`.
    Bool,
    /// Any signed or unsigned integer width. Classified as `"integer"`.
    Integer,
    /// Any floating-point width. Classified as `"number"`.
    Float,
    /// A pointer or nullable wrapper (`Box`, `Option`, `Rc`, `Arc`).
    /// Stripped by [`Shape::resolve`] with no schema effect; optionality
    /// in the emitted schema comes exclusively from the `omit-if-empty`
    /// tag directive.
    Indirect(ShapeFn),
    /// A sequence of one element type (`Vec<T>`, `[T; N]`).
    Sequence(ShapeFn),
    /// A structured record with named fields.
    Record(RecordShape),
    /// An open-ended dictionary. Always rejected by the engine: the strict
    /// dialect forbids object schemas without an enumerated property set.
    Map(ShapeFn),
}

impl Shape {
    /// Start describing a record. `T` supplies the identity used for cycle
    /// detection, so two descriptions of the same Rust type count as the
    /// same record.
    pub fn record<T: 'static>(name: &'static str) -> RecordBuilder {
        RecordBuilder {
            id: ShapeId(TypeId::of::<T>()),
            name,
            fields: Vec::new(),
        }
    }

    /// Strip indirection layers until a non-indirect shape is reached.
    /// Never fails; descriptor chains are finite by construction.
    pub fn resolve(self) -> Shape {
        let mut shape = self;
        while let Shape::Indirect(inner) = shape {
            shape = inner();
        }
        shape
    }
}

/// Identity of a record shape, keyed on the describing Rust type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(TypeId);

/// A described record: identity, display name and ordered field list.
#[derive(Clone, Debug)]
pub struct RecordShape {
    id: ShapeId,
    name: &'static str,
    fields: Vec<FieldShape>,
}

impl RecordShape {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldShape] {
        &self.fields
    }
}

/// One declared field of a record.
#[derive(Clone, Copy, Debug)]
pub struct FieldShape {
    name: &'static str,
    tag: &'static str,
    embedded: bool,
    shape: ShapeFn,
}

impl FieldShape {
    /// Declared field name, used when the tag does not override it.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw serialization tag, e.g. `"postalCode,omit-if-empty"`. May be
    /// empty.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Whether the field's record is flattened into the parent instead of
    /// nested under its own property.
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Expand the field's shape thunk.
    pub fn shape(&self) -> Shape {
        (self.shape)()
    }
}

/// Fluent builder for [`Shape::Record`] descriptions. Every method returns
/// `self`, enabling call-chaining; call [`Self::finish`] to obtain the
/// assembled shape.
pub struct RecordBuilder {
    id: ShapeId,
    name: &'static str,
    fields: Vec<FieldShape>,
}

impl RecordBuilder {
    /// Declare a field whose shape comes from `F`'s [`DescribeShape`]
    /// implementation. `tag` follows the serialization-tag grammar: the
    /// first comma-separated segment renames the field, a later
    /// `omit-if-empty` segment marks it optional, and a leading `-` skips
    /// it entirely. Pass `""` to keep the declared name.
    pub fn field<F: DescribeShape>(self, name: &'static str, tag: &'static str) -> Self {
        self.field_with(name, tag, F::shape)
    }

    /// Declare a field with an explicit shape thunk, for shapes that have
    /// no backing Rust type.
    pub fn field_with(mut self, name: &'static str, tag: &'static str, shape: ShapeFn) -> Self {
        self.fields.push(FieldShape {
            name,
            tag,
            embedded: false,
            shape,
        });
        self
    }

    /// Embed another record: its properties and required names are merged
    /// flat into this record's schema, consuming no nesting level.
    pub fn embed<F: DescribeShape>(mut self) -> Self {
        self.fields.push(FieldShape {
            name: "",
            tag: "",
            embedded: true,
            shape: F::shape,
        });
        self
    }

    /// Assemble the record shape.
    pub fn finish(self) -> Shape {
        Shape::Record(RecordShape {
            id: self.id,
            name: self.name,
            fields: self.fields,
        })
    }
}

/// Types that can describe their own shape to the conversion engine.
///
/// The `'static` bound exists because record identities are derived from
/// [`TypeId`]s.
pub trait DescribeShape: 'static {
    fn shape() -> Shape;
}

impl DescribeShape for String {
    fn shape() -> Shape {
        Shape::String
    }
}

impl DescribeShape for &'static str {
    fn shape() -> Shape {
        Shape::String
    }
}

impl DescribeShape for bool {
    fn shape() -> Shape {
        Shape::Bool
    }
}

macro_rules! describe_integers {
    ($($int:ty),* $(,)?) => {
        $(
            impl DescribeShape for $int {
                fn shape() -> Shape {
                    Shape::Integer
                }
            }
        )*
    };
}

describe_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl DescribeShape for f32 {
    fn shape() -> Shape {
        Shape::Float
    }
}

impl DescribeShape for f64 {
    fn shape() -> Shape {
        Shape::Float
    }
}

impl<T: DescribeShape> DescribeShape for Option<T> {
    fn shape() -> Shape {
        Shape::Indirect(T::shape)
    }
}

impl<T: DescribeShape> DescribeShape for Box<T> {
    fn shape() -> Shape {
        Shape::Indirect(T::shape)
    }
}

impl<T: DescribeShape> DescribeShape for Rc<T> {
    fn shape() -> Shape {
        Shape::Indirect(T::shape)
    }
}

impl<T: DescribeShape> DescribeShape for Arc<T> {
    fn shape() -> Shape {
        Shape::Indirect(T::shape)
    }
}

impl<T: DescribeShape> DescribeShape for Vec<T> {
    fn shape() -> Shape {
        Shape::Sequence(T::shape)
    }
}

impl<T: DescribeShape, const N: usize> DescribeShape for [T; N] {
    fn shape() -> Shape {
        Shape::Sequence(T::shape)
    }
}

impl<K: 'static, V: DescribeShape, S: 'static> DescribeShape for HashMap<K, V, S> {
    fn shape() -> Shape {
        Shape::Map(V::shape)
    }
}

impl<K: 'static, V: DescribeShape> DescribeShape for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Map(V::shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_keeps_non_indirect_shapes() {
        assert!(matches!(i64::shape().resolve(), Shape::Integer));
        assert!(matches!(Vec::<String>::shape().resolve(), Shape::Sequence(_)));
    }

    #[test]
    fn resolve_strips_single_and_stacked_wrappers() {
        assert!(matches!(Box::<i32>::shape().resolve(), Shape::Integer));
        assert!(matches!(Option::<String>::shape().resolve(), Shape::String));
        assert!(matches!(
            Option::<Box<Arc<f64>>>::shape().resolve(),
            Shape::Float
        ));
        assert!(matches!(
            Box::<Option<Vec<bool>>>::shape().resolve(),
            Shape::Sequence(_)
        ));
    }

    #[test]
    fn resolve_stops_at_maps() {
        assert!(matches!(
            Box::<HashMap<String, i32>>::shape().resolve(),
            Shape::Map(_)
        ));
    }

    #[test]
    fn record_identity_follows_the_describing_type() {
        struct A;
        struct B;

        let a = Shape::record::<A>("A").finish();
        let a_again = Shape::record::<A>("A").finish();
        let b = Shape::record::<B>("B").finish();

        let id = |shape: Shape| match shape {
            Shape::Record(record) => record.id(),
            other => panic!("expected a record, got {other:?}"),
        };

        assert_eq!(id(a), id(a_again));
        assert_ne!(id(b), id(Shape::record::<A>("A").finish()));
    }

    #[test]
    fn builder_preserves_declaration_order() {
        struct Ordered;

        let shape = Shape::record::<Ordered>("Ordered")
            .field::<String>("first", "")
            .field::<bool>("second", "")
            .field::<i32>("third", "")
            .finish();

        let Shape::Record(record) = shape else {
            panic!("expected a record");
        };
        let names: Vec<_> = record.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
