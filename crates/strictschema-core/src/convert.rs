//! The conversion engine: a depth-first recursion over a [`Shape`] that
//! assembles the strict-dialect JSON Schema node for it.
//!
//! All recursion funnels through [`type_schema`], which checks the depth
//! ceiling before any other work, strips indirection, cycle-checks records
//! against the [`TraversalGuard`] and then dispatches by kind. The guard
//! follows a strict stack discipline — a record is marked on entry to its
//! expansion and unmarked on every exit path, success or error — so the same
//! record may legally appear twice as sibling fields, but never while an
//! ancestor expansion of it is still open.
//!
//! The engine is a pure function of its inputs. Nothing persists across
//! top-level calls; concurrent conversions of distinct types are safe as
//! long as each constructs its own guard and options, which
//! [`crate::generate`] always does.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::options::SchemaOptions;
use crate::shape::{RecordShape, Shape, ShapeId};
use crate::tag::{interpret_tag, TagOutcome};

/// One JSON Schema node, expressed as a keyword→value mapping. Produced
/// fresh on every conversion and never mutated after being handed out.
pub type Schema = serde_json::Map<String, Value>;

/// Intermediate result of converting one shape: either a bare primitive
/// type name or a fully assembled schema node. Keeping the two cases as a
/// tagged variant gives the downstream wrapping rules (array items,
/// optional-field shaping) exhaustive handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    Primitive(&'static str),
    Node(Schema),
}

/// In-progress record set used to detect unbounded recursion. Scoped to
/// one top-level conversion and discarded afterwards.
#[derive(Debug, Default)]
pub struct TraversalGuard {
    expanding: HashSet<ShapeId>,
}

impl TraversalGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as being expanded. Returns `false` when an ancestor
    /// expansion of the same record is still open.
    fn enter(&mut self, id: ShapeId) -> bool {
        self.expanding.insert(id)
    }

    fn leave(&mut self, id: ShapeId) {
        self.expanding.remove(&id);
    }

    /// True when no expansion is in progress. Holds whenever control has
    /// returned to the top-level entry point.
    pub fn is_empty(&self) -> bool {
        self.expanding.is_empty()
    }
}

/// Shared dispatch: convert `shape` at `depth` nesting levels below the
/// root. Records and sequences each consume one level; indirection and
/// embedding consume none.
pub fn type_schema(
    shape: Shape,
    guard: &mut TraversalGuard,
    depth: usize,
    opts: &SchemaOptions,
) -> Result<Converted> {
    if depth > opts.max_depth {
        return Err(SchemaError::CircularRef);
    }
    match shape.resolve() {
        Shape::String => Ok(Converted::Primitive("string")),
        Shape::Bool => Ok(Converted::Primitive("boolean")),
        Shape::Integer => Ok(Converted::Primitive("integer")),
        Shape::Float => Ok(Converted::Primitive("number")),
        Shape::Indirect(inner) => type_schema(inner(), guard, depth, opts),
        Shape::Sequence(element) => {
            let items = sequence_items(element(), guard, depth + 1, opts)?;
            let mut node = Schema::new();
            node.insert("type".to_owned(), Value::String("array".to_owned()));
            node.insert("items".to_owned(), Value::Object(items));
            Ok(Converted::Node(node))
        }
        Shape::Record(record) => {
            if !guard.enter(record.id()) {
                return Err(SchemaError::CircularRef);
            }
            let assembled = record_schema(&record, guard, depth + 1, opts);
            guard.leave(record.id());
            Ok(Converted::Node(assembled?))
        }
        Shape::Map(_) => Err(SchemaError::UnsupportedType),
    }
}

/// Container builder: the `items` node for a sequence whose element is
/// `element`. A bare primitive element is wrapped as `{"type": name}`.
fn sequence_items(
    element: Shape,
    guard: &mut TraversalGuard,
    depth: usize,
    opts: &SchemaOptions,
) -> Result<Schema> {
    match type_schema(element, guard, depth, opts)? {
        Converted::Primitive(name) => Ok(primitive_node(name)),
        Converted::Node(node) => Ok(node),
    }
}

/// Record builder: the full object node for `record`. The caller has
/// already marked the record in the guard.
fn record_schema(
    record: &RecordShape,
    guard: &mut TraversalGuard,
    depth: usize,
    opts: &SchemaOptions,
) -> Result<Schema> {
    let (properties, required) = record_properties(record, guard, depth, opts)?;
    let mut node = Schema::new();
    node.insert("type".to_owned(), Value::String("object".to_owned()));
    node.insert("properties".to_owned(), Value::Object(properties));
    node.insert(
        "additionalProperties".to_owned(),
        Value::Bool(opts.allow_additional_properties),
    );
    if !required.is_empty() {
        node.insert(
            "required".to_owned(),
            Value::Array(
                required
                    .into_iter()
                    .map(|name| Value::String(name.to_owned()))
                    .collect(),
            ),
        );
    }
    Ok(node)
}

/// Iterate the record's declared fields and assemble its `properties`
/// mapping and `required` list.
fn record_properties(
    record: &RecordShape,
    guard: &mut TraversalGuard,
    depth: usize,
    opts: &SchemaOptions,
) -> Result<(Schema, Vec<&'static str>)> {
    let mut properties = Schema::new();
    let mut required: Vec<&'static str> = Vec::new();

    for field in record.fields() {
        if field.is_embedded() {
            let embedded = match field.shape().resolve() {
                Shape::Record(inner) => inner,
                _ => return Err(SchemaError::UnsupportedType),
            };
            // Embedding flattens at the same depth, but still counts as an
            // open expansion: a record embedding itself is a cycle.
            if !guard.enter(embedded.id()) {
                return Err(SchemaError::CircularRef);
            }
            let merged = record_properties(&embedded, guard, depth, opts);
            guard.leave(embedded.id());
            let (embedded_properties, embedded_required) = merged?;
            for (key, value) in embedded_properties {
                properties.insert(key, value);
            }
            for name in embedded_required {
                push_required(&mut required, name);
            }
            continue;
        }

        let (name, optional) = match interpret_tag(field.name(), field.tag()) {
            TagOutcome::Skip => continue,
            TagOutcome::Keep { name, optional } => (name, optional),
        };

        let value = match type_schema(field.shape(), guard, depth, opts)? {
            Converted::Primitive(type_name) if optional => {
                let mut union = Schema::new();
                union.insert(
                    "type".to_owned(),
                    Value::Array(vec![
                        Value::String(type_name.to_owned()),
                        Value::String("null".to_owned()),
                    ]),
                );
                Value::Object(union)
            }
            Converted::Primitive(type_name) => Value::Object(primitive_node(type_name)),
            Converted::Node(node) if optional => {
                let mut union = Schema::new();
                union.insert(
                    "anyOf".to_owned(),
                    Value::Array(vec![
                        Value::Object(node),
                        Value::Object(primitive_node("null")),
                    ]),
                );
                Value::Object(union)
            }
            Converted::Node(node) => Value::Object(node),
        };

        properties.insert(name.to_owned(), value);
        // Strict mode lists every property in `required`; optionality is
        // carried by the null-union above, never by omission here.
        push_required(&mut required, name);
    }

    Ok((properties, required))
}

/// Append `name` unless present. Collisions only arise when an embedded
/// record and a sibling field emit the same property name; the property
/// mapping is last-writer-wins, so `required` must not double-count.
fn push_required(required: &mut Vec<&'static str>, name: &'static str) {
    if !required.contains(&name) {
        required.push(name);
    }
}

fn primitive_node(name: &str) -> Schema {
    let mut node = Schema::new();
    node.insert("type".to_owned(), Value::String(name.to_owned()));
    node
}
