//! Interpretation of field serialization tags.
//!
//! The grammar is a comma-separated directive list, modelled on the tags
//! used by mainstream JSON encoders: the first segment renames the field
//! (an empty first segment keeps the declared name), the `omit-if-empty`
//! directive marks it optional, and a leading `-` removes it from the
//! schema entirely. Unknown directives are ignored so that tags written
//! for richer encoders keep working here.

/// Directive that marks a field as optional.
const OMIT_IF_EMPTY: &str = "omit-if-empty";

/// First segment that removes a field from the schema.
const SKIP_SENTINEL: &str = "-";

/// Result of interpreting one field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagOutcome {
    /// The field is omitted from `properties` and `required` entirely.
    Skip,
    /// The field is emitted under `name`; `optional` selects null-union
    /// shaping.
    Keep {
        name: &'static str,
        optional: bool,
    },
}

pub(crate) fn interpret_tag(field_name: &'static str, tag: &'static str) -> TagOutcome {
    if tag.is_empty() {
        return TagOutcome::Keep {
            name: field_name,
            optional: false,
        };
    }
    let mut segments = tag.split(',');
    let first = segments.next().unwrap_or_default();
    if first == SKIP_SENTINEL {
        return TagOutcome::Skip;
    }
    let name = if first.is_empty() { field_name } else { first };
    let optional = segments.any(|segment| segment == OMIT_IF_EMPTY);
    TagOutcome::Keep { name, optional }
}
