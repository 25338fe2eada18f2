//! End-to-end schema generation against realistic response shapes.

use std::collections::HashMap;

use serde_json::{json, Value};
use strictschema::{
    generate_schema, generate_schema_json, DescribeShape, Schema, SchemaError, Shape,
};

fn as_value(schema: Schema) -> Value {
    Value::Object(schema)
}

struct Untagged;
impl DescribeShape for Untagged {
    fn shape() -> Shape {
        Shape::record::<Self>("Untagged")
            .field::<String>("Name", "")
            .field::<i64>("Age", "")
            .field::<String>("Email", "")
            .finish()
    }
}

#[test]
fn untagged_fields_keep_their_declared_names() {
    let schema = generate_schema::<Untagged>().unwrap();
    assert_eq!(
        as_value(schema),
        json!({
            "type": "object",
            "properties": {
                "Name": {"type": "string"},
                "Age": {"type": "integer"},
                "Email": {"type": "string"}
            },
            "required": ["Name", "Age", "Email"],
            "additionalProperties": false
        })
    );
}

struct Tagged;
impl DescribeShape for Tagged {
    fn shape() -> Shape {
        Shape::record::<Self>("Tagged")
            .field::<String>("Name", "name")
            .field::<i64>("Age", "age")
            .field::<String>("Email", "email,omit-if-empty")
            .finish()
    }
}

#[test]
fn tagged_fields_rename_and_null_union_optionals() {
    let schema = generate_schema::<Tagged>().unwrap();
    assert_eq!(
        as_value(schema),
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "integer"},
                "email": {"type": ["string", "null"]}
            },
            "required": ["name", "age", "email"],
            "additionalProperties": false
        })
    );
}

#[test]
fn empty_first_tag_segment_uses_the_declared_name() {
    struct MixedTags;
    impl DescribeShape for MixedTags {
        fn shape() -> Shape {
            Shape::record::<Self>("MixedTags")
                .field::<String>("Name", ",omit-if-empty")
                .field::<String>("Email", "email")
                .finish()
        }
    }

    let schema = generate_schema::<MixedTags>().unwrap();
    assert_eq!(
        as_value(schema),
        json!({
            "type": "object",
            "properties": {
                "Name": {"type": ["string", "null"]},
                "email": {"type": "string"}
            },
            "required": ["Name", "email"],
            "additionalProperties": false
        })
    );
}

#[test]
fn nested_records_are_inlined() {
    struct Account;
    impl DescribeShape for Account {
        fn shape() -> Shape {
            Shape::record::<Self>("Account")
                .field::<Tagged>("user", "user")
                .field::<bool>("active", "active")
                .field::<Option<i64>>("count", "count,omit-if-empty")
                .finish()
        }
    }

    let schema = generate_schema::<Account>().unwrap();
    assert_eq!(
        as_value(schema),
        json!({
            "type": "object",
            "properties": {
                "user": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "age": {"type": "integer"},
                        "email": {"type": ["string", "null"]}
                    },
                    "required": ["name", "age", "email"],
                    "additionalProperties": false
                },
                "active": {"type": "boolean"},
                "count": {"type": ["integer", "null"]}
            },
            "required": ["user", "active", "count"],
            "additionalProperties": false
        })
    );
}

struct BaseInfo;
impl DescribeShape for BaseInfo {
    fn shape() -> Shape {
        Shape::record::<Self>("BaseInfo")
            .field::<i64>("ID", "id")
            .field::<String>("CreatedAt", "created_at")
            .finish()
    }
}

#[test]
fn embedded_records_merge_flat_into_the_parent() {
    struct ExtendedInfo;
    impl DescribeShape for ExtendedInfo {
        fn shape() -> Shape {
            Shape::record::<Self>("ExtendedInfo")
                .embed::<BaseInfo>()
                .field::<String>("Title", "title")
                .field::<Option<String>>("Content", "content,omit-if-empty")
                .finish()
        }
    }

    let schema = generate_schema::<ExtendedInfo>().unwrap();
    assert_eq!(
        as_value(schema),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer"},
                "created_at": {"type": "string"},
                "title": {"type": "string"},
                "content": {"type": ["string", "null"]}
            },
            "required": ["id", "created_at", "title", "content"],
            "additionalProperties": false
        })
    );
}

#[test]
fn later_field_overrides_an_embedded_property_of_the_same_name() {
    struct Overriding;
    impl DescribeShape for Overriding {
        fn shape() -> Shape {
            Shape::record::<Self>("Overriding")
                .embed::<BaseInfo>()
                .field::<String>("ID", "id")
                .finish()
        }
    }

    let schema = generate_schema::<Overriding>().unwrap();
    assert_eq!(
        as_value(schema),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "string"},
                "created_at": {"type": "string"}
            },
            "required": ["id", "created_at"],
            "additionalProperties": false
        })
    );
}

#[test]
fn embedding_does_not_consume_a_nesting_level() {
    use strictschema::{generate_schema_with, with_max_depth};

    struct Flat;
    impl DescribeShape for Flat {
        fn shape() -> Shape {
            Shape::record::<Self>("Flat")
                .embed::<BaseInfo>()
                .finish()
        }
    }

    // Depth 1 covers the root record's fields; the embedded record's
    // fields sit at the same level.
    assert!(generate_schema_with::<Flat>(vec![with_max_depth(1)]).is_ok());
}

struct Company;
impl DescribeShape for Company {
    fn shape() -> Shape {
        Shape::record::<Self>("Company")
            .field::<String>("name", "name")
            .field::<Address>("address", "address")
            .finish()
    }
}

struct Address;
impl DescribeShape for Address {
    fn shape() -> Shape {
        Shape::record::<Self>("Address")
            .field::<String>("street", "street")
            .field::<String>("city", "city")
            .field::<Option<String>>("zip_code", "zip_code,omit-if-empty")
            .finish()
    }
}

#[test]
fn arrays_of_records_and_optional_arrays() {
    struct Employee;
    impl DescribeShape for Employee {
        fn shape() -> Shape {
            Shape::record::<Self>("Employee")
                .field::<String>("name", "name")
                .field::<Vec<Company>>("companies", "companies")
                .field::<Option<Vec<String>>>("tags", "tags,omit-if-empty")
                .finish()
        }
    }

    let schema = generate_schema::<Employee>().unwrap();
    assert_eq!(
        as_value(schema),
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "companies": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": {"type": "string"},
                            "address": {
                                "type": "object",
                                "properties": {
                                    "street": {"type": "string"},
                                    "city": {"type": "string"},
                                    "zip_code": {"type": ["string", "null"]}
                                },
                                "required": ["street", "city", "zip_code"],
                                "additionalProperties": false
                            }
                        },
                        "required": ["name", "address"],
                        "additionalProperties": false
                    }
                },
                "tags": {
                    "anyOf": [
                        {"type": "array", "items": {"type": "string"}},
                        {"type": "null"}
                    ]
                }
            },
            "required": ["name", "companies", "tags"],
            "additionalProperties": false
        })
    );
}

#[test]
fn pointer_elements_inside_collections_are_transparent() {
    struct Item;
    impl DescribeShape for Item {
        fn shape() -> Shape {
            Shape::record::<Self>("Item")
                .field::<i64>("id", "id")
                .field::<Option<String>>("name", "name,omit-if-empty")
                .finish()
        }
    }
    struct Collection;
    impl DescribeShape for Collection {
        fn shape() -> Shape {
            Shape::record::<Self>("Collection")
                .field::<Vec<Box<Item>>>("items", "items")
                .finish()
        }
    }

    let schema = generate_schema::<Collection>().unwrap();
    assert_eq!(
        as_value(schema),
        json!({
            "type": "object",
            "properties": {
                "items": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer"},
                            "name": {"type": ["string", "null"]}
                        },
                        "required": ["id", "name"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["items"],
            "additionalProperties": false
        })
    );
}

#[test]
fn self_referential_type_fails_with_circular_ref() {
    struct TreeNode;
    impl DescribeShape for TreeNode {
        fn shape() -> Shape {
            Shape::record::<Self>("TreeNode")
                .field::<String>("value", "value")
                .field::<Option<Box<TreeNode>>>("next", "next,omit-if-empty")
                .finish()
        }
    }

    assert!(matches!(
        generate_schema::<TreeNode>(),
        Err(SchemaError::CircularRef)
    ));
}

#[test]
fn self_embedding_record_fails_with_circular_ref() {
    struct Recursive;
    impl DescribeShape for Recursive {
        fn shape() -> Shape {
            Shape::record::<Self>("Recursive")
                .field::<String>("label", "label")
                .embed::<Recursive>()
                .finish()
        }
    }

    assert!(matches!(
        generate_schema::<Recursive>(),
        Err(SchemaError::CircularRef)
    ));
}

#[test]
fn embedding_a_non_record_fails_with_unsupported_type() {
    struct BadEmbed;
    impl DescribeShape for BadEmbed {
        fn shape() -> Shape {
            Shape::record::<Self>("BadEmbed")
                .field::<String>("id", "id")
                .embed::<Vec<String>>()
                .finish()
        }
    }

    assert!(matches!(
        generate_schema::<BadEmbed>(),
        Err(SchemaError::UnsupportedType)
    ));
}

#[test]
fn map_fields_fail_with_unsupported_type() {
    struct WithMap;
    impl DescribeShape for WithMap {
        fn shape() -> Shape {
            Shape::record::<Self>("WithMap")
                .field::<HashMap<String, String>>("labels", "labels")
                .finish()
        }
    }
    struct WithMapArray;
    impl DescribeShape for WithMapArray {
        fn shape() -> Shape {
            Shape::record::<Self>("WithMapArray")
                .field::<Vec<HashMap<String, i64>>>("rows", "rows")
                .finish()
        }
    }

    assert!(matches!(
        generate_schema::<WithMap>(),
        Err(SchemaError::UnsupportedType)
    ));
    assert!(matches!(
        generate_schema::<WithMapArray>(),
        Err(SchemaError::UnsupportedType)
    ));
}

#[test]
fn json_output_matches_the_structured_schema() {
    let structured = generate_schema::<Tagged>().unwrap();
    let text = generate_schema_json::<Tagged>().unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, Value::Object(structured));
}
