//! Generate the strict-mode schema for an address record and deserialize a
//! model reply against the same type.
//!
//! The printed schema is exactly what goes into the `schema` member of an
//! OpenAI `json_schema` response format (with `strict: true`); the reply
//! parsing below uses a canned JSON string where a real integration would
//! read the message content returned by the API.

use anyhow::Result;
use serde::Deserialize;
use strictschema::{generate_schema, DescribeShape, Shape};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressItem {
    id: String,
    name: String,
    brief_intro: String,
    tags: Vec<String>,
    address: Address,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Address {
    city: String,
    country: String,
    line1: String,
    line2: Option<String>,
    postal_code: Option<String>,
}

impl DescribeShape for AddressItem {
    fn shape() -> Shape {
        Shape::record::<Self>("AddressItem")
            .field::<String>("id", "id")
            .field::<String>("name", "name")
            .field::<String>("brief_intro", "briefIntro")
            .field::<Vec<String>>("tags", "tags")
            .field::<Address>("address", "address")
            .finish()
    }
}

impl DescribeShape for Address {
    fn shape() -> Shape {
        Shape::record::<Self>("Address")
            .field::<String>("city", "city")
            .field::<String>("country", "country")
            .field::<String>("line1", "line1")
            .field::<Option<String>>("line2", "line2,omit-if-empty")
            .field::<Option<String>>("postal_code", "postalCode,omit-if-empty")
            .finish()
    }
}

fn main() -> Result<()> {
    let schema = generate_schema::<AddressItem>()?;
    println!("response_format schema:");
    println!("{}", serde_json::to_string_pretty(&schema)?);

    // Stand-in for chat.choices[0].message.content.
    let reply = r#"{
        "id": "addr_001",
        "name": "Fyodor Dostoevsky",
        "briefIntro": "Novelist, resident of Kuznechny Lane.",
        "tags": ["historical", "writer"],
        "address": {
            "city": "Saint Petersburg",
            "country": "Russia",
            "line1": "Kuznechny Lane 5",
            "line2": null,
            "postalCode": "191002"
        }
    }"#;

    let address: AddressItem = serde_json::from_str(reply)?;
    println!("\nparsed reply: {address:#?}");
    Ok(())
}
