use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

pub mod postgrest;

/// A row of the `restaurants` table.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Restaurant {
    #[serde(deserialize_with = "deserialize_id")]
    pub id           : String,
    pub name         : String,
    pub cuisine_type : String,
    pub city         : String,
    pub rating       : f64,
    pub price_range  : String,
    #[serde(default)]
    pub image_url    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description  : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address      : Option<String>,
}

/// Tables with an identity column return numeric ids.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}

/// A row to be upserted, the table assigns the id.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewRestaurant {
    pub name         : String,
    pub cuisine_type : String,
    pub city         : String,
    pub rating       : f64,
    pub price_range  : String,
    #[serde(default)]
    pub image_url    : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description  : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address      : Option<String>,
}

/// Error body returned by the table's REST endpoint.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[cfg_attr(feature = "extra-derive", derive(thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_table_row_with_missing_optionals() {
        let json = r#"{
            "id": "7f1c",
            "name": "Kashi Art Cafe",
            "cuisine_type": "Cafe",
            "city": "Kochi",
            "rating": 4.6,
            "price_range": "$$",
            "image_url": null
        }"#;
        let row: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(row.name, "Kashi Art Cafe");
        assert_eq!(row.image_url, None);
        assert_eq!(row.address, None);
        assert_eq!(row.description, None);
    }

    #[test]
    fn deserialize_numeric_and_textual_ids() {
        let row = |id: &str| {
            format!(
                r#"{{"id": {id}, "name": "Paragon", "cuisine_type": "Kerala", "city": "Kochi", "rating": 4.7, "price_range": "$$"}}"#
            )
        };
        let numeric: Restaurant = serde_json::from_str(&row("1")).unwrap();
        assert_eq!(numeric.id, "1");
        let uuid: Restaurant =
            serde_json::from_str(&row(r#""0b6f0c7e-3c1e-4a52-9d4e-2f4f5b1c8a10""#)).unwrap();
        assert_eq!(uuid.id, "0b6f0c7e-3c1e-4a52-9d4e-2f4f5b1c8a10");
        let max: Restaurant = serde_json::from_str(&row(&u64::MAX.to_string())).unwrap();
        assert_eq!(max.id, u64::MAX.to_string());
        assert!(serde_json::from_str::<Restaurant>(&row("null")).is_err());
    }

    #[test]
    fn serialize_new_row_without_empty_optionals() {
        let row = NewRestaurant {
            name: "Paragon".into(),
            cuisine_type: "Kerala".into(),
            city: "Kochi".into(),
            rating: 4.7,
            price_range: "$$".into(),
            image_url: "https://example.com/p.jpg".into(),
            description: None,
            address: Some("MG Road".into()),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["address"], "MG Road");
        assert!(json.get("description").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn deserialize_error_body() {
        let json = r#"{"code":"42P01","details":null,"hint":null,"message":"relation \"public.restaurants\" does not exist"}"#;
        let err: Error = serde_json::from_str(json).unwrap();
        assert_eq!(err.code.as_deref(), Some("42P01"));
        assert_eq!(
            err.message,
            "relation \"public.restaurants\" does not exist"
        );
    }
}
