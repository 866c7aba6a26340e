use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned to a receipt when it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    /// Fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single purchased line item. Both fields are kept as submitted so that malformed values
/// can be scored as zero rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: Some(short_description.into()),
            price: Some(price.into()),
        }
    }
}

/// Purchase record as submitted by a caller, before an id or points are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub retailer: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub purchase_date: Option<String>,
    /// 24-hour clock time, `HH:MM`.
    #[serde(default)]
    pub purchase_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: Option<String>,
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Item>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}
