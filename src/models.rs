use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// An order as the backend reports it. Nested records the backend may omit
/// fall back to their defaults: a missing payment reads as unpaid, a missing
/// buyer as an unnamed one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<OrderProduct>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment: Payment,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buyer: Buyer,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "createdAt", default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// Snapshot of a catalog product taken when the order was placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderProduct {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Order {
    pub fn payment_label(&self) -> &'static str {
        if self.payment.success {
            "Success"
        } else {
            "Failure"
        }
    }

    pub fn quantity(&self) -> usize {
        self.products.len()
    }
}

impl OrderProduct {
    pub fn price_label(&self) -> String {
        format!("Price : {}", format_price(self.price))
    }
}

/// Prints a price the way the storefront always has: shortest decimal form,
/// no padding (`49.99`, `10`, `10.5`).
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        // -0.0 would otherwise print with a sign.
        return "0".to_string();
    }
    format!("{price}")
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Opaque session token. Empty tokens count as absent.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
