use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result, msg};

/// A catalog product as stored in the `products` table.
///
/// `Default` is the zero-valued product returned when a lookup matches no row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub price: f64,
    /// Unix seconds, set on insert
    pub created_at: Option<i64>,
    /// Unix seconds, bumped on every effective update
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub title: String,
    pub description: String,
    pub status: String,
    pub price: f64,
}

impl CreateProduct {
    pub fn validate(&self) -> Result<()> {
        validate_price(self.price)
    }
}

/// Partial update. `None` (absent or `null` in JSON) leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl UpdateProduct {
    pub fn validate(&self) -> Result<()> {
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.price.is_none()
    }
}

fn validate_price(price: f64) -> Result<()> {
    if price < 0.0 {
        return Err(AppError::BadRequest(msg::PRICE_NEGATIVE.into()));
    }
    Ok(())
}
