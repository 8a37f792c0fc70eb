use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use super::{deserialize_optional_timestamp, validate_not_blank};
use crate::entities::product;

pub const DEFAULT_UNIT: &str = "adet";
pub const DEFAULT_STOCK: i32 = 0;
pub const DEFAULT_IS_ACTIVE: bool = true;
pub const DEFAULT_IS_FEATURED: bool = false;

/// Decimal places kept for money and percentage columns
pub const DECIMAL_SCALE: u32 = 2;

/// Product create/replace payload.
///
/// Fields with a default accept an explicit `null`, which means "use the default".
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "Tam Yağlı Süt 1L",
    "brand": "Sütaş",
    "price": 42.5,
    "discount_rate": 10,
    "final_price": 38.25,
    "stock": 120,
    "unit": "adet",
    "barcode": "8690000000017",
    "expiration_date": "2025-09-01T00:00:00Z",
    "is_active": true,
    "is_featured": false,
    "category_id": 1
}))]
pub struct ProductInput {
    #[validate(length(min = 1, max = 150), custom = "validate_not_blank")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[schema(value_type = f64, example = 42.5)]
    pub price: Decimal,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 10)]
    pub discount_rate: Option<Decimal>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub final_price: Option<Decimal>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub unit: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
}

impl ProductInput {
    pub fn price(&self) -> Decimal {
        self.price.round_dp(DECIMAL_SCALE)
    }

    pub fn discount_rate(&self) -> Decimal {
        self.discount_rate
            .map(|d| d.round_dp(DECIMAL_SCALE))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn final_price(&self) -> Option<Decimal> {
        self.final_price.map(|d| d.round_dp(DECIMAL_SCALE))
    }

    pub fn stock(&self) -> i32 {
        self.stock.unwrap_or(DEFAULT_STOCK)
    }

    pub fn unit(&self) -> String {
        self.unit
            .clone()
            .unwrap_or_else(|| DEFAULT_UNIT.to_string())
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(DEFAULT_IS_ACTIVE)
    }

    pub fn is_featured(&self) -> bool {
        self.is_featured.unwrap_or(DEFAULT_IS_FEATURED)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub brand: Option<String>,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub discount_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub final_price: Option<Decimal>,
    pub stock: i32,
    pub unit: String,
    pub barcode: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub is_featured: bool,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<product::Model> for ProductResponse {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            brand: model.brand,
            description: model.description,
            price: model.price,
            discount_rate: model.discount_rate,
            final_price: model.final_price,
            stock: model.stock,
            unit: model.unit,
            barcode: model.barcode,
            expiration_date: model.expiration_date,
            is_active: model.is_active,
            is_featured: model.is_featured,
            image_url: model.image_url,
            category_id: model.category_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
