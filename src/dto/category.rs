use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use super::validate_not_blank;
use crate::entities::category;

/// Category create/replace payload
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "Süt Ürünleri",
    "description": "Süt, peynir ve yoğurt",
    "image_url": "https://cdn.example.com/categories/dairy.png"
}))]
pub struct CategoryInput {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            image_url: model.image_url,
        }
    }
}
