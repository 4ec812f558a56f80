use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::ProductWithCategory;

/// Request body for creating or replacing a product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    pub category_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Product read shape with the category embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub brand: Option<String>,
    pub supplier: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub barcode: Option<String>,
    pub price: Option<f64>,
    pub category: CategoryRef,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<ProductWithCategory> for ProductResponse {
    fn from(row: ProductWithCategory) -> Self {
        let p = row.product;
        Self {
            id: p.id,
            slug: p.slug,
            name: p.name,
            brand: p.brand,
            supplier: p.supplier,
            model: p.model,
            serial_number: p.serial_number,
            barcode: p.barcode,
            price: p.price,
            category: CategoryRef {
                id: p.category_id,
                name: row.category_name,
                description: row.category_description,
            },
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
