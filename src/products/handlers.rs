use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::{is_fk_violation, ApiError},
    listing::{ListQuery, Paginated},
    slug::slugify,
    state::AppState,
};

use super::{
    dto::{ProductRequest, ProductResponse},
    repo::Product,
};

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list).post(create))
        .route("/products/:id", get(get_one).put(update).delete(delete_one))
}

fn validate(payload: &ProductRequest) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() || payload.name.chars().count() > 100 {
        return Err(ApiError::Validation(
            "Name must be between 1 and 100 characters".into(),
        ));
    }
    for (field, value) in [
        ("brand", &payload.brand),
        ("supplier", &payload.supplier),
        ("model", &payload.model),
        ("serialNumber", &payload.serial_number),
        ("barcode", &payload.barcode),
    ] {
        if let Some(v) = value {
            if v.chars().count() > 100 {
                return Err(ApiError::Validation(format!(
                    "{field} must be at most 100 characters"
                )));
            }
        }
    }
    if let Some(price) = payload.price {
        if !price.is_finite() || price < 0.0 {
            return Err(ApiError::Validation("Price must be non-negative".into()));
        }
    }
    Ok(())
}

#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Paginated<ProductResponse>>, ApiError> {
    let rows = Product::list(&state.db, &query).await?;
    let total = Product::count(&state.db).await?;
    let data = rows.into_iter().map(ProductResponse::from).collect();
    Ok(Json(Paginated::new(data, total, &query)))
}

#[instrument(skip(state))]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    let row = Product::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".into()))?;
    Ok(Json(ProductResponse::from(row)))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    validate(&payload)?;
    let slug = slugify(&payload.name);

    let product = Product::create(&state.db, &slug, &payload)
        .await
        .map_err(|e| {
            if is_fk_violation(&e) {
                warn!(category_id = %payload.category_id, "unknown category");
                ApiError::Validation("Unknown category".into())
            } else {
                ApiError::from(e)
            }
        })?;

    info!(product_id = %product.id, slug = %product.slug, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Product>, ApiError> {
    validate(&payload)?;

    let product = Product::update(&state.db, id, &payload)
        .await
        .map_err(|e| {
            if is_fk_violation(&e) {
                warn!(category_id = %payload.category_id, "unknown category");
                ApiError::Validation("Unknown category".into())
            } else {
                ApiError::from(e)
            }
        })?
        .ok_or_else(|| ApiError::NotFound("Product not found".into()))?;

    info!(product_id = %product.id, "product updated");
    Ok(Json(product))
}

#[instrument(skip(state))]
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = Product::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Product not found".into()));
    }
    info!(product_id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
