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
    state::AppState,
};

use super::{dto::CategoryRequest, repo::Category};

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list).post(create))
        .route(
            "/categories/:id",
            get(get_one).put(update).delete(delete_one),
        )
}

fn validate(payload: &CategoryRequest) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() || payload.name.chars().count() > 100 {
        return Err(ApiError::Validation(
            "Name must be between 1 and 100 characters".into(),
        ));
    }
    if let Some(description) = &payload.description {
        if description.chars().count() > 200 {
            return Err(ApiError::Validation(
                "Description must be at most 200 characters".into(),
            ));
        }
    }
    Ok(())
}

#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Paginated<Category>>, ApiError> {
    let categories = Category::list(&state.db, &query).await?;
    let total = Category::count(&state.db).await?;
    Ok(Json(Paginated::new(categories, total, &query)))
}

#[instrument(skip(state))]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    let category = Category::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".into()))?;
    Ok(Json(category))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    validate(&payload)?;
    let category = Category::create(&state.db, &payload).await?;
    info!(category_id = %category.id, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    validate(&payload)?;
    let category = Category::update(&state.db, id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".into()))?;
    info!(category_id = %category.id, "category updated");
    Ok(Json(category))
}

#[instrument(skip(state))]
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = Category::delete(&state.db, id).await.map_err(|e| {
        if is_fk_violation(&e) {
            warn!(category_id = %id, "category still referenced by products");
            ApiError::Conflict("Category is in use".into())
        } else {
            ApiError::from(e)
        }
    })?;
    if !deleted {
        return Err(ApiError::NotFound("Category not found".into()));
    }
    info!(category_id = %id, "category deleted");
    Ok(StatusCode::NO_CONTENT)
}
