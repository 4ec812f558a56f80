use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    listing::{ListQuery, Paginated},
    state::AppState,
};

use super::{
    dto::{redact_all, PublicUser},
    repo::User,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list))
        .route("/users/:id", get(get_one))
}

#[instrument(skip(state, _current))]
pub async fn list(
    State(state): State<AppState>,
    AuthUser(_current): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Paginated<PublicUser>>, ApiError> {
    let users = User::list(&state.db, &query).await?;
    let total = User::count(&state.db).await?;
    Ok(Json(Paginated::new(redact_all(users), total, &query)))
}

#[instrument(skip(state, _current))]
pub async fn get_one(
    State(state): State<AppState>,
    AuthUser(_current): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(PublicUser::from(user)))
}
