use axum::Router;

use crate::{app::RouteProvider, state::AppState};

pub mod dto;
pub mod handlers;
pub mod repo;

pub struct CategoryRoutes;

impl RouteProvider for CategoryRoutes {
    fn routes() -> Router<AppState> {
        handlers::category_routes()
    }
}
