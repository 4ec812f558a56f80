use axum::Router;

use crate::{app::RouteProvider, state::AppState};

pub mod dto;
pub mod handlers;
pub mod repo;

pub struct ProductRoutes;

impl RouteProvider for ProductRoutes {
    fn routes() -> Router<AppState> {
        handlers::product_routes()
    }
}
