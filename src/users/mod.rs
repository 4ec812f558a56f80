use axum::Router;

use crate::{app::RouteProvider, state::AppState};

pub mod dto;
pub mod handlers;
pub mod repo;

pub struct UserRoutes;

impl RouteProvider for UserRoutes {
    fn routes() -> Router<AppState> {
        handlers::user_routes()
    }
}
