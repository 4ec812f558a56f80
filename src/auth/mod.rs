use axum::Router;

use crate::{app::RouteProvider, state::AppState};

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;

pub struct AuthRoutes;

impl RouteProvider for AuthRoutes {
    fn routes() -> Router<AppState> {
        handlers::auth_routes()
    }
}
