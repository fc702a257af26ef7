pub mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod repo_types;
pub mod services;

use crate::{config::RouteLayout, state::AppState};
use axum::Router;

pub fn router(layout: RouteLayout) -> Router<AppState> {
    match layout {
        RouteLayout::Flat => Router::new()
            .merge(handlers::read_routes())
            .merge(handlers::write_routes()),
        RouteLayout::Nested => Router::new()
            .nest("/read", handlers::read_routes())
            .nest("/write", handlers::write_routes()),
    }
}
