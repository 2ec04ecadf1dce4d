use axum::{Router, middleware::from_fn_with_state, routing::any};

use crate::{
    controller::discord::interaction::handle_interaction,
    shared::{middleware::discord_validation::validate_interaction, structs::AppState},
};

pub mod controller;
pub mod shared;

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(&app_state.config.interaction_path, any(handle_interaction))
        .layer(from_fn_with_state(app_state.clone(), validate_interaction))
        .with_state(app_state)
}
