use axum::{
    Router, middleware,
    routing::{get, patch},
};

use super::controller::{get_user_by_id, update_login, update_password};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn init_users_router(state: AppState) -> Router<AppState> {
    let self_service = Router::new()
        .route("/update-login", patch(update_login))
        .route("/update-password", patch(update_password))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/{id_user}", get(get_user_by_id))
        .merge(self_service)
}
