use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use staffdesk_core::health::health_routes;
use staffdesk_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    account::{create_account, delete_account, get_account, list_accounts, update_account},
    auth::{
        authenticate, forgot_password, refresh_token, register, reset_password, revoke_token,
        validate_reset_token, verify_email,
    },
    department::{
        create_department, delete_department, get_department, list_departments, update_department,
    },
    position::{create_position, delete_position, get_position, list_positions, update_position},
    request::{create_request, get_request, list_requests, update_request},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        // Account lifecycle
        .route("/accounts/register", post(register))
        .route("/accounts/verify-email", post(verify_email))
        .route("/accounts/authenticate", post(authenticate))
        .route("/accounts/refresh-token", post(refresh_token))
        .route("/accounts/revoke-token", post(revoke_token))
        .route("/accounts/forgot-password", post(forgot_password))
        .route("/accounts/validate-reset-token", post(validate_reset_token))
        .route("/accounts/reset-password", post(reset_password))
        // Account administration
        .route("/accounts", get(list_accounts))
        .route("/accounts", post(create_account))
        .route("/accounts/{id}", get(get_account))
        .route("/accounts/{id}", put(update_account))
        .route("/accounts/{id}", delete(delete_account))
        // Departments
        .route("/departments", get(list_departments))
        .route("/departments", post(create_department))
        .route("/departments/{id}", get(get_department))
        .route("/departments/{id}", put(update_department))
        .route("/departments/{id}", delete(delete_department))
        // Positions
        .route("/positions", get(list_positions))
        .route("/positions", post(create_position))
        .route("/positions/{id}", get(get_position))
        .route("/positions/{id}", put(update_position))
        .route("/positions/{id}", delete(delete_position))
        // Staff requests
        .route("/requests", get(list_requests))
        .route("/requests", post(create_request))
        .route("/requests/{id}", get(get_request))
        .route("/requests/{id}", put(update_request))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
