use axum::{
    http::{header, Method},
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, readyz},
        lists::{
            create_list, delete_list, get_list, invalid_list_id, list_lists, method_not_allowed,
            not_found, update_list,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let list_routes = Router::new()
        .route(
            "/lists",
            get(list_lists)
                .post(create_list)
                .fallback(method_not_allowed),
        )
        .route(
            "/list/{id}",
            get(get_list)
                .put(update_list)
                .delete(delete_list)
                .fallback(method_not_allowed),
        )
        .route("/list/", any(invalid_list_id))
        .route("/list/{id}/{*rest}", any(invalid_list_id))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .merge(list_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
