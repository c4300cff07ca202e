pub mod routes;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::registry::SharedRegistry;

/// Build the full application router so `main` and the integration tests
/// serve exactly the same app.
pub fn build_app(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(routes::activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(registry)
}
