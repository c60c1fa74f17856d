//! Router construction shared by the binary and the integration tests.

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{protected::products, public};
use crate::middleware::{handle_panic, jwt_auth_middleware};
use crate::state::AppState;

/// Build the full application router.
///
/// Layers, innermost first: panic recovery, optional request tracing,
/// request-id set/propagate, CORS.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/api/auth/login", post(public::auth::login_post))
        // Protected
        .merge(product_routes(state.clone()))
        .layer(CatchPanicLayer::custom(handle_panic));

    let router = if state.config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    let request_id_header = HeaderName::from_static("x-request-id");
    router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id_header.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(request_id_header)),
        )
        .layer(cors_layer(&state.config.security))
        .with_state(state)
}

fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/products",
            get(products::products_list).post(products::products_create),
        )
        .route(
            "/api/products/:id",
            get(products::product_get)
                .put(products::product_put)
                .delete(products::product_delete),
        )
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

/// Permissive when no origins are configured, an allow-list otherwise.
/// Unparseable origins are skipped with a warning.
fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}
