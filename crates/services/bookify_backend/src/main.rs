// File: services/bookify_backend/src/main.rs
use axum::{routing::get, Router};
use bookify_config::{load_config, load_zoom_accounts};
use bookify_zoom::routes as zoom_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    bookify_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    let mut api_router = Router::new().route("/", get(|| async { "Welcome to Bookify API!" }));

    if config.use_zoom {
        // Account triples come from ZOOM_*_n env vars, read once here and
        // injected into the router state; they are never reloaded.
        let accounts = load_zoom_accounts();
        if accounts.is_empty() {
            warn!("use_zoom is enabled but no ZOOM_*_1 account triple is configured");
        }
        info!(accounts = accounts.len(), "Zoom meetings feature enabled");
        api_router = api_router.merge(zoom_routes::routes(config.clone(), accounts));
    }

    #[allow(unused_mut)] // mutable only when the openapi feature is on
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use bookify_zoom::doc::ZoomApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Bookify API",
                version = "0.1.0",
                description = "Mentoring meeting booking via Zoom",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(ZoomApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    // The booking form and calendar pages are plain static files.
    let app = app.fallback_service(ServeDir::new("static"));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{addr}");
    info!("API endpoints available at http://{addr}/api");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
