// File: services/hireloop_backend/src/lib.rs
pub mod app_state;
pub mod booking_sink;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use app_state::AppState;

/// Assembles the `/api` router with tracing and CORS layers.
pub fn build_app(state: &AppState) -> Router {
    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Hireloop API!" }))
        .merge(hireloop_catalog::routes(state.catalog.clone()))
        .merge(hireloop_calendar::routes(state.calendar.clone()));

    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        app = app.merge(swagger_ui());
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(feature = "openapi")]
fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    use hireloop_calendar::doc::CalendarApiDoc;
    use hireloop_catalog::doc::CatalogApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Hireloop API",
            version = "0.1.0",
            description = "Marketplace listings, availability calendar and booking requests",
            license(name = "MIT", url = "https://opensource.org/licenses/MIT")
        ),
        components(),
        modifiers(&BearerAuth),
        servers((url = "/api", description = "Main API Prefix")),
    )]
    struct ApiDoc;

    struct BearerAuth;

    impl utoipa::Modify for BearerAuth {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
            let components = openapi.components.get_or_insert_with(Default::default);
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }

    let mut openapi_doc = ApiDoc::openapi();
    openapi_doc.merge(CatalogApiDoc::openapi());
    openapi_doc.merge(CalendarApiDoc::openapi());
    tracing::info!("Adding Swagger UI at /api/docs");

    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc)
}
