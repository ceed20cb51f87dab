use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use room_api::application::ports::archive_source::ArchiveSource;
use room_api::bootstrap::app_context::{AppContext, AppServices, build_dispatch_providers};
use room_api::bootstrap::config::Config;
use room_api::infrastructure::archive::cache::CachedArchiveSource;
use room_api::infrastructure::archive::substack_fetcher::SubstackArchiveFetcher;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        room_api::presentation::http::dispatches::list_dispatches,
        room_api::presentation::http::archive::list_archive_posts,
        room_api::presentation::http::content::list_projects,
        room_api::presentation::http::content::list_books,
        room_api::presentation::http::content::get_about,
        room_api::presentation::http::health::health,
    ),
    components(schemas(
        room_api::presentation::http::dispatches::DispatchItem,
        room_api::presentation::http::archive::ArchiveResponse,
        room_api::presentation::http::archive::ArchiveError,
        room_api::presentation::http::content::BooksResponse,
        room_api::domain::content::Project,
        room_api::domain::content::Book,
        room_api::domain::content::FavoriteRead,
        room_api::domain::content::LifeAdvice,
        room_api::domain::content::About,
        room_api::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Dispatches", description = "Journal entries"),
        (name = "Archive", description = "Newsletter archive relay"),
        (name = "Content", description = "Static portfolio content"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "room_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting room backend");

    let dispatch_providers = build_dispatch_providers(&cfg);

    let fetcher: Arc<dyn ArchiveSource> =
        Arc::new(SubstackArchiveFetcher::new(cfg.archive_url.clone()));
    let archive_source: Arc<dyn ArchiveSource> = Arc::new(CachedArchiveSource::new(
        fetcher,
        Duration::from_secs(cfg.archive_cache_secs),
    ));

    let services = AppServices::new(dispatch_providers, archive_source);
    let ctx = AppContext::new(cfg.clone(), services);

    // Config::from_env requires FRONTEND_URL in production, so the
    // mirror-request fallback only ever applies in development.
    let origin = cfg
        .frontend_url
        .as_deref()
        .and_then(|o| HeaderValue::from_str(o).ok())
        .map(AllowOrigin::exact)
        .unwrap_or_else(AllowOrigin::mirror_request);
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([http::Method::GET, http::Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE]);

    let app = Router::new()
        .nest(
            "/api",
            room_api::presentation::http::dispatches::routes(ctx.clone()),
        )
        .nest(
            "/api",
            room_api::presentation::http::archive::routes(ctx.clone()),
        )
        .nest("/api", room_api::presentation::http::content::routes())
        .nest("/api", room_api::presentation::http::health::routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
