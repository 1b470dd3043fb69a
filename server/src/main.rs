mod content;

use axum::{
    Router,
    body::Body,
    extract::{Path, State},
    http::{HeaderValue, Request, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};
use tracing_subscriber::EnvFilter;

use content::{Collection, ContentStore};

/// Runtime settings, read from the environment
#[derive(Debug, Clone)]
struct ServerConfig {
    port: String,
    dist_dir: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").unwrap_or_else(|_| "8080".to_string()),
            dist_dir: std::env::var("DIST_DIR").unwrap_or_else(|_| "../dist".to_string()),
        }
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn collection(
    State(store): State<Arc<ContentStore>>,
    Path(resource): Path<String>,
) -> Response {
    match resource.parse::<Collection>() {
        Ok(collection) => store.respond(collection),
        Err(e) => {
            tracing::debug!("{e}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn app(store: Arc<ContentStore>, dist_dir: &str) -> Router {
    let static_files = ServeDir::new(dist_dir)
        .not_found_service(ServeFile::new(format!("{dist_dir}/index.html")));

    Router::new()
        .route("/healthz", routing::get(healthz))
        .route("/api/{resource}", routing::get(collection))
        .with_state(store)
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new().br(true).gzip(true))
                .layer(middleware::from_fn(cache_control)),
        )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let store = match ContentStore::load() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    for collection in Collection::ALL {
        tracing::info!(
            "Serving /api/{} ({} items)",
            collection.name(),
            store.len(collection)
        );
    }

    let app = app(store, &config.dist_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Server running on http://{addr}");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server stopped: {e}");
        std::process::exit(1);
    }
}

async fn cache_control(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_owned(); // <- avoid borrowing req
    let mut res = next.run(req).await;

    let value = cache_policy(&path);
    res.headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(value));
    res
}

fn cache_policy(path: &str) -> &'static str {
    // HTML and API data: always revalidate
    if path == "/" || path.ends_with(".html") || path.starts_with("/api/") {
        return "no-cache, must-revalidate";
    }

    // Assets:
    //    - If fingerprinted: cache "forever"
    //    - Otherwise: cache, but always revalidate
    if is_fingerprinted_asset(path) {
        "public, max-age=31536000, immutable"
    } else {
        "public, max-age=0, must-revalidate"
    }
}

// Heuristic: treat "foo.<hash>.wasm/js/css" as fingerprinted.
fn is_fingerprinted_asset(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or(path);
    let mut parts = file.split('.');

    // need at least name.hash.ext  => 3 parts minimum
    let (Some(_), Some(hash), Some(_)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    hash.len() >= 8 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let store = Arc::new(ContentStore::load().unwrap());
        app(store, "does-not-exist")
    }

    async fn get(path: &str) -> Response {
        test_app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_healthz() {
        let res = get("/healthz").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_every_collection_is_served() {
        let store = ContentStore::load().unwrap();

        for collection in Collection::ALL {
            let res = get(&format!("/api/{}", collection.name())).await;
            assert_eq!(res.status(), StatusCode::OK, "{}", collection.name());

            let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
            let items: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
            assert_eq!(items.len(), store.len(collection));
        }
    }

    #[tokio::test]
    async fn test_stats_payload_shape() {
        let res = get("/api/stats").await;
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let stats: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(stats[2]["value"], 1157);
        assert_eq!(stats[0]["icon"], "repos");
    }

    #[tokio::test]
    async fn test_unknown_collection_is_404() {
        let res = get("/api/users").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_responses_revalidate() {
        let res = get("/api/projects").await;
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-cache, must-revalidate"
        );
    }

    #[test]
    fn test_fingerprinted_assets() {
        assert!(is_fingerprinted_asset("/neon_portfolio.3fa9c21b.wasm"));
        assert!(is_fingerprinted_asset("/assets/app.deadbeef00.js"));
        assert!(!is_fingerprinted_asset("/app.js"));
        assert!(!is_fingerprinted_asset("/app.notahash.js"));
        assert!(!is_fingerprinted_asset("/app.abc.js"));
    }

    #[test]
    fn test_cache_policy() {
        assert_eq!(cache_policy("/"), "no-cache, must-revalidate");
        assert_eq!(cache_policy("/index.html"), "no-cache, must-revalidate");
        assert_eq!(
            cache_policy("/app.3fa9c21b.js"),
            "public, max-age=31536000, immutable"
        );
        assert_eq!(cache_policy("/favicon.ico"), "public, max-age=0, must-revalidate");
    }
}
