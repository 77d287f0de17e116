use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub static X_CLIENT_INFO: HeaderName = HeaderName::from_static("x-client-info");
pub static APIKEY: HeaderName = HeaderName::from_static("apikey");

/// Answers pre-flight requests itself and stamps the same headers on every response.
pub fn cors_layer() -> cors::CorsLayer {
    cors::CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            X_CLIENT_INFO.clone(),
            APIKEY.clone(),
            header::CONTENT_TYPE,
        ])
        .allow_origin(cors::Any)
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = modules::get_router()
            .with_state(ctx.clone())
            .layer(DefaultBodyLimit::max(1024 * 1024))
            .layer(trace::TraceLayer::new_for_http())
            .layer(cors_layer());

        Self { ctx, router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(address.as_str()).await?;

        tracing::info!("Payment intent relay listening on {}", address);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        return;
    }

    tracing::info!("Shutting down");
}
