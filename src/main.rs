use payment_intent_relay::{
    app::App,
    types::{Config, LogVerbosity, ToContext},
};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing(verbosity: LogVerbosity) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.directive()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let config = Config::default();

    init_tracing(config.app.log_verbosity);

    let ctx = Arc::new(config.to_context().await);

    if ctx.payment.secret_key.is_none() {
        tracing::warn!("STRIPE_SECRET_KEY is not set, payment intent requests will fail");
    }

    if let Err(err) = App::new(ctx).serve().await {
        tracing::error!("Server stopped: {}", err);
        std::process::exit(1);
    }
}
