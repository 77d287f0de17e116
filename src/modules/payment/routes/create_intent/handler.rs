use super::service::service;
use super::types::response;
use crate::types::Context;
use axum::{extract::rejection::BytesRejection, extract::State};
use bytes::Bytes;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    body: Result<Bytes, BytesRejection>,
) -> response::Response {
    let body = body.map_err(|err| {
        tracing::error!("Failed to read create payment intent body: {}", err);
        response::Error::Unexpected(err.body_text())
    })?;

    service(ctx, body).await
}
