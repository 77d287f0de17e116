use super::types::{request, response};
use crate::{
    modules::payment::service::{
        build_intent_form, stringify, stripe::StripePaymentIntent, CreatePaymentIntentPayload,
    },
    types::Context,
};
use bytes::Bytes;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, body: Bytes) -> response::Response {
    let payload = serde_json::from_slice::<request::Payload>(body.as_ref()).map_err(|err| {
        tracing::error!("Failed to parse create payment intent payload: {}", err);
        response::Error::Unexpected(err.to_string())
    })?;

    let currency = payload
        .currency
        .filter(|currency| !currency.is_null())
        .map(|currency| stringify(&currency))
        .filter(|currency| !currency.is_empty())
        .unwrap_or_else(|| ctx.payment.default_currency.clone());

    tracing::debug!(
        "Creating payment intent for amount: {:?}, currency: {}, secret key present: {}",
        payload.amount,
        currency,
        ctx.payment.secret_key.is_some()
    );

    let secret_key = ctx.payment.secret_key.as_deref().ok_or_else(|| {
        tracing::error!("Missing STRIPE_SECRET_KEY environment variable");
        response::Error::MissingSecretKey
    })?;

    let form = build_intent_form(CreatePaymentIntentPayload {
        amount: payload.amount,
        currency,
        metadata: payload.metadata,
    });

    let res = ctx
        .payment
        .processor
        .create_payment_intent(secret_key, form)
        .await
        .map_err(|err| {
            tracing::error!("Error in create payment intent: {}", err);
            response::Error::Unexpected(err.to_string())
        })?;

    tracing::debug!("Stripe responded with status {}", res.status);

    if !res.is_success() {
        tracing::error!("Stripe API error ({}): {}", res.status, res.body);
        return Err(response::Error::PaymentIntentRejected {
            details: res.body,
            stripe_status: res.status,
        });
    }

    let intent = serde_json::de::from_str::<StripePaymentIntent>(res.body.as_str()).map_err(
        |err| {
            tracing::error!("Failed to process create payment intent response: {}", err);
            response::Error::Unexpected(err.to_string())
        },
    )?;

    tracing::info!("Payment intent created: {}", intent.id);

    Ok(response::Success::PaymentIntentCreated(
        response::PaymentIntentCreated {
            client_secret: intent.client_secret,
            id: intent.id,
        },
    ))
}
