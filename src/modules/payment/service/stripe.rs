use async_trait::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use serde::Deserialize;

#[derive(Debug)]
pub enum Error {
    InvalidCredential,
    RequestFailed(String),
    ResponseUnreadable(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredential => write!(f, "Invalid STRIPE_SECRET_KEY header value"),
            Self::RequestFailed(err) => write!(f, "{}", err),
            Self::ResponseUnreadable(err) => write!(f, "{}", err),
        }
    }
}

/// Raw answer from the processor, successful or not.
#[derive(Clone, Debug)]
pub struct ProcessorResponse {
    pub status: u16,
    pub body: String,
}

impl ProcessorResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Deserialize)]
pub struct StripePaymentIntent {
    pub id: String,
    pub client_secret: String,
}

pub type Form = Vec<(String, String)>;

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_payment_intent(
        &self,
        secret_key: &str,
        form: Form,
    ) -> Result<ProcessorResponse, Error>;
}

pub struct StripeClient {
    client: reqwest::Client,
    api_endpoint: String,
}

impl StripeClient {
    pub fn new(api_endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_endpoint,
        }
    }
}

#[async_trait]
impl PaymentProcessor for StripeClient {
    async fn create_payment_intent(
        &self,
        secret_key: &str,
        form: Form,
    ) -> Result<ProcessorResponse, Error> {
        let mut headers = HeaderMap::new();
        let auth_header = format!("Bearer {}", secret_key);
        headers.insert(
            AUTHORIZATION,
            auth_header
                .try_into()
                .map_err(|_| Error::InvalidCredential)?,
        );

        let res = self
            .client
            .post(self.api_endpoint.as_str())
            .headers(headers)
            .form(&form)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to send create payment intent request: {}", err);
                Error::RequestFailed(err.to_string())
            })?;

        let status = res.status().as_u16();

        let body = res.text().await.map_err(|err| {
            tracing::error!("Failed to read create payment intent response: {:?}", err);
            Error::ResponseUnreadable(err.to_string())
        })?;

        tracing::debug!("Response received from stripe server with status {}", status);

        Ok(ProcessorResponse { status, body })
    }
}
