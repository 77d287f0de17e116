use crate::modules::payment::service::stripe::{PaymentProcessor, StripeClient};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

pub const DEFAULT_STRIPE_API_ENDPOINT: &str = "https://api.stripe.com/v1/payment_intents";
pub const DEFAULT_CURRENCY: &str = "myr";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogVerbosity {
    Quiet,
    Verbose,
}

impl LogVerbosity {
    pub fn from(raw_verbosity: String) -> Self {
        match raw_verbosity.to_lowercase().as_ref() {
            "verbose" | "debug" => Self::Verbose,
            _ => Self::Quiet,
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Quiet => "info",
            Self::Verbose => "debug",
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct PaymentContext {
    pub secret_key: Option<String>,
    pub default_currency: String,
    pub processor: Arc<dyn PaymentProcessor>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub payment: PaymentContext,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
    pub log_verbosity: LogVerbosity,
}

#[derive(Clone)]
pub struct PaymentConfig {
    pub api_endpoint: String,
    pub secret_key: Option<String>,
    pub default_currency: String,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub payment: PaymentConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let log_verbosity = env::var("LOG_VERBOSITY").unwrap_or_else(|_| "quiet".to_string());
        let payment_api_endpoint = env::var("STRIPE_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_STRIPE_API_ENDPOINT.to_string());
        // absence is reported per request, not at startup
        let payment_secret_key = env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let payment_default_currency = env::var("PAYMENT_DEFAULT_CURRENCY")
            .ok()
            .filter(|currency| !currency.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Self {
            app: AppConfig {
                host,
                port,
                log_verbosity: LogVerbosity::from(log_verbosity),
            },
            payment: PaymentConfig {
                api_endpoint: payment_api_endpoint,
                secret_key: payment_secret_key,
                default_currency: payment_default_currency,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            payment: PaymentContext {
                secret_key: self.payment.secret_key,
                default_currency: self.payment.default_currency,
                processor: Arc::new(StripeClient::new(self.payment.api_endpoint)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_defaults_to_quiet() {
        assert_eq!(LogVerbosity::from("".to_string()), LogVerbosity::Quiet);
        assert_eq!(LogVerbosity::from("loud".to_string()), LogVerbosity::Quiet);
        assert_eq!(LogVerbosity::from("VERBOSE".to_string()), LogVerbosity::Verbose);
        assert_eq!(LogVerbosity::Verbose.directive(), "debug");
    }
}
