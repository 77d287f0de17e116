pub mod request {
    use serde::Deserialize;
    use serde_json::{Map, Value};

    #[derive(Deserialize)]
    pub struct Payload {
        pub amount: Option<Value>,
        pub currency: Option<Value>,
        pub metadata: Option<Map<String, Value>>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct PaymentIntentCreated {
        pub client_secret: String,
        pub id: String,
    }

    pub enum Success {
        PaymentIntentCreated(PaymentIntentCreated),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaymentIntentCreated(intent) => {
                    (StatusCode::OK, Json(json!(intent))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MissingSecretKey,
        PaymentIntentRejected { details: String, stripe_status: u16 },
        Unexpected(String),
    }

    // every failure is reported as a 500, whatever the processor answered
    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingSecretKey => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Missing STRIPE_SECRET_KEY environment variable" })),
                )
                    .into_response(),
                Self::PaymentIntentRejected {
                    details,
                    stripe_status,
                } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to create payment intent",
                        "details": details,
                        "stripe_status": stripe_status,
                    })),
                )
                    .into_response(),
                Self::Unexpected(message) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
