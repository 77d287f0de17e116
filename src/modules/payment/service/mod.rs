pub mod stripe;

use serde_json::{Map, Value};

pub struct CreatePaymentIntentPayload {
    pub amount: Option<Value>,
    pub currency: String,
    pub metadata: Option<Map<String, Value>>,
}

/// Renders a JSON scalar the way it should appear in a form field.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        other => other.to_string(),
    }
}

/// Flattens the payload into Stripe's bracketed form-field convention.
pub fn build_intent_form(payload: CreatePaymentIntentPayload) -> stripe::Form {
    let mut form = vec![];

    if let Some(amount) = payload.amount.filter(|amount| !amount.is_null()) {
        form.push(("amount".to_string(), stringify(&amount)));
    }

    form.push(("currency".to_string(), payload.currency));
    form.push((
        "automatic_payment_methods[enabled]".to_string(),
        "true".to_string(),
    ));

    for (key, value) in payload.metadata.unwrap_or_default() {
        form.push((format!("metadata[{}]", key), stringify(&value)));
    }

    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field<'a>(form: &'a stripe::Form, name: &str) -> Option<&'a str> {
        form.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn flattens_metadata_into_bracketed_fields() {
        let metadata = json!({ "orderId": 42, "note": "gift", "rush": true });

        let form = build_intent_form(CreatePaymentIntentPayload {
            amount: Some(json!(1500)),
            currency: "usd".to_string(),
            metadata: metadata.as_object().cloned(),
        });

        assert_eq!(field(&form, "amount"), Some("1500"));
        assert_eq!(field(&form, "currency"), Some("usd"));
        assert_eq!(field(&form, "automatic_payment_methods[enabled]"), Some("true"));
        assert_eq!(field(&form, "metadata[orderId]"), Some("42"));
        assert_eq!(field(&form, "metadata[note]"), Some("gift"));
        assert_eq!(field(&form, "metadata[rush]"), Some("true"));
    }

    #[test]
    fn missing_amount_is_left_for_the_processor_to_reject() {
        let form = build_intent_form(CreatePaymentIntentPayload {
            amount: None,
            currency: "myr".to_string(),
            metadata: None,
        });

        assert_eq!(field(&form, "amount"), None);
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn stringify_keeps_strings_raw() {
        assert_eq!(stringify(&json!("abc")), "abc");
        assert_eq!(stringify(&json!(12.5)), "12.5");
        assert_eq!(stringify(&Value::Null), "null");
    }
}
