use std::fmt;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::error;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config;
use crate::lead::form::{LeadField, LeadFormInput};
use crate::lead::state::SubmissionError;

/// Site credential for the form service. Not a per-user secret, but it
/// still stays out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    pub fn new(key: impl Into<String>) -> Self {
        AccessKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(***)")
    }
}

/// Multipart body for one lead, in the order a browser would build it from
/// the form element. Empty optional fields are still sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRequest {
    fields: Vec<(&'static str, String)>,
}

impl LeadRequest {
    pub fn new(input: &LeadFormInput, key: &AccessKey) -> Self {
        let mut fields: Vec<(&'static str, String)> = [
            LeadField::Name,
            LeadField::Email,
            LeadField::ContactHandle,
            LeadField::Message,
        ]
        .into_iter()
        .map(|field| (field.wire_name(), input.get(field).to_string()))
        .collect();
        fields.push(("access_key", key.as_str().to_string()));
        LeadRequest { fields }
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    fn to_form_data(&self) -> Result<FormData, TransportError> {
        let form = FormData::new().map_err(body_error)?;
        for (name, value) in self.fields() {
            form.append_with_str(name, value).map_err(body_error)?;
        }
        Ok(form)
    }
}

fn body_error(e: JsValue) -> TransportError {
    TransportError::Body(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// What Web3Forms answers with. A missing `success` counts as a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormServiceResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl FormServiceResponse {
    #[cfg(test)]
    pub fn accepted() -> Self {
        FormServiceResponse { success: true, message: None }
    }

    #[cfg(test)]
    pub fn rejected(message: Option<&str>) -> Self {
        FormServiceResponse {
            success: false,
            message: message.map(str::to_string),
        }
    }

    pub fn into_outcome(self) -> Result<(), SubmissionError> {
        if self.success {
            Ok(())
        } else {
            Err(SubmissionError::rejected(self.message))
        }
    }
}

/// Parse a response body regardless of HTTP status; the service reports
/// rejections as JSON with a 4xx code.
pub fn decode_response(body: &str) -> Result<FormServiceResponse, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Malformed(e.to_string()))
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not build request body: {0}")]
    Body(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Delivers a lead to the form service. One call is one HTTP request.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn send(&self, request: &LeadRequest) -> Result<FormServiceResponse, TransportError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Web3FormsTransport {
    endpoint: String,
}

impl Web3FormsTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Web3FormsTransport { endpoint: endpoint.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_form_endpoint())
    }
}

#[async_trait(?Send)]
impl FormTransport for Web3FormsTransport {
    async fn send(&self, request: &LeadRequest) -> Result<FormServiceResponse, TransportError> {
        let form = request.to_form_data()?;

        let response = Request::post(&self.endpoint)
            .body(form)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let decoded = decode_response(&body);
        if let Err(e) = &decoded {
            error!("Form service answered {} with unreadable body: {}", status, e);
        }
        decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_every_field_and_the_key() {
        let input = LeadFormInput {
            name: "Ann".into(),
            email: "a@b.com".into(),
            contact_handle: "@ann".into(),
            message: "Hi".into(),
        };
        let request = LeadRequest::new(&input, &AccessKey::new("k-1"));
        let names: Vec<&str> = request.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["name", "email", "telegram", "message", "access_key"]);
        assert_eq!(request.get("telegram"), Some("@ann"));
        assert_eq!(request.get("access_key"), Some("k-1"));
    }

    #[test]
    fn empty_optional_fields_are_still_sent() {
        let input = LeadFormInput {
            name: "Ann".into(),
            email: "a@b.com".into(),
            ..Default::default()
        };
        let request = LeadRequest::new(&input, &AccessKey::new("k"));
        assert_eq!(request.get("telegram"), Some(""));
        assert_eq!(request.get("message"), Some(""));
    }

    #[test]
    fn access_key_is_redacted_in_debug() {
        let key = AccessKey::new("super-secret");
        assert!(!format!("{:?}", key).contains("super-secret"));
    }

    #[test]
    fn decodes_service_answers() {
        let ok = decode_response(r#"{"success":true,"message":"Email sent successfully!"}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.into_outcome(), Ok(()));

        let rejected = decode_response(r#"{"success":false,"message":"Bad key"}"#).unwrap();
        assert_eq!(
            rejected.into_outcome().unwrap_err(),
            SubmissionError::ServiceRejected { message: "Bad key".into() }
        );

        let bare = decode_response(r#"{"message":null}"#).unwrap();
        assert!(!bare.success);
        assert_eq!(bare.message, None);
    }

    #[test]
    fn unparseable_body_is_a_transport_error() {
        assert!(matches!(
            decode_response("<html>502</html>"),
            Err(TransportError::Malformed(_))
        ));
    }
}
