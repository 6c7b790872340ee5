//! Merchant API request/response data types.
//!
//! Plain validated value types for the outer credential and permission
//! setup flows. Constructors enforce the none-empty rules; no transport
//! or signing happens here.

use serde::{Deserialize, Serialize};

/// A merchant API request could not be constructed from its inputs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("endpoint must be 'live' or 'sandbox', got '{got}'")]
    UnknownEndpoint { got: String },
}

/// Which provider environment requests are addressed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Live,
    Sandbox,
}

impl Endpoint {
    pub fn parse(text: &str) -> Result<Endpoint, RequestError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Endpoint::Live),
            "sandbox" => Ok(Endpoint::Sandbox),
            other => Err(RequestError::UnknownEndpoint {
                got: other.to_owned(),
            }),
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, RequestError> {
    if value.trim().is_empty() {
        Err(RequestError::MissingField { field })
    } else {
        Ok(value.to_owned())
    }
}

/// Merchant API credentials. All four fields are mandatory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiCredentials {
    pub username: String,
    pub password: String,
    pub signature: String,
    pub app_id: String,
}

impl ApiCredentials {
    pub fn new(
        username: &str,
        password: &str,
        signature: &str,
        app_id: &str,
    ) -> Result<Self, RequestError> {
        Ok(ApiCredentials {
            username: required("username", username)?,
            password: required("password", password)?,
            signature: required("signature", signature)?,
            app_id: required("app_id", app_id)?,
        })
    }
}

/// A failed provider call, as reported back to the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureResponse {
    pub error_code: String,
    pub error_msg: String,
}

/// Request to start the billing-agreement consent flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetupBillingAgreement {
    pub description: String,
    pub success_url: String,
    pub cancel_url: String,
}

impl SetupBillingAgreement {
    pub fn new(description: &str, success_url: &str, cancel_url: &str) -> Result<Self, RequestError> {
        Ok(SetupBillingAgreement {
            description: required("description", description)?,
            success_url: required("success_url", success_url)?,
            cancel_url: required("cancel_url", cancel_url)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetupBillingAgreementResponse {
    pub token: String,
    pub redirect_url: String,
}

impl SetupBillingAgreementResponse {
    pub fn new(token: &str, redirect_url: &str) -> Result<Self, RequestError> {
        Ok(SetupBillingAgreementResponse {
            token: required("token", token)?,
            redirect_url: required("redirect_url", redirect_url)?,
        })
    }
}

/// Request to finalize a billing agreement from a consent token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBillingAgreement {
    pub token: String,
}

impl CreateBillingAgreement {
    pub fn new(token: &str) -> Result<Self, RequestError> {
        Ok(CreateBillingAgreement {
            token: required("token", token)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBillingAgreementResponse {
    pub billing_agreement_id: String,
}

/// The fixed scope list requested for order permissions.
pub const PERMISSION_SCOPE: &[&str] = &[
    "EXPRESS_CHECKOUT",
    "AUTH_CAPTURE",
    "REFUND",
    "TRANSACTION_DETAILS",
    "RECURRING_PAYMENTS",
    "SETTLEMENT_REPORTING",
    "RECURRING_PAYMENT_REPORT",
];

/// Request for the fixed permission scope with a return callback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestPermissions {
    pub scope: Vec<String>,
    pub callback: String,
}

impl RequestPermissions {
    pub fn new(callback: &str) -> Result<Self, RequestError> {
        Ok(RequestPermissions {
            scope: PERMISSION_SCOPE.iter().map(|s| (*s).to_owned()).collect(),
            callback: required("callback", callback)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestPermissionsResponse {
    pub username_to: String,
    pub scope: String,
    pub request_token: String,
    pub redirect_url: String,
}

impl RequestPermissionsResponse {
    pub fn new(
        username_to: &str,
        scope: &str,
        request_token: &str,
        redirect_url: &str,
    ) -> Result<Self, RequestError> {
        Ok(RequestPermissionsResponse {
            username_to: required("username_to", username_to)?,
            scope: required("scope", scope)?,
            request_token: required("request_token", request_token)?,
            redirect_url: required("redirect_url", redirect_url)?,
        })
    }
}
