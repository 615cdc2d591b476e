//! Reply normalisation.
//!
//! Every reply the runtime delivers is squeezed into a two-armed [`Outcome`]:
//! either the decoded payload or a human-readable failure reason. Nothing here
//! returns an error or panics; a body that cannot be decoded is itself a failure.
//!
//! Failure reasons are picked in order: the body's `message` string, then its
//! `error` string, then a plain-text body, then `request failed with status N`.
//! Zellij reports a request it could not send as status 400 with the error
//! text as body, which the plain-text rule picks up.

use crate::domain::EmployeeRecord;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Raw result of executing a [`super::StoreRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The server answered with a status and body.
    Response { status: u16, body: Vec<u8> },
    /// The request never produced an HTTP response.
    TransportFault { message: String },
}

impl Reply {
    #[must_use]
    pub fn response(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::Response { status, body: body.into() }
    }

    #[must_use]
    pub fn transport_fault(message: impl Into<String>) -> Self {
        Self::TransportFault { message: message.into() }
    }
}

/// Discriminated result of a remote operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ok(T),
    Failed(String),
}

impl<T> Outcome<T> {
    /// Returns the failure reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Failed(reason) => Some(reason),
        }
    }
}

/// Normalises a reply to the collection fetch.
#[must_use]
pub fn decode_list(reply: &Reply) -> Outcome<Vec<EmployeeRecord>> {
    success_body(reply).map_or_else(Outcome::Failed, decode_json)
}

/// Normalises a reply to a create or update.
///
/// The saved record is read from an `employee` field or, failing that, from the
/// body itself. A success whose body carries no recognisable record is still a
/// success; the list refresh that follows will fetch the authoritative state.
#[must_use]
pub fn decode_saved(reply: &Reply) -> Outcome<Option<EmployeeRecord>> {
    let body = match success_body(reply) {
        Ok(body) => body,
        Err(reason) => return Outcome::Failed(reason),
    };

    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return Outcome::Ok(None);
    };
    let record = value
        .get("employee")
        .cloned()
        .and_then(|employee| serde_json::from_value(employee).ok())
        .or_else(|| serde_json::from_value(value).ok());
    Outcome::Ok(record)
}

/// Normalises a reply to a delete.
#[must_use]
pub fn decode_deleted(reply: &Reply) -> Outcome<()> {
    match success_body(reply) {
        Ok(_) => Outcome::Ok(()),
        Err(reason) => Outcome::Failed(reason),
    }
}

/// Returns the body of a 2xx response, or the failure reason for anything else.
fn success_body(reply: &Reply) -> Result<&[u8], String> {
    match reply {
        Reply::TransportFault { message } => {
            tracing::warn!(error = %message, "store request did not complete");
            Err(message.clone())
        }
        Reply::Response { status, body } if (200..300).contains(status) => Ok(body),
        Reply::Response { status, body } => {
            let reason = failure_reason(*status, body);
            tracing::warn!(status = *status, reason = %reason, "store rejected request");
            Err(reason)
        }
    }
}

/// Longest plain-text body used verbatim as a failure reason, in chars.
const MAX_TEXT_REASON: usize = 200;

fn failure_reason(status: u16, body: &[u8]) -> String {
    let reason = match serde_json::from_slice::<Value>(body) {
        Ok(value) => json_reason(&value),
        Err(_) => text_reason(body),
    };

    reason.unwrap_or_else(|| format!("request failed with status {status}"))
}

fn json_reason(value: &Value) -> Option<String> {
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    };

    field("message").or_else(|| field("error"))
}

fn text_reason(body: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(body).ok()?.trim();
    if text.is_empty() {
        return None;
    }

    Some(text.chars().take(MAX_TEXT_REASON).collect())
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Outcome<T> {
    match serde_json::from_slice(body) {
        Ok(value) => Outcome::Ok(value),
        Err(e) => {
            tracing::warn!(error = %e, "malformed store response body");
            Outcome::Failed(format!("malformed response body: {e}"))
        }
    }
}
