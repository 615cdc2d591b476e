//! Request construction for the employee record store.
//!
//! The plugin never performs I/O itself: every remote operation is described by
//! a [`StoreRequest`] that the runtime executes (via Zellij's `web_request`) and
//! answers later with a reply carrying the same context map. The [`RequestTag`]
//! inside that map tells the handler which controller the reply belongs to.
//!
//! # Endpoints
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list | GET | `/api/get-all-employees` |
//! | create | POST | `/api/add-employee` |
//! | update | PUT | `/api/update-employee/{id}` |
//! | delete | DELETE | `/api/delete-employee/{id}` |

use crate::domain::error::{Result, StaffboardError};
use crate::domain::{EmployeeFields, EmployeeId};
use crate::observability::TraceContext;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

const REQUEST_KEY: &str = "staffboard.request";
const SESSION_KEY: &str = "staffboard.form_session";
const EMPLOYEE_KEY: &str = "staffboard.employee_id";
const TRACE_ID_KEY: &str = "staffboard.trace_id";
const PARENT_SPAN_KEY: &str = "staffboard.parent_span_id";

/// HTTP verb of a store request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// Identifies which pending operation a reply answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTag {
    /// A collection fetch.
    List,
    /// A create or update issued by the form instance stamped `session`.
    Save { session: u64 },
    /// A delete of one row.
    Delete { id: EmployeeId },
}

impl RequestTag {
    fn write_to(&self, context: &mut BTreeMap<String, String>) {
        match self {
            Self::List => {
                context.insert(REQUEST_KEY.to_string(), "list".to_string());
            }
            Self::Save { session } => {
                context.insert(REQUEST_KEY.to_string(), "save".to_string());
                context.insert(SESSION_KEY.to_string(), session.to_string());
            }
            Self::Delete { id } => {
                context.insert(REQUEST_KEY.to_string(), "delete".to_string());
                context.insert(EMPLOYEE_KEY.to_string(), id.to_string());
            }
        }
    }

    /// Recovers the tag from a reply's context map.
    ///
    /// Returns `None` for maps that were not produced by [`StoreRequest::context`],
    /// such as replies to requests issued by another plugin instance.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(REQUEST_KEY)?.as_str() {
            "list" => Some(Self::List),
            "save" => {
                let session = context.get(SESSION_KEY)?.parse().ok()?;
                Some(Self::Save { session })
            }
            "delete" => {
                let id = context.get(EMPLOYEE_KEY)?;
                Some(Self::Delete { id: EmployeeId::new(id.as_str()) })
            }
            _ => None,
        }
    }
}

/// A fully described remote operation, ready for the runtime to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
    pub tag: RequestTag,
    /// Trace of the span that issued the request, if tracing is active.
    pub trace_context: Option<TraceContext>,
}

impl StoreRequest {
    /// Builds the opaque context map the runtime echoes back with the reply.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        self.tag.write_to(&mut context);
        if let Some(trace) = &self.trace_context {
            context.insert(TRACE_ID_KEY.to_string(), trace.trace_id.clone());
            context.insert(PARENT_SPAN_KEY.to_string(), trace.parent_span_id.clone());
        }
        context
    }

    /// Parses the body as JSON, for inspection in logs and tests.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body is not valid JSON.
    pub fn json_body(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Reads the trace context a reply carries back, if any.
#[must_use]
pub fn trace_from_context(context: &BTreeMap<String, String>) -> Option<TraceContext> {
    Some(TraceContext {
        trace_id: context.get(TRACE_ID_KEY)?.clone(),
        parent_span_id: context.get(PARENT_SPAN_KEY)?.clone(),
    })
}

/// Parses a record store root URL.
///
/// The URL must be absolute `http` or `https` with a host, and may carry a
/// path prefix but no query or fragment. Trailing slashes of the path are
/// dropped.
///
/// # Errors
///
/// Returns [`StaffboardError::Config`] describing what is wrong with `raw`.
///
/// ```
/// use staffboard::client::parse_base_url;
///
/// let url = parse_base_url("https://hr.example.com/store//").unwrap();
/// assert_eq!(url.as_str(), "https://hr.example.com/store");
/// assert!(parse_base_url("https://hr.example.com?tenant=1").is_err());
/// ```
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let invalid = |reason: &str| StaffboardError::Config(format!("api_base_url {reason}: {raw}"));

    let mut url = Url::parse(raw).map_err(|e| invalid(&format!("is not a valid URL ({e})")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("must use http or https"));
    }
    if url.cannot_be_a_base() || url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment"));
    }

    let path = url.path().trim_end_matches('/').to_string();
    url.set_path(&path);
    Ok(url)
}

/// Builds requests against one record store.
///
/// Cloning is cheap; each controller keeps its own copy.
///
/// # Example
///
/// ```
/// use staffboard::client::{HttpMethod, RecordStoreClient};
///
/// let client = RecordStoreClient::new("http://localhost:8080/")?;
/// let request = client.list();
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(request.url, "http://localhost:8080/api/get-all-employees");
/// # Ok::<(), staffboard::StaffboardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStoreClient {
    base_url: Url,
}

impl RecordStoreClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";

    /// Client for the store rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StaffboardError::Config`] if [`parse_base_url`] rejects `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        parse_base_url(base_url).map(Self::from_url)
    }

    /// Client for a URL already accepted by [`parse_base_url`].
    #[must_use]
    pub fn from_url(base_url: Url) -> Self {
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Request for the full employee collection.
    #[must_use]
    pub fn list(&self) -> StoreRequest {
        self.build(HttpMethod::Get, &["api", "get-all-employees"], None, RequestTag::List)
    }

    /// Request creating a new employee from `fields`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if `fields` cannot be encoded as JSON.
    pub fn create(&self, fields: &EmployeeFields, session: u64) -> Result<StoreRequest> {
        let body = serde_json::to_vec(fields)?;
        Ok(self.build(
            HttpMethod::Post,
            &["api", "add-employee"],
            Some(body),
            RequestTag::Save { session },
        ))
    }

    /// Request replacing the fields of the employee `id`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if `fields` cannot be encoded as JSON.
    pub fn update(&self, id: &EmployeeId, fields: &EmployeeFields, session: u64) -> Result<StoreRequest> {
        let body = serde_json::to_vec(fields)?;
        Ok(self.build(
            HttpMethod::Put,
            &["api", "update-employee", id.as_str()],
            Some(body),
            RequestTag::Save { session },
        ))
    }

    /// Request deleting the employee `id`.
    #[must_use]
    pub fn delete(&self, id: &EmployeeId) -> StoreRequest {
        self.build(
            HttpMethod::Delete,
            &["api", "delete-employee", id.as_str()],
            None,
            RequestTag::Delete { id: id.clone() },
        )
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        match url.path_segments_mut() {
            Ok(mut path) => {
                path.pop_if_empty().extend(segments);
            }
            Err(()) => tracing::warn!(base_url = %self.base_url, "base url cannot take a path"),
        }
        url
    }

    fn build(&self, method: HttpMethod, segments: &[&str], body: Option<Vec<u8>>, tag: RequestTag) -> StoreRequest {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let url = self.endpoint(segments);
        tracing::debug!(method = %method, url = %url, tag = ?tag, "built store request");

        StoreRequest {
            method,
            url: url.into(),
            headers,
            body: body.unwrap_or_default(),
            tag,
            trace_context: TraceContext::from_current(),
        }
    }
}

impl Default for RecordStoreClient {
    /// Client for [`RecordStoreClient::DEFAULT_BASE_URL`].
    ///
    /// # Panics
    ///
    /// Panics if the default base URL fails to parse.
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL).expect("default base url should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> EmployeeFields {
        EmployeeFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            department: "Eng".into(),
            salary: 1000.0,
            age: 30,
        }
    }

    #[test]
    fn create_posts_fields_without_identity() {
        let client = RecordStoreClient::default();
        let request = client.create(&fields(), 4).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:8080/api/add-employee");
        assert_eq!(request.headers["Content-Type"], "application/json");
        assert_eq!(request.tag, RequestTag::Save { session: 4 });

        let body = request.json_body().unwrap();
        assert_eq!(body["name"], "Ada");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn update_and_delete_address_the_row() {
        let client = RecordStoreClient::new("https://store.internal/").unwrap();
        let id = EmployeeId::new("0b6f3c1e-2a4d");

        let update = client.update(&id, &fields(), 1).unwrap();
        assert_eq!(update.method, HttpMethod::Put);
        assert_eq!(update.url, "https://store.internal/api/update-employee/0b6f3c1e-2a4d");

        let delete = client.delete(&id);
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.url, "https://store.internal/api/delete-employee/0b6f3c1e-2a4d");
        assert!(delete.body.is_empty());
        assert!(!delete.headers.contains_key("Content-Type"));
    }

    #[test]
    fn identity_is_percent_encoded_in_paths() {
        let client = RecordStoreClient::default();
        let request = client.delete(&EmployeeId::new("a b/c"));

        assert!(request.url.ends_with("/api/delete-employee/a%20b%2Fc"));
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let client = RecordStoreClient::new("https://hr.example.com/store/").unwrap();

        assert_eq!(client.list().url, "https://hr.example.com/store/api/get-all-employees");
    }

    #[test]
    fn base_url_rejects_query_fragment_and_foreign_schemes() {
        for raw in [
            "http://hr.example.com?tenant=1",
            "http://hr.example.com/#top",
            "ftp://hr.example.com",
            "mailto:hr@example.com",
            "localhost:8080",
            "http://",
        ] {
            assert!(
                matches!(parse_base_url(raw), Err(StaffboardError::Config(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn tags_survive_the_context_map() {
        let client = RecordStoreClient::default();
        let id = EmployeeId::new("7");

        for request in [client.list(), client.create(&fields(), 9).unwrap(), client.delete(&id)] {
            let context = request.context();
            assert_eq!(RequestTag::from_context(&context), Some(request.tag.clone()));
        }
    }

    #[test]
    fn foreign_context_maps_are_not_recognised() {
        let mut context = BTreeMap::new();
        assert_eq!(RequestTag::from_context(&context), None);

        context.insert(REQUEST_KEY.to_string(), "save".to_string());
        context.insert(SESSION_KEY.to_string(), "not-a-number".to_string());
        assert_eq!(RequestTag::from_context(&context), None);
    }
}
