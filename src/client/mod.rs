//! Record store client: sans-IO request building and reply normalisation.
//!
//! # Architecture
//!
//! ```text
//! RecordStoreClient ──► StoreRequest ──► runtime (web_request)
//!                                              │
//!        Outcome ◄── decode_* ◄── Reply ◄──────┘
//! ```
//!
//! The client only describes requests. Executing them and turning the result
//! into a [`Reply`] is the plugin shim's job, which keeps every controller
//! testable with synthetic replies.
//!
//! # Example
//!
//! ```
//! use staffboard::client::{decode_deleted, Outcome, RecordStoreClient, Reply};
//! use staffboard::domain::EmployeeId;
//!
//! let client = RecordStoreClient::default();
//! let request = client.delete(&EmployeeId::new("7"));
//! assert!(request.url.ends_with("/api/delete-employee/7"));
//!
//! let outcome = decode_deleted(&Reply::response(404, Vec::new()));
//! assert_eq!(outcome, Outcome::Failed("request failed with status 404".into()));
//! ```

pub mod outcome;
pub mod request;

pub use outcome::{decode_deleted, decode_list, decode_saved, Outcome, Reply};
pub use request::{parse_base_url, trace_from_context, HttpMethod, RecordStoreClient, RequestTag, StoreRequest};
