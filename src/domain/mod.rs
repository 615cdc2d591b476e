//! Domain layer for the Staffboard plugin.
//!
//! Core types and rules with no dependency on Zellij or on the network:
//!
//! - [`error`]: Error types and result aliases
//! - [`employee`]: Employee record model and wire shape
//! - [`field`]: The editable fields and their length limits
//! - [`validator`]: Pure per-field validation
//!
//! # Examples
//!
//! ```
//! use staffboard::domain::{validate, Field};
//!
//! let raw = Field::Name.truncate(&"x".repeat(80));
//! assert_eq!(raw.len(), 50);
//! assert_eq!(validate(Field::Name, &raw), None);
//! ```

pub mod employee;
pub mod error;
pub mod field;
pub mod validator;

pub use employee::{EmployeeFields, EmployeeId, EmployeeRecord};
pub use error::{Result, StaffboardError};
pub use field::Field;
pub use validator::{validate, validate_named, FieldError};
