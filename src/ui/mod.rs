//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled output through composable
//! rendering components, with light and dark theme support.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Layout and formatting utilities (padding, wrapping, currency)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeMode};
pub use viewmodel::{
    DialogInfo, DialogKind, DisplayRow, EmptyState, FieldRow, FooterInfo, FormBody, HeaderInfo,
    ListBody, ScreenBody, StatusKind, StatusLine, UIViewModel,
};
