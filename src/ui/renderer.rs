//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Draw the active screen, then any dialog on top
//!
//! # Example
//!
//! ```
//! use staffboard::app::AppState;
//! use staffboard::client::RecordStoreClient;
//! use staffboard::ui::{render, Theme};
//!
//! let state = AppState::new(RecordStoreClient::default(), Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ScreenBody, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        ScreenBody::List(body) => components::render_list_screen(&vm.header, body, &vm.footer, theme, rows, cols),
        ScreenBody::Form(body) => components::render_form_screen(&vm.header, body, &vm.footer, theme, rows, cols),
    }

    if let Some(dialog) = &vm.dialog {
        components::render_dialog(dialog, theme, rows, cols);
    }
}
