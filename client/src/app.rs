//! Root application component and context providers.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::toolbar::Toolbar;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared tool store and lays out the floating toolbar over the
/// full-screen canvas.
#[component]
pub fn App() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <div class="tools-wrapper">
            <Toolbar/>
        </div>
        <CanvasHost/>
    }
}
