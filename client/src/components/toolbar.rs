//! Radio-group tool picker floating over the canvas.
//!
//! DESIGN
//! ======
//! Keeps active-tool switching centralized so the canvas host can treat tool
//! choice as state, not direct DOM coupling.

use leptos::prelude::*;

use canvas::input::Tool;

use crate::state::ui::UiState;

#[derive(Clone, Copy)]
struct ToolDef {
    tool: Tool,
    label: &'static str,
    value: &'static str,
}

const TOOLS: &[ToolDef] = &[
    ToolDef { tool: Tool::Hand, label: "Hand", value: "hand" },
    ToolDef {
        tool: Tool::Select,
        label: "Selection - hold shift to select multiple",
        value: "selection",
    },
    ToolDef { tool: Tool::Rect, label: "Rectangle", value: "rectangle" },
    ToolDef { tool: Tool::Line, label: "Line", value: "line" },
];

/// Fieldset of radio buttons, one per tool. Checked state reflects the shared
/// tool store; changing a radio writes it back.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let entries = TOOLS
        .iter()
        .map(|td| {
            let td = *td;
            let checked = move || ui.get().active_tool == td.tool;
            let on_change = move |_ev: leptos::ev::Event| {
                ui.update(|u| u.active_tool = td.tool);
            };

            view! {
                <div>
                    <input
                        id=td.value
                        name="tool"
                        type="radio"
                        value=td.value
                        prop:checked=checked
                        on:change=on_change
                    />
                    <label for=td.value>{td.label}</label>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <fieldset class="toolbar">
            <legend>"Select a tool"</legend>
            {entries}
        </fieldset>
    }
}
