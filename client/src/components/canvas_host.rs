//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns scene, camera, and gesture state; this host maps DOM
//! events into engine calls and applies the [`Action`]s the engine returns.
//! Repaint requests coalesce through a single `requestAnimationFrame`
//! callback; cursor changes go straight to the canvas element's style.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use canvas::engine::{Action, Engine};
use canvas::input::{Key, WheelDelta};

use crate::state::ui::UiState;
use crate::util::canvas_input::{
    map_button, map_modifiers, pointer_point, should_prevent_default_key, wheel_point,
};
use crate::util::canvas_viewport::{now_ms, sync_viewport};

fn render_and_log(engine: &mut Engine) {
    let started_ms = now_ms();
    if let Err(err) = engine.render() {
        log::error!("canvas render failed: {err:?}");
        return;
    }
    log::trace!("rendered scene in {:.2}ms", (now_ms() - started_ms).max(0.0));
}

/// Schedule a repaint on the next animation frame. Repeat requests while one
/// is pending are dropped; if `requestAnimationFrame` is unavailable the
/// repaint happens synchronously.
fn request_render(engine: &Rc<RefCell<Option<Engine>>>, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        if let Some(engine) = engine.borrow_mut().as_mut() {
            render_and_log(engine);
        }
        return;
    };

    let engine_for_cb = Rc::clone(engine);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        if let Some(engine) = engine_for_cb.borrow_mut().as_mut() {
            render_and_log(engine);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        if let Some(engine) = engine.borrow_mut().as_mut() {
            render_and_log(engine);
        }
    }
}

fn apply_cursor(canvas_ref: &NodeRef<leptos::html::Canvas>, cursor: &str) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    if let Err(err) = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor) {
        log::error!("failed to set canvas cursor: {err:?}");
    }
}

fn apply_actions(
    actions: Vec<Action>,
    engine: &Rc<RefCell<Option<Engine>>>,
    canvas_ref: &NodeRef<leptos::html::Canvas>,
    raf_pending: RwSignal<bool>,
) {
    for action in actions {
        match action {
            Action::RenderNeeded => request_render(engine, raf_pending),
            Action::SetCursor(cursor) => apply_cursor(canvas_ref, &cursor),
        }
    }
}

/// Canvas host component.
///
/// Owns the `<canvas>` element and the engine instance, forwards pointer,
/// wheel, and keyboard events, and processes the resulting actions.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let raf_pending = RwSignal::new(false);
    let engine = Rc::new(RefCell::new(None::<Engine>));

    // Mount: build the engine once the canvas node exists, size its backing
    // store, hook up the resize listener, and paint the first frame.
    {
        let engine = Rc::clone(&engine);
        let canvas_ref_mount = canvas_ref;
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas);
            sync_viewport(&mut instance, &canvas_ref_mount);
            let actions = instance.set_tool(ui.get_untracked().active_tool);
            for action in actions {
                if let Action::SetCursor(cursor) = action {
                    apply_cursor(&canvas_ref_mount, &cursor);
                }
            }
            render_and_log(&mut instance);
            *engine.borrow_mut() = Some(instance);
            log::info!("canvas engine started");

            if let Some(window) = web_sys::window() {
                let engine_for_resize = Rc::clone(&engine);
                let cb = Closure::wrap(Box::new(move || {
                    if let Some(engine) = engine_for_resize.borrow_mut().as_mut() {
                        sync_viewport(engine, &canvas_ref_mount);
                        render_and_log(engine);
                    }
                }) as Box<dyn FnMut()>);
                if window
                    .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::error!("failed to register resize listener");
                }
                // Listener lives for the page; leak the closure.
                cb.forget();
            }
        });
    }

    // Push tool changes from the store into the engine.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let tool = ui.get().active_tool;
            let actions = match engine.borrow_mut().as_mut() {
                Some(engine) => engine.set_tool(tool),
                None => return,
            };
            apply_actions(actions, &engine, &canvas_ref, raf_pending);
        });
    }

    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if let Some(canvas) = canvas_ref.get() {
                let _ = canvas.focus();
                let _ = canvas.set_pointer_capture(ev.pointer_id());
            }
            let actions = match engine.borrow_mut().as_mut() {
                Some(engine) => {
                    sync_viewport(engine, &canvas_ref);
                    let point = pointer_point(&ev);
                    let button = map_button(ev.button());
                    let modifiers =
                        map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    engine.on_pointer_down(point, button, modifiers)
                }
                None => return,
            };
            apply_actions(actions, &engine, &canvas_ref, raf_pending);
        }
    };

    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let actions = match engine.borrow_mut().as_mut() {
                Some(engine) => {
                    let point = pointer_point(&ev);
                    let modifiers =
                        map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    engine.on_pointer_move(point, modifiers)
                }
                None => return,
            };
            apply_actions(actions, &engine, &canvas_ref, raf_pending);
        }
    };

    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(canvas) = canvas_ref.get() {
                let _ = canvas.release_pointer_capture(ev.pointer_id());
            }
            let actions = match engine.borrow_mut().as_mut() {
                Some(engine) => {
                    let point = pointer_point(&ev);
                    let button = map_button(ev.button());
                    let modifiers =
                        map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    engine.on_pointer_up(point, button, modifiers)
                }
                None => return,
            };
            apply_actions(actions, &engine, &canvas_ref, raf_pending);
        }
    };

    // Leaving the canvas ends the gesture the same way pointer-up does.
    let on_pointer_leave = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(canvas) = canvas_ref.get() {
                let _ = canvas.release_pointer_capture(ev.pointer_id());
            }
            let actions = match engine.borrow_mut().as_mut() {
                Some(engine) => {
                    let point = pointer_point(&ev);
                    let button = map_button(ev.button());
                    let modifiers =
                        map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    engine.on_pointer_up(point, button, modifiers)
                }
                None => return,
            };
            apply_actions(actions, &engine, &canvas_ref, raf_pending);
        }
    };

    let on_wheel = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::WheelEvent| {
            ev.prevent_default();
            let actions = match engine.borrow_mut().as_mut() {
                Some(engine) => {
                    sync_viewport(engine, &canvas_ref);
                    let point = wheel_point(&ev);
                    let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                    let modifiers =
                        map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    engine.on_wheel(point, delta, modifiers)
                }
                None => return,
            };
            apply_actions(actions, &engine, &canvas_ref, raf_pending);
        }
    };

    let on_key_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::KeyboardEvent| {
            let key = ev.key();
            if should_prevent_default_key(&key) {
                ev.prevent_default();
            }
            let actions = match engine.borrow_mut().as_mut() {
                Some(engine) => {
                    let modifiers =
                        map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    engine.on_key_down(Key(key), modifiers)
                }
                None => return,
            };
            apply_actions(actions, &engine, &canvas_ref, raf_pending);
        }
    };

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            tabindex="0"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:wheel=on_wheel
            on:keydown=on_key_down
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
