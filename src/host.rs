//! Browser entry point: finds the canvas, wires DOM events into [`Engine`]
//! and drives the animation frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Event, HtmlCanvasElement, TouchEvent, TouchList, Window};

use crate::config::DemoConfig;
use crate::engine::Engine;
use crate::geometry::Point;
use crate::touch::{Contact, TouchEffect};

const CANVAS_ID: &str = "canvas";
const CONFIG_SCRIPT_ID: &str = "demo-config";

/// Contacts forwarded per `touchmove`; further fingers are ignored.
const MAX_CONTACTS: u32 = 2;

type SharedEngine = Rc<RefCell<Engine>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Module entry point, run once when the wasm module is instantiated.
///
/// # Errors
///
/// Returns `Err` if the page has no `#canvas`, the canvas has no 2D context,
/// or the configuration fails to parse or validate.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {e}")));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let config = load_config(&window, &document)?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("missing <canvas id=\"canvas\">"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(JsValue::from)?;

    let engine: SharedEngine = Rc::new(RefCell::new(Engine::new(canvas.clone(), &config)?));
    fit_to_body(&document, &mut engine.borrow_mut());

    install_resize(&window, &document, &engine)?;
    install_visibility(&document, &engine)?;
    install_touch(&canvas, &engine)?;
    start_frame_loop(&window, engine)?;

    log::info!("demo started with {:?}", config.shape);
    Ok(())
}

// =============================================================
// Configuration
// =============================================================

/// Inline JSON from `<script id="demo-config">`, then URL query overrides.
fn load_config(window: &Window, document: &Document) -> Result<DemoConfig, JsValue> {
    let mut config = match document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) {
        Some(json) if !json.trim().is_empty() => DemoConfig::from_json(&json).map_err(to_js)?,
        _ => DemoConfig::default(),
    };
    let search = window.location().search()?;
    config.apply_query(&search).map_err(to_js)?;
    config.validate().map_err(to_js)?;
    log::debug!("loaded config: {config:?}");
    Ok(config)
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// =============================================================
// Viewport
// =============================================================

fn fit_to_body(document: &Document, engine: &mut Engine) {
    let Some(body) = document.body() else {
        log::warn!("document has no body; keeping canvas size");
        return;
    };
    let width = u32::try_from(body.client_width()).unwrap_or(0);
    let height = u32::try_from(body.client_height()).unwrap_or(0);
    engine.set_viewport(width, height);
}

fn install_resize(window: &Window, document: &Document, engine: &SharedEngine) -> Result<(), JsValue> {
    let engine = Rc::clone(engine);
    let document = document.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        fit_to_body(&document, &mut engine.borrow_mut());
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// A hidden tab stops receiving frames; restart the clock so the first frame
/// after it returns does not jump.
fn install_visibility(document: &Document, engine: &SharedEngine) -> Result<(), JsValue> {
    let engine = Rc::clone(engine);
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        if doc.hidden() {
            engine.borrow_mut().core.clock.reset();
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// =============================================================
// Touch
// =============================================================

fn install_touch(canvas: &HtmlCanvasElement, engine: &SharedEngine) -> Result<(), JsValue> {
    {
        let engine = Rc::clone(engine);
        let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
            if let Some(first) = contacts(&event.target_touches()).first() {
                engine.borrow_mut().on_touch_start(first.id, first.position);
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let engine = Rc::clone(engine);
        let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
            let effect = engine.borrow_mut().on_touch_move(&contacts(&event.target_touches()));
            if effect == TouchEffect::SuppressDefault {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        // Non-passive so prevent_default() can stop page scrolling.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        closure.forget();
    }

    for name in ["touchend", "touchcancel"] {
        let engine = Rc::clone(engine);
        let closure = Closure::wrap(Box::new(move |_event: TouchEvent| {
            engine.borrow_mut().on_touch_end();
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Up to [`MAX_CONTACTS`] contacts in page coordinates.
fn contacts(list: &TouchList) -> Vec<Contact> {
    (0..list.length().min(MAX_CONTACTS))
        .filter_map(|i| list.item(i))
        .map(|t| Contact::new(t.identifier(), Point::new(f64::from(t.page_x()), f64::from(t.page_y()))))
        .collect()
}

// =============================================================
// Frame loop
// =============================================================

fn start_frame_loop(window: &Window, engine: SharedEngine) -> Result<(), JsValue> {
    let holder: FrameCallback = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();

    *holder.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if let Err(err) = engine.borrow_mut().frame(now) {
            log::error!("frame failed: {err:?}");
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            if let Err(err) = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("request_animation_frame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = holder.borrow();
    let cb = first.as_ref().ok_or_else(|| JsValue::from_str("frame callback not installed"))?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}
