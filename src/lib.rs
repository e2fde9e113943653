#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Config, Engine};
use crate::frame::App;
use crate::surface::CanvasSurface;

mod constants;
mod core;
mod dom;
mod frame;
mod surface;

/// Why the background never started. The effect is fatal only to itself; the
/// host page keeps working either way.
enum Disabled {
    OptOut,
    MissingCanvas,
    Setup(anyhow::Error),
}

impl fmt::Display for Disabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disabled::OptOut => write!(f, "disabled by host flag"),
            Disabled::MissingCanvas => write!(f, "missing #{}", constants::CANVAS_ID),
            Disabled::Setup(e) => write!(f, "{e}"),
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    match setup() {
        Ok(()) => {}
        Err(Disabled::OptOut) => log::info!("background disabled by host flag"),
        Err(reason) => log::warn!("background disabled: {reason}"),
    }
    Ok(())
}

fn setup() -> Result<(), Disabled> {
    let window = web::window().ok_or_else(|| Disabled::Setup(anyhow::anyhow!("no window")))?;
    let document = window
        .document()
        .ok_or_else(|| Disabled::Setup(anyhow::anyhow!("no document")))?;

    // Escape hatches come before any other work.
    if dom::opt_out(&window) {
        return Err(Disabled::OptOut);
    }

    let canvas = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or(Disabled::MissingCanvas)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| Disabled::Setup(anyhow::anyhow!("#{} is not a canvas", constants::CANVAS_ID)))?;

    let mut surface = CanvasSurface::new(canvas).map_err(Disabled::Setup)?;
    surface.resize(&window);

    let config = Config::default();
    let (view_w, view_h) = surface.view_size();
    let engine = Engine::new(config.clone(), view_w, view_h, rand::random());

    let running = if config.respect_reduced_motion {
        !dom::prefers_reduced_motion(&window)
    } else {
        true
    };

    let app = Rc::new(RefCell::new(App {
        engine,
        surface,
        running,
        last: dom::performance_now(&window),
        respect_reduced_motion: config.respect_reduced_motion,
    }));

    wire_resize(&window, app.clone());
    let tick = frame::make_loop(app.clone());
    frame::wire_visibility(app.clone(), tick.clone(), &document);

    if app.borrow().running {
        frame::schedule(&tick);
    }
    log::info!(
        "background started: {} pools, {} streaks",
        app.borrow().engine.pools.len(),
        app.borrow().engine.streaks.len()
    );
    Ok(())
}

fn wire_resize(window: &web::Window, app: Rc<RefCell<App>>) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        app.borrow_mut().handle_resize(&win);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
