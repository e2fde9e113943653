use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::Engine;
use crate::dom;
use crate::surface::CanvasSurface;

/// All mutable per-page state, shared by the frame callback and the
/// resize/visibility handlers through one `Rc<RefCell<..>>`. Everything runs
/// on the single browser thread; the RAF callback is the only suspension
/// point.
pub struct App {
    pub engine: Engine,
    pub surface: CanvasSurface,
    pub running: bool,
    /// Timestamp of the previous frame, in ms (DOMHighResTimeStamp).
    pub last: f64,
    pub respect_reduced_motion: bool,
}

impl App {
    /// One frame. Returns whether the loop should reschedule itself.
    pub fn frame(&mut self, now: f64) -> bool {
        if !self.running {
            return false;
        }
        let dt = now - self.last;
        self.last = now;
        self.engine.frame(dt, &mut self.surface);
        true
    }

    pub fn handle_resize(&mut self, window: &web::Window) {
        self.surface.resize(window);
        let (w, h) = self.surface.view_size();
        self.engine.set_viewport(w, h);
    }
}

/// Self-referential RAF closure handle so visibility transitions can re-enter
/// the same loop instead of spawning a second one.
pub type TickHandle = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn make_loop(app: Rc<RefCell<App>>) -> TickHandle {
    let tick: TickHandle = Rc::new(RefCell::new(None));
    let tick_inner = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let keep_going = app.borrow_mut().frame(now);
        if keep_going {
            schedule(&tick_inner);
        }
    }) as Box<dyn FnMut(f64)>));
    tick
}

pub fn schedule(tick: &TickHandle) {
    if let Some(window) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

/// On every visibility change recompute `running`; on a stopped-to-running
/// transition reset `last` so the first resumed frame sees a small dt, then
/// re-enter the loop.
pub fn wire_visibility(app: Rc<RefCell<App>>, tick: TickHandle, document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let resume = {
            let mut a = app.borrow_mut();
            let was_running = a.running;
            a.running = !doc.hidden() || !a.respect_reduced_motion;
            if a.running && !was_running {
                if let Some(window) = web::window() {
                    a.last = dom::performance_now(&window);
                }
                true
            } else {
                false
            }
        };
        if resume {
            schedule(&tick);
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
