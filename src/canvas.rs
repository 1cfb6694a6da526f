use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::bootstrap;
use crate::config::{Config, CONFIG_ATTR};
use crate::error::SetupError;
use crate::host::{Host, Surface};
use crate::state::SharedScene;

impl Surface for CanvasRenderingContext2d {
    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }
    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }
    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start, end);
    }
    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }
    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }
    fn set_fill_style(&self, color: &str) {
        self.set_fill_style_str(color);
    }
    fn set_stroke_style(&self, color: &str) {
        self.set_stroke_style_str(color);
    }
    fn set_global_alpha(&self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }
    fn fill(&self) {
        CanvasRenderingContext2d::fill(self);
    }
    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }
}

// Canvas is looked up by id on every call, so a removed canvas
// turns late callbacks into no-ops
pub struct BrowserHost {
    canvas_id: String,
}

impl BrowserHost {
    pub fn new(canvas_id: &str) -> Result<Self, SetupError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SetupError::NoWindow)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| SetupError::MissingCanvas(canvas_id.to_string()))?;
        canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or_else(|| SetupError::NoContext(canvas_id.to_string()))?;

        Ok(BrowserHost { canvas_id: canvas_id.to_string() })
    }

    fn canvas(&self) -> Option<HtmlCanvasElement> {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(&self.canvas_id)?.dyn_into().ok()
    }

    pub fn load_config(&self) -> Config {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute(CONFIG_ATTR));
        let Some(raw) = raw else {
            return Config::default();
        };
        match Config::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("starfield: {}, using defaults", e).into());
                Config::default()
            }
        }
    }
}

impl Host for BrowserHost {
    type Surface = CanvasRenderingContext2d;

    fn surface(&self) -> Option<CanvasRenderingContext2d> {
        self.canvas()?
            .get_context("2d")
            .ok()?
            .map(|c| c.unchecked_into())
    }

    fn viewport(&self) -> (f64, f64) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w, h)
    }

    fn resize_surface(&self, w: f64, h: f64) {
        if let Some(canvas) = self.canvas() {
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
        }
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        let _ = window.request_animation_frame(closure.unchecked_ref());
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
    }

    fn set_style_var(&self, name: &str, value: &str) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(root) = root {
            let _ = root.style().set_property(name, value);
        }
    }

    fn log(&self, message: &str) {
        web_sys::console::log_1(&message.into());
    }
}

pub fn setup_resize_handler(scene: SharedScene, host: Rc<BrowserHost>) {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        bootstrap::on_resize(&scene, &*host);
    }) as Box<dyn FnMut(web_sys::Event)>);

    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
