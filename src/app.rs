use std::rc::Rc;

use leptos::prelude::*;

use crate::bootstrap;
use crate::canvas::{self, BrowserHost};
use crate::config::CANVAS_ID;
use crate::error::SetupError;
use crate::rng::MathRandom;

fn start() -> Result<(), SetupError> {
    let host = Rc::new(BrowserHost::new(CANVAS_ID)?);
    let config = host.load_config();
    let scene = bootstrap::bootstrap(host.clone(), config, Box::new(MathRandom))?;
    canvas::setup_resize_handler(scene, host);
    Ok(())
}

#[component]
pub fn App() -> impl IntoView {
    // Runs once the canvas is mounted
    Effect::new(move |_| {
        if let Err(e) = start() {
            web_sys::console::error_1(&format!("starfield: {}", e).into());
        }
    });

    view! {
        <div class="frame">
            <canvas id=CANVAS_ID></canvas>
        </div>
    }
}
