mod app;
mod bootstrap;
mod canvas;
mod config;
mod error;
mod host;
mod motion;
mod renderer;
mod rng;
mod scheduler;
mod starfield;
mod state;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
