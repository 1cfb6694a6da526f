use std::rc::Rc;

use crate::config::Config;
use crate::error::SetupError;
use crate::host::Host;
use crate::renderer;
use crate::rng::RandomSource;
use crate::scheduler;
use crate::state::{new_shared_scene, SharedScene};

// CSS hints for the frame around the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Decor {
    pub rotate_angle: f64, // deg
    pub x_offset: f64,     // px
    pub y_offset: f64,     // px
    pub flip: bool,
    pub flop: bool,
}

impl Decor {
    pub fn random(rng: &mut dyn RandomSource, w: f64, h: f64) -> Self {
        let (ow, oh) = (w * 0.2, h * 0.2);
        Decor {
            rotate_angle: rng.next_f64() * 360.0,
            x_offset: rng.next_f64() * ow - ow / 2.0,
            y_offset: rng.next_f64() * oh - oh / 2.0,
            flip: rng.chance(),
            flop: rng.chance(),
        }
    }

    pub fn apply<H: Host>(&self, host: &H) {
        host.set_style_var("--rotate-angle", &format!("{}deg", self.rotate_angle));
        host.set_style_var("--x-offset", &format!("{}px", self.x_offset));
        host.set_style_var("--y-offset", &format!("{}px", self.y_offset));
        host.set_style_var("--flip", if self.flip { "scaleX(-1)" } else { "scaleX(1)" });
        host.set_style_var("--flop", if self.flop { "scaleY(-1)" } else { "scaleY(1)" });
    }
}

pub fn bootstrap<H: Host + 'static>(
    host: Rc<H>,
    config: Config,
    rng: Box<dyn RandomSource>,
) -> Result<SharedScene, SetupError> {
    let ctx = host.surface().ok_or(SetupError::NoSurface)?;

    let initial_delay = config.initial_delay;
    let scene = new_shared_scene(config, rng);
    let (w, h) = host.viewport();
    host.resize_surface(w, h);

    {
        let mut s = scene.borrow_mut();
        s.screen_w = w;
        s.screen_h = h;
        let decor = Decor::random(s.rng.as_mut(), w, h);
        decor.apply(&*host);
        renderer::render(&ctx, &s, 0.0);
    }

    let scene_t = scene.clone();
    let host_t = host.clone();
    host.set_timeout(
        (initial_delay * 1000.0).round() as u32,
        Box::new(move || {
            scheduler::start_cycle(scene_t, host_t);
        }),
    );

    Ok(scene)
}

pub fn on_resize<H: Host>(scene: &SharedScene, host: &H) {
    let Some(ctx) = host.surface() else {
        return;
    };
    let (w, h) = host.viewport();
    host.resize_surface(w, h);

    let mut s = scene.borrow_mut();
    s.screen_w = w;
    s.screen_h = h;
    renderer::render(&ctx, &s, 0.0);
}
