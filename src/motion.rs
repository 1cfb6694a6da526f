use std::f64::consts::PI;
use std::rc::Rc;

use crate::host::Host;
use crate::renderer;
use crate::starfield::StarField;
use crate::state::{SceneState, SharedScene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    // First callback, timing only
    Started,
    Advanced(f64),
    Done,
}

/// One movement run. Speeds up and slows down along `sin(PI * t)`.
#[derive(Debug, Clone)]
pub struct MotionRun {
    total_ms: f64,
    start: Option<f64>,
    prev: f64,
    t: f64,
    done: bool,
}

impl MotionRun {
    // A missing or zero duration is drawn from the configured range
    pub fn begin(scene: &mut SceneState, duration: Option<f64>) -> Self {
        let duration = match duration {
            Some(d) if d > 0.0 => d,
            _ => scene.rng.range(scene.config.min_duration, scene.config.max_duration),
        };
        let star_speed = scene.config.star_speed;
        scene.field.retarget(star_speed, scene.rng.as_mut());

        MotionRun {
            total_ms: duration * 1000.0,
            start: None,
            prev: 0.0,
            t: 0.0,
            done: false,
        }
    }

    pub fn on_frame(&mut self, timestamp: f64, field: &mut StarField) -> FrameStep {
        if self.done {
            return FrameStep::Done;
        }
        let start = match self.start {
            Some(start) => start,
            None => {
                self.start = Some(timestamp);
                self.prev = timestamp;
                return FrameStep::Started;
            }
        };

        if timestamp - start >= self.total_ms {
            self.done = true;
            return FrameStep::Done;
        }

        self.t += (timestamp - self.prev) / self.total_ms;
        let modulator = (PI * self.t).sin();
        field.move_all(modulator);
        self.prev = timestamp;
        FrameStep::Advanced(modulator)
    }
}

#[cfg(test)]
impl MotionRun {
    pub fn total_ms(&self) -> f64 {
        self.total_ms
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

// Starting a run retires any run still in flight
pub fn start_motion<H: Host + 'static>(scene: SharedScene, host: Rc<H>, duration: Option<f64>) {
    let (run, generation) = {
        let mut s = scene.borrow_mut();
        s.motion_run += 1;
        (MotionRun::begin(&mut s, duration), s.motion_run)
    };
    request_next(scene, host, run, generation);
}

fn request_next<H: Host + 'static>(scene: SharedScene, host: Rc<H>, mut run: MotionRun, generation: u64) {
    let h = host.clone();
    host.request_frame(Box::new(move |timestamp: f64| {
        if scene.borrow().motion_run != generation {
            return;
        }
        let step = run.on_frame(timestamp, &mut scene.borrow_mut().field);
        match step {
            FrameStep::Done => return,
            FrameStep::Started => {}
            FrameStep::Advanced(modulator) => {
                if let Some(ctx) = h.surface() {
                    renderer::render(&ctx, &scene.borrow(), modulator);
                }
            }
        }
        request_next(scene, h, run, generation);
    }));
}
