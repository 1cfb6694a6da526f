use std::f64::consts::PI;

use crate::config::TRACKER_ALPHA;
use crate::host::Surface;
use crate::starfield::Star;
use crate::state::SceneState;

// Tracker lines first so stars land on top. Star alpha ignores the modulator.
pub fn render<S: Surface>(ctx: &S, scene: &SceneState, alpha_modulator: f64) {
    let (w, h) = (scene.screen_w, scene.screen_h);
    ctx.clear_rect(0.0, 0.0, w, h);

    draw_trackers(ctx, scene.field.stars(), scene.config.star_track_distance, w, h, alpha_modulator);

    for star in scene.field.stars() {
        ctx.begin_path();
        ctx.arc(star.x * w, star.y * h, star.size, 0.0, PI * 2.0);
        ctx.set_fill_style(star.color);
        ctx.set_global_alpha(star.brightness);
        ctx.fill();
    }
}

// O(trackers * stars) per frame
fn draw_trackers<S: Surface>(
    ctx: &S,
    stars: &[Star],
    max_distance: f64,
    w: f64,
    h: f64,
    alpha_modulator: f64,
) {
    // sin(PI * t) dips below zero when the last frame overshoots t = 1
    let alpha = (alpha_modulator * TRACKER_ALPHA).clamp(0.0, 1.0);
    if alpha == 0.0 {
        return;
    }

    for (i, star) in stars.iter().enumerate() {
        if !star.tracker {
            continue;
        }
        for (j, target) in stars.iter().enumerate() {
            if i == j {
                continue;
            }
            let dx = star.x - target.x;
            let dy = star.y - target.y;
            if (dx * dx + dy * dy).sqrt() < max_distance {
                ctx.begin_path();
                ctx.move_to(star.x * w, star.y * h);
                ctx.line_to(target.x * w, target.y * h);
                ctx.set_stroke_style(target.color);
                ctx.set_global_alpha(alpha);
                ctx.stroke();
            }
        }
    }
}
