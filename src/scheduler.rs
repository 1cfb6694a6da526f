use std::rc::Rc;

use crate::host::Host;
use crate::motion;
use crate::state::{SceneState, SharedScene};

#[derive(Debug, Clone, PartialEq)]
pub struct CyclePlan {
    pub cycle: u64,
    pub delay: f64,    // s
    pub duration: f64, // s
    pub tracker_draws: usize,
}

impl CyclePlan {
    pub fn next_in_ms(&self) -> u32 {
        ((self.delay + self.duration) * 1000.0).round() as u32
    }

    pub fn log_line(&self) -> String {
        format!("Counter: {}, Duration: {}, Delay: {}s", self.cycle, self.duration, self.delay)
    }
}

pub fn plan_cycle(scene: &mut SceneState) -> CyclePlan {
    let delay = scene.rng.range(scene.config.min_delay, scene.config.max_delay);
    let duration = scene.rng.range(scene.config.min_duration, scene.config.max_duration);

    scene.cycle += 1;

    scene.field.clear_trackers();
    // Upper bound is exclusive: max_trackers itself is never drawn
    let tracker_draws = (scene.rng.next_f64() * scene.config.max_trackers as f64) as usize;
    scene.field.mark_trackers(tracker_draws, scene.rng.as_mut());

    CyclePlan { cycle: scene.cycle, delay, duration, tracker_draws }
}

pub fn start_cycle<H: Host + 'static>(scene: SharedScene, host: Rc<H>) {
    let plan = plan_cycle(&mut scene.borrow_mut());
    host.log(&plan.log_line());

    motion::start_motion(scene.clone(), host.clone(), Some(plan.duration));

    let h = host.clone();
    host.set_timeout(
        plan.next_in_ms(),
        Box::new(move || {
            start_cycle(scene, h);
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::host::testing::ManualHost;
    use crate::rng::testing::{Scripted, Seeded};
    use crate::state::new_shared_scene;

    #[test]
    fn plan_uses_configured_ranges() {
        let mut scene = SceneState::new(Config::default(), Box::new(Seeded::new(21)));
        for n in 1..=200 {
            let plan = plan_cycle(&mut scene);
            assert_eq!(plan.cycle, n);
            assert!((2.0..20.0).contains(&plan.delay));
            assert!((4.0..9.0).contains(&plan.duration));
            assert!(plan.tracker_draws < 5);
            assert!(scene.field.tracker_count() <= plan.tracker_draws);
        }
    }

    #[test]
    fn trackers_reset_each_cycle() {
        let config = Config { star_count: 4, ..Config::default() };
        let rng = Scripted::new(&[0.0]);
        let mut scene = SceneState::new(config, Box::new(rng));
        scene.field.stars_mut()[3].tracker = true;

        // every draw is 0.0: zero trackers drawn
        let plan = plan_cycle(&mut scene);
        assert_eq!(plan.tracker_draws, 0);
        assert_eq!(scene.field.tracker_count(), 0);
    }

    #[test]
    fn tracker_draw_is_exclusive_of_max() {
        let config = Config { star_count: 10, ..Config::default() };
        // delay, duration, count, then picks
        let rng = Scripted::new(&[0.5, 0.5, 0.9999, 0.05, 0.05, 0.05, 0.95]);
        let mut scene = SceneState::new(config, Box::new(Seeded::new(2)));
        scene.rng = Box::new(rng);

        let plan = plan_cycle(&mut scene);
        assert_eq!(plan.tracker_draws, 4);
        // three picks landed on star 0, one on star 9
        assert_eq!(scene.field.tracker_count(), 2);
        assert!(scene.field.stars()[0].tracker);
        assert!(scene.field.stars()[9].tracker);
    }

    #[test]
    fn single_max_tracker_never_tracks() {
        let config = Config { star_count: 100, max_trackers: 1, ..Config::default() };
        let mut scene = SceneState::new(config, Box::new(Seeded::new(8)));
        for _ in 0..100 {
            let plan = plan_cycle(&mut scene);
            assert_eq!(plan.tracker_draws, 0);
            assert_eq!(scene.field.tracker_count(), 0);
        }
    }

    #[test]
    fn log_line_format() {
        let plan = CyclePlan { cycle: 3, delay: 2.5, duration: 4.0, tracker_draws: 0 };
        assert_eq!(plan.log_line(), "Counter: 3, Duration: 4, Delay: 2.5s");
    }

    #[test]
    fn fixed_ranges_schedule_every_six_seconds() {
        let config = Config {
            star_count: 20,
            min_delay: 2.0,
            max_delay: 2.0,
            min_duration: 4.0,
            max_duration: 4.0,
            ..Config::default()
        };
        let host = ManualHost::new(300.0, 200.0);
        let scene = new_shared_scene(config, Box::new(Seeded::new(4)));

        start_cycle(scene.clone(), host.clone());
        let mut starts = vec![host.now.get()];
        for _ in 0..4 {
            // the run finishes well inside its window
            host.run_frames(16.0);
            assert_eq!(host.pending_frames(), 0);
            starts.push(host.fire_next_timer().unwrap());
        }

        assert_eq!(starts, vec![0.0, 6000.0, 12000.0, 18000.0, 24000.0]);
        assert!(host.timer_delays.borrow().iter().all(|d| *d == 6000));
        assert_eq!(scene.borrow().cycle, 5);
        assert_eq!(host.logs.borrow()[0], "Counter: 1, Duration: 4, Delay: 2s");
    }

    #[test]
    fn no_lines_when_max_trackers_is_one() {
        use crate::host::testing::Op;

        let config = Config { star_count: 300, max_trackers: 1, star_track_distance: 1.5, ..Config::default() };
        let host = ManualHost::new(300.0, 200.0);
        let scene = new_shared_scene(config, Box::new(Seeded::new(6)));
        {
            let mut s = scene.borrow_mut();
            s.screen_w = 300.0;
            s.screen_h = 200.0;
        }

        start_cycle(scene.clone(), host.clone());
        for _ in 0..3 {
            host.run_frames(50.0);
            host.fire_next_timer();
        }
        assert!(host.recorder.count(|op| matches!(op, Op::FillDone)) > 0);
        assert_eq!(host.recorder.count(|op| matches!(op, Op::StrokeDone)), 0);
    }

    #[test]
    fn zero_delay_cycles_never_overlap_runs() {
        let config = Config {
            star_count: 10,
            min_delay: 0.0,
            max_delay: 0.0,
            min_duration: 1.0,
            max_duration: 1.0,
            ..Config::default()
        };
        let host = ManualHost::new(300.0, 200.0);
        let scene = new_shared_scene(config, Box::new(Seeded::new(12)));

        start_cycle(scene.clone(), host.clone());
        // first frame lands late, so this run would last until 1500 ms
        host.step_frame(500.0);
        assert_eq!(host.fire_next_timer(), Some(1000.0));
        assert_eq!(host.pending_frames(), 2);

        for _ in 0..80 {
            host.step_frame(16.0);
            assert!(host.pending_frames() <= 1);
        }
        assert_eq!(scene.borrow().cycle, 2);
        assert_eq!(host.pending_timers(), 1);
    }
}
