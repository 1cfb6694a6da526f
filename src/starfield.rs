use std::f64::consts::PI;

use crate::config::Config;
use crate::rng::RandomSource;

pub const PALETTE: [&str; 6] = ["#add8e6", "#ffffff", "#ffffe0", "#ffd700", "#ff8c00", "#ff4500"];

// Position is normalized to the surface
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub brightness: f64,
    pub color: &'static str,
    pub direction: f64,
    pub speed: f64,
    pub tracker: bool,
}

impl Star {
    pub fn random(config: &Config, rng: &mut dyn RandomSource) -> Self {
        Star {
            x: rng.next_f64(),
            y: rng.next_f64(),
            size: rng.next_f64() * config.star_size,
            brightness: rng.next_f64(),
            color: PALETTE[rng.index(PALETTE.len())],
            direction: rng.next_f64() * PI * 2.0,
            speed: 0.0,
            tracker: false,
        }
    }

    pub fn move_by(&mut self, modifier: f64) {
        self.x += self.direction.cos() * self.speed * modifier;
        self.y += self.direction.sin() * self.speed * modifier;

        // Snap to the opposite edge, not a modulo wrap
        if self.y < 0.0 {
            self.y = 1.0;
        } else if self.y > 1.0 {
            self.y = 0.0;
        }
        if self.x < 0.0 {
            self.x = 1.0;
        } else if self.x > 1.0 {
            self.x = 0.0;
        }
    }
}

pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn new(config: &Config, rng: &mut dyn RandomSource) -> Self {
        let stars = (0..config.star_count).map(|_| Star::random(config, rng)).collect();
        StarField { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn retarget(&mut self, star_speed: f64, rng: &mut dyn RandomSource) {
        for star in self.stars.iter_mut() {
            star.speed = rng.next_f64() * star_speed;
            star.direction = rng.next_f64() * PI * 2.0;
        }
    }

    pub fn move_all(&mut self, modifier: f64) {
        for star in self.stars.iter_mut() {
            star.move_by(modifier);
        }
    }

    pub fn clear_trackers(&mut self) {
        for star in self.stars.iter_mut() {
            star.tracker = false;
        }
    }

    // Picked with replacement
    pub fn mark_trackers(&mut self, draws: usize, rng: &mut dyn RandomSource) {
        if self.stars.is_empty() {
            return;
        }
        for _ in 0..draws {
            let i = rng.index(self.stars.len());
            self.stars[i].tracker = true;
        }
    }
}

#[cfg(test)]
impl StarField {
    pub fn from_stars(stars: Vec<Star>) -> Self {
        StarField { stars }
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn tracker_count(&self) -> usize {
        self.stars.iter().filter(|s| s.tracker).count()
    }
}
