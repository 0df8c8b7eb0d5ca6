// A single snowflake: position, plus motion and look fixed at creation

use crate::color::Color;
use crate::config::SnowConfig;
use rand::Rng;
use vecmath::{vec2_add, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub radius: f64,
    pub fall_speed: f64,
    pub drift: f64,
    pub opacity: f64,
    pub color: Color,
}

impl Particle {
    pub const OPACITY: f64 = 1.0;

    pub fn new(pos_x: f64, pos_y: f64, radius: f64, fall_speed: f64, drift: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            radius,
            fall_speed,
            drift,
            opacity: Particle::OPACITY,
            color: Color::WHITE,
        }
    }

    // Random flake somewhere inside a width x height surface
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &SnowConfig) -> Particle {
        let pos_x = sample(rng, 0.0, width);
        let pos_y = sample(rng, 0.0, height);
        let radius = sample_between(rng, config.min_radius, config.max_radius);
        let fall_speed = sample_between(rng, config.min_fall_speed, config.max_fall_speed);
        let drift = sample(rng, -config.max_drift.abs(), config.max_drift.abs());
        let mut p = Particle::new(pos_x, pos_y, radius, fall_speed, drift);
        p.color = Color::from_u32(config.color);
        p
    }

    pub fn x(&self) -> f64 {
        self.pos[0]
    }

    pub fn y(&self) -> f64 {
        self.pos[1]
    }

    // Per-tick displacement
    pub fn velocity(&self) -> Vector2<f64> {
        [self.drift, self.fall_speed]
    }

    // Moves the flake one tick and wraps it back into the surface.
    // Returns true when it fell past the bottom and restarted above the top.
    pub fn step<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64, wrap_y: f64) -> bool {
        self.pos = vec2_add(self.pos, self.velocity());

        let mut wrapped = false;
        if self.pos[1] > height {
            self.pos[1] = wrap_y;
            self.pos[0] = sample(rng, 0.0, width);
            wrapped = true;
        }
        if self.pos[0] > width {
            self.pos[0] = 0.0;
        } else if self.pos[0] < 0.0 {
            self.pos[0] = width;
        }
        wrapped
    }
}

// Uniform in [low, high), collapsing to low for an empty range instead of
// panicking inside gen_range
pub fn sample<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low, high)
    } else {
        low
    }
}

// Same as sample, for bounds that may come in either order
pub fn sample_between<R: Rng>(rng: &mut R, a: f64, b: f64) -> f64 {
    sample(rng, a.min(b), a.max(b))
}
