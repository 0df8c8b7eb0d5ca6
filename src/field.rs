// The particle field: a fixed set of snowflakes falling through a
// width x height surface.
//
// The collection is created once and only ever mutated in place. Resizing
// changes the bounds but never redistributes flakes; anything left outside
// the new bounds is wrapped back in by later ticks.

use crate::config::SnowConfig;
use crate::particle::Particle;
use rand::Rng;

pub struct ParticleField {
    width: f64,
    height: f64,
    wrap_y: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    // Creates `config.count` flakes scattered uniformly over the surface
    pub fn initialize<R: Rng>(
        width: f64,
        height: f64,
        config: &SnowConfig,
        rng: &mut R,
    ) -> ParticleField {
        let mut particles = Vec::with_capacity(config.count as usize);
        for _ in 0..config.count {
            particles.push(Particle::random(rng, width, height, config));
        }
        ParticleField {
            width,
            height,
            wrap_y: config.wrap_y,
            particles,
        }
    }

    // Moves every flake one tick. Returns how many fell past the bottom
    // edge and restarted above the top.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut wrapped = 0;
        for particle in &mut self.particles {
            if particle.step(rng, self.width, self.height, self.wrap_y) {
                wrapped += 1;
            }
        }
        wrapped
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
