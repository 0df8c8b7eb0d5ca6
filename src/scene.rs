// One particle field bound to one render surface, stepped once per frame

use crate::config::SnowConfig;
use crate::field::ParticleField;
use crate::surface::RenderSurface;
use rand::Rng;

pub struct SnowScene<S: RenderSurface> {
    field: ParticleField,
    surface: S,
    running: bool,
}

impl<S: RenderSurface> SnowScene<S> {
    pub fn new<R: Rng>(surface: S, config: &SnowConfig, rng: &mut R) -> SnowScene<S> {
        let (width, height) = surface.size();
        SnowScene {
            field: ParticleField::initialize(width, height, config, rng),
            surface,
            running: true,
        }
    }

    // Advance and redraw. A stopped scene neither moves nor draws anything.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.running {
            return false;
        }
        self.field.advance(rng);
        self.surface.clear();
        for particle in self.field.particles() {
            self.surface.draw_particle(particle);
        }
        true
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.set_size(width, height);
        let (width, height) = self.surface.size();
        self.field.resize(width, height);
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Draw([f64; 2], f64),
    }

    struct RecordingSurface {
        width: u32,
        height: u32,
        calls: Vec<Call>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            RecordingSurface {
                width,
                height,
                calls: Vec::new(),
            }
        }
    }

    impl RenderSurface for RecordingSurface {
        fn size(&self) -> (f64, f64) {
            (self.width as f64, self.height as f64)
        }

        fn set_size(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
        }

        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn draw_particle(&mut self, particle: &Particle) {
            self.calls.push(Call::Draw(particle.pos, particle.radius));
        }
    }

    fn scene(seed: u64) -> (SnowScene<RecordingSurface>, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scene = SnowScene::new(RecordingSurface::new(800, 600), &SnowConfig::default(), &mut rng);
        (scene, rng)
    }

    #[test]
    fn field_is_sized_from_the_surface() {
        let (scene, _) = scene(20);
        assert_eq!(scene.field().len(), 150);
        assert_eq!((scene.field().width(), scene.field().height()), (800.0, 600.0));
        assert!(scene.surface().calls.is_empty());
    }

    #[test]
    fn tick_clears_then_draws_every_updated_flake() {
        let (mut scene, mut rng) = scene(21);
        assert!(scene.tick(&mut rng));

        let calls = &scene.surface().calls;
        assert_eq!(calls.len(), 151);
        assert_eq!(calls[0], Call::Clear);
        for (call, p) in calls[1..].iter().zip(scene.field().particles()) {
            assert_eq!(*call, Call::Draw(p.pos, p.radius));
        }
    }

    #[test]
    fn stopped_scene_ignores_ticks() {
        let (mut scene, mut rng) = scene(22);
        scene.tick(&mut rng);
        scene.stop();
        assert!(!scene.is_running());

        let particles = scene.field().particles().to_vec();
        let calls = scene.surface().calls.len();
        assert!(!scene.tick(&mut rng));
        assert_eq!(scene.field().particles(), &particles[..]);
        assert_eq!(scene.surface().calls.len(), calls);
    }

    #[test]
    fn resize_updates_surface_and_field_bounds() {
        let (mut scene, mut rng) = scene(23);
        scene.resize(320, 240);
        assert_eq!(scene.surface().size(), (320.0, 240.0));
        assert_eq!((scene.field().width(), scene.field().height()), (320.0, 240.0));

        scene.tick(&mut rng);
        for p in scene.field().particles() {
            assert!(p.x() >= 0.0 && p.x() <= 320.0);
            assert!(p.y() >= -10.0 && p.y() <= 240.0);
        }
    }
}
