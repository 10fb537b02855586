// ParticleField owns the particles, the surface they are drawn on and the
// random source used to respawn them. The host calls `frame` once per
// animation frame and `on_resize` whenever the viewport changes.

use crate::config::{CONNECT_DISTANCE, CONNECT_LINE_WIDTH, CONNECT_MAX_ALPHA, FIELD_COLOR};
use crate::particle::Particle;
use crate::surface::DrawSurface;
use rand::Rng;

pub struct ParticleField<S, R> {
    surface: S,
    rng: R,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl<S: DrawSurface, R: Rng> ParticleField<S, R> {
    /// An empty field, call `initialize` to populate it
    pub fn new(surface: S, width: f64, height: f64, rng: R) -> Self {
        ParticleField {
            surface,
            rng,
            width,
            height,
            particles: Vec::new(),
        }
    }

    /// Replace the field with `count` freshly randomized particles
    pub fn initialize(&mut self, count: usize) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::random(&mut self.rng, self.width, self.height);
            self.particles.push(p);
        }
    }

    /// Only the cached dimensions change here. Particles left outside the
    /// new bounds are respawned by the next `advance`.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step();
            if particle.is_outside(width, height) {
                particle.reset(&mut self.rng, width, height);
            }
        }
    }

    pub fn render(&mut self) {
        self.surface.clear();
        for p in &self.particles {
            let [x, y] = p.pos;
            self.surface
                .fill_circle(x, y, p.size, FIELD_COLOR.with_alpha(p.opacity));

            // Every other particle is checked, this one included, so each
            // particle also strokes a zero-length segment onto itself
            for other in &self.particles {
                let distance =
                    glm::distance(&glm::vec2(x, y), &glm::vec2(other.pos[0], other.pos[1]));
                if let Some(alpha) = connector_alpha(distance) {
                    self.surface.stroke_line(
                        p.pos,
                        other.pos,
                        FIELD_COLOR.with_alpha(alpha),
                        CONNECT_LINE_WIDTH,
                    );
                }
            }
        }
    }

    pub fn frame(&mut self) {
        self.advance();
        self.render();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Connector opacity for two particles `distance` apart, `None` past the cutoff
pub fn connector_alpha(distance: f64) -> Option<f64> {
    if distance < CONNECT_DISTANCE {
        Some(CONNECT_MAX_ALPHA * (1.0 - distance / CONNECT_DISTANCE))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawCall, Recorder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(width: f64, height: f64, seed: u64) -> ParticleField<Recorder, StdRng> {
        ParticleField::new(Recorder::default(), width, height, StdRng::seed_from_u64(seed))
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 1.0, 0.5)
    }

    fn assert_in_bounds(field: &ParticleField<Recorder, StdRng>) {
        let (w, h) = field.dimensions();
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= w, "x out of bounds: {:?}", p);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= h, "y out of bounds: {:?}", p);
        }
    }

    #[test]
    fn initialize_builds_requested_count() {
        let mut f = field(800.0, 600.0, 1);
        assert!(f.is_empty());
        f.initialize(60);
        assert_eq!(f.len(), 60);
        f.initialize(3);
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn particles_stay_in_bounds_over_many_frames() {
        let mut f = field(200.0, 120.0, 7);
        f.initialize(60);
        for _ in 0..2000 {
            f.advance();
            assert_in_bounds(&f);
            assert_eq!(f.len(), 60);
        }
    }

    #[test]
    fn same_seed_gives_identical_positions() {
        let run = || {
            let mut f = field(640.0, 480.0, 99);
            f.initialize(3);
            f.advance();
            f.particles()
                .iter()
                .map(|p| [p.pos[0].to_bits(), p.pos[1].to_bits()])
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn particle_leaving_the_edge_is_respawned() {
        let (w, h) = (300.0, 200.0);
        let mut f = field(w, h, 3);
        let before = Particle::new(w - 0.01, 100.0, 1.0, 0.0, 1.0, 0.5);
        f.particles = vec![before];

        f.advance();

        let after = f.particles()[0];
        assert_ne!(after.pos[0], before.pos[0] + 1.0);
        assert_ne!(after.pos[1], before.pos[1]);
        assert_ne!(after.size, before.size);
        assert_ne!(after.vel, before.vel);
        assert_ne!(after.opacity, before.opacity);
        assert!(!after.is_outside(w, h));
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn particle_inside_just_moves() {
        let mut f = field(300.0, 200.0, 3);
        f.particles = vec![Particle::new(10.0, 10.0, 0.25, -0.25, 1.0, 0.5)];
        f.advance();
        assert_eq!(f.particles()[0].pos, [10.25, 9.75]);
    }

    #[test]
    fn resize_is_lazy() {
        let mut f = field(800.0, 600.0, 11);
        f.initialize(60);
        f.particles.push(still(700.0, 500.0));

        f.on_resize(800.0, 600.0);
        f.on_resize(400.0, 300.0);
        assert_eq!(f.len(), 61);
        assert_eq!(f.dimensions(), (400.0, 300.0));
        // Not corrected yet
        assert_eq!(f.particles()[60].pos, [700.0, 500.0]);

        f.advance();
        assert_eq!(f.len(), 61);
        assert_in_bounds(&f);
    }

    #[test]
    fn connector_alpha_falls_off_linearly() {
        assert_eq!(connector_alpha(150.0), None);
        assert_eq!(connector_alpha(200.0), None);
        assert_eq!(connector_alpha(75.0), Some(0.05));
        assert_eq!(connector_alpha(0.0), Some(0.1));
    }

    #[test]
    fn render_clears_then_draws_circles() {
        let mut f = field(500.0, 500.0, 5);
        f.particles = vec![Particle::new(10.0, 20.0, 0.0, 0.0, 2.0, 0.3)];
        f.render();

        let calls = &f.surface().calls;
        assert_eq!(calls[0], DrawCall::Clear);
        assert_eq!(
            calls[1],
            DrawCall::Circle {
                x: 10.0,
                y: 20.0,
                radius: 2.0,
                color: FIELD_COLOR.with_alpha(0.3),
            }
        );
    }

    #[test]
    fn no_connector_at_cutoff_distance() {
        let mut f = field(500.0, 500.0, 5);
        f.particles = vec![still(0.0, 0.0), still(150.0, 0.0)];
        f.render();

        // Only the two self segments survive
        let lines: Vec<_> = f.surface().lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            match line {
                DrawCall::Line { from, to, color, width } => {
                    assert_eq!(from, to);
                    assert_eq!(color.a, 0.1);
                    assert_eq!(*width, 0.5);
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn connectors_are_drawn_for_both_orderings() {
        let mut f = field(500.0, 500.0, 5);
        f.particles = vec![still(0.0, 0.0), still(75.0, 0.0)];
        f.render();

        let pair_alphas: Vec<f64> = f
            .surface()
            .lines()
            .filter_map(|call| match call {
                DrawCall::Line { from, to, color, .. } if from != to => Some(color.a),
                _ => None,
            })
            .collect();
        assert_eq!(pair_alphas, vec![0.05, 0.05]);
        assert_eq!(f.surface().lines().count(), 4);
        assert_eq!(f.surface().circles().count(), 2);
    }

    #[test]
    fn full_field_checks_every_ordered_pair() {
        let mut f = field(1000.0, 1000.0, 8);
        // Spread out far enough that only self segments connect
        f.particles = (0..60)
            .map(|i| still((i % 6) as f64 * 160.0, (i / 6) as f64 * 160.0))
            .collect();
        f.render();
        assert_eq!(f.surface().circles().count(), 60);
        assert_eq!(f.surface().lines().count(), 60);
    }

    #[test]
    fn frame_advances_before_drawing() {
        let mut f = field(500.0, 500.0, 5);
        f.particles = vec![Particle::new(10.0, 10.0, 0.25, 0.25, 1.0, 0.5)];
        f.frame();
        match &f.surface().calls[1] {
            DrawCall::Circle { x, y, .. } => assert_eq!((*x, *y), (10.25, 10.25)),
            other => panic!("expected a circle, got {:?}", other),
        }
    }
}
