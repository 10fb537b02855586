// Simple particle struct to keep track of individual position, velocity, size and opacity.
// Particles are never freed, one that leaves the surface is reset in place.

use crate::config::{OPACITY_RANGE, SIZE_RANGE, SPEED_RANGE};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64, opacity: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            opacity,
        }
    }

    /// A fresh particle somewhere inside a `width` x `height` surface
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let mut p = Particle::new(0.0, 0.0, 0.0, 0.0, SIZE_RANGE.0, OPACITY_RANGE.0);
        p.reset(rng, width, height);
        p
    }

    /// Re-randomize every attribute, same distributions as a new particle
    pub fn reset<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64) {
        self.pos[0] = rng.gen::<f64>() * width;
        self.pos[1] = rng.gen::<f64>() * height;
        self.size = rng.gen_range(SIZE_RANGE.0, SIZE_RANGE.1);
        self.vel[0] = rng.gen_range(SPEED_RANGE.0, SPEED_RANGE.1);
        self.vel[1] = rng.gen_range(SPEED_RANGE.0, SPEED_RANGE.1);
        self.opacity = rng.gen_range(OPACITY_RANGE.0, OPACITY_RANGE.1);
    }

    pub fn step(&mut self) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
    }

    // Edges are inclusive, a particle sitting exactly on one is still visible
    pub fn is_outside(&self, width: f64, height: f64) -> bool {
        let [x, y] = self.pos;
        x < 0.0 || x > width || y < 0.0 || y > height
    }
}
