//! Decaying point-sprite particles emitted along the trail.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: i32,
    pub max_life: i32,
    pub size: f32,
    pub hue: f32,
}

impl Particle {
    /// Remaining-life fraction in [0, 1]; drives render opacity.
    #[inline]
    pub fn life_frac(&self) -> f32 {
        if self.max_life <= 0 {
            0.0
        } else {
            (self.life as f32 / self.max_life as f32).clamp(0.0, 1.0)
        }
    }
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: StdRng,
    cap: usize,
}

impl ParticleSystem {
    /// Seeded so emission is reproducible under test.
    pub fn new(cap: usize, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(cap),
            rng: StdRng::seed_from_u64(seed),
            cap,
        }
    }

    /// Emit one particle at `pos`; a silent no-op while at the population cap.
    pub fn spawn(&mut self, pos: Vec2, base_hue: f32) {
        if self.particles.len() >= self.cap {
            return;
        }
        let angle = self.rng.gen::<f32>() * TAU;
        let speed = PX_SPEED_MIN + self.rng.gen::<f32>() * PX_SPEED_SPAN;
        let life = PX_LIFE_MIN + (self.rng.gen::<f32>() * PX_LIFE_SPAN) as i32;
        self.particles.push(Particle {
            pos,
            vel: Vec2::new(angle.cos() * speed, angle.sin() * speed + PX_RISE_BIAS),
            life,
            max_life: life,
            size: PX_SIZE_MIN + self.rng.gen::<f32>() * PX_SIZE_SPAN,
            hue: base_hue + (self.rng.gen::<f32>() - 0.5) * PX_HUE_JITTER,
        });
    }

    /// Advance one frame: integrate position, apply the downward bias,
    /// decrement life, and retire the dead. Iterates from the end so removal
    /// never skips a live particle.
    pub fn step(&mut self) {
        for i in (0..self.particles.len()).rev() {
            let p = &mut self.particles[i];
            p.pos += p.vel;
            p.vel.y += PX_GRAVITY;
            p.life -= 1;
            if p.life <= 0 {
                self.particles.swap_remove(i);
            }
        }
    }

    #[inline]
    pub fn active(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }
}
