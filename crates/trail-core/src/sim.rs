//! Per-frame trail state: smoothing, history, hue cycling, particle cadence.

use crate::constants::*;
use crate::particles::ParticleSystem;
use crate::ring::HistoryRing;
use glam::Vec2;

/// Scalar tuning knobs. The defaults are the shipped aesthetic; they exist as
/// named fields so a caller can retune without patching the simulation.
#[derive(Clone, Copy, Debug)]
pub struct TrailParams {
    pub smooth_k: f32,
    pub hue_speed: f32,
    pub spawn_every: u64,
    pub max_particles: usize,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            smooth_k: SMOOTH_K,
            hue_speed: HUE_SPEED,
            spawn_every: SPAWN_EVERY_FRAMES,
            max_particles: MAX_PARTICLES,
        }
    }
}

pub struct TrailSim {
    params: TrailParams,
    smoothed: Vec2,
    ring: HistoryRing,
    particles: ParticleSystem,
    hue: f32,
    frame: u64,
}

impl TrailSim {
    pub fn new(params: TrailParams, seed: u64) -> Self {
        log::debug!(
            "[trail] sim init: k={} spawn_every={} cap={} seed={seed}",
            params.smooth_k,
            params.spawn_every,
            params.max_particles
        );
        Self {
            particles: ParticleSystem::new(params.max_particles, seed),
            params,
            smoothed: Vec2::splat(OFFSCREEN),
            ring: HistoryRing::new(),
            hue: HUE_INITIAL,
            frame: 0,
        }
    }

    /// Advance one frame tick from the latest raw pointer position.
    ///
    /// Order matters: hue advances first so spawned particles pick up the
    /// frame's color, then EMA -> ring -> particles, so the renderer sees a
    /// consistent snapshot afterwards.
    pub fn step(&mut self, raw: Vec2) {
        self.frame += 1;
        self.hue = (self.hue + self.params.hue_speed) % 360.0;

        self.smoothed += (raw - self.smoothed) * self.params.smooth_k;
        self.ring.push(self.smoothed);

        if self.frame % self.params.spawn_every == 0 {
            self.particles.spawn(self.smoothed, self.hue);
        }
        self.particles.step();
    }

    #[inline]
    pub fn ring(&self) -> &HistoryRing {
        &self.ring
    }

    #[inline]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    #[inline]
    pub fn hue(&self) -> f32 {
        self.hue
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
