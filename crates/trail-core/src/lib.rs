//! Simulation core for the cursor-trail overlay.
//!
//! Everything in this crate is platform-neutral and runs (and is tested) on
//! native targets; the web frontend consumes it to drive the per-frame canvas
//! painting. No module here touches the DOM or allocates per frame beyond the
//! caller-owned spline sample buffer.

pub mod constants;
pub mod particles;
pub mod ring;
pub mod sim;
pub mod spline;
pub mod zones;

pub use particles::{Particle, ParticleSystem};
pub use ring::HistoryRing;
pub use sim::{TrailParams, TrailSim};
pub use zones::{plan_zones, Zone, ZonePlan};
