//! Projectile simulation drawn with the ray tracer's math and canvas.

pub mod config;
pub mod io;
pub mod projectile;
pub mod run;

pub use config::SimulationConfig;
