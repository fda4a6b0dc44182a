//! Configuration of the projectile simulation.

use rtc_canvas::Color;
use rtc_math::Tuple;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration options for a projectile simulation.
///
/// Missing fields in a configuration file take their default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Initial position of the projectile. Must be a point.
    pub start_position: Tuple,
    /// Direction the projectile is launched in. Must be a vector, and is
    /// normalized before use.
    pub launch_direction: Tuple,
    /// Initial speed of the projectile, in distance per tick.
    pub launch_speed: f64,
    /// Acceleration due to gravity. Must be a vector.
    pub gravity: Tuple,
    /// Acceleration due to wind. Must be a vector.
    pub wind: Tuple,
    /// Width of the canvas the trail is plotted on, in pixels.
    pub canvas_width: usize,
    /// Height of the canvas the trail is plotted on, in pixels.
    pub canvas_height: usize,
    /// Color of the plotted trail.
    pub trail_color: Color,
    /// Path of the PPM image written after the simulation.
    pub output_path: PathBuf,
    /// The simulation stops after this many ticks even if the projectile
    /// is still airborne.
    pub max_ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_position: Tuple::point(0.0, 1.0, 0.0),
            launch_direction: Tuple::vector(1.0, 1.8, 0.0),
            launch_speed: 11.25,
            gravity: Tuple::vector(0.0, -0.1, 0.0),
            wind: Tuple::vector(-0.01, 0.0, 0.0),
            canvas_width: 900,
            canvas_height: 550,
            trail_color: Color::new(0.7, 0.7, 0.0),
            output_path: PathBuf::from("ppmoutput.ppm"),
            max_ticks: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_launches_point_along_vector() {
        let config = SimulationConfig::default();
        assert!(config.start_position.is_point());
        assert!(config.launch_direction.is_vector());
        assert!(config.gravity.is_vector());
        assert!(config.wind.is_vector());
    }

    #[test]
    fn missing_fields_take_default_values() {
        let config: SimulationConfig = ron::from_str("(launch_speed: 5.0, max_ticks: 10)").unwrap();
        assert_eq!(config.launch_speed, 5.0);
        assert_eq!(config.max_ticks, 10);
        assert_eq!(config.canvas_width, 900);
        assert_eq!(config.trail_color, Color::new(0.7, 0.7, 0.0));
    }

    #[test]
    fn color_without_alpha_is_opaque() {
        let config: SimulationConfig =
            ron::from_str("(trail_color: (r: 1.0, g: 0.0, b: 0.0))").unwrap();
        assert_eq!(config.trail_color, Color::new(1.0, 0.0, 0.0));
    }
}
