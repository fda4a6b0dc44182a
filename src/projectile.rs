//! Simulation of a projectile flying through an environment with gravity and
//! wind, plotted onto a canvas.

use crate::config::SimulationConfig;
use anyhow::{Context, Result, bail};
use rtc_canvas::{Canvas, Color};
use rtc_math::Tuple;

/// A projectile with a position and a velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    position: Tuple,
    velocity: Tuple,
}

/// The environment a [`Projectile`] moves through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    gravity: Tuple,
    wind: Tuple,
}

/// The outcome of [`simulate`].
#[derive(Clone, Debug)]
pub struct Simulation {
    /// The canvas with the projectile's trail plotted on it.
    pub canvas: Canvas,
    /// The number of ticks that were simulated.
    pub tick_count: u64,
    /// Whether the projectile came down before the tick limit was reached.
    pub landed: bool,
}

impl Projectile {
    /// Creates a new projectile.
    ///
    /// # Errors
    /// Returns an error if `position` is not a point or `velocity` is not a
    /// vector.
    pub fn new(position: Tuple, velocity: Tuple) -> Result<Self> {
        if !position.is_point() {
            bail!("Projectile position must be a point, got {position:?}");
        }
        if !velocity.is_vector() {
            bail!("Projectile velocity must be a vector, got {velocity:?}");
        }
        Ok(Self { position, velocity })
    }

    pub fn position(&self) -> &Tuple {
        &self.position
    }

    pub fn velocity(&self) -> &Tuple {
        &self.velocity
    }
}

impl Environment {
    /// Creates a new environment.
    ///
    /// # Errors
    /// Returns an error if `gravity` or `wind` is not a vector.
    pub fn new(gravity: Tuple, wind: Tuple) -> Result<Self> {
        if !gravity.is_vector() {
            bail!("Gravity must be a vector, got {gravity:?}");
        }
        if !wind.is_vector() {
            bail!("Wind must be a vector, got {wind:?}");
        }
        Ok(Self { gravity, wind })
    }

    pub fn gravity(&self) -> &Tuple {
        &self.gravity
    }

    pub fn wind(&self) -> &Tuple {
        &self.wind
    }
}

/// Advances the projectile by one tick: the position moves by the velocity,
/// and the velocity changes by gravity and wind.
pub fn tick(environment: &Environment, projectile: &Projectile) -> Projectile {
    // Points plus vectors stay points and vector sums stay vectors
    Projectile {
        position: projectile.position + projectile.velocity,
        velocity: projectile.velocity + environment.gravity + environment.wind,
    }
}

/// Launches a projectile as specified by the configuration and plots its
/// position on a canvas after each tick until it falls to the ground or the
/// tick limit is reached.
///
/// # Errors
/// Returns an error if the configured start position is not a point, if the
/// launch direction is zero or not a vector, if gravity or wind is not a
/// vector, or if the canvas cannot be created.
pub fn simulate(config: &SimulationConfig) -> Result<Simulation> {
    if !config.launch_direction.is_vector() {
        bail!(
            "Launch direction must be a vector, got {:?}",
            config.launch_direction
        );
    }
    if config.launch_direction.magnitude() == 0.0 {
        bail!("Launch direction must be nonzero");
    }
    let velocity = config.launch_direction.normalized() * config.launch_speed;

    let mut projectile = Projectile::new(config.start_position, velocity)?;
    let environment = Environment::new(config.gravity, config.wind)?;

    let mut canvas = Canvas::new(config.canvas_width, config.canvas_height)
        .context("Invalid canvas size in simulation configuration")?;

    let mut tick_count = 0;
    let mut landed = true;

    while projectile.position.y() > 0.0 {
        if tick_count >= config.max_ticks {
            log::warn!(
                "Projectile still airborne after {} ticks, stopping simulation",
                config.max_ticks
            );
            landed = false;
            break;
        }

        plot(&mut canvas, projectile.position(), config.trail_color)?;

        projectile = tick(&environment, &projectile);
        tick_count += 1;
    }

    Ok(Simulation {
        canvas,
        tick_count,
        landed,
    })
}

/// Maps a position in the simulation to canvas coordinates, with the
/// vertical axis flipped so that up is towards the top of the image.
/// Coordinates are rounded to the nearest pixel with halves rounded up.
/// Returns [`None`] if the position lies outside the canvas.
pub fn canvas_coords(canvas: &Canvas, position: &Tuple) -> Option<(usize, usize)> {
    let x = round_half_up(position.x());
    let y = canvas.height() as f64 - 1.0 - round_half_up(position.y());

    if !(x >= 0.0 && y >= 0.0) {
        return None;
    }
    let (x, y) = (x as usize, y as usize);

    canvas.contains(x, y).then_some((x, y))
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn plot(canvas: &mut Canvas, position: &Tuple, color: Color) -> Result<()> {
    if let Some((x, y)) = canvas_coords(canvas, position) {
        canvas.write_pixel(x, y, color)
    } else {
        log::debug!(
            "Projectile at ({:.2}, {:.2}) is outside the canvas, not plotting it",
            position.x(),
            position.y()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            start_position: Tuple::point(0.0, 1.0, 0.0),
            launch_direction: Tuple::vector(1.0, 1.0, 0.0),
            launch_speed: 2.0_f64.sqrt(),
            gravity: Tuple::vector(0.0, -0.5, 0.0),
            wind: Tuple::vector(0.0, 0.0, 0.0),
            canvas_width: 10,
            canvas_height: 5,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn creating_projectile_requires_point_and_vector() {
        let point = Tuple::point(0.0, 1.0, 0.0);
        let vector = Tuple::vector(1.0, 1.0, 0.0);
        assert!(Projectile::new(point, vector).is_ok());
        assert!(Projectile::new(vector, vector).is_err());
        assert!(Projectile::new(point, point).is_err());
    }

    #[test]
    fn creating_environment_requires_vectors() {
        let vector = Tuple::vector(0.0, -0.1, 0.0);
        let point = Tuple::point(0.0, 0.0, 0.0);
        assert!(Environment::new(vector, vector).is_ok());
        assert!(Environment::new(point, vector).is_err());
        assert!(Environment::new(vector, point).is_err());
    }

    #[test]
    fn tick_moves_position_and_accelerates_velocity() {
        let environment =
            Environment::new(Tuple::vector(0.0, -0.1, 0.0), Tuple::vector(-0.01, 0.0, 0.0))
                .unwrap();
        let projectile =
            Projectile::new(Tuple::point(0.0, 1.0, 0.0), Tuple::vector(1.0, 1.0, 0.0)).unwrap();

        let next = tick(&environment, &projectile);

        assert_abs_diff_eq!(*next.position(), Tuple::point(1.0, 2.0, 0.0));
        assert_abs_diff_eq!(*next.velocity(), Tuple::vector(0.99, 0.9, 0.0));
        assert!(next.position().is_point());
        assert!(next.velocity().is_vector());
    }

    #[test]
    fn canvas_coords_flip_vertical_axis() {
        let canvas = Canvas::new(10, 5).unwrap();
        assert_eq!(
            canvas_coords(&canvas, &Tuple::point(0.0, 0.0, 0.0)),
            Some((0, 4))
        );
        assert_eq!(
            canvas_coords(&canvas, &Tuple::point(2.4, 3.6, 0.0)),
            Some((2, 0))
        );
    }

    #[test]
    fn canvas_coords_outside_canvas_are_none() {
        let canvas = Canvas::new(10, 5).unwrap();
        assert_eq!(canvas_coords(&canvas, &Tuple::point(-1.0, 1.0, 0.0)), None);
        assert_eq!(canvas_coords(&canvas, &Tuple::point(10.0, 1.0, 0.0)), None);
        assert_eq!(canvas_coords(&canvas, &Tuple::point(1.0, 5.0, 0.0)), None);
    }

    #[test]
    fn canvas_coords_round_halves_up() {
        let canvas = Canvas::new(10, 5).unwrap();
        assert_eq!(
            canvas_coords(&canvas, &Tuple::point(-0.5, 0.5, 0.0)),
            Some((0, 3))
        );
        assert_eq!(
            canvas_coords(&canvas, &Tuple::point(2.5, -0.5, 0.0)),
            Some((3, 4))
        );
        assert_eq!(canvas_coords(&canvas, &Tuple::point(-0.51, 1.0, 0.0)), None);
    }

    #[test]
    fn simulation_plots_trail_until_landing() {
        let config = small_config();
        let simulation = simulate(&config).unwrap();

        // y: 1, 2, 2.5, 2.5, 2, 1, -0.5
        assert_eq!(simulation.tick_count, 6);
        assert!(simulation.landed);

        let trail = config.trail_color;
        let canvas = &simulation.canvas;
        assert_eq!(canvas.pixel_at(0, 3), Some(trail));
        assert_eq!(canvas.pixel_at(1, 2), Some(trail));
        assert_eq!(canvas.pixel_at(5, 3), Some(trail));
        assert_eq!(
            canvas
                .pixels()
                .iter()
                .filter(|&&pixel| pixel == trail)
                .count(),
            6
        );
    }

    #[test]
    fn simulation_stops_at_tick_limit() {
        let config = SimulationConfig {
            gravity: Tuple::vector(0.0, 0.0, 0.0),
            max_ticks: 20,
            ..small_config()
        };
        let simulation = simulate(&config).unwrap();
        assert_eq!(simulation.tick_count, 20);
        assert!(!simulation.landed);
    }

    #[test]
    fn projectile_starting_on_ground_is_not_simulated() {
        let config = SimulationConfig {
            start_position: Tuple::point(0.0, 0.0, 0.0),
            ..small_config()
        };
        let simulation = simulate(&config).unwrap();
        assert_eq!(simulation.tick_count, 0);
        assert_eq!(simulation.canvas, Canvas::new(10, 5).unwrap());
    }

    #[test]
    fn simulation_with_invalid_launch_direction_fails() {
        let config = SimulationConfig {
            launch_direction: Tuple::point(1.0, 1.0, 0.0),
            ..small_config()
        };
        assert!(simulate(&config).is_err());
    }

    #[test]
    fn simulation_with_invalid_wind_fails() {
        let config = SimulationConfig {
            wind: Tuple::new(0.0, 0.0, 0.0, 0.5),
            ..small_config()
        };
        assert!(simulate(&config).is_err());
    }

    #[test]
    fn simulation_with_zero_launch_direction_fails_with_clear_message() {
        let config = SimulationConfig {
            launch_direction: Tuple::vector(0.0, 0.0, 0.0),
            ..small_config()
        };
        let error = simulate(&config).unwrap_err();
        assert_eq!(error.to_string(), "Launch direction must be nonzero");
    }

    #[test]
    fn simulation_with_overflowing_canvas_size_fails() {
        let config = SimulationConfig {
            canvas_width: usize::MAX / 2,
            canvas_height: 3,
            ..small_config()
        };
        assert!(simulate(&config).is_err());
    }
}
