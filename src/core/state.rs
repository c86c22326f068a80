use fastrand::Rng;

pub mod card;
pub mod fps;
pub mod system;

pub use card::{CardPhase, CardState};
pub use system::SystemState;

use crate::{
    domain::{geometry::Point, snow::SnowField, sparkle::SparkleField},
    infrastructure::config::Config,
};

/// Unified application state
///
/// Everything the page needs lives here and is owned by one instance: the
/// animators are mounted on the first resize and dropped with the state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub system: SystemState,
    pub card: CardState,
    pub snow: SnowField,
    pub sparkles: SparkleField,
    /// Last known pointer position in virtual pixels
    pub pointer: Point,
    pub config: ConfigState,
    pub rng: Rng,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new_with_config(Config::default())
    }
}

impl AppState {
    /// Initialize AppState with the specified config and a randomly seeded generator
    pub fn new_with_config(config: Config) -> Self {
        Self::build(config, Rng::new())
    }

    /// Initialize AppState with a fixed seed so particle motion is reproducible
    pub fn new_with_seed(config: Config, seed: u64) -> Self {
        Self::build(config, Rng::with_seed(seed))
    }

    fn build(config: Config, rng: Rng) -> Self {
        Self {
            system: SystemState::default(),
            card: CardState::new(&config.card),
            snow: SnowField::new(config.snow.flakes).with_force_radius(config.snow.force_radius),
            sparkles: SparkleField::new(),
            pointer: Point::OFFSCREEN,
            config: ConfigState { config },
            rng,
        }
    }

    /// Tear down the animators; the runner calls this when the page goes away
    pub fn unmount(&mut self) {
        self.snow.unmount();
        self.sparkles.clear();
        self.pointer = Point::OFFSCREEN;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{geometry::Viewport, theme::Theme};

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(!state.system.should_quit);
        assert_eq!(state.card.phase(), CardPhase::Closed);
        assert_eq!(state.card.theme, Theme::Magic);
        assert!(!state.snow.is_mounted());
        assert!(state.sparkles.is_empty());
        assert_eq!(state.pointer, Point::OFFSCREEN);
    }

    #[test]
    fn test_snow_capacity_follows_config() {
        let mut config = Config::default();
        config.snow.flakes = 12;
        let state = AppState::new_with_seed(config, 1);

        assert_eq!(state.snow.capacity(), 12);
    }

    #[test]
    fn test_unmount_clears_animators() {
        let mut state = AppState::new_with_seed(Config::default(), 5);
        let mut rng = state.rng.clone();
        state.snow.mount(Viewport::from_cells(20, 10), &mut rng);
        state.sparkles.pointer_moved(Point::new(1.0, 1.0));
        state.sparkles.advance(&mut rng);
        state.pointer = Point::new(1.0, 1.0);

        state.unmount();

        assert!(!state.snow.is_mounted());
        assert!(state.sparkles.is_empty());
        assert_eq!(state.pointer, Point::OFFSCREEN);
    }
}
