use crate::params::Params;

/// Rejected configuration values
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("screen size must be positive, got {0}x{1}")]
    Screen(f32, f32),

    #[error("{0} must be positive, got {1}")]
    NonPositive(&'static str, f32),

    #[error("block grid is {grid:.1}px wide but the screen is only {screen:.1}px")]
    GridTooWide { grid: f32, screen: f32 },

    #[error("block grid needs at least one row colour")]
    NoBlockColors,

    #[error("penetrate cost {cost} exceeds the mp maximum {max}")]
    PenetrateUnaffordable { cost: u8, max: u8 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_offset: f32,
    pub paddle_speed: f32,
    pub boost_multiplier: f32,
    pub boost_duration: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_spawn_gap: f32,
    pub ball_color: [u8; 3],
    pub ball_penetrate_color: [u8; 3],
    pub block_rows: usize,
    pub block_cols: usize,
    pub block_width: f32,
    pub block_height: f32,
    pub block_gap: f32,
    pub block_top: f32,
    pub block_colors: Vec<[u8; 3]>,
    pub fruit_radius: f32,
    pub fruit_fall_speed: f32,
    pub fruit_start_y: f32,
    pub fruit_catch_reset_y: f32,
    pub fruit_miss_reset_y: f32,
    pub fruit_reset_y: f32,
    pub hp_max: u8,
    pub mp_max: u8,
    pub boost_cost: u8,
    pub penetrate_cost: u8,
    pub respawn_delay: f32,
    pub end_screen_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_bottom_offset: Params::PADDLE_BOTTOM_OFFSET,
            paddle_speed: Params::PADDLE_SPEED,
            boost_multiplier: Params::BOOST_MULTIPLIER,
            boost_duration: Params::BOOST_DURATION,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_spawn_gap: Params::BALL_SPAWN_GAP,
            ball_color: Params::BALL_COLOR,
            ball_penetrate_color: Params::BALL_PENETRATE_COLOR,
            block_rows: Params::BLOCK_ROWS,
            block_cols: Params::BLOCK_COLS,
            block_width: Params::BLOCK_WIDTH,
            block_height: Params::BLOCK_HEIGHT,
            block_gap: Params::BLOCK_GAP,
            block_top: Params::BLOCK_TOP,
            block_colors: Params::BLOCK_COLORS.to_vec(),
            fruit_radius: Params::FRUIT_RADIUS,
            fruit_fall_speed: Params::FRUIT_FALL_SPEED,
            fruit_start_y: Params::FRUIT_START_Y,
            fruit_catch_reset_y: Params::FRUIT_CATCH_RESET_Y,
            fruit_miss_reset_y: Params::FRUIT_MISS_RESET_Y,
            fruit_reset_y: Params::FRUIT_RESET_Y,
            hp_max: Params::HP_MAX,
            mp_max: Params::MP_MAX,
            boost_cost: Params::BOOST_COST,
            penetrate_cost: Params::PENETRATE_COST,
            respawn_delay: Params::RESPAWN_DELAY,
            end_screen_duration: Params::END_SCREEN_DURATION,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paddle speed, doubled while boost is active
    pub fn paddle_speed(&self, boosted: bool) -> f32 {
        if boosted {
            self.paddle_speed * self.boost_multiplier
        } else {
            self.paddle_speed
        }
    }

    /// Total width of one row of blocks including the gaps between them
    pub fn grid_width(&self) -> f32 {
        let cols = self.block_cols as f32;
        cols * self.block_width + (cols - 1.0).max(0.0) * self.block_gap
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(ConfigError::Screen(self.screen_width, self.screen_height));
        }

        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("fruit_radius", self.fruit_radius),
            ("fruit_fall_speed", self.fruit_fall_speed),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive(name, value));
            }
        }

        let grid = self.grid_width();
        if grid > self.screen_width {
            return Err(ConfigError::GridTooWide {
                grid,
                screen: self.screen_width,
            });
        }

        if self.block_colors.is_empty() {
            return Err(ConfigError::NoBlockColors);
        }

        if self.penetrate_cost > self.mp_max {
            return Err(ConfigError::PenetrateUnaffordable {
                cost: self.penetrate_cost,
                max: self.mp_max,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_paddle_speed_doubles_when_boosted() {
        let config = Config::new();
        assert_eq!(config.paddle_speed(false), Params::PADDLE_SPEED);
        assert_eq!(config.paddle_speed(true), Params::PADDLE_SPEED * 2.0);
    }

    #[test]
    fn test_grid_width_includes_gaps() {
        let config = Config::new();
        assert_eq!(config.grid_width(), 10.0 * 100.0 + 9.0 * 5.0);
    }

    #[test]
    fn test_grid_wider_than_screen_is_rejected() {
        let config = Config {
            block_cols: 20,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooWide { .. })
        ));
    }

    #[test]
    fn test_zero_ball_speed_is_rejected() {
        let config = Config {
            ball_speed: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive("ball_speed", 0.0))
        );
    }

    #[test]
    fn test_unaffordable_penetrate_is_rejected() {
        let config = Config {
            penetrate_cost: 6,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PenetrateUnaffordable { cost: 6, max: 5 })
        ));
    }
}
