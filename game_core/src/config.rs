use crate::{Params, Side};
use std::fmt;
use std::str::FromStr;

/// AI tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    pub speed: f32,             // px per frame while tracking
    pub reaction_distance: f32, // px from the AI's edge where tracking starts
    pub error_margin: i32,      // px of aim jitter, re-sampled every frame
}

/// Named AI difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn profile(self) -> AiProfile {
        match self {
            Difficulty::Easy => AiProfile {
                speed: 6.0,
                reaction_distance: 400.0,
                error_margin: 30,
            },
            Difficulty::Medium => AiProfile {
                speed: 8.0,
                reaction_distance: 600.0,
                error_margin: 15,
            },
            Difficulty::Hard => AiProfile {
                speed: 10.0,
                reaction_distance: 800.0,
                error_margin: 5,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a difficulty name is not one of the presets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty '{}' (expected easy, medium or hard)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub score_value: u32,
    pub match_seconds: u32,
    pub restart_seconds: u32,
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            fps: Params::FPS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            score_value: Params::SCORE_VALUE,
            match_seconds: Params::MATCH_SECONDS,
            restart_seconds: Params::RESTART_SECONDS,
            difficulty: Difficulty::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    pub fn ai_profile(&self) -> AiProfile {
        self.difficulty.profile()
    }

    /// Get the left edge X of a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => Params::PADDLE_MARGIN_LEFT,
            Side::Right => self.screen_width - Params::PADDLE_MARGIN_RIGHT,
        }
    }

    /// Top Y that vertically centres a paddle on screen
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.screen_height - self.paddle_height) / 2.0
    }

    /// Clamp a paddle's top Y so the whole paddle stays on screen
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.screen_height - self.paddle_height)
    }

    pub fn ball_radius(&self) -> f32 {
        self.ball_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 20.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 1160.0, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-15.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(10_000.0),
            config.screen_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(325.0), 325.0);
    }

    #[test]
    fn test_default_difficulty_is_hard() {
        assert_eq!(Config::new().difficulty, Difficulty::Hard);
        assert_eq!(Config::new().ai_profile().speed, 10.0);
    }

    #[test]
    fn test_difficulty_presets() {
        let easy = Difficulty::Easy.profile();
        assert_eq!((easy.speed, easy.reaction_distance, easy.error_margin), (6.0, 400.0, 30));
        let medium = Difficulty::Medium.profile();
        assert_eq!(
            (medium.speed, medium.reaction_distance, medium.error_margin),
            (8.0, 600.0, 15)
        );
        let hard = Difficulty::Hard.profile();
        assert_eq!((hard.speed, hard.reaction_distance, hard.error_margin), (10.0, 800.0, 5));
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" MEDIUM ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("nightmare".parse::<Difficulty>().is_err());
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn test_fps_never_zero() {
        assert_eq!(Config::new().with_fps(0).fps, 1);
    }
}
