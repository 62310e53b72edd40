//! Boundaries to the outside world: input, drawing, sound and art.
//!
//! The core only talks to these traits. Every trait has an implementation here that
//! needs no device or file, so a session always has something to fall back on.

use crate::{Ball, Config, MatchPhase, MatchResult, Paddle, Score};
use glam::Vec2;

/// Held-this-frame state of the four logical buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
    pub quit: bool,
}

impl InputState {
    pub fn up() -> Self {
        Self {
            up: true,
            ..Self::default()
        }
    }

    pub fn down() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }
}

pub trait InputSource {
    /// Sample input once per frame
    fn poll(&mut self) -> InputState;
}

/// Input that never presses anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self) -> InputState {
        InputState::default()
    }
}

/// Replays a fixed list of frames, then reports quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<InputState>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputState>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        self.frames.pop_front().unwrap_or_else(InputState::quit)
    }
}

pub trait AudioSink {
    fn play_contact(&mut self);
    fn play_wall(&mut self);
    /// Called once when the session starts; the music loops until exit
    fn start_music(&mut self);
}

/// Audio that plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_contact(&mut self) {}
    fn play_wall(&mut self) {}
    fn start_music(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rect,
    Circle,
}

/// How a sprite is filled
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    /// Flat colour fill of the sprite's shape
    Solid { color: Rgb, shape: Shape },
    /// Art loaded by an asset provider; `rows` are drawn stretched over the sprite
    Image { rows: Vec<String>, tint: Rgb },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub size: Vec2,
    pub surface: Surface,
}

impl Sprite {
    pub fn solid(size: Vec2, color: Rgb, shape: Shape) -> Self {
        Self {
            size,
            surface: Surface::Solid { color, shape },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.surface, Surface::Solid { .. })
    }
}

/// Everything the renderer needs to draw the match
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSet {
    pub player: Sprite,
    pub ai: Sprite,
    pub ball: Sprite,
    pub background: Sprite,
    pub game_over: Sprite,
}

pub trait AssetProvider {
    fn sprites(&self, config: &Config) -> SpriteSet;
}

/// Solid-colour shapes with the same logical sizes as the real art
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAssets;

impl AssetProvider for PlaceholderAssets {
    fn sprites(&self, config: &Config) -> SpriteSet {
        let paddle = Vec2::new(config.paddle_width, config.paddle_height);
        let screen = Vec2::new(config.screen_width, config.screen_height);
        SpriteSet {
            player: Sprite::solid(paddle, Rgb(0, 100, 255), Shape::Rect),
            ai: Sprite::solid(paddle, Rgb(255, 100, 0), Shape::Rect),
            ball: Sprite::solid(Vec2::splat(config.ball_size), Rgb(255, 255, 0), Shape::Circle),
            background: Sprite::solid(screen, Rgb(20, 50, 30), Shape::Rect),
            game_over: Sprite::solid(screen, Rgb(50, 20, 20), Shape::Rect),
        }
    }
}

/// Snapshot of one frame handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub width: f32,
    pub height: f32,
    pub paddles: &'a [Paddle],
    pub balls: &'a [Ball],
    pub score: Score,
    pub seconds_left: u32,
    pub phase: MatchPhase,
    pub sprites: &'a SpriteSet,
}

impl FrameView<'_> {
    pub fn left_label(&self) -> String {
        format!("Player: {}", self.score.left)
    }

    pub fn right_label(&self) -> String {
        format!("AI: {}", self.score.right)
    }

    pub fn timer_label(&self) -> String {
        format!("Time: {}", self.seconds_left)
    }
}

/// The terminal screen shown once the timer runs out
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    pub width: f32,
    pub height: f32,
    pub result: MatchResult,
    pub score: Score,
    pub sprites: &'a SpriteSet,
}

impl ResultView<'_> {
    pub const RESTART_PROMPT: &'static str = "ENTER: Play Again";

    pub fn banner(&self) -> &'static str {
        self.result.label()
    }
}

pub trait Renderer {
    fn draw_frame(&mut self, view: &FrameView<'_>);
    fn draw_result(&mut self, view: &ResultView<'_>);
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_frame(&mut self, _view: &FrameView<'_>) {}
    fn draw_result(&mut self, _view: &ResultView<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_sizes_match_config() {
        let config = Config::new();
        let sprites = PlaceholderAssets.sprites(&config);
        assert_eq!(sprites.player.size, Vec2::new(20.0, 100.0));
        assert_eq!(sprites.ai.size, sprites.player.size);
        assert_eq!(sprites.ball.size, Vec2::splat(20.0));
        assert_eq!(sprites.background.size, Vec2::new(1200.0, 750.0));
        assert!(sprites.ball.is_placeholder());
        assert_eq!(
            sprites.ball.surface,
            Surface::Solid {
                color: Rgb(255, 255, 0),
                shape: Shape::Circle
            }
        );
    }

    #[test]
    fn test_scripted_input_quits_when_exhausted() {
        let mut input = ScriptedInput::new([InputState::up(), InputState::down()]);
        assert_eq!(input.poll(), InputState::up());
        assert_eq!(input.poll(), InputState::down());
        assert_eq!(input.poll(), InputState::quit());
        assert_eq!(input.poll(), InputState::quit());
    }

    #[test]
    fn test_frame_labels() {
        let config = Config::new();
        let sprites = PlaceholderAssets.sprites(&config);
        let view = FrameView {
            width: 1200.0,
            height: 750.0,
            paddles: &[],
            balls: &[],
            score: Score { left: 15, right: 5 },
            seconds_left: 42,
            phase: MatchPhase::Playing,
            sprites: &sprites,
        };
        assert_eq!(view.left_label(), "Player: 15");
        assert_eq!(view.right_label(), "AI: 5");
        assert_eq!(view.timer_label(), "Time: 42");
    }
}
