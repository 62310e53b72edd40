use crate::{Ball, Config, GameRng, Paddle, Side};
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Overlap test; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// The playfield and the entities on it
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub paddles: Vec<Paddle>,
    pub balls: Vec<Ball>,
}

impl Arena {
    /// One paddle per side and a single ball at centre
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        Self {
            width: config.screen_width,
            height: config.screen_height,
            paddles: vec![
                Paddle::spawn(Side::Left, config),
                Paddle::spawn(Side::Right, config),
            ],
            balls: vec![Ball::spawn(config, rng)],
        }
    }

    /// Arena with no entities, for building scenarios by hand
    pub fn empty(config: &Config) -> Self {
        Self {
            width: config.screen_width,
            height: config.screen_height,
            paddles: Vec::new(),
            balls: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> Option<&Paddle> {
        self.paddles.iter().find(|p| p.side == side)
    }

    pub fn paddle_mut(&mut self, side: Side) -> Option<&mut Paddle> {
        self.paddles.iter_mut().find(|p| p.side == side)
    }

    pub fn reset_balls(&mut self, config: &Config, rng: &mut GameRng) {
        for ball in &mut self.balls {
            ball.reset(config, rng);
        }
    }
}
