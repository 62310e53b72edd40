use crate::{Aabb, Config, GameRng};
use glam::Vec2;
use rand::Rng;

/// Which half of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // human
    Right, // AI
}

/// Paddle - position is the top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32, // px per frame
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    /// Paddle at its side's spawn point, vertically centred
    pub fn spawn(side: Side, config: &Config) -> Self {
        let speed = match side {
            Side::Left => config.paddle_speed,
            Side::Right => config.ai_profile().speed,
        };
        Self::new(
            side,
            Vec2::new(config.paddle_x(side), config.paddle_spawn_y()),
            Vec2::new(config.paddle_width, config.paddle_height),
            speed,
        )
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }
}

/// Ball - position is the centre; direction is axis-sign only
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub size: f32,
    pub dir_x: i8, // always -1 or 1
    pub dir_y: i8, // always -1 or 1
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, size: f32, dir_x: i8, dir_y: i8, speed: f32) -> Self {
        Self {
            pos,
            size,
            dir_x: unit_sign(dir_x),
            dir_y: unit_sign(dir_y),
            speed,
        }
    }

    /// Ball at screen centre heading in a random diagonal
    pub fn spawn(config: &Config, rng: &mut GameRng) -> Self {
        let centre = Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0);
        let mut ball = Self::new(
            centre,
            config.ball_size,
            1,
            1,
            config.ball_speed_initial,
        );
        ball.dir_x = random_sign(rng);
        ball.dir_y = random_sign(rng);
        ball
    }

    /// Back to screen centre-X at a random height with fresh direction and base speed,
    /// whatever state the ball was in
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        let margin = crate::Params::BALL_SPAWN_MARGIN;
        let low = margin as i32;
        let high = ((config.screen_height - margin) as i32).max(low);

        self.pos.x = config.screen_width / 2.0;
        self.pos.y = rng.0.gen_range(low..=high) as f32;
        self.dir_x = random_sign(rng);
        self.dir_y = random_sign(rng);
        self.speed = config.ball_speed_initial;
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius()
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius()
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius()
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius()
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }
}

fn random_sign(rng: &mut GameRng) -> i8 {
    if rng.0.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

// Zero maps to +1 so the ball never stalls on an axis
fn unit_sign(v: i8) -> i8 {
    if v < 0 {
        -1
    } else {
        1
    }
}

/// Movement intent for a paddle this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveIntent {
    Up,
    Down,
    #[default]
    Hold,
}

impl MoveIntent {
    /// Screen-space Y sign (down is positive)
    pub fn dir(self) -> f32 {
        match self {
            MoveIntent::Up => -1.0,
            MoveIntent::Down => 1.0,
            MoveIntent::Hold => 0.0,
        }
    }

    /// Resolve raw held-key state; up wins when both are held
    pub fn from_keys(up: bool, down: bool) -> Self {
        if up {
            MoveIntent::Up
        } else if down {
            MoveIntent::Down
        } else {
            MoveIntent::Hold
        }
    }
}
