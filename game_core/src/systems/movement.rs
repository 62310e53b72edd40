use crate::{Arena, Config, MoveIntent, Paddle};

/// Apply one frame of paddle movement, keeping the paddle fully on screen
pub fn move_paddle(paddle: &mut Paddle, intent: MoveIntent, speed: f32, config: &Config) {
    if intent == MoveIntent::Hold {
        return;
    }
    paddle.pos.y = config.clamp_paddle_y(paddle.pos.y + intent.dir() * speed);
}

/// Advance every ball by its speed along both axes and bounce off top/bottom.
///
/// The ball is not pushed back inside the screen: a ball past the edge keeps its
/// position this frame and only the vertical direction flips.
pub fn move_balls(arena: &mut Arena) {
    let height = arena.height;
    for ball in &mut arena.balls {
        ball.pos.x += ball.speed * ball.dir_x as f32;
        ball.pos.y += ball.speed * ball.dir_y as f32;

        if ball.top() <= 0.0 || ball.bottom() >= height {
            ball.dir_y = -ball.dir_y;
        }
    }
}
