use crate::{Arena, Config, Events};
use log::debug;

/// Check ball collisions with paddles.
///
/// Every ball overlapping a paddle has its horizontal direction reversed and gains
/// the contact increment, capped at the configured maximum. `events.paddle_contacts`
/// counts paddles with at least one hit, not balls.
pub fn check_paddle_contacts(arena: &mut Arena, config: &Config, events: &mut Events) {
    for paddle in &arena.paddles {
        let paddle_box = paddle.aabb();
        let mut hit = false;

        for ball in &mut arena.balls {
            if !paddle_box.intersects(&ball.aabb()) {
                continue;
            }
            ball.dir_x = -ball.dir_x;
            ball.speed = (ball.speed + config.ball_speed_increase).min(config.ball_speed_max);
            hit = true;
        }

        if hit {
            debug!("ball hit {:?} paddle", paddle.side);
            events.paddle_contacts += 1;
        }
    }
}
