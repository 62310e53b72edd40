use crate::{move_paddle, AiProfile, Arena, Ball, Config, GameRng, MoveIntent, Paddle, Params, Side};
use rand::Rng;

/// Movement decided by the AI for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiCommand {
    pub intent: MoveIntent,
    pub speed: f32,
}

/// Calculate AI input for the right paddle
///
/// Strategy:
/// 1. Track a ball that is heading right and inside the reaction zone, aiming at its
///    centre plus a fresh random error every frame.
/// 2. With nothing to track, drift back to the vertical centre at half speed.
pub fn calculate_ai_input(
    paddle: &Paddle,
    balls: &[Ball],
    profile: &AiProfile,
    config: &Config,
    rng: &mut GameRng,
) -> AiCommand {
    let zone_start = config.screen_width - profile.reaction_distance;

    // Closest incoming ball to the AI's edge wins when several qualify
    let tracked = balls
        .iter()
        .filter(|b| b.dir_x > 0 && b.pos.x > zone_start)
        .max_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    match tracked {
        Some(ball) => {
            let target_y = aim_target(ball, profile, rng);
            AiCommand {
                intent: steer(paddle.center_y(), target_y, Params::AI_DEADZONE),
                speed: profile.speed,
            }
        }
        None => AiCommand {
            intent: steer(
                paddle.center_y(),
                config.screen_height / 2.0,
                Params::AI_RECENTER_DEADZONE,
            ),
            speed: profile.speed / 2.0,
        },
    }
}

/// Ball centre Y plus an aim error drawn fresh from `-error_margin..=error_margin`
pub fn aim_target(ball: &Ball, profile: &AiProfile, rng: &mut GameRng) -> f32 {
    let error = if profile.error_margin > 0 {
        rng.0
            .gen_range(-profile.error_margin..=profile.error_margin)
    } else {
        0
    };
    ball.pos.y + error as f32
}

fn steer(current: f32, target: f32, deadzone: f32) -> MoveIntent {
    if current < target - deadzone {
        MoveIntent::Down
    } else if current > target + deadzone {
        MoveIntent::Up
    } else {
        MoveIntent::Hold
    }
}

/// Decide and apply one frame of movement for the AI paddle
pub fn drive_ai_paddle(arena: &mut Arena, config: &Config, rng: &mut GameRng) -> AiCommand {
    let profile = config.ai_profile();
    let Some(idx) = arena.paddles.iter().position(|p| p.side == Side::Right) else {
        return AiCommand {
            intent: MoveIntent::Hold,
            speed: 0.0,
        };
    };

    let command = calculate_ai_input(&arena.paddles[idx], &arena.balls, &profile, config, rng);
    move_paddle(&mut arena.paddles[idx], command.intent, command.speed, config);
    command
}
