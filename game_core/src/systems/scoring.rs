use crate::{Arena, Config, Events, GameRng, Score, Side};
use log::debug;

/// Check if a ball reached a side wall (scoring).
///
/// Left wall scores for the right side, right wall for the left side. The ball is
/// reset immediately so a crossing is counted once.
pub fn check_scoring(
    arena: &mut Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let width = arena.width;
    for ball in &mut arena.balls {
        let scorer = if ball.left() <= 0.0 {
            Side::Right
        } else if ball.right() >= width {
            Side::Left
        } else {
            continue;
        };

        score.award(scorer, config.score_value);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        events.balls_scored += 1;
        debug!(
            "{:?} scored, now {}-{}",
            scorer, score.left, score.right
        );

        ball.reset(config, rng);
    }
}
