//! Match State Machine
//!
//! Owns the countdown timer, the score pair and the match phase.

use crate::{Config, Score};
use log::info;

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    #[default]
    Playing,
    Finished,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    TimerExpired,
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_phase: MatchPhase,
    pub to_phase: MatchPhase,
    pub action: MatchAction,
}

/// Outcome of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    LeftWins,
    RightWins,
    Draw,
}

impl MatchResult {
    pub fn from_score(score: &Score) -> Self {
        use std::cmp::Ordering;
        match score.left.cmp(&score.right) {
            Ordering::Greater => MatchResult::LeftWins,
            Ordering::Less => MatchResult::RightWins,
            Ordering::Equal => MatchResult::Draw,
        }
    }

    /// Banner shown on the result screen
    pub fn label(self) -> &'static str {
        match self {
            MatchResult::LeftWins => "YOU WIN!",
            MatchResult::RightWins => "AI WINS!",
            MatchResult::Draw => "DRAW!",
        }
    }
}

/// Countdown in whole seconds, driven by simulation frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchTimer {
    pub seconds_left: u32,
    pub frame_count: u32,
}

impl MatchTimer {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds_left: seconds,
            frame_count: 0,
        }
    }

    /// Count one frame; returns true on the frame the timer reaches zero
    pub fn tick(&mut self, fps: u32) -> bool {
        if self.seconds_left == 0 {
            return false;
        }
        self.frame_count += 1;
        if self.frame_count >= fps {
            self.frame_count = 0;
            self.seconds_left -= 1;
            return self.seconds_left == 0;
        }
        false
    }

    pub fn reset(&mut self, seconds: u32) {
        *self = Self::new(seconds);
    }
}

/// Match state machine
#[derive(Debug, Clone)]
pub struct MatchState {
    phase: MatchPhase,
    pub score: Score,
    pub timer: MatchTimer,
    result: Option<MatchResult>,
}

impl MatchState {
    pub fn new(config: &Config) -> Self {
        Self {
            phase: MatchPhase::Playing,
            score: Score::new(),
            timer: MatchTimer::new(config.match_seconds),
            result: None,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.phase == MatchPhase::Finished
    }

    /// Result of the last finished match, while in `Finished`
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    /// Advance the timer by one simulation frame; finishes the match at zero.
    /// A clock that starts at zero finishes on the first tick.
    pub fn tick(&mut self, config: &Config) -> Option<TransitionResult> {
        if !self.is_playing() {
            return None;
        }
        if self.timer.seconds_left == 0 || self.timer.tick(config.fps) {
            return Some(self.transition(MatchAction::TimerExpired, config));
        }
        None
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction, config: &Config) -> TransitionResult {
        let from_phase = self.phase;

        let Some(next_phase) = self.next_phase(action) else {
            return TransitionResult {
                success: false,
                from_phase,
                to_phase: from_phase,
                action,
            };
        };

        match action {
            MatchAction::TimerExpired => {
                let result = MatchResult::from_score(&self.score);
                info!(
                    "match finished {}-{}: {:?}",
                    self.score.left, self.score.right, result
                );
                self.result = Some(result);
            }
            MatchAction::Restart => {
                self.score.reset();
                self.timer.reset(config.restart_seconds);
                self.result = None;
                info!("match restarted with {}s on the clock", config.restart_seconds);
            }
        }
        self.phase = next_phase;

        TransitionResult {
            success: true,
            from_phase,
            to_phase: next_phase,
            action,
        }
    }

    /// Get next phase for a given action (if valid)
    fn next_phase(&self, action: MatchAction) -> Option<MatchPhase> {
        match (self.phase, action) {
            (MatchPhase::Playing, MatchAction::TimerExpired) => Some(MatchPhase::Finished),
            (MatchPhase::Finished, MatchAction::Restart) => Some(MatchPhase::Playing),
            _ => None,
        }
    }
}
