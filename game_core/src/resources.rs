use crate::Side;

/// Match score, one counter per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // human
    pub right: u32, // AI
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side, points: u32) {
        match side {
            Side::Left => self.left += points,
            Side::Right => self.right += points,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    /// Paddles that touched at least one ball (one per paddle, not per ball)
    pub paddle_contacts: u32,
    /// Balls that crossed a side wall and were reset
    pub balls_scored: u32,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_award() {
        let mut score = Score::new();
        score.award(Side::Left, 5);
        score.award(Side::Left, 5);
        score.award(Side::Right, 5);
        assert_eq!(score, Score { left: 10, right: 5 });
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 15, right: 20 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<u32> = (0..8).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.paddle_contacts = 2;
        events.balls_scored = 1;
        events.left_scored = true;
        events.right_scored = true;

        events.clear();

        assert_eq!(events, Events::new());
    }
}
