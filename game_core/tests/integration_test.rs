use game_core::*;
use glam::Vec2;
use proptest::prelude::*;

fn new_session(seed: u64) -> Session {
    Session::new(Config::new(), GameRng::new(seed), &PlaceholderAssets)
}

#[test]
fn test_ball_crosses_empty_field_and_scores() {
    let mut session = new_session(1);
    session.arena.paddles.clear();
    session.arena.balls[0] = Ball::new(Vec2::new(600.0, 375.0), 20.0, 1, 1, 8.0);

    // ceil((1200 / 2 - 10) / 8) = 74
    for frame in 1..74 {
        session.step(InputState::default());
        assert_eq!(
            session.match_state.score,
            Score::new(),
            "No score expected before frame 74, got one at {frame}"
        );
    }

    session.step(InputState::default());

    assert_eq!(session.match_state.score, Score { left: 5, right: 0 });
    assert!(session.events.left_scored);
    assert_eq!(session.events.balls_scored, 1);
    let ball = session.arena.balls[0];
    assert_eq!(ball.pos.x, 600.0, "Ball is reset to the centre line");
    assert_eq!(ball.speed, 8.0);
}

#[test]
fn test_timer_runs_out_after_1800_frames() {
    let mut session = new_session(2);
    session.arena.balls.clear();
    assert_eq!(session.match_state.timer.seconds_left, 60);

    for _ in 0..1799 {
        assert_eq!(session.step(InputState::default()), None);
    }
    assert_eq!(session.match_state.timer.seconds_left, 1);
    assert_eq!(session.phase(), MatchPhase::Playing);

    let transition = session
        .step(InputState::default())
        .expect("the 1800th frame finishes the match");

    assert_eq!(transition.from_phase, MatchPhase::Playing);
    assert_eq!(transition.to_phase, MatchPhase::Finished);
    assert_eq!(session.match_state.timer.seconds_left, 0);
    assert_eq!(session.match_state.result(), Some(MatchResult::Draw));
    assert_eq!(session.summary().matches_finished, 1);
}

#[test]
fn test_confirm_on_result_screen_restarts_match() {
    let mut session = new_session(3);
    session.match_state.score = Score { left: 20, right: 10 };
    session
        .match_state
        .transition(MatchAction::TimerExpired, &session.config);
    session.arena.balls[0].speed = 14.5;
    session.arena.balls[0].pos = Vec2::new(40.0, 40.0);

    let status = session.frame(InputState::confirm());

    assert_eq!(status, SessionStatus::Running);
    assert_eq!(session.phase(), MatchPhase::Playing);
    assert_eq!(session.match_state.score, Score::new());
    assert_eq!(session.match_state.timer.seconds_left, 30);
    let ball = session.arena.balls[0];
    assert_eq!(ball.pos.x, 600.0);
    assert!((200.0..=550.0).contains(&ball.pos.y));
    assert_eq!(ball.speed, 8.0);
}

#[test]
fn test_quit_on_result_screen_keeps_state() {
    let mut session = new_session(4);
    session.match_state.score = Score { left: 5, right: 10 };
    session
        .match_state
        .transition(MatchAction::TimerExpired, &session.config);
    let ball = session.arena.balls[0].pos;

    let status = session.frame(InputState {
        confirm: true,
        quit: true,
        ..InputState::default()
    });

    assert_eq!(status, SessionStatus::Quit);
    assert_eq!(session.phase(), MatchPhase::Finished);
    assert_eq!(session.match_state.score, Score { left: 5, right: 10 });
    assert_eq!(session.match_state.timer.seconds_left, 60);
    assert_eq!(session.arena.balls[0].pos, ball);
}

#[test]
fn test_paddle_contacts_speed_up_ball_to_cap() {
    let mut session = new_session(5);
    session.arena.paddles.retain(|p| p.side == Side::Left);
    let paddle = session.arena.paddles[0];

    // 2px short of touching the paddle, moving left
    let start_x = paddle.pos.x + paddle.size.x + 10.0 + 8.0 - 6.0;
    session.arena.balls[0] = Ball::new(Vec2::new(start_x, paddle.center_y()), 20.0, -1, 1, 8.0);
    session.step(InputState::default());

    let ball = session.arena.balls[0];
    assert_eq!(ball.dir_x, 1, "Contact flips the ball in the same frame");
    assert_eq!(ball.speed, 8.5);
    assert_eq!(session.events.paddle_contacts, 1);

    // Keep feeding the ball back into the paddle
    let mut last = ball.speed;
    for _ in 0..30 {
        let ball = &mut session.arena.balls[0];
        ball.pos = Vec2::new(start_x, paddle.center_y());
        ball.dir_x = -1;
        session.step(InputState::default());

        let speed = session.arena.balls[0].speed;
        assert!(speed >= last);
        assert!(speed <= 15.0);
        last = speed;
    }
    assert_eq!(last, 15.0);
}

#[test]
fn test_ai_converges_without_error_margin() {
    let config = Config::new();
    let profile = AiProfile {
        speed: 10.0,
        reaction_distance: 800.0,
        error_margin: 0,
    };
    let mut rng = GameRng::new(6);
    let mut paddle = Paddle::spawn(Side::Right, &config);
    paddle.pos.y = 0.0;
    let target_y = 612.0;
    let ball = Ball::new(Vec2::new(1000.0, target_y), 20.0, 1, 1, 8.0);

    let mut distances = Vec::new();
    for _ in 0..120 {
        let cmd = calculate_ai_input(&paddle, &[ball], &profile, &config, &mut rng);
        move_paddle(&mut paddle, cmd.intent, cmd.speed, &config);
        distances.push((paddle.center_y() - target_y).abs());
    }

    assert!(
        distances.windows(2).all(|w| w[1] <= w[0]),
        "Distance to target never grows"
    );
    let settled = *distances.last().unwrap();
    assert!(settled <= Params::AI_DEADZONE);
    assert!(
        distances[60..].iter().all(|&d| d == settled),
        "Paddle holds once inside the deadzone"
    );
}

#[test]
fn test_every_difficulty_plays_a_full_match() {
    for difficulty in Difficulty::ALL {
        let config = Config::new().with_difficulty(difficulty);
        let mut session = Session::new(config, GameRng::new(7), &PlaceholderAssets);
        let mut input = ScriptedInput::new(vec![InputState::default(); 1800]);

        let summary = session.run(&mut input, &mut NullRenderer, &mut SilentAudio, &mut Unpaced);

        assert_eq!(summary.frames, 1800, "{difficulty}");
        assert_eq!(summary.matches_finished, 1, "{difficulty}");
        assert!(session.match_state.is_finished());
        let score = summary.final_score;
        assert_eq!(score.left % 5, 0);
        assert_eq!(score.right % 5, 0);
    }
}

fn input_strategy() -> impl Strategy<Value = InputState> {
    (any::<bool>(), any::<bool>()).prop_map(|(up, down)| InputState {
        up,
        down,
        ..InputState::default()
    })
}

proptest! {
    #[test]
    fn prop_paddles_stay_on_screen(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 0..600),
    ) {
        let mut session = new_session(seed);
        let max_top = session.config.screen_height - session.config.paddle_height;

        for input in inputs {
            session.frame(input);
            for paddle in &session.arena.paddles {
                prop_assert!(paddle.pos.y >= 0.0);
                prop_assert!(paddle.pos.y <= max_top);
            }
        }
    }

    #[test]
    fn prop_ball_direction_and_speed_invariants(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 0..600),
    ) {
        let mut session = new_session(seed);

        for input in inputs {
            let before = session.arena.balls[0].speed;
            session.frame(input);
            let ball = session.arena.balls[0];

            prop_assert!(ball.dir_x == 1 || ball.dir_x == -1);
            prop_assert!(ball.dir_y == 1 || ball.dir_y == -1);
            prop_assert!(ball.speed > 0.0 && ball.speed <= 15.0);
            if session.events.balls_scored == 0 {
                prop_assert!(ball.speed >= before);
            } else {
                prop_assert_eq!(ball.speed, 8.0);
            }
        }
    }

    #[test]
    fn prop_scores_move_in_steps_of_five(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 0..600),
    ) {
        let mut session = new_session(seed);

        for input in inputs {
            let before = session.match_state.score;
            session.frame(input);
            let after = session.match_state.score;
            let gained = (after.left - before.left) + (after.right - before.right);
            prop_assert_eq!(gained, 5 * session.events.balls_scored);
        }
    }
}
