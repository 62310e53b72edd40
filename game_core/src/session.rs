use crate::collaborators::*;
use crate::systems::*;
use crate::{
    Arena, Config, Events, GameRng, MatchAction, MatchPhase, MatchState, MoveIntent, Score, Side,
    TransitionResult,
};
use log::info;
use std::time::{Duration, Instant};

/// Whether the session should keep iterating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Quit,
}

/// Totals reported when the session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames: u64,
    pub matches_finished: u32,
    pub final_score: Score,
}

/// Blocks once per loop iteration to hold the frame rate
pub trait FrameClock {
    fn wait_frame(&mut self);
}

/// Sleeps away whatever is left of each frame's time budget
#[derive(Debug, Clone)]
pub struct FixedRateLimiter {
    budget: Duration,
    last: Instant,
}

impl FixedRateLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl FrameClock for FixedRateLimiter {
    fn wait_frame(&mut self) {
        let elapsed = self.last.elapsed();
        if let Some(remaining) = self.budget.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

/// Runs as fast as possible (tests, headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl FrameClock for Unpaced {
    fn wait_frame(&mut self) {}
}

/// Frame orchestrator: owns the entities and sequences the systems every frame
pub struct Session {
    pub config: Config,
    pub arena: Arena,
    pub match_state: MatchState,
    pub events: Events,
    pub rng: GameRng,
    sprites: SpriteSet,
    frames: u64,
    matches_finished: u32,
    music_started: bool,
}

impl Session {
    /// Build a session; the asset provider is consulted once, here
    pub fn new(config: Config, mut rng: GameRng, assets: &dyn AssetProvider) -> Self {
        let arena = Arena::new(&config, &mut rng);
        let match_state = MatchState::new(&config);
        let sprites = assets.sprites(&config);
        info!(
            "session started: {}x{} at {} fps, difficulty {}",
            config.screen_width, config.screen_height, config.fps, config.difficulty
        );

        Self {
            config,
            arena,
            match_state,
            events: Events::new(),
            rng,
            sprites,
            frames: 0,
            matches_finished: 0,
            music_started: false,
        }
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    pub fn phase(&self) -> MatchPhase {
        self.match_state.phase()
    }

    /// Handle one frame of input in whatever phase the match is in.
    ///
    /// Quit is honoured first and leaves all state untouched. While `Finished`, only
    /// confirm is acted on; otherwise one simulation step runs.
    pub fn frame(&mut self, input: InputState) -> SessionStatus {
        if input.quit {
            info!("quit requested after {} frames", self.frames);
            return SessionStatus::Quit;
        }

        match self.match_state.phase() {
            MatchPhase::Finished => {
                if input.confirm {
                    self.restart();
                }
            }
            MatchPhase::Playing => {
                self.step(input);
            }
        }
        SessionStatus::Running
    }

    /// Run one simulation frame. Returns the phase transition if the timer ran out.
    pub fn step(&mut self, input: InputState) -> Option<TransitionResult> {
        if !self.match_state.is_playing() {
            return None;
        }

        // Clear events at start of frame
        self.events.clear();
        self.frames += 1;

        // 1. Human paddle
        let intent = MoveIntent::from_keys(input.up, input.down);
        if let Some(paddle) = self.arena.paddle_mut(Side::Left) {
            let speed = paddle.speed;
            move_paddle(paddle, intent, speed, &self.config);
        }

        // 2. AI paddle
        drive_ai_paddle(&mut self.arena, &self.config, &mut self.rng);

        // 3. Move balls
        move_balls(&mut self.arena);

        // 4. Ball vs paddles
        check_paddle_contacts(&mut self.arena, &self.config, &mut self.events);

        // 5. Ball vs side walls
        check_scoring(
            &mut self.arena,
            &self.config,
            &mut self.match_state.score,
            &mut self.events,
            &mut self.rng,
        );

        // 6. Clock
        let transition = self.match_state.tick(&self.config);
        if transition.is_some() {
            self.matches_finished += 1;
        }
        transition
    }

    /// Finished -> Playing: zero the score, restart the clock, reset the balls.
    /// Paddles stay where they are.
    pub fn restart(&mut self) -> TransitionResult {
        let transition = self
            .match_state
            .transition(MatchAction::Restart, &self.config);
        if transition.success {
            self.arena.reset_balls(&self.config, &mut self.rng);
            self.events.clear();
        }
        transition
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            width: self.arena.width,
            height: self.arena.height,
            paddles: &self.arena.paddles,
            balls: &self.arena.balls,
            score: self.match_state.score,
            seconds_left: self.match_state.timer.seconds_left,
            phase: self.match_state.phase(),
            sprites: &self.sprites,
        }
    }

    pub fn result_view(&self) -> Option<ResultView<'_>> {
        self.match_state.result().map(|result| ResultView {
            width: self.arena.width,
            height: self.arena.height,
            result,
            score: self.match_state.score,
            sprites: &self.sprites,
        })
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            frames: self.frames,
            matches_finished: self.matches_finished,
            final_score: self.match_state.score,
        }
    }

    /// Drive the fixed-rate loop until a quit signal arrives
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        audio: &mut dyn AudioSink,
        clock: &mut dyn FrameClock,
    ) -> SessionSummary {
        // Music is started once per session, on the first run
        if !self.music_started {
            audio.start_music();
            self.music_started = true;
        }

        loop {
            if self.frame(input.poll()) == SessionStatus::Quit {
                break;
            }

            for _ in 0..self.events.paddle_contacts {
                audio.play_contact();
            }
            for _ in 0..self.events.balls_scored {
                audio.play_wall();
            }
            renderer.draw_frame(&self.view());

            if self.match_state.is_finished()
                && self.await_restart(input, renderer, clock) == SessionStatus::Quit
            {
                break;
            }
            clock.wait_frame();
        }

        let summary = self.summary();
        info!(
            "session ended: {} frames, {} matches finished",
            summary.frames, summary.matches_finished
        );
        summary
    }

    /// Terminal-screen loop: show the result and poll until confirm or quit
    fn await_restart(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        clock: &mut dyn FrameClock,
    ) -> SessionStatus {
        if let Some(view) = self.result_view() {
            renderer.draw_result(&view);
        }

        while self.match_state.is_finished() {
            clock.wait_frame();
            if self.frame(input.poll()) == SessionStatus::Quit {
                return SessionStatus::Quit;
            }
        }
        SessionStatus::Running
    }
}
