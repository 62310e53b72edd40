//! Crossterm terminal front end: raw-mode guard and a cell-grid renderer.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use game_core::{FrameView, Renderer, ResultView, Rgb, Shape, Side, Sprite, Surface};
use glam::Vec2;
use std::io::{self, Stdout, Write};

const TEXT: Rgb = Rgb(255, 255, 255);
const BLACK: Rgb = Rgb(0, 0, 0);

/// Puts the terminal in raw/alternate-screen mode and restores it on drop
pub struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide)?;

        // Release events let held keys end exactly; not every terminal has them
        let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
        if keyboard_enhanced {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        tracing::debug!("terminal ready, keyboard enhancement: {keyboard_enhanced}");
        Ok(Self { keyboard_enhanced })
    }

    /// Whether key release events will arrive
    pub fn releases_reported(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        if let Err(err) = execute!(out, LeaveAlternateScreen, Show) {
            tracing::warn!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = disable_raw_mode() {
            tracing::warn!("failed to disable raw mode: {err}");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

/// Character grid the world is scaled onto
#[derive(Debug, Clone)]
pub struct Canvas {
    pub cols: u16,
    pub rows: u16,
    world: Vec2,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, world: Vec2) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: TEXT,
            bg: BLACK,
        };
        Self {
            cols,
            rows,
            world,
            cells: vec![blank; cols as usize * rows as usize],
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        self.cells
            .get_mut(row as usize * self.cols as usize + col as usize)
    }

    /// World position to (col, row)
    pub fn to_cell(&self, pos: Vec2) -> (i32, i32) {
        let col = (pos.x / self.world.x * self.cols as f32).floor() as i32;
        let row = (pos.y / self.world.y * self.rows as f32).floor() as i32;
        (col, row)
    }

    /// Cell span covered by a sprite at `top_left`, at least one cell each way
    fn span(&self, top_left: Vec2, size: Vec2) -> (i32, i32, i32, i32) {
        let (c0, r0) = self.to_cell(top_left);
        let (c1, r1) = self.to_cell(top_left + size);
        (c0, r0, c1.max(c0 + 1), r1.max(r0 + 1))
    }

    pub fn draw_sprite(&mut self, sprite: &Sprite, top_left: Vec2) {
        let (c0, r0, c1, r1) = self.span(top_left, sprite.size);
        let (w, h) = ((c1 - c0) as usize, (r1 - r0) as usize);

        for row in r0..r1 {
            for col in c0..c1 {
                let (ch, fg) = match &sprite.surface {
                    Surface::Solid { color, shape } => {
                        let ch = match shape {
                            Shape::Rect => '█',
                            Shape::Circle => '●',
                        };
                        (ch, *color)
                    }
                    Surface::Image { rows, tint } => {
                        let ry = (row - r0) as usize * rows.len() / h;
                        let line: Vec<char> = rows
                            .get(ry)
                            .map(|r| r.chars().collect())
                            .unwrap_or_default();
                        let rx = (col - c0) as usize * line.len().max(1) / w;
                        (line.get(rx).copied().unwrap_or(' '), *tint)
                    }
                };
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.ch = ch;
                    cell.fg = fg;
                }
            }
        }
    }

    /// Full-screen backdrop: solid colours become the cell background
    pub fn draw_backdrop(&mut self, sprite: &Sprite) {
        match &sprite.surface {
            Surface::Solid { color, .. } => {
                for cell in &mut self.cells {
                    *cell = Cell {
                        ch: ' ',
                        fg: TEXT,
                        bg: *color,
                    };
                }
            }
            Surface::Image { .. } => self.draw_sprite(sprite, Vec2::ZERO),
        }
    }

    pub fn text(&mut self, pos: Vec2, text: &str) {
        let (col, row) = self.to_cell(pos);
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(col + i as i32, row) {
                cell.ch = ch;
                cell.fg = TEXT;
            }
        }
    }

    /// Text centred horizontally on `pos`
    pub fn text_centred(&mut self, pos: Vec2, text: &str) {
        let (col, row) = self.to_cell(pos);
        let start = col - text.chars().count() as i32 / 2;
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(start + i as i32, row) {
                cell.ch = ch;
                cell.fg = TEXT;
            }
        }
    }

    fn present(&self, out: &mut impl Write) -> io::Result<()> {
        let mut last: Option<(Rgb, Rgb)> = None;
        for row in 0..self.rows {
            queue!(out, MoveTo(0, row))?;
            for col in 0..self.cols {
                let Some(cell) = self.cell(col, row) else {
                    continue;
                };
                if last != Some((cell.fg, cell.bg)) {
                    queue!(
                        out,
                        SetForegroundColor(color(cell.fg)),
                        SetBackgroundColor(color(cell.bg))
                    )?;
                    last = Some((cell.fg, cell.bg));
                }
                queue!(out, Print(cell.ch))?;
            }
        }
        out.flush()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

/// Build the canvas for a playing frame
pub fn compose_frame(view: &FrameView<'_>, cols: u16, rows: u16) -> Canvas {
    let mut canvas = Canvas::new(cols, rows, Vec2::new(view.width, view.height));
    canvas.draw_backdrop(&view.sprites.background);

    canvas.text(Vec2::new(30.0, 50.0), &view.left_label());
    canvas.text(Vec2::new(view.width - 200.0, 50.0), &view.right_label());
    canvas.text(Vec2::new(view.width / 2.0 - 80.0, 50.0), &view.timer_label());

    for paddle in view.paddles {
        let sprite = match paddle.side {
            Side::Left => &view.sprites.player,
            Side::Right => &view.sprites.ai,
        };
        canvas.draw_sprite(sprite, paddle.pos);
    }
    for ball in view.balls {
        let top_left = ball.pos - Vec2::splat(ball.radius());
        canvas.draw_sprite(&view.sprites.ball, top_left);
    }
    canvas
}

/// Build the canvas for the result screen
pub fn compose_result(view: &ResultView<'_>, cols: u16, rows: u16) -> Canvas {
    let mut canvas = Canvas::new(cols, rows, Vec2::new(view.width, view.height));
    canvas.draw_backdrop(&view.sprites.game_over);

    let centre = Vec2::new(view.width / 2.0, view.height / 2.0);
    canvas.text_centred(centre, view.banner());
    canvas.text_centred(centre + Vec2::new(0.0, 60.0), ResultView::RESTART_PROMPT);
    canvas
}

/// Draws frames to stdout; I/O failures are logged and the frame is dropped
pub struct TerminalRenderer {
    out: Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    fn size() -> (u16, u16) {
        match terminal::size() {
            Ok((cols, rows)) => (cols.max(1), rows.max(1)),
            Err(err) => {
                tracing::debug!("terminal size unavailable: {err}");
                (80, 24)
            }
        }
    }

    fn present(&mut self, canvas: &Canvas) {
        if let Err(err) = canvas.present(&mut self.out) {
            tracing::warn!("failed to draw frame: {err}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn draw_frame(&mut self, view: &FrameView<'_>) {
        let (cols, rows) = Self::size();
        let canvas = compose_frame(view, cols, rows);
        self.present(&canvas);
    }

    fn draw_result(&mut self, view: &ResultView<'_>) {
        let (cols, rows) = Self::size();
        let canvas = compose_result(view, cols, rows);
        self.present(&canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        AssetProvider, Ball, Config, MatchPhase, MatchResult, Paddle, PlaceholderAssets, Score,
    };

    fn row_text(canvas: &Canvas, row: u16) -> String {
        (0..canvas.cols)
            .filter_map(|c| canvas.cell(c, row).map(|cell| cell.ch))
            .collect()
    }

    #[test]
    fn test_world_to_cell_scaling() {
        let canvas = Canvas::new(120, 75, Vec2::new(1200.0, 750.0));
        assert_eq!(canvas.to_cell(Vec2::ZERO), (0, 0));
        assert_eq!(canvas.to_cell(Vec2::new(600.0, 375.0)), (60, 37));
        assert_eq!(canvas.to_cell(Vec2::new(-5.0, 0.0)), (-1, 0));
    }

    #[test]
    fn test_frame_draws_labels_paddles_and_ball() {
        let config = Config::new();
        let sprites = PlaceholderAssets.sprites(&config);
        let paddles = [Paddle::spawn(Side::Left, &config), Paddle::spawn(Side::Right, &config)];
        let balls = [Ball::new(Vec2::new(600.0, 375.0), 20.0, 1, 1, 8.0)];
        let view = FrameView {
            width: config.screen_width,
            height: config.screen_height,
            paddles: &paddles,
            balls: &balls,
            score: Score { left: 5, right: 10 },
            seconds_left: 42,
            phase: MatchPhase::Playing,
            sprites: &sprites,
        };

        let canvas = compose_frame(&view, 120, 75);

        let top = row_text(&canvas, 5);
        assert!(top.contains("Player: 5"));
        assert!(top.contains("AI: 10"));
        assert!(top.contains("Time: 42"));
        assert_eq!(canvas.cell(2, 33).unwrap().ch, '█');
        assert_eq!(canvas.cell(2, 33).unwrap().fg, Rgb(0, 100, 255));
        assert_eq!(canvas.cell(116, 33).unwrap().fg, Rgb(255, 100, 0));
        assert_eq!(canvas.cell(59, 36).unwrap().ch, '●');
        assert_eq!(canvas.cell(30, 60).unwrap().bg, Rgb(20, 50, 30));
    }

    #[test]
    fn test_ball_off_screen_is_skipped() {
        let config = Config::new();
        let sprites = PlaceholderAssets.sprites(&config);
        let balls = [Ball::new(Vec2::new(600.0, 4.0), 20.0, 1, 1, 8.0)];
        let view = FrameView {
            width: config.screen_width,
            height: config.screen_height,
            paddles: &[],
            balls: &balls,
            score: Score::new(),
            seconds_left: 60,
            phase: MatchPhase::Playing,
            sprites: &sprites,
        };

        // Top of the ball is above the screen; rows below 0 are skipped
        let canvas = compose_frame(&view, 120, 75);
        assert_eq!(canvas.cell(59, 0).unwrap().ch, '●');
    }

    #[test]
    fn test_result_screen_text() {
        let config = Config::new();
        let sprites = PlaceholderAssets.sprites(&config);
        let view = ResultView {
            width: config.screen_width,
            height: config.screen_height,
            result: MatchResult::RightWins,
            score: Score { left: 0, right: 5 },
            sprites: &sprites,
        };

        let canvas = compose_result(&view, 120, 75);

        assert!(row_text(&canvas, 37).contains("AI WINS!"));
        assert!(row_text(&canvas, 43).contains("ENTER: Play Again"));
        assert_eq!(canvas.cell(0, 0).unwrap().bg, Rgb(50, 20, 20));
    }

    #[test]
    fn test_image_sprite_without_rows_draws_blank() {
        let mut canvas = Canvas::new(10, 10, Vec2::new(10.0, 10.0));
        let sprite = Sprite {
            size: Vec2::new(3.0, 2.0),
            surface: Surface::Image {
                rows: Vec::new(),
                tint: Rgb(9, 9, 9),
            },
        };

        canvas.draw_sprite(&sprite, Vec2::new(1.0, 1.0));

        assert_eq!(canvas.cell(1, 1).unwrap().ch, ' ');
        assert_eq!(canvas.cell(3, 2).unwrap().fg, Rgb(9, 9, 9));
    }

    #[test]
    fn test_image_sprite_is_stretched() {
        let mut canvas = Canvas::new(10, 10, Vec2::new(10.0, 10.0));
        let sprite = Sprite {
            size: Vec2::new(4.0, 2.0),
            surface: Surface::Image {
                rows: vec!["ab".to_string()],
                tint: Rgb(1, 2, 3),
            },
        };

        canvas.draw_sprite(&sprite, Vec2::new(2.0, 3.0));

        let drawn: String = (2..6).map(|c| canvas.cell(c, 3).unwrap().ch).collect();
        assert_eq!(drawn, "aabb");
        assert_eq!(canvas.cell(2, 4).unwrap().ch, 'a');
        assert_eq!(canvas.cell(2, 4).unwrap().fg, Rgb(1, 2, 3));
    }
}
