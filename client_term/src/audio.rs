use game_core::AudioSink;
use std::io::Write;

/// Sound through the terminal bell. There is no music device, so background
/// music is silent.
#[derive(Debug, Default)]
pub struct BellAudio;

impl BellAudio {
    pub fn new() -> Self {
        Self
    }

    fn ring(&mut self) {
        let mut out = std::io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            tracing::debug!("bell failed: {err}");
        }
    }
}

impl AudioSink for BellAudio {
    fn play_contact(&mut self) {
        self.ring();
    }

    fn play_wall(&mut self) {
        self.ring();
    }

    fn start_music(&mut self) {
        tracing::info!("no music output in the terminal; background music is silent");
    }
}
