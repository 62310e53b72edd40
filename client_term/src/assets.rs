//! File-backed sprite art.
//!
//! Each sprite is a text file: the first line is a tint as `#rrggbb`, the remaining
//! lines are glyph rows stretched over the sprite's cells. A missing or malformed
//! file falls back to the placeholder for that sprite.

use game_core::{AssetProvider, Config, PlaceholderAssets, Rgb, Sprite, SpriteSet, Surface};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: first line must be a #rrggbb tint, got '{line}'", path.display())]
    BadTint { path: PathBuf, line: String },
    #[error("{}: no glyph rows", path.display())]
    Empty { path: PathBuf },
}

/// Loaded art for one sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Art {
    pub tint: Rgb,
    pub rows: Vec<String>,
}

pub fn parse_tint(line: &str) -> Option<Rgb> {
    let hex = line.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

pub fn parse_art(path: &Path, text: &str) -> Result<Art, AssetError> {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    let tint = parse_tint(first).ok_or_else(|| AssetError::BadTint {
        path: path.to_path_buf(),
        line: first.to_string(),
    })?;
    let rows: Vec<String> = lines
        .map(|l| l.trim_end().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(AssetError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(Art { tint, rows })
}

pub fn load_art(path: &Path) -> Result<Art, AssetError> {
    let text = std::fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_art(path, &text)
}

/// Art read from a directory; anything that failed to load stays a placeholder
#[derive(Debug, Clone, Default)]
pub struct FileAssets {
    pub player: Option<Art>,
    pub ai: Option<Art>,
    pub ball: Option<Art>,
    pub background: Option<Art>,
    pub game_over: Option<Art>,
}

impl FileAssets {
    pub fn load(dir: &Path) -> Self {
        let load = |name: &str| match load_art(&dir.join(name)) {
            Ok(art) => Some(art),
            Err(err) => {
                warn!("using placeholder: {err}");
                None
            }
        };

        let assets = Self {
            player: load("player.txt"),
            ai: load("ai.txt"),
            ball: load("ball.txt"),
            background: load("background.txt"),
            game_over: load("game_over.txt"),
        };
        info!("loaded {} of 5 sprites from {}", assets.loaded(), dir.display());
        assets
    }

    pub fn loaded(&self) -> usize {
        [
            &self.player,
            &self.ai,
            &self.ball,
            &self.background,
            &self.game_over,
        ]
        .iter()
        .filter(|a| a.is_some())
        .count()
    }
}

fn textured(fallback: Sprite, art: Option<&Art>) -> Sprite {
    match art {
        Some(art) => Sprite {
            size: fallback.size,
            surface: Surface::Image {
                rows: art.rows.clone(),
                tint: art.tint,
            },
        },
        None => fallback,
    }
}

impl AssetProvider for FileAssets {
    fn sprites(&self, config: &Config) -> SpriteSet {
        let base = PlaceholderAssets.sprites(config);
        SpriteSet {
            player: textured(base.player, self.player.as_ref()),
            ai: textured(base.ai, self.ai.as_ref()),
            ball: textured(base.ball, self.ball.as_ref()),
            background: textured(base.background, self.background.as_ref()),
            game_over: textured(base.game_over, self.game_over.as_ref()),
        }
    }
}
