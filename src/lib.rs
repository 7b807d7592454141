//! Core of a small arcade shooter: a ship at the bottom of the screen blasts rocks falling
//! from the top. Drawing, sound and keyboard come from whoever implements [`Platform`].

pub mod components;
pub mod config;
pub mod constants;
pub mod difficulty;
pub mod error;
pub mod input;
pub mod mask;
pub mod platform;
pub mod score;
pub mod sprites;
pub mod timers;

mod game;
mod subsystems;

pub use config::GameConfig;
pub use error::{ConfigError, PersistError};
pub use game::{Game, GameState};
pub use input::Key;
pub use mask::CollisionMask;
pub use platform::{FrameClock, Platform, SoundEffect, SpriteDraw, TextPlacement};
pub use score::HighScoreFile;
pub use sprites::{SpriteKind, SpriteSet};
