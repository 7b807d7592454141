#![allow(dead_code)]

use std::collections::HashSet;
use glam::Vec2;
use rand::{rngs::StdRng, SeedableRng};
use rock_blaster::{
    FrameClock, Game, GameConfig, Key, Platform, SoundEffect, SpriteDraw, SpriteKind, SpriteSet,
    TextPlacement
};

/// A platform driven by hand: the test sets the clock and the keys before every tick and
/// reads back what the game asked for.
#[derive(Default)]
pub struct ScriptedPlatform {
    pub now_ms: u64,
    pub held: HashSet<Key>,
    pub just_pressed: HashSet<Key>,
    pub quit: bool,
    pub sounds: Vec<SoundEffect>,
    pub sprites: Vec<(SpriteKind, Vec2)>,
    pub explosions: Vec<(Vec2, usize)>,
    pub texts: Vec<(String, TextPlacement)>,
    pub backgrounds: usize,
    pub frame_ms: u64,
    pub frames_left: Option<usize>
}

impl ScriptedPlatform {
    pub fn at(now_ms: u64) -> Self {
        Self {
            now_ms,
            frame_ms: 16,
            ..Default::default()
        }
    }

    pub fn press(&mut self, key: Key) -> &mut Self {
        self.just_pressed.insert(key);
        self
    }

    /// Forgets what the last frame drew and which keys went down.
    pub fn next(&mut self, now_ms: u64) -> &mut Self {
        self.now_ms = now_ms;
        self.just_pressed.clear();
        self.sprites.clear();
        self.explosions.clear();
        self.texts.clear();
        self
    }

    pub fn count_of(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|(drawn, _)| *drawn == kind).count()
    }
}

impl Platform for ScriptedPlatform {
    fn ticks(&self) -> u64 {
        self.now_ms
    }

    fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_key_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }

    fn play_sound(&mut self, sound: SoundEffect) {
        self.sounds.push(sound);
    }

    fn draw_background(&mut self) {
        self.backgrounds += 1;
    }

    fn draw_sprite(&mut self, sprite: SpriteDraw<'_>) {
        self.sprites.push((sprite.kind, sprite.center));
    }

    fn draw_explosion(&mut self, center: Vec2, frame: usize) {
        self.explosions.push((center, frame));
    }

    fn draw_text(&mut self, text: &str, placement: TextPlacement) {
        self.texts.push((text.to_string(), placement));
    }
}

impl FrameClock for ScriptedPlatform {
    fn next_frame(&mut self) -> f32 {
        let frame_ms = self.frame_ms;
        self.next(self.now_ms + frame_ms);
        match &mut self.frames_left {
            Some(0) => self.quit = true,
            Some(left) => *left -= 1,
            None => ()
        }
        frame_ms as f32 / 1000.0
    }
}

/// A game writing its high score into `dir`, with the spawner pushed out of the way unless
/// the test wants it.
pub fn quiet_game(dir: &tempfile::TempDir, config: GameConfig) -> Game {
    let mut config = GameConfig {
        high_score_path: dir.path().join("high_score.json"),
        ..config
    };
    config.spawner.cool_down_ms = 1_000_000;
    game_with(config)
}

pub fn game_with(config: GameConfig) -> Game {
    Game::with_rng(config, SpriteSet::from_outlines(1.0), StdRng::seed_from_u64(17))
        .expect("valid config")
}
