use std::path::Path;
use std::time::{Duration, Instant};
use glam::vec2;
use rand::Rng;
use retro_blit::{
    audio::SoundHandle,
    rendering::fonts::tri_spaced::Font,
    window::{ContextHandler, KeyCode, KeyMods, RetroBlitContext, WindowMode}
};
use rock_blaster::{
    constants::{OUTLINE_SCALE, WINDOW_HEIGHT, WINDOW_TITLE},
    Game, GameConfig, GameState, SpriteSet
};
use crate::palette::{PALETTE, STAR_COLORS};
use crate::platform::{KeyState, RetroPlatform, Sounds};

mod palette;
mod platform;

const CONFIG_PATH: &str = "rock-blaster.ron";
const SCREEN_WIDTH: f32 = 320.0;
const SCREEN_HEIGHT: f32 = 240.0;
const STAR_COUNT: usize = 80;
const LAST_FRAME_HOLD: Duration = Duration::from_secs(2);

pub struct RockBlaster {
    game: Game,
    sounds: Sounds,
    font: Font,
    stars: Vec<(i16, i16, u8)>,
    keys: KeyState,
    started: Instant,
    has_sounds: bool,
    music_handle: Option<usize>,
    stopped_at: Option<Instant>
}

macro_rules! retro_platform {
    ($self: ident, $ctx: ident) => {
        RetroPlatform {
            ctx: $ctx,
            keys: &$self.keys,
            sounds: &$self.sounds,
            font: &$self.font,
            stars: &$self.stars,
            started: $self.started,
            has_sounds: $self.has_sounds,
            music_handle: &mut $self.music_handle,
            screen_size: vec2(SCREEN_WIDTH, SCREEN_HEIGHT)
        }
    };
}

impl ContextHandler for RockBlaster {
    fn get_window_title(&self) -> &'static str { WINDOW_TITLE }

    fn get_window_mode(&self) -> WindowMode { WindowMode::ModeX }

    fn on_key_down(&mut self, _ctx: &mut RetroBlitContext, key_code: KeyCode, _key_mods: KeyMods) {
        self.keys.key_down(key_code);
    }

    fn on_key_up(&mut self, _ctx: &mut RetroBlitContext, key_code: KeyCode, _key_mods: KeyMods) {
        self.keys.key_up(key_code);
    }

    fn init(&mut self, ctx: &mut RetroBlitContext) {
        for (idx, &palette_color) in PALETTE.iter().enumerate() {
            ctx.set_palette(idx as u8, palette_color);
        }
        self.has_sounds = ctx.init_audio();
        if !self.has_sounds {
            log::warn!("no audio device, playing silently");
        }
        let mut platform = retro_platform!(self, ctx);
        self.game.start(&mut platform);
    }

    fn update(&mut self, ctx: &mut RetroBlitContext, dt: f32) {
        if let Some(music_handle) = self.music_handle {
            if self.has_sounds && !ctx.playback_in_progress(music_handle) {
                if let Some(music) = &self.sounds.music {
                    self.music_handle = ctx.play_sound(music.clone());
                }
            }
        }

        if let Some(stopped_at) = self.stopped_at {
            // the last drawn frame stays in the buffer until we leave
            if stopped_at.elapsed() >= LAST_FRAME_HOLD || !self.keys.just_pressed.is_empty() {
                log::info!(
                    "bye, final score {}, high score {}",
                    self.game.score(),
                    self.game.high_score()
                );
                std::process::exit(0);
            }
            self.keys.end_frame();
            return;
        }

        let state = {
            let mut platform = retro_platform!(self, ctx);
            self.game.tick(&mut platform, dt)
        };
        self.keys.end_frame();

        if state == GameState::Stopped {
            self.stopped_at = Some(Instant::now());
        }
    }
}

impl RockBlaster {
    pub fn new() -> Result<Self, rock_blaster::ConfigError> {
        let config = GameConfig::load_or_default(CONFIG_PATH)?
            .fitted_to(SCREEN_WIDTH, SCREEN_HEIGHT);
        let game = Game::new(config, load_sprites())?;

        let font = Font::default_font_small()
            .map_err(|source| rock_blaster::ConfigError::Io { path: "<built-in font>".into(), source })?;

        let mut rng = rand::thread_rng();
        let stars = (0..STAR_COUNT)
            .map(|_| (
                rng.gen_range(0..SCREEN_WIDTH as i16),
                rng.gen_range(0..SCREEN_HEIGHT as i16),
                STAR_COLORS[rng.gen_range(0..STAR_COLORS.len())]
            ))
            .collect();

        Ok(Self {
            game,
            sounds: Sounds {
                music: load_sound("assets/music.ogg"),
                shot: load_sound("assets/shot.wav"),
                explosion: load_sound("assets/explosion.wav")
            },
            font,
            stars,
            keys: KeyState::default(),
            started: Instant::now(),
            has_sounds: false,
            music_handle: None,
            stopped_at: None
        })
    }
}

/// Sprites drawn at screen resolution in `assets/`, or the built-in outlines when any is
/// missing.
fn load_sprites() -> SpriteSet {
    let images = ["assets/ship.png", "assets/asteroid.png", "assets/bullet.png"]
        .map(|path| match image::open(path) {
            Ok(image) => Some(image.to_rgba8()),
            Err(error) => {
                log::info!("sprite {} not loaded: {}", path, error);
                None
            }
        });
    match images {
        [Some(ship), Some(asteroid), Some(bullet)] => SpriteSet::from_images(&ship, &asteroid, &bullet),
        _ => SpriteSet::from_outlines(OUTLINE_SCALE * SCREEN_HEIGHT / WINDOW_HEIGHT)
    }
}

fn load_sound(path: impl AsRef<Path>) -> Option<SoundHandle> {
    let path = path.as_ref();
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(error) => {
            log::warn!("sound {} not loaded: {}", path.display(), error);
            return None;
        }
    };
    match SoundHandle::from_file(file) {
        Ok(handle) => Some(handle),
        Err(error) => {
            log::warn!("sound {} not decoded: {}", path.display(), error);
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match RockBlaster::new() {
        Ok(game) => retro_blit::window::start(game),
        Err(error) => {
            log::error!("cannot start: {}", error);
            std::process::exit(1);
        }
    }
}
