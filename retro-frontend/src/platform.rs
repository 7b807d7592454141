use std::collections::HashSet;
use std::time::Instant;
use glam::{vec2, Vec2};
use retro_blit::{
    audio::SoundHandle,
    rendering::fonts::{
        font_align::{HorizontalAlignment, VerticalAlignment},
        tri_spaced::{Font, TextDrawer}
    },
    rendering::shapes::fill_rectangle,
    window::{KeyCode, RetroBlitContext}
};
use rock_blaster::{Key, Platform, SoundEffect, SpriteDraw, SpriteKind, TextPlacement};
use crate::palette::*;

const TEXT_BOX_HEIGHT: u16 = 12;
const GLYPH_WIDTH_ESTIMATE: u16 = 6;
const EXPLOSION_RING_POINTS: usize = 24;

pub struct Sounds {
    pub music: Option<SoundHandle>,
    pub shot: Option<SoundHandle>,
    pub explosion: Option<SoundHandle>
}

/// Keys as reported by the window events; `just_pressed` is cleared after every tick.
#[derive(Default)]
pub struct KeyState {
    pub held: HashSet<KeyCode>,
    pub just_pressed: HashSet<KeyCode>
}

impl KeyState {
    pub fn key_down(&mut self, key_code: KeyCode) {
        if self.held.insert(key_code) {
            self.just_pressed.insert(key_code);
        }
    }

    pub fn key_up(&mut self, key_code: KeyCode) {
        self.held.remove(&key_code);
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }
}

fn key_code(key: Key) -> KeyCode {
    match key {
        Key::Left => KeyCode::Left,
        Key::Right => KeyCode::Right,
        Key::Up => KeyCode::Up,
        Key::Down => KeyCode::Down,
        Key::Fire => KeyCode::Space,
        Key::Quit => KeyCode::Q,
        Key::Escape => KeyCode::Escape
    }
}

/// One frame's view of the retro-blit context, handed to the game for a single tick.
pub struct RetroPlatform<'a> {
    pub ctx: &'a mut RetroBlitContext,
    pub keys: &'a KeyState,
    pub sounds: &'a Sounds,
    pub font: &'a Font,
    pub stars: &'a [(i16, i16, u8)],
    pub started: Instant,
    pub has_sounds: bool,
    pub music_handle: &'a mut Option<usize>,
    pub screen_size: Vec2
}

impl<'a> RetroPlatform<'a> {
    fn put_pixel(&mut self, at: Vec2, color: u8) {
        self.ctx.put_pixel(at.x.floor() as i16, at.y.floor() as i16, color);
    }
}

impl<'a> Platform for RetroPlatform<'a> {
    fn ticks(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn is_key_held(&self, key: Key) -> bool {
        self.keys.held.contains(&key_code(key))
    }

    fn is_key_just_pressed(&self, key: Key) -> bool {
        self.keys.just_pressed.contains(&key_code(key))
    }

    fn quit_requested(&self) -> bool {
        false
    }

    fn play_sound(&mut self, sound: SoundEffect) {
        if !self.has_sounds {
            return;
        }
        let handle = match sound {
            SoundEffect::Music => &self.sounds.music,
            SoundEffect::Shot => &self.sounds.shot,
            SoundEffect::Explosion => &self.sounds.explosion
        };
        if let Some(handle) = handle {
            let play_handle = self.ctx.play_sound(handle.clone());
            if sound == SoundEffect::Music {
                *self.music_handle = play_handle;
            }
        }
    }

    fn draw_background(&mut self) {
        self.ctx.clear(BACKGROUND_COLOR);
        for &(x, y, color) in self.stars {
            self.ctx.put_pixel(x, y, color);
        }
    }

    fn draw_sprite(&mut self, sprite: SpriteDraw<'_>) {
        let color = match sprite.kind {
            SpriteKind::Ship => SHIP_COLOR,
            SpriteKind::Asteroid => ASTEROID_COLOR,
            SpriteKind::Bullet => BULLET_COLOR
        };
        for (x, y) in sprite.mask.pixels() {
            self.ctx.put_pixel(
                (sprite.top_left.x + x as i32) as i16,
                (sprite.top_left.y + y as i32) as i16,
                color
            );
        }
    }

    fn draw_explosion(&mut self, center: Vec2, frame: usize) {
        let radius = 2.0 + 2.0 * frame as f32;
        let color = EXPLOSION_COLORS[frame.min(EXPLOSION_COLORS.len() - 1)];
        for i in 0..EXPLOSION_RING_POINTS {
            let angle = i as f32 / EXPLOSION_RING_POINTS as f32 * std::f32::consts::TAU;
            self.put_pixel(center + vec2(angle.cos(), angle.sin()) * radius, color);
        }
    }

    fn draw_text(&mut self, text: &str, placement: TextPlacement) {
        let box_y = placement.mid_bottom.y as i16 - TEXT_BOX_HEIGHT as i16;
        if placement.framed {
            let frame_width = GLYPH_WIDTH_ESTIMATE * text.len() as u16 + 8;
            let frame_x = placement.mid_bottom.x as i16 - (frame_width / 2) as i16;
            fill_rectangle(self.ctx, frame_x, box_y, frame_width, TEXT_BOX_HEIGHT, FRAME_COLOR);
        }
        self.font.draw_text_in_box(
            self.ctx,
            0, box_y as i32,
            self.screen_size.x as usize, TEXT_BOX_HEIGHT as usize,
            HorizontalAlignment::Center,
            VerticalAlignment::Center,
            text,
            Some(TEXT_COLOR)
        );
    }
}
