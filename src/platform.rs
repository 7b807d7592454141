//! The seam between the game and whatever draws, plays sounds and reads the keyboard.

use glam::{IVec2, Vec2};
use crate::input::Key;
use crate::mask::CollisionMask;
use crate::sprites::SpriteKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Music,
    Shot,
    Explosion
}

/// One sprite to draw this frame. `mask` is the rotated shape the collision code used and
/// `top_left` is where it sits, so a pixel-based renderer can draw exactly what collides.
#[derive(Copy, Clone, Debug)]
pub struct SpriteDraw<'a> {
    pub kind: SpriteKind,
    pub center: Vec2,
    pub angle: f32,
    pub mask: &'a CollisionMask,
    pub top_left: IVec2
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextPlacement {
    pub mid_bottom: Vec2,
    pub framed: bool
}

pub trait Platform {
    /// Milliseconds since the platform started, never decreasing.
    fn ticks(&self) -> u64;
    fn is_key_held(&self, key: Key) -> bool;
    /// True only on the frame the key went down.
    fn is_key_just_pressed(&self, key: Key) -> bool;
    /// The window was asked to close.
    fn quit_requested(&self) -> bool;

    fn play_sound(&mut self, sound: SoundEffect);

    fn draw_background(&mut self);
    fn draw_sprite(&mut self, sprite: SpriteDraw<'_>);
    fn draw_explosion(&mut self, center: Vec2, frame: usize);
    fn draw_text(&mut self, text: &str, placement: TextPlacement);
}

/// Platforms that own the main loop hand out frames through this.
pub trait FrameClock {
    /// Blocks until the next frame is due and returns the seconds since the previous one.
    fn next_frame(&mut self) -> f32;
}
