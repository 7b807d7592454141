use std::collections::HashMap;
use std::rc::Rc;
use image::RgbaImage;
use crate::constants::{ASTEROID_OUTLINE, BULLET_OUTLINE, MASK_ALPHA_THRESHOLD, SHIP_OUTLINE};
use crate::mask::CollisionMask;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Ship,
    Asteroid,
    Bullet
}

/// Unrotated masks of every sprite plus a cache of their rotations, keyed by whole degrees.
pub struct SpriteSet {
    ship: CollisionMask,
    asteroid: CollisionMask,
    bullet: CollisionMask,
    rotations: HashMap<(SpriteKind, i32), Rc<CollisionMask>>
}

impl SpriteSet {
    pub fn new(ship: CollisionMask, asteroid: CollisionMask, bullet: CollisionMask) -> Self {
        Self {
            ship,
            asteroid,
            bullet,
            rotations: HashMap::new()
        }
    }

    /// Built-in vector shapes, `scale` pixels per outline unit.
    pub fn from_outlines(scale: f32) -> Self {
        Self::new(
            CollisionMask::from_outline(SHIP_OUTLINE, scale),
            CollisionMask::from_outline(ASTEROID_OUTLINE, scale),
            CollisionMask::from_outline(BULLET_OUTLINE, scale)
        )
    }

    pub fn from_images(ship: &RgbaImage, asteroid: &RgbaImage, bullet: &RgbaImage) -> Self {
        Self::new(
            CollisionMask::from_image(ship, MASK_ALPHA_THRESHOLD),
            CollisionMask::from_image(asteroid, MASK_ALPHA_THRESHOLD),
            CollisionMask::from_image(bullet, MASK_ALPHA_THRESHOLD)
        )
    }

    pub fn base(&self, kind: SpriteKind) -> &CollisionMask {
        match kind {
            SpriteKind::Ship => &self.ship,
            SpriteKind::Asteroid => &self.asteroid,
            SpriteKind::Bullet => &self.bullet
        }
    }

    pub fn rotated(&mut self, kind: SpriteKind, degrees: f32) -> Rc<CollisionMask> {
        let key = (kind, (degrees.round() as i32).rem_euclid(360));
        if let Some(mask) = self.rotations.get(&key) {
            return Rc::clone(mask);
        }
        let mask = Rc::new(self.base(kind).rotated(key.1 as f32));
        self.rotations.insert(key, Rc::clone(&mask));
        mask
    }
}
