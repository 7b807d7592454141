use glam::Vec2;

/// Center of the entity in window pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position(pub Vec2);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Direction(pub Vec2);

/// Pixels per second along [`Direction`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Speed(pub f32);

/// Degrees, counter-clockwise on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation {
    pub angle: f32
}

/// Degrees per second added to [`Rotation`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotationSpeed(pub f32);

#[derive(Copy, Clone, Debug)]
pub struct Player;

#[derive(Copy, Clone, Debug)]
pub struct Asteroid;

#[derive(Copy, Clone, Debug)]
pub struct Bullet;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Explosion {
    pub started_ms: u64,
    pub frame: usize
}

/// Marks an entity for removal at the end of the current tick.
#[derive(Copy, Clone, Debug)]
pub struct Dead;
