use glam::{vec2, Vec2};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Quit,
    Escape
}

/// Direction keys that are held and not pushing the ship past a window edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Steering {
    /// Unit vector, or zero when no key applies.
    pub direction: Vec2,
    /// Degrees, counter-clockwise on screen, 0 is facing up.
    pub facing: f32
}

/// Turns held keys into a movement direction and a facing angle. Left wins over right and
/// down wins over up; the vertical key decides the facing unless both axes move, in which
/// case the diagonal does. With no keys the previous facing is kept.
pub fn steer(keys: DirectionKeys, previous_facing: f32) -> Steering {
    let mut facing = previous_facing;

    let x = if keys.left {
        facing = 90.0;
        -1.0
    } else if keys.right {
        facing = -90.0;
        1.0
    } else {
        0.0
    };

    let y = if keys.down {
        facing = 180.0;
        1.0
    } else if keys.up {
        facing = 0.0;
        -1.0
    } else {
        0.0
    };

    let axes = vec2(x, y);
    if let Some(diagonal) = diagonal_facing(axes) {
        facing = diagonal;
    }

    Steering {
        direction: axes.normalize_or_zero(),
        facing
    }
}

pub fn diagonal_facing(direction: Vec2) -> Option<f32> {
    if direction.x == 0.0 || direction.y == 0.0 {
        return None;
    }
    let facing = match (direction.x > 0.0, direction.y > 0.0) {
        (true, false) => -45.0,
        (false, false) => 45.0,
        (true, true) => -135.0,
        (false, true) => 135.0
    };
    Some(facing)
}
