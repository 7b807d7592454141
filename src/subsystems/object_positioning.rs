use crate::{
    components::*,
    sprites::SpriteKind,
    Game
};

impl Game {
    pub(crate) fn update_object_positions(&mut self, dt: f32) {
        for (_, (position, direction, speed)) in self.ecs_world
            .query_mut::<(&mut Position, &Direction, &Speed)>() {
            position.0 += direction.0 * speed.0 * dt;
        }

        for (_, (rotation, rotation_speed)) in self.ecs_world
            .query_mut::<(&mut Rotation, &RotationSpeed)>() {
            rotation.angle += rotation_speed.0 * dt;
        }
    }

    /// Bullets die once the top-left corner of their unrotated sprite leaves the window,
    /// whatever way they are turned.
    pub(crate) fn update_bullet_bounds(&mut self) {
        let (width, height) = (self.config.window_width, self.config.window_height);
        let half_size = self.sprites.base(SpriteKind::Bullet).size() / 2.0;

        let bump_allocator = std::mem::take(&mut self.bump_allocator);
        {
            let mut gone_bullets = bumpalo::collections::Vec::new_in(&bump_allocator);
            for (entity, (_, position)) in self.ecs_world
                .query::<(&Bullet, &Position)>()
                .iter() {
                let corner = position.0 - half_size;
                let inside = (0.0..=width).contains(&corner.x) && (0.0..=height).contains(&corner.y);
                if !inside {
                    gone_bullets.push(entity);
                }
            }
            for entity in gone_bullets.drain(..) {
                self.mark_dead(entity);
            }
        }
        self.bump_allocator = bump_allocator;
    }
}
