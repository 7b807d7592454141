use crate::{
    components::*,
    config::FacingRule,
    input::{diagonal_facing, steer, DirectionKeys, Key},
    platform::{Platform, SoundEffect},
    sprites::SpriteKind,
    timers::ShotGate,
    Game
};

impl Game {
    pub(crate) fn update_player_controls<P: Platform>(&mut self, platform: &P) {
        let (width, height) = (self.config.window_width, self.config.window_height);
        let reset_facing = self.config.player.facing == FacingRule::ResetEachFrame;
        let half_size = self.sprites.base(SpriteKind::Ship).size() / 2.0;

        if let Ok((_, position, direction, rotation)) = self.ecs_world
            .query_one_mut::<(&Player, &Position, &mut Direction, &mut Rotation)>(self.player_entity) {
            let keys = DirectionKeys {
                left: platform.is_key_held(Key::Left) && position.0.x - half_size.x >= 0.0,
                right: platform.is_key_held(Key::Right) && position.0.x + half_size.x <= width,
                up: platform.is_key_held(Key::Up) && position.0.y - half_size.y >= 0.0,
                down: platform.is_key_held(Key::Down) && position.0.y + half_size.y <= height
            };
            let previous_facing = if reset_facing { 0.0 } else { rotation.angle };
            let steering = steer(keys, previous_facing);
            direction.0 = steering.direction;
            rotation.angle = steering.facing;
        }
    }

    pub(crate) fn update_player_fire<P: Platform>(&mut self, platform: &mut P, now: u64) {
        if !platform.is_key_just_pressed(Key::Fire) {
            return;
        }

        let shot = self.ecs_world
            .query_one_mut::<(&Player, &Position, &Direction, &mut Rotation, &mut ShotGate)>(self.player_entity)
            .ok()
            .and_then(|(_, position, direction, rotation, gate)| {
                if !gate.ready {
                    return None;
                }
                gate.trigger(now);
                if let Some(facing) = diagonal_facing(direction.0) {
                    rotation.angle = facing;
                }
                Some((position.0, direction.0, rotation.angle))
            });

        if let Some((position, direction, angle)) = shot {
            platform.play_sound(SoundEffect::Shot);
            self.spawn_bullet(position, direction, angle);
        }
    }
}
