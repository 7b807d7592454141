use glam::{vec2, Vec2};
use rand::Rng;
use crate::{
    components::*,
    config::GameConfig,
    timers::{LifeSpan, ShotGate},
    Game
};

impl Game {
    pub(crate) fn spawn_new_player(ecs_world: &mut hecs::World, config: &GameConfig) -> hecs::Entity {
        ecs_world.spawn((
            Player,
            Position(vec2(config.window_width, config.window_height) / 2.0),
            Direction(Vec2::ZERO),
            Speed(config.player.speed),
            Rotation { angle: 0.0 },
            ShotGate::new(config.player.shoot_cool_down_ms)
        ))
    }

    pub(crate) fn update_asteroid_spawning(&mut self, now: u64) {
        if self.spawn_timer.poll(now) {
            self.spawn_asteroid(now);
        }
    }

    /// A new asteroid just above the top edge, heading down at a random slant.
    pub fn spawn_asteroid(&mut self, now: u64) -> hecs::Entity {
        let asteroid_config = &self.config.asteroid;
        let position = vec2(
            self.rng.gen_range(0.0..self.config.window_width),
            asteroid_config.spawn_y
        );
        let direction = vec2(
            asteroid_config.direction_x.sample(&mut self.rng),
            asteroid_config.direction_y.sample(&mut self.rng)
        );
        let speed = asteroid_config.speed.sample(&mut self.rng);
        let rotation_speed = asteroid_config.rotation_speed.sample(&mut self.rng);
        self.spawn_asteroid_with(position, direction, speed, rotation_speed, now)
    }

    pub fn spawn_asteroid_at(&mut self, position: Vec2, direction: Vec2, speed: f32, now: u64) -> hecs::Entity {
        self.spawn_asteroid_with(position, direction, speed, 0.0, now)
    }

    fn spawn_asteroid_with(
        &mut self,
        position: Vec2,
        direction: Vec2,
        speed: f32,
        rotation_speed: f32,
        now: u64
    ) -> hecs::Entity {
        self.ecs_world.spawn((
            Asteroid,
            Position(position),
            Direction(direction),
            Speed(speed),
            Rotation { angle: 0.0 },
            RotationSpeed(rotation_speed),
            LifeSpan::new(now, self.config.asteroid.life_time_ms)
        ))
    }

    /// A bullet keeps the direction and angle it was fired with; a resting ship fires up.
    pub fn spawn_bullet(&mut self, position: Vec2, direction: Vec2, angle: f32) -> hecs::Entity {
        let direction = if direction == Vec2::ZERO { vec2(0.0, -1.0) } else { direction };
        self.ecs_world.spawn((
            Bullet,
            Position(position),
            Direction(direction),
            Speed(self.config.bullet.speed),
            Rotation { angle }
        ))
    }

    pub(crate) fn spawn_explosion(&mut self, position: Vec2, now: u64) -> hecs::Entity {
        self.ecs_world.spawn((
            Explosion {
                started_ms: now,
                frame: 0
            },
            Position(position)
        ))
    }
}
