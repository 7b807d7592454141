use std::rc::Rc;
use glam::{vec2, IVec2};
use crate::{
    components::*,
    mask::CollisionMask,
    platform::{Platform, SoundEffect},
    sprites::SpriteKind,
    Game
};

struct Placed {
    entity: hecs::Entity,
    mask: Rc<CollisionMask>,
    top_left: IVec2
}

impl Placed {
    fn overlaps(&self, other: &Placed) -> bool {
        self.mask.overlaps(&other.mask, other.top_left - self.top_left)
    }
}

impl Game {
    /// Resolves bullet hits, then tests the ship. Returns whether the ship was hit.
    pub(crate) fn update_collisions<P: Platform>(&mut self, platform: &mut P, now: u64) -> bool {
        let bump_allocator = std::mem::take(&mut self.bump_allocator);
        let player_hit = {
            let mut asteroids = bumpalo::collections::Vec::new_in(&bump_allocator);
            let mut bullets = bumpalo::collections::Vec::new_in(&bump_allocator);

            for (entity, (_, position, rotation, dead)) in self.ecs_world
                .query::<(&Asteroid, &Position, &Rotation, Option<&Dead>)>()
                .iter() {
                if dead.is_some() {
                    continue;
                }
                let mask = self.sprites.rotated(SpriteKind::Asteroid, rotation.angle);
                let top_left = mask.top_left(position.0);
                asteroids.push((Placed { entity, mask, top_left }, false));
            }

            let bullet_half_height = self.sprites.base(SpriteKind::Bullet).size().y / 2.0;
            for (entity, (_, position, rotation, dead)) in self.ecs_world
                .query::<(&Bullet, &Position, &Rotation, Option<&Dead>)>()
                .iter() {
                if dead.is_some() {
                    continue;
                }
                let mask = self.sprites.rotated(SpriteKind::Bullet, rotation.angle);
                let top_left = mask.top_left(position.0);
                // explosions start at the top middle of the upright sprite
                let tip = vec2(position.0.x, (position.0.y - bullet_half_height).floor());
                bullets.push((Placed { entity, mask, top_left }, tip));
            }

            let mut hits = bumpalo::collections::Vec::new_in(&bump_allocator);
            for (bullet, tip) in bullets.iter() {
                let mut found_hits = false;
                for (asteroid, already_hit) in asteroids.iter_mut() {
                    if !*already_hit && bullet.overlaps(asteroid) {
                        *already_hit = true;
                        found_hits = true;
                    }
                }
                if found_hits {
                    hits.push((bullet.entity, *tip));
                }
            }

            let player = self.ecs_world
                .query_one_mut::<(&Player, &Position, &Rotation)>(self.player_entity)
                .map(|(_, position, rotation)| (position.0, rotation.angle));
            let player_hit = match player {
                Ok((position, facing)) => {
                    let mask = self.sprites.rotated(SpriteKind::Ship, facing);
                    let ship = Placed {
                        entity: self.player_entity,
                        top_left: mask.top_left(position),
                        mask
                    };
                    asteroids
                        .iter()
                        .any(|(asteroid, already_hit)| !*already_hit && ship.overlaps(asteroid))
                },
                Err(_) => false
            };

            for (asteroid, already_hit) in asteroids.iter() {
                if *already_hit {
                    self.mark_dead(asteroid.entity);
                }
            }
            for (bullet_entity, explosion_position) in hits.drain(..) {
                self.mark_dead(bullet_entity);
                self.score_board.register_hit(&mut self.rng);
                self.spawn_explosion(explosion_position, now);
                platform.play_sound(SoundEffect::Explosion);
                log::trace!("hit at {:?}, kills {}", explosion_position, self.score_board.kills());
            }

            player_hit
        };
        self.bump_allocator = bump_allocator;
        player_hit
    }

    pub(crate) fn kill_all_projectiles_and_asteroids(&mut self) {
        let bump_allocator = std::mem::take(&mut self.bump_allocator);
        {
            let mut doomed = bumpalo::collections::Vec::new_in(&bump_allocator);
            for (entity, (asteroid, bullet)) in self.ecs_world
                .query::<(Option<&Asteroid>, Option<&Bullet>)>()
                .iter() {
                if asteroid.is_some() || bullet.is_some() {
                    doomed.push(entity);
                }
            }
            for entity in doomed.drain(..) {
                self.mark_dead(entity);
            }
        }
        self.bump_allocator = bump_allocator;
    }
}
