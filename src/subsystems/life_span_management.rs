use crate::{
    components::*,
    timers::LifeSpan,
    Game
};

impl Game {
    pub(crate) fn update_life_spans(&mut self, now: u64) {
        let bump_allocator = std::mem::take(&mut self.bump_allocator);
        {
            let mut expired_entities = bumpalo::collections::Vec::new_in(&bump_allocator);
            for (entity, life_span) in self.ecs_world.query::<&LifeSpan>().iter() {
                if life_span.is_expired(now) {
                    expired_entities.push(entity);
                }
            }
            for entity in expired_entities.drain(..) {
                self.mark_dead(entity);
            }
        }
        self.bump_allocator = bump_allocator;
    }

    pub(crate) fn update_explosions(&mut self, now: u64) {
        let frame_duration_ms = self.config.explosion.frame_duration_ms;
        let frame_count = self.config.explosion.frame_count;

        let bump_allocator = std::mem::take(&mut self.bump_allocator);
        {
            let mut finished_explosions = bumpalo::collections::Vec::new_in(&bump_allocator);
            for (entity, explosion) in self.ecs_world.query_mut::<&mut Explosion>() {
                explosion.frame = (now.saturating_sub(explosion.started_ms) / frame_duration_ms) as usize;
                if explosion.frame >= frame_count {
                    finished_explosions.push(entity);
                }
            }
            for entity in finished_explosions.drain(..) {
                self.mark_dead(entity);
            }
        }
        self.bump_allocator = bump_allocator;
    }

    /// Despawns everything marked [`Dead`] this tick.
    pub(crate) fn sweep_dead(&mut self) {
        let mut bump_allocator = std::mem::take(&mut self.bump_allocator);
        {
            let mut dead_entities = bumpalo::collections::Vec::new_in(&bump_allocator);
            for (entity, _) in self.ecs_world.query_mut::<&Dead>() {
                dead_entities.push(entity);
            }
            for entity in dead_entities.drain(..) {
                if let Err(error) = self.ecs_world.despawn(entity) {
                    log::trace!("{:?} already gone: {}", entity, error);
                }
            }
        }
        bump_allocator.reset();
        self.bump_allocator = bump_allocator;
    }
}
