use crate::{
    timers::ShotGate,
    Game
};

impl Game {
    pub(crate) fn refresh_shot_gates(&mut self, now: u64) {
        for (_, gate) in self.ecs_world.query_mut::<&mut ShotGate>() {
            gate.refresh(now);
        }
    }
}
