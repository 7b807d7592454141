use crate::Game;

impl Game {
    pub(crate) fn update_difficulty(&mut self, now: u64) {
        if let Some(difficulty) = &mut self.difficulty {
            if difficulty.update(now, &mut self.spawn_timer) {
                log::info!(
                    "level {} reached, spawn cool down {} ms",
                    difficulty.level(),
                    self.spawn_timer.cool_down_ms
                );
            }
        }
    }
}
