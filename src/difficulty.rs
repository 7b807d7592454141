use crate::config::DifficultyConfig;
use crate::timers::SpawnTimer;

/// Shortens the spawn cool down as the round goes on. Past the last time stamp asteroids
/// come every frame.
#[derive(Clone, Debug)]
pub struct Difficulty {
    level_time_stamps_secs: Vec<u64>,
    cool_down_step_ms: u64,
    level: usize,
    started_ms: u64
}

impl Difficulty {
    pub fn new(config: &DifficultyConfig, started_ms: u64) -> Self {
        Self {
            level_time_stamps_secs: config.level_time_stamps_secs.clone(),
            cool_down_step_ms: config.cool_down_step_ms,
            level: 0,
            started_ms
        }
    }

    pub fn level(&self) -> u32 {
        self.level as u32
    }

    pub fn restart(&mut self, now_ms: u64) {
        self.level = 0;
        self.started_ms = now_ms;
    }

    /// Returns true when a new level began on this call.
    pub fn update(&mut self, now_ms: u64, spawn_timer: &mut SpawnTimer) -> bool {
        let next_level_at = match self.level_time_stamps_secs.get(self.level) {
            Some(&secs) => secs,
            None => {
                spawn_timer.cool_down_ms = 0;
                return false;
            }
        };
        let elapsed_secs = now_ms.saturating_sub(self.started_ms) / 1000;
        if elapsed_secs < next_level_at {
            return false;
        }
        self.level += 1;
        spawn_timer.cool_down_ms = spawn_timer.cool_down_ms.saturating_sub(self.cool_down_step_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> DifficultyConfig {
        DifficultyConfig {
            level_time_stamps_secs: vec![8, 14, 18, 22],
            cool_down_step_ms: 50
        }
    }

    #[test]
    fn levels_follow_the_schedule() {
        let mut difficulty = Difficulty::new(&schedule(), 1000);
        let mut timer = SpawnTimer::new(1000, 200);

        assert!(!difficulty.update(8999, &mut timer));
        assert_eq!(difficulty.level(), 0);
        assert_eq!(timer.cool_down_ms, 200);

        assert!(difficulty.update(9000, &mut timer));
        assert_eq!(difficulty.level(), 1);
        assert_eq!(timer.cool_down_ms, 150);

        assert!(!difficulty.update(9500, &mut timer));
        assert!(difficulty.update(15_000, &mut timer));
        assert!(difficulty.update(19_000, &mut timer));
        assert!(difficulty.update(23_000, &mut timer));
        assert_eq!(difficulty.level(), 4);
        assert_eq!(timer.cool_down_ms, 0);
    }

    #[test]
    fn one_level_per_update_even_when_late() {
        let mut difficulty = Difficulty::new(&schedule(), 0);
        let mut timer = SpawnTimer::new(0, 200);
        assert!(difficulty.update(60_000, &mut timer));
        assert_eq!(difficulty.level(), 1);
        assert!(difficulty.update(60_000, &mut timer));
        assert_eq!(difficulty.level(), 2);
    }

    #[test]
    fn past_the_schedule_cool_down_is_zero() {
        let mut difficulty = Difficulty::new(&schedule(), 0);
        let mut timer = SpawnTimer::new(0, 400);
        for _ in 0..4 {
            difficulty.update(30_000, &mut timer);
        }
        assert_eq!(timer.cool_down_ms, 200);
        assert!(!difficulty.update(30_000, &mut timer));
        assert_eq!(timer.cool_down_ms, 0);
    }

    #[test]
    fn restart_goes_back_to_level_zero() {
        let mut difficulty = Difficulty::new(&schedule(), 0);
        let mut timer = SpawnTimer::new(0, 200);
        difficulty.update(10_000, &mut timer);
        difficulty.restart(10_000);
        assert_eq!(difficulty.level(), 0);
        assert!(!difficulty.update(17_999, &mut timer));
        assert!(difficulty.update(18_000, &mut timer));
    }
}
