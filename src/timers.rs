//! Elapsed-time gates sampled against the platform's millisecond clock.

/// Fire gate of the ship: closed right after a shot, reopened by [`ShotGate::refresh`]
/// once the cool down has elapsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShotGate {
    pub ready: bool,
    pub last_shot_ms: u64,
    pub cool_down_ms: u64
}

impl ShotGate {
    pub fn new(cool_down_ms: u64) -> Self {
        Self {
            ready: true,
            last_shot_ms: 0,
            cool_down_ms
        }
    }

    pub fn refresh(&mut self, now_ms: u64) {
        if self.ready {
            return;
        }
        if now_ms.saturating_sub(self.last_shot_ms) >= self.cool_down_ms {
            self.ready = true;
        }
    }

    pub fn trigger(&mut self, now_ms: u64) {
        self.last_shot_ms = now_ms;
        self.ready = false;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnTimer {
    pub last_spawn_ms: u64,
    pub cool_down_ms: u64
}

impl SpawnTimer {
    pub fn new(started_ms: u64, cool_down_ms: u64) -> Self {
        Self {
            last_spawn_ms: started_ms,
            cool_down_ms
        }
    }

    /// True when a spawn is due; the due spawn is recorded as happening now.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_spawn_ms) >= self.cool_down_ms {
            self.last_spawn_ms = now_ms;
            true
        } else {
            false
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LifeSpan {
    pub born_ms: u64,
    pub life_time_ms: u64
}

impl LifeSpan {
    pub fn new(born_ms: u64, life_time_ms: u64) -> Self {
        Self { born_ms, life_time_ms }
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.born_ms) >= self.life_time_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shot_gate_reopens_after_cool_down() {
        let mut gate = ShotGate::new(250);
        assert!(gate.ready);
        gate.trigger(1000);
        assert!(!gate.ready);

        gate.refresh(1249);
        assert!(!gate.ready);
        gate.refresh(1250);
        assert!(gate.ready);
    }

    #[test]
    fn shot_gate_refresh_keeps_an_open_gate_open() {
        let mut gate = ShotGate::new(250);
        gate.refresh(0);
        assert!(gate.ready);
        assert_eq!(gate.last_shot_ms, 0);
    }

    #[test]
    fn spawn_timer_respects_cool_down() {
        let mut timer = SpawnTimer::new(0, 400);
        assert!(!timer.poll(399));
        assert!(timer.poll(400));
        assert!(!timer.poll(700));
        assert!(timer.poll(800));
    }

    #[test]
    fn zero_cool_down_spawns_every_poll() {
        let mut timer = SpawnTimer::new(100, 0);
        assert!(timer.poll(100));
        assert!(timer.poll(100));
    }

    #[test]
    fn life_span_expires_at_not_before_its_end() {
        let span = LifeSpan::new(500, 3000);
        assert!(!span.is_expired(500));
        assert!(!span.is_expired(3499));
        assert!(span.is_expired(3500));
        assert!(span.is_expired(10_000));
    }
}
