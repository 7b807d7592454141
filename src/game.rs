use glam::{vec2, Vec2};
use rand::{rngs::StdRng, SeedableRng};
use crate::{
    components::*,
    config::{GameConfig, PlayerHitRule},
    difficulty::Difficulty,
    error::ConfigError,
    input::Key,
    platform::{FrameClock, Platform, SoundEffect},
    score::{HighScoreFile, ScoreBoard},
    sprites::SpriteSet,
    timers::SpawnTimer
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// Terminal: no further ticks do anything.
    Stopped
}

pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) ecs_world: hecs::World,
    pub(crate) player_entity: hecs::Entity,
    pub(crate) sprites: SpriteSet,
    pub(crate) score_board: ScoreBoard,
    pub(crate) high_score_file: HighScoreFile,
    pub(crate) spawn_timer: SpawnTimer,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) rng: StdRng,
    pub(crate) bump_allocator: bumpalo::Bump,
    state: GameState,
    stop_after_frame: bool
}

impl Game {
    pub fn new(config: GameConfig, sprites: SpriteSet) -> Result<Self, ConfigError> {
        Self::with_rng(config, sprites, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, sprites: SpriteSet, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let high_score_file = HighScoreFile::new(config.high_score_path.clone());
        let score_board = ScoreBoard::new(config.scoring, high_score_file.load());

        let mut ecs_world = hecs::World::new();
        let player_entity = Self::spawn_new_player(&mut ecs_world, &config);

        Ok(Self {
            spawn_timer: SpawnTimer::new(0, config.spawner.cool_down_ms),
            difficulty: config.spawner.difficulty
                .as_ref()
                .map(|difficulty| Difficulty::new(difficulty, 0)),
            config,
            ecs_world,
            player_entity,
            sprites,
            score_board,
            high_score_file,
            rng,
            bump_allocator: bumpalo::Bump::new(),
            state: GameState::Running,
            stop_after_frame: false
        })
    }

    /// Starts the clocks of the spawner and the difficulty schedule, and the music.
    pub fn start(&mut self, platform: &mut impl Platform) {
        let now = platform.ticks();
        self.restart_timers(now);
        platform.play_sound(SoundEffect::Music);
        log::info!(
            "{} started, high score {}",
            self.config.title,
            self.score_board.high_score()
        );
    }

    /// Drives ticks off the platform's frame clock until the game stops.
    pub fn run<P: Platform + FrameClock>(&mut self, platform: &mut P) {
        self.start(platform);
        while self.state == GameState::Running {
            let dt = platform.next_frame();
            self.tick(platform, dt);
        }
        log::info!("shut down with score {}", self.score());
    }

    pub fn tick<P: Platform>(&mut self, platform: &mut P, dt: f32) -> GameState {
        if self.state == GameState::Stopped {
            return self.state;
        }

        if platform.quit_requested()
            || platform.is_key_just_pressed(Key::Quit)
            || platform.is_key_just_pressed(Key::Escape) {
            self.stop();
            return self.state;
        }

        let now = platform.ticks();

        self.update_player_fire(platform, now);
        self.update_asteroid_spawning(now);
        if self.update_collisions(platform, now) {
            self.on_player_hit(now);
        }
        self.update_difficulty(now);

        self.refresh_shot_gates(now);
        self.update_player_controls(platform);
        self.update_object_positions(dt);
        self.update_bullet_bounds();
        self.update_life_spans(now);
        self.update_explosions(now);
        self.sweep_dead();

        self.render(platform);

        if self.stop_after_frame {
            self.stop();
        }
        self.state
    }

    pub fn stop(&mut self) {
        if self.state == GameState::Running {
            log::info!("stopping");
        }
        self.state = GameState::Stopped;
    }

    fn on_player_hit(&mut self, now: u64) {
        match self.config.on_player_hit {
            PlayerHitRule::ResetRound => self.reset_round(now),
            PlayerHitRule::GameOver => {
                log::info!("game over with score {}", self.score());
                self.record_high_score();
                self.stop_after_frame = true;
            }
        }
    }

    /// Records the round, clears asteroids and bullets and puts the ship back in the middle.
    pub fn reset_round(&mut self, now: u64) {
        self.record_high_score();
        self.score_board.reset_session();
        self.kill_all_projectiles_and_asteroids();
        self.recenter_player();
        self.restart_timers(now);
    }

    fn record_high_score(&mut self) {
        let level = self.level();
        match self.score_board.record_high_score(level, &self.high_score_file) {
            Ok(Some(high_score)) => log::info!("new high score {}", high_score),
            Ok(None) => log::info!("round over, high score stays {}", self.score_board.high_score()),
            Err(error) => log::error!(
                "could not save high score to {}: {}",
                self.high_score_file.path().display(),
                error
            )
        }
    }

    fn recenter_player(&mut self) {
        let center = self.window_center();
        if let Ok((position, direction, rotation)) = self.ecs_world
            .query_one_mut::<(&mut Position, &mut Direction, &mut Rotation)>(self.player_entity) {
            position.0 = center;
            direction.0 = Vec2::ZERO;
            rotation.angle = 0.0;
        }
    }

    fn restart_timers(&mut self, now: u64) {
        self.spawn_timer = SpawnTimer::new(now, self.config.spawner.cool_down_ms);
        if let Some(difficulty) = &mut self.difficulty {
            difficulty.restart(now);
        }
    }

    pub(crate) fn mark_dead(&mut self, entity: hecs::Entity) {
        if let Err(error) = self.ecs_world.insert_one(entity, Dead) {
            log::trace!("cannot mark {:?} dead: {}", entity, error);
        }
    }

    pub(crate) fn window_center(&self) -> Vec2 {
        vec2(self.config.window_width, self.config.window_height) / 2.0
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    pub fn score(&self) -> u32 {
        self.score_board.score(self.level())
    }

    pub fn high_score(&self) -> u32 {
        self.score_board.high_score()
    }

    pub fn kills(&self) -> u32 {
        self.score_board.kills()
    }

    pub fn level(&self) -> u32 {
        self.difficulty.as_ref().map_or(0, |difficulty| difficulty.level())
    }

    pub fn spawn_cool_down_ms(&self) -> u64 {
        self.spawn_timer.cool_down_ms
    }

    pub fn player_position(&self) -> Vec2 {
        self.ecs_world
            .get::<Position>(self.player_entity)
            .map(|position| position.0)
            .unwrap_or_else(|_| self.window_center())
    }

    pub fn player_facing(&self) -> f32 {
        self.ecs_world
            .get::<Rotation>(self.player_entity)
            .map(|rotation| rotation.angle)
            .unwrap_or(0.0)
    }

    pub fn asteroid_count(&self) -> usize {
        self.ecs_world.query::<&Asteroid>().iter().count()
    }

    pub fn bullet_count(&self) -> usize {
        self.ecs_world.query::<&Bullet>().iter().count()
    }

    pub fn explosion_count(&self) -> usize {
        self.ecs_world.query::<&Explosion>().iter().count()
    }
}
