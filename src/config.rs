use std::path::{Path, PathBuf};
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::constants::*;
use crate::error::ConfigError;

/// A closed-open range of values sampled uniformly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.min < self.max {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    fn scaled(self, factor: f32) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl From<(f32, f32)> for Span {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

/// How a bullet hitting an asteroid is rewarded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Every hit is worth `floor(10 * U(0, 1) + U(0, 10))` points.
    Randomized,
    /// Hits are counted; the score is `kills * (level + 10)`.
    LevelMultiplier
}

/// What happens when an asteroid touches the ship.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerHitRule {
    ResetRound,
    GameOver
}

/// What the ship faces while no direction key is held.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingRule {
    KeepLast,
    ResetEachFrame
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub speed: f32,
    pub shoot_cool_down_ms: u64,
    pub facing: FacingRule
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            shoot_cool_down_ms: PLAYER_SHOOT_COOL_DOWN_MS,
            facing: FacingRule::KeepLast
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    pub speed: Span,
    pub rotation_speed: Span,
    pub direction_x: Span,
    pub direction_y: Span,
    pub life_time_ms: u64,
    pub spawn_y: f32
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            speed: ASTEROID_SPEED.into(),
            rotation_speed: ASTEROID_ROTATION_SPEED.into(),
            direction_x: ASTEROID_DIRECTION_X.into(),
            direction_y: ASTEROID_DIRECTION_Y.into(),
            life_time_ms: ASTEROID_LIFE_TIME_MS,
            spawn_y: ASTEROID_SPAWN_Y
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub speed: f32
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self { speed: BULLET_SPEED }
    }
}

/// Wall-clock schedule that shortens the spawn cool down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Seconds since the start of a round at which the next level begins.
    pub level_time_stamps_secs: Vec<u64>,
    pub cool_down_step_ms: u64
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            level_time_stamps_secs: LEVEL_TIME_STAMPS_SECS.to_vec(),
            cool_down_step_ms: LEVEL_COOL_DOWN_STEP_MS
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub cool_down_ms: u64,
    pub difficulty: Option<DifficultyConfig>
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            cool_down_ms: CLASSIC_SPAWN_COOL_DOWN_MS,
            difficulty: None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    pub frame_count: usize,
    pub frame_duration_ms: u64
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            frame_count: EXPLOSION_FRAME_COUNT,
            frame_duration_ms: EXPLOSION_FRAME_DURATION_MS
        }
    }
}

/// Everything a [`crate::Game`] needs to know up front. Never mutated once a game is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub title: String,
    pub high_score_path: PathBuf,
    pub player: PlayerConfig,
    pub asteroid: AsteroidConfig,
    pub bullet: BulletConfig,
    pub spawner: SpawnerConfig,
    pub explosion: ExplosionConfig,
    pub scoring: ScoringRule,
    pub on_player_hit: PlayerHitRule
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameConfig {
    /// Randomized scoring, the round restarts when the ship is hit, high score is kept.
    pub fn classic() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            high_score_path: PathBuf::from(HIGH_SCORE_PATH),
            player: PlayerConfig::default(),
            asteroid: AsteroidConfig::default(),
            bullet: BulletConfig::default(),
            spawner: SpawnerConfig::default(),
            explosion: ExplosionConfig::default(),
            scoring: ScoringRule::Randomized,
            on_player_hit: PlayerHitRule::ResetRound
        }
    }

    /// Escalating spawn rate, level-weighted score, a single hit ends the game.
    pub fn rush() -> Self {
        let classic = Self::classic();
        Self {
            player: PlayerConfig {
                facing: FacingRule::ResetEachFrame,
                ..classic.player
            },
            asteroid: AsteroidConfig {
                speed: RUSH_ASTEROID_SPEED.into(),
                ..classic.asteroid
            },
            spawner: SpawnerConfig {
                cool_down_ms: RUSH_SPAWN_COOL_DOWN_MS,
                difficulty: Some(DifficultyConfig::default())
            },
            scoring: ScoringRule::LevelMultiplier,
            on_player_hit: PlayerHitRule::GameOver,
            ..classic
        }
    }

    /// Rescales the window and every distance-based tunable to a new window size.
    /// Speeds follow the height ratio so vertical travel times stay the same.
    pub fn fitted_to(self, width: f32, height: f32) -> Self {
        let factor = height / self.window_height;
        Self {
            window_width: width,
            window_height: height,
            player: PlayerConfig {
                speed: self.player.speed * factor,
                ..self.player
            },
            asteroid: AsteroidConfig {
                speed: self.asteroid.speed.scaled(factor),
                spawn_y: self.asteroid.spawn_y * factor,
                ..self.asteroid
            },
            bullet: BulletConfig {
                speed: self.bullet.speed * factor
            },
            ..self
        }
    }

    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_ron_str(&source)
    }

    /// Loads the file when it exists; a missing file means the classic preset.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using the classic preset", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(message.to_string()))
        };

        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return invalid("window dimensions must be positive");
        }
        if !(self.player.speed >= 0.0 && self.bullet.speed >= 0.0) {
            return invalid("speeds must not be negative");
        }
        let spans = [
            ("asteroid.speed", &self.asteroid.speed),
            ("asteroid.rotation_speed", &self.asteroid.rotation_speed),
            ("asteroid.direction_x", &self.asteroid.direction_x),
            ("asteroid.direction_y", &self.asteroid.direction_y)
        ];
        for (name, span) in spans {
            if !span.is_valid() {
                return Err(ConfigError::Invalid(format!("{} has min above max", name)));
            }
        }
        if self.explosion.frame_count == 0 || self.explosion.frame_duration_ms == 0 {
            return invalid("explosion needs at least one frame of nonzero duration");
        }
        if let Some(difficulty) = &self.spawner.difficulty {
            let sorted = difficulty.level_time_stamps_secs
                .windows(2)
                .all(|pair| pair[0] <= pair[1]);
            if !sorted {
                return invalid("difficulty time stamps must be ascending");
            }
        }
        Ok(())
    }
}
