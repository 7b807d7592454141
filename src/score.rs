use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::config::ScoringRule;
use crate::error::PersistError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreRecord {
    #[serde(rename = "highScore")]
    high_score: u32
}

/// The `{"highScore": N}` file that survives between runs.
#[derive(Clone, Debug)]
pub struct HighScoreFile {
    path: PathBuf
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: anything unreadable counts as no high score yet.
    pub fn load(&self) -> u32 {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                log::info!("no high score recorded at {} yet", self.path.display());
                return 0;
            },
            Err(error) => {
                log::warn!("cannot read high score from {}: {}", self.path.display(), error);
                return 0;
            }
        };
        match serde_json::from_str::<HighScoreRecord>(&text) {
            Ok(record) => record.high_score,
            Err(error) => {
                log::warn!("ignoring malformed high score file {}: {}", self.path.display(), error);
                0
            }
        }
    }

    pub fn save(&self, high_score: u32) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string(&HighScoreRecord { high_score })?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// `floor(10 * U(0, 1) + U(0, 10))`
pub fn randomized_points(rng: &mut impl Rng) -> u32 {
    (10.0 * rng.gen::<f32>() + rng.gen_range(0.0f32..10.0)).floor() as u32
}

pub fn format_score(score: u32) -> String {
    if score < 10 {
        format!("Score: 0{}", score)
    } else {
        format!("Score: {}", score)
    }
}

#[derive(Clone, Debug)]
pub struct ScoreBoard {
    rule: ScoringRule,
    points: u32,
    kills: u32,
    high_score: u32
}

impl ScoreBoard {
    pub fn new(rule: ScoringRule, high_score: u32) -> Self {
        Self {
            rule,
            points: 0,
            kills: 0,
            high_score
        }
    }

    pub fn register_hit(&mut self, rng: &mut impl Rng) {
        self.kills += 1;
        if self.rule == ScoringRule::Randomized {
            self.points += randomized_points(rng);
        }
    }

    pub fn score(&self, level: u32) -> u32 {
        match self.rule {
            ScoringRule::Randomized => self.points,
            ScoringRule::LevelMultiplier => self.kills * (level + 10)
        }
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// A better score becomes the high score and is written out; the session score stays.
    /// Returns the new high score if there is one.
    pub fn record_high_score(&mut self, level: u32, store: &HighScoreFile) -> Result<Option<u32>, PersistError> {
        let final_score = self.score(level);
        if final_score <= self.high_score {
            return Ok(None);
        }
        self.high_score = final_score;
        store.save(final_score)?;
        Ok(Some(final_score))
    }

    pub fn reset_session(&mut self) {
        self.points = 0;
        self.kills = 0;
    }

    /// Records the high score, then the session score starts over, even if saving failed.
    pub fn finish_round(&mut self, level: u32, store: &HighScoreFile) -> Result<Option<u32>, PersistError> {
        let recorded = self.record_high_score(level, store);
        self.reset_session();
        recorded
    }
}
