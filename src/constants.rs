pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;
pub const WINDOW_TITLE: &str = "Rock Blaster";
pub const HIGH_SCORE_PATH: &str = "high_score.json";

pub const PLAYER_SPEED: f32 = 350.0;
pub const PLAYER_SHOOT_COOL_DOWN_MS: u64 = 250;
pub const BULLET_SPEED: f32 = 500.0;

pub const ASTEROID_SPEED: (f32, f32) = (450.0, 700.0);
pub const RUSH_ASTEROID_SPEED: (f32, f32) = (300.0, 600.0);
pub const ASTEROID_ROTATION_SPEED: (f32, f32) = (40.0, 80.0);
pub const ASTEROID_DIRECTION_X: (f32, f32) = (-0.5, 0.5);
pub const ASTEROID_DIRECTION_Y: (f32, f32) = (0.5, 1.0);
pub const ASTEROID_LIFE_TIME_MS: u64 = 3000;
pub const ASTEROID_SPAWN_Y: f32 = -10.0;

pub const CLASSIC_SPAWN_COOL_DOWN_MS: u64 = 400;
pub const RUSH_SPAWN_COOL_DOWN_MS: u64 = 200;
pub const LEVEL_TIME_STAMPS_SECS: &[u64] = &[8, 14, 18, 22];
pub const LEVEL_COOL_DOWN_STEP_MS: u64 = 50;

pub const EXPLOSION_FRAME_COUNT: usize = 7;
pub const EXPLOSION_FRAME_DURATION_MS: u64 = 50;

pub const SCORE_TEXT_BOTTOM_OFFSET: f32 = 50.0;
pub const HIGH_SCORE_TEXT_TOP_OFFSET: f32 = 30.0;

// pixels with a higher alpha are solid for collision purposes
pub const MASK_ALPHA_THRESHOLD: u8 = 127;

// outlines are authored for a 320x240 screen and scaled up to the window
pub const OUTLINE_SCALE: f32 = 3.0;

pub const SHIP_OUTLINE: &[(f32, f32)] = &[
    (-8.0, 9.0),
    (0.0, -9.0),
    (8.0, 9.0),
    (0.0, 5.0)
];

pub const ASTEROID_OUTLINE: &[(f32, f32)] = &[
    (6.0, -17.0),
    (9.0, -5.0),
    (18.0, -5.0),
    (21.0, 8.0),
    (7.0, 17.0),
    (0.0, 11.0),
    (-9.0, 17.0),
    (-19.0, 7.0),
    (-9.0, -4.0),
    (-13.0, -13.0)
];

pub const BULLET_OUTLINE: &[(f32, f32)] = &[
    (-1.0, -3.0),
    (1.0, -3.0),
    (1.0, 3.0),
    (-1.0, 3.0)
];
