pub const BACKGROUND_COLOR: u8 = 0;
pub const STAR_COLORS: [u8; 3] = [1, 2, 3];
pub const SHIP_COLOR: u8 = 4;
pub const ASTEROID_COLOR: u8 = 5;
pub const BULLET_COLOR: u8 = 6;
pub const TEXT_COLOR: u8 = 7;
pub const FRAME_COLOR: u8 = 8;
/// Hot to cold, indexed by explosion frame.
pub const EXPLOSION_COLORS: [u8; 4] = [9, 10, 11, 12];

pub const PALETTE: [[u8; 3]; 13] = [
    [0x08, 0x08, 0x18],
    [0x40, 0x40, 0x58],
    [0x80, 0x80, 0x98],
    [0xD0, 0xD0, 0xE8],
    [0x50, 0xE0, 0x70],
    [0xA0, 0x78, 0x50],
    [0xFF, 0xF0, 0x60],
    [0xFF, 0xFF, 0xFF],
    [0x30, 0x30, 0x60],
    [0xFF, 0xFF, 0xA0],
    [0xFF, 0xC0, 0x40],
    [0xE0, 0x60, 0x20],
    [0x80, 0x20, 0x10]
];
