/// Game tuning parameters for Breakout
///
/// Screen space is in pixels, origin top-left, +y down.
/// Speeds are pixels per second.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 1100.0;
    pub const SCREEN_HEIGHT: f32 = 650.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0; // distance of paddle bottom from screen bottom
    pub const PADDLE_SPEED: f32 = 720.0; // 12 px per frame at 60 Hz
    pub const BOOST_MULTIPLIER: f32 = 2.0;
    pub const BOOST_DURATION: f32 = 3.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 600.0; // 10 px per frame at 60 Hz
    pub const BALL_SPAWN_GAP: f32 = 10.0; // spawn height above the paddle top
    pub const BALL_COLOR: [u8; 3] = [255, 100, 100];
    pub const BALL_PENETRATE_COLOR: [u8; 3] = [255, 215, 0];

    // Blocks
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_COLS: usize = 10;
    pub const BLOCK_WIDTH: f32 = 100.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    pub const BLOCK_GAP: f32 = 5.0;
    pub const BLOCK_TOP: f32 = 80.0;
    pub const BLOCK_COLORS: [[u8; 3]; 5] = [
        [230, 70, 70],
        [240, 150, 60],
        [240, 220, 80],
        [90, 200, 110],
        [80, 140, 230],
    ];

    // Fruit
    pub const FRUIT_RADIUS: f32 = 30.0;
    pub const FRUIT_FALL_SPEED: f32 = 120.0; // 2 px per frame at 60 Hz
    pub const FRUIT_START_Y: f32 = -500.0;
    pub const FRUIT_CATCH_RESET_Y: f32 = -200.0;
    pub const FRUIT_MISS_RESET_Y: f32 = -400.0;
    pub const FRUIT_RESET_Y: f32 = 700.0; // fruit below this line is recycled

    // HUD
    pub const HP_MAX: u8 = 3;
    pub const MP_MAX: u8 = 5;
    pub const BOOST_COST: u8 = 1;
    pub const PENETRATE_COST: u8 = 5;

    // Timers
    pub const RESPAWN_DELAY: f32 = 0.5;
    pub const END_SCREEN_DURATION: f32 = 3.0;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1;
}
