use glam::Vec2;

use crate::map::Aabb;

/// Which way the character under the paddle is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// Paddle component - the player's bar
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32, // centre x
    pub y: f32, // centre y, fixed
    pub width: f32,
    pub height: f32,
    pub facing: Facing,
    pub boosting: bool,
    pub boost_started: f32, // sim time the current boost began
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width,
            height,
            facing: Facing::default(),
            boosting: false,
            boost_started: 0.0,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_center_size(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = left, 0 = stop, 1 = right
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: [u8; 3]) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// New ball at `pos` heading upward at a random angle between -135° and -45°
    pub fn launch(
        pos: Vec2,
        speed: f32,
        radius: f32,
        color: [u8; 3],
        rng: &mut crate::GameRng,
    ) -> Self {
        use std::f32::consts::FRAC_PI_4;
        let angle = rng.gen_range(-3.0 * FRAC_PI_4, -FRAC_PI_4);
        let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
        Self::new(pos, vel, radius, color)
    }

    /// Bounding square used for every ball collision
    pub fn rect(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }
}

/// Brick in the fixed grid
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub row: usize,
    pub col: usize,
    pub rect: Aabb,
    pub color: [u8; 3],
    pub alive: bool,
}

impl Block {
    pub fn new(row: usize, col: usize, rect: Aabb, color: [u8; 3]) -> Self {
        Self {
            row,
            col,
            rect,
            color,
            alive: true,
        }
    }
}

/// Falling apple that restores one hp when caught
#[derive(Debug, Clone, Copy)]
pub struct Fruit {
    pub pos: Vec2,
    pub radius: f32,
}

impl Fruit {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }
}
