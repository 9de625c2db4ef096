use glam::Vec2;

use crate::{Config, GameRng, Params};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// One cell of the brick grid
#[derive(Debug, Clone, Copy)]
pub struct BlockSlot {
    pub row: usize,
    pub col: usize,
    pub rect: Aabb,
    pub color: [u8; 3],
}

/// Playfield geometry: screen bounds and the fixed brick layout
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    pub slots: Vec<BlockSlot>,
}

impl GameMap {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        let grid_width = config.grid_width();
        let left = (config.screen_width - grid_width) / 2.0;

        let mut slots = Vec::with_capacity(config.block_rows * config.block_cols);
        for row in 0..config.block_rows {
            for col in 0..config.block_cols {
                let min = Vec2::new(
                    left + col as f32 * (config.block_width + config.block_gap),
                    config.block_top + row as f32 * (config.block_height + config.block_gap),
                );
                let rect = Aabb::new(min, min + Vec2::new(config.block_width, config.block_height));
                // Rows cycle through the palette; an empty one falls back to the default
                let color = config
                    .block_colors
                    .iter()
                    .cycle()
                    .nth(row)
                    .copied()
                    .unwrap_or(Params::BLOCK_COLORS[row % Params::BLOCK_COLORS.len()]);
                slots.push(BlockSlot {
                    row,
                    col,
                    rect,
                    color,
                });
            }
        }

        Self {
            width: config.screen_width,
            height: config.screen_height,
            slots,
        }
    }

    /// Clamp a paddle centre so the whole paddle stays on screen
    pub fn clamp_x(&self, x: f32, half_width: f32) -> f32 {
        x.clamp(half_width, self.width - half_width)
    }

    /// Paddle resting position (centre) for a paddle of the given height
    pub fn paddle_spawn(&self, config: &Config) -> Vec2 {
        Vec2::new(
            self.width / 2.0,
            self.height - config.paddle_bottom_offset - config.paddle_height / 2.0,
        )
    }

    /// Ball spawn point just above the paddle top at the paddle's centre x
    pub fn ball_spawn(&self, paddle_x: f32, paddle_top: f32, config: &Config) -> Vec2 {
        Vec2::new(paddle_x, paddle_top - config.ball_spawn_gap)
    }

    /// Pick a random column for the fruit to drop from
    pub fn random_fruit_x(&self, radius: f32, rng: &mut GameRng) -> f32 {
        rng.gen_range(radius, self.width - radius)
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_edge_contact_is_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));

        let c = Aabb::new(Vec2::new(9.0, 9.0), Vec2::new(20.0, 20.0));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_grid_is_centred_and_row_major() {
        let config = Config::new();
        let map = GameMap::from_config(&config);

        assert_eq!(map.slots.len(), config.block_rows * config.block_cols);
        assert_eq!((map.slots[0].row, map.slots[0].col), (0, 0));
        assert_eq!((map.slots[1].row, map.slots[1].col), (0, 1));

        let first = map.slots.first().unwrap().rect;
        let last_in_row = map.slots[config.block_cols - 1].rect;
        let left_margin = first.min.x;
        let right_margin = map.width - last_in_row.max.x;
        assert!((left_margin - right_margin).abs() < 0.001);
    }

    #[test]
    fn test_row_colors_cycle_and_tolerate_empty_palette() {
        let mut config = Config::new();
        config.block_colors = vec![[1, 1, 1], [2, 2, 2]];
        let map = GameMap::from_config(&config);
        let cols = config.block_cols;
        let row_color = |map: &GameMap, row: usize| map.slots[row * cols].color;
        assert_eq!(row_color(&map, 0), [1, 1, 1]);
        assert_eq!(row_color(&map, 1), [2, 2, 2]);
        assert_eq!(row_color(&map, 2), [1, 1, 1]);

        config.block_colors.clear();
        let map = GameMap::from_config(&config);
        assert_eq!(map.slots.len(), config.block_rows * config.block_cols);
        assert_eq!(row_color(&map, 0), Params::BLOCK_COLORS[0]);
    }

    #[test]
    fn test_grid_blocks_do_not_overlap() {
        let map = GameMap::new();
        for (i, a) in map.slots.iter().enumerate() {
            for b in map.slots.iter().skip(i + 1) {
                assert!(!a.rect.overlaps(&b.rect), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_clamp_x_keeps_paddle_on_screen() {
        let map = GameMap::new();
        assert_eq!(map.clamp_x(-40.0, 50.0), 50.0);
        assert_eq!(map.clamp_x(5000.0, 50.0), map.width - 50.0);
        assert_eq!(map.clamp_x(300.0, 50.0), 300.0);
    }

    #[test]
    fn test_random_fruit_x_stays_on_screen() {
        let map = GameMap::new();
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let x = map.random_fruit_x(30.0, &mut rng);
            assert!((30.0..=map.width - 30.0).contains(&x));
        }
    }
}
