//! Turns the game state into instance lists for the renderer
//!
//! Everything is a unit quad or a unit circle scaled and tinted per instance,
//! in screen pixels with the origin at the top-left.

use breakout_core::{Ball, Block, Facing, Fruit, Paddle};

use crate::fsm::FsmState;
use crate::simulation::LocalGame;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, scale_x, scale_y
    pub tint: [f32; 4],      // linear rgba
}

impl InstanceData {
    pub fn rect(cx: f32, cy: f32, w: f32, h: f32, tint: [f32; 4]) -> Self {
        Self {
            transform: [cx, cy, w, h],
            tint,
        }
    }

    pub fn circle(cx: f32, cy: f32, radius: f32, tint: [f32; 4]) -> Self {
        Self::rect(cx, cy, radius * 2.0, radius * 2.0, tint)
    }
}

const BACKGROUND_BANDS: usize = 8;
const BACKGROUND_TOP: [u8; 3] = [20, 24, 48];
const BACKGROUND_BOTTOM: [u8; 3] = [60, 40, 90];

const PADDLE_COLOR: [u8; 3] = [230, 230, 240];
const PADDLE_BOOST_COLOR: [u8; 3] = [120, 220, 255];
const CHARACTER_COLOR: [u8; 3] = [250, 200, 160];
const EYE_COLOR: [u8; 3] = [30, 30, 30];
const FRUIT_COLOR: [u8; 3] = [220, 30, 40];
const HP_COLOR: [u8; 3] = [235, 60, 80];
const MP_COLOR: [u8; 3] = [80, 150, 255];
const EMPTY_PIP_COLOR: [u8; 3] = [70, 70, 80];
const GAME_OVER_COLOR: [u8; 3] = [200, 40, 40];
const CLEARED_COLOR: [u8; 3] = [255, 215, 0];

const CHARACTER_HEIGHT: f32 = 40.0;
const CHARACTER_OVERLAP: f32 = 5.0; // character top sits this far above the paddle bottom
const HP_PIP_SIZE: f32 = 20.0;
const MP_PIP_RADIUS: f32 = 9.0;
const PIP_SPACING: f32 = 28.0;
const HUD_MARGIN: f32 = 10.0;
const OVERLAY_ALPHA: f32 = 0.78;
const BANNER_HEIGHT: f32 = 120.0;

/// Per-frame draw lists, in back-to-front order within each list
#[derive(Debug, Default, Clone)]
pub struct Scene {
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
    pub overlay: Vec<InstanceData>,
}

impl Scene {
    pub fn build(game: &LocalGame) -> Self {
        let mut scene = Scene::default();
        let (width, height) = (game.map.width, game.map.height);

        push_background(&mut scene.rects, width, height);

        let mut blocks: Vec<Block> = game
            .world
            .query::<&Block>()
            .iter()
            .filter(|(_e, block)| block.alive)
            .map(|(_e, block)| *block)
            .collect();
        blocks.sort_by_key(|block| (block.row, block.col));
        for block in &blocks {
            let center = block.rect.center();
            let size = block.rect.size();
            scene
                .rects
                .push(InstanceData::rect(center.x, center.y, size.x, size.y, rgb(block.color)));
        }

        for (_e, paddle) in game.world.query::<&Paddle>().iter() {
            push_paddle(&mut scene.rects, paddle);
        }

        for (_e, fruit) in game.world.query::<&Fruit>().iter() {
            scene.circles.push(InstanceData::circle(
                fruit.pos.x,
                fruit.pos.y,
                fruit.radius,
                rgb(FRUIT_COLOR),
            ));
        }

        for (_e, ball) in game.world.query::<&Ball>().iter() {
            scene
                .circles
                .push(InstanceData::circle(ball.pos.x, ball.pos.y, ball.radius, rgb(ball.color)));
        }

        // HUD: hp as squares, mp as dots
        for i in 0..game.hud.hp_max {
            let color = if i < game.hud.hp { HP_COLOR } else { EMPTY_PIP_COLOR };
            let x = HUD_MARGIN + HP_PIP_SIZE / 2.0 + i as f32 * PIP_SPACING;
            scene.rects.push(InstanceData::rect(
                x,
                HUD_MARGIN + HP_PIP_SIZE / 2.0,
                HP_PIP_SIZE,
                HP_PIP_SIZE,
                rgb(color),
            ));
        }
        for i in 0..game.hud.mp_max {
            let color = if i < game.hud.mp { MP_COLOR } else { EMPTY_PIP_COLOR };
            let x = HUD_MARGIN + MP_PIP_RADIUS + i as f32 * PIP_SPACING;
            scene.circles.push(InstanceData::circle(
                x,
                HUD_MARGIN + HP_PIP_SIZE + HUD_MARGIN + MP_PIP_RADIUS,
                MP_PIP_RADIUS,
                rgb(color),
            ));
        }

        let banner = match game.fsm.state() {
            FsmState::GameOver => Some(GAME_OVER_COLOR),
            FsmState::Cleared => Some(CLEARED_COLOR),
            FsmState::Playing | FsmState::Closed => None,
        };
        if let Some(color) = banner {
            let shade = [0.0, 0.0, 0.0, OVERLAY_ALPHA];
            scene
                .overlay
                .push(InstanceData::rect(width / 2.0, height / 2.0, width, height, shade));
            scene.overlay.push(InstanceData::rect(
                width / 2.0,
                height / 2.0,
                width,
                BANNER_HEIGHT,
                rgb(color),
            ));
        }

        scene
    }
}

fn push_background(rects: &mut Vec<InstanceData>, width: f32, height: f32) {
    let band = height / BACKGROUND_BANDS as f32;
    for i in 0..BACKGROUND_BANDS {
        let t = i as f32 / (BACKGROUND_BANDS - 1) as f32;
        let mut color = [0u8; 3];
        for c in 0..3 {
            let a = BACKGROUND_TOP[c] as f32;
            let b = BACKGROUND_BOTTOM[c] as f32;
            color[c] = (a + (b - a) * t).round() as u8;
        }
        let cy = band * (i as f32 + 0.5);
        rects.push(InstanceData::rect(width / 2.0, cy, width, band, rgb(color)));
    }
}

fn push_paddle(rects: &mut Vec<InstanceData>, paddle: &Paddle) {
    let bar = if paddle.boosting {
        PADDLE_BOOST_COLOR
    } else {
        PADDLE_COLOR
    };

    // Character hangs under the bar, half as wide
    let bottom = paddle.y + paddle.height / 2.0;
    let char_w = paddle.width / 2.0;
    let char_cy = bottom - CHARACTER_OVERLAP + CHARACTER_HEIGHT / 2.0;
    rects.push(InstanceData::rect(
        paddle.x,
        char_cy,
        char_w,
        CHARACTER_HEIGHT,
        rgb(CHARACTER_COLOR),
    ));

    let eye_dx = match paddle.facing {
        Facing::Left => -char_w / 4.0,
        Facing::Right => char_w / 4.0,
    };
    rects.push(InstanceData::rect(
        paddle.x + eye_dx,
        char_cy - CHARACTER_HEIGHT / 6.0,
        6.0,
        6.0,
        rgb(EYE_COLOR),
    ));

    rects.push(InstanceData::rect(
        paddle.x,
        paddle.y,
        paddle.width,
        paddle.height,
        rgb(bar),
    ));
}

/// sRGB byte color to an opaque linear tint
pub fn rgb(color: [u8; 3]) -> [f32; 4] {
    [
        srgb_to_linear(color[0]),
        srgb_to_linear(color[1]),
        srgb_to_linear(color[2]),
        1.0,
    ]
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsm::GameAction;

    #[test]
    fn test_scene_has_every_live_block() {
        let game = LocalGame::new(3);
        let scene = Scene::build(&game);

        // 8 bands + 50 blocks + character, eye, bar + 3 hp pips
        assert_eq!(scene.rects.len(), BACKGROUND_BANDS + 50 + 3 + 3);
        // fruit + ball + 5 mp pips
        assert_eq!(scene.circles.len(), 7);
        assert!(scene.overlay.is_empty());
    }

    #[test]
    fn test_dead_blocks_are_not_drawn() {
        let mut game = LocalGame::new(3);
        for (_e, block) in game.world.query_mut::<&mut Block>() {
            if block.row == 0 {
                block.alive = false;
            }
        }
        let scene = Scene::build(&game);
        assert_eq!(scene.rects.len(), BACKGROUND_BANDS + 40 + 3 + 3);
    }

    #[test]
    fn test_end_screen_adds_overlay() {
        let mut game = LocalGame::new(3);
        game.fsm.transition(GameAction::Victory);
        let scene = Scene::build(&game);

        assert_eq!(scene.overlay.len(), 2);
        assert_eq!(scene.overlay[0].tint[3], OVERLAY_ALPHA);
        assert_eq!(scene.overlay[1].tint, rgb(CLEARED_COLOR));
    }

    #[test]
    fn test_eye_follows_facing() {
        let mut game = LocalGame::new(3);
        let eye_x = |game: &LocalGame| {
            let scene = Scene::build(game);
            scene.rects[BACKGROUND_BANDS + 50 + 1].transform[0]
        };
        let left = eye_x(&game);
        for (_e, paddle) in game.world.query_mut::<&mut Paddle>() {
            paddle.facing = Facing::Right;
        }
        let right = eye_x(&game);
        assert!(right > left);
    }

    #[test]
    fn test_empty_pips_when_drained() {
        let mut game = LocalGame::new(3);
        game.hud.mp = 0;
        let scene = Scene::build(&game);
        let mp_pips = &scene.circles[2..];
        assert!(mp_pips.iter().all(|pip| pip.tint == rgb(EMPTY_PIP_COLOR)));
    }

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-6);
    }
}
