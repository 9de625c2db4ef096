use crate::{Ball, Block, Config, Events, GameMap, Hud, Paddle, PowerState};
use hecs::World;

/// Bounce the ball off the side walls and the ceiling
///
/// The floor is open; falling through it is handled by `check_ball_lost`.
pub fn check_wall_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = ball.radius;

        if ball.pos.x - r <= 0.0 && ball.vel.x < 0.0 {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = r;
            events.ball_hit_wall = true;
        } else if ball.pos.x + r >= map.width && ball.vel.x > 0.0 {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = map.width - r;
            events.ball_hit_wall = true;
        }

        if ball.pos.y - r <= 0.0 && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = r;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off the paddle and end any penetrate run
pub fn check_paddle_collision(
    world: &mut World,
    config: &Config,
    power: &mut PowerState,
    events: &mut Events,
) {
    let paddle_rect = match world.query::<&Paddle>().iter().next() {
        Some((_e, paddle)) => paddle.rect(),
        None => return,
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Only a descending ball can land on the paddle
        if ball.vel.y <= 0.0 || !ball.rect().overlaps(&paddle_rect) {
            continue;
        }

        ball.vel.y = -ball.vel.y;
        ball.pos.y = paddle_rect.min.y - ball.radius;

        if power.penetrate {
            power.penetrate = false;
            ball.color = config.ball_color;
        }
        events.ball_hit_paddle = true;
    }
}

/// Destroy at most one block per tick
///
/// Blocks are scanned in row-major order and the first live block that
/// overlaps the ball is knocked out. The ball bounces vertically unless
/// penetrate is active.
pub fn check_block_collision(
    world: &mut World,
    hud: &mut Hud,
    power: &PowerState,
    events: &mut Events,
) {
    let ball_data = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(e, ball)| (e, ball.rect()));

    let (ball_entity, ball_rect) = match ball_data {
        Some(data) => data,
        None => return, // No ball in play
    };

    let mut candidates: Vec<(hecs::Entity, usize, usize)> = world
        .query::<&Block>()
        .iter()
        .filter(|(_e, block)| block.alive && block.rect.overlaps(&ball_rect))
        .map(|(e, block)| (e, block.row, block.col))
        .collect();
    candidates.sort_by_key(|&(_e, row, col)| (row, col));

    let Some(&(block_entity, row, col)) = candidates.first() else {
        return;
    };

    if let Ok(mut block) = world.get::<&mut Block>(block_entity) {
        block.alive = false;
    }
    if !power.penetrate {
        if let Ok(mut ball) = world.get::<&mut Ball>(ball_entity) {
            ball.vel.y = -ball.vel.y;
        }
    }

    hud.gain_mp(1);
    events.block_destroyed = Some((row, col));
}
