use crate::systems::fruit::recycle_fruit;
use crate::{
    create_ball, Ball, Config, Events, GameMap, GameRng, Hud, Paddle, PowerState, RespawnState,
};
use hecs::World;

/// Check if the ball fell out through the bottom of the screen
///
/// A lost ball costs one hp, cancels penetrate and is despawned; a fresh
/// ball is scheduled after the respawn delay.
#[allow(clippy::too_many_arguments)]
pub fn check_ball_lost(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    hud: &mut Hud,
    power: &mut PowerState,
    respawn: &mut RespawnState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let lost: Vec<hecs::Entity> = world
        .query::<&Ball>()
        .iter()
        .filter(|(_e, ball)| ball.pos.y - ball.radius > map.height)
        .map(|(e, _ball)| e)
        .collect();

    if lost.is_empty() {
        return;
    }

    for entity in lost {
        let _ = world.despawn(entity);
    }

    hud.lose_hp();
    power.penetrate = false;
    recycle_fruit(world, map, config, rng);
    respawn.start_delay(config.respawn_delay);
    events.ball_lost = true;
    log::info!("ball lost, {} hp left", hud.hp);
}

/// Put a new ball above the paddle once the respawn pause is over
pub fn respawn_ball(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    hud: &Hud,
    respawn: &mut RespawnState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if !respawn.can_respawn() || hud.is_defeated() {
        return;
    }

    let paddle = world
        .query::<&Paddle>()
        .iter()
        .next()
        .map(|(_e, paddle)| (paddle.x, paddle.top()));
    let Some((paddle_x, paddle_top)) = paddle else {
        return;
    };

    let spawn = map.ball_spawn(paddle_x, paddle_top, config);
    let ball = Ball::launch(spawn, config.ball_speed, config.ball_radius, config.ball_color, rng);
    create_ball(world, ball.pos, ball.vel, config);
    respawn.finish();
    events.ball_spawned = true;
}
