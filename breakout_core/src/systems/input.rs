use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::Config;

/// Apply this frame's keyboard state: movement intent plus power-up presses
///
/// Presses are consumed here so a single key-down activates a power-up once.
#[allow(clippy::too_many_arguments)]
pub fn ingest_inputs(
    world: &mut World,
    input: &mut InputState,
    hud: &mut Hud,
    power: &mut PowerState,
    time: &Time,
    config: &Config,
    events: &mut Events,
) {
    let dir = input.direction();
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.dir = dir;
    }

    if input.boost_pressed {
        activate_boost(world, hud, time, config, events);
    }

    if input.penetrate_pressed {
        activate_penetrate(world, hud, power, config, events);
    }

    input.clear_presses();
}

/// Double paddle speed for a while, costing one mp
fn activate_boost(
    world: &mut World,
    hud: &mut Hud,
    time: &Time,
    config: &Config,
    events: &mut Events,
) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.boosting {
            continue;
        }
        if hud.spend_mp(config.boost_cost) {
            paddle.boosting = true;
            paddle.boost_started = time.now;
            events.boost_started = true;
            log::debug!("boost activated, mp left {}", hud.mp);
        }
    }
}

/// Let the ball plough through blocks until it next reaches the paddle
fn activate_penetrate(
    world: &mut World,
    hud: &mut Hud,
    power: &mut PowerState,
    config: &Config,
    events: &mut Events,
) {
    // Needs a ball in play to recolour
    let ball_in_play = world.query::<&Ball>().iter().next().is_some();
    if power.penetrate || !ball_in_play || !hud.spend_mp(config.penetrate_cost) {
        return;
    }

    power.penetrate = true;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.color = config.ball_penetrate_color;
    }
    events.penetrate_started = true;
    log::debug!("penetrate activated");
}
