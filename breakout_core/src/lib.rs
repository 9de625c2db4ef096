pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run the deterministic Breakout simulation for one frame
///
/// Returns the outcome after the frame. Once the outcome is no longer
/// `Ongoing` further calls leave the world untouched.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    hud: &mut Hud,
    power: &mut PowerState,
    input: &mut InputState,
    events: &mut Events,
    rng: &mut GameRng,
    respawn: &mut RespawnState,
) -> Outcome {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Events cover the whole frame, not just the last micro-step
    events.clear();

    let starting = evaluate_outcome(world, hud);
    let mut outcome = starting;

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 && outcome == Outcome::Ongoing {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Keyboard: movement intent and power-up activation
        ingest_inputs(world, input, hud, power, &step_time, config, events);
        expire_boost(world, &step_time, config, events);

        // 2. Integrate positions
        move_paddles(world, &step_time, map, config);
        move_ball(world, &step_time);
        move_fruit(world, &step_time, config);

        // 3. Ball vs walls, paddle, then at most one block
        check_wall_collisions(world, map, events);
        check_paddle_collision(world, config, power, events);
        check_block_collision(world, hud, power, events);

        // 4. Fruit catch / recycle
        check_fruit(world, map, config, hud, rng, events);

        // 5. Delayed respawn, then ball loss; a pause never counts down on the tick it starts
        respawn.update(step_dt);
        respawn_ball(world, map, config, hud, respawn, rng, events);
        check_ball_lost(world, map, config, hud, power, respawn, rng, events);

        outcome = evaluate_outcome(world, hud);
    }

    if starting == Outcome::Ongoing && outcome != Outcome::Ongoing {
        log::info!("game finished: {:?}", outcome);
    }

    // Update time
    time.now += clamped_dt;
    outcome
}

/// Defeat when hp is gone, victory when every block is down
pub fn evaluate_outcome(world: &World, hud: &Hud) -> Outcome {
    if hud.is_defeated() {
        Outcome::Defeat
    } else if blocks_remaining(world) == 0 {
        Outcome::Victory
    } else {
        Outcome::Ongoing
    }
}

/// Number of blocks still standing
pub fn blocks_remaining(world: &World) -> usize {
    world
        .query::<&Block>()
        .iter()
        .filter(|(_e, block)| block.alive)
        .count()
}

/// Helper to create the paddle entity at its resting position
pub fn create_paddle(world: &mut World, map: &GameMap, config: &Config) -> hecs::Entity {
    let pos = map.paddle_spawn(config);
    world.spawn((
        Paddle::new(pos, config.paddle_width, config.paddle_height),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius, config.ball_color),))
}

/// Helper to create one block entity per grid slot
pub fn create_blocks(world: &mut World, map: &GameMap) -> Vec<hecs::Entity> {
    map.slots
        .iter()
        .map(|slot| world.spawn((Block::new(slot.row, slot.col, slot.rect, slot.color),)))
        .collect()
}

/// Helper to create the fruit entity
pub fn create_fruit(world: &mut World, pos: Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Fruit::new(pos, config.fruit_radius),))
}

/// Populate an empty world with everything a new game needs
pub fn spawn_level(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    create_paddle(world, map, config);
    let paddle_pos = map.paddle_spawn(config);
    let paddle_top = paddle_pos.y - config.paddle_height / 2.0;

    let spawn = map.ball_spawn(paddle_pos.x, paddle_top, config);
    let ball = Ball::launch(spawn, config.ball_speed, config.ball_radius, config.ball_color, rng);
    create_ball(world, ball.pos, ball.vel, config);

    create_blocks(world, map);

    let fruit_x = map.random_fruit_x(config.fruit_radius, rng);
    create_fruit(world, Vec2::new(fruit_x, config.fruit_start_y), config);
}
