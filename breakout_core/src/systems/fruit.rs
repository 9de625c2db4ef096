use hecs::World;

use crate::{Config, Events, Fruit, GameMap, GameRng, Hud, Paddle};

/// Catch the fruit with the paddle for one hp, or recycle it once it drops off screen
pub fn check_fruit(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    hud: &mut Hud,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let paddle_rect = world
        .query::<&Paddle>()
        .iter()
        .next()
        .map(|(_e, paddle)| paddle.rect());

    for (_entity, fruit) in world.query_mut::<&mut Fruit>() {
        let caught = paddle_rect.is_some_and(|rect| fruit.rect().overlaps(&rect));

        if caught {
            hud.gain_hp();
            reset_fruit(fruit, config.fruit_catch_reset_y, map, rng);
            events.fruit_caught = true;
        } else if fruit.pos.y >= config.fruit_reset_y {
            reset_fruit(fruit, config.fruit_miss_reset_y, map, rng);
        }
    }
}

/// Send every fruit back above the screen, e.g. after the ball is lost
pub fn recycle_fruit(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    for (_entity, fruit) in world.query_mut::<&mut Fruit>() {
        reset_fruit(fruit, config.fruit_miss_reset_y, map, rng);
    }
}

fn reset_fruit(fruit: &mut Fruit, y: f32, map: &GameMap, rng: &mut GameRng) {
    fruit.pos.x = map.random_fruit_x(fruit.radius, rng);
    fruit.pos.y = y;
}
