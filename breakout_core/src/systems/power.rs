use hecs::World;

use crate::{Config, Events, Paddle, Time};

/// End paddle boosts that have run their full duration
pub fn expire_boost(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.boosting && time.now - paddle.boost_started >= config.boost_duration {
            paddle.boosting = false;
            events.boost_ended = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, GameMap};

    #[test]
    fn test_boost_lasts_its_duration() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut events = Events::new();
        let entity = create_paddle(&mut world, &map, &config);
        {
            let mut paddle = world.get::<&mut Paddle>(entity).unwrap();
            paddle.boosting = true;
            paddle.boost_started = 1.0;
        }

        let before = Time::new(0.016, 1.0 + config.boost_duration - 0.1);
        expire_boost(&mut world, &before, &config, &mut events);
        assert!(world.get::<&Paddle>(entity).unwrap().boosting);
        assert!(!events.boost_ended);

        let after = Time::new(0.016, 1.0 + config.boost_duration);
        expire_boost(&mut world, &after, &config, &mut events);
        assert!(!world.get::<&Paddle>(entity).unwrap().boosting);
        assert!(events.boost_ended);
    }
}
