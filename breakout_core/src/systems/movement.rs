use crate::{Ball, Config, Facing, Fruit, GameMap, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, map: &GameMap, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        // Only step toward a side the paddle has not reached yet
        let can_move = match intent.dir {
            d if d < 0 => paddle.left() > 0.0,
            d if d > 0 => paddle.right() < map.width,
            _ => false,
        };
        if intent.dir < 0 {
            paddle.facing = Facing::Left;
        } else if intent.dir > 0 {
            paddle.facing = Facing::Right;
        }

        if can_move {
            let delta = intent.dir as f32 * config.paddle_speed(paddle.boosting) * time.dt;
            paddle.x = map.clamp_x(paddle.x + delta, paddle.width / 2.0);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

/// Let the fruit fall
pub fn move_fruit(world: &mut World, time: &Time, config: &Config) {
    for (_entity, fruit) in world.query_mut::<&mut Fruit>() {
        fruit.pos.y += config.fruit_fall_speed * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_fruit, create_paddle};
    use glam::Vec2;

    fn setup() -> (World, GameMap, Config, Time) {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        (World::new(), map, config, Time::new(0.1, 0.0))
    }

    fn set_intent(world: &mut World, dir: i8) {
        for (_e, intent) in world.query_mut::<&mut PaddleIntent>() {
            intent.dir = dir;
        }
    }

    fn paddle(world: &World) -> Paddle {
        *world.query::<&Paddle>().iter().next().unwrap().1
    }

    #[test]
    fn test_paddle_moves_right_and_faces_right() {
        let (mut world, map, config, time) = setup();
        create_paddle(&mut world, &map, &config);
        let start = paddle(&world).x;
        set_intent(&mut world, 1);

        move_paddles(&mut world, &time, &map, &config);

        let p = paddle(&world);
        assert!((p.x - (start + config.paddle_speed * 0.1)).abs() < 0.001);
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_boosted_paddle_moves_twice_as_far() {
        let (mut world, map, config, time) = setup();
        create_paddle(&mut world, &map, &config);
        let start = paddle(&world).x;
        for (_e, p) in world.query_mut::<&mut Paddle>() {
            p.boosting = true;
        }
        set_intent(&mut world, -1);

        move_paddles(&mut world, &time, &map, &config);

        let p = paddle(&world);
        assert!((start - p.x - config.paddle_speed * 2.0 * 0.1).abs() < 0.001);
        assert_eq!(p.facing, Facing::Left);
    }

    #[test]
    fn test_paddle_stops_at_screen_edge() {
        let (mut world, map, config, time) = setup();
        create_paddle(&mut world, &map, &config);
        set_intent(&mut world, -1);

        for _ in 0..100 {
            move_paddles(&mut world, &time, &map, &config);
        }

        let p = paddle(&world);
        assert_eq!(p.left(), 0.0, "paddle should rest against the left wall");
    }

    #[test]
    fn test_paddle_stops_at_right_screen_edge() {
        let (mut world, map, config, time) = setup();
        create_paddle(&mut world, &map, &config);
        set_intent(&mut world, 1);

        for _ in 0..100 {
            move_paddles(&mut world, &time, &map, &config);
        }

        let p = paddle(&world);
        assert_eq!(p.right(), map.width, "paddle should rest against the right wall");
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let (mut world, _map, config, time) = setup();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(50.0, -100.0), &config);

        move_ball(&mut world, &time);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!((ball.pos - Vec2::new(105.0, 90.0)).length() < 0.001);
        }
    }

    #[test]
    fn test_fruit_falls() {
        let (mut world, _map, config, time) = setup();
        create_fruit(&mut world, Vec2::new(300.0, -100.0), &config);

        move_fruit(&mut world, &time, &config);

        for (_e, fruit) in world.query::<&Fruit>().iter() {
            assert!((fruit.pos.y - (-100.0 + config.fruit_fall_speed * 0.1)).abs() < 0.001);
        }
    }
}
