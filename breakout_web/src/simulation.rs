use breakout_core::{
    spawn_level, step, Config, ConfigError, Events, GameMap, GameRng, Hud, InputState, Outcome,
    Params, PowerState, RespawnState, Time,
};
use hecs::World;

use crate::fsm::{GameAction, GameFsm};

/// Everything one game owns for its whole lifetime
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub hud: Hud,
    pub power: PowerState,
    pub input: InputState,
    pub events: Events,
    pub rng: GameRng,
    pub respawn_state: RespawnState,
    pub fsm: GameFsm,
    pub end_timer: f32,   // seconds of end screen left
    pub accumulator: f32, // wall time not yet simulated
}

impl LocalGame {
    // A 60 Hz frame timestamp can land a hair under FIXED_DT
    const TICK_SLACK: f32 = 1e-5;

    pub fn new(seed: u64) -> Self {
        Self::build(Config::new(), seed)
    }

    /// Start a game on a custom configuration, rejecting impossible layouts
    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: Config, seed: u64) -> Self {
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        spawn_level(&mut world, &map, &config, &mut rng);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            map,
            hud: Hud::new(config.hp_max, config.mp_max),
            config,
            power: PowerState::default(),
            input: InputState::new(),
            events: Events::new(),
            rng,
            respawn_state: RespawnState::new(),
            fsm: GameFsm::new(),
            end_timer: 0.0,
            accumulator: 0.0,
        }
    }

    /// Advance by `dt` seconds of wall time
    ///
    /// Play runs in whole `FIXED_DT` ticks; the leftover carries to the next
    /// frame. Returns the outcome on the frame the game ends, so the caller
    /// can start the matching end-screen effects exactly once.
    pub fn advance(&mut self, dt: f32) -> Option<Outcome> {
        if self.fsm.is_playing() {
            self.accumulator += dt.clamp(0.0, Params::MAX_DT);

            let mut outcome = Outcome::Ongoing;
            while self.accumulator + Self::TICK_SLACK >= Params::FIXED_DT {
                self.accumulator = (self.accumulator - Params::FIXED_DT).max(0.0);
                outcome = self.tick();
                if outcome != Outcome::Ongoing {
                    break;
                }
            }

            let action = match outcome {
                Outcome::Ongoing => return None,
                Outcome::Defeat => GameAction::Defeat,
                Outcome::Victory => GameAction::Victory,
            };
            self.fsm.transition(action);
            self.end_timer = self.config.end_screen_duration;
            self.accumulator = 0.0;
            Some(outcome)
        } else {
            if self.fsm.is_end_screen() {
                self.end_timer = (self.end_timer - dt).max(0.0);
                if self.end_timer <= 0.0 {
                    self.fsm.transition(GameAction::EndScreenDone);
                }
            }
            None
        }
    }

    /// One fixed simulation tick
    fn tick(&mut self) -> Outcome {
        self.time.dt = Params::FIXED_DT;
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.hud,
            &mut self.power,
            &mut self.input,
            &mut self.events,
            &mut self.rng,
            &mut self.respawn_state,
        )
    }
}
