/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Heads-up display values: hit points and mana points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub hp: u8,
    pub mp: u8,
    pub hp_max: u8,
    pub mp_max: u8,
}

impl Hud {
    /// Start full on both bars
    pub fn new(hp_max: u8, mp_max: u8) -> Self {
        Self {
            hp: hp_max,
            mp: mp_max,
            hp_max,
            mp_max,
        }
    }

    pub fn gain_hp(&mut self) {
        self.hp = self.hp.saturating_add(1).min(self.hp_max);
    }

    pub fn lose_hp(&mut self) {
        self.hp = self.hp.saturating_sub(1);
    }

    pub fn gain_mp(&mut self, amount: u8) {
        self.mp = self.mp.saturating_add(amount).min(self.mp_max);
    }

    /// Spend `cost` mp if there is enough, returning whether it was spent
    pub fn spend_mp(&mut self, cost: u8) -> bool {
        if self.mp >= cost {
            self.mp -= cost;
            true
        } else {
            false
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new(crate::Params::HP_MAX, crate::Params::MP_MAX)
    }
}

/// Active power-ups that are not tied to a single entity
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerState {
    /// Ball destroys blocks without bouncing until it touches the paddle or is lost
    pub penetrate: bool,
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[low, high)`; returns `low` for an empty range
    pub fn gen_range(&mut self, low: f32, high: f32) -> f32 {
        use rand::Rng;
        if high <= low {
            return low;
        }
        self.0.gen_range(low..high)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub block_destroyed: Option<(usize, usize)>, // (row, col)
    pub fruit_caught: bool,
    pub ball_lost: bool,
    pub ball_spawned: bool,
    pub boost_started: bool,
    pub boost_ended: bool,
    pub penetrate_started: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Respawn state for managing the pause before a lost ball is replaced
#[derive(Debug, Clone, Copy, Default)]
pub struct RespawnState {
    pub timer: f32, // Time remaining before ball respawns (0 = ready to respawn)
    pub pending: bool,
}

impl RespawnState {
    const EPSILON: f32 = 1e-4;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_delay(&mut self, delay: f32) {
        self.timer = delay;
        self.pending = true;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn can_respawn(&self) -> bool {
        // Tolerates f32 drift from summing fixed ticks
        self.pending && self.timer <= Self::EPSILON
    }

    pub fn finish(&mut self) {
        self.pending = false;
    }
}

/// Keyboard state for one frame
///
/// Held directions persist between frames; power-up presses are
/// edge-triggered and consumed by the first tick that sees them.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub boost_pressed: bool,
    pub penetrate_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net horizontal direction: -1 left, 1 right, 0 when both or neither are held
    pub fn direction(&self) -> i8 {
        match (self.left, self.right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    pub fn clear_presses(&mut self) {
        self.boost_pressed = false;
        self.penetrate_pressed = false;
    }
}

/// How the game stands after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Victory,
    Defeat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;

    #[test]
    fn test_hud_starts_full() {
        let hud = Hud::default();
        assert_eq!(hud.hp, 3);
        assert_eq!(hud.mp, 5);
    }

    #[test]
    fn test_hud_hp_saturates() {
        let mut hud = Hud::new(3, 5);
        hud.gain_hp();
        assert_eq!(hud.hp, 3, "hp should not exceed max");

        for _ in 0..5 {
            hud.lose_hp();
        }
        assert_eq!(hud.hp, 0, "hp should not underflow");
        assert!(hud.is_defeated());
    }

    #[test]
    fn test_hud_mp_saturates() {
        let mut hud = Hud::new(3, 5);
        hud.gain_mp(3);
        assert_eq!(hud.mp, 5);
        hud.mp = 4;
        hud.gain_mp(u8::MAX);
        assert_eq!(hud.mp, 5);
    }

    #[test]
    fn test_hud_spend_mp() {
        let mut hud = Hud::new(3, 5);
        assert!(hud.spend_mp(1));
        assert_eq!(hud.mp, 4);
        assert!(!hud.spend_mp(5), "cannot spend more than available");
        assert_eq!(hud.mp, 4, "failed spend leaves mp untouched");
    }

    #[test]
    fn test_respawn_state_countdown() {
        let mut respawn = RespawnState::new();
        assert!(!respawn.can_respawn(), "nothing pending at start");

        respawn.start_delay(0.5);
        respawn.update(0.3);
        assert!(!respawn.can_respawn());
        respawn.update(0.3);
        assert!(respawn.can_respawn());

        respawn.finish();
        assert!(!respawn.can_respawn());
    }

    #[test]
    fn test_respawn_delay_is_whole_fixed_ticks() {
        let mut respawn = RespawnState::new();
        respawn.start_delay(Params::RESPAWN_DELAY);
        let ticks = (Params::RESPAWN_DELAY / Params::FIXED_DT).round() as usize;

        for _ in 0..ticks - 1 {
            respawn.update(Params::FIXED_DT);
        }
        assert!(!respawn.can_respawn(), "one tick early");
        respawn.update(Params::FIXED_DT);
        assert!(respawn.can_respawn());
    }

    #[test]
    fn test_input_direction() {
        let mut input = InputState::new();
        assert_eq!(input.direction(), 0);
        input.left = true;
        assert_eq!(input.direction(), -1);
        input.right = true;
        assert_eq!(input.direction(), 0);
        input.left = false;
        assert_eq!(input.direction(), 1);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_paddle = true;
        events.block_destroyed = Some((1, 2));
        events.ball_lost = true;

        events.clear();

        assert!(!events.ball_hit_paddle);
        assert!(events.block_destroyed.is_none());
        assert!(!events.ball_lost);
    }

    #[test]
    fn test_gen_range_empty_range() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.gen_range(5.0, 5.0), 5.0);
    }
}
