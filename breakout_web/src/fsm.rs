//! Game State Machine
//!
//! Tracks whether the board is in play, showing an end screen, or closed.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Playing,
    GameOver,
    Cleared,
    Closed,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Defeat,
    Victory,
    EndScreenDone,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Playing,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Get current state as string (for JS interop)
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::info!("{:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Playing, GameAction::Defeat) => Some(FsmState::GameOver),
            (FsmState::Playing, GameAction::Victory) => Some(FsmState::Cleared),

            (FsmState::GameOver, GameAction::EndScreenDone) => Some(FsmState::Closed),
            (FsmState::Cleared, GameAction::EndScreenDone) => Some(FsmState::Closed),

            // Closed is terminal
            _ => None,
        }
    }

    /// Check if the simulation should advance
    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    /// Check if an end screen is showing
    pub fn is_end_screen(&self) -> bool {
        matches!(self.state, FsmState::GameOver | FsmState::Cleared)
    }

    pub fn is_closed(&self) -> bool {
        self.state == FsmState::Closed
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_defeat_flow() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Defeat);
        assert!(result.success);
        assert_eq!(result.to_state, FsmState::GameOver);
        assert!(fsm.is_end_screen());

        fsm.transition(GameAction::EndScreenDone);
        assert!(fsm.is_closed());
    }

    #[test]
    fn test_victory_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Victory);
        assert_eq!(fsm.state(), FsmState::Cleared);
        fsm.transition(GameAction::EndScreenDone);
        assert_eq!(fsm.state(), FsmState::Closed);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::EndScreenDone);
        assert!(!result.success);
        assert_eq!(fsm.state(), FsmState::Playing);
    }

    #[test]
    fn test_closed_is_terminal() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Defeat);
        fsm.transition(GameAction::EndScreenDone);
        for action in [GameAction::Defeat, GameAction::Victory, GameAction::EndScreenDone] {
            assert!(!fsm.can_transition(action));
        }
    }

    #[test]
    fn test_state_string() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Victory);
        assert_eq!(fsm.state_string(), "Cleared");
    }
}
