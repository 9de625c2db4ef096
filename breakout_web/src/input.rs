//! Keyboard input handling

use breakout_core::InputState;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Boost,
    Penetrate,
}

/// Map a `KeyboardEvent.key` value to a game key
pub fn map_key(key: &str) -> Option<GameKey> {
    match key {
        "ArrowLeft" | "Left" => Some(GameKey::Left),
        "ArrowRight" | "Right" => Some(GameKey::Right),
        " " | "Spacebar" => Some(GameKey::Boost),
        "Enter" => Some(GameKey::Penetrate),
        _ => None,
    }
}

/// Handle key down event; `repeat` is true for auto-repeated keydowns
pub fn handle_key_down(input: &mut InputState, key: GameKey, repeat: bool) {
    match key {
        GameKey::Left => input.left = true,
        GameKey::Right => input.right = true,
        GameKey::Boost if !repeat => input.boost_pressed = true,
        GameKey::Penetrate if !repeat => input.penetrate_pressed = true,
        _ => {}
    }
}

/// Handle key up event
pub fn handle_key_up(input: &mut InputState, key: GameKey) {
    match key {
        GameKey::Left => input.left = false,
        GameKey::Right => input.right = false,
        GameKey::Boost | GameKey::Penetrate => {}
    }
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_key_from_event(event: &web_sys::KeyboardEvent) -> Option<GameKey> {
    map_key(&event.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key("ArrowLeft"), Some(GameKey::Left));
        assert_eq!(map_key("ArrowRight"), Some(GameKey::Right));
        assert_eq!(map_key(" "), Some(GameKey::Boost));
        assert_eq!(map_key("Enter"), Some(GameKey::Penetrate));
        assert_eq!(map_key("a"), None);
    }

    #[test]
    fn test_held_direction() {
        let mut input = InputState::new();
        handle_key_down(&mut input, GameKey::Left, false);
        handle_key_down(&mut input, GameKey::Left, true);
        assert!(input.left);
        handle_key_up(&mut input, GameKey::Left);
        assert!(!input.left);
    }

    #[test]
    fn test_power_presses_ignore_auto_repeat() {
        let mut input = InputState::new();
        handle_key_down(&mut input, GameKey::Boost, true);
        handle_key_down(&mut input, GameKey::Penetrate, true);
        assert!(!input.boost_pressed);
        assert!(!input.penetrate_pressed);

        handle_key_down(&mut input, GameKey::Boost, false);
        handle_key_down(&mut input, GameKey::Penetrate, false);
        assert!(input.boost_pressed);
        assert!(input.penetrate_pressed);
    }
}
