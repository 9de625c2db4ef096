//! WebGPU client for Breakout
//!
//! Engine-free rendering using wgpu for the WebGPU API. The page drives the
//! game by calling `frame` from `requestAnimationFrame` and forwarding key
//! events.

pub mod camera;
pub mod error;
pub mod fsm;
pub mod input;
pub mod logger;
pub mod mesh;
pub mod scene;
pub mod simulation;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use crate::client::Client;
    use crate::error::ClientError;

    // Global client storage for WASM bindings
    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, ClientError>) -> Result<T, JsValue> {
        CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
            Some(client) => f(client).map_err(JsValue::from),
            None => Err(ClientError::NotInitialized.into()),
        })
    }

    fn read_client<T>(f: impl FnOnce(&Client) -> T) -> Option<T> {
        CLIENT.with(|cell| cell.borrow().as_ref().map(f))
    }

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
        console_error_panic_hook::set_once();
        if crate::logger::init().is_err() {
            log::debug!("logger already installed");
        }

        wasm_bindgen_futures::future_to_promise(async move {
            let client = Client::new(canvas).await?;
            CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Step and draw one frame; returns false once the game has closed
    #[wasm_bindgen]
    pub fn frame(now_ms: f64) -> Result<bool, JsValue> {
        with_client(|client| client.frame(now_ms))
    }

    #[wasm_bindgen]
    pub fn key_down(event: KeyboardEvent) -> Result<(), JsValue> {
        with_client(|client| {
            if client.key_down(&event) {
                event.prevent_default();
            }
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn key_up(event: KeyboardEvent) -> Result<(), JsValue> {
        with_client(|client| {
            if client.key_up(&event) {
                event.prevent_default();
            }
            Ok(())
        })
    }

    /// Current phase: "Playing", "GameOver", "Cleared" or "Closed"
    #[wasm_bindgen]
    pub fn state_string() -> String {
        read_client(|client| client.game.fsm.state_string()).unwrap_or_else(|| "Loading".into())
    }

    #[wasm_bindgen]
    pub fn hp() -> u8 {
        read_client(|client| client.game.hud.hp).unwrap_or(0)
    }

    #[wasm_bindgen]
    pub fn mp() -> u8 {
        read_client(|client| client.game.hud.mp).unwrap_or(0)
    }
}
