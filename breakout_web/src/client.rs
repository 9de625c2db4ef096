use breakout_core::Config;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

use crate::audio::AudioBank;
use crate::error::ClientError;
use crate::input::{get_key_from_event, handle_key_down, handle_key_up};
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::simulation::LocalGame;

/// Main client state
pub struct Client {
    renderer: Renderer,
    pub game: LocalGame,
    audio: AudioBank,
    last_frame_ms: Option<f64>,
}

impl Client {
    pub async fn new(canvas: HtmlCanvasElement) -> Result<Self, ClientError> {
        let config = Config::new();

        canvas.set_width(config.screen_width as u32);
        canvas.set_height(config.screen_height as u32);

        let renderer = Renderer::new(canvas).await?;
        let audio = AudioBank::load();

        let seed = js_sys::Date::now() as u64;
        log::info!("starting game, seed {}", seed);

        Ok(Self {
            renderer,
            game: LocalGame::with_config(config, seed)?,
            audio,
            last_frame_ms: None,
        })
    }

    /// Advance and draw one animation frame; false once the game is closed
    pub fn frame(&mut self, now_ms: f64) -> Result<bool, ClientError> {
        if self.game.fsm.is_closed() {
            return Ok(false);
        }

        let dt = match self.last_frame_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        if let Some(outcome) = self.game.advance(dt) {
            self.audio.play_outcome(outcome);
        }

        if self.game.fsm.is_closed() {
            return Ok(false);
        }

        let scene = Scene::build(&self.game);
        self.renderer.draw(&scene)?;
        Ok(true)
    }

    /// Returns true when the key belongs to the game
    pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
        match get_key_from_event(event) {
            Some(key) => {
                handle_key_down(&mut self.game.input, key, event.repeat());
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, event: &KeyboardEvent) -> bool {
        match get_key_from_event(event) {
            Some(key) => {
                handle_key_up(&mut self.game.input, key);
                true
            }
            None => false,
        }
    }
}
