//! Win / lose jingles
//!
//! Playback problems are logged and otherwise ignored; the game never waits on
//! audio.

use breakout_core::Outcome;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::error::ClientError;

pub const WIN_TRACK: &str = "assets/win.ogg";
pub const LOSE_TRACK: &str = "assets/lose.ogg";

pub struct AudioBank {
    win: Option<HtmlAudioElement>,
    lose: Option<HtmlAudioElement>,
}

impl AudioBank {
    /// Create the audio elements once at start-up
    pub fn load() -> Self {
        Self {
            win: load_track(WIN_TRACK),
            lose: load_track(LOSE_TRACK),
        }
    }

    /// Play the track for a finished game; `Ongoing` plays nothing
    pub fn play_outcome(&self, outcome: Outcome) {
        let (track, src) = match outcome {
            Outcome::Victory => (&self.win, WIN_TRACK),
            Outcome::Defeat => (&self.lose, LOSE_TRACK),
            Outcome::Ongoing => return,
        };

        let Some(element) = track else {
            log::warn!("{} unavailable, skipping", src);
            return;
        };

        match element.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("{}", ClientError::Audio(format!("{}: {:?}", src, e)));
                    }
                });
            }
            Err(e) => log::warn!("{}", ClientError::Audio(format!("{}: {:?}", src, e))),
        }
    }
}

fn load_track(src: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(src) {
        Ok(element) => {
            element.set_preload("auto");
            Some(element)
        }
        Err(e) => {
            log::warn!("{}", ClientError::Audio(format!("{}: {:?}", src, e)));
            None
        }
    }
}
