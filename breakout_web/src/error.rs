use breakout_core::ConfigError;
use thiserror::Error;

/// Errors raised by the browser client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to create surface: {0}")]
    Surface(String),

    #[error("Failed to find adapter")]
    Adapter,

    #[error("Failed to create device: {0}")]
    Device(String),

    #[error("No surface formats available")]
    NoSurfaceFormat,

    #[error("Failed to get current texture: {0}")]
    SurfaceTexture(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Client not initialized")]
    NotInitialized,
}

#[cfg(target_arch = "wasm32")]
impl From<ClientError> for wasm_bindgen::JsValue {
    fn from(err: ClientError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ClientError::Adapter.to_string(), "Failed to find adapter");
        assert_eq!(
            ClientError::Audio("assets/win.ogg".into()).to_string(),
            "Audio error: assets/win.ogg"
        );
    }
}
