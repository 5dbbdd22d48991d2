use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZipmapError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Postal code must be 7 digits, got {len}")]
    InvalidLength { len: usize },

    #[error("Address not found: {message}")]
    NotFound { message: String },

    #[error("No geocoding result for any candidate query")]
    GeocodeNotFound,

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ZipmapError {
    /// Status-line text shown to the user for this failure. `NotFound`
    /// carries the lookup API's own message through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ZipmapError::InvalidLength { .. } => "郵便番号は7桁で入力してください。".to_string(),
            ZipmapError::NotFound { message } => message.clone(),
            ZipmapError::GeocodeNotFound => {
                "地図の位置を特定できませんでした。番地などを追加して再検索してください。".to_string()
            }
            _ => "エラーが発生しました。時間をおいて再度お試しください。".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZipmapError>;
