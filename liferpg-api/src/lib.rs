//! HTTP client for the Life RPG game-state API.
//!
//! This crate provides a focused client for the backend's four game
//! endpoints:
//! - Initialize (create or fetch the current game state)
//! - Send message (one conversational turn with the GM)
//! - Character creation (submit an initial stat allocation)
//! - Reset (wipe all progress)
//!
//! The server is the source of truth for all game state; this client only
//! carries requests and hydrates responses, applying the documented default
//! values for any field the server omits.
//!
//! # Quick Start
//!
//! ```ignore
//! use liferpg_api::GameClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GameClient::from_env();
//!
//!     let state = client.initialize().await?;
//!     println!("level {}", state.player_data.level);
//!
//!     let turn = client.send_message("오늘은 책을 30분 읽었어").await?;
//!     println!("{}", turn.gm_response);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod types;

pub use types::{
    HistoryEntry, InitializeResponse, InventoryItem, PlayerData, QuestView, Stat, StatBlock,
    TurnResponse,
};

/// Base URL used when `LIFE_RPG_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl Error {
    /// The text shown to the user for this error.
    ///
    /// Server rejections surface their `detail` string verbatim; everything
    /// else uses the full error description.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Life RPG backend client.
#[derive(Debug, Clone)]
pub struct GameClient {
    client: reqwest::Client,
    base_url: String,
}

impl GameClient {
    /// Create a client for the given backend base URL (for example
    /// `http://127.0.0.1:8000/api`). A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Create a client from the LIFE_RPG_API_URL environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("LIFE_RPG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Replace the per-request timeout (default 120 seconds).
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");
        self
    }

    /// Create or fetch the current game state.
    pub async fn initialize(&self) -> Result<InitializeResponse, Error> {
        let response = self
            .client
            .post(self.endpoint("/game/initialize"))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = check_status(response).await?;
        response.json().await.map_err(|e| Error::Parse(e.to_string()))
    }

    /// Send one free-text message to the GM and return everything the turn
    /// produced. Slash commands (`/스탯`, `/인벤토리`, ...) are ordinary
    /// messages here; the backend interprets them.
    pub async fn send_message(&self, message: &str) -> Result<TurnResponse, Error> {
        let response = self
            .client
            .post(self.endpoint("/game/send_message"))
            .json(&MessageRequest { message })
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = check_status(response).await?;
        response.json().await.map_err(|e| Error::Parse(e.to_string()))
    }

    /// Submit the initial stat allocation. The backend validates the same
    /// bounds the UI does and rejects repeated creation; either rejection
    /// arrives as [`Error::Api`] with the server's `detail` text.
    pub async fn create_character(&self, stats: &StatBlock) -> Result<PlayerData, Error> {
        let response = self
            .client
            .post(self.endpoint("/game/character_creation"))
            .json(&CharacterCreationRequest { stats })
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = check_status(response).await?;
        response.json().await.map_err(|e| Error::Parse(e.to_string()))
    }

    /// Wipe all progress. The response body is ignored; callers re-run
    /// [`GameClient::initialize`] to pick up the fresh state.
    pub async fn reset(&self) -> Result<(), Error> {
        let response = self
            .client
            .post(self.endpoint("/game/reset"))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        check_status(response).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pass a successful response through; turn anything else into
/// [`Error::Api`] with the server's `detail` string when the body carries
/// one, or a status-derived message otherwise.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let code = status.as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: code,
        detail: error_detail(code, &body),
    })
}

fn error_detail(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.detail,
        Err(_) => format!("request failed with status {status}"),
    }
}

#[derive(Serialize)]
struct MessageRequest<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct CharacterCreationRequest<'a> {
    stats: &'a StatBlock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slashes() {
        let client = GameClient::new("http://localhost:8000/api/");
        assert_eq!(
            client.endpoint("/game/initialize"),
            "http://localhost:8000/api/game/initialize"
        );
    }

    #[test]
    fn test_error_detail_prefers_body_detail() {
        assert_eq!(error_detail(500, r#"{"detail":"boom"}"#), "boom");
    }

    #[test]
    fn test_error_detail_falls_back_on_unparseable_body() {
        assert_eq!(
            error_detail(500, "<html>Internal Server Error</html>"),
            "request failed with status 500"
        );
        assert_eq!(error_detail(502, ""), "request failed with status 502");
    }

    #[test]
    fn test_api_error_display_carries_status_and_detail() {
        let err = Error::Api {
            status: 500,
            detail: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 500): boom");
        assert_eq!(err.user_message(), "boom");
    }

    #[test]
    fn test_message_request_shape() {
        let body = serde_json::to_value(MessageRequest { message: "안녕" }).unwrap();
        assert_eq!(body, serde_json::json!({"message": "안녕"}));
    }

    #[test]
    fn test_character_creation_request_shape() {
        let stats = StatBlock::default();
        let body = serde_json::to_value(CharacterCreationRequest { stats: &stats }).unwrap();
        assert_eq!(body["stats"]["힘"], 5);
        assert_eq!(body["stats"]["매력"], 5);
    }

    #[test]
    fn test_creation_response_body_is_the_player_data_itself() {
        // The endpoint returns the updated player object directly, with
        // server-side bookkeeping fields the client does not model.
        let body: PlayerData = serde_json::from_str(
            r#"{"level": 1, "xp": 0, "xp_to_next_level": 100, "gold": 0,
                "stat_points": 0, "initial_setup_done": true,
                "stats": {"힘": 10, "지능": 7, "의지력": 3, "체력": 2, "매력": 3}}"#,
        )
        .unwrap();
        assert_eq!(body.stats.get(Stat::Strength), 10);
        assert_eq!(body.stats.get(Stat::Intelligence), 7);
        assert_eq!(body.stats.total(), 25);
        assert_eq!(body.stat_points, 0);
    }
}
