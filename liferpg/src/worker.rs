//! Background task that owns the HTTP client.
//!
//! The UI thread never performs network I/O: it hands `ApiRequest` values to
//! this worker and drains `ApiEvent` values each frame. Requests are served
//! strictly one at a time, which together with the in-flight guard in the
//! app keeps at most one backend call pending.

use liferpg_api::{Error, GameClient, InitializeResponse, PlayerData, StatBlock, TurnResponse};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Requests the UI can make of the network worker.
#[derive(Debug)]
pub enum ApiRequest {
    /// Create or fetch the current game state.
    Initialize,
    /// One conversational turn with the GM.
    SendMessage(String),
    /// Submit the initial stat allocation.
    CreateCharacter(StatBlock),
    /// Wipe all progress.
    Reset,
}

/// Results the worker reports back to the UI.
#[derive(Debug)]
pub enum ApiEvent {
    Initialized(InitializeResponse),
    InitializeFailed(Error),
    Turn(Box<TurnResponse>),
    TurnFailed(Error),
    CharacterCreated(Box<PlayerData>),
    CharacterCreationFailed(Error),
    ResetComplete,
    ResetFailed(Error),
}

/// Spawn the network worker and return the channel endpoints the UI holds.
pub fn spawn(client: GameClient) -> (mpsc::Sender<ApiRequest>, mpsc::Receiver<ApiEvent>) {
    let (request_tx, mut request_rx) = mpsc::channel::<ApiRequest>(8);
    let (event_tx, event_rx) = mpsc::channel::<ApiEvent>(32);

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let event = handle_request(&client, request).await;
            if event_tx.send(event).await.is_err() {
                // UI side dropped its receiver; shut down.
                break;
            }
        }
    });

    (request_tx, event_rx)
}

async fn handle_request(client: &GameClient, request: ApiRequest) -> ApiEvent {
    match request {
        ApiRequest::Initialize => {
            info!("initializing game state");
            match client.initialize().await {
                Ok(state) => {
                    info!(
                        level = state.player_data.level,
                        history_turns = state.history.len(),
                        "game state initialized"
                    );
                    ApiEvent::Initialized(state)
                }
                Err(err) => {
                    warn!("initialize failed: {err}");
                    ApiEvent::InitializeFailed(err)
                }
            }
        }
        ApiRequest::SendMessage(message) => {
            info!(chars = message.chars().count(), "sending message");
            match client.send_message(&message).await {
                Ok(turn) => ApiEvent::Turn(Box::new(turn)),
                Err(err) => {
                    warn!("send_message failed: {err}");
                    ApiEvent::TurnFailed(err)
                }
            }
        }
        ApiRequest::CreateCharacter(stats) => {
            info!("submitting character creation");
            match client.create_character(&stats).await {
                Ok(player) => ApiEvent::CharacterCreated(Box::new(player)),
                Err(err) => {
                    warn!("character creation failed: {err}");
                    ApiEvent::CharacterCreationFailed(err)
                }
            }
        }
        ApiRequest::Reset => {
            info!("resetting game");
            match client.reset().await {
                Ok(()) => ApiEvent::ResetComplete,
                Err(err) => {
                    warn!("reset failed: {err}");
                    ApiEvent::ResetFailed(err)
                }
            }
        }
    }
}
