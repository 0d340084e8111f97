//! Integration tests that call a running Life RPG backend.
//!
//! These tests require LIFE_RPG_API_URL to point at a live server (via .env
//! file or environment).
//! Run with: `cargo test -p liferpg-api --test backend_integration -- --ignored`
//!
//! They are marked #[ignore] by default to avoid:
//! - Test failures when no backend is running
//! - Slow test runs (each turn waits on the GM)

use liferpg_api::{Error, GameClient, StatBlock};

/// Load environment variables from .env file
fn setup() {
    let _ = dotenvy::dotenv();
}

/// Check if a backend URL is configured
fn has_backend() -> bool {
    std::env::var("LIFE_RPG_API_URL").is_ok()
}

#[tokio::test]
#[ignore] // Run with: cargo test -p liferpg-api --test backend_integration -- --ignored
async fn test_initialize_returns_hydrated_player_state() {
    setup();
    if !has_backend() {
        eprintln!("Skipping test: LIFE_RPG_API_URL not set");
        return;
    }

    let client = GameClient::from_env();
    let state = client.initialize().await.expect("initialize should succeed");

    // A fresh or existing save both satisfy the documented floor values.
    assert!(state.player_data.level >= 1, "level should be at least 1");
    assert!(
        state.player_data.xp_to_next_level >= 100,
        "xp threshold should be at least the starting 100"
    );
    println!(
        "initialized at level {} with {} history turns",
        state.player_data.level,
        state.history.len()
    );
}

#[tokio::test]
#[ignore]
async fn test_send_message_produces_a_turn() {
    setup();
    if !has_backend() {
        eprintln!("Skipping test: LIFE_RPG_API_URL not set");
        return;
    }

    let client = GameClient::from_env();
    client.initialize().await.expect("initialize should succeed");

    let turn = client
        .send_message("오늘은 30분 동안 책을 읽었어")
        .await
        .expect("send_message should succeed");

    // The GM either narrates or the server answers with a command response;
    // a turn that produces neither is a backend bug.
    assert!(
        !turn.gm_response.is_empty() || turn.command_response.is_some(),
        "turn should carry a GM narration or a command response"
    );
    println!("GM: {}", turn.gm_response);
}

#[tokio::test]
#[ignore]
async fn test_slash_command_round_trip() {
    setup();
    if !has_backend() {
        eprintln!("Skipping test: LIFE_RPG_API_URL not set");
        return;
    }

    let client = GameClient::from_env();
    client.initialize().await.expect("initialize should succeed");

    // The client never parses slash commands; the backend answers them.
    let turn = client
        .send_message("/스탯")
        .await
        .expect("slash commands are plain messages to the client");
    println!(
        "command response: {:?}, gm response: {:?}",
        turn.command_response, turn.gm_response
    );
}

#[tokio::test]
#[ignore]
async fn test_character_creation_rejects_wrong_total() {
    setup();
    if !has_backend() {
        eprintln!("Skipping test: LIFE_RPG_API_URL not set");
        return;
    }

    let client = GameClient::from_env();
    client.reset().await.expect("reset should succeed");
    client.initialize().await.expect("initialize should succeed");

    // All fives sum to 25; bump one stat to break the budget server-side.
    let mut stats = StatBlock::default();
    stats.strength = 10;

    match client.create_character(&stats).await {
        Err(Error::Api { status, detail }) => {
            assert_eq!(status, 400, "wrong total should be a 400");
            println!("server rejected allocation: {detail}");
        }
        Err(other) => panic!("expected an API rejection, got: {other}"),
        Ok(_) => panic!("server accepted a 30-point allocation"),
    }
}

#[tokio::test]
#[ignore]
async fn test_reset_then_initialize_starts_fresh() {
    setup();
    if !has_backend() {
        eprintln!("Skipping test: LIFE_RPG_API_URL not set");
        return;
    }

    let client = GameClient::from_env();
    client.reset().await.expect("reset should succeed");

    let state = client.initialize().await.expect("initialize should succeed");
    assert_eq!(state.player_data.level, 1, "reset should drop back to level 1");
    assert_eq!(state.player_data.gold, 0, "reset should clear gold");
    assert!(
        state.player_data.inventory.is_empty(),
        "reset should empty the inventory"
    );
}
