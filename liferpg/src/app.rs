//! Application state for the Life RPG client.
//!
//! `App` owns everything a frame renders from: the chat log, the latest
//! server snapshot of the player, the input line, and whichever overlay is
//! open. Network work happens on the worker task; the app only queues
//! requests and folds the resulting events back into its state, so the
//! visible UI is always a function of the most recent server response.

use std::collections::VecDeque;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::warn;

use liferpg_api::{Error, InitializeResponse, PlayerData, TurnResponse};

use crate::allocation::AllocationModal;
use crate::ui::theme::GameTheme;
use crate::ui::widgets::chat_log::ChatEntry;
use crate::ui::Overlay;
use crate::worker::{ApiEvent, ApiRequest};

/// How many sent messages the input history keeps.
const MAX_INPUT_HISTORY: usize = 100;

/// Rough character width used to estimate wrapped line counts for scrolling.
const ESTIMATED_WIDTH: usize = 60;

/// Rough visible chat height used to estimate the scroll range.
const VISIBLE_HEIGHT: usize = 20;

/// Whether keystrokes edit the input line or drive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Insert,
}

/// Central application state.
pub struct App {
    // Chat log
    chat: Vec<ChatEntry>,
    chat_scroll: usize,
    scroll_locked_to_bottom: bool,

    // Latest server snapshot
    player: PlayerData,
    illustration_url: Option<String>,

    // Input line
    input: String,
    cursor_position: usize, // in chars, not bytes
    input_mode: InputMode,
    input_history: VecDeque<String>,
    history_index: Option<usize>,
    saved_input: String,

    // Overlays
    overlay: Option<Overlay>,
    allocation: AllocationModal,

    // Networking
    request_tx: mpsc::Sender<ApiRequest>,
    event_rx: mpsc::Receiver<ApiEvent>,
    request_in_flight: bool,

    // Presentation
    theme: GameTheme,
    status_message: Option<String>,
    animation_frame: u8,
}

impl App {
    pub fn new(request_tx: mpsc::Sender<ApiRequest>, event_rx: mpsc::Receiver<ApiEvent>) -> Self {
        Self {
            chat: Vec::new(),
            chat_scroll: 0,
            scroll_locked_to_bottom: true,
            player: PlayerData::default(),
            illustration_url: None,
            input: String::new(),
            cursor_position: 0,
            input_mode: InputMode::Insert,
            input_history: VecDeque::new(),
            history_index: None,
            saved_input: String::new(),
            overlay: None,
            allocation: AllocationModal::new(),
            request_tx,
            event_rx,
            request_in_flight: false,
            theme: GameTheme::default(),
            status_message: None,
            animation_frame: 0,
        }
    }

    /// Advance animations. Called on every poll timeout.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    // ========================================================================
    // Networking
    // ========================================================================

    /// Queue a request if the worker is idle. One request is in flight at a
    /// time; further submissions are refused with a status notice until the
    /// worker answers.
    fn begin_request(&mut self, request: ApiRequest) -> bool {
        if self.request_in_flight {
            self.set_status("Waiting for the server...");
            return false;
        }
        match self.request_tx.try_send(request) {
            Ok(()) => {
                self.request_in_flight = true;
                true
            }
            Err(err) => {
                warn!("failed to queue request: {err}");
                let notice = match err {
                    TrySendError::Full(_) => "The game is busy; try again in a moment.",
                    TrySendError::Closed(_) => "Could not reach the network worker.",
                };
                self.set_status(notice);
                false
            }
        }
    }

    /// Ask the server to create or fetch the game state. Announces itself in
    /// the chat log before the request goes out.
    pub fn request_initialize(&mut self) {
        self.push_entry(ChatEntry::system("Initializing game..."));
        self.begin_request(ApiRequest::Initialize);
    }

    /// Send the input line to the GM. Empty or whitespace-only input is
    /// ignored. The player's text is echoed into the chat immediately and is
    /// not rolled back if the request later fails.
    pub fn submit_message(&mut self) {
        let message = self.input.trim().to_string();
        if message.is_empty() {
            return;
        }
        if self.request_in_flight {
            self.set_status("Waiting for the server...");
            return;
        }

        self.remember_input(&message);
        self.push_entry(ChatEntry::player(message.as_str()));
        self.input.clear();
        self.cursor_position = 0;
        self.history_index = None;
        self.saved_input.clear();

        self.begin_request(ApiRequest::SendMessage(message));
    }

    /// Validate the creation draft and submit it. Validation failures show
    /// inline in the modal and never reach the network.
    pub fn submit_allocation(&mut self) {
        match self.allocation.validate() {
            Ok(stats) => {
                self.begin_request(ApiRequest::CreateCharacter(stats));
            }
            Err(message) => self.allocation.set_error(message),
        }
    }

    /// The user confirmed the reset prompt.
    pub fn confirm_reset(&mut self) {
        self.overlay = None;
        self.begin_request(ApiRequest::Reset);
    }

    /// Drain every pending worker event and fold it into the state.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_api_event(event);
        }
    }

    fn handle_api_event(&mut self, event: ApiEvent) {
        self.request_in_flight = false;
        match event {
            ApiEvent::Initialized(state) => self.apply_initialized(state),
            ApiEvent::InitializeFailed(err) => self.apply_initialize_failed(err),
            ApiEvent::Turn(turn) => self.apply_turn(*turn),
            ApiEvent::TurnFailed(err) => self.apply_turn_failed(err),
            ApiEvent::CharacterCreated(player) => self.apply_character_created(*player),
            ApiEvent::CharacterCreationFailed(err) => self.apply_character_creation_failed(err),
            ApiEvent::ResetComplete => self.apply_reset_complete(),
            ApiEvent::ResetFailed(err) => self.apply_reset_failed(err),
        }
    }

    // ========================================================================
    // Applying server responses
    // ========================================================================

    fn apply_initialized(&mut self, state: InitializeResponse) {
        for entry in state.history {
            let text = entry.text();
            let chat_entry = match entry.role.as_str() {
                "user" => ChatEntry::player(text),
                "model" => ChatEntry::gm(text),
                _ => ChatEntry::system(text),
            };
            self.push_entry(chat_entry);
        }
        self.player = state.player_data;
        self.illustration_url = None;
        self.push_entry(ChatEntry::system("Game initialized. Welcome to Life RPG!"));
        self.clear_status();
    }

    fn apply_initialize_failed(&mut self, err: Error) {
        self.push_entry(ChatEntry::error(format!("Error initializing game: {err}")));
        self.clear_status();
    }

    /// Append everything one turn produced, in the order the server lists
    /// it: command response, GM narration, quest updates, achievements. The
    /// panels are then replaced wholesale from the same response.
    fn apply_turn(&mut self, turn: TurnResponse) {
        if let Some(command) = turn.command_response {
            if !command.is_empty() {
                self.push_entry(ChatEntry::system(command));
            }
        }
        if !turn.gm_response.is_empty() {
            self.push_entry(ChatEntry::gm(turn.gm_response));
        }
        for update in turn.quest_updates {
            self.push_entry(ChatEntry::system(update));
        }
        for name in turn.new_achievements {
            self.push_entry(ChatEntry::system(format!("Achievement unlocked: {name}!")));
        }
        self.player = turn.player_data;
        self.illustration_url = turn.image_url;
        self.clear_status();
    }

    fn apply_turn_failed(&mut self, err: Error) {
        self.push_entry(ChatEntry::error(format!("Error: {}", err.user_message())));
        self.clear_status();
    }

    /// Creation refreshes the stats panel only; inventory and quests keep
    /// their last snapshot until the next full update.
    fn apply_character_created(&mut self, player: PlayerData) {
        self.player.level = player.level;
        self.player.xp = player.xp;
        self.player.xp_to_next_level = player.xp_to_next_level;
        self.player.gold = player.gold;
        self.player.stat_points = player.stat_points;
        self.player.stats = player.stats;
        if self.overlay == Some(Overlay::CreateCharacter) {
            self.overlay = None;
        }
        self.push_entry(ChatEntry::system("Character stats successfully set!"));
        self.clear_status();
    }

    fn apply_character_creation_failed(&mut self, err: Error) {
        self.allocation.set_error(err.user_message());
    }

    /// A confirmed reset empties the chat, announces itself, and re-runs
    /// initialization from scratch.
    fn apply_reset_complete(&mut self) {
        self.chat.clear();
        self.chat_scroll = 0;
        self.scroll_locked_to_bottom = true;
        self.illustration_url = None;
        self.push_entry(ChatEntry::system("Game has been reset."));
        self.request_initialize();
    }

    fn apply_reset_failed(&mut self, err: Error) {
        self.push_entry(ChatEntry::error(format!(
            "Error resetting game: {}",
            err.user_message()
        )));
        self.clear_status();
    }

    // ========================================================================
    // Chat log
    // ========================================================================

    fn push_entry(&mut self, entry: ChatEntry) {
        self.chat.push(entry);
        if self.scroll_locked_to_bottom {
            self.chat_scroll = self.estimate_max_scroll();
        }
    }

    /// Rough upper bound for the chat scroll offset. The widget clamps the
    /// real value against the actual wrapped line count at render time.
    fn estimate_max_scroll(&self) -> usize {
        let total_lines: usize = self
            .chat
            .iter()
            .map(|entry| entry.text.chars().count() / ESTIMATED_WIDTH + 2)
            .sum();
        total_lines.saturating_sub(VISIBLE_HEIGHT)
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.chat_scroll = self.chat_scroll.saturating_sub(amount);
        self.scroll_locked_to_bottom = false;
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max = self.estimate_max_scroll();
        self.chat_scroll = (self.chat_scroll + amount).min(max);
        if self.chat_scroll >= max {
            self.scroll_locked_to_bottom = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.chat_scroll = 0;
        self.scroll_locked_to_bottom = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.chat_scroll = self.estimate_max_scroll();
        self.scroll_locked_to_bottom = true;
    }

    // ========================================================================
    // Input editing
    // ========================================================================

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let index = self.byte_index();
        self.input.insert(index, c);
        self.cursor_position += 1;
    }

    /// Delete the char before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let index = self.byte_index();
        self.input.remove(index);
    }

    /// Delete the char under the cursor.
    pub fn delete_char_forward(&mut self) {
        if self.cursor_position >= self.input.chars().count() {
            return;
        }
        let index = self.byte_index();
        self.input.remove(index);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count());
    }

    pub fn move_cursor_start(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input.chars().count();
    }

    // ========================================================================
    // Input history
    // ========================================================================

    fn remember_input(&mut self, message: &str) {
        if self.input_history.front().map(String::as_str) == Some(message) {
            return;
        }
        self.input_history.push_front(message.to_string());
        self.input_history.truncate(MAX_INPUT_HISTORY);
    }

    /// Step back through previously sent messages.
    pub fn history_prev(&mut self) {
        if self.input_history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => {
                self.saved_input = self.input.clone();
                0
            }
            Some(i) if i + 1 < self.input_history.len() => i + 1,
            Some(i) => i,
        };
        self.history_index = Some(index);
        self.input = self.input_history[index].clone();
        self.cursor_position = self.input.chars().count();
    }

    /// Step forward again, restoring the unsent draft at the end.
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.history_index = None;
                self.input = std::mem::take(&mut self.saved_input);
                self.cursor_position = self.input.chars().count();
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                self.input = self.input_history[i - 1].clone();
                self.cursor_position = self.input.chars().count();
            }
        }
    }

    // ========================================================================
    // Modes and overlays
    // ========================================================================

    pub fn enter_insert_mode(&mut self) {
        self.input_mode = InputMode::Insert;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn open_help(&mut self) {
        self.overlay = Some(Overlay::Help);
    }

    /// Open the creation modal with a fresh draft. Nothing persists from
    /// earlier openings.
    pub fn open_character_creation(&mut self) {
        self.allocation = AllocationModal::new();
        self.overlay = Some(Overlay::CreateCharacter);
    }

    pub fn open_reset_confirm(&mut self) {
        self.overlay = Some(Overlay::ConfirmReset);
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    // ========================================================================
    // Status line
    // ========================================================================

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn chat(&self) -> &[ChatEntry] {
        &self.chat
    }

    pub fn chat_scroll(&self) -> usize {
        self.chat_scroll
    }

    pub fn player(&self) -> &PlayerData {
        &self.player
    }

    pub fn illustration_url(&self) -> Option<&str> {
        self.illustration_url.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn allocation(&self) -> &AllocationModal {
        &self.allocation
    }

    pub fn allocation_mut(&mut self) -> &mut AllocationModal {
        &mut self.allocation
    }

    pub fn theme(&self) -> &GameTheme {
        &self.theme
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn request_in_flight(&self) -> bool {
        self.request_in_flight
    }

    pub fn animation_frame(&self) -> u8 {
        self.animation_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::chat_log::EntryKind;
    use liferpg_api::{HistoryEntry, InventoryItem, Stat, StatBlock};

    fn test_app() -> (App, mpsc::Receiver<ApiRequest>, mpsc::Sender<ApiEvent>) {
        let (request_tx, request_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(32);
        (App::new(request_tx, event_rx), request_rx, event_tx)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    fn api_error(status: u16, detail: &str) -> Error {
        Error::Api {
            status,
            detail: detail.to_string(),
        }
    }

    fn turn_with_player(player: PlayerData) -> ApiEvent {
        ApiEvent::Turn(Box::new(TurnResponse {
            player_data: player,
            ..TurnResponse::default()
        }))
    }

    #[test]
    fn whitespace_message_is_not_sent() {
        let (mut app, mut request_rx, _event_tx) = test_app();
        type_str(&mut app, "   ");
        app.submit_message();

        assert!(app.chat().is_empty());
        assert!(request_rx.try_recv().is_err());
        assert!(!app.request_in_flight());
    }

    #[test]
    fn submit_echoes_then_queues_request() {
        let (mut app, mut request_rx, _event_tx) = test_app();
        type_str(&mut app, "오늘은 책을 읽었어");
        app.submit_message();

        assert_eq!(app.chat().len(), 1);
        assert_eq!(app.chat()[0], ChatEntry::player("오늘은 책을 읽었어"));
        assert!(app.input().is_empty());
        assert!(app.request_in_flight());
        match request_rx.try_recv() {
            Ok(ApiRequest::SendMessage(message)) => assert_eq!(message, "오늘은 책을 읽었어"),
            other => panic!("expected SendMessage, got {other:?}"),
        }
    }

    #[test]
    fn second_submit_blocked_while_request_in_flight() {
        let (mut app, mut request_rx, _event_tx) = test_app();
        type_str(&mut app, "first");
        app.submit_message();
        type_str(&mut app, "second");
        app.submit_message();

        // Only the first message was echoed and queued.
        assert_eq!(app.chat().len(), 1);
        assert!(request_rx.try_recv().is_ok());
        assert!(request_rx.try_recv().is_err());
        assert_eq!(app.status_message(), Some("Waiting for the server..."));
        assert_eq!(app.input(), "second");
    }

    #[test]
    fn turn_entries_append_in_server_order() {
        let (mut app, _request_rx, _event_tx) = test_app();
        let player = PlayerData {
            gold: 120,
            ..PlayerData::default()
        };
        app.handle_api_event(ApiEvent::Turn(Box::new(TurnResponse {
            command_response: Some("[스탯] 힘 5".to_string()),
            gm_response: "The GM nods.".to_string(),
            quest_updates: vec!["Quest complete: Morning run".to_string()],
            new_achievements: vec!["First Steps".to_string()],
            player_data: player,
            image_url: Some("https://example.com/sword.png".to_string()),
        })));

        let kinds: Vec<EntryKind> = app.chat().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::System,
                EntryKind::Gm,
                EntryKind::System,
                EntryKind::System
            ]
        );
        assert_eq!(app.chat()[3].text, "Achievement unlocked: First Steps!");
        assert_eq!(app.player().gold, 120);
        assert_eq!(app.illustration_url(), Some("https://example.com/sword.png"));
        assert!(!app.request_in_flight());
    }

    #[test]
    fn empty_turn_fields_produce_no_entries() {
        let (mut app, _request_rx, _event_tx) = test_app();
        app.handle_api_event(ApiEvent::Turn(Box::new(TurnResponse::default())));
        assert!(app.chat().is_empty());
    }

    #[test]
    fn failed_turn_appends_exactly_one_error_entry() {
        let (mut app, _request_rx, _event_tx) = test_app();
        type_str(&mut app, "hello");
        app.submit_message();
        app.handle_api_event(ApiEvent::TurnFailed(api_error(500, "boom")));

        let errors: Vec<&ChatEntry> = app
            .chat()
            .iter()
            .filter(|e| e.kind == EntryKind::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].text, "Error: boom");
        // The optimistic echo is not rolled back.
        assert_eq!(app.chat()[0], ChatEntry::player("hello"));
        assert!(!app.request_in_flight());
    }

    #[test]
    fn initialize_hydrates_history_and_player() {
        let (mut app, mut request_rx, _event_tx) = test_app();
        app.request_initialize();
        assert_eq!(app.chat()[0], ChatEntry::system("Initializing game..."));
        assert!(matches!(request_rx.try_recv(), Ok(ApiRequest::Initialize)));

        let player = PlayerData {
            level: 3,
            ..PlayerData::default()
        };
        app.handle_api_event(ApiEvent::Initialized(InitializeResponse {
            player_data: player,
            history: vec![
                HistoryEntry {
                    role: "user".to_string(),
                    parts: vec!["안녕".to_string()],
                },
                HistoryEntry {
                    role: "model".to_string(),
                    parts: vec!["Welcome back.".to_string(), "Your quest awaits.".to_string()],
                },
            ],
        }));

        assert_eq!(app.chat()[1], ChatEntry::player("안녕"));
        assert_eq!(
            app.chat()[2],
            ChatEntry::gm("Welcome back.\nYour quest awaits.")
        );
        assert_eq!(
            app.chat()[3],
            ChatEntry::system("Game initialized. Welcome to Life RPG!")
        );
        assert_eq!(app.player().level, 3);
    }

    #[test]
    fn initialize_failure_reports_error_and_keeps_defaults() {
        let (mut app, _request_rx, _event_tx) = test_app();
        app.request_initialize();
        app.handle_api_event(ApiEvent::InitializeFailed(api_error(500, "down")));

        let last = app.chat().last().unwrap();
        assert_eq!(last.kind, EntryKind::Error);
        assert_eq!(last.text, "Error initializing game: API error (status 500): down");
        assert_eq!(app.player(), &PlayerData::default());
    }

    #[test]
    fn reset_clears_chat_then_reinitializes() {
        let (mut app, mut request_rx, _event_tx) = test_app();
        type_str(&mut app, "old message");
        app.submit_message();
        request_rx.try_recv().ok();
        app.handle_api_event(turn_with_player(PlayerData::default()));
        assert!(!app.chat().is_empty());

        app.open_reset_confirm();
        app.confirm_reset();
        assert!(app.overlay().is_none());
        assert!(matches!(request_rx.try_recv(), Ok(ApiRequest::Reset)));

        app.handle_api_event(ApiEvent::ResetComplete);
        assert_eq!(
            app.chat(),
            [
                ChatEntry::system("Game has been reset."),
                ChatEntry::system("Initializing game..."),
            ]
        );
        assert!(matches!(request_rx.try_recv(), Ok(ApiRequest::Initialize)));
        assert!(app.request_in_flight());
        assert!(app.illustration_url().is_none());
    }

    #[test]
    fn reset_failure_leaves_chat_intact() {
        let (mut app, mut request_rx, _event_tx) = test_app();
        type_str(&mut app, "precious history");
        app.submit_message();
        request_rx.try_recv().ok();
        app.handle_api_event(turn_with_player(PlayerData::default()));

        let before = app.chat().len();
        app.confirm_reset();
        app.handle_api_event(ApiEvent::ResetFailed(api_error(500, "boom")));

        assert_eq!(app.chat().len(), before + 1);
        assert_eq!(app.chat().last().unwrap().text, "Error resetting game: boom");
        assert_eq!(app.chat()[0], ChatEntry::player("precious history"));
    }

    #[test]
    fn character_creation_success_refreshes_stats_only() {
        let (mut app, _request_rx, _event_tx) = test_app();
        let player = PlayerData {
            inventory: vec![InventoryItem::Plain("끈기의 물약".to_string())],
            ..PlayerData::default()
        };
        app.handle_api_event(turn_with_player(player));

        app.open_character_creation();
        let mut created = PlayerData::default();
        created.stats.set(Stat::Strength, 10);
        created.stat_points = 0;
        app.handle_api_event(ApiEvent::CharacterCreated(Box::new(created)));

        assert_eq!(app.player().stats.get(Stat::Strength), 10);
        // The inventory snapshot from the last turn survives.
        assert_eq!(app.player().inventory.len(), 1);
        assert!(app.overlay().is_none());
        assert_eq!(
            app.chat().last(),
            Some(&ChatEntry::system("Character stats successfully set!"))
        );
    }

    #[test]
    fn character_creation_rejection_shows_inline() {
        let (mut app, _request_rx, _event_tx) = test_app();
        app.open_character_creation();
        app.handle_api_event(ApiEvent::CharacterCreationFailed(api_error(
            400,
            "이미 캐릭터 생성이 완료되었습니다.",
        )));

        assert_eq!(app.overlay(), Some(Overlay::CreateCharacter));
        assert_eq!(
            app.allocation().error(),
            Some("이미 캐릭터 생성이 완료되었습니다.")
        );
    }

    #[test]
    fn invalid_allocation_never_reaches_network() {
        let (mut app, mut request_rx, _event_tx) = test_app();
        app.open_character_creation();
        app.allocation_mut()
            .handle_key(crossterm::event::KeyEvent::from(
                crossterm::event::KeyCode::Char('+'),
            ));
        app.submit_allocation();

        assert!(request_rx.try_recv().is_err());
        assert_eq!(
            app.allocation().error(),
            Some("Total points must be exactly 25. Current: 26")
        );
        assert_eq!(app.overlay(), Some(Overlay::CreateCharacter));
    }

    #[test]
    fn valid_allocation_is_submitted() {
        let (mut app, mut request_rx, _event_tx) = test_app();
        app.open_character_creation();
        app.submit_allocation();

        match request_rx.try_recv() {
            Ok(ApiRequest::CreateCharacter(stats)) => assert_eq!(stats, StatBlock::default()),
            other => panic!("expected CreateCharacter, got {other:?}"),
        }
        // The modal stays open until the server confirms.
        assert_eq!(app.overlay(), Some(Overlay::CreateCharacter));
    }

    #[test]
    fn disjoint_panel_updates_fully_replace() {
        let (mut app, _request_rx, _event_tx) = test_app();
        let first = PlayerData {
            inventory: vec![InventoryItem::Plain("sword".to_string())],
            ..PlayerData::default()
        };
        app.handle_api_event(turn_with_player(first));

        let second = PlayerData {
            inventory: vec![InventoryItem::Plain("shield".to_string())],
            ..PlayerData::default()
        };
        app.handle_api_event(turn_with_player(second));

        assert_eq!(
            app.player().inventory,
            vec![InventoryItem::Plain("shield".to_string())]
        );
    }

    #[test]
    fn input_history_walks_back_and_restores_draft() {
        let (mut app, mut request_rx, _event_tx) = test_app();
        type_str(&mut app, "first");
        app.submit_message();
        request_rx.try_recv().ok();
        app.handle_api_event(turn_with_player(PlayerData::default()));
        type_str(&mut app, "second");
        app.submit_message();

        type_str(&mut app, "dra");
        app.history_prev();
        assert_eq!(app.input(), "second");
        app.history_prev();
        assert_eq!(app.input(), "first");
        app.history_next();
        assert_eq!(app.input(), "second");
        app.history_next();
        assert_eq!(app.input(), "dra");
    }

    #[test]
    fn input_editing_is_char_based() {
        let (mut app, _request_rx, _event_tx) = test_app();
        type_str(&mut app, "안녕하세요");
        assert_eq!(app.cursor_position(), 5);

        app.delete_char();
        assert_eq!(app.input(), "안녕하세");

        app.move_cursor_left();
        app.move_cursor_left();
        app.insert_char('x');
        assert_eq!(app.input(), "안녕x하세");

        app.move_cursor_end();
        app.delete_char_forward();
        assert_eq!(app.input(), "안녕x하세");
        app.move_cursor_start();
        app.delete_char_forward();
        assert_eq!(app.input(), "녕x하세");
    }

    #[test]
    fn scrolling_unlocks_and_relocks_at_bottom() {
        let (mut app, _request_rx, _event_tx) = test_app();
        for i in 0..40 {
            app.push_entry(ChatEntry::system(format!("line {i}")));
        }
        assert!(app.scroll_locked_to_bottom);
        let bottom = app.chat_scroll();
        assert!(bottom > 0);

        app.scroll_up(5);
        assert!(!app.scroll_locked_to_bottom);
        assert_eq!(app.chat_scroll(), bottom - 5);

        app.scroll_down(5);
        assert!(app.scroll_locked_to_bottom);
        assert_eq!(app.chat_scroll(), bottom);
    }

    #[test]
    fn new_entries_follow_when_locked_to_bottom() {
        let (mut app, _request_rx, _event_tx) = test_app();
        for i in 0..40 {
            app.push_entry(ChatEntry::system(format!("line {i}")));
        }
        let before = app.chat_scroll();
        app.push_entry(ChatEntry::system("one more"));
        assert!(app.chat_scroll() > before);
    }
}
