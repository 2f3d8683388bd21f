//! TUI state: chat items, input buffer, scroll, selected length, theme.
//!
//! [TuiState] holds everything the view needs to render. [ChatItem] wraps
//! message types from [crate::messages] so the transcript is one ordered list.

use wayfarer_core::LengthPreference;

use crate::messages::{advisor::AdvisorMessage, error::ErrorMessage, user::UserMessage};
use crate::theme::{Appearance, WayfarerPalette};

/// Which screen is currently shown (main chat vs debug traces).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    DebugTraces,
}

/// Max trace lines to keep (older lines dropped).
const MAX_TRACE_LINES: usize = 2000;

/// One item in the chat: user, advisor, error, or separator.
#[derive(Debug, Clone)]
pub enum ChatItem {
    User(UserMessage),
    Advisor(AdvisorMessage),
    Error(ErrorMessage),
    Separator(String),
}

/// TUI application state.
#[derive(Debug)]
pub struct TuiState {
    /// Ordered list of chat items to display.
    pub messages: Vec<ChatItem>,
    /// Current input line (footer).
    pub input_buffer: String,
    /// Cursor position within input_buffer, as a byte offset on a char boundary.
    pub input_cursor: usize,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll: usize,
    /// Follow new content at the bottom; cleared when the user scrolls up.
    pub auto_scroll: bool,
    /// Theme palette (dark/light).
    pub palette: WayfarerPalette,
    /// Currently selected reply-length preference (Tab cycles).
    pub preference: LengthPreference,
    /// Status text for the header's right side.
    pub status: String,
    /// True from ReplyStart until TurnEnd; the input is held while set.
    pub is_waiting: bool,
    /// Incremented each run_loop iteration for cursor blink.
    pub frame_count: u64,
    /// Draw on the next loop iteration; cleared after drawing.
    pub needs_redraw: bool,
    /// Rendered transcript lines; rebuilt when [Self::cache_dirty].
    pub cached_lines: Vec<ratatui::text::Line<'static>>,
    /// Set by any transcript or size change.
    pub cache_dirty: bool,
    /// When the current transient status was set (auto-clears after a timeout).
    pub status_set_at: Option<std::time::Instant>,
    /// Never auto-clear the status.
    pub status_permanent: bool,
    /// Current screen (main chat or debug traces).
    pub screen: Screen,
    /// Debug trace lines (runtime logs). Newest at end.
    pub trace_lines: Vec<String>,
    /// Lines scrolled up in the debug trace view.
    pub trace_scroll: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            scroll: 0,
            auto_scroll: true,
            palette: WayfarerPalette::travel_dark(),
            preference: LengthPreference::default(),
            status: String::new(),
            is_waiting: false,
            frame_count: 0,
            needs_redraw: true,
            cached_lines: Vec::new(),
            cache_dirty: true,
            status_set_at: None,
            status_permanent: false,
            screen: Screen::Main,
            trace_lines: Vec::new(),
            trace_scroll: 0,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(appearance: Appearance) -> Self {
        Self {
            palette: WayfarerPalette::for_appearance(appearance),
            ..Self::default()
        }
    }

    // ── Transcript ────────────────────────────────────────────────

    fn push_item(&mut self, item: ChatItem) {
        self.messages.push(item);
        self.cache_dirty = true;
        self.needs_redraw = true;
        if self.auto_scroll {
            self.scroll = 0;
        }
    }

    pub fn push_user(&mut self, text: String, timestamp: Option<String>) {
        self.push_item(ChatItem::User(UserMessage { text, timestamp }));
    }

    pub fn push_advisor(&mut self, text: String, timestamp: Option<String>) {
        self.push_item(ChatItem::Advisor(AdvisorMessage { text, timestamp }));
    }

    pub fn push_error(&mut self, text: String, timestamp: Option<String>) {
        self.push_item(ChatItem::Error(ErrorMessage { text, timestamp }));
    }

    /// Session separator, e.g. "New session".
    pub fn push_separator(&mut self, label: String) {
        self.push_item(ChatItem::Separator(label));
    }

    /// Last advisor reply text, if any (for Ctrl+Y copy).
    pub fn last_advisor_text(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|m| match m {
            ChatItem::Advisor(msg) => Some(msg.text.as_str()),
            _ => None,
        })
    }

    // ── Selector & status ─────────────────────────────────────────

    /// Advance the length selector to the next option (Tab).
    pub fn cycle_preference(&mut self) {
        self.preference = self.preference.next();
        self.needs_redraw = true;
    }

    /// Set a transient status message (auto-clears).
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_set_at = Some(std::time::Instant::now());
        self.status_permanent = false;
        self.needs_redraw = true;
    }

    // ── Input editing ─────────────────────────────────────────────
    //
    // The cursor is a byte offset that must stay on a char boundary;
    // these two helpers give the neighboring boundaries.

    fn char_start_before_cursor(&self) -> usize {
        self.input_buffer[..self.input_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn char_end_after_cursor(&self) -> usize {
        self.input_buffer[self.input_cursor..]
            .chars()
            .next()
            .map(|c| self.input_cursor + c.len_utf8())
            .unwrap_or(self.input_cursor)
    }

    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Delete the character before the cursor.
    pub fn input_backspace(&mut self) {
        if self.input_cursor > 0 {
            let start = self.char_start_before_cursor();
            self.input_buffer.drain(start..self.input_cursor);
            self.input_cursor = start;
            self.needs_redraw = true;
        }
    }

    /// Forward-delete the character at the cursor.
    pub fn input_delete(&mut self) {
        let end = self.char_end_after_cursor();
        if end > self.input_cursor {
            self.input_buffer.drain(self.input_cursor..end);
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = self.char_start_before_cursor();
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_right(&mut self) {
        self.input_cursor = self.char_end_after_cursor();
        self.needs_redraw = true;
    }

    pub fn input_cursor_home(&mut self) {
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Cursor to end of input; on an empty line this also snaps the
    /// transcript back to the bottom.
    pub fn input_cursor_end(&mut self) {
        self.input_cursor = self.input_buffer.len();
        if self.input_buffer.is_empty() {
            self.auto_scroll = true;
            self.scroll = 0;
        }
        self.needs_redraw = true;
    }

    /// Clear the whole line (Ctrl+U).
    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Delete from cursor to end of line (Ctrl+K).
    pub fn input_kill_to_end(&mut self) {
        self.input_buffer.truncate(self.input_cursor);
        self.needs_redraw = true;
    }

    /// Take the current line for submission, leaving the input empty.
    pub fn input_take(&mut self) -> String {
        self.input_cursor = 0;
        self.needs_redraw = true;
        std::mem::take(&mut self.input_buffer)
    }

    // ── Scrolling ─────────────────────────────────────────────────

    /// Scroll up (increase offset); disables auto_scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down (decrease offset); re-enables auto_scroll at the bottom.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }

    // ── Debug traces ──────────────────────────────────────────────

    /// Append a line to the debug trace buffer (Ctrl+D screen).
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if let Some(excess) = self.trace_lines.len().checked_sub(MAX_TRACE_LINES)
            && excess > 0
        {
            self.trace_lines.drain(..excess);
        }
        self.needs_redraw = true;
    }

    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }
}
