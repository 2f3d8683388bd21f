//! TUI run loop: terminal setup, event handling, draw. Optional runtime integration.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on
//! terminal input; this keeps the UI responsive while a gateway call is in
//! flight.

use std::io;
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc as tokio_mpsc;
use wayfarer_core::{ChatSubmission, SessionEvent};

use crate::runtime_events::apply_session_event;
use crate::state::{Screen, TuiState};
use crate::view;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);
const TICK: Duration = Duration::from_millis(50);

/// Channels connecting the loop to the runtime. All optional so the TUI can
/// also run standalone (Enter then just echoes).
struct RuntimeWiring<'a> {
    event_rx: Option<&'a mut tokio_mpsc::Receiver<SessionEvent>>,
    submission_tx: Option<&'a tokio_mpsc::Sender<ChatSubmission>>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
    new_session_tx: Option<&'a tokio_mpsc::Sender<()>>,
}

/// Raw-mode alternate screen for the lifetime of the value.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    fn leave(&mut self) -> anyhow::Result<()> {
        execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        disable_raw_mode()?;
        Ok(())
    }
}

/// Run the TUI without a runtime: Enter echoes the input as an advisor reply.
pub fn run_tui() -> anyhow::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut state = TuiState::new();
    state.push_trace_line("[log] TUI started (no runtime). Use Ctrl+D for runtime logs.".to_string());

    let wiring = RuntimeWiring {
        event_rx: None,
        submission_tx: None,
        log_rx: None,
        new_session_tx: None,
    };
    let result = run_loop(&mut session.terminal, &mut state, wiring);

    session.leave()?;
    result
}

/// Run the TUI with runtime: receive [SessionEvent] on `event_rx`, send
/// submissions (text + length preference) on Enter via `submission_tx`.
/// If `log_rx` is provided, runtime log lines (tracing) are pushed to the
/// debug traces screen (Ctrl+D). If `new_session_tx` is provided, Ctrl+N
/// signals the runtime to drop the history.
pub fn run_tui_with_runtime(
    mut event_rx: tokio_mpsc::Receiver<SessionEvent>,
    submission_tx: tokio_mpsc::Sender<ChatSubmission>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
    new_session_tx: Option<tokio_mpsc::Sender<()>>,
) -> anyhow::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut state = TuiState::new();
    state.push_trace_line(
        "[log] TUI started with runtime. Runtime logs (Ctrl+D) show tracing output.".to_string(),
    );

    let wiring = RuntimeWiring {
        event_rx: Some(&mut event_rx),
        submission_tx: Some(&submission_tx),
        log_rx,
        new_session_tx: new_session_tx.as_ref(),
    };
    let result = run_loop(&mut session.terminal, &mut state, wiring);

    session.leave()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    mut wiring: RuntimeWiring<'_>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || loop {
        if event::poll(TICK).unwrap_or(false)
            && let Ok(ev) = event::read()
        {
            let _ = key_tx.send(ev);
        }
    });

    loop {
        // Runtime log lines feed the debug traces screen; multi-line payloads
        // are split so scrolling stays per-line.
        if let Some(ref mut rx) = wiring.log_rx {
            while let Ok(chunk) = rx.try_recv() {
                for line in chunk.split('\n') {
                    state.push_trace_line(line.to_string());
                }
            }
        }
        if let Some(ref mut rx) = wiring.event_rx {
            while let Ok(event) = rx.try_recv() {
                apply_session_event(state, event);
            }
        }
        if state.auto_scroll {
            state.scroll = 0;
        }

        if !state.status_permanent
            && let Some(set_at) = state.status_set_at
            && set_at.elapsed() > STATUS_TIMEOUT
        {
            state.status.clear();
            state.status_set_at = None;
            state.needs_redraw = true;
        }

        // Waiting indicator animates, so keep drawing while a turn is in flight.
        if state.needs_redraw || state.is_waiting {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        match key_rx.try_recv() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if handle_key(state, key, &wiring).is_break() {
                    break;
                }
            }
            Ok(Event::Resize(_, _)) => {
                state.cache_dirty = true;
                state.needs_redraw = true;
            }
            Ok(Event::Mouse(mouse)) => handle_mouse(state, mouse),
            Ok(_) => {}
            Err(_) => std::thread::sleep(TICK),
        }
    }
    Ok(())
}

fn handle_key(state: &mut TuiState, key: KeyEvent, wiring: &RuntimeWiring<'_>) -> ControlFlow<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global bindings, then the debug screen, then the main screen.
    match key.code {
        KeyCode::Char('c') if ctrl => return ControlFlow::Break(()),
        KeyCode::Char('q') if state.input_buffer.is_empty() => return ControlFlow::Break(()),
        KeyCode::Char('d') if ctrl => {
            state.screen = match state.screen {
                Screen::Main => Screen::DebugTraces,
                Screen::DebugTraces => Screen::Main,
            };
            state.needs_redraw = true;
            return ControlFlow::Continue(());
        }
        _ => {}
    }

    if state.screen == Screen::DebugTraces {
        match key.code {
            KeyCode::Esc => {
                state.screen = Screen::Main;
                state.needs_redraw = true;
            }
            KeyCode::Up => state.trace_scroll_up(1),
            KeyCode::Down => state.trace_scroll_down(1),
            KeyCode::PageUp => state.trace_scroll_up(10),
            KeyCode::PageDown => state.trace_scroll_down(10),
            _ => {}
        }
        return ControlFlow::Continue(());
    }

    match key.code {
        KeyCode::Char('n') if ctrl => {
            if let Some(tx) = wiring.new_session_tx {
                let _ = tx.try_send(());
                state.push_separator("New session".to_string());
                state.set_status("New session — history cleared");
            }
        }
        KeyCode::Char('u') if ctrl => state.input_clear_line(),
        KeyCode::Char('k') if ctrl => state.input_kill_to_end(),
        KeyCode::Char('y') if ctrl && state.input_buffer.is_empty() => {
            copy_last_reply_to_clipboard(state);
        }
        KeyCode::Enter => submit_input(state, wiring),
        KeyCode::Tab => state.cycle_preference(),
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1),
        KeyCode::PageUp => state.scroll_up(5),
        KeyCode::PageDown => state.scroll_down(5),
        KeyCode::Backspace => state.input_backspace(),
        KeyCode::Delete => state.input_delete(),
        KeyCode::Left => state.input_cursor_left(),
        KeyCode::Right => state.input_cursor_right(),
        KeyCode::Home => state.input_cursor_home(),
        KeyCode::End => state.input_cursor_end(),
        KeyCode::Char(c) => state.input_insert(c),
        _ => {}
    }
    ControlFlow::Continue(())
}

/// Enter: hand the input line to the runtime with the selected length.
/// One turn in flight at a time; submissions while waiting are refused.
fn submit_input(state: &mut TuiState, wiring: &RuntimeWiring<'_>) {
    if state.is_waiting {
        state.set_status("Waiting for the current reply…");
        return;
    }
    let line = state.input_take();
    let text = line.trim();
    if text.is_empty() {
        return;
    }

    let ts = chrono::Local::now().format("%H:%M").to_string();
    state.push_user(text.to_string(), Some(ts));
    match wiring.submission_tx {
        Some(tx) => {
            let _ = tx.try_send(ChatSubmission::new(text, state.preference));
        }
        None => state.push_advisor(format!("You said: {}", text), None),
    }
}

fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    let on_traces = state.screen == Screen::DebugTraces;
    match mouse.kind {
        MouseEventKind::ScrollUp if on_traces => state.trace_scroll_up(3),
        MouseEventKind::ScrollDown if on_traces => state.trace_scroll_down(3),
        MouseEventKind::ScrollUp => state.scroll_up(3),
        MouseEventKind::ScrollDown => state.scroll_down(3),
        _ => {}
    }
}

/// Copy the last advisor reply to the system clipboard (Ctrl+Y when input empty).
fn copy_last_reply_to_clipboard(state: &mut TuiState) {
    let Some(text) = state.last_advisor_text().map(|s| s.to_string()) else {
        return;
    };
    if cli_clipboard::set_contents(text).is_ok() {
        state.set_status("Copied to clipboard");
    }
}
