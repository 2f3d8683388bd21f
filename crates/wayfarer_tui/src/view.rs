//! TUI view: header (fixed top), scrollable chat body, selector + input +
//! shortcut (fixed bottom).

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::layouts::{
    bg, block_for_input_bordered, chat_content_rect, chat_scroll_offset, fg,
    main_splits_with_padding, render_header, selector_inner_rect, selector_line,
    shortcut_inner_rect, shortcut_line, vertical_split, CHAT_MESSAGE_SPACING,
    HEADER_STATUS_READY, INPUT_ICON,
};
use crate::messages::{advisor, error, user};
use crate::state::{ChatItem, Screen, TuiState};

/// Draw the full TUI: main chat or debug traces depending on state.screen.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    match state.screen {
        Screen::DebugTraces => draw_debug_traces(frame, state, area),
        Screen::Main => draw_main(frame, state, area),
    }
}

/// Runtime logs screen: scrollable list of tracing output. Ctrl+D to close.
fn draw_debug_traces(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let palette = &state.palette;
    let block = Block::default()
        .title(" Runtime logs (Ctrl+D to close) ")
        .borders(Borders::ALL)
        .border_style(fg(palette.border))
        .style(bg(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height = state.trace_lines.len();
    let viewport_height = inner.height as usize;
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);
    let offset = max_scroll - state.trace_scroll;

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(offset)
        .take(viewport_height)
        .map(|s| Line::from(Span::styled(s.clone(), fg(palette.text_muted))))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Main chat view: header, scrollable chat body, selector + input + shortcut fixed bottom.
fn draw_main(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let splits = main_splits_with_padding(area);
    let palette = state.palette.clone();

    frame.render_widget(Block::default().style(bg(palette.background)), area);

    // ---- Header (fixed at top) ----
    let status = if state.status.is_empty() {
        HEADER_STATUS_READY
    } else {
        state.status.as_str()
    };
    let lowered = state.status.to_lowercase();
    let has_error = lowered.contains("error") || lowered.contains("failed");
    render_header(
        frame,
        splits.header,
        &palette,
        wayfarer_constant::app::DISPLAY_NAME,
        status,
        state.is_waiting,
        has_error,
    );

    // ---- Body: scrollable chat ----
    let chat = chat_content_rect(splits.body);
    let width = chat.width as usize;
    let viewport_height = chat.height as usize;

    let spacer = Line::from("");

    let mut all_lines: Vec<Line> = if state.cache_dirty {
        let mut lines: Vec<Line> = Vec::new();
        for item in &state.messages {
            if !lines.is_empty() {
                for _ in 0..CHAT_MESSAGE_SPACING {
                    lines.push(spacer.clone());
                }
            }
            match item {
                ChatItem::User(m) => {
                    lines.extend(user::user_message_lines(m, &palette, width));
                }
                ChatItem::Advisor(m) => {
                    lines.extend(advisor::advisor_message_lines(m, &palette, width));
                }
                ChatItem::Error(m) => {
                    lines.extend(error::error_message_lines(m, &palette, width));
                }
                ChatItem::Separator(label) => {
                    lines.push(Line::from(Span::styled(
                        format!("── {} ──", label),
                        fg(palette.text_muted),
                    )));
                }
            }
        }
        state.cached_lines = lines.clone();
        state.cache_dirty = false;
        lines
    } else {
        state.cached_lines.clone()
    };

    // Waiting indicator while the gateway call is in flight.
    if state.is_waiting {
        if !all_lines.is_empty() {
            all_lines.push(spacer.clone());
        }
        let dots = match (state.frame_count / 3) % 3 {
            0 => "·",
            1 => "··",
            _ => "···",
        };
        all_lines.push(Line::from(Span::styled(
            format!("{} the advisor is thinking", dots),
            fg(palette.text_muted),
        )));
    }

    let content_height = all_lines.len();
    state.scroll = chat_scroll_offset(state.scroll, content_height, viewport_height);
    let offset_top = content_height
        .saturating_sub(viewport_height)
        .saturating_sub(state.scroll);

    let paragraph = Paragraph::new(all_lines).scroll((offset_top as u16, 0));
    frame.render_widget(paragraph, chat);

    // ---- Footer: selector, input, shortcut ----
    let (selector_area, rest) = vertical_split(splits.footer, 1);
    let (input_area, shortcut_area) = vertical_split(rest, 3);

    frame.render_widget(
        Paragraph::new(selector_line(&palette, state.preference)),
        selector_inner_rect(selector_area),
    );

    let input_block = block_for_input_bordered(&palette, !state.is_waiting);
    let input_inner = input_block.inner(input_area);
    frame.render_widget(input_block, input_area);
    let cursor_visible = (state.frame_count / 5) % 2 == 0 && !state.is_waiting;
    frame.render_widget(
        Paragraph::new(input_line(state, cursor_visible, input_inner.width as usize)),
        input_inner,
    );

    frame.render_widget(
        Paragraph::new(shortcut_line(
            &palette,
            state.is_waiting,
            !state.input_buffer.is_empty(),
        )),
        shortcut_inner_rect(shortcut_area),
    );
}

/// Build the one-line input content: icon, text (tail-windowed so the cursor
/// stays visible), blinking block cursor.
fn input_line(state: &TuiState, cursor_visible: bool, avail_width: usize) -> Line<'static> {
    let palette = &state.palette;
    let mut spans = vec![Span::styled(INPUT_ICON, fg(palette.accent))];

    if state.input_buffer.is_empty() {
        if cursor_visible {
            spans.push(Span::styled("█", fg(palette.text)));
        }
        spans.push(Span::styled(
            wayfarer_constant::app::INPUT_PLACEHOLDER,
            fg(palette.text_placeholder),
        ));
        return Line::from(spans);
    }

    let before: String = state.input_buffer[..state.input_cursor].to_string();
    let after: String = state.input_buffer[state.input_cursor..].to_string();

    // Window the head so the cursor never falls off the right edge.
    let text_budget = avail_width.saturating_sub(INPUT_ICON.len() + 1).max(1);
    let before_chars: Vec<char> = before.chars().collect();
    let visible_before: String = if before_chars.len() > text_budget {
        before_chars[before_chars.len() - text_budget..].iter().collect()
    } else {
        before
    };

    spans.push(Span::styled(visible_before, fg(palette.text)));

    let mut rest = after.chars();
    let cursor_char = rest.next();
    if cursor_visible {
        spans.push(Span::styled(
            cursor_char.unwrap_or('█').to_string(),
            fg(palette.text).add_modifier(ratatui::style::Modifier::REVERSED),
        ));
    } else if let Some(c) = cursor_char {
        spans.push(Span::styled(c.to_string(), fg(palette.text)));
    }
    spans.push(Span::styled(rest.collect::<String>(), fg(palette.text)));

    Line::from(spans)
}
