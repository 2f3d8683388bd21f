//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]** — Split the screen into header, body, footer.
//! - **[style]** — Palette [crate::theme::Rgb] to ratatui styles.
//! - **[head]** — Header bar with title and status dot.
//! - **[chats]** — Chat transcript rect and scroll helpers.
//! - **[input]** — Bordered input block.
//! - **[selector]** — Fixed three-way length selector line (above the input).
//! - **[shortcut]** — Shortcut hint line (below the input).

mod chats;
mod head;
mod input;
mod selector;
mod shortcut;
mod split;
mod style;

pub use chats::{chat_content_rect, chat_scroll_offset, CHAT_LEFT_INDENT, CHAT_MESSAGE_SPACING};
pub use head::{header_line, render_header, HEADER_STATUS_READY};
pub use input::{block_for_input_bordered, INPUT_ICON, INPUT_PADDING_H};
pub use selector::{selector_inner_rect, selector_line};
pub use shortcut::{shortcut_inner_rect, shortcut_line};
pub use split::{
    main_splits, main_splits_with_padding, vertical_split, MainSplits, FOOTER_HEIGHT, HEADER_HEIGHT,
};
pub use style::{bg, color, fg};
