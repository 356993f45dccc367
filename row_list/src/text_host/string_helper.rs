// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const ELLIPSIS_GLYPH: &str = "…";

/// Display width of `text` in terminal columns. Emoji and CJK take up 2 columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        UnicodeWidthStr::width(text)
    }
}

/// Fit `text` into `max_width` display columns, replacing the tail w/
/// [`ELLIPSIS_GLYPH`] when it doesn't. Never splits a grapheme cluster (eg: an emoji w/
/// a skin tone modifier) in half. Borrows when nothing needs to change.
#[must_use]
pub fn truncate_from_right(text: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(text) <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    // Leave room for the ellipsis (1 col).
    let budget = max_width - 1;

    // ASCII fast path.
    if text.is_ascii() {
        return Cow::Owned(format!("{}{ELLIPSIS_GLYPH}", &text[..budget]));
    }

    let mut acc = String::with_capacity(max_width + ELLIPSIS_GLYPH.len());
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = UnicodeWidthStr::width(grapheme);
        if used + width > budget {
            break;
        }
        used += width;
        acc.push_str(grapheme);
    }
    acc.push_str(ELLIPSIS_GLYPH);
    Cow::Owned(acc)
}
