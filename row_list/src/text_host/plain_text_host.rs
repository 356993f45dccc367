// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{CommonResult, HostBinding, KeyDiff, RenderInstruction, RenderLine, RowKey, ok,
            truncate_from_right};

/// One rendered line, tagged w/ the key of the row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedLine {
    pub key: RowKey,
    pub text: String,
}

/// The output of one pass of [`PlainTextHost`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFragment {
    pub lines: Vec<KeyedLine>,
}

impl TextFragment {
    #[must_use]
    pub fn keys(&self) -> Vec<RowKey> { self.lines.iter().map(|it| it.key.clone()).collect() }
}

/// `<key>\t<text>` per line.
impl Display for TextFragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for line in &self.lines {
            writeln!(f, "{}\t{}", line.key, line.text)?;
        }
        Ok(())
    }
}

/// Renders every instruction as one line of text, at most `width` display columns wide.
///
/// The host remembers the keys of its previous pass, and after each successful pass
/// [`Self::last_diff`] tells what changed, which is what a stateful host would use to
/// keep state for retained rows.
#[derive(Debug, Clone, Default)]
pub struct PlainTextHost {
    pub width: usize,
    previous_keys: Vec<RowKey>,
    last_diff: KeyDiff,
}

impl PlainTextHost {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Key changes between the last two successful passes.
    #[must_use]
    pub fn last_diff(&self) -> &KeyDiff { &self.last_diff }
}

impl<P: RenderLine> HostBinding<P> for PlainTextHost {
    type Fragment = TextFragment;

    fn render<I>(&mut self, instructions: I) -> CommonResult<TextFragment>
    where
        I: IntoIterator<Item = CommonResult<RenderInstruction<P>>>,
    {
        let mut lines = vec![];
        for instruction in instructions {
            // Any failure discards the lines rendered so far.
            let instruction = instruction?;
            let text = instruction.params.render_line();
            lines.push(KeyedLine {
                text: truncate_from_right(&text, self.width).into_owned(),
                key: instruction.key,
            });
        }

        let fragment = TextFragment { lines };
        let next_keys = fragment.keys();
        self.last_diff = KeyDiff::between(&self.previous_keys, &next_keys);
        self.previous_keys = next_keys;

        tracing::debug!(
            message = "rendered text fragment",
            line_count = fragment.lines.len(),
            inserted = self.last_diff.inserted.len(),
            removed = self.last_diff.removed.len(),
            moved = self.last_diff.moved.len()
        );

        ok!(fragment)
    }
}
