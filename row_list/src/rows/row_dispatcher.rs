// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{CommonResult, RenderInstruction, RowIndex, RowVariant, ok};

/// Maps one row to its [`RenderInstruction`]. This is a total function over the row
/// family's kinds.
///
/// Implementations write [`Self::render_params`] as a single `match` over the row `enum`
/// w/ one arm per variant and **no** wildcard arm. Adding a variant to the row `enum`
/// then fails to compile until the dispatcher handles it. That is the guarantee that the
/// set of handled kinds equals the set of declared kinds.
///
/// Dispatch is deterministic: equal rows at equal positions produce equal
/// instructions. The only side effects allowed are the ones of the sub-renderers that a
/// dispatcher delegates to (see [`VariantRenderer`]).
pub trait RowDispatcher<R: RowVariant> {
    type Params: Debug + Clone + PartialEq;

    /// The exhaustive `match`. Turns the payload of `row` into render params.
    ///
    /// # Errors
    ///
    /// Returns an error only if a sub-renderer this dispatcher delegates to fails.
    fn render_params(&self, row: &R, index: RowIndex) -> CommonResult<Self::Params>;

    /// Render params plus the row's stable key.
    ///
    /// # Errors
    ///
    /// See [`Self::render_params`].
    fn dispatch(
        &self,
        row: &R,
        index: RowIndex,
    ) -> CommonResult<RenderInstruction<Self::Params>> {
        let params = self.render_params(row, index)?;
        ok!(RenderInstruction::new(row.row_key(), index, params))
    }
}

/// A pluggable renderer for one kind of row (eg: member rows), that a
/// [`RowDispatcher`] delegates to. Implementations may be backed by their own state
/// (eg: a roster of team members). They should fail w/
/// [`crate::RowListError::SubRendererFailed`] when they can't render, which aborts the
/// whole render pass.
pub trait VariantRenderer<Row> {
    type Output;

    /// # Errors
    ///
    /// Returns an error if the row can't be rendered (eg: data the renderer depends on
    /// is missing).
    fn render_variant(&self, index: RowIndex, row: &Row) -> CommonResult<Self::Output>;
}
