// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RowIndex, RowKey};

/// The engine's output unit. `params` are the component specific render parameters
/// copied from the row's payload (or produced by a sub-renderer). They are opaque to
/// the engine and only interpreted by a [`crate::HostBinding`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstruction<P> {
    pub key: RowKey,
    pub index: RowIndex,
    pub params: P,
}

impl<P> RenderInstruction<P> {
    #[must_use]
    pub fn new(key: RowKey, index: RowIndex, params: P) -> Self { Self { key, index, params } }

    /// Transform the params, keeping the key and index.
    #[must_use]
    pub fn map_params<Q>(self, f: impl FnOnce(P) -> Q) -> RenderInstruction<Q> {
        RenderInstruction {
            key: self.key,
            index: self.index,
            params: f(self.params),
        }
    }
}
