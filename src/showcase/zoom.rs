// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component for the gallery's main image.

use crate::domain::ui::{ZoomCursor, ZoomFactor};

/// Zoom sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    factor: ZoomFactor,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Multiply by one step.
    ZoomIn,
    /// Divide by one step.
    ZoomOut,
    /// Back to original size.
    Reset,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Zoom level changed; re-apply to the displayed image.
    ZoomChanged {
        factor: ZoomFactor,
        cursor: ZoomCursor,
    },
}

impl State {
    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        self.factor = match msg {
            Message::ZoomIn => self.factor.zoom_in(),
            Message::ZoomOut => self.factor.zoom_out(),
            Message::Reset => ZoomFactor::default(),
        };
        Effect::ZoomChanged {
            factor: self.factor,
            cursor: self.factor.cursor(),
        }
    }

    #[must_use]
    pub fn factor(&self) -> ZoomFactor {
        self.factor
    }

    #[must_use]
    pub fn cursor(&self) -> ZoomCursor {
        self.factor.cursor()
    }
}
