// SPDX-License-Identifier: MPL-2.0
//! Showcase content domain types.
//!
//! Views, transition effects, and the per-item records describing what the
//! slideshow and gallery display.

mod types;

pub use types::{
    ImageRecord, ParseTransitionError, ParseViewError, SlideRecord, TransitionEffect, View,
};
