// SPDX-License-Identifier: MPL-2.0
//! Framework-independent showcase core.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The controller orchestrates these sub-components and talks to the host
//! only through [`controller::Effect`]s.
//!
//! ## Architecture
//!
//! ```text
//! controller.rs (orchestrator)
//!     ├── view_switch - Active view and selector marker
//!     ├── slideshow   - Slide index, autoplay timer token, transition
//!     ├── gallery     - Image selection and load-and-swap pipeline
//!     ├── zoom        - Zoom factor of the main image
//!     ├── overlay     - Fullscreen mirror of the displayed image
//!     └── input       - Key and swipe resolution
//! ```

pub mod controller;
pub mod gallery;
pub mod input;
pub mod overlay;
pub mod slideshow;
pub mod view_switch;
pub mod zoom;

pub use controller::{Controller, ControllerState, Effect, Message, Preferences, Setup};
