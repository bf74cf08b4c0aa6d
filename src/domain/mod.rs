// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core showcase types.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `serde` derives for config and manifest files it depends only
//! on `std`.
//!
//! # Modules
//!
//! - [`showcase`]: Showcase content types ([`View`](showcase::View),
//!   [`ImageRecord`](showcase::ImageRecord), [`SlideRecord`](showcase::SlideRecord),
//!   [`TransitionEffect`](showcase::TransitionEffect))
//! - [`ui`]: UI value objects ([`ZoomFactor`](ui::newtypes::ZoomFactor),
//!   [`AutoplaySpeed`](ui::newtypes::AutoplaySpeed))

pub mod showcase;
pub mod ui;
