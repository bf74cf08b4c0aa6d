// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::showcase;
use crate::showcase::gallery::LoadToken;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Controller messages are
/// forwarded; the others carry results of host-side work.
#[derive(Debug, Clone)]
pub enum Message {
    Showcase(showcase::Message),
    /// A decode requested by the gallery finished.
    ImageDecoded {
        token: LoadToken,
        result: Result<ImageData, Error>,
    },
    /// Frame tick while a slide transition is running.
    AnimationTick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP 47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Showcase manifest to present.
    pub manifest_path: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
}
