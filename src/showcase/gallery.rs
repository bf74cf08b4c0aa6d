// SPDX-License-Identifier: MPL-2.0
//! Gallery sub-component: image selection and the load-and-swap pipeline.
//!
//! Selecting an image issues a [`LoadRequest`] tagged with a fresh
//! [`LoadToken`]. The host decodes the resource and reports back with
//! [`Message::LoadFinished`]. Only the completion matching the latest request
//! is applied; older ones are discarded so a slow decode cannot overwrite a
//! newer selection.
//!
//! The committed index only moves on a successful decode.

use crate::domain::showcase::ImageRecord;
use crate::error::Error;
use std::path::PathBuf;
use std::time::Duration;

/// Opacity of the displayed image while a replacement is loading.
pub const FADE_OPACITY: f32 = 0.5;

/// Scale of the displayed image while a replacement is loading.
pub const FADE_SCALE: f32 = 0.98;

/// Delay between a successful swap and restoring full opacity and scale.
pub const RESTORE_DELAY: Duration = Duration::from_millis(100);

/// Identifies one image load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

/// A decode job for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub token: LoadToken,
    pub index: usize,
    pub source: PathBuf,
}

/// Opacity and scale cues for the displayed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub opacity: f32,
    pub scale: f32,
}

impl Presentation {
    const REST: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };

    const FADED: Self = Self {
        opacity: FADE_OPACITY,
        scale: FADE_SCALE,
    };
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    token: LoadToken,
    index: usize,
}

/// Gallery state.
#[derive(Debug, Clone)]
pub struct State {
    records: Vec<ImageRecord>,
    current: usize,
    shown: Option<usize>,
    pending: Option<Pending>,
    faded: bool,
    last_token: u64,
}

/// Messages for the gallery sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Select an image by position. Out-of-range is a silent no-op.
    Select(usize),
    /// Select the following image, wrapping to the first.
    Next,
    /// Select the preceding image, wrapping to the last.
    Previous,
    /// The host finished decoding a request.
    LoadFinished {
        token: LoadToken,
        result: Result<(), Error>,
    },
    /// The post-swap delay elapsed.
    RestorePresentation(LoadToken),
}

/// Effects produced by the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Decode this request.
    BeginLoad(LoadRequest),
    /// A request completed and its image is now displayed.
    Shown { index: usize, token: LoadToken },
    /// A request failed; the previous image stays.
    LoadFailed { index: usize, error: Error },
    /// A completion arrived for a superseded request and was dropped.
    Discarded(LoadToken),
}

impl State {
    /// Creates a gallery over a fixed record sequence.
    #[must_use]
    pub fn new(records: Vec<ImageRecord>) -> Self {
        Self {
            records,
            current: 0,
            shown: None,
            pending: None,
            faded: false,
            last_token: 0,
        }
    }

    /// Handle a gallery message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Select(index) => self.select(index),
            Message::Next => match self.records.len() {
                0 => Effect::None,
                len => self.select((self.navigation_base() + 1) % len),
            },
            Message::Previous => match self.records.len() {
                0 => Effect::None,
                len => self.select((self.navigation_base() + len - 1) % len),
            },
            Message::LoadFinished { token, result } => self.finish(token, result),
            Message::RestorePresentation(token) => {
                if token == LoadToken(self.last_token) && self.pending.is_none() {
                    self.faded = false;
                }
                Effect::None
            }
        }
    }

    fn select(&mut self, index: usize) -> Effect {
        let Some(record) = self.records.get(index) else {
            return Effect::None;
        };

        self.last_token += 1;
        let token = LoadToken(self.last_token);
        self.pending = Some(Pending { token, index });
        self.faded = true;

        Effect::BeginLoad(LoadRequest {
            token,
            index,
            source: record.source.clone(),
        })
    }

    fn finish(&mut self, token: LoadToken, result: Result<(), Error>) -> Effect {
        let pending = match self.pending {
            Some(pending) if pending.token == token => pending,
            _ => return Effect::Discarded(token),
        };
        self.pending = None;

        match result {
            Ok(()) => {
                self.current = pending.index;
                self.shown = Some(pending.index);
                Effect::Shown {
                    index: pending.index,
                    token,
                }
            }
            Err(error) => {
                self.faded = false;
                Effect::LoadFailed {
                    index: pending.index,
                    error,
                }
            }
        }
    }

    /// Relative navigation steps from the in-flight target so repeated
    /// presses keep advancing before the first decode lands.
    fn navigation_base(&self) -> usize {
        self.pending.map_or(self.current, |p| p.index)
    }

    /// The committed selection.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// The record whose image and metadata are on display.
    #[must_use]
    pub fn shown(&self) -> Option<&ImageRecord> {
        self.shown.and_then(|index| self.records.get(index))
    }

    /// Whether the loading indicator is visible.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the in-flight request, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<LoadToken> {
        self.pending.map(|p| p.token)
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        if self.faded {
            Presentation::FADED
        } else {
            Presentation::REST
        }
    }

    /// Whether thumbnail `index` carries the active marker.
    #[must_use]
    pub fn is_active_thumbnail(&self, index: usize) -> bool {
        !self.records.is_empty() && index == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<ImageRecord> {
        (0..count)
            .map(|index| ImageRecord {
                index,
                source: PathBuf::from(format!("img{index}.png")),
                title: format!("Title {index}"),
                description: format!("Description {index}"),
                category: "Nature".to_string(),
                date: "2025".to_string(),
            })
            .collect()
    }

    fn begin(effect: Effect) -> LoadRequest {
        match effect {
            Effect::BeginLoad(request) => request,
            other => panic!("expected BeginLoad, got {:?}", other),
        }
    }

    #[test]
    fn select_out_of_range_is_silent() {
        let mut state = State::new(records(3));
        assert_eq!(state.handle(Message::Select(3)), Effect::None);
        assert!(!state.is_loading());
        assert_eq!(state.presentation(), Presentation::REST);
    }

    #[test]
    fn select_starts_loading_and_fades() {
        let mut state = State::new(records(3));
        let request = begin(state.handle(Message::Select(1)));

        assert_eq!(request.index, 1);
        assert_eq!(request.source, PathBuf::from("img1.png"));
        assert!(state.is_loading());
        assert_eq!(state.presentation(), Presentation::FADED);
        // Not committed until the decode lands.
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn successful_load_commits_selection() {
        let mut state = State::new(records(3));
        let request = begin(state.handle(Message::Select(2)));

        let effect = state.handle(Message::LoadFinished {
            token: request.token,
            result: Ok(()),
        });

        assert_eq!(
            effect,
            Effect::Shown {
                index: 2,
                token: request.token
            }
        );
        assert_eq!(state.current(), 2);
        assert_eq!(state.shown().map(|r| r.title.as_str()), Some("Title 2"));
        assert!(!state.is_loading());
        assert!(state.is_active_thumbnail(2));
        assert!(!state.is_active_thumbnail(0));

        // Still faded until the restore delay elapses.
        assert_eq!(state.presentation(), Presentation::FADED);
        state.handle(Message::RestorePresentation(request.token));
        assert_eq!(state.presentation(), Presentation::REST);
    }

    #[test]
    fn failed_load_keeps_previous_image() {
        let mut state = State::new(records(3));
        let first = begin(state.handle(Message::Select(0)));
        state.handle(Message::LoadFinished {
            token: first.token,
            result: Ok(()),
        });

        let request = begin(state.handle(Message::Select(1)));
        let effect = state.handle(Message::LoadFinished {
            token: request.token,
            result: Err(Error::decode("img1.png", "bad header")),
        });

        assert!(matches!(effect, Effect::LoadFailed { index: 1, .. }));
        assert_eq!(state.current(), 0);
        assert_eq!(state.shown().map(|r| r.index), Some(0));
        assert!(!state.is_loading());
        assert_eq!(state.presentation(), Presentation::REST);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = State::new(records(3));
        let stale = begin(state.handle(Message::Select(1)));
        let fresh = begin(state.handle(Message::Select(2)));

        assert_eq!(
            state.handle(Message::LoadFinished {
                token: stale.token,
                result: Ok(()),
            }),
            Effect::Discarded(stale.token)
        );
        assert_eq!(state.current(), 0);
        assert!(state.is_loading());

        state.handle(Message::LoadFinished {
            token: fresh.token,
            result: Ok(()),
        });
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut state = State::new(records(3));
        let request = begin(state.handle(Message::Previous));
        assert_eq!(request.index, 2);
        state.handle(Message::LoadFinished {
            token: request.token,
            result: Ok(()),
        });

        let request = begin(state.handle(Message::Next));
        assert_eq!(request.index, 0);
    }

    #[test]
    fn rapid_next_steps_from_the_pending_target() {
        let mut state = State::new(records(4));
        let first = begin(state.handle(Message::Next));
        let second = begin(state.handle(Message::Next));
        assert_eq!(first.index, 1);
        assert_eq!(second.index, 2);
    }

    #[test]
    fn restore_is_ignored_while_a_newer_load_is_in_flight() {
        let mut state = State::new(records(3));
        let first = begin(state.handle(Message::Select(1)));
        state.handle(Message::LoadFinished {
            token: first.token,
            result: Ok(()),
        });
        begin(state.handle(Message::Select(2)));

        state.handle(Message::RestorePresentation(first.token));
        assert_eq!(state.presentation(), Presentation::FADED);
    }

    #[test]
    fn empty_gallery_ignores_navigation() {
        let mut state = State::new(Vec::new());
        assert_eq!(state.handle(Message::Next), Effect::None);
        assert_eq!(state.handle(Message::Previous), Effect::None);
        assert!(!state.is_active_thumbnail(0));
        assert!(state.shown().is_none());
    }
}
