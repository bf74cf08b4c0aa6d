// SPDX-License-Identifier: MPL-2.0
//! Fullscreen overlay sub-component.
//!
//! The overlay never reads gallery state on its own: the controller hands it
//! a [`Mirror`] when opening and again whenever the gallery reports a
//! completed swap while the overlay is open.

use crate::domain::showcase::ImageRecord;
use std::path::PathBuf;

/// Fields copied from the gallery's displayed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mirror {
    pub source: PathBuf,
    pub alt: String,
    pub title: String,
    pub description: String,
}

impl From<&ImageRecord> for Mirror {
    fn from(record: &ImageRecord) -> Self {
        Self {
            source: record.source.clone(),
            alt: record.alt_text().to_string(),
            title: record.title.clone(),
            description: record.description.clone(),
        }
    }
}

/// Overlay state.
#[derive(Debug, Clone, Default)]
pub struct State {
    open: bool,
    mirror: Option<Mirror>,
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open with the gallery's displayed image. `None` means there is nothing
    /// to mirror and the request is skipped.
    Open(Option<Mirror>),
    /// Close the overlay.
    Close,
    /// Re-copy the gallery's displayed image while open.
    Sync(Mirror),
}

/// Effects produced by overlay changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The overlay opened; background scrolling must be suppressed.
    Opened,
    /// The overlay closed; background scrolling is restored.
    Closed,
    /// Mirrored fields were refreshed.
    Synced,
}

impl State {
    /// Handle an overlay message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open(Some(mirror)) => {
                self.mirror = Some(mirror);
                if self.open {
                    Effect::Synced
                } else {
                    self.open = true;
                    Effect::Opened
                }
            }
            Message::Open(None) => {
                log::debug!("no displayed image to mirror, overlay stays closed");
                Effect::None
            }
            Message::Close => {
                if self.open {
                    self.open = false;
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            Message::Sync(mirror) => {
                if self.open {
                    self.mirror = Some(mirror);
                    Effect::Synced
                } else {
                    Effect::None
                }
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Mirrored fields, present once the overlay has been opened.
    #[must_use]
    pub fn mirror(&self) -> Option<&Mirror> {
        self.mirror.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror(title: &str) -> Mirror {
        Mirror {
            source: PathBuf::from(format!("{title}.png")),
            alt: title.to_string(),
            title: title.to_string(),
            description: format!("about {title}"),
        }
    }

    #[test]
    fn open_copies_fields() {
        let mut state = State::default();
        let effect = state.handle(Message::Open(Some(mirror("dune"))));

        assert_eq!(effect, Effect::Opened);
        assert!(state.is_open());
        assert_eq!(state.mirror().map(|m| m.title.as_str()), Some("dune"));
    }

    #[test]
    fn open_without_image_is_skipped() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Open(None)), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = State::default();
        state.handle(Message::Open(Some(mirror("a"))));
        assert_eq!(state.handle(Message::Close), Effect::Closed);
        assert_eq!(state.handle(Message::Close), Effect::None);
    }

    #[test]
    fn sync_only_applies_while_open() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Sync(mirror("a"))), Effect::None);
        assert!(state.mirror().is_none());

        state.handle(Message::Open(Some(mirror("a"))));
        assert_eq!(state.handle(Message::Sync(mirror("b"))), Effect::Synced);
        assert_eq!(state.mirror().map(|m| m.title.as_str()), Some("b"));
    }

    #[test]
    fn mirror_from_record_uses_title_as_alt() {
        let record = ImageRecord {
            index: 0,
            source: PathBuf::from("x.png"),
            title: "Harbor".into(),
            description: "Boats at dusk".into(),
            category: "Travel".into(),
            date: "2024".into(),
        };
        let mirror = Mirror::from(&record);
        assert_eq!(mirror.alt, "Harbor");
        assert_eq!(mirror.description, "Boats at dusk");
    }
}
