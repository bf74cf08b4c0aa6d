// SPDX-License-Identifier: MPL-2.0
//! View switch sub-component.
//!
//! Tracks which view is displayed, which views actually have a container in
//! the host, and which selector control carries the active marker. The two can
//! differ: selecting a view without a container moves the marker but leaves
//! the displayed view alone.

use crate::domain::showcase::View;

/// View switch state.
#[derive(Debug, Clone)]
pub struct State {
    current: View,
    selected: View,
    available: Vec<View>,
}

/// Messages for the view switch sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Request a view.
    Switch(View),
}

/// Effects produced by view switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The requested view is now displayed (it may already have been).
    Switched(View),
    /// The requested view has no container; only the selector moved.
    Unavailable(View),
}

impl State {
    /// Creates the switch with the given initial view and the views that
    /// have a container.
    #[must_use]
    pub fn new(initial: View, available: Vec<View>) -> Self {
        Self {
            current: initial,
            selected: initial,
            available,
        }
    }

    /// Handle a view switch message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Switch(view) => {
                self.selected = view;
                if self.is_available(view) {
                    self.current = view;
                    Effect::Switched(view)
                } else {
                    log::warn!("no container for the {} view, ignoring switch", view);
                    Effect::Unavailable(view)
                }
            }
        }
    }

    /// The displayed view.
    #[must_use]
    pub fn current(&self) -> View {
        self.current
    }

    /// The view whose selector control carries the active marker.
    #[must_use]
    pub fn selected(&self) -> View {
        self.selected
    }

    /// Whether the host has a container for `view`.
    #[must_use]
    pub fn is_available(&self, view: View) -> bool {
        self.available.contains(&view)
    }

    /// Whether `view`'s container is the visible one.
    #[must_use]
    pub fn is_visible(&self, view: View) -> bool {
        self.is_available(view) && self.current == view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_updates_current_and_selection() {
        let mut state = State::new(View::Slideshow, View::ALL.to_vec());
        let effect = state.handle(Message::Switch(View::Gallery));

        assert_eq!(effect, Effect::Switched(View::Gallery));
        assert_eq!(state.current(), View::Gallery);
        assert_eq!(state.selected(), View::Gallery);
    }

    #[test]
    fn exactly_one_view_is_visible() {
        let mut state = State::new(View::Slideshow, View::ALL.to_vec());
        state.handle(Message::Switch(View::Gallery));
        let visible: Vec<View> = View::ALL
            .into_iter()
            .filter(|v| state.is_visible(*v))
            .collect();
        assert_eq!(visible, vec![View::Gallery]);
    }

    #[test]
    fn missing_container_only_moves_the_selector() {
        let mut state = State::new(View::Slideshow, vec![View::Slideshow]);
        let effect = state.handle(Message::Switch(View::Gallery));

        assert_eq!(effect, Effect::Unavailable(View::Gallery));
        assert_eq!(state.current(), View::Slideshow);
        assert_eq!(state.selected(), View::Gallery);
        assert!(state.is_visible(View::Slideshow));
    }

    #[test]
    fn switching_to_the_current_view_still_reports_switched() {
        let mut state = State::new(View::Slideshow, View::ALL.to_vec());
        assert_eq!(
            state.handle(Message::Switch(View::Slideshow)),
            Effect::Switched(View::Slideshow)
        );
    }
}
