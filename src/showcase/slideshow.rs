// SPDX-License-Identifier: MPL-2.0
//! Slideshow sub-component: current slide, wrap-around navigation and the
//! autoplay timer.
//!
//! The timer itself lives in the host (an Iced subscription). This state only
//! decides whether it is armed and hands out a [`TimerToken`] for each arming,
//! so ticks from a timer that was since disarmed or re-armed are ignored.

use crate::domain::showcase::TransitionEffect;
use crate::domain::ui::AutoplaySpeed;

/// Identifies one arming of the autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Slideshow state.
#[derive(Debug, Clone)]
pub struct State {
    current: usize,
    total: usize,
    autoplay_enabled: bool,
    speed: AutoplaySpeed,
    transition: TransitionEffect,
    timer: Option<TimerToken>,
    generation: u64,
}

/// Messages for the slideshow sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance by one slide, wrapping to the first.
    Next,
    /// Go back by one slide, wrapping to the last.
    Previous,
    /// Jump to an index; out-of-range values resolve to a boundary.
    Show(isize),
    /// The autoplay timer fired.
    Tick(TimerToken),
    /// Autoplay enablement changed (checkbox or `Space`).
    SetAutoplay(bool),
    /// A speed preset was chosen.
    SetSpeed(AutoplaySpeed),
    /// A transition effect was chosen.
    SetTransition(TransitionEffect),
}

/// Effects produced by slideshow changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The active slide changed.
    SlideChanged(usize),
    /// Autoplay enablement or speed changed; the timer must be re-armed.
    AutoplaySettingsChanged,
    /// The transition effect applied to all slides changed.
    TransitionChanged(TransitionEffect),
}

impl State {
    /// Creates a slideshow over `total` slides, positioned on the first one.
    #[must_use]
    pub fn new(
        total: usize,
        autoplay_enabled: bool,
        speed: AutoplaySpeed,
        transition: TransitionEffect,
    ) -> Self {
        Self {
            current: 0,
            total,
            autoplay_enabled,
            speed,
            transition,
            timer: None,
            generation: 0,
        }
    }

    /// Handle a slideshow message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Next => self.show(self.current as isize + 1),
            Message::Previous => self.show(self.current as isize - 1),
            Message::Show(index) => self.show(index),
            Message::Tick(token) => {
                if self.timer == Some(token) {
                    self.show(self.current as isize + 1)
                } else {
                    log::debug!("ignoring tick from disarmed autoplay timer {:?}", token);
                    Effect::None
                }
            }
            Message::SetAutoplay(enabled) => {
                self.autoplay_enabled = enabled;
                Effect::AutoplaySettingsChanged
            }
            Message::SetSpeed(speed) => {
                self.speed = speed;
                Effect::AutoplaySettingsChanged
            }
            Message::SetTransition(effect) => {
                self.transition = effect;
                Effect::TransitionChanged(effect)
            }
        }
    }

    /// Resolves `index` with the wrap-to-boundary rule: anything at or past
    /// the end goes to the first slide, anything negative goes to the last.
    fn show(&mut self, index: isize) -> Effect {
        if self.total == 0 {
            return Effect::None;
        }
        self.current = if index >= self.total as isize {
            0
        } else if index < 0 {
            self.total - 1
        } else {
            index as usize
        };
        Effect::SlideChanged(self.current)
    }

    /// Disarms any running timer, then arms a fresh one when autoplay is
    /// enabled and there is more than one slide.
    ///
    /// Returns the new token when the timer was armed.
    pub fn start_autoplay(&mut self) -> Option<TimerToken> {
        self.stop_autoplay();
        if self.autoplay_enabled && self.total > 1 {
            self.generation += 1;
            let token = TimerToken(self.generation);
            self.timer = Some(token);
            log::debug!(
                "autoplay armed ({:?}, every {} ms)",
                token,
                self.speed.millis()
            );
            Some(token)
        } else {
            None
        }
    }

    /// Disarms the timer. Idempotent.
    pub fn stop_autoplay(&mut self) {
        if let Some(token) = self.timer.take() {
            log::debug!("autoplay disarmed ({:?})", token);
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    #[must_use]
    pub fn speed(&self) -> AutoplaySpeed {
        self.speed
    }

    #[must_use]
    pub fn transition(&self) -> TransitionEffect {
        self.transition
    }

    /// Token of the armed timer, if any.
    #[must_use]
    pub fn timer(&self) -> Option<TimerToken> {
        self.timer
    }

    /// Whether the autoplay timer is currently armed.
    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether slide `index` carries the active marker (slide and indicator).
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.total > 0 && index == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slideshow(total: usize) -> State {
        State::new(total, true, AutoplaySpeed::default(), TransitionEffect::Fade)
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut state = slideshow(5);
        for _ in 0..5 {
            state.handle(Message::Next);
        }
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut state = slideshow(5);
        let effect = state.handle(Message::Previous);
        assert_eq!(state.current(), 4);
        assert_eq!(effect, Effect::SlideChanged(4));
    }

    #[test]
    fn cycling_returns_to_start_for_every_size_and_index() {
        for total in 1..8 {
            for start in 0..total {
                let mut state = slideshow(total);
                state.handle(Message::Show(start as isize));
                for _ in 0..total {
                    state.handle(Message::Next);
                }
                assert_eq!(state.current(), start);
                for _ in 0..total {
                    state.handle(Message::Previous);
                }
                assert_eq!(state.current(), start);
            }
        }
    }

    #[test]
    fn out_of_range_jumps_resolve_to_boundaries() {
        let mut state = slideshow(4);
        state.handle(Message::Show(4));
        assert_eq!(state.current(), 0);

        state.handle(Message::Show(-1));
        assert_eq!(state.current(), 3);

        // Far out-of-range values snap to the same boundaries, not modulo.
        state.handle(Message::Show(9));
        assert_eq!(state.current(), 0);
        state.handle(Message::Show(-7));
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn exactly_one_slide_is_active() {
        let mut state = slideshow(3);
        state.handle(Message::Show(2));
        let active: Vec<usize> = (0..3).filter(|i| state.is_active(*i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn empty_slideshow_ignores_navigation() {
        let mut state = slideshow(0);
        assert_eq!(state.handle(Message::Next), Effect::None);
        assert_eq!(state.current(), 0);
        assert!(!state.is_active(0));
    }

    #[test]
    fn start_autoplay_requires_more_than_one_slide() {
        let mut single = slideshow(1);
        assert!(single.start_autoplay().is_none());
        assert!(!single.is_autoplay_running());

        let mut many = slideshow(2);
        assert!(many.start_autoplay().is_some());
        assert!(many.is_autoplay_running());
    }

    #[test]
    fn start_autoplay_requires_enablement() {
        let mut state = slideshow(3);
        state.handle(Message::SetAutoplay(false));
        assert!(state.start_autoplay().is_none());
    }

    #[test]
    fn restarting_replaces_the_previous_token() {
        let mut state = slideshow(3);
        let first = state.start_autoplay().unwrap();
        let second = state.start_autoplay().unwrap();
        assert_ne!(first, second);
        assert_eq!(state.timer(), Some(second));
    }

    #[test]
    fn stop_autoplay_is_idempotent() {
        let mut state = slideshow(3);
        state.start_autoplay();
        state.stop_autoplay();
        state.stop_autoplay();
        assert!(!state.is_autoplay_running());
    }

    #[test]
    fn tick_advances_only_with_the_armed_token() {
        let mut state = slideshow(3);
        let stale = state.start_autoplay().unwrap();
        let armed = state.start_autoplay().unwrap();

        assert_eq!(state.handle(Message::Tick(stale)), Effect::None);
        assert_eq!(state.current(), 0);

        assert_eq!(state.handle(Message::Tick(armed)), Effect::SlideChanged(1));
    }

    #[test]
    fn tick_after_stop_is_ignored() {
        let mut state = slideshow(3);
        let token = state.start_autoplay().unwrap();
        state.stop_autoplay();
        assert_eq!(state.handle(Message::Tick(token)), Effect::None);
    }

    #[test]
    fn settings_changes_request_rearm() {
        let mut state = slideshow(3);
        assert_eq!(
            state.handle(Message::SetSpeed(AutoplaySpeed::new(3_000))),
            Effect::AutoplaySettingsChanged
        );
        assert_eq!(state.speed().millis(), 3_000);
        assert_eq!(
            state.handle(Message::SetAutoplay(false)),
            Effect::AutoplaySettingsChanged
        );
        assert!(!state.autoplay_enabled());
    }

    #[test]
    fn transition_applies_to_the_whole_slideshow() {
        let mut state = slideshow(3);
        let effect = state.handle(Message::SetTransition(TransitionEffect::Zoom));
        assert_eq!(effect, Effect::TransitionChanged(TransitionEffect::Zoom));
        assert_eq!(state.transition(), TransitionEffect::Zoom);
    }
}
