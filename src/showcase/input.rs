// SPDX-License-Identifier: MPL-2.0
//! Input bridge: keyboard shortcuts and horizontal swipes.
//!
//! Both are resolved against an [`InputContext`] (overlay open, active view)
//! into a [`Command`] for the controller. Anything that resolves to a command
//! is considered handled and its default action suppressed.

use crate::domain::showcase::View;

/// Minimum horizontal travel, in logical pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Framework-independent key identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Space,
    Character(String),
}

/// What the input bridge needs to know about the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub overlay_open: bool,
    pub view: View,
}

/// Operation requested by an input gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextSlide,
    PreviousSlide,
    NextImage,
    PreviousImage,
    OverlayNext,
    OverlayPrevious,
    CloseOverlay,
    ToggleOverlay,
    ToggleAutoplay,
    SwitchView(View),
}

/// Maps a key press to a command, or `None` when the key is not handled in
/// this context.
#[must_use]
pub fn resolve_key(key: &Key, ctx: InputContext) -> Option<Command> {
    if ctx.overlay_open {
        return match key {
            Key::Escape => Some(Command::CloseOverlay),
            Key::ArrowLeft => Some(Command::OverlayPrevious),
            Key::ArrowRight => Some(Command::OverlayNext),
            _ => None,
        };
    }

    match (key, ctx.view) {
        (Key::ArrowLeft, View::Slideshow) => Some(Command::PreviousSlide),
        (Key::ArrowLeft, View::Gallery) => Some(Command::PreviousImage),
        (Key::ArrowRight, View::Slideshow) => Some(Command::NextSlide),
        (Key::ArrowRight, View::Gallery) => Some(Command::NextImage),
        (Key::Space, View::Slideshow) => Some(Command::ToggleAutoplay),
        (Key::Character(c), view) => match (c.as_str(), view) {
            ("1", _) => Some(Command::SwitchView(View::Slideshow)),
            ("2", _) => Some(Command::SwitchView(View::Gallery)),
            ("f", View::Gallery) => Some(Command::ToggleOverlay),
            _ => None,
        },
        _ => None,
    }
}

/// Surface a touch gesture happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeSurface {
    Slideshow,
    Gallery,
    Overlay,
}

impl SwipeSurface {
    /// The surface that receives touches in this context: the overlay covers
    /// everything while open, otherwise the active view's display.
    #[must_use]
    pub fn for_context(ctx: InputContext) -> Self {
        if ctx.overlay_open {
            SwipeSurface::Overlay
        } else {
            match ctx.view {
                View::Slideshow => SwipeSurface::Slideshow,
                View::Gallery => SwipeSurface::Gallery,
            }
        }
    }

    /// Command for a swipe in `direction` on this surface.
    #[must_use]
    pub fn command(self, direction: SwipeDirection) -> Command {
        match (self, direction) {
            (SwipeSurface::Slideshow, SwipeDirection::Next) => Command::NextSlide,
            (SwipeSurface::Slideshow, SwipeDirection::Previous) => Command::PreviousSlide,
            (SwipeSurface::Gallery, SwipeDirection::Next) => Command::NextImage,
            (SwipeSurface::Gallery, SwipeDirection::Previous) => Command::PreviousImage,
            (SwipeSurface::Overlay, SwipeDirection::Next) => Command::OverlayNext,
            (SwipeSurface::Overlay, SwipeDirection::Previous) => Command::OverlayPrevious,
        }
    }
}

/// Navigation direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward swipe.
    Next,
    /// Rightward swipe.
    Previous,
}

/// Classifies a touch from `start_x` to `end_x`.
///
/// Travel must strictly exceed [`SWIPE_THRESHOLD`].
#[must_use]
pub fn classify_swipe(start_x: f32, end_x: f32) -> Option<SwipeDirection> {
    let distance = start_x - end_x;
    if distance.abs() > SWIPE_THRESHOLD {
        if distance > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    } else {
        None
    }
}

/// Remembers the horizontal positions of the last touch.
///
/// A release only classifies when a press began the gesture; a release
/// without one (its press was never observed) is recorded but ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    pressed_at: Option<f32>,
    start_x: f32,
    end_x: f32,
}

impl SwipeTracker {
    pub fn touch_started(&mut self, x: f32) {
        self.pressed_at = Some(x);
        self.start_x = x;
    }

    /// Records the release position and classifies the gesture.
    pub fn touch_ended(&mut self, x: f32) -> Option<SwipeDirection> {
        self.end_x = x;
        let start = self.pressed_at.take()?;
        classify_swipe(start, x)
    }

    /// Whether a touch is down and not yet released.
    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.pressed_at.is_some()
    }

    #[must_use]
    pub fn start_x(&self) -> f32 {
        self.start_x
    }

    #[must_use]
    pub fn end_x(&self) -> f32 {
        self.end_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDESHOW: InputContext = InputContext {
        overlay_open: false,
        view: View::Slideshow,
    };
    const GALLERY: InputContext = InputContext {
        overlay_open: false,
        view: View::Gallery,
    };
    const OVERLAY: InputContext = InputContext {
        overlay_open: true,
        view: View::Gallery,
    };

    fn ch(c: &str) -> Key {
        Key::Character(c.to_string())
    }

    #[test]
    fn arrows_follow_the_active_view() {
        assert_eq!(resolve_key(&Key::ArrowRight, SLIDESHOW), Some(Command::NextSlide));
        assert_eq!(resolve_key(&Key::ArrowLeft, SLIDESHOW), Some(Command::PreviousSlide));
        assert_eq!(resolve_key(&Key::ArrowRight, GALLERY), Some(Command::NextImage));
        assert_eq!(resolve_key(&Key::ArrowLeft, GALLERY), Some(Command::PreviousImage));
    }

    #[test]
    fn overlay_captures_arrows_and_escape() {
        assert_eq!(resolve_key(&Key::Escape, OVERLAY), Some(Command::CloseOverlay));
        assert_eq!(resolve_key(&Key::ArrowRight, OVERLAY), Some(Command::OverlayNext));
        assert_eq!(resolve_key(&Key::ArrowLeft, OVERLAY), Some(Command::OverlayPrevious));
        // View shortcuts are inert while the overlay is open.
        assert_eq!(resolve_key(&ch("1"), OVERLAY), None);
        assert_eq!(resolve_key(&ch("f"), OVERLAY), None);
    }

    #[test]
    fn space_only_toggles_autoplay_in_slideshow() {
        assert_eq!(resolve_key(&Key::Space, SLIDESHOW), Some(Command::ToggleAutoplay));
        assert_eq!(resolve_key(&Key::Space, GALLERY), None);
    }

    #[test]
    fn digits_switch_views_from_anywhere() {
        assert_eq!(
            resolve_key(&ch("2"), SLIDESHOW),
            Some(Command::SwitchView(View::Gallery))
        );
        assert_eq!(
            resolve_key(&ch("1"), GALLERY),
            Some(Command::SwitchView(View::Slideshow))
        );
    }

    #[test]
    fn f_only_toggles_overlay_in_gallery() {
        assert_eq!(resolve_key(&ch("f"), GALLERY), Some(Command::ToggleOverlay));
        assert_eq!(resolve_key(&ch("f"), SLIDESHOW), None);
        assert_eq!(resolve_key(&ch("F"), GALLERY), None);
    }

    #[test]
    fn escape_outside_overlay_is_unhandled() {
        assert_eq!(resolve_key(&Key::Escape, GALLERY), None);
    }

    #[test]
    fn short_swipes_are_ignored() {
        assert_eq!(classify_swipe(100.0, 70.0), None);
        assert_eq!(classify_swipe(100.0, 130.0), None);
        assert_eq!(classify_swipe(100.0, 50.0), None);
    }

    #[test]
    fn swipe_direction_follows_sign() {
        assert_eq!(classify_swipe(200.0, 140.0), Some(SwipeDirection::Next));
        assert_eq!(classify_swipe(140.0, 200.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn tracker_classifies_on_release() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_started(300.0);
        assert_eq!(tracker.touch_ended(240.0), Some(SwipeDirection::Next));
        assert_eq!(tracker.start_x(), 300.0);
        assert_eq!(tracker.end_x(), 240.0);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.touch_ended(500.0), None);
        assert_eq!(tracker.end_x(), 500.0);

        tracker.touch_started(600.0);
        assert!(tracker.is_touching());
        assert_eq!(tracker.touch_ended(500.0), Some(SwipeDirection::Next));
        assert!(!tracker.is_touching());
        // A second release reuses nothing from the finished gesture.
        assert_eq!(tracker.touch_ended(300.0), None);
    }

    #[test]
    fn surface_follows_overlay_then_view() {
        assert_eq!(SwipeSurface::for_context(OVERLAY), SwipeSurface::Overlay);
        assert_eq!(SwipeSurface::for_context(GALLERY), SwipeSurface::Gallery);
        assert_eq!(SwipeSurface::for_context(SLIDESHOW), SwipeSurface::Slideshow);
        assert_eq!(
            SwipeSurface::Overlay.command(SwipeDirection::Next),
            Command::OverlayNext
        );
    }
}
