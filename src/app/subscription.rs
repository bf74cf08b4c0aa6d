// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and touch events are translated into controller messages.
//! Keys are only routed when no widget captured them, so a focused widget
//! keeps its own handling of the same keys. Touches are always routed: swipe
//! tracking is passive, and scrollables capture finger presses.

use super::Message;
use crate::domain::ui::AutoplaySpeed;
use crate::showcase;
use crate::showcase::input::Key;
use crate::showcase::slideshow::{self, TimerToken};
use iced::keyboard::{self, key::Named};
use iced::{event, time, touch, Event, Subscription};
use std::time::Duration;

/// Frame interval of the slide transition animation.
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Maps an Iced key to the showcase's key identity.
fn map_key(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(Key::ArrowRight),
        keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
        keyboard::Key::Named(Named::Space) => Some(Key::Space),
        keyboard::Key::Character(c) => Some(Key::Character(c.to_string())),
        _ => None,
    }
}

fn route_event(event: &Event) -> Option<showcase::Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            map_key(key).map(showcase::Message::KeyPressed)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(showcase::Message::TouchStarted(position.x))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(showcase::Message::TouchEnded(position.x))
        }
        _ => None,
    }
}

/// Decides whether an event reaches the controller given its capture status.
pub(super) fn route(event: &Event, status: event::Status) -> Option<Message> {
    match (event, status) {
        (Event::Touch(_), _) | (_, event::Status::Ignored) => {
            route_event(event).map(Message::Showcase)
        }
        (_, event::Status::Captured) => None,
    }
}

/// Routes uncaptured keyboard events and every touch event.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route(&event, status))
}

/// Fires the armed autoplay timer at the configured interval.
///
/// The subscription is keyed by the timer token, so re-arming restarts the
/// interval and a disarmed timer stops emitting.
pub fn create_autoplay_subscription(
    timer: Option<TimerToken>,
    speed: AutoplaySpeed,
) -> Subscription<Message> {
    match timer {
        Some(token) => time::every(speed.as_duration())
            .with(token)
            .map(|(token, _)| {
                Message::Showcase(showcase::Message::Slideshow(slideshow::Message::Tick(token)))
            }),
        None => Subscription::none(),
    }
}

/// Drives the slide transition while one is running.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn finger_pressed(x: f32) -> Event {
        Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::new(x, 40.0),
        })
    }

    #[test]
    fn arrows_and_characters_are_mapped() {
        assert_eq!(
            map_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Key::ArrowLeft)
        );
        assert_eq!(map_key(&keyboard::Key::Named(Named::Space)), Some(Key::Space));
        assert_eq!(
            map_key(&keyboard::Key::Character("f".into())),
            Some(Key::Character("f".to_string()))
        );
        assert_eq!(map_key(&keyboard::Key::Named(Named::Tab)), None);
    }

    #[test]
    fn captured_keys_are_dropped_but_captured_touches_are_routed() {
        let key = Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(Named::ArrowRight),
            modified_key: keyboard::Key::Named(Named::ArrowRight),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::ArrowRight),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        });
        assert!(route(&key, event::Status::Captured).is_none());
        assert!(matches!(
            route(&key, event::Status::Ignored),
            Some(Message::Showcase(showcase::Message::KeyPressed(Key::ArrowRight)))
        ));

        let press = finger_pressed(600.0);
        assert!(matches!(
            route(&press, event::Status::Captured),
            Some(Message::Showcase(showcase::Message::TouchStarted(x))) if x == 600.0
        ));
    }

    #[test]
    fn touches_report_horizontal_position() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::new(120.0, 40.0),
        });
        assert!(matches!(
            route_event(&event),
            Some(showcase::Message::TouchStarted(x)) if x == 120.0
        ));

        let event = Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(0),
            position: Point::new(30.0, 40.0),
        });
        assert!(matches!(
            route_event(&event),
            Some(showcase::Message::TouchEnded(x)) if x == 30.0
        ));
    }
}
