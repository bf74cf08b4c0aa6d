// SPDX-License-Identifier: MPL-2.0
//! Showcase controller orchestrating the sub-components.
//!
//! The controller is a single owned value: the host keeps it, feeds it
//! [`Message`]s, and performs the returned [`Effect`]s. The autoplay invariant
//! (timer armed iff autoplay is enabled, the slideshow is displayed and there
//! is more than one slide) is re-established after every transition that can
//! affect it.

use super::gallery::{self, LoadRequest, LoadToken};
use super::input::{self, Command, InputContext, Key, SwipeSurface, SwipeTracker};
use super::overlay::{self, Mirror};
use super::slideshow::{self, TimerToken};
use super::view_switch;
use super::zoom;
use crate::domain::showcase::{ImageRecord, SlideRecord, TransitionEffect, View};
use crate::domain::ui::{AutoplaySpeed, ZoomFactor};
use std::time::Duration;

/// User-adjustable slideshow preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub autoplay: bool,
    pub speed: AutoplaySpeed,
    pub transition: TransitionEffect,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            autoplay: true,
            speed: AutoplaySpeed::default(),
            transition: TransitionEffect::default(),
        }
    }
}

/// Everything the controller is built from.
#[derive(Debug, Clone, Default)]
pub struct Setup {
    pub slides: Vec<SlideRecord>,
    pub images: Vec<ImageRecord>,
    /// Views the host has a container for.
    pub views: Vec<View>,
    pub initial_view: View,
    pub preferences: Preferences,
    /// Reset zoom to 1.0 whenever a new gallery image is swapped in.
    pub reset_zoom_on_navigation: bool,
}

/// Messages accepted by the controller.
#[derive(Debug, Clone)]
pub enum Message {
    ViewSwitch(view_switch::Message),
    Slideshow(slideshow::Message),
    Gallery(gallery::Message),
    Zoom(zoom::Message),
    OpenFullscreen,
    CloseFullscreen,
    ToggleFullscreen,
    FullscreenNext,
    FullscreenPrevious,
    /// Flip autoplay enablement (the `Space` shortcut).
    ToggleAutoplay,
    KeyPressed(Key),
    /// A press on the overlay backdrop was released. Closes the overlay
    /// unless the release ends a swipe.
    BackdropReleased,
    TouchStarted(f32),
    TouchEnded(f32),
}

/// Side effects the host should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch and decode an image, then reply with
    /// [`gallery::Message::LoadFinished`].
    DecodeImage(LoadRequest),
    /// Reply with [`gallery::Message::RestorePresentation`] after `delay`.
    ScheduleRestore { token: LoadToken, delay: Duration },
    /// Slideshow preferences changed and should be saved.
    PersistPreferences,
    /// Suppress (`true`) or restore (`false`) background scrolling.
    ScrollLock(bool),
    /// The key press was handled; suppress its default action.
    SuppressDefault,
}

/// Snapshot of the controller's shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerState {
    pub current_view: View,
    pub current_slide_index: usize,
    pub total_slides: usize,
    pub current_image_index: usize,
    pub total_images: usize,
    pub autoplay_enabled: bool,
    pub autoplay_speed_ms: u64,
    pub zoom_factor: f32,
    pub touch_start_x: f32,
    pub touch_end_x: f32,
}

/// The showcase controller.
#[derive(Debug, Clone)]
pub struct Controller {
    slides: Vec<SlideRecord>,
    view: view_switch::State,
    slideshow: slideshow::State,
    gallery: gallery::State,
    zoom: zoom::State,
    overlay: overlay::State,
    swipe: SwipeTracker,
    /// A backdrop release arrived mid-touch; decided when the touch ends.
    backdrop_release_pending: bool,
    /// The previous message completed a swipe.
    swiped_last: bool,
    reset_zoom_on_navigation: bool,
}

impl Controller {
    /// Builds the controller and returns the effects of its initial setup
    /// (first slide shown, autoplay armed, first gallery image requested).
    pub fn new(setup: Setup) -> (Self, Vec<Effect>) {
        let Setup {
            slides,
            images,
            views,
            initial_view,
            preferences,
            reset_zoom_on_navigation,
        } = setup;

        let initial_view = if views.contains(&initial_view) {
            initial_view
        } else {
            views.first().copied().unwrap_or(initial_view)
        };

        let total_slides = slides.len();
        let total_images = images.len();

        let mut controller = Self {
            slideshow: slideshow::State::new(
                total_slides,
                preferences.autoplay,
                preferences.speed,
                preferences.transition,
            ),
            slides,
            view: view_switch::State::new(initial_view, views),
            gallery: gallery::State::new(images),
            zoom: zoom::State::default(),
            overlay: overlay::State::default(),
            swipe: SwipeTracker::default(),
            backdrop_release_pending: false,
            swiped_last: false,
            reset_zoom_on_navigation,
        };

        let mut effects = Vec::new();
        controller.slideshow.handle(slideshow::Message::Show(0));
        controller.sync_autoplay();
        controller.apply_gallery(gallery::Message::Select(0), &mut effects);

        log::info!("Slideshow initialized with {} slides", total_slides);
        log::info!("Gallery initialized with {} images", total_images);

        (controller, effects)
    }

    /// Handle a controller message.
    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        // A finished swipe only shields the backdrop release of the same gesture.
        let after_swipe = std::mem::take(&mut self.swiped_last);
        let mut effects = Vec::new();
        if after_swipe && matches!(msg, Message::BackdropReleased) {
            log::debug!("backdrop release ended a swipe, overlay stays open");
        } else {
            self.dispatch(msg, &mut effects);
        }
        effects
    }

    fn dispatch(&mut self, msg: Message, effects: &mut Vec<Effect>) {
        match msg {
            Message::ViewSwitch(msg) => match self.view.handle(msg) {
                view_switch::Effect::Switched(_) => self.sync_autoplay(),
                view_switch::Effect::Unavailable(_) => {}
            },
            Message::Slideshow(msg) => match self.slideshow.handle(msg) {
                slideshow::Effect::None | slideshow::Effect::SlideChanged(_) => {}
                slideshow::Effect::AutoplaySettingsChanged => {
                    self.sync_autoplay();
                    effects.push(Effect::PersistPreferences);
                }
                slideshow::Effect::TransitionChanged(_) => {
                    effects.push(Effect::PersistPreferences);
                }
            },
            Message::Gallery(msg) => self.apply_gallery(msg, effects),
            Message::Zoom(msg) => {
                let zoom::Effect::ZoomChanged { factor, cursor } = self.zoom.handle(msg);
                log::trace!("zoom {:.3} ({:?})", factor.value(), cursor);
            }
            Message::OpenFullscreen => self.open_overlay(effects),
            Message::CloseFullscreen => self.close_overlay(effects),
            Message::ToggleFullscreen => {
                if self.overlay.is_open() {
                    self.close_overlay(effects);
                } else {
                    self.open_overlay(effects);
                }
            }
            // The overlay re-syncs when the gallery reports the swap.
            Message::FullscreenNext => self.apply_gallery(gallery::Message::Next, effects),
            Message::FullscreenPrevious => {
                self.apply_gallery(gallery::Message::Previous, effects);
            }
            Message::ToggleAutoplay => {
                let enabled = !self.slideshow.autoplay_enabled();
                self.dispatch(
                    Message::Slideshow(slideshow::Message::SetAutoplay(enabled)),
                    effects,
                );
            }
            Message::KeyPressed(key) => {
                if let Some(command) = input::resolve_key(&key, self.input_context()) {
                    effects.push(Effect::SuppressDefault);
                    self.execute(command, effects);
                }
            }
            Message::BackdropReleased => {
                if self.swipe.is_touching() {
                    self.backdrop_release_pending = true;
                } else {
                    self.close_overlay(effects);
                }
            }
            Message::TouchStarted(x) => {
                self.backdrop_release_pending = false;
                self.swipe.touch_started(x);
            }
            Message::TouchEnded(x) => {
                let release_pending = std::mem::take(&mut self.backdrop_release_pending);
                match self.swipe.touch_ended(x) {
                    Some(direction) => {
                        self.swiped_last = !release_pending;
                        let surface = SwipeSurface::for_context(self.input_context());
                        self.execute(surface.command(direction), effects);
                    }
                    // A tap on the backdrop.
                    None if release_pending => self.close_overlay(effects),
                    None => {}
                }
            }
        }
    }

    fn execute(&mut self, command: Command, effects: &mut Vec<Effect>) {
        let msg = match command {
            Command::NextSlide => Message::Slideshow(slideshow::Message::Next),
            Command::PreviousSlide => Message::Slideshow(slideshow::Message::Previous),
            Command::NextImage => Message::Gallery(gallery::Message::Next),
            Command::PreviousImage => Message::Gallery(gallery::Message::Previous),
            Command::OverlayNext => Message::FullscreenNext,
            Command::OverlayPrevious => Message::FullscreenPrevious,
            Command::CloseOverlay => Message::CloseFullscreen,
            Command::ToggleOverlay => Message::ToggleFullscreen,
            Command::ToggleAutoplay => Message::ToggleAutoplay,
            Command::SwitchView(view) => {
                Message::ViewSwitch(view_switch::Message::Switch(view))
            }
        };
        self.dispatch(msg, effects);
    }

    fn apply_gallery(&mut self, msg: gallery::Message, effects: &mut Vec<Effect>) {
        match self.gallery.handle(msg) {
            gallery::Effect::None => {}
            gallery::Effect::BeginLoad(request) => effects.push(Effect::DecodeImage(request)),
            gallery::Effect::Shown { index, token } => {
                effects.push(Effect::ScheduleRestore {
                    token,
                    delay: gallery::RESTORE_DELAY,
                });
                if self.reset_zoom_on_navigation {
                    self.zoom.handle(zoom::Message::Reset);
                }
                if let Some(record) = self.gallery.shown() {
                    self.overlay.handle(overlay::Message::Sync(Mirror::from(record)));
                }
                log::debug!("gallery image {} displayed", index);
            }
            gallery::Effect::LoadFailed { index, error } => {
                log::error!("Failed to load image {}: {}", index, error);
            }
            gallery::Effect::Discarded(token) => {
                log::debug!("discarding stale decode {:?}", token);
            }
        }
    }

    fn open_overlay(&mut self, effects: &mut Vec<Effect>) {
        let mirror = self.gallery.shown().map(Mirror::from);
        if self.overlay.handle(overlay::Message::Open(mirror)) == overlay::Effect::Opened {
            effects.push(Effect::ScrollLock(true));
        }
    }

    fn close_overlay(&mut self, effects: &mut Vec<Effect>) {
        if self.overlay.handle(overlay::Message::Close) == overlay::Effect::Closed {
            effects.push(Effect::ScrollLock(false));
        }
    }

    /// Re-arms the timer when the slideshow is displayed, disarms it otherwise.
    fn sync_autoplay(&mut self) {
        if self.view.current() == View::Slideshow {
            self.slideshow.start_autoplay();
        } else {
            self.slideshow.stop_autoplay();
        }
    }

    fn input_context(&self) -> InputContext {
        InputContext {
            overlay_open: self.overlay.is_open(),
            view: self.view.current(),
        }
    }

    // =========================================================================
    // Operation surface
    // =========================================================================

    /// Steps the slideshow forward for a positive direction, backward otherwise.
    pub fn change_slide(&mut self, direction: i32) -> Vec<Effect> {
        let msg = if direction > 0 {
            slideshow::Message::Next
        } else {
            slideshow::Message::Previous
        };
        self.handle(Message::Slideshow(msg))
    }

    pub fn go_to_slide(&mut self, index: isize) -> Vec<Effect> {
        self.handle(Message::Slideshow(slideshow::Message::Show(index)))
    }

    pub fn switch_view(&mut self, view: View) -> Vec<Effect> {
        self.handle(Message::ViewSwitch(view_switch::Message::Switch(view)))
    }

    pub fn select_image(&mut self, index: usize) -> Vec<Effect> {
        self.handle(Message::Gallery(gallery::Message::Select(index)))
    }

    pub fn next_image(&mut self) -> Vec<Effect> {
        self.handle(Message::Gallery(gallery::Message::Next))
    }

    pub fn previous_image(&mut self) -> Vec<Effect> {
        self.handle(Message::Gallery(gallery::Message::Previous))
    }

    pub fn zoom_in(&mut self) -> Vec<Effect> {
        self.handle(Message::Zoom(zoom::Message::ZoomIn))
    }

    pub fn zoom_out(&mut self) -> Vec<Effect> {
        self.handle(Message::Zoom(zoom::Message::ZoomOut))
    }

    pub fn reset_zoom(&mut self) -> Vec<Effect> {
        self.handle(Message::Zoom(zoom::Message::Reset))
    }

    pub fn open_fullscreen(&mut self) -> Vec<Effect> {
        self.handle(Message::OpenFullscreen)
    }

    pub fn close_fullscreen(&mut self) -> Vec<Effect> {
        self.handle(Message::CloseFullscreen)
    }

    pub fn toggle_fullscreen(&mut self) -> Vec<Effect> {
        self.handle(Message::ToggleFullscreen)
    }

    pub fn fullscreen_next(&mut self) -> Vec<Effect> {
        self.handle(Message::FullscreenNext)
    }

    pub fn fullscreen_prev(&mut self) -> Vec<Effect> {
        self.handle(Message::FullscreenPrevious)
    }

    /// Reports a finished decode for `token`.
    pub fn image_loaded(
        &mut self,
        token: LoadToken,
        result: Result<(), crate::error::Error>,
    ) -> Vec<Effect> {
        self.handle(Message::Gallery(gallery::Message::LoadFinished {
            token,
            result,
        }))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn current_view(&self) -> View {
        self.view.current()
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.slideshow.current()
    }

    #[must_use]
    pub fn current_image(&self) -> usize {
        self.gallery.current()
    }

    #[must_use]
    pub fn zoom_factor(&self) -> ZoomFactor {
        self.zoom.factor()
    }

    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.slideshow.is_autoplay_running()
    }

    /// Token of the armed autoplay timer, if any.
    #[must_use]
    pub fn autoplay_timer(&self) -> Option<TimerToken> {
        self.slideshow.timer()
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            autoplay: self.slideshow.autoplay_enabled(),
            speed: self.slideshow.speed(),
            transition: self.slideshow.transition(),
        }
    }

    #[must_use]
    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }

    #[must_use]
    pub fn view_switch(&self) -> &view_switch::State {
        &self.view
    }

    #[must_use]
    pub fn slideshow(&self) -> &slideshow::State {
        &self.slideshow
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn zoom(&self) -> &zoom::State {
        &self.zoom
    }

    #[must_use]
    pub fn overlay(&self) -> &overlay::State {
        &self.overlay
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        ControllerState {
            current_view: self.view.current(),
            current_slide_index: self.slideshow.current(),
            total_slides: self.slideshow.total(),
            current_image_index: self.gallery.current(),
            total_images: self.gallery.total(),
            autoplay_enabled: self.slideshow.autoplay_enabled(),
            autoplay_speed_ms: self.slideshow.speed().millis(),
            zoom_factor: self.zoom.factor().value(),
            touch_start_x: self.swipe.start_x(),
            touch_end_x: self.swipe.end_x(),
        }
    }
}
