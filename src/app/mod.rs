// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced shell around the showcase controller.
//!
//! The `App` owns the [`Controller`] and performs the effects it returns:
//! image decoding on a blocking thread, the post-swap restore delay, config
//! persistence and the background scroll lock. Startup problems with the
//! settings file or the manifest are shown as a localized notice.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::domain::showcase::View;
use crate::domain::ui::AutoplaySpeed;
use crate::error::Error;
use crate::i18n::I18n;
use crate::manifest::{self, Manifest};
use crate::media::{self, ImageData};
use crate::showcase::gallery::{self, LoadRequest};
use crate::showcase::{self, Controller, Effect, Setup};
use crate::ui::slideshow::TRANSITION_DURATION;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: Controller,
    config: Config,
    /// Directory override for saving the config; `None` uses the resolved
    /// default.
    config_dir: Option<PathBuf>,
    /// Autoplay presets offered in the settings panel.
    speeds: Vec<AutoplaySpeed>,
    /// Decoded pixels of the gallery's displayed image.
    displayed: Option<ImageData>,
    /// Localized startup problem shown under the title.
    notice: Option<String>,
    /// Background scrolling is suppressed while the overlay is open.
    scroll_locked: bool,
    /// When the active slide's entrance started, while it is still running.
    transition_started: Option<Instant>,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.controller.state())
            .field("scroll_locked", &self.scroll_locked)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Reads the manifest, falling back to an empty showcase when it is missing
/// or invalid. The error is returned alongside so it can be shown.
fn load_manifest(path: Option<&Path>) -> (Manifest, Option<Error>) {
    let Some(path) = path else {
        log::warn!("No manifest given, starting with an empty showcase");
        return (Manifest::default(), None);
    };
    match manifest::load(path) {
        Ok(manifest) => (manifest, None),
        Err(err) => {
            log::error!("Failed to load manifest: {}", err);
            (Manifest::default(), Some(err))
        }
    }
}

impl App {
    /// Loads config and manifest, builds the controller and kicks off the
    /// first gallery decode.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let config_dir = flags.config_dir.map(PathBuf::from);

        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let (manifest, manifest_error) =
            load_manifest(flags.manifest_path.as_deref().map(Path::new));
        let notice = manifest_error
            .map(|err| i18n.tr(err.i18n_key()))
            .or_else(|| config_warning.map(|key| i18n.tr(&key)));
        let (controller, effects) = Controller::new(Setup {
            slides: manifest.slides,
            images: manifest.images,
            views: manifest.views,
            initial_view: View::default(),
            preferences: config.preferences(),
            reset_zoom_on_navigation: config.reset_zoom_on_navigation(),
        });

        let now = Instant::now();
        let mut app = App {
            i18n,
            controller,
            config,
            config_dir,
            speeds: manifest.speeds,
            displayed: None,
            notice,
            scroll_locked: false,
            transition_started: Some(now),
            now,
        };
        let task = app.perform(effects);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let autoplay_sub = subscription::create_autoplay_subscription(
            self.controller.autoplay_timer(),
            self.controller.preferences().speed,
        );
        let animation_sub =
            subscription::create_animation_subscription(self.transition_started.is_some());

        Subscription::batch([event_sub, autoplay_sub, animation_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let slide_before = self.controller.current_slide();

        let task = match message {
            Message::Showcase(msg) => {
                let effects = self.controller.handle(msg);
                self.perform(effects)
            }
            Message::ImageDecoded { token, result } => {
                let result = result.map(|data| {
                    // Pixels are only swapped in for the latest request.
                    if self.controller.gallery().pending_token() == Some(token) {
                        self.displayed = Some(data);
                    }
                });
                let effects = self.controller.image_loaded(token, result);
                self.perform(effects)
            }
            Message::AnimationTick(now) => {
                self.now = now;
                if self.transition_progress() >= 1.0 {
                    self.transition_started = None;
                }
                Task::none()
            }
        };

        if self.controller.current_slide() != slide_before {
            let now = Instant::now();
            self.transition_started = Some(now);
            self.now = now;
        }

        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            speeds: &self.speeds,
            displayed: self.displayed.as_ref(),
            notice: self.notice.as_deref(),
            scroll_locked: self.scroll_locked,
            transition_progress: self.transition_progress(),
        })
    }

    /// Entrance progress of the active slide, from 0.0 to 1.0.
    fn transition_progress(&self) -> f32 {
        match self.transition_started {
            Some(started) => {
                let elapsed = self.now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).min(1.0)
            }
            None => 1.0,
        }
    }

    fn perform(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| self.perform_one(effect))
            .collect();
        Task::batch(tasks)
    }

    fn perform_one(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::DecodeImage(request) => decode_task(request),
            // The sleep is created inside the future so it binds to the
            // executor's runtime.
            Effect::ScheduleRestore { token, delay } => Task::perform(
                async move { tokio::time::sleep(delay).await },
                move |()| {
                    Message::Showcase(showcase::Message::Gallery(
                        gallery::Message::RestorePresentation(token),
                    ))
                },
            ),
            Effect::PersistPreferences => {
                self.config.set_preferences(self.controller.preferences());
                if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone())
                {
                    log::error!("Failed to save preferences: {}", err);
                }
                Task::none()
            }
            Effect::ScrollLock(locked) => {
                self.scroll_locked = locked;
                Task::none()
            }
            // Only uncaptured events reach the controller, so there is no
            // default action left to cancel.
            Effect::SuppressDefault => {
                log::trace!("Key handled by the showcase");
                Task::none()
            }
        }
    }
}

/// Decodes a gallery image on a blocking thread.
fn decode_task(request: LoadRequest) -> Task<Message> {
    let LoadRequest { token, source, .. } = request;
    let resource = source.display().to_string();
    Task::perform(
        async move {
            match tokio::task::spawn_blocking(move || media::load_image(&source)).await {
                Ok(result) => result,
                Err(join_error) => Err(Error::decode(resource, join_error)),
            }
        },
        move |result: Result<ImageData, Error>| Message::ImageDecoded { token, result },
    )
}
