// SPDX-License-Identifier: MPL-2.0
//! Slideshow settings panel: autoplay checkbox, speed presets and the
//! transition-effect selector.

use crate::domain::showcase::TransitionEffect;
use crate::domain::ui::AutoplaySpeed;
use crate::i18n::I18n;
use crate::showcase::{slideshow, Message, Preferences};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, checkbox, pick_list, Column, Container, Row, Text};
use iced::{Element, Length};
use std::fmt;

/// Contextual data needed to render the settings panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub preferences: Preferences,
    pub speeds: &'a [AutoplaySpeed],
}

/// Localized entry of the transition selector.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TransitionOption {
    effect: TransitionEffect,
    label: String,
}

impl fmt::Display for TransitionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn transition_options(i18n: &I18n) -> Vec<TransitionOption> {
    TransitionEffect::ALL
        .iter()
        .map(|&effect| TransitionOption {
            effect,
            label: i18n.tr(effect.i18n_key()),
        })
        .collect()
}

/// Interval in seconds as shown on a preset button.
fn speed_seconds(speed: AutoplaySpeed) -> f64 {
    speed.millis() as f64 / 1000.0
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let autoplay = checkbox(ctx.preferences.autoplay)
        .label(ctx.i18n.tr("settings-autoplay"))
        .on_toggle(|enabled| Message::Slideshow(slideshow::Message::SetAutoplay(enabled)));

    let mut speeds = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("settings-speed")).size(typography::BODY));
    for &speed in ctx.speeds {
        let label = ctx.i18n.tr_with_args(
            "settings-speed-seconds",
            &[("seconds", speed_seconds(speed).into())],
        );
        speeds = speeds.push(
            button(Text::new(label).size(typography::BODY))
                .padding([6, 12])
                .style(styles::button_marker(speed == ctx.preferences.speed))
                .on_press(Message::Slideshow(slideshow::Message::SetSpeed(speed))),
        );
    }

    let options = transition_options(ctx.i18n);
    let selected = options
        .iter()
        .find(|option| option.effect == ctx.preferences.transition)
        .cloned();
    let picker = pick_list(options, selected, |option: TransitionOption| {
        Message::Slideshow(slideshow::Message::SetTransition(option.effect))
    });

    let transition = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("settings-transition")).size(typography::BODY))
        .push(picker);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(autoplay)
            .push(speeds)
            .push(transition),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}
