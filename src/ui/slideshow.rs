// SPDX-License-Identifier: MPL-2.0
//! Slideshow view: the active slide, prev/next controls, indicators and the
//! settings panel.

use crate::domain::showcase::TransitionEffect;
use crate::domain::ui::AutoplaySpeed;
use crate::i18n::I18n;
use crate::showcase::{slideshow, Controller, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{settings, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Image, Row, Text};
use iced::{Element, Length, Padding};
use std::time::Duration;

/// How long a slide takes to settle after becoming active.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(400);

/// Horizontal travel of the `slide` transition, in logical pixels.
const SLIDE_TRAVEL: f32 = 80.0;

/// Inset of the `zoom` transition at its start, in logical pixels.
const ZOOM_INSET: f32 = 32.0;

/// Contextual data needed to render the slideshow.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a Controller,
    pub speeds: &'a [AutoplaySpeed],
    /// Progress of the active slide's entrance, from 0.0 to 1.0.
    pub transition_progress: f32,
}

/// Visual parameters of a slide at a given entrance progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Entrance {
    opacity: f32,
    padding: Padding,
}

fn entrance(effect: TransitionEffect, progress: f32) -> Entrance {
    let p = progress.clamp(0.0, 1.0);
    match effect {
        TransitionEffect::Fade => Entrance {
            opacity: p,
            padding: Padding::ZERO,
        },
        TransitionEffect::Slide => Entrance {
            opacity: 1.0,
            padding: Padding::ZERO.left((1.0 - p) * SLIDE_TRAVEL),
        },
        TransitionEffect::Zoom => Entrance {
            opacity: 1.0,
            padding: Padding::new((1.0 - p) * ZOOM_INSET),
        },
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.controller.slideshow();
    let slides = ctx.controller.slides();

    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);

    // Only the active slide is rendered; the others are hidden.
    match slides.get(state.current()) {
        Some(slide) => {
            let look = entrance(state.transition(), ctx.transition_progress);
            let picture = Image::new(image::Handle::from_path(&slide.source))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
                .opacity(look.opacity);
            column = column.push(
                Container::new(picture)
                    .width(Length::Fill)
                    .padding(look.padding)
                    .align_x(Horizontal::Center),
            );
            if let Some(caption) = &slide.caption {
                column = column.push(
                    Container::new(Text::new(caption.as_str()).size(typography::TITLE_MD))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                );
            }
        }
        None => {
            column = column.push(
                Container::new(Text::new(ctx.i18n.tr("slideshow-empty")).size(typography::BODY))
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );
        }
    }

    if state.total() > 0 {
        let counter = ctx.i18n.tr_with_args(
            "slideshow-counter",
            &[
                ("current", (state.current() + 1).into()),
                ("total", state.total().into()),
            ],
        );
        let controls = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                button(Text::new(ctx.i18n.tr("slideshow-previous")))
                    .padding([6, 12])
                    .on_press(Message::Slideshow(slideshow::Message::Previous)),
            )
            .push(Text::new(counter).size(typography::BODY))
            .push(
                button(Text::new(ctx.i18n.tr("slideshow-next")))
                    .padding([6, 12])
                    .on_press(Message::Slideshow(slideshow::Message::Next)),
            );
        column = column.push(
            Container::new(controls)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

        let mut indicators = Row::new().spacing(spacing::XS);
        for index in 0..state.total() {
            indicators = indicators.push(
                button(Text::new((index + 1).to_string()).size(typography::CAPTION))
                    .padding([2, 8])
                    .width(Length::Shrink)
                    .height(Length::Fixed(sizing::INDICATOR_DOT * 2.0))
                    .style(styles::button_marker(state.is_active(index)))
                    .on_press(Message::Slideshow(slideshow::Message::Show(index as isize))),
            );
        }
        column = column.push(
            Container::new(indicators)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );
    }

    column = column.push(settings::view(settings::ViewContext {
        i18n: ctx.i18n,
        preferences: ctx.controller.preferences(),
        speeds: ctx.speeds,
    }));

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fade_ramps_opacity() {
        assert_abs_diff_eq!(entrance(TransitionEffect::Fade, 0.0).opacity, 0.0);
        assert_abs_diff_eq!(entrance(TransitionEffect::Fade, 0.5).opacity, 0.5);
        assert_abs_diff_eq!(entrance(TransitionEffect::Fade, 1.0).opacity, 1.0);
    }

    #[test]
    fn slide_travels_from_the_left() {
        let start = entrance(TransitionEffect::Slide, 0.0);
        let end = entrance(TransitionEffect::Slide, 1.0);
        assert_abs_diff_eq!(start.padding.left, SLIDE_TRAVEL);
        assert_abs_diff_eq!(end.padding.left, 0.0);
        assert_abs_diff_eq!(start.opacity, 1.0);
    }

    #[test]
    fn zoom_shrinks_the_inset() {
        let start = entrance(TransitionEffect::Zoom, 0.0);
        assert_abs_diff_eq!(start.padding.top, ZOOM_INSET);
        assert_eq!(entrance(TransitionEffect::Zoom, 1.0).padding, Padding::ZERO);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(
            entrance(TransitionEffect::Fade, 3.0),
            entrance(TransitionEffect::Fade, 1.0)
        );
    }
}
