// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the header, the view selector and the visible view, inside a
//! scrollable. While the fullscreen overlay is open it is stacked on top and
//! the page stops scrolling.

use super::Message;
use crate::domain::showcase::View;
use crate::domain::ui::AutoplaySpeed;
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::showcase::Controller;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{gallery, overlay, slideshow, view_selector};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a Controller,
    pub speeds: &'a [AutoplaySpeed],
    pub displayed: Option<&'a ImageData>,
    pub notice: Option<&'a str>,
    pub scroll_locked: bool,
    pub transition_progress: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controller = ctx.controller;
    let switch = controller.view_switch();

    let mut page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(
            ctx.notice
                .map(|notice| Text::new(notice).size(typography::CAPTION)),
        )
        .push(view_selector::view(ctx.i18n, switch).map(Message::Showcase));

    if switch.is_visible(View::Slideshow) {
        page = page.push(
            slideshow::view(slideshow::ViewContext {
                i18n: ctx.i18n,
                controller,
                speeds: ctx.speeds,
                transition_progress: ctx.transition_progress,
            })
            .map(Message::Showcase),
        );
    } else if switch.is_visible(View::Gallery) {
        page = page.push(
            gallery::view(gallery::ViewContext {
                i18n: ctx.i18n,
                controller,
                displayed: ctx.displayed,
            })
            .map(Message::Showcase),
        );
    }

    // The page stays the same scrollable so its offset survives the overlay.
    // While locked the overlay layer covers it, so the wheel never reaches it.
    let scrollbar = if ctx.scroll_locked {
        Scrollbar::hidden()
    } else {
        Scrollbar::new()
    };
    let page = Scrollable::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(scrollbar));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    let overlay_state = controller.overlay();
    if let Some(mirror) = overlay_state.mirror().filter(|_| overlay_state.is_open()) {
        layers = layers.push(
            overlay::view(overlay::ViewContext {
                i18n: ctx.i18n,
                mirror,
                displayed: ctx.displayed,
            })
            .map(Message::Showcase),
        );
    }

    layers.into()
}
