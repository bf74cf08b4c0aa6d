// SPDX-License-Identifier: MPL-2.0
//! Fullscreen overlay mirroring the gallery's displayed image.
//!
//! Clicks on the dimmed backdrop close the overlay; clicks on the content
//! are swallowed. The whole layer is opaque so the page beneath neither
//! scrolls nor reacts while it is open.

use crate::i18n::I18n;
use crate::media::ImageData;
use crate::showcase::overlay::Mirror;
use crate::showcase::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Image, Row, Text};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mirror: &'a Mirror,
    /// Decoded pixels of the displayed image, when available.
    pub displayed: Option<&'a ImageData>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let handle = match ctx.displayed {
        Some(data) => data.handle.clone(),
        None => image::Handle::from_path(&ctx.mirror.source),
    };

    let picture = Image::new(handle)
        .width(Length::Fill)
        .height(Length::FillPortion(5))
        .content_fit(ContentFit::Contain);

    let caption = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.mirror.title.clone()).size(typography::TITLE_MD))
        .push(Text::new(ctx.mirror.description.clone()).size(typography::BODY));

    let nav = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(ctx.i18n.tr("overlay-previous")))
                .padding([6, 12])
                .style(styles::button::overlay)
                .on_press(Message::FullscreenPrevious),
        )
        .push(
            button(Text::new(ctx.i18n.tr("overlay-close")))
                .padding([6, 12])
                .style(styles::button::overlay)
                .on_press(Message::CloseFullscreen),
        )
        .push(
            button(Text::new(ctx.i18n.tr("overlay-next")))
                .padding([6, 12])
                .style(styles::button::overlay)
                .on_press(Message::FullscreenNext),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(picture)
        .push(caption)
        .push(nav);

    let bounded = Container::new(content).max_width(sizing::OVERLAY_MAX_WIDTH);
    let backdrop = Container::new(opaque(bounded))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop);

    // Closing on release lets the controller tell a click from a swipe.
    opaque(mouse_area(backdrop).on_release(Message::BackdropReleased))
}
