// SPDX-License-Identifier: MPL-2.0
//! Gallery view: main image with zoom, metadata panel and the thumbnail strip.

use crate::domain::ui::{ZoomCursor, ZoomFactor};
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::showcase::gallery::Presentation;
use crate::showcase::{gallery, zoom, Controller, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, image, mouse_area, Column, Container, Image, Row, Scrollable, Stack, Text};
use iced::{mouse, Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a Controller,
    /// Decoded pixels of the displayed image.
    pub displayed: Option<&'a ImageData>,
}

/// On-screen size of the main image: fitted to the reserved height, then
/// multiplied by the zoom factor and the fade scale.
fn display_size(data: &ImageData, zoom: ZoomFactor, presentation: Presentation) -> (f32, f32) {
    let base_height = sizing::MAIN_IMAGE_HEIGHT;
    let aspect = if data.height == 0 {
        1.0
    } else {
        data.width as f32 / data.height as f32
    };
    let factor = zoom.value() * presentation.scale;
    (base_height * aspect * factor, base_height * factor)
}

fn cursor_interaction(cursor: ZoomCursor) -> mouse::Interaction {
    match cursor {
        ZoomCursor::ZoomIn => mouse::Interaction::ZoomIn,
        ZoomCursor::ZoomOut => mouse::Interaction::ZoomOut,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.controller.gallery();
    if state.total() == 0 {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
    }

    let main_row = Row::new()
        .spacing(spacing::MD)
        .push(main_display(&ctx))
        .push(metadata_panel(&ctx));

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(main_row)
        .push(controls(&ctx))
        .push(thumbnails(&ctx))
        .into()
}

fn main_display<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.controller.gallery();
    let zoom_state = ctx.controller.zoom();

    let picture: Element<'a, Message> = match ctx.displayed {
        Some(data) => {
            let presentation = state.presentation();
            let (width, height) = display_size(data, zoom_state.factor(), presentation);
            let image = Image::new(data.handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .opacity(presentation.opacity);
            let centered = Container::new(image)
                .center_x(Length::Shrink)
                .center_y(Length::Shrink);
            let scrollable = Scrollable::new(centered)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
                .direction(Direction::Both {
                    vertical: Scrollbar::new(),
                    horizontal: Scrollbar::new(),
                });
            mouse_area(scrollable)
                .interaction(cursor_interaction(zoom_state.cursor()))
                .into()
        }
        None => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
            .into(),
    };

    let mut stack = Stack::new().push(picture);
    if state.is_loading() {
        stack = stack.push(
            Container::new(
                Container::new(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY))
                    .padding(spacing::XS)
                    .style(styles::container::loading_badge),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
        );
    }

    Container::new(stack).width(Length::Fill).into()
}

fn metadata_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    if let Some(record) = ctx.controller.gallery().shown() {
        column = column
            .push(Text::new(record.title.clone()).size(typography::TITLE_MD))
            .push(Text::new(record.description.clone()).size(typography::BODY))
            .push(
                Text::new(format!(
                    "{}: {}",
                    ctx.i18n.tr("gallery-category"),
                    record.category
                ))
                .size(typography::CAPTION),
            )
            .push(
                Text::new(format!("{}: {}", ctx.i18n.tr("gallery-date"), record.date))
                    .size(typography::CAPTION),
            );
    }

    Container::new(column)
        .width(Length::Fixed(sizing::METADATA_PANEL_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let zoom_state = ctx.controller.zoom();
    let percent = (zoom_state.factor().value() * 100.0).round() as i64;
    let zoom_label = ctx
        .i18n
        .tr_with_args("gallery-zoom-level", &[("percent", percent.into())]);

    let zoom_out = button(Text::new(ctx.i18n.tr("gallery-zoom-out"))).padding([6, 12]);
    let zoom_out = if zoom_state.factor().is_min() {
        zoom_out
    } else {
        zoom_out.on_press(Message::Zoom(zoom::Message::ZoomOut))
    };
    let zoom_in = button(Text::new(ctx.i18n.tr("gallery-zoom-in"))).padding([6, 12]);
    let zoom_in = if zoom_state.factor().is_max() {
        zoom_in
    } else {
        zoom_in.on_press(Message::Zoom(zoom::Message::ZoomIn))
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(ctx.i18n.tr("gallery-previous")))
                .padding([6, 12])
                .on_press(Message::Gallery(gallery::Message::Previous)),
        )
        .push(
            button(Text::new(ctx.i18n.tr("gallery-next")))
                .padding([6, 12])
                .on_press(Message::Gallery(gallery::Message::Next)),
        )
        .push(zoom_out)
        .push(Text::new(zoom_label).size(typography::BODY))
        .push(zoom_in)
        .push(
            button(Text::new(ctx.i18n.tr("gallery-zoom-reset")))
                .padding([6, 12])
                .on_press(Message::Zoom(zoom::Message::Reset)),
        )
        .push(
            button(Text::new(ctx.i18n.tr("gallery-fullscreen")))
                .padding([6, 12])
                .on_press(Message::ToggleFullscreen),
        );

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn thumbnails<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.controller.gallery();
    let mut strip = Row::new().spacing(spacing::XS).padding(spacing::XXS);
    for record in state.records() {
        let thumb = Image::new(image::Handle::from_path(&record.source))
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT));
        strip = strip.push(
            button(thumb)
                .padding(spacing::XXS)
                .style(styles::button_marker(state.is_active_thumbnail(record.index)))
                .on_press(Message::Gallery(gallery::Message::Select(record.index))),
        );
    }

    Scrollable::new(strip)
        .width(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn data(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    #[test]
    fn display_size_keeps_aspect_ratio() {
        let rest = Presentation {
            opacity: 1.0,
            scale: 1.0,
        };
        let (width, height) = display_size(&data(4, 2), ZoomFactor::default(), rest);
        assert_abs_diff_eq!(height, sizing::MAIN_IMAGE_HEIGHT);
        assert_abs_diff_eq!(width, sizing::MAIN_IMAGE_HEIGHT * 2.0);
    }

    #[test]
    fn display_size_applies_zoom_and_fade_scale() {
        let faded = Presentation {
            opacity: gallery::FADE_OPACITY,
            scale: gallery::FADE_SCALE,
        };
        let (_, height) = display_size(&data(2, 2), ZoomFactor::new(2.0), faded);
        assert_abs_diff_eq!(height, sizing::MAIN_IMAGE_HEIGHT * 2.0 * 0.98, epsilon = 1e-3);
    }

    #[test]
    fn cursor_follows_zoom_hint() {
        assert_eq!(cursor_interaction(ZoomCursor::ZoomIn), mouse::Interaction::ZoomIn);
        assert_eq!(cursor_interaction(ZoomCursor::ZoomOut), mouse::Interaction::ZoomOut);
    }
}
