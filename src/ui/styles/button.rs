// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

type StyleFn = fn(&Theme, button::Status) -> button::Style;

/// Style for the control carrying the active marker (view selector, slide
/// indicator, speed preset, thumbnail).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        _ => (palette::PRIMARY_500, palette::PRIMARY_400),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Style for controls without the active marker.
/// Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_200, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Picks [`selected`] or [`unselected`].
pub fn marker(active: bool) -> StyleFn {
    if active {
        selected
    } else {
        unselected
    }
}

/// Translucent style for buttons drawn over the fullscreen backdrop.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.35,
        _ => 0.2,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
