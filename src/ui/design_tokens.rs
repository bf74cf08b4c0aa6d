// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the showcase views.

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

```
use iced_reel::ui::design_tokens::{opacity, palette};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
assert_eq!(backdrop.a, 0.85);
```
"#]

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Fullscreen overlay backdrop.
    pub const OVERLAY_STRONG: f32 = 0.85;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod sizing {
    pub const THUMBNAIL_WIDTH: f32 = 96.0;
    pub const THUMBNAIL_HEIGHT: f32 = 64.0;
    pub const INDICATOR_DOT: f32 = 12.0;
    pub const METADATA_PANEL_WIDTH: f32 = 260.0;
    /// Height reserved for the main gallery image at zoom 1.0.
    pub const MAIN_IMAGE_HEIGHT: f32 = 420.0;
    pub const OVERLAY_MAX_WIDTH: f32 = 960.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_increasing() {
        let scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
        ];
        assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn thumbnails_are_landscape() {
        assert!(sizing::THUMBNAIL_WIDTH > sizing::THUMBNAIL_HEIGHT);
    }
}
