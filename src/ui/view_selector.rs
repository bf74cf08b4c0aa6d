// SPDX-License-Identifier: MPL-2.0
//! View selector: one button per view, the selected one carrying the marker.

use crate::domain::showcase::View;
use crate::i18n::I18n;
use crate::showcase::{view_switch, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::Element;

pub fn view<'a>(i18n: &'a I18n, state: &'a view_switch::State) -> Element<'a, Message> {
    View::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &view| {
            row.push(
                button(Text::new(i18n.tr(view.i18n_key())).size(typography::BODY))
                    .padding([6, 16])
                    .style(styles::button_marker(state.selected() == view))
                    .on_press(Message::ViewSwitch(view_switch::Message::Switch(view))),
            )
        })
        .into()
}
