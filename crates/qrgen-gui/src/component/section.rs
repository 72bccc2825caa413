//! Titled group box.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::theme::{NAVY, SPACING_SM, section as section_style};

/// Wrap `content` in a bordered box with a bold title above it.
pub fn section<'a>(title: &'a str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let heading = text(title)
        .size(15)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        })
        .color(NAVY);

    column![
        heading,
        container(content)
            .padding(SPACING_SM)
            .width(Length::Fill)
            .style(section_style),
    ]
    .spacing(SPACING_SM / 2.0)
    .into()
}
