//! Status bar along the bottom of the window.

use iced::widget::{container, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::theme::{SPACING_SM, SPACING_XS, status_bar};

/// Single line of status text, left aligned.
pub fn view_status_bar(status: &str) -> Element<'_, Message> {
    container(text(status).size(12))
        .padding([SPACING_XS, SPACING_SM])
        .width(Length::Fill)
        .style(status_bar)
        .into()
}
