//! Toast notification component.
//!
//! Shows a dismissible notification in the bottom-right corner. The app's
//! subscription dismisses it automatically after a timeout.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use qrgen_core::Severity;

use crate::message::{Message, ToastMessage};
use crate::theme::{
    AMBER, BORDER_RADIUS_LG, GRAY, GREEN, RED, SPACING_SM, SPACING_XS, TEXT, WHITE, button_ghost,
};

/// Toast notification state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Toast type determines the marker and accent color.
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Warning,
    Error,
}

impl ToastType {
    /// Accent color for this toast type.
    pub fn color(&self) -> iced::Color {
        match self {
            ToastType::Success => GREEN,
            ToastType::Warning => AMBER,
            ToastType::Error => RED,
        }
    }

    /// Leading marker glyph.
    pub fn marker(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Warning => "!",
            ToastType::Error => "✕",
        }
    }
}

impl From<Severity> for ToastType {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => ToastType::Warning,
            Severity::Error => ToastType::Error,
        }
    }
}

impl ToastState {
    pub fn new(toast_type: ToastType, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastType::Success, message)
    }
}

/// Renders a toast notification.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let accent = state.toast_type.color();

    let marker = text(state.toast_type.marker()).size(16).color(accent);
    let message_text = text(&state.message).size(14).color(TEXT);

    let dismiss_btn = button(text("×").size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        marker,
        message_text,
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_SM);

    container(content)
        .padding([SPACING_SM, SPACING_SM * 1.5])
        .width(Length::Shrink)
        .max_width(420.0)
        .style(move |_| container::Style {
            background: Some(WHITE.into()),
            border: iced::Border {
                color: accent,
                width: 1.0,
                radius: BORDER_RADIUS_LG.into(),
            },
            shadow: iced::Shadow {
                color: GRAY.scale_alpha(0.5),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
