//! Main window view.
//!
//! Layout from top to bottom: title bar, input section, options section,
//! action buttons, preview frame, status bar. Views are pure functions of
//! [`AppState`]; every change goes through a [`Message`].

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Font, Length, font};
use qrgen_core::{CorrectionTier, SizeTier};

use crate::component::{section, view_status_bar};
use crate::message::{Message, WorkflowMessage};
use crate::state::AppState;
use crate::theme::{
    GRAY, HEADER_HEIGHT, SPACING_MD, SPACING_SM, WHITE, button_danger, button_primary,
    button_success, header, preview_frame,
};

/// Window and header title.
pub const APP_TITLE: &str = "QR Code Generator";

/// Text shown in the preview frame before anything is generated.
pub const PREVIEW_PLACEHOLDER: &str = "QR Code will appear here";

const LABEL_WIDTH: f32 = 130.0;
const PICK_LIST_WIDTH: f32 = 150.0;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Render the main window.
pub fn view_main(state: &AppState) -> Element<'_, Message> {
    let body = column![
        view_input(state),
        view_options(state),
        view_actions(state),
        section("Generated QR Code", view_preview(state)),
    ]
    .spacing(SPACING_MD)
    .padding(SPACING_MD)
    .height(Length::Fill);

    column![view_header(), body, view_status_bar(&state.status)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header<'a>() -> Element<'a, Message> {
    container(text(APP_TITLE).size(22).font(BOLD).color(WHITE))
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(header)
        .into()
}

fn view_input(state: &AppState) -> Element<'_, Message> {
    let input = text_input(state.workflow.placeholder(), state.workflow.input())
        .on_input(|value| Message::Workflow(WorkflowMessage::InputChanged(value)))
        .on_submit(Message::Workflow(WorkflowMessage::Generate))
        .padding(SPACING_SM)
        .size(14);

    section(
        "Input Data",
        column![text("Enter URL or Text:").size(13), input].spacing(SPACING_SM / 2.0),
    )
}

fn view_options(state: &AppState) -> Element<'_, Message> {
    let size_row = row![
        text("Size:").size(13).width(Length::Fixed(LABEL_WIDTH)),
        pick_list(SizeTier::ALL, Some(state.workflow.size()), |tier| {
            Message::Workflow(WorkflowMessage::SizeSelected(tier))
        })
        .width(Length::Fixed(PICK_LIST_WIDTH)),
    ]
    .align_y(Alignment::Center);

    let correction_row = row![
        text("Error Correction:")
            .size(13)
            .width(Length::Fixed(LABEL_WIDTH)),
        pick_list(
            CorrectionTier::ALL,
            Some(state.workflow.correction()),
            |tier| Message::Workflow(WorkflowMessage::CorrectionSelected(tier)),
        )
        .width(Length::Fixed(PICK_LIST_WIDTH)),
    ]
    .align_y(Alignment::Center);

    section(
        "QR Code Options",
        column![size_row, correction_row].spacing(SPACING_SM),
    )
}

fn view_actions(state: &AppState) -> Element<'_, Message> {
    let generate = button(text("Generate QR Code").size(14).font(BOLD))
        .on_press(Message::Workflow(WorkflowMessage::Generate))
        .padding([SPACING_SM, SPACING_MD])
        .style(button_primary);

    let save = button(text("Save QR Code").size(14))
        .on_press_maybe(
            state
                .can_save()
                .then_some(Message::Workflow(WorkflowMessage::Save)),
        )
        .padding([SPACING_SM, SPACING_MD])
        .style(button_success);

    let clear = button(text("Clear").size(14))
        .on_press(Message::Workflow(WorkflowMessage::Clear))
        .padding([SPACING_SM, SPACING_MD])
        .style(button_danger);

    row![generate, save, Space::new().width(Length::Fill), clear]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}

fn view_preview(state: &AppState) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &state.preview {
        Some(handle) => {
            let side = state.settings.display.preview_size() as f32;
            iced::widget::image(handle.clone())
                .width(Length::Fixed(side))
                .height(Length::Fixed(side))
                .into()
        }
        None => text(PREVIEW_PLACEHOLDER).size(14).color(GRAY).into(),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(preview_frame)
        .into()
}
