//! Main application module.
//!
//! Implements the Iced application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//! All state changes happen in [`App::update`]; views are pure functions.

use std::time::Duration;

use iced::keyboard::{self, key::Named};
use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Length, Subscription, Task, Theme, time};

use crate::component::view_toast;
use crate::handler::{MessageHandler, MessageHandlerWithContext, ToastHandler, WorkflowHandler};
use crate::message::{Message, ToastMessage, WorkflowMessage};
use crate::settings::Settings;
use crate::state::{AppState, Services};
use crate::theme::{SPACING_MD, app_theme};
use crate::view::{APP_TITLE, view_main};

/// How long a toast stays on screen.
const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
    /// Capabilities the workflow calls out to.
    pub services: Services,
}

impl App {
    /// Create the application with settings read at startup and native services.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let app = Self::with_parts(settings, Services::native());
        tracing::info!("application ready");
        (app, Task::none())
    }

    /// Create the application from explicit parts.
    pub fn with_parts(settings: Settings, services: Services) -> Self {
        Self {
            state: AppState::new(settings),
            services,
        }
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Workflow(msg) => {
                WorkflowHandler.handle_with_context(&mut self.state, msg, &self.services)
            }
            Message::Toast(msg) => ToastHandler.handle(&mut self.state, msg),
            Message::KeyPressed(key, modifiers) => self.handle_key_press(&key, modifiers),
            Message::Noop => Task::none(),
        }
    }

    /// Handle keyboard shortcuts.
    ///
    /// - Cmd/Ctrl+G: generate
    /// - Cmd/Ctrl+S: save (only when something was generated)
    /// - Escape: dismiss the toast
    fn handle_key_press(
        &mut self,
        key: &keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            keyboard::Key::Character("g") if modifiers.command() => {
                Task::done(WorkflowMessage::Generate.into())
            }
            keyboard::Key::Character("s") if modifiers.command() => {
                if self.state.can_save() {
                    Task::done(WorkflowMessage::Save.into())
                } else {
                    Task::none()
                }
            }
            keyboard::Key::Named(Named::Escape) if self.state.toast.is_some() => {
                Task::done(Message::Toast(ToastMessage::Dismiss))
            }
            _ => Task::none(),
        }
    }

    /// Render the window.
    pub fn view(&self) -> Element<'_, Message> {
        let content = container(view_main(&self.state))
            .width(Length::Fill)
            .height(Length::Fill);

        let Some(toast) = &self.state.toast else {
            return content.into();
        };

        // Bottom-right, above the status bar.
        let toast_row = row![
            Space::new().width(Length::Fill),
            container(view_toast(toast)).padding([0.0, SPACING_MD]),
        ];
        let toast_layer = column![
            Space::new().height(Length::Fill),
            toast_row,
            Space::new().height(Length::Fixed(SPACING_MD * 2.0)),
        ];

        stack![content, toast_layer].into()
    }

    /// Window title.
    pub fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        app_theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        });

        let toast_sub = if self.state.toast.is_some() {
            time::every(TOAST_TIMEOUT).map(|_| Message::Toast(ToastMessage::Dismiss))
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_sub, toast_sub])
    }
}
