//! Theme, colors, spacing and widget styles.
//!
//! Style functions receive `&Theme` and a widget status:
//!
//! ```rust,ignore
//! button(text("Generate QR Code")).style(button_primary)
//! ```

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// COLORS
// =============================================================================

/// Header background and section titles.
pub const NAVY: Color = Color::from_rgb8(0x2c, 0x3e, 0x50);
/// Generate button.
pub const BLUE: Color = Color::from_rgb8(0x34, 0x98, 0xdb);
/// Save button and success notices.
pub const GREEN: Color = Color::from_rgb8(0x27, 0xae, 0x60);
/// Clear button and error notices.
pub const RED: Color = Color::from_rgb8(0xe7, 0x4c, 0x3c);
/// Warning notices.
pub const AMBER: Color = Color::from_rgb8(0xf3, 0x9c, 0x12);
/// Window background.
pub const BACKGROUND: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);
/// Status bar background.
pub const STATUS_BACKGROUND: Color = Color::from_rgb8(0xec, 0xf0, 0xf1);
/// Borders and muted text.
pub const GRAY: Color = Color::from_rgb8(0x95, 0xa5, 0xa6);
pub const WHITE: Color = Color::WHITE;
pub const TEXT: Color = Color::from_rgb8(0x1a, 0x1a, 0x1a);

// =============================================================================
// SPACING
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - label to control
pub const SPACING_SM: f32 = 10.0;

/// Medium spacing - section padding
pub const SPACING_MD: f32 = 20.0;

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Large radius - toasts
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Header bar height.
pub const HEADER_HEIGHT: f32 = 80.0;

// =============================================================================
// THEME CREATION
// =============================================================================

/// The application's light theme.
pub fn app_theme() -> Theme {
    Theme::custom(
        "QR Light".to_string(),
        Palette {
            background: BACKGROUND,
            text: TEXT,
            primary: BLUE,
            success: GREEN,
            warning: AMBER,
            danger: RED,
        },
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

fn filled_button(base: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => base,
        button::Status::Hovered => darken(base, 0.08),
        button::Status::Pressed => darken(base, 0.16),
        button::Status::Disabled => base.scale_alpha(0.4),
    };
    let shadow = match status {
        button::Status::Active | button::Status::Hovered => Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        button::Status::Pressed | button::Status::Disabled => Shadow::default(),
    };
    button::Style {
        background: Some(background.into()),
        text_color: if status == button::Status::Disabled {
            WHITE.scale_alpha(0.7)
        } else {
            WHITE
        },
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow,
        ..Default::default()
    }
}

/// Generate button.
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(BLUE, status)
}

/// Save button.
pub fn button_success(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(GREEN, status)
}

/// Clear button.
pub fn button_danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(RED, status)
}

/// Borderless button used for the toast dismiss action.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Color::from_rgba(0.0, 0.0, 0.0, 0.06).into())
            }
            button::Status::Active | button::Status::Disabled => None,
        },
        text_color: GRAY,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Dark title bar.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(NAVY.into()),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Bordered group box around a form section.
pub fn section(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(BACKGROUND.into()),
        border: Border {
            color: GRAY,
            width: 1.0,
            radius: BORDER_RADIUS_SM.into(),
        },
        ..Default::default()
    }
}

/// Sunken white frame that holds the preview.
pub fn preview_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        text_color: Some(GRAY),
        border: Border {
            color: GRAY,
            width: 2.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Status bar along the bottom edge.
pub fn status_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(STATUS_BACKGROUND.into()),
        text_color: Some(TEXT),
        border: Border {
            color: GRAY,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Multiply the RGB channels by `1.0 - amount`.
fn darken(color: Color, amount: f32) -> Color {
    let factor = (1.0 - amount).clamp(0.0, 1.0);
    Color {
        r: color.r * factor,
        g: color.g * factor,
        b: color.b * factor,
        a: color.a,
    }
}
