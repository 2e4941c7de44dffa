// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Primary action (host "open" buttons).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_600,
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Round translucent button floating over media (previous/next).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::BACKDROP,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Borderless glyph button used in the viewer header (close, delete).
pub fn ghost(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Destructive confirmation button.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::ERROR_600, WHITE),
        button::Status::Disabled => (
            Color {
                a: opacity::DISABLED,
                ..palette::ERROR_500
            },
            Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            },
        ),
        button::Status::Active => (palette::ERROR_500, WHITE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Neutral secondary button, adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_200, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_HOVER,
            ..bg_color
        },
        button::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..bg_color
        },
        _ => bg_color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
