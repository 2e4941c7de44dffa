// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed full-window layer behind the viewer card.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// The viewer card holding the media.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Generic panel surface used for dialogs and the host list.
///
/// The color is derived from the active Iced `Theme` background so the panel
/// stays readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::OPAQUE,
        ))),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// One segment of the progress bar.
pub fn progress_segment(filled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = if filled {
            opacity::OPAQUE
        } else {
            opacity::OVERLAY_MEDIUM
        };
        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Gradient-free scrim under header and caption text.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Circular avatar placeholder holding the author's initial.
pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::PRIMARY_500
        })),
        text_color: Some(WHITE),
        border: Border {
            color: WHITE,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
