// SPDX-License-Identifier: MPL-2.0
//! Toast rendering for visible notifications.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Resolves the notification text through i18n.
    #[must_use]
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        }
    }

    pub fn view<'a>(
        id: NotificationId,
        notification: &'a Notification,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let glyph = text(notification.severity().glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let dismiss = button(text("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(id))
            .padding([0.0, spacing::XS])
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Container::new(text(Self::message_text(notification, i18n)).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Bottom-right stack of all visible toasts.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|(id, notification)| Self::view(id, notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Space::new().into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        _ => None,
    };

    button::Style {
        background: alpha.map(|a| Background::Color(Color { a, ..text_color })),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
