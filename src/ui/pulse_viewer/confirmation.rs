// SPDX-License-Identifier: MPL-2.0
//! Delete confirmation dialog.
//!
//! Shown only while a confirmation is pending. Both actions are disabled while
//! the delete is in flight, and the confirm label switches to its progress form.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, opaque, text, Column, Container, Row, Space};
use iced::{alignment::Horizontal, Element, Length};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub delete_in_flight: bool,
}

/// i18n key of the confirm button label.
#[must_use]
pub fn confirm_label_key(delete_in_flight: bool) -> &'static str {
    if delete_in_flight {
        "viewer-delete-in-progress"
    } else {
        "viewer-delete-confirm-button"
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = text(ctx.i18n.tr("viewer-delete-dialog-title")).size(typography::TITLE_SM);
    let body = text(ctx.i18n.tr("viewer-delete-dialog-body")).size(typography::BODY);

    let cancel = button(
        text(ctx.i18n.tr("viewer-delete-cancel-button"))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::secondary)
    .on_press_maybe((!ctx.delete_in_flight).then_some(Message::CancelDelete));

    let confirm = button(
        text(ctx.i18n.tr(confirm_label_key(ctx.delete_in_flight)))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::danger)
    .on_press_maybe((!ctx.delete_in_flight).then_some(Message::ConfirmDelete));

    let actions = Row::new().spacing(spacing::SM).push(cancel).push(confirm);

    let dialog = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(body)
            .push(Space::new().height(Length::Fixed(spacing::XS)))
            .push(actions),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel);

    Container::new(opaque(dialog))
        .center(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}
