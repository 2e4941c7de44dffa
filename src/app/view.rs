// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: the feed list, the viewer overlay on
//! top of it, and toasts on top of everything.

use super::Message;
use crate::application::port::IdentityProvider;
use crate::domain::pulse::{AuthorInfo, Pulse};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::pulse_viewer::{self, Preferences, RelativeAge};
use crate::ui::styles;
use chrono::Utc;
use iced::alignment::Vertical;
use iced::widget::{button, text, Column, Container, Row, Scrollable, Space, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub author: &'a AuthorInfo,
    pub pulses: &'a [Pulse],
    pub viewer: Option<&'a pulse_viewer::State>,
    pub identity: &'a dyn IdentityProvider,
    pub preferences: Preferences,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(feed_list(ctx.i18n, ctx.author, ctx.pulses));

    if let Some(viewer) = ctx.viewer {
        layers = layers.push(
            pulse_viewer::view::view(pulse_viewer::ViewContext {
                i18n: ctx.i18n,
                model: viewer.view_model(ctx.identity),
                author: ctx.author,
                preferences: ctx.preferences,
                now: Utc::now(),
            })
            .map(Message::Viewer),
        );
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn feed_list<'a>(
    i18n: &'a I18n,
    author: &'a AuthorInfo,
    pulses: &'a [Pulse],
) -> Element<'a, Message> {
    let heading = if author.username.is_empty() {
        i18n.tr("feed-heading-untitled")
    } else {
        i18n.tr_with_args("feed-heading", &[("username", author.username.as_str())])
    };

    let mut column = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(text(heading).size(typography::TITLE_MD));

    if pulses.is_empty() {
        column = column.push(text(i18n.tr("feed-empty")).size(typography::BODY));
    }

    let now = Utc::now();
    for (index, pulse) in pulses.iter().enumerate() {
        let label = pulse
            .caption()
            .map_or_else(|| pulse_viewer::view::DEFAULT_ALT.to_string(), str::to_string);
        let age = RelativeAge::between(pulse.created_at(), now).localize(i18n);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Column::new()
                    .width(Length::Fill)
                    .push(text(label).size(typography::BODY))
                    .push(text(age).size(typography::CAPTION)),
            )
            .push(
                button(text(i18n.tr("feed-open-button")).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::primary)
                    .on_press(Message::OpenViewer(index)),
            );

        column = column.push(
            Container::new(row)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::panel),
        );
    }

    column = column.push(Space::new().height(Length::Fixed(spacing::LG)));

    Scrollable::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
