// SPDX-License-Identifier: MPL-2.0
//! Stateless rendering of the viewer overlay.
//!
//! Everything here is a projection of a [`ViewModel`]; the only inputs that do
//! not come from the controller are display data (author info, clock, i18n).

use super::component::{Message, Preferences, ViewModel};
use super::confirmation;
use super::state::Segment;
use crate::domain::pulse::{AuthorInfo, MediaKind, Pulse, Timestamp};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, image, mouse_area, opaque, text, Column, Container, Row, Space, Stack,
};
use iced::{Color, ContentFit, Element, Length, Theme};
use std::path::PathBuf;

/// Alt text used when a pulse has no caption.
pub const DEFAULT_ALT: &str = "Pulse";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// `None` when there is no current pulse; renders nothing.
    pub model: Option<ViewModel<'a>>,
    pub author: &'a AuthorInfo,
    pub preferences: Preferences,
    pub now: DateTime<Utc>,
}

/// Where an image is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local(PathBuf),
    /// Not fetched; rendered as its alt text.
    Remote(String),
}

impl ImageSource {
    /// Resolves a media reference: `http(s)://` is remote, `file://` and bare
    /// paths are local.
    #[must_use]
    pub fn resolve(reference: &str) -> Self {
        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(reference.to_string())
        } else if let Some(path) = reference.strip_prefix("file://") {
            Self::Local(PathBuf::from(path))
        } else {
            Self::Local(PathBuf::from(reference))
        }
    }
}

/// Rendering surface for the current pulse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSurface {
    Image {
        source: ImageSource,
        alt: String,
    },
    Video {
        src: String,
        autoplay: bool,
        controls: bool,
    },
}

impl MediaSurface {
    #[must_use]
    pub fn for_pulse(pulse: &Pulse, preferences: Preferences) -> Self {
        match pulse.media_kind() {
            MediaKind::Video => Self::Video {
                src: pulse.media_url().to_string(),
                autoplay: preferences.autoplay_video,
                controls: true,
            },
            MediaKind::Image => Self::Image {
                source: ImageSource::resolve(pulse.media_url()),
                alt: pulse.caption().unwrap_or(DEFAULT_ALT).to_string(),
            },
        }
    }
}

/// Coarse age of a pulse for the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAge {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl RelativeAge {
    /// Future and unrepresentable timestamps read as "just now".
    #[must_use]
    pub fn between(created_at: Timestamp, now: DateTime<Utc>) -> Self {
        let Some(created) = created_at.to_datetime() else {
            return Self::JustNow;
        };
        let elapsed = now.signed_duration_since(created);
        if elapsed.num_minutes() < 1 {
            Self::JustNow
        } else if elapsed.num_hours() < 1 {
            Self::Minutes(elapsed.num_minutes())
        } else if elapsed.num_days() < 1 {
            Self::Hours(elapsed.num_hours())
        } else {
            Self::Days(elapsed.num_days())
        }
    }

    #[must_use]
    pub fn localize(self, i18n: &I18n) -> String {
        let (key, count) = match self {
            Self::JustNow => return i18n.tr("viewer-age-just-now"),
            Self::Minutes(n) => ("viewer-age-minutes", n),
            Self::Hours(n) => ("viewer-age-hours", n),
            Self::Days(n) => ("viewer-age-days", n),
        };
        i18n.tr_with_args(key, &[("count", count.to_string().as_str())])
    }
}

/// First letter of the username, uppercased, for the avatar fallback.
fn initial(username: &str) -> String {
    username
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    // Render guard
    let Some(model) = ctx.model else {
        return Space::new().into();
    };

    let media = media_view(
        MediaSurface::for_pulse(model.pulse, ctx.preferences),
        ctx.i18n,
    );

    let mut card = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(media);

    if ctx.preferences.show_captions {
        if let Some(caption) = model.pulse.caption() {
            card = card.push(caption_overlay(caption));
        }
    }

    card = card.push(navigation_overlay(&model, ctx.i18n));
    card = card.push(
        Column::new()
            .push(progress_bar(&model.progress))
            .push(header(&model, ctx.author, ctx.i18n, ctx.now)),
    );

    let card = Container::new(card)
        .max_width(sizing::CARD_MAX_WIDTH)
        .height(Length::Fill)
        .padding([spacing::LG, 0.0])
        .style(styles::container::card);

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let mut overlay = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(Container::new(opaque(card)).center(Length::Fill));

    if model.confirm_pending {
        overlay = overlay.push(confirmation::view(confirmation::ViewContext {
            i18n: ctx.i18n,
            delete_in_flight: model.delete_in_flight,
        }));
    }

    overlay.into()
}

fn progress_bar<'a>(progress: &[Segment]) -> Element<'a, Message> {
    let segments = progress.iter().map(|segment| {
        Element::from(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PROGRESS_TRACK))
                .style(styles::container::progress_segment(segment.is_filled())),
        )
    });

    Row::with_children(segments)
        .spacing(spacing::XXS)
        .padding([spacing::XS, spacing::SM])
        .into()
}

fn header<'a>(
    model: &ViewModel<'a>,
    author: &'a AuthorInfo,
    i18n: &'a I18n,
    now: DateTime<Utc>,
) -> Element<'a, Message> {
    let avatar: Element<'a, Message> = match ImageSource::resolve(&author.avatar) {
        ImageSource::Local(path) if path.is_file() => image(image::Handle::from_path(path))
            .width(Length::Fixed(sizing::AVATAR))
            .height(Length::Fixed(sizing::AVATAR))
            .content_fit(ContentFit::Cover)
            .into(),
        _ => Container::new(text(initial(&author.username)).size(typography::BODY))
            .center(Length::Fixed(sizing::AVATAR))
            .style(styles::container::avatar)
            .into(),
    };

    let age = RelativeAge::between(model.pulse.created_at(), now).localize(i18n);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(text(author.username.as_str()).size(typography::BODY))
        .push(
            text(age)
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::OVERLAY_HOVER,
                        ..palette::WHITE
                    }),
                }),
        )
        .push(Space::new().width(Length::Fill));

    if model.is_owner {
        row = row.push(
            button(text(i18n.tr("viewer-delete-button")).size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::ghost(palette::WHITE))
                .on_press_maybe((!model.confirm_pending).then_some(Message::RequestDelete)),
        );
    }

    row = row.push(
        button(text("×").size(typography::TITLE_MD))
            .padding([0.0, spacing::XS])
            .style(styles::button::ghost(palette::WHITE))
            .on_press(Message::Close),
    );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .into()
}

fn navigation_overlay<'a>(model: &ViewModel<'a>, i18n: &'a I18n) -> Element<'a, Message> {
    let nav_button = |glyph: &'a str, message: Message| {
        button(
            text(glyph)
                .size(typography::TITLE_SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(message)
    };

    let mut row = Row::new()
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_y(Vertical::Center);

    // Hidden, not disabled, at the ends of the sequence.
    if model.can_go_prev {
        row = row.push(nav_button("‹", Message::NavigatePrevious));
    }
    row = row.push(
        Container::new(
            text(i18n.tr_with_args(
                "viewer-position",
                &[
                    ("current", (model.index + 1).to_string().as_str()),
                    ("total", model.len.to_string().as_str()),
                ],
            ))
            .size(typography::CAPTION),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(spacing::XL),
    );
    if model.can_go_next {
        row = row.push(nav_button("›", Message::NavigateNext));
    }

    row.into()
}

fn caption_overlay<'a>(caption: &'a str) -> Element<'a, Message> {
    Container::new(
        Container::new(text(caption).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::scrim),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Bottom)
    .into()
}

fn media_view<'a>(surface: MediaSurface, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match surface {
        MediaSurface::Image {
            source: ImageSource::Local(path),
            ..
        } if path.is_file() => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        MediaSurface::Image { alt, .. } => text(alt)
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center)
            .into(),
        MediaSurface::Video {
            src,
            autoplay,
            controls,
        } => {
            let mut column = Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(text("▶").size(typography::TITLE_MD))
                .push(text(i18n.tr("viewer-video-placeholder")).size(typography::BODY));
            if autoplay {
                column = column.push(text(i18n.tr("viewer-video-autoplay")).size(typography::CAPTION));
            }
            if controls {
                column = column.push(text(src).size(typography::CAPTION));
            }
            column.into()
        }
    };

    Container::new(content)
        .center(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            text_color: Some(palette::GRAY_200),
            ..Default::default()
        })
        .into()
}
