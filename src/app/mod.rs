// SPDX-License-Identifier: MPL-2.0
//! Application root: owns the feed and hosts the pulse viewer overlay.
//!
//! The viewer never touches the feed. The `App` executes the viewer's
//! effects (closing, running deletes through the [`PulseStore`]), applies the
//! result to its own pulse list, and hands the new list back to the viewer.
//!
//! [`PulseStore`]: crate::application::port::PulseStore

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{IdentityProvider, StaticIdentity};
use crate::config;
use crate::domain::pulse::{AuthorInfo, Pulse, PulseId, UserId};
use crate::i18n::fluent::I18n;
use crate::infrastructure::feed::{Feed, FeedStore};
use crate::ui::notifications;
use crate::ui::pulse_viewer::{self, Preferences};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    store: Option<Arc<FeedStore>>,
    author: AuthorInfo,
    /// The externally owned sequence; the viewer only ever sees copies.
    pulses: Vec<Pulse>,
    viewer: Option<pulse_viewer::State>,
    /// Deletes handed to the store whose completion has not arrived yet.
    /// Outlives any single viewer, since closing does not cancel them.
    pending_deletes: HashSet<PulseId>,
    identity: Arc<dyn IdentityProvider>,
    preferences: Preferences,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("pulses", &self.pulses.len())
            .field("viewer_open", &self.viewer.is_some())
            .field("pending_deletes", &self.pending_deletes.len())
            .field("viewer", &self.identity.current_viewer())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            store: None,
            author: AuthorInfo::default(),
            pulses: Vec::new(),
            viewer: None,
            pending_deletes: HashSet::new(),
            identity: Arc::new(StaticIdentity::anonymous()),
            preferences: Preferences::default(),
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and feed, then opens the viewer if the feed has pulses.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let viewer_id = flags
            .viewer_id
            .clone()
            .or_else(|| config.identity.viewer_id.clone())
            .filter(|id| !id.trim().is_empty());
        let identity = match viewer_id {
            Some(id) => StaticIdentity::signed_in(UserId::new(id)),
            None => StaticIdentity::anonymous(),
        };

        let mut app = App {
            i18n,
            identity: Arc::new(identity),
            preferences: config.viewer.preferences(),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        if let Some(path) = flags.feed_path.map(PathBuf::from) {
            app.load_feed(path);
        }

        let task = if app.pulses.is_empty() {
            Task::none()
        } else {
            app.open_viewer(flags.index.unwrap_or(0))
        };

        (app, task)
    }

    fn load_feed(&mut self, path: PathBuf) {
        let store = FeedStore::new(path);
        match store.load() {
            Ok(Feed { author, pulses }) => {
                tracing::info!(path = %store.path().display(), pulses = pulses.len(), "feed opened");
                self.author = author;
                self.pulses = pulses;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to open feed");
                self.notifications.push(
                    notifications::Notification::error(err.i18n_key())
                        .with_arg("path", store.path().display().to_string()),
                );
            }
        }
        self.store = Some(Arc::new(store));
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.author.username.is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.author.username)
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(self.viewer.is_some()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            author: &self.author,
            pulses: &self.pulses,
            viewer: self.viewer.as_ref(),
            identity: self.identity.as_ref(),
            preferences: self.preferences,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests;
