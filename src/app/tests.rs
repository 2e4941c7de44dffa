// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::domain::pulse::PulseId;
use crate::error::DeleteError;
use crate::test_utils::{pulses, AUTHOR};
use crate::ui::pulse_viewer::Message as ViewerMessage;

fn app_with(n: usize, viewer: Option<&str>) -> App {
    let identity = match viewer {
        Some(id) => StaticIdentity::signed_in(UserId::new(id)),
        None => StaticIdentity::anonymous(),
    };
    App {
        pulses: pulses(n),
        identity: Arc::new(identity),
        author: AuthorInfo::new(AUTHOR, ""),
        ..App::default()
    }
}

fn viewer(app: &App) -> &pulse_viewer::State {
    app.viewer.as_ref().expect("viewer open")
}

#[test]
fn open_viewer_starts_at_requested_index() {
    let mut app = app_with(3, None);
    let _ = update::update(&mut app, Message::OpenViewer(1));
    assert_eq!(viewer(&app).index(), 1);
}

#[test]
fn opening_an_empty_feed_closes_immediately() {
    let mut app = app_with(0, None);
    let _ = update::update(&mut app, Message::OpenViewer(0));
    assert!(app.viewer.is_none());
}

#[test]
fn close_message_drops_the_viewer() {
    let mut app = app_with(2, None);
    let _ = update::update(&mut app, Message::OpenViewer(0));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::Close));
    assert!(app.viewer.is_none());
}

#[test]
fn viewer_messages_without_viewer_are_ignored() {
    let mut app = app_with(2, None);
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::NavigateNext));
    assert!(app.viewer.is_none());
}

#[test]
fn successful_delete_removes_pulse_and_reconciles() {
    let mut app = app_with(2, Some(AUTHOR));
    let _ = update::update(&mut app, Message::OpenViewer(1));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::RequestDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::ConfirmDelete));
    assert!(viewer(&app).delete_in_flight());

    let _ = update::update(
        &mut app,
        Message::DeleteCompleted {
            pulse: PulseId::new("p1"),
            outcome: Ok(()),
        },
    );

    assert_eq!(app.pulses.len(), 1);
    let state = viewer(&app);
    assert!(!state.delete_in_flight());
    assert!(!state.confirm_pending());
    assert_eq!(state.len(), 1);
    assert_eq!(state.index(), 0);
    assert_eq!(app.notifications.visible_count(), 1);
}

#[test]
fn deleting_the_last_pulse_closes_the_viewer() {
    let mut app = app_with(1, Some(AUTHOR));
    let _ = update::update(&mut app, Message::OpenViewer(0));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::RequestDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::ConfirmDelete));

    let _ = update::update(
        &mut app,
        Message::DeleteCompleted {
            pulse: PulseId::new("p0"),
            outcome: Ok(()),
        },
    );

    assert!(app.pulses.is_empty());
    assert!(app.viewer.is_none());
}

#[test]
fn failed_delete_keeps_pulse_and_shows_error() {
    let mut app = app_with(2, Some(AUTHOR));
    let _ = update::update(&mut app, Message::OpenViewer(0));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::RequestDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::ConfirmDelete));

    let _ = update::update(
        &mut app,
        Message::DeleteCompleted {
            pulse: PulseId::new("p0"),
            outcome: Err(DeleteError::Storage("disk full".into())),
        },
    );

    assert_eq!(app.pulses.len(), 2);
    let state = viewer(&app);
    assert!(!state.delete_in_flight());
    assert!(!state.confirm_pending());
    let (_, toast) = app.notifications.visible().next().expect("toast");
    assert_eq!(toast.message_key(), "notification-delete-error");
}

#[test]
fn delete_completing_after_close_still_updates_feed() {
    let mut app = app_with(2, Some(AUTHOR));
    let _ = update::update(&mut app, Message::OpenViewer(0));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::RequestDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::ConfirmDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::Close));
    assert!(app.viewer.is_none());

    let _ = update::update(
        &mut app,
        Message::DeleteCompleted {
            pulse: PulseId::new("p0"),
            outcome: Ok(()),
        },
    );
    assert_eq!(app.pulses.len(), 1);
}

#[test]
fn late_completion_does_not_settle_the_next_viewers_delete() {
    let mut app = app_with(3, Some(AUTHOR));
    let _ = update::update(&mut app, Message::OpenViewer(0));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::RequestDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::ConfirmDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::Close));

    let _ = update::update(&mut app, Message::OpenViewer(2));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::RequestDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::ConfirmDelete));
    assert!(viewer(&app).delete_in_flight());

    // The first viewer's request finishes while the second one is waiting.
    let _ = update::update(
        &mut app,
        Message::DeleteCompleted {
            pulse: PulseId::new("p0"),
            outcome: Ok(()),
        },
    );

    assert_eq!(app.pulses.len(), 2);
    let state = viewer(&app);
    assert!(state.delete_in_flight());
    assert!(state.confirm_pending());
    assert_eq!(state.current().map(|p| p.id().as_str()), Some("p2"));
    assert_eq!(state.len(), 2);

    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::ConfirmDelete));
    assert!(app.pending_deletes.contains(&PulseId::new("p2")));
    assert_eq!(app.pending_deletes.len(), 1);

    let _ = update::update(
        &mut app,
        Message::DeleteCompleted {
            pulse: PulseId::new("p2"),
            outcome: Ok(()),
        },
    );
    assert_eq!(app.pulses.len(), 1);
    assert!(app.pending_deletes.is_empty());
    let state = viewer(&app);
    assert!(!state.delete_in_flight());
    assert_eq!(state.current().map(|p| p.id().as_str()), Some("p1"));
}

#[test]
fn reopened_viewer_does_not_resubmit_an_outstanding_delete() {
    let mut app = app_with(2, Some(AUTHOR));
    let _ = update::update(&mut app, Message::OpenViewer(0));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::RequestDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::ConfirmDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::Close));

    let _ = update::update(&mut app, Message::OpenViewer(0));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::RequestDelete));
    let _ = update::update(&mut app, Message::Viewer(ViewerMessage::ConfirmDelete));
    assert!(viewer(&app).delete_in_flight());
    assert_eq!(app.pending_deletes.len(), 1);

    let _ = update::update(
        &mut app,
        Message::DeleteCompleted {
            pulse: PulseId::new("p0"),
            outcome: Ok(()),
        },
    );
    let state = viewer(&app);
    assert!(!state.delete_in_flight());
    assert_eq!(state.current().map(|p| p.id().as_str()), Some("p1"));
    assert!(app.pending_deletes.is_empty());
}

#[test]
fn title_includes_author() {
    let app = app_with(1, None);
    assert!(app.title().starts_with(AUTHOR));
}

#[test]
fn load_feed_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut app = App::default();
    app.load_feed(dir.path().join("missing.toml"));

    assert!(app.pulses.is_empty());
    let (_, toast) = app.notifications.visible().next().expect("toast");
    assert_eq!(toast.message_key(), "notification-feed-load-error");
}
