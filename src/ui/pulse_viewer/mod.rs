// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay that steps through a sequence of pulses.
//!
//! The overlay keeps its own copy of the sequence so that the host can refresh
//! or shrink its list at any time. Hand every new list to
//! [`State::reconcile`]; the state clamps its position and asks to be closed
//! once nothing is left to show.
//!
//! - [`state`] - snapshot, index, navigation and progress
//! - [`deletion`] - the confirm/delete phase machine
//! - [`component`] - messages in, effects out
//! - [`view`] and [`confirmation`] - stateless rendering
//!
//! ```
//! use pulse_viewer::application::port::StaticIdentity;
//! use pulse_viewer::domain::pulse::{Pulse, PulseId, Timestamp, UserId};
//! use pulse_viewer::ui::pulse_viewer::{Effect, Message, Preferences, State};
//!
//! let pulses: Vec<Pulse> = (0..3)
//!     .map(|i| {
//!         Pulse::new(
//!             PulseId::new(format!("p{i}")),
//!             format!("media/{i}.jpg"),
//!             None,
//!             Timestamp::new(0, 0),
//!             UserId::new("alice"),
//!         )
//!     })
//!     .collect();
//!
//! let identity = StaticIdentity::signed_in(UserId::new("alice"));
//! let (mut viewer, effect) = State::open(&pulses, 1, Preferences::default());
//! assert_eq!(effect, Effect::None);
//!
//! viewer.handle(Message::NavigateNext, &identity);
//! assert_eq!(viewer.index(), 2);
//! assert!(!viewer.can_go_next());
//!
//! assert_eq!(viewer.reconcile(&[]), Effect::Close);
//! ```

pub mod component;
pub mod confirmation;
pub mod deletion;
pub mod state;
pub mod view;

pub use component::{Effect, Message, Preferences, State, ViewModel};
pub use deletion::DeletionPhase;
pub use state::{Segment, ViewState};
pub use view::{ImageSource, MediaSurface, RelativeAge, ViewContext};
