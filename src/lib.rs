// SPDX-License-Identifier: MPL-2.0
//! `pulse_viewer` is a full-window viewer for sequences of short-lived media
//! posts ("pulses"), built with the Iced GUI framework.
//!
//! The viewer keeps its own snapshot of the sequence, steps through it one
//! pulse at a time, and lets the author of a pulse delete it after a
//! confirmation. Everything that touches the outside world (deleting, knowing
//! who is signed in) sits behind the ports in [`application::port`].

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_utils;
