//! Notes TUI - Terminal form for the note analysis service
//!
//! This crate draws the note form from `notes-core` in a full-screen
//! terminal UI and drives it from the keyboard.
//!
//! # Architecture
//!
//! - **App**: Event loop, key handling, submission task in flight
//! - **UI**: Pure drawing of a `FormView` plus the status bar
//! - **Widgets**: Borderless wrapping note field
//! - **Theme**: Colors and styles

pub mod app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
