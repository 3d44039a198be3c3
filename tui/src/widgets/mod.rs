//! Widgets
//!
//! Small borderless widgets the form is drawn from.

mod note_field;

pub use note_field::{wrap_lines, NoteField};
