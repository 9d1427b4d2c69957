/// Commands a user interface sends to the session.
///
/// # Responsibilities
/// - Names every keypad action.
/// - Maps keypad labels and function keys to buffer text.
pub mod command;
/// The session itself: buffer, registers, history and error display.
pub mod core;
/// Log of successful evaluations with a fixed-size display window.
pub mod history;
/// Turns lines typed at a prompt into session commands.
pub mod input;

pub use self::{
    command::Command,
    core::{Outcome, Session},
};
