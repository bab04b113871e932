//! Console shell standing in for the rendering layer.

mod command;
mod render;
mod theme;

pub use command::{ShellCommand, ShellCommandError, HELP};
pub use render::{describe, render_status};
pub use theme::ConsoleThemeApplier;
