//! Terminal capability boundary
//!
//! The editor only talks to the screen and keyboard through [`Terminal`].
//! [`ConsoleTerminal`] is the real implementation; tests script their own.

pub mod console;
pub mod event;

use anyhow::Result;

use crate::editor::RowStyle;

pub use console::ConsoleTerminal;
pub use event::Key;

/// What the editor needs from a terminal
pub trait Terminal {
    /// Block for exactly one keypress
    fn read_key(&mut self) -> Result<Key>;

    /// Ask for a line of free text
    fn prompt(&mut self, message: &str) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> Result<bool>;

    fn clear(&mut self) -> Result<()>;

    fn print_line(&mut self, text: &str) -> Result<()>;

    /// Print one menu row with its display attributes
    fn print_row(&mut self, text: &str, style: RowStyle) -> Result<()>;

    fn print_error(&mut self, text: &str) -> Result<()>;
}
