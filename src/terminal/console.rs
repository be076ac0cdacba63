//! Terminal implementation backed by crossterm, dialoguer and colored

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use dialoguer::{Confirm, Input};

use super::{event, Key, Terminal};
use crate::editor::RowStyle;

/// Leaves raw mode when dropped, even on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// The user's terminal on stdin/stdout
#[derive(Debug, Default)]
pub struct ConsoleTerminal;

impl ConsoleTerminal {
    pub fn new() -> Self {
        ConsoleTerminal
    }
}

impl Terminal for ConsoleTerminal {
    fn read_key(&mut self) -> Result<Key> {
        io::stdout().flush()?;
        let _raw = RawModeGuard::enable()?;
        Ok(event::read_key()?)
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact()?)
    }

    fn clear(&mut self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn print_line(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }

    fn print_row(&mut self, text: &str, style: RowStyle) -> Result<()> {
        let styled = match style {
            RowStyle::Normal => text.white(),
            RowStyle::Invalid => text.red().strikethrough(),
            RowStyle::Duplicate => text.cyan().italic(),
            RowStyle::Selected => text.yellow().bold(),
        };
        println!("{}", styled.on_black());
        Ok(())
    }

    fn print_error(&mut self, text: &str) -> Result<()> {
        println!("{}", text.red());
        Ok(())
    }
}
