//! Interactive PATH editor state and key handling

mod row;

pub use row::{build_rows, Row, RowStyle};

use anyhow::Result;
use thiserror::Error;

use crate::env_file::{EnvFile, EnvSource};
use crate::i18n::Messages;
use crate::model::PathList;
use crate::terminal::{Key, Terminal};
use crate::utils::path::{expand_tilde, DirProbe, RealFs};

/// Recoverable editing failures, shown to the user once and then forgotten
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("not an existing directory: {0}")]
    NotADirectory(String),
}

/// Where a new path goes relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// What the main loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit { saved: bool },
}

/// Editor state: the list, the cursor and at most one pending error.
pub struct PathEditor<P: DirProbe = RealFs> {
    paths: PathList,
    cursor: usize,
    pending_error: Option<String>,
    env_file: EnvFile,
    wrote_file: bool,
    probe: P,
    messages: &'static Messages,
}

impl PathEditor<RealFs> {
    /// Load the initial list from `env_file`, falling back to `env`
    pub fn open(
        env_file: EnvFile,
        env: &dyn EnvSource,
        messages: &'static Messages,
    ) -> Result<Self> {
        let paths = env_file.load(env)?;
        Ok(Self::with_paths(paths, env_file, RealFs, messages))
    }
}

impl<P: DirProbe> PathEditor<P> {
    pub fn with_paths(
        paths: PathList,
        env_file: EnvFile,
        probe: P,
        messages: &'static Messages,
    ) -> Self {
        Self {
            paths,
            cursor: 0,
            pending_error: None,
            env_file,
            wrote_file: false,
            probe,
            messages,
        }
    }

    pub fn paths(&self) -> &PathList {
        &self.paths
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pending_error(&self) -> Option<&str> {
        self.pending_error.as_deref()
    }

    /// Take the pending error; it will not be shown again.
    pub fn consume_error(&mut self) -> Option<String> {
        self.pending_error.take()
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor < self.paths.last_index() {
            self.cursor += 1;
        }
    }

    /// Insert `input` next to the cursor if it names an existing directory.
    ///
    /// The cursor follows the new entry. On error nothing changes.
    pub fn insert(&mut self, input: &str, placement: Placement) -> Result<usize, EditError> {
        let path = expand_tilde(input.trim()).to_string_lossy().into_owned();
        if !self.probe.is_dir(&path) {
            return Err(EditError::NotADirectory(path));
        }

        let index = match placement {
            Placement::Before => self.cursor,
            Placement::After if self.paths.is_empty() => 0,
            Placement::After => self.cursor + 1,
        };
        self.cursor = self.paths.insert(index, path);
        Ok(self.cursor)
    }

    /// Remove the entry under the cursor. No-op on an empty list.
    pub fn remove_selected(&mut self) -> Option<String> {
        let removed = self.paths.remove(self.cursor);
        self.clamp_cursor();
        removed
    }

    /// Drop every entry that is not an existing directory right now
    pub fn remove_nonexistent(&mut self) {
        let probe = &self.probe;
        self.paths.retain(|path| probe.is_dir(path));
        self.clamp_cursor();
    }

    pub fn remove_duplicates(&mut self) {
        self.paths.dedup();
        self.clamp_cursor();
    }

    pub fn save(&mut self) -> Result<()> {
        self.env_file.save(&self.paths)?;
        self.wrote_file = true;
        Ok(())
    }

    /// Whether the env-file has been written during this session
    pub fn wrote_file(&self) -> bool {
        self.wrote_file
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.paths.last_index());
    }

    /// Rows for the current state. Pure: the pending error is left alone.
    pub fn rows(&self) -> Vec<Row<'_>> {
        build_rows(&self.paths, self.cursor, &self.probe)
    }

    /// Redraw the whole screen, consuming the pending error.
    pub fn draw(&mut self, term: &mut dyn Terminal) -> Result<()> {
        let msg = self.messages;

        term.clear()?;
        term.print_line("")?;
        term.print_line("")?;
        term.print_line(&format!(
            "  {}",
            msg.title.replace("{}", self.env_file.variable())
        ))?;
        term.print_line("")?;

        if self.paths.is_empty() {
            term.print_line(&format!("  {}", msg.empty_list))?;
        }
        for row in self.rows() {
            term.print_row(&row.text(), row.style)?;
        }

        term.print_line(msg.help)?;

        if let Some(error) = self.consume_error() {
            term.print_error(&error)?;
        }
        Ok(())
    }

    /// Apply one key. Prompts go through `term`.
    pub fn handle_key(&mut self, key: Key, term: &mut dyn Terminal) -> Result<Flow> {
        match key {
            Key::Char('q') => {
                let saved = term.confirm(self.messages.confirm_save)?;
                if saved {
                    self.save()?;
                }
                return Ok(Flow::Quit { saved });
            }
            Key::Interrupt => return Ok(Flow::Quit { saved: false }),
            Key::Up | Key::Char('k') => self.move_up(),
            Key::Down | Key::Char('j') => self.move_down(),
            Key::Char('o') => self.prompt_insert(Placement::After, term)?,
            Key::Char('O') => self.prompt_insert(Placement::Before, term)?,
            Key::Char('x') => {
                self.remove_selected();
            }
            Key::Char('X') => self.remove_nonexistent(),
            Key::Char('D') => self.remove_duplicates(),
            Key::Char('S') => self.save()?,
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn prompt_insert(&mut self, placement: Placement, term: &mut dyn Terminal) -> Result<()> {
        let input = term.prompt(self.messages.prompt_new_path)?;
        if input.trim().is_empty() {
            return Ok(());
        }

        if let Err(EditError::NotADirectory(path)) = self.insert(&input, placement) {
            self.pending_error = Some(self.messages.error_not_a_directory.replace("{}", &path));
        }
        Ok(())
    }

    /// Draw, read a key, repeat until quit.
    ///
    /// Returns whether the env-file was written at any point in the session,
    /// by `S` or by confirming on quit.
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<bool> {
        loop {
            self.draw(term)?;
            let key = term.read_key()?;
            if let Flow::Quit { .. } = self.handle_key(key, term)? {
                return Ok(self.wrote_file);
            }
        }
    }
}
