//! Input handler for the shell using rustyline
//!
//! Line editing plus optional history persisted next to the config file.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Input handler managing the readline interface and command history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        Ok(InputHandler {
            editor: DefaultEditor::new()?,
            history_path: None,
        })
    }

    /// Create input handler with persistent history
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if history_file.exists() {
            let _ = editor.load_history(&history_file);
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
        })
    }

    /// Read a line of input from user
    ///
    /// The line is returned exactly as typed; only the history entry is trimmed.
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input (possibly empty)
    /// - Ok(None) for EOF (Ctrl-D) or interrupt (Ctrl-C)
    /// - Err for other readline failures
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if let Some(entry) = history_entry(&line) {
                    let _ = self.editor.add_history_entry(entry);
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Save history to disk; called on graceful shutdown
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.editor.save_history(path)?;
        }
        Ok(())
    }
}

/// History text for a line; blank lines are not recorded
fn history_entry(line: &str) -> Option<&str> {
    Some(line.trim()).filter(|entry| !entry.is_empty())
}
