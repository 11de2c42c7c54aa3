use super::storage::HistoryStore;
use super::DEFAULT_HISTORY_FILE;
use crate::error::Result;
use crate::models::Message;
use crate::ui::log_verbose;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// History kept as a JSON array in a single file.
///
/// Writes are read-then-overwrite with no locking; two processes sharing a
/// file can lose one another's turn.
pub struct FileHistoryStore {
    path: PathBuf,
    verbose: bool,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn log(&self, message: String) {
        log_verbose(self.verbose, &message);
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Vec<Message> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    self.log(format!(
                        "Could not read history {}: {}",
                        self.path.display(),
                        e
                    ));
                }
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Message>>(&content) {
            Ok(messages) => {
                self.log(format!(
                    "Loaded {} messages from {}",
                    messages.len(),
                    self.path.display()
                ));
                messages
            }
            Err(e) => {
                self.log(format!(
                    "Ignoring unparsable history {}: {}",
                    self.path.display(),
                    e
                ));
                Vec::new()
            }
        }
    }

    fn save(&self, messages: &[Message]) -> Result<()> {
        let content = serde_json::to_string_pretty(messages)?;
        fs::write(&self.path, content)?;
        self.log(format!(
            "Saved {} messages to {}",
            messages.len(),
            self.path.display()
        ));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for FileHistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }
}
