//! JSON-file backed scoreboard

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ScoreboardError;
use crate::table::{HighScoreTable, ScoreEntry};
use tui_snake_core::Scoreboard;

/// High-score table persisted to a JSON file
#[derive(Debug, Clone)]
pub struct ScoreboardFile {
    path: PathBuf,
    table: HighScoreTable,
}

impl ScoreboardFile {
    /// Load the board at `path`.
    ///
    /// A missing or unreadable file yields an empty board; nothing is written
    /// until the first save.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let table = match read_table(&path) {
            Ok(table) => table,
            Err(ScoreboardError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no scoreboard yet");
                HighScoreTable::new()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable scoreboard");
                HighScoreTable::new()
            }
        };
        Self { path, table }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &HighScoreTable {
        &self.table
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        self.table.entries()
    }

    /// Write the board, replacing the file in one rename
    pub fn save(&self) -> Result<(), ScoreboardError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec(&self.table)?;
        let tmp = tmp_path(&self.path);
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        debug!(path = %self.path.display(), entries = self.table.len(), "scoreboard saved");
        Ok(())
    }
}

impl Scoreboard for ScoreboardFile {
    fn is_qualifying(&self, score: u32) -> bool {
        self.table.is_qualifying(score)
    }

    fn rank_for(&self, score: u32) -> Option<usize> {
        self.table.rank_for(score)
    }

    fn insert(&mut self, name: &str, score: u32) -> Option<usize> {
        let rank = self.table.insert(name, score)?;
        if let Err(err) = self.save() {
            warn!(path = %self.path.display(), %err, "failed to save scoreboard");
        }
        Some(rank)
    }
}

fn read_table(path: &Path) -> Result<HighScoreTable, ScoreboardError> {
    let bytes = fs::read(path)?;
    let mut table: HighScoreTable = serde_json::from_slice(&bytes)?;
    table.normalize();
    Ok(table)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "scoreboard.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
