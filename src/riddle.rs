use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::board::Board;
use crate::palette::{BOARD_GAP, PAIR_GAP};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("riddle has no id to derive a filename from")]
    MissingId,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to encode riddle: {0}")]
    Json(#[from] serde_json::Error),
}

/// One training or test example: an input grid and its output grid.
///
/// Input and output may differ in shape; display-side padding keeps them
/// aligned, nothing is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPair {
    pub input: Board,
    pub output: Board,
}

impl BoardPair {
    pub fn new(input: Board, output: Board) -> Self {
        Self { input, output }
    }

    /// Side-by-side rendition of the input and (optionally) output grids.
    ///
    /// With `with_output`, the line count is the taller board's row count and
    /// the shorter board contributes its empty-row placeholder beyond its own
    /// rows; without, only the input's rows are produced.
    pub fn render(&self, colored: bool, with_output: bool) -> String {
        let max_row = if with_output {
            self.input.num_rows().max(self.output.num_rows())
        } else {
            self.input.num_rows()
        };
        let mut lines = Vec::with_capacity(max_row);
        for row in 0..max_row {
            let mut parts = Vec::new();
            if row >= self.input.num_rows() {
                parts.push(self.input.render_empty_row());
            } else {
                parts.push(self.input.render_row(row, colored));
            }
            if with_output {
                parts.push(BOARD_GAP.to_string());
                if row >= self.output.num_rows() {
                    parts.push(self.output.render_empty_row());
                } else {
                    parts.push(self.output.render_row(row, colored));
                }
            }
            lines.push(parts.concat());
        }
        lines.join("\n")
    }

    /// Numeric views of the pair; the output is withheld when the caller must
    /// not see the solution.
    pub fn as_i64(&self, with_solution: bool) -> (Vec<Vec<i64>>, Option<Vec<Vec<i64>>>) {
        let output = with_solution.then(|| self.output.to_i64());
        (self.input.to_i64(), output)
    }
}

/// A full puzzle task: training pairs with known outputs plus test pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    pub train: Vec<BoardPair>,
    pub test: Vec<BoardPair>,
    /// Dataset key this riddle was loaded under. Not persisted; the id lives
    /// in the filename.
    #[serde(skip)]
    pub riddle_id: Option<String>,
}

impl Riddle {
    pub fn new(train: Vec<BoardPair>, test: Vec<BoardPair>, riddle_id: Option<String>) -> Self {
        Self {
            train,
            test,
            riddle_id,
        }
    }

    /// All pairs rendered in order, train then test, separated by the blank
    /// pair gap line.
    pub fn render(&self, colored: bool, with_outputs: bool) -> String {
        self.train
            .iter()
            .map(|pair| pair.render(colored, true))
            .chain(self.test.iter().map(|pair| pair.render(colored, with_outputs)))
            .collect::<Vec<_>>()
            .join(PAIR_GAP)
    }

    /// Writes `<data_dir>/<subdir>/<riddle_id>.json` with 4-space indentation.
    /// The directory must already exist.
    pub fn save_json(
        &self,
        data_dir: impl AsRef<Path>,
        subdir: &str,
    ) -> Result<PathBuf, SaveError> {
        let id = self.riddle_id.as_deref().ok_or(SaveError::MissingId)?;
        let path = data_dir.as_ref().join(subdir).join(format!("{id}.json"));
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser)?;
        writer.flush()?;
        Ok(path)
    }
}
