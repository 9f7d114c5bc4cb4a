use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::riddle::{BoardPair, Riddle};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed dataset file {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid grid in riddle {riddle_id}: {source}")]
    InvalidGrid {
        riddle_id: String,
        source: BoardError,
    },
    #[error("no solution recorded for riddle {0}")]
    MissingSolution(String),
}

type RawGrid = Vec<Vec<u8>>;

#[derive(Debug, Deserialize)]
struct ChallengeTask {
    train: Vec<TrainPair>,
    test: Vec<TestInput>,
}

#[derive(Debug, Deserialize)]
struct TrainPair {
    input: RawGrid,
    output: RawGrid,
}

// Test entries in some challenge files carry an `output` field too; the
// solutions file is authoritative, so it is not read here.
#[derive(Debug, Deserialize)]
struct TestInput {
    input: RawGrid,
}

/// Reads `<prefix>_challenges.json` and `<prefix>_solutions.json` from
/// `base_dir` and builds one riddle per puzzle id, in the challenge file's
/// key order.
///
/// A missing challenges file means the dataset is absent (`Ok(None)`). A
/// missing solutions file means no solutions are available; riddles with test
/// inputs then fail with [`DatasetError::MissingSolution`]. Each test input
/// is paired with the first candidate solution recorded for its riddle id;
/// further candidates are ignored.
pub fn read_dataset(
    base_dir: impl AsRef<Path>,
    prefix: &str,
) -> Result<Option<Vec<Riddle>>, DatasetError> {
    let base_dir = base_dir.as_ref();
    let challenges_path = base_dir.join(format!("{prefix}_challenges.json"));
    let solutions_path = base_dir.join(format!("{prefix}_solutions.json"));
    if !challenges_path.exists() {
        return Ok(None);
    }

    let challenges: IndexMap<String, ChallengeTask> = read_json(&challenges_path)?;
    let solutions: IndexMap<String, Vec<RawGrid>> = if solutions_path.exists() {
        read_json(&solutions_path)?
    } else {
        IndexMap::new()
    };
    info!("loading dataset {prefix}: {} riddles", challenges.len());

    let mut riddles = Vec::with_capacity(challenges.len());
    for (riddle_id, task) in challenges {
        debug!("building riddle {riddle_id}");
        riddles.push(build_riddle(riddle_id, task, &solutions)?);
    }
    Ok(Some(riddles))
}

fn build_riddle(
    riddle_id: String,
    task: ChallengeTask,
    solutions: &IndexMap<String, Vec<RawGrid>>,
) -> Result<Riddle, DatasetError> {
    let board = |grid: RawGrid| {
        Board::new(grid).map_err(|source| DatasetError::InvalidGrid {
            riddle_id: riddle_id.clone(),
            source,
        })
    };

    let mut train = Vec::with_capacity(task.train.len());
    for pair in task.train {
        train.push(BoardPair::new(board(pair.input)?, board(pair.output)?));
    }

    let mut test = Vec::with_capacity(task.test.len());
    for entry in task.test {
        let solution = solutions
            .get(&riddle_id)
            .and_then(|candidates| candidates.first())
            .ok_or_else(|| DatasetError::MissingSolution(riddle_id.clone()))?;
        test.push(BoardPair::new(board(entry.input)?, board(solution.clone())?));
    }

    Ok(Riddle::new(train, test, Some(riddle_id)))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| DatasetError::Malformed {
        path: path.display().to_string(),
        source,
    })
}
