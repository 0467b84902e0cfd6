pub mod filesystem;

use crate::error::{BoardError, Result};
use crate::types::candidate::Candidate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateDocument {
    List(Vec<Candidate>),
    Wrapped { candidates: Vec<Candidate> },
}

impl CandidateDocument {
    fn into_candidates(self) -> Vec<Candidate> {
        match self {
            Self::List(candidates) | Self::Wrapped { candidates } => candidates,
        }
    }
}

/// Reads candidates from a JSON file or from every `*.json` file below a directory.
///
/// A document is either a bare array or an object with a `candidates` array.
/// Later duplicates of an id are dropped with a warning.
pub fn load_candidates(input: &Path) -> Result<Vec<Candidate>> {
    if !input.exists() {
        return Err(BoardError::InputNotFound(input.display().to_string()));
    }

    let files = if input.is_dir() {
        filesystem::list_json_files(input)
    } else {
        vec![input.to_path_buf()]
    };

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for file in &files {
        let content = std::fs::read_to_string(file)?;
        let document: CandidateDocument = serde_json::from_str(&content)?;
        let parsed = document.into_candidates();
        debug!(file = %file.display(), count = parsed.len(), "loaded candidates");
        for candidate in parsed {
            if seen.insert(candidate.id.clone()) {
                candidates.push(candidate);
            } else {
                warn!(candidate = %candidate.id, file = %file.display(), "duplicate candidate id skipped");
            }
        }
    }

    if candidates.is_empty() {
        return Err(BoardError::EmptyInput(input.display().to_string()));
    }
    Ok(candidates)
}
