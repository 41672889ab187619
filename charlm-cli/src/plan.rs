//! Experiment plans loaded from JSON.
//!
//! ```json
//! {
//!   "word_limit": 1000,
//!   "experiments": [
//!     { "model_document": "English-Latin1", "model_language": "English",
//!       "data_document": "French_Francais-Latin1", "data_language": "French" }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use charlm_core::experiment::{default_experiments, Experiment, DEFAULT_WORD_LIMIT};

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("cannot read experiment plan: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid experiment plan: {0}")]
    Json(#[from] serde_json::Error),

    #[error("experiment plan lists no experiments")]
    Empty,
}

/// Experiments to run and how many test words each one reads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Plan {
    #[serde(default = "default_word_limit")]
    pub word_limit: usize,
    pub experiments: Vec<Experiment>,
}

fn default_word_limit() -> usize {
    DEFAULT_WORD_LIMIT
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            word_limit: DEFAULT_WORD_LIMIT,
            experiments: default_experiments(),
        }
    }
}

impl Plan {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let reader = BufReader::new(File::open(path)?);
        let plan: Plan = serde_json::from_reader(reader)?;
        if plan.experiments.is_empty() {
            return Err(PlanError::Empty);
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_plan() {
        let plan = Plan::default();
        assert_eq!(plan.word_limit, 1000);
        assert_eq!(plan.experiments.len(), 4);
    }

    #[test]
    fn test_load_plan() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(
            &path,
            r#"{ "experiments": [ {
                "model_document": "Spanish_Espanol-Latin1", "model_language": "Spanish",
                "data_document": "Italian_Italiano-Latin1", "data_language": "Italian" } ] }"#,
        )
        .unwrap();

        let plan = Plan::load(&path).unwrap();
        assert_eq!(plan.word_limit, DEFAULT_WORD_LIMIT);
        assert_eq!(plan.experiments[0].data_language, "Italian");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        assert!(matches!(Plan::load(dir.path().join("missing.json")), Err(PlanError::Io(_))));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(Plan::load(&bad), Err(PlanError::Json(_))));

        let empty = dir.path().join("empty.json");
        fs::write(&empty, r#"{ "word_limit": 5, "experiments": [] }"#).unwrap();
        assert!(matches!(Plan::load(&empty), Err(PlanError::Empty)));
    }
}
