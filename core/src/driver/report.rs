//! driver/report.rs
//! Per-codec outcomes and the run summary.
use std::fmt;
use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::telemetry::BenchSnapshot;
use crate::types::HarnessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Done,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Done   => "done",
            Status::Failed => "failed",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecOutcome {
    pub codec: String,
    pub status: Status,
    /// One message per caught error, in the order they occurred.
    pub failures: Vec<String>,
    pub bench: Vec<BenchSnapshot>,
}

impl CodecOutcome {
    pub fn new(codec: &str) -> Self {
        Self { codec: codec.to_string(), status: Status::Done, failures: Vec::new(), bench: Vec::new() }
    }

    pub fn fail(&mut self, err: &HarnessError) {
        self.status = Status::Failed;
        self.failures.push(err.to_string());
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Done
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub outcomes: Vec<CodecOutcome>,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CodecOutcome::passed)
    }

    pub fn failed_codecs(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed())
            .map(|o| o.codec.as_str())
            .collect()
    }

    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), HarnessError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
