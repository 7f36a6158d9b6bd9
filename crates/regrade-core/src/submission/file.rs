use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GradingPolicy;
use crate::error::Result;
use crate::feedback::{GradeBreakdown, ScoreTotal, Trailer};

use super::Identity;

/// A feedback file read fully into memory.
#[derive(Debug, Clone)]
pub struct FeedbackFile {
    path: PathBuf,
    name: String,
    lines: Vec<String>,
}

impl FeedbackFile {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Ok(Self::from_content(path, &content))
    }

    pub fn from_content<P: AsRef<Path>>(path: P, content: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path,
            name,
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without its directory
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn trailer(&self) -> Result<Trailer> {
        Ok(Trailer::scan(&self.lines)?)
    }

    pub fn grade(&self, policy: &GradingPolicy) -> Result<GradeBreakdown> {
        Ok(GradeBreakdown::compute(&self.trailer()?, policy))
    }

    pub fn score_total(&self) -> Result<ScoreTotal> {
        Ok(ScoreTotal::find(&self.lines)?)
    }

    pub fn identity(&self, policy: &GradingPolicy) -> Result<Identity> {
        Ok(Identity::decode(&self.name, policy.name_suffix_len)?)
    }

    /// Feedback text preceding the trailer
    pub fn body(&self, trailer: &Trailer) -> &[String] {
        trailer.body(&self.lines)
    }
}
