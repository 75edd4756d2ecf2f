use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use super::super::domain::ClientProfile;
use super::super::offers::OfferResult;
use super::super::segmentation::SegmentResult;
use super::markdown::render_proposal;

/// Failure to persist a proposal. Callers may retry; the evaluation itself is unaffected.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unable to create export directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to write proposal {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// `Proposition_<client name>.md`, with spaces and path separators replaced by underscores.
pub fn proposal_file_name(client_name: &str) -> String {
    let stem: String = client_name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("Proposition_{stem}.md")
}

/// Writes rendered proposals into a single directory.
#[derive(Debug, Clone)]
pub struct ProposalExporter {
    directory: PathBuf,
}

impl ProposalExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, profile: &ClientProfile) -> PathBuf {
        self.directory.join(proposal_file_name(&profile.client_name))
    }

    /// Render and write the proposal, replacing any previous file for the same client.
    pub fn export(
        &self,
        profile: &ClientProfile,
        segment: &SegmentResult,
        offers: &OfferResult,
        date: NaiveDate,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.directory).map_err(|source| ExportError::CreateDirectory {
            path: self.directory.clone(),
            source,
        })?;

        let path = self.path_for(profile);
        let content = render_proposal(profile, segment, offers, date);
        fs::write(&path, content).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), offers = offers.offers.len(), "proposal exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(
            proposal_file_name("Client DEMO"),
            "Proposition_Client_DEMO.md"
        );
    }

    #[test]
    fn file_name_cannot_escape_directory() {
        assert_eq!(
            proposal_file_name("../etc/passwd"),
            "Proposition_.._etc_passwd.md"
        );
        assert_eq!(proposal_file_name("  SARL Dupont  "), "Proposition_SARL_Dupont.md");
    }
}
