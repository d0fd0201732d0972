//! Workflow controller: the explicit three-phase state machine of a session.
//!
//! ```text
//! Upload ──begin──▶ Optimizing ──ok──▶ Review
//!   ▲                   │                │
//!   └──────failure──────┘                │
//!   └───────────────reset────────────────┘
//! ```
//!
//! The machine is synchronous and owns no I/O. The caller takes the
//! `OptimizationRequest` from `begin_optimization`, performs the call without
//! holding the session lock, and hands the outcome to `complete_optimization`.
//! While `Optimizing`, every other mutating action is refused; that refusal is
//! what keeps a session to one in-flight call.

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::intake::{job_description_length, ResumeDocument};
use crate::models::resume::{OptimizationResult, ResumeData};
use crate::optimization::client::OptimizationError;
use crate::workflow::editing::{apply_edit, EditError, ResumeEdit};

pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

/// The only failure text a user ever sees for a failed optimization.
pub const OPTIMIZATION_FAILED_NOTICE: &str =
    "Failed to optimize resume. Please check your API key and file content.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Upload,
    Optimizing,
    Review,
}

impl Phase {
    /// Same spelling as the serialized snapshot field.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Upload => "UPLOAD",
            Phase::Optimizing => "OPTIMIZING",
            Phase::Review => "REVIEW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Please upload a resume before optimizing.")]
    MissingResume,

    #[error("Please provide a detailed job description (at least {min} characters, got {actual}).")]
    JobDescriptionTooShort { actual: usize, min: usize },

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("Cannot {action} during the {} step", .phase.as_str())]
    NotAllowed { action: &'static str, phase: Phase },
}

impl WorkflowError {
    /// Validation failures are correctable by the user right away; `NotAllowed`
    /// means the action does not exist in the current phase.
    pub fn is_validation(&self) -> bool {
        !matches!(self, WorkflowError::NotAllowed { .. })
    }
}

/// Inputs captured at the moment an attempt begins.
#[derive(Debug, Clone)]
pub struct OptimizationRequest {
    pub document: ResumeDocument,
    pub job_description: String,
}

#[derive(Debug, Clone)]
pub struct Workflow {
    phase: Phase,
    document: Option<ResumeDocument>,
    job_description: String,
    result: Option<OptimizationResult>,
    notice: Option<String>,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self {
            phase: Phase::Upload,
            document: None,
            job_description: String::new(),
            result: None,
            notice: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn document(&self) -> Option<&ResumeDocument> {
        self.document.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    /// Held only in `Review`.
    pub fn result(&self) -> Option<&OptimizationResult> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn job_description_chars(&self) -> usize {
        job_description_length(self.job_description.trim())
    }

    /// Whether the primary action would be accepted right now.
    pub fn can_optimize(&self) -> bool {
        self.phase == Phase::Upload
            && self.document.is_some()
            && self.job_description_chars() >= MIN_JOB_DESCRIPTION_CHARS
    }

    fn require(&self, phase: Phase, action: &'static str) -> Result<(), WorkflowError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(WorkflowError::NotAllowed {
                action,
                phase: self.phase,
            })
        }
    }

    /// Records an already-validated résumé, replacing any earlier one.
    pub fn attach_resume(&mut self, document: ResumeDocument) -> Result<(), WorkflowError> {
        self.require(Phase::Upload, "upload a resume")?;
        info!(
            "Resume captured: {} ({} bytes)",
            document.file_name(),
            document.size_bytes()
        );
        self.document = Some(document);
        Ok(())
    }

    /// Stores the job description as typed and returns its character count.
    pub fn set_job_description(&mut self, text: String) -> Result<usize, WorkflowError> {
        self.require(Phase::Upload, "edit the job description")?;
        self.job_description = text;
        Ok(job_description_length(&self.job_description))
    }

    /// `Upload → Optimizing`. Rejected without any change unless a résumé is
    /// captured and the trimmed job description reaches the minimum length.
    pub fn begin_optimization(&mut self) -> Result<OptimizationRequest, WorkflowError> {
        self.require(Phase::Upload, "start an optimization")?;

        let document = self.document.clone().ok_or(WorkflowError::MissingResume)?;
        let actual = self.job_description_chars();
        if actual < MIN_JOB_DESCRIPTION_CHARS {
            return Err(WorkflowError::JobDescriptionTooShort {
                actual,
                min: MIN_JOB_DESCRIPTION_CHARS,
            });
        }

        self.notice = None;
        self.phase = Phase::Optimizing;
        Ok(OptimizationRequest {
            document,
            job_description: self.job_description.clone(),
        })
    }

    /// `Optimizing → Review` on success, `Optimizing → Upload` on failure.
    pub fn complete_optimization(
        &mut self,
        outcome: Result<OptimizationResult, OptimizationError>,
    ) -> Result<Phase, WorkflowError> {
        self.require(Phase::Optimizing, "complete an optimization")?;

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.phase = Phase::Review;
            }
            Err(e) => {
                error!("Optimization failed: {e}");
                self.result = None;
                self.notice = Some(OPTIMIZATION_FAILED_NOTICE.to_string());
                self.phase = Phase::Upload;
            }
        }
        Ok(self.phase)
    }

    /// Replaces the held result with one carrying the edit. Score and keyword
    /// lists are copied unchanged.
    pub fn apply_edit(&mut self, edit: &ResumeEdit) -> Result<&ResumeData, WorkflowError> {
        self.require(Phase::Review, "edit the resume")?;
        let current = self.result.as_ref().ok_or(WorkflowError::NotAllowed {
            action: "edit the resume",
            phase: self.phase,
        })?;

        let updated = OptimizationResult {
            optimized_resume: apply_edit(&current.optimized_resume, edit)?,
            ..current.clone()
        };
        let held = self.result.insert(updated);
        Ok(&held.optimized_resume)
    }

    /// `Review → Upload`. Drops the result and every edit made to it; the
    /// captured résumé and job description stay for another attempt.
    pub fn reset(&mut self) -> Result<(), WorkflowError> {
        self.require(Phase::Review, "start over")?;
        self.result = None;
        self.phase = Phase::Upload;
        Ok(())
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
