//! Result presentation: what the client renders for a session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::intake::job_description_length;
use crate::models::resume::{OptimizationResult, ResumeData};
use crate::workflow::machine::{Phase, Workflow};
use crate::workflow::sessions::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent alignment! High chance of parsing.",
            ScoreBand::Good => "Good start. Try adding more missing keywords.",
            ScoreBand::NeedsWork => "Needs optimization to pass the filter.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub match_score: u8,
    pub score_band: ScoreBand,
    pub verdict: &'static str,
    pub extracted_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub resume: ResumeData,
    /// The skills list as the editable comma-delimited blob.
    pub skills_text: String,
}

impl From<&OptimizationResult> for ReviewView {
    fn from(result: &OptimizationResult) -> Self {
        let band = ScoreBand::for_score(result.match_score);
        Self {
            match_score: result.match_score,
            score_band: band,
            verdict: band.verdict(),
            extracted_keywords: result.extracted_keywords.clone(),
            missing_keywords: result.missing_keywords.clone(),
            improvement_suggestions: result.improvement_suggestions.clone(),
            resume: result.optimized_resume.clone(),
            skills_text: result.optimized_resume.skills.join(", "),
        }
    }
}

/// Everything a client needs to draw the current step.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub phase: Phase,
    pub resume_file_name: Option<String>,
    pub job_description_chars: usize,
    pub can_optimize: bool,
    pub notice: Option<String>,
    pub review: Option<ReviewView>,
}

impl SessionSnapshot {
    /// `workflow` is the session's workflow, already locked by the caller.
    pub fn capture(session: &Session, workflow: &Workflow) -> Self {
        let review = match workflow.phase() {
            Phase::Review => workflow.result().map(ReviewView::from),
            _ => None,
        };
        Self {
            session_id: session.id,
            created_at: session.created_at,
            phase: workflow.phase(),
            resume_file_name: workflow.document().map(|d| d.file_name().to_string()),
            job_description_chars: job_description_length(workflow.job_description()),
            can_optimize: workflow.can_optimize(),
            notice: workflow.notice().map(str::to_string),
            review,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::accept_resume;
    use crate::models::resume::PersonalInfo;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn session() -> Session {
        Session {
            id: Uuid::nil(),
            created_at: Utc::now(),
            workflow: Arc::new(Mutex::new(Workflow::new())),
        }
    }

    fn result(score: u8) -> OptimizationResult {
        OptimizationResult {
            optimized_resume: ResumeData {
                personal_info: PersonalInfo {
                    full_name: "Ken Thompson".into(),
                    email: "ken@example.com".into(),
                    ..PersonalInfo::default()
                },
                skills: vec!["C".into(), "Go".into(), "B".into()],
                ..ResumeData::default()
            },
            match_score: score,
            extracted_keywords: vec!["C".into()],
            missing_keywords: vec!["Rust".into()],
            improvement_suggestions: vec![],
        }
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::NeedsWork);
    }

    #[test]
    fn test_review_view_joins_skills() {
        let view = ReviewView::from(&result(85));
        assert_eq!(view.skills_text, "C, Go, B");
        assert_eq!(view.verdict, "Excellent alignment! High chance of parsing.");
        assert_eq!(view.missing_keywords, vec!["Rust"]);
    }

    #[test]
    fn test_snapshot_in_upload_has_no_review() {
        let mut wf = Workflow::new();
        wf.attach_resume(
            accept_resume(Some("application/pdf"), Some("unix.pdf"), b"%PDF", 1024).unwrap(),
        )
        .unwrap();
        wf.set_job_description("short".into()).unwrap();

        let snapshot = SessionSnapshot::capture(&session(), &wf);
        assert_eq!(snapshot.phase, Phase::Upload);
        assert_eq!(snapshot.resume_file_name.as_deref(), Some("unix.pdf"));
        assert_eq!(snapshot.job_description_chars, 5);
        assert!(!snapshot.can_optimize);
        assert!(snapshot.review.is_none());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"], "UPLOAD");
    }

    #[test]
    fn test_snapshot_in_review_carries_result() {
        let mut wf = Workflow::new();
        wf.attach_resume(
            accept_resume(Some("application/pdf"), None, b"%PDF", 1024).unwrap(),
        )
        .unwrap();
        wf.set_job_description("j".repeat(60)).unwrap();
        wf.begin_optimization().unwrap();
        wf.complete_optimization(Ok(result(42))).unwrap();

        let snapshot = SessionSnapshot::capture(&session(), &wf);
        let review = snapshot.review.unwrap();
        assert_eq!(review.match_score, 42);
        assert_eq!(review.score_band, ScoreBand::NeedsWork);
        assert_eq!(review.resume, result(42).optimized_resume);
    }
}
