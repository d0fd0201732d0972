//! Résumé domain model.
//!
//! Field names follow the camelCase shape of the model's structured output
//! (`optimizedResume`, `personalInfo.fullName`, ...). These types are the
//! single source of truth for what the review step renders and edits.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    /// Free-text range, e.g. "Jan 2021 - Present".
    pub duration: String,
    pub location: String,
    /// Display order is meaningful.
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Output of one successful optimization call.
///
/// Only the workflow controller replaces it, and only with a new value
/// carrying a user edit. Score and keyword lists are never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_resume: ResumeData,
    /// 0 – 100
    #[serde(deserialize_with = "deserialize_match_score")]
    pub match_score: u8,
    #[serde(default)]
    pub extracted_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub improvement_suggestions: Vec<String>,
}

/// The schema declares `matchScore` as a JSON number, so the model may send
/// `87` or `87.0`. Fractions round to the nearest integer; anything outside
/// 0 – 100 is rejected.
fn deserialize_match_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || !(0.0..=100.0).contains(&raw) {
        return Err(serde::de::Error::custom(format!(
            "matchScore {raw} is outside 0-100"
        )));
    }
    Ok(raw.round() as u8)
}

impl ResumeData {
    /// Names the first mandatory field that is blank, if any.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.personal_info.full_name.trim().is_empty() {
            Some("personalInfo.fullName")
        } else if self.personal_info.email.trim().is_empty() {
            Some("personalInfo.email")
        } else {
            None
        }
    }
}
