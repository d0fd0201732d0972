//! Result editing: pure update functions over `ResumeData`.
//!
//! `apply_edit(&resume, &edit)` returns a new value with exactly one field
//! changed; the input is never mutated. Edits never touch the match score or
//! keyword lists, which stay as the model produced them.

use serde::Deserialize;
use thiserror::Error;

use crate::models::resume::ResumeData;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{section} entry {index} does not exist")]
    NoSuchEntry { section: &'static str, index: usize },

    #[error("achievement {index} does not exist in experience entry {experience}")]
    NoSuchAchievement { experience: usize, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalInfoField {
    FullName,
    Email,
    Phone,
    Location,
    Linkedin,
    Portfolio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution,
    Degree,
    Year,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    Name,
    Description,
}

/// One committed edit: which field, and its new value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "target", rename_all = "camelCase")]
pub enum ResumeEdit {
    PersonalInfo {
        field: PersonalInfoField,
        value: String,
    },
    Summary {
        value: String,
    },
    /// Comma-delimited blob.
    Skills {
        text: String,
    },
    Experience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    Achievement {
        experience: usize,
        index: usize,
        value: String,
    },
    Education {
        index: usize,
        field: EducationField,
        value: String,
    },
    Project {
        index: usize,
        field: ProjectField,
        value: String,
    },
    /// Comma-delimited blob.
    Technologies {
        project: usize,
        text: String,
    },
}

/// Splits a comma-delimited blob into trimmed entries.
///
/// Order is kept. Duplicates and empty entries are kept as typed, so
/// `"Go,,Rust"` yields `["Go", "", "Rust"]`.
pub fn parse_delimited_list(text: &str) -> Vec<String> {
    text.split(',').map(|entry| entry.trim().to_string()).collect()
}

/// Returns a copy of `resume` with the one field named by `edit` replaced.
pub fn apply_edit(resume: &ResumeData, edit: &ResumeEdit) -> Result<ResumeData, EditError> {
    let mut next = resume.clone();

    match edit {
        ResumeEdit::PersonalInfo { field, value } => {
            let info = &mut next.personal_info;
            match field {
                PersonalInfoField::FullName => info.full_name = value.clone(),
                PersonalInfoField::Email => info.email = value.clone(),
                PersonalInfoField::Phone => info.phone = value.clone(),
                PersonalInfoField::Location => info.location = value.clone(),
                PersonalInfoField::Linkedin => info.linkedin = optional_link(value),
                PersonalInfoField::Portfolio => info.portfolio = optional_link(value),
            }
        }
        ResumeEdit::Summary { value } => next.summary = value.clone(),
        ResumeEdit::Skills { text } => next.skills = parse_delimited_list(text),
        ResumeEdit::Experience {
            index,
            field,
            value,
        } => {
            let entry = next
                .experience
                .get_mut(*index)
                .ok_or(EditError::NoSuchEntry {
                    section: "experience",
                    index: *index,
                })?;
            let slot = match field {
                ExperienceField::Company => &mut entry.company,
                ExperienceField::Position => &mut entry.position,
                ExperienceField::Duration => &mut entry.duration,
                ExperienceField::Location => &mut entry.location,
            };
            *slot = value.clone();
        }
        ResumeEdit::Achievement {
            experience,
            index,
            value,
        } => {
            let entry = next
                .experience
                .get_mut(*experience)
                .ok_or(EditError::NoSuchEntry {
                    section: "experience",
                    index: *experience,
                })?;
            let achievement =
                entry
                    .achievements
                    .get_mut(*index)
                    .ok_or(EditError::NoSuchAchievement {
                        experience: *experience,
                        index: *index,
                    })?;
            *achievement = value.clone();
        }
        ResumeEdit::Education {
            index,
            field,
            value,
        } => {
            let entry = next
                .education
                .get_mut(*index)
                .ok_or(EditError::NoSuchEntry {
                    section: "education",
                    index: *index,
                })?;
            let slot = match field {
                EducationField::Institution => &mut entry.institution,
                EducationField::Degree => &mut entry.degree,
                EducationField::Year => &mut entry.year,
                EducationField::Location => &mut entry.location,
            };
            *slot = value.clone();
        }
        ResumeEdit::Project {
            index,
            field,
            value,
        } => {
            let entry = next.projects.get_mut(*index).ok_or(EditError::NoSuchEntry {
                section: "projects",
                index: *index,
            })?;
            match field {
                ProjectField::Name => entry.name = value.clone(),
                ProjectField::Description => entry.description = value.clone(),
            }
        }
        ResumeEdit::Technologies { project, text } => {
            let entry = next
                .projects
                .get_mut(*project)
                .ok_or(EditError::NoSuchEntry {
                    section: "projects",
                    index: *project,
                })?;
            entry.technologies = parse_delimited_list(text);
        }
    }

    Ok(next)
}

/// A blank link clears the field.
fn optional_link(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, PersonalInfo, Project, WorkExperience};

    fn resume() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Linus Torvalds".into(),
                email: "linus@example.com".into(),
                phone: "555-0100".into(),
                location: "Portland".into(),
                linkedin: None,
                portfolio: Some("kernel.org".into()),
            },
            summary: "Kernel maintainer.".into(),
            experience: vec![
                WorkExperience {
                    id: "e1".into(),
                    company: "Transmeta".into(),
                    position: "Engineer".into(),
                    duration: "1997 - 2003".into(),
                    location: "Santa Clara".into(),
                    achievements: vec!["Shipped Crusoe".into(), "Kept Linux going".into()],
                },
                WorkExperience {
                    id: "e2".into(),
                    company: "OSDL".into(),
                    position: "Fellow".into(),
                    ..WorkExperience::default()
                },
            ],
            education: vec![Education {
                id: "ed1".into(),
                institution: "University of Helsinki".into(),
                degree: "MSc".into(),
                year: "1996".into(),
                location: "Helsinki".into(),
            }],
            skills: vec!["C".into(), "Git".into()],
            projects: vec![Project {
                id: "p1".into(),
                name: "Git".into(),
                description: "Version control".into(),
                technologies: vec!["C".into(), "Shell".into()],
            }],
        }
    }

    #[test]
    fn test_skills_blob_split_and_trimmed() {
        let edited = apply_edit(
            &resume(),
            &ResumeEdit::Skills {
                text: "Go, Python ,  Rust".into(),
            },
        )
        .unwrap();
        assert_eq!(edited.skills, vec!["Go", "Python", "Rust"]);
    }

    #[test]
    fn test_skills_keep_empty_and_duplicate_entries() {
        assert_eq!(parse_delimited_list("Go,, Go ,"), vec!["Go", "", "Go", ""]);
        assert_eq!(parse_delimited_list(""), vec![""]);
    }

    #[test]
    fn test_full_name_edit_changes_only_that_field() {
        let original = resume();
        let edited = apply_edit(
            &original,
            &ResumeEdit::PersonalInfo {
                field: PersonalInfoField::FullName,
                value: "L. Torvalds".into(),
            },
        )
        .unwrap();

        assert_eq!(edited.personal_info.full_name, "L. Torvalds");
        let mut expected = original.clone();
        expected.personal_info.full_name = "L. Torvalds".into();
        assert_eq!(edited, expected);
        // input untouched
        assert_eq!(original.personal_info.full_name, "Linus Torvalds");
    }

    #[test]
    fn test_summary_replaced_wholesale() {
        let edited = apply_edit(
            &resume(),
            &ResumeEdit::Summary {
                value: "Line one.\nLine two.".into(),
            },
        )
        .unwrap();
        let mut expected = resume();
        expected.summary = "Line one.\nLine two.".into();
        assert_eq!(edited, expected);
    }

    #[test]
    fn test_blank_link_clears_optional_field() {
        let edited = apply_edit(
            &resume(),
            &ResumeEdit::PersonalInfo {
                field: PersonalInfoField::Portfolio,
                value: "   ".into(),
            },
        )
        .unwrap();
        assert_eq!(edited.personal_info.portfolio, None);

        let edited = apply_edit(
            &resume(),
            &ResumeEdit::PersonalInfo {
                field: PersonalInfoField::Linkedin,
                value: "linkedin.com/in/linus".into(),
            },
        )
        .unwrap();
        assert_eq!(edited.personal_info.linkedin.as_deref(), Some("linkedin.com/in/linus"));
    }

    #[test]
    fn test_achievement_edit_keeps_order_and_siblings() {
        let original = resume();
        let edited = apply_edit(
            &original,
            &ResumeEdit::Achievement {
                experience: 0,
                index: 1,
                value: "Maintained Linux 2.6".into(),
            },
        )
        .unwrap();

        let mut expected = original.clone();
        expected.experience[0].achievements[1] = "Maintained Linux 2.6".into();
        assert_eq!(edited, expected);
    }

    #[test]
    fn test_experience_field_edit() {
        let edited = apply_edit(
            &resume(),
            &ResumeEdit::Experience {
                index: 1,
                field: ExperienceField::Duration,
                value: "2003 - 2007".into(),
            },
        )
        .unwrap();
        let mut expected = resume();
        expected.experience[1].duration = "2003 - 2007".into();
        assert_eq!(edited, expected);
    }

    #[test]
    fn test_education_and_project_edits() {
        let edited = apply_edit(
            &resume(),
            &ResumeEdit::Education {
                index: 0,
                field: EducationField::Degree,
                value: "MSc Computer Science".into(),
            },
        )
        .unwrap();
        assert_eq!(edited.education[0].degree, "MSc Computer Science");
        assert_eq!(edited.education[0].institution, "University of Helsinki");

        let edited = apply_edit(
            &resume(),
            &ResumeEdit::Technologies {
                project: 0,
                text: "C , Perl".into(),
            },
        )
        .unwrap();
        let mut expected = resume();
        expected.projects[0].technologies = vec!["C".into(), "Perl".into()];
        assert_eq!(edited, expected);
    }

    #[test]
    fn test_out_of_range_indices_rejected() {
        let original = resume();
        assert_eq!(
            apply_edit(
                &original,
                &ResumeEdit::Experience {
                    index: 5,
                    field: ExperienceField::Company,
                    value: "x".into(),
                },
            ),
            Err(EditError::NoSuchEntry {
                section: "experience",
                index: 5
            })
        );
        assert_eq!(
            apply_edit(
                &original,
                &ResumeEdit::Achievement {
                    experience: 1,
                    index: 0,
                    value: "x".into(),
                },
            ),
            Err(EditError::NoSuchAchievement {
                experience: 1,
                index: 0
            })
        );
        assert!(apply_edit(
            &original,
            &ResumeEdit::Project {
                index: 3,
                field: ProjectField::Name,
                value: "x".into(),
            },
        )
        .is_err());
    }

    #[test]
    fn test_edit_deserializes_from_tagged_json() {
        let edit: ResumeEdit = serde_json::from_str(
            r#"{"target": "personalInfo", "field": "fullName", "value": "Ada"}"#,
        )
        .unwrap();
        assert_eq!(
            edit,
            ResumeEdit::PersonalInfo {
                field: PersonalInfoField::FullName,
                value: "Ada".into()
            }
        );

        let edit: ResumeEdit =
            serde_json::from_str(r#"{"target": "skills", "text": "Go, Rust"}"#).unwrap();
        assert_eq!(
            edit,
            ResumeEdit::Skills {
                text: "Go, Rust".into()
            }
        );
    }
}
