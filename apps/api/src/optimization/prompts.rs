// Résumé optimization prompt templates.

pub const OPTIMIZATION_SYSTEM: &str = "\
You are an expert ATS (Applicant Tracking System) optimization consultant. \
You read resumes, compare them with job descriptions, and rewrite them so that \
automated screening recognizes the candidate's real, existing fit.";

pub const OPTIMIZATION_PROMPT_TEMPLATE: &str = r#"TASK:
1. Parse the attached resume PDF and extract its content.
2. Compare the resume against the job description (JD) below.
3. Rewrite and optimize the resume to maximize its lexical and semantic alignment with this JD.
4. List the JD keywords that the resume already contains (extractedKeywords).
5. List the JD keywords that are missing from the resume (missingKeywords).
6. Produce concrete improvement suggestions (improvementSuggestions).
7. Compute an overall match percentage from 0 to 100 (matchScore).

STRICT CONSTRAINTS:
- {no_fabrication}
- Use strong action verbs and quantify achievements only where the original text allows it.
- Structure the content for a single-column, ATS-safe format.
- Keep every experience, education and project entry from the original; give each a short stable id.

OUTPUT:
{json_only}

JOB DESCRIPTION:
{job_description}"#;
