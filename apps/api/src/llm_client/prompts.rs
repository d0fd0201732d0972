// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the pieces every structured call reuses.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only, matching the declared response schema. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction that forbids inventing résumé history.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    DO NOT HALLUCINATE: Only rephrase or highlight existing experience. \
    Do not add employers, job titles, or dates that are not in the original resume. \
    A skill that is implied by the candidate's history but never stated may ONLY appear \
    as a suggested addition in the improvement suggestions, never in the rewritten resume.";
