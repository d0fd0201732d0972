// Résumé optimization: the one outbound call of the service.
// Builds the prompt + schema, sends the PDF inline, decodes OptimizationResult.
// All LLM calls go through llm_client, never direct Gemini HTTP calls here.

pub mod client;
pub mod prompts;
pub mod schema;
