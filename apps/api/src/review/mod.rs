// Review actions: one handler per user click, each a single stateless call.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod action;
pub mod dispatcher;
pub mod handlers;
pub mod prompts;
#[cfg(test)]
pub(crate) mod testing;
pub mod variant;
