//! Prompts for the completion service.

/// System instruction sent with every search.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant focused on helping Australian \
mothers find local resources and support. Be precise, accurate, and focus on providing \
practical information. When information isn't available, indicate that clearly rather than \
making assumptions.";

/// Prompt template enumerating the five resource categories.
pub const SEARCH_PROMPT: &str = r#"I'm looking for maternal and child support resources in {location}, Australia. Please provide a list of:

1. Local childcare services
2. Healthcare facilities specializing in maternal and child health
3. Parent support groups
4. Mental health resources for new mothers
5. Community centers with mother-baby programs

For each resource, please include the name, a brief description, phone number (in Australian format), website URL, opening hours, and street address if available.

Format your response as a concise, structured list that would be helpful for a mother looking for local support."#;

/// Build the search prompt for a location.
///
/// Deterministic: the same location always yields the same prompt text.
/// The location is interpolated as-is; the downstream consumer is a
/// text-completion service, not a command interpreter.
pub fn format_search_prompt(location: &str) -> String {
    SEARCH_PROMPT.replace("{location}", location)
}
