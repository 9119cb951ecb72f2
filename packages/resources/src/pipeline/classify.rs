//! Keyword classifier for resource categories.

use crate::types::ResourceType;

/// Classify a resource from its title and description.
///
/// Rules are evaluated top to bottom and the first match wins: a
/// "community health clinic" is healthcare, not support, because the
/// healthcare rule is tested earlier. The rule order is part of the
/// output contract; do not reorder.
pub fn classify_resource_type(title: &str, description: &str) -> ResourceType {
    let text = format!("{} {}", title.to_lowercase(), description.to_lowercase());

    if contains_any(&text, &["childcare", "daycare", "child care"]) {
        ResourceType::Childcare
    } else if contains_any(&text, &["hospital", "clinic", "medical", "health", "doctor"]) {
        ResourceType::Healthcare
    } else if contains_any(&text, &["group", "support", "community"]) {
        ResourceType::Support
    } else if contains_any(&text, &["mental", "counseling", "therapy"]) {
        ResourceType::MentalHealth
    } else {
        ResourceType::Other
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
