//! Core types - the output of the resource extraction pipeline.

use serde::{Deserialize, Serialize};

/// Category assigned to a resource by keyword classification.
///
/// Always derived from the resource's title and description, never
/// user-supplied. Content matching no category rule falls back to
/// [`ResourceType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Childcare,
    Healthcare,
    Support,
    MentalHealth,
    #[default]
    Other,
}

impl ResourceType {
    /// Wire representation ("childcare", "mental-health", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Childcare => "childcare",
            ResourceType::Healthcare => "healthcare",
            ResourceType::Support => "support",
            ResourceType::MentalHealth => "mental-health",
            ResourceType::Other => "other",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A local support resource extracted from completion prose.
///
/// Title and description are mandatory; all contact fields are
/// best-effort and absent when their source block carried no
/// recognizable line. Constructed transiently per request, never
/// persisted, never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalResource {
    /// Resource name
    pub title: String,

    /// One-line summary
    pub description: String,

    /// Contact number in Australian format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Website URL, normalized to start with `https://`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Free text after a recognized hours label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,

    /// Free text after a recognized address label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Derived category
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

impl LocalResource {
    /// Create a resource with only the mandatory fields set.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        resource_type: ResourceType,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            phone: None,
            website: None,
            hours: None,
            address: None,
            resource_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_wire_names() {
        assert_eq!(
            serde_json::to_value(ResourceType::MentalHealth).unwrap(),
            serde_json::json!("mental-health")
        );
        assert_eq!(
            serde_json::to_value(ResourceType::Childcare).unwrap(),
            serde_json::json!("childcare")
        );
        assert_eq!(ResourceType::Support.to_string(), "support");
    }

    #[test]
    fn test_absent_fields_omitted_from_json() {
        let resource = LocalResource::new("Play Centre", "Drop-in sessions", ResourceType::Other);
        let json = serde_json::to_value(&resource).unwrap();

        assert_eq!(json["title"], "Play Centre");
        assert_eq!(json["type"], "other");
        assert!(json.get("phone").is_none());
        assert!(json.get("website").is_none());
        assert!(json.get("hours").is_none());
        assert!(json.get("address").is_none());
    }

    #[test]
    fn test_present_fields_serialized() {
        let mut resource =
            LocalResource::new("City Clinic", "Maternal health", ResourceType::Healthcare);
        resource.phone = Some("02 9876 5432".to_string());
        resource.website = Some("https://cityclinic.org.au".to_string());

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["phone"], "02 9876 5432");
        assert_eq!(json["website"], "https://cityclinic.org.au");
        assert_eq!(json["type"], "healthcare");
    }
}
