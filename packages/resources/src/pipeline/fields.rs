//! Field extractor - per-block line parsing into a typed resource.
//!
//! Line classification is a heuristic, not a guarantee: each detail
//! line is tested against the phone, website, hours, and address
//! keyword sets in that fixed order, the first matching category wins,
//! and lines matching none are ignored. Ambiguous lines may be
//! misclassified; the pipeline degrades instead of erroring.

use lazy_static::lazy_static;
use regex::Regex;

use crate::pipeline::classify::classify_resource_type;
use crate::types::LocalResource;

lazy_static! {
    // Australian phone formats: landline, mobile, 1300/1800 numbers.
    static ref PHONE_REGEX: Regex = Regex::new(
        r"((?:\+?61|0)[2-478](?:\s?\d{4}){2}|(?:\+?61|0)4\d{2,3}(?:\s?\d{3}){2}|1[38]00\s?\d{3}\s?\d{3})"
    )
    .unwrap();

    // Bare or schemed domain, optionally followed by a path.
    static ref WEBSITE_REGEX: Regex = Regex::new(
        r"(https?://)?[a-zA-Z0-9\-]+\.[a-zA-Z0-9.\-]+(/[a-zA-Z0-9\-._~:/?#\[\]@!$&'()*+,;=]*)?"
    )
    .unwrap();
}

const PHONE_KEYWORDS: &[&str] = &["phone", "call", "tel"];
const WEBSITE_KEYWORDS: &[&str] = &["website", "www", "http", ".com", ".org", ".gov"];
const HOURS_KEYWORDS: &[&str] = &["hours", "open", "time"];
const ADDRESS_KEYWORDS: &[&str] = &["address", "located at", "location"];

/// Parse one candidate block into a resource.
///
/// Title and description are mandatory: a block with fewer than two
/// non-empty lines after trimming yields no resource. All other fields
/// are best-effort extractions from the remaining lines.
pub fn parse_block(block: &str) -> Option<LocalResource> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return None;
    }

    let title = strip_markers(lines[0]);
    let description = strip_markers(lines[1]);

    let mut resource = LocalResource {
        resource_type: classify_resource_type(&title, &description),
        title,
        description,
        phone: None,
        website: None,
        hours: None,
        address: None,
    };

    for line in &lines[2..] {
        let lower = line.to_lowercase();
        if contains_any(&lower, PHONE_KEYWORDS) {
            resource.phone = extract_phone(line);
        } else if contains_any(&lower, WEBSITE_KEYWORDS) {
            resource.website = extract_website(line);
        } else if contains_any(&lower, HOURS_KEYWORDS) {
            resource.hours = Some(extract_labeled_text(line));
        } else if contains_any(&lower, ADDRESS_KEYWORDS) {
            resource.address = Some(extract_labeled_text(line));
        }
    }

    Some(resource)
}

fn contains_any(line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| line.contains(keyword))
}

/// Strip leading bullet markers and bold markup from a line.
fn strip_markers(line: &str) -> String {
    line.trim_start_matches(['-', '*', '•'])
        .replace("**", "")
        .trim()
        .to_string()
}

/// First Australian-format phone number on the line, if any.
pub fn extract_phone(line: &str) -> Option<String> {
    PHONE_REGEX.find(line).map(|m| m.as_str().to_string())
}

/// First URL-looking token on the line, normalized to carry a scheme.
///
/// Already-schemed URLs pass through unchanged, so normalization is
/// idempotent.
pub fn extract_website(line: &str) -> Option<String> {
    WEBSITE_REGEX.find(line).map(|m| {
        let website = m.as_str();
        if website.starts_with("http") {
            website.to_string()
        } else {
            format!("https://{}", website)
        }
    })
}

/// Text after the first colon, trimmed; the whole line when there is
/// no colon.
pub fn extract_labeled_text(line: &str) -> String {
    match line.find(':') {
        Some(pos) => line[pos + 1..].trim().to_string(),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResourceType;

    #[test]
    fn test_block_with_one_line_is_dropped() {
        assert!(parse_block("Lonely title").is_none());
        assert!(parse_block("").is_none());
        assert!(parse_block("  \n  \n").is_none());
    }

    #[test]
    fn test_two_lines_suffice() {
        let resource = parse_block("Play Centre\nDrop-in play sessions").unwrap();
        assert_eq!(resource.title, "Play Centre");
        assert_eq!(resource.description, "Drop-in play sessions");
        assert!(resource.phone.is_none());
        assert!(resource.website.is_none());
    }

    #[test]
    fn test_bullet_and_bold_markers_stripped() {
        let resource = parse_block("- **Sunshine Daycare**\n* Childcare for toddlers").unwrap();
        assert_eq!(resource.title, "Sunshine Daycare");
        assert_eq!(resource.description, "Childcare for toddlers");
    }

    #[test]
    fn test_phone_line_extracts_number() {
        let resource = parse_block("A Place\nSomething\nPhone: 1800 123 456").unwrap();
        assert_eq!(resource.phone.as_deref(), Some("1800 123 456"));
    }

    #[test]
    fn test_phone_line_without_number_stays_absent() {
        let resource = parse_block("A Place\nSomething\nCall us anytime").unwrap();
        assert!(resource.phone.is_none());
    }

    #[test]
    fn test_phone_formats() {
        assert_eq!(extract_phone("Phone: 02 9876 5432").as_deref(), Some("02 9876 5432"));
        assert_eq!(extract_phone("Tel: 0412 345 678").as_deref(), Some("0412 345 678"));
        assert_eq!(extract_phone("Call 1300 654 321").as_deref(), Some("1300 654 321"));
        assert_eq!(extract_phone("Phone: +61 2 1234 5678").as_deref(), None);
        assert!(extract_phone("no digits here").is_none());
    }

    #[test]
    fn test_website_normalized_with_scheme() {
        let resource = parse_block("A Place\nSomething\nWebsite: example.org.au").unwrap();
        assert_eq!(resource.website.as_deref(), Some("https://example.org.au"));
    }

    #[test]
    fn test_website_normalization_is_idempotent() {
        let once = extract_website("Website: example.org.au").unwrap();
        let twice = extract_website(&format!("Website: {}", once)).unwrap();
        assert_eq!(once, "https://example.org.au");
        assert_eq!(twice, once);
    }

    #[test]
    fn test_hours_takes_text_after_colon() {
        let resource = parse_block("A Place\nSomething\nHours: Mon-Fri 9am-5pm").unwrap();
        assert_eq!(resource.hours.as_deref(), Some("Mon-Fri 9am-5pm"));
    }

    #[test]
    fn test_hours_without_colon_takes_whole_line() {
        let resource = parse_block("A Place\nSomething\nOpen weekdays until late").unwrap();
        assert_eq!(resource.hours.as_deref(), Some("Open weekdays until late"));
    }

    #[test]
    fn test_address_takes_text_after_colon() {
        let resource = parse_block("A Place\nSomething\nAddress: 5 Smith St, Carlton").unwrap();
        assert_eq!(resource.address.as_deref(), Some("5 Smith St, Carlton"));
    }

    #[test]
    fn test_first_matching_category_wins() {
        // "Phone hours: ..." mentions both phone and hours keywords; the
        // phone check runs first, so the line is phone-only.
        let resource =
            parse_block("A Place\nSomething\nPhone hours: 9-5 call 1800 123 456").unwrap();
        assert_eq!(resource.phone.as_deref(), Some("1800 123 456"));
        assert!(resource.hours.is_none());
    }

    #[test]
    fn test_unrecognized_lines_ignored() {
        let resource =
            parse_block("A Place\nSomething\nWheelchair accessible\nFree parking").unwrap();
        assert!(resource.phone.is_none());
        assert!(resource.website.is_none());
        assert!(resource.hours.is_none());
        assert!(resource.address.is_none());
    }

    #[test]
    fn test_all_fields_extracted_independently() {
        let block = "City Family Hub\nSupport group for new parents\n\
                     Phone: 03 9123 4567\n\
                     Website: www.cityfamilyhub.org.au\n\
                     Hours: Mon-Sat 8am-6pm\n\
                     Address: 12 High St, Northcote";
        let resource = parse_block(block).unwrap();
        assert_eq!(resource.phone.as_deref(), Some("03 9123 4567"));
        assert_eq!(resource.website.as_deref(), Some("https://www.cityfamilyhub.org.au"));
        assert_eq!(resource.hours.as_deref(), Some("Mon-Sat 8am-6pm"));
        assert_eq!(resource.address.as_deref(), Some("12 High St, Northcote"));
        assert_eq!(resource.resource_type, ResourceType::Support);
    }
}
