//! End-to-end tests for the resource search pipeline.
//!
//! These drive the full search flow against a mock completion provider:
//! prompt construction, prose parsing, and error propagation.

use resources::{
    testing::{MockCompletion, MockFailure},
    ResourceError, ResourceSearch, ResourceType, SYSTEM_PROMPT,
};

const SAMPLE_PROSE: &str = "1. Sunshine Daycare\n\
Childcare for 0-5 year olds\n\
Phone: 1300 111 222\n\
Website: sunshinedaycare.com.au\n\
\n\
2. City Health Clinic\n\
Maternal health services\n\
Hours: Mon-Fri 9am-5pm";

#[tokio::test]
async fn test_search_returns_parsed_resources() {
    let mock = MockCompletion::new().with_response(SAMPLE_PROSE);
    let search = ResourceSearch::new(mock);

    let found = search.search("Melbourne").await.unwrap();
    assert_eq!(found.len(), 2);

    let daycare = &found[0];
    assert_eq!(daycare.title, "Sunshine Daycare");
    assert_eq!(daycare.resource_type, ResourceType::Childcare);
    assert_eq!(daycare.phone.as_deref(), Some("1300 111 222"));
    assert_eq!(daycare.website.as_deref(), Some("https://sunshinedaycare.com.au"));
    assert!(daycare.hours.is_none());

    let clinic = &found[1];
    assert_eq!(clinic.title, "City Health Clinic");
    assert_eq!(clinic.resource_type, ResourceType::Healthcare);
    assert_eq!(clinic.hours.as_deref(), Some("Mon-Fri 9am-5pm"));
    assert!(clinic.phone.is_none());
    assert!(clinic.website.is_none());
}

#[tokio::test]
async fn test_search_is_deterministic_for_fixed_prose() {
    let mock = MockCompletion::new().with_response(SAMPLE_PROSE);
    let search = ResourceSearch::new(mock);

    let first = search.search("Melbourne").await.unwrap();
    let second = search.search("Melbourne").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_search_sends_expected_prompts() {
    let mock = MockCompletion::new().with_response(SAMPLE_PROSE);
    let observer = mock.clone();
    let search = ResourceSearch::new(mock);

    search.search("Hobart").await.unwrap();

    let calls = observer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].system, SYSTEM_PROMPT);
    assert!(calls[0].prompt.contains("Hobart, Australia"));
    assert!(calls[0].prompt.contains("childcare services"));
}

#[tokio::test]
async fn test_malformed_block_dropped_without_aborting_batch() {
    let prose = "1. Just a dangling name\n\n2. Riverside Playgroup\nWeekly sessions for parents and babies";
    let mock = MockCompletion::new().with_response(prose);
    let search = ResourceSearch::new(mock);

    let found = search.search("Cairns").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Riverside Playgroup");
}

#[tokio::test]
async fn test_unparseable_response_is_empty_success() {
    // A completion that yields zero parseable resources is a successful
    // search with an empty list, not an error.
    let mock = MockCompletion::new().with_response("Sorry, I could not find anything.");
    let search = ResourceSearch::new(mock);

    let found = search.search("Nowhere").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_config_failure_surfaces_before_parsing() {
    let mock = MockCompletion::new().with_failure(MockFailure::Config);
    let search = ResourceSearch::new(mock);

    let err = search.search("Sydney").await.unwrap_err();
    assert!(matches!(err, ResourceError::Config(_)));
}

#[tokio::test]
async fn test_service_failure_carries_status_and_body() {
    let mock = MockCompletion::new().with_failure(MockFailure::Service {
        status: 429,
        body: "rate limited".into(),
    });
    let search = ResourceSearch::new(mock);

    let err = search.search("Sydney").await.unwrap_err();
    match err {
        ResourceError::Service { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_network_failure_is_retryable_variant() {
    let mock = MockCompletion::new().with_failure(MockFailure::Network);
    let search = ResourceSearch::new(mock);

    let err = search.search("Sydney").await.unwrap_err();
    assert!(matches!(err, ResourceError::Network(_)));
}

#[tokio::test]
async fn test_paragraph_formatted_response() {
    let prose = "Sunshine Daycare\nChildcare for 0-5 year olds\nPhone: 03 9000 1111\n\n\
                 Harbour Community Centre\nMother-baby programs and support groups\nAddress: 1 Wharf Rd";
    let mock = MockCompletion::new().with_response(prose);
    let search = ResourceSearch::new(mock);

    let found = search.search("Sydney").await.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].resource_type, ResourceType::Childcare);
    assert_eq!(found[1].resource_type, ResourceType::Support);
    assert_eq!(found[1].address.as_deref(), Some("1 Wharf Rd"));
}
