use solarwinds_api::{Query, UserQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn user_query_defaults() {
    let url = UserQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=1"));
    assert!(!query.contains("per_page"));
    assert!(!query.contains("email"));
}

#[test]
fn user_query_with_page_and_size() {
    let url = UserQuery::default()
        .with_page(3)
        .with_per_page(50)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=3"));
    assert!(query.contains("per_page=50"));
}

#[test]
fn user_query_with_email() {
    let url = UserQuery::default()
        .with_email("jane.doe@algolia.com")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("email=jane.doe%40algolia.com"));
}

#[test]
fn user_query_with_role() {
    let url = UserQuery::default()
        .with_role("Administrator")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("role=Administrator"));
}

#[test]
fn user_query_combined_filters() {
    let url = UserQuery::default()
        .with_email("jane.doe@algolia.com")
        .with_role("Requester")
        .with_page(2)
        .with_per_page(25)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("email=jane.doe%40algolia.com"));
    assert!(query.contains("role=Requester"));
    assert!(query.contains("page=2"));
    assert!(query.contains("per_page=25"));
}
