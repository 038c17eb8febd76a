//! Integration tests for the GitHub search client against a mock server.

use popular::{Category, ClientConfig, GitHubClient, PopularError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(&ClientConfig::default().with_base_url(server.uri())).unwrap()
}

fn search_body() -> serde_json::Value {
    json!({
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {
                "name": "rails",
                "owner": {"login": "rails", "avatar_url": "https://avatars/rails"},
                "html_url": "https://github.com/rails/rails",
                "stargazers_count": 55000,
                "forks": 21000,
                "open_issues": 900
            },
            {
                "name": "jekyll",
                "owner": {"login": "jekyll", "avatar_url": "https://avatars/jekyll"},
                "html_url": "https://github.com/jekyll/jekyll",
                "stargazers_count": 48000,
                "forks": 10000,
                "open_issues": 40
            }
        ]
    })
}

#[tokio::test]
async fn test_fetches_ranked_repos_for_language() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "stars:>1 language:Ruby"))
        .and(query_param("sort", "stars"))
        .and(query_param("order", "desc"))
        .and(header("X-GitHub-Api-Version", "2022-11-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .expect(1)
        .mount(&server)
        .await;

    let repos = client_for(&server)
        .get_popular_repos(Category::Ruby)
        .await
        .unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].owner_login, "rails");
    assert_eq!(repos[0].html_url, "https://github.com/rails/rails");
    assert_eq!(repos[0].star_count, 55000);
    assert_eq!(repos[1].fork_count, 10000);
    assert_eq!(repos[1].open_issue_count, 40);
}

#[tokio::test]
async fn test_all_category_has_no_language_qualifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "stars:>1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .expect(1)
        .mount(&server)
        .await;

    let repos = client_for(&server)
        .get_popular_repos(Category::All)
        .await
        .unwrap();
    assert_eq!(repos.len(), 2);
}

#[tokio::test]
async fn test_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer ghp_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_token("ghp_test");
    let client = GitHubClient::new(&config).unwrap();
    assert!(client.get_popular_repos(Category::Java).await.is_ok());
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_popular_repos(Category::Python)
        .await
        .unwrap_err();
    assert!(matches!(err, PopularError::Status { status: 502, ref body } if body == "bad gateway"));
}

#[tokio::test]
async fn test_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_popular_repos(Category::Css)
        .await
        .unwrap_err();
    assert!(matches!(err, PopularError::Unauthorized));
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("x-ratelimit-remaining", "0")
                .insert_header("x-ratelimit-reset", "0"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_popular_repos(Category::All)
        .await
        .unwrap_err();
    assert!(matches!(err, PopularError::RateLimited { ref reset_at } if reset_at == "00:00:00"));
}

#[tokio::test]
async fn test_body_without_items_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Validation Failed"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_popular_repos(Category::Ruby)
        .await
        .unwrap_err();
    assert!(matches!(err, PopularError::MissingItems(ref m) if m == "Validation Failed"));
}

#[tokio::test]
async fn test_malformed_body_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_popular_repos(Category::Ruby)
        .await
        .unwrap_err();
    assert!(matches!(err, PopularError::Json(_)));
}

#[tokio::test]
async fn test_out_of_range_rate_limit_reset_is_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-ratelimit-remaining", "0")
                .insert_header("x-ratelimit-reset", "18446744073709551615"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_popular_repos(Category::All)
        .await
        .unwrap_err();
    assert!(matches!(err, PopularError::RateLimited { ref reset_at } if reset_at == "unknown"));
}
