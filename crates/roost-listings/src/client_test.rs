use super::*;

fn test_client(base_url: &str) -> ListingsClient {
    ListingsClient::with_base_url(base_url, 5).expect("client construction should not fail")
}

#[test]
fn build_url_appends_segments_to_base_path() {
    let client = test_client("http://localhost:3000/api/v1");
    let url = client.build_url(&["assets", "cities"], &[("status", "listed_rental".into())]);
    assert_eq!(
        url.as_str(),
        "http://localhost:3000/api/v1/assets/cities?status=listed_rental"
    );
}

#[test]
fn build_url_strips_trailing_slashes() {
    let client = test_client("https://api.example.com/v1///");
    let url = client.build_url(&["assets"], &[]);
    assert_eq!(url.as_str(), "https://api.example.com/v1/assets");
}

#[test]
fn build_url_encodes_ids_and_query_values() {
    let client = test_client("https://api.example.com");
    let url = client.build_url(
        &["assets", "a/b c?"],
        &[("q", "lake & park".into()), ("status", "listed_rental,listed_sale".into())],
    );
    assert!(
        url.path().ends_with("/assets/a%2Fb%20c%3F"),
        "id should be one encoded segment: {url}"
    );
    assert!(
        url.as_str().contains("q=lake+%26+park"),
        "query value should be encoded: {url}"
    );
}

#[test]
fn token_url_derives_from_base_origin() {
    let client = test_client("https://api.example.com:8443/api/v1");
    assert_eq!(
        derive_token_url(client.base_url()),
        "https://api.example.com:8443/oauth/token"
    );

    let client = test_client("http://localhost:3000/api/v1/");
    assert_eq!(
        derive_token_url(client.base_url()),
        "http://localhost:3000/oauth/token"
    );
}

#[test]
fn explicit_token_url_wins_over_derived() {
    let client = test_client("https://api.example.com/api/v1").with_oauth(
        "id",
        "secret",
        None,
        Some("https://auth.example.com/token"),
    );
    match &client.auth {
        Authorization::OAuth(cache) => {
            assert_eq!(cache.token_url(), "https://auth.example.com/token");
        }
        _ => panic!("expected OAuth authorization"),
    }
}

#[test]
fn rejects_unusable_base_urls() {
    for bad in ["not a url", "ftp://files.example.com", "mailto:someone@example.com"] {
        assert!(
            matches!(
                ListingsClient::with_base_url(bad, 5),
                Err(ListingsError::InvalidBaseUrl { .. })
            ),
            "{bad} should be rejected"
        );
    }
}
