use super::*;

fn issued(token: &str, expires_in: i64) -> AuthorizeResponse {
    AuthorizeResponse { access_token: token.to_owned(), expires_in }
}

#[test]
fn from_search_reads_redirect_uri_and_state() {
    let params = OAuthParams::from_search("?client_id=c1&redirect_uri=https%3A%2F%2Fclient.example%2Fcb&state=xyz");
    assert_eq!(params.redirect_uri.as_deref(), Some("https://client.example/cb"));
    assert_eq!(params.state.as_deref(), Some("xyz"));
}

#[test]
fn from_search_accepts_missing_question_mark() {
    let params = OAuthParams::from_search("state=a+b");
    assert_eq!(params.state.as_deref(), Some("a b"));
    assert_eq!(params.redirect_uri, None);
}

#[test]
fn from_search_keeps_first_duplicate() {
    let params = OAuthParams::from_search("?state=first&state=second");
    assert_eq!(params.state.as_deref(), Some("first"));
}

#[test]
fn from_search_of_empty_string_is_default() {
    assert_eq!(OAuthParams::from_search(""), OAuthParams::default());
}

#[test]
fn redirect_url_appends_token_parameters() {
    let params = OAuthParams::from_search("?redirect_uri=https://client.example/cb&state=xyz");
    let url = build_redirect_url(&params, &issued("abc", 3600), None);
    assert_eq!(
        url.as_deref(),
        Some("https://client.example/cb?state=xyz&token_type=Bearer&access_token=abc&expires_in=3600")
    );
}

#[test]
fn redirect_url_is_prefixed_with_base_url() {
    let params = OAuthParams { redirect_uri: Some("/cb".to_owned()), state: Some("s".to_owned()) };
    let url = build_redirect_url(&params, &issued("abc", 60), Some("https://portal.example"));
    assert_eq!(url.as_deref(), Some("https://portal.example/cb?state=s&token_type=Bearer&access_token=abc&expires_in=60"));
}

#[test]
fn redirect_url_omits_missing_state() {
    let params = OAuthParams { redirect_uri: Some("https://client.example/cb".to_owned()), state: None };
    let url = build_redirect_url(&params, &issued("abc", 3600), None);
    assert_eq!(url.as_deref(), Some("https://client.example/cb?token_type=Bearer&access_token=abc&expires_in=3600"));
}

#[test]
fn redirect_url_extends_existing_query() {
    let params = OAuthParams { redirect_uri: Some("https://client.example/cb?app=1".to_owned()), state: Some("xyz".to_owned()) };
    let url = build_redirect_url(&params, &issued("abc", 3600), None);
    assert_eq!(
        url.as_deref(),
        Some("https://client.example/cb?app=1&state=xyz&token_type=Bearer&access_token=abc&expires_in=3600")
    );
}

#[test]
fn redirect_url_encodes_values() {
    let params = OAuthParams { redirect_uri: Some("https://client.example/cb".to_owned()), state: Some("a&b=c".to_owned()) };
    let url = build_redirect_url(&params, &issued("t/k+n", 1), None);
    assert_eq!(
        url.as_deref(),
        Some("https://client.example/cb?state=a%26b%3Dc&token_type=Bearer&access_token=t%2Fk%2Bn&expires_in=1")
    );
}

#[test]
fn redirect_url_requires_redirect_uri() {
    let params = OAuthParams { redirect_uri: None, state: Some("xyz".to_owned()) };
    assert_eq!(build_redirect_url(&params, &issued("abc", 3600), None), None);
}
