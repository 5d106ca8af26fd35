use super::*;

#[test]
fn authorize_response_reads_camel_case_fields() {
    let resp: AuthorizeResponse = serde_json::from_str(r#"{"accessToken":"abc","expiresIn":3600}"#).unwrap();
    assert_eq!(resp, AuthorizeResponse { access_token: "abc".to_owned(), expires_in: 3600 });
}

#[test]
fn authorize_response_accepts_integral_float_lifetime() {
    let resp: AuthorizeResponse = serde_json::from_str(r#"{"accessToken":"abc","expiresIn":3600.0}"#).unwrap();
    assert_eq!(resp.expires_in, 3600);
}

#[test]
fn authorize_response_rejects_fractional_lifetime() {
    let parsed = serde_json::from_str::<AuthorizeResponse>(r#"{"accessToken":"abc","expiresIn":1.5}"#);
    assert!(parsed.is_err());
}

#[test]
fn authorize_response_rejects_string_lifetime() {
    let parsed = serde_json::from_str::<AuthorizeResponse>(r#"{"accessToken":"abc","expiresIn":"3600"}"#);
    assert!(parsed.is_err());
}

#[test]
fn login_response_ignores_extra_fields() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t-1","user":{"id":7}}"#).unwrap();
    assert_eq!(resp.token, "t-1");
}
