use minichat_client::identity::{
    LineProfileProvider, Profile, ProfileProvider, Session, StaticProfileProvider, establish,
};

#[test]
fn channel_id_is_liff_prefix() {
    let provider = LineProfileProvider::new("1657000000-AbCdEfGh", None, None);
    assert_eq!(provider.channel_id(), "1657000000");

    let bare = LineProfileProvider::new("1657000000", None, None);
    assert_eq!(bare.channel_id(), "1657000000");
}

#[test]
fn login_url_targets_line_authorize() {
    let provider = LineProfileProvider::new(
        "1657000000-AbCdEfGh",
        None,
        Some("https://chat.example.com/peer?x=1".to_string()),
    );

    let url = provider.login_url().unwrap();

    assert!(url.starts_with("https://access.line.me/oauth2/v2.1/authorize?"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=1657000000"));
    assert!(url.contains("scope=profile+openid"));
    assert!(url.contains("redirect_uri=https%3A%2F%2Fchat.example.com%2Fpeer%3Fx%3D1"));
    assert!(url.contains("state="));
}

#[tokio::test]
async fn no_token_means_login_required() {
    let provider = LineProfileProvider::new("1657000000-AbCdEfGh", None, None);

    assert!(!provider.is_logged_in());
    match establish(&provider).await.unwrap() {
        Session::LoginRequired { login_url } => assert!(login_url.contains("client_id=1657000000")),
        other => panic!("expected login, got {other:?}"),
    }
}

#[tokio::test]
async fn static_provider_returns_its_profile() {
    let profile = Profile {
        user_id: "U123".to_string(),
        display_name: "Aki".to_string(),
        picture_url: Some("https://example.com/a.png".to_string()),
    };
    let provider = StaticProfileProvider::logged_in(profile.clone());

    assert_eq!(establish(&provider).await.unwrap(), Session::LoggedIn(profile));
}

#[test]
fn line_profile_payload_deserializes() {
    let json = r#"{"userId":"U123","displayName":"Aki","pictureUrl":"https://p","statusMessage":"hi"}"#;
    let profile: Profile = serde_json::from_str(json).unwrap();

    assert_eq!(profile.user_id, "U123");
    assert_eq!(profile.picture_url.as_deref(), Some("https://p"));
}

#[test]
fn register_body_omits_missing_picture() {
    let profile = Profile {
        user_id: "U123".to_string(),
        display_name: "Aki".to_string(),
        picture_url: None,
    };

    assert_eq!(
        serde_json::to_value(&profile).unwrap(),
        serde_json::json!({"userId": "U123", "displayName": "Aki"})
    );
}
