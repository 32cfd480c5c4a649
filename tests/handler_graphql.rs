mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use short::routes::router;

fn server(state: short::AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

async fn post_graphql(server: &TestServer, token: Option<&str>, query: &str) -> Value {
    let mut request = server.post("/graphql").json(&json!({ "query": query }));
    if let Some(token) = token {
        request = request.add_header("Authorization", format!("Bearer {token}"));
    }

    let response = request.await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[tokio::test]
async fn test_create_url_with_custom_alias() {
    let (state, store) = common::create_test_state(common::FakeAccount::failing());
    let token = common::sign_up(&state, &store, "alpha@example.com");
    let server = server(state);

    let body = post_graphql(
        &server,
        Some(&token),
        r#"mutation {
            createURL(url: { originalURL: "https://www.google.com", customAlias: "google" }, isPublic: false) {
                alias
                originalURL
                createdAt
            }
        }"#,
    )
    .await;

    assert_eq!(body["data"]["createURL"]["alias"], "google");
    assert_eq!(body["data"]["createURL"]["originalURL"], "https://www.google.com/");
    assert!(body["data"]["createURL"]["createdAt"].is_string());

    assert!(store.url("google").is_some());
    assert_eq!(store.owners_of("google"), vec!["alpha@example.com"]);
}

#[tokio::test]
async fn test_create_url_generates_alias() {
    let (state, store) = common::create_test_state(common::FakeAccount::failing());
    let token = common::sign_up(&state, &store, "alpha@example.com");
    let server = server(state);

    let body = post_graphql(
        &server,
        Some(&token),
        r#"mutation { createURL(url: { originalURL: "https://example.com/a" }, isPublic: true) { alias } }"#,
    )
    .await;

    let alias = body["data"]["createURL"]["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 10);
    assert!(store.url(alias).is_some());
}

#[tokio::test]
async fn test_create_url_alias_exist() {
    let (state, store) = common::create_test_state(common::FakeAccount::failing());
    let token = common::sign_up(&state, &store, "alpha@example.com");
    store.insert_url(
        "beta@example.com",
        common::stored_url("google", "https://www.google.com/"),
    );
    let server = server(state);

    let body = post_graphql(
        &server,
        Some(&token),
        r#"mutation { createURL(url: { originalURL: "https://bing.com", customAlias: "google" }, isPublic: false) { alias } }"#,
    )
    .await;

    assert_eq!(body["errors"][0]["extensions"]["code"], "AliasExist");
    assert_eq!(
        store.url("google").unwrap().original_url,
        "https://www.google.com/"
    );
}

#[tokio::test]
async fn test_create_url_invalid_inputs() {
    let (state, store) = common::create_test_state(common::FakeAccount::failing());
    let token = common::sign_up(&state, &store, "alpha@example.com");
    let server = server(state);

    let body = post_graphql(
        &server,
        Some(&token),
        r#"mutation { createURL(url: { originalURL: "www.google.com" }, isPublic: false) { alias } }"#,
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "InvalidLongLink");

    let body = post_graphql(
        &server,
        Some(&token),
        r#"mutation { createURL(url: { originalURL: "https://google.com", customAlias: "has space" }, isPublic: false) { alias } }"#,
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "InvalidCustomAlias");
}

#[tokio::test]
async fn test_create_url_requires_auth() {
    let (state, store) = common::create_test_state(common::FakeAccount::failing());
    let server = server(state);

    let query = r#"mutation { createURL(url: { originalURL: "https://example.com", customAlias: "anon" }, isPublic: false) { alias } }"#;

    let body = post_graphql(&server, None, query).await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "Unauthorized");

    let body = post_graphql(&server, Some("forged.token"), query).await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "Unauthorized");

    assert!(store.url("anon").is_none());
}

#[tokio::test]
async fn test_modify_url_moves_relation() {
    let (state, store) = common::create_test_state(common::FakeAccount::failing());
    let token = common::sign_up(&state, &store, "alpha@example.com");
    store.insert_url(
        "alpha@example.com",
        common::stored_url("220uFicCJj", "https://www.google.com/"),
    );
    let server = server(state);

    let body = post_graphql(
        &server,
        Some(&token),
        r#"mutation { modifyURL(oldAlias: "220uFicCJj", newAlias: "3029jasdjnc") { alias originalURL updatedAt } }"#,
    )
    .await;

    assert_eq!(body["data"]["modifyURL"]["alias"], "3029jasdjnc");
    assert_eq!(body["data"]["modifyURL"]["originalURL"], "https://www.google.com/");
    assert!(body["data"]["modifyURL"]["updatedAt"].is_string());

    assert!(store.url("220uFicCJj").is_none());
    assert!(store.url("3029jasdjnc").is_some());
    assert!(store.owners_of("220uFicCJj").is_empty());
    assert_eq!(store.owners_of("3029jasdjnc"), vec!["alpha@example.com"]);
}

#[tokio::test]
async fn test_modify_url_errors() {
    let (state, store) = common::create_test_state(common::FakeAccount::failing());
    let token = common::sign_up(&state, &store, "alpha@example.com");
    store.insert_url(
        "alpha@example.com",
        common::stored_url("220uFicCJj", "https://www.google.com/"),
    );
    store.insert_url(
        "beta@example.com",
        common::stored_url("betas", "https://example.com/"),
    );
    let server = server(state);

    let cases = [
        (r#"oldAlias: "missing", newAlias: "other""#, "NotFound"),
        (r#"oldAlias: "betas", newAlias: "mine""#, "NotFound"),
        (
            r#"oldAlias: "220uFicCJj", newAlias: "3029jasdjncasdasldnlkahfkhsaklhfkwehkjasddasdhsdsakl""#,
            "InvalidCustomAlias",
        ),
        (r#"oldAlias: "220uFicCJj", newAlias: "betas""#, "AliasExist"),
    ];

    for (args, code) in cases {
        let query = format!("mutation {{ modifyURL({args}) {{ alias }} }}");
        let body = post_graphql(&server, Some(&token), &query).await;
        assert_eq!(body["errors"][0]["extensions"]["code"], code, "{args}");
    }

    assert!(store.url("220uFicCJj").is_some());
    assert!(store.url("betas").is_some());
}

#[tokio::test]
async fn test_url_query_honors_expiration() {
    let (state, store) = common::create_test_state(common::FakeAccount::failing());
    let mut url = common::stored_url("soon", "https://example.com/");
    url.expire_at = Some("2030-01-01T00:00:00Z".parse().unwrap());
    store.insert_url("alpha@example.com", url);
    let server = server(state);

    let body = post_graphql(&server, None, r#"{ url(alias: "soon") { alias expireAt } }"#).await;
    assert_eq!(body["data"]["url"]["alias"], "soon");

    let body = post_graphql(
        &server,
        None,
        r#"{ url(alias: "soon", expireAfter: "2031-01-01T00:00:00Z") { alias } }"#,
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "NotFound");
}

#[tokio::test]
async fn test_viewer() {
    let (state, store) = common::create_test_state(common::FakeAccount::failing());
    let token = common::sign_up(&state, &store, "alpha@example.com");
    store.insert_url(
        "alpha@example.com",
        common::stored_url("mine", "https://example.com/"),
    );
    store.insert_url(
        "beta@example.com",
        common::stored_url("theirs", "https://example.com/"),
    );
    let server = server(state);

    let body = post_graphql(&server, Some(&token), "{ viewer { email urls { alias } } }").await;
    assert_eq!(
        body["data"]["viewer"],
        json!({ "email": "alpha@example.com", "urls": [{ "alias": "mine" }] })
    );

    let body = post_graphql(&server, None, "{ viewer { email } }").await;
    assert_eq!(body["data"]["viewer"], Value::Null);
}

#[tokio::test]
async fn test_graphiql_page() {
    let (state, _store) = common::create_test_state(common::FakeAccount::failing());
    let server = server(state);

    let response = server.get("/graphql").await;

    response.assert_status_ok();
    assert!(response.text().contains("graphiql"));
}
