use mockito::Matcher;
use recipe_quest::{find_recipes, search_recipes, ApiClient, QuestError, SortMode};

#[test]
fn test_search_sends_encoded_query() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), "K".into()),
            Matcher::UrlEncoded("q".into(), "chicken breast,rice".into()),
            Matcher::UrlEncoded("sort".into(), "r".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 1, "recipes": [{"recipe_id": "35171", "title": "Chicken Fried Rice"}]}"#)
        .create();

    let client = ApiClient::new("K").unwrap();
    let url = format!("{}/api/search", server.url());
    let results = find_recipes(&client, &url, &["chicken breast", "rice"], SortMode::Rating);

    mock.assert();
    assert_eq!(results.count, Some(1));
    let recipes = results.recipes.unwrap();
    assert_eq!(recipes[0].recipe_id.as_ref().unwrap().to_string(), "35171");
    assert_eq!(recipes[0].title.as_deref(), Some("Chicken Fried Rice"));
}

#[test]
fn test_search_passes_trendiness_sort() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("sort".into(), "t".into()))
        .with_status(200)
        .with_body(r#"{"count": 0, "recipes": []}"#)
        .create();

    let client = ApiClient::new("K").unwrap();
    let url = format!("{}/api/search", server.url());
    let results = find_recipes(&client, &url, &["egg"], SortMode::Trendiness);

    mock.assert();
    assert!(results.recipes.unwrap().is_empty());
}

#[test]
fn test_search_http_error_gives_empty_result() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"error": "forbidden"}"#)
        .create();

    let client = ApiClient::new("K").unwrap();
    let url = format!("{}/api/search", server.url());
    let results = find_recipes(&client, &url, &["egg"], SortMode::Rating);

    mock.assert();
    assert!(results.recipes.is_none());
    assert!(results.count.is_none());
}

#[test]
fn test_search_empty_body_gives_empty_result() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .create();

    let client = ApiClient::new("K").unwrap();
    let url = format!("{}/api/search", server.url());
    let results = find_recipes(&client, &url, &["egg"], SortMode::Rating);

    assert!(results.recipes.is_none());
}

#[test]
fn test_search_recipes_surfaces_transport_errors() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(401)
        .create();

    let client = ApiClient::new("K").unwrap();
    let url = format!("{}/api/search", server.url());
    let result = search_recipes(&client, &url, &["egg"], SortMode::Rating);

    assert!(matches!(result, Err(QuestError::HttpStatus(401))));
}
