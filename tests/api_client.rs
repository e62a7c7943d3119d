//! Integration tests for `ApiClient` against a local mock HTTP server.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use acadsched::loader::load_initial_study_programs;
use acadsched::models::{MessageResponse, SyncStrategy};
use acadsched::{ApiClient, ApiError, ListQuery};

fn study_program_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Program {}", id),
        "faculty_id": 1,
        "faculty_name": "Faculty of Engineering",
        "created_at": "2024-01-02T10:00:00Z",
        "created_by": "admin",
        "modified_at": "2024-01-02T10:00:00Z",
        "modified_by": "admin"
    })
}

#[tokio::test]
async fn get_returns_parsed_body_unchanged() {
    let server = MockServer::start().await;
    let body = json!({"data": {"message": "all good"}, "extra": [1, 2, 3]});

    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let parsed: Value = client.get("/v1/ping").await.unwrap();
    assert_eq!(parsed, body);
}

#[tokio::test]
async fn non_2xx_error_message_contains_status_code() {
    let server = MockServer::start().await;

    for code in [400u16, 404, 418, 500, 503] {
        Mock::given(method("GET"))
            .and(path(format!("/v1/status/{}", code)))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;
    }

    let client = ApiClient::new(server.uri()).unwrap();
    for code in [400u16, 404, 418, 500, 503] {
        let err = client
            .get::<Value>(&format!("/v1/status/{}", code))
            .await
            .unwrap_err();
        assert!(
            err.to_string().contains(&code.to_string()),
            "error {:?} should mention status {}",
            err.to_string(),
            code
        );
    }
}

#[tokio::test]
async fn bearer_token_is_sent_when_supplied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/faculties"))
        .and(header("Authorization", "Bearer test-token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri())
        .unwrap()
        .with_token("test-token-123".to_string());
    let _: Value = client.get("/v1/faculties").await.unwrap();
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/faculties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let _: Value = client.get("/v1/faculties").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn caller_headers_override_json_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/vnd.api+json"),
    );

    let client = ApiClient::new(server.uri()).unwrap();
    let _: Value = client.get_with_headers("/v1/ping", headers).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let accept = requests[0].headers.get("accept").unwrap();
    assert_eq!(accept, "application/vnd.api+json");
    // Content-Type default is untouched
    let content_type = requests[0].headers.get("content-type").unwrap();
    assert_eq!(content_type, "application/json");
}

#[tokio::test]
async fn loader_returns_first_page_of_study_programs() {
    let server = MockServer::start().await;
    let programs: Vec<Value> = (1..=10).map(study_program_json).collect();

    Mock::given(method("GET"))
        .and(path("/v1/study-programs"))
        .and(query_param("limit", "10"))
        .and(query_param("sort_by", "id"))
        .and(query_param("sort_dir", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "study_programs": programs,
                "total_data": 42,
                "total_page": 5
            }
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let initial = load_initial_study_programs(&client).await;

    assert_eq!(initial.len(), 10);
    assert_eq!(initial[0].id, 1);
    assert_eq!(initial[9].name, "Program 10");
}

#[tokio::test]
async fn list_faculties_sends_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/faculties"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "faculties": [],
                "total_data": 0,
                "total_page": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let query = ListQuery {
        page: Some(2),
        limit: Some(25),
        ..Default::default()
    };
    let resp = client.list_faculties(&query).await.unwrap();
    assert!(resp.data.unwrap().faculties.is_empty());
}

#[tokio::test]
async fn error_body_with_multibyte_text_is_reported_not_panicked() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/study-programs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("€".repeat(200)))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let err = client
        .get::<Value>("/v1/study-programs")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("500"));

    // The loader path degrades to empty rather than unwinding
    let initial = load_initial_study_programs(&client).await;
    assert!(initial.is_empty());
}

#[tokio::test]
async fn loader_returns_empty_list_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/study-programs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let initial = load_initial_study_programs(&client).await;
    assert!(initial.is_empty());
}

#[tokio::test]
async fn loader_returns_empty_list_when_data_is_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/study-programs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let initial = load_initial_study_programs(&client).await;
    assert!(initial.is_empty());
}

#[tokio::test]
async fn decode_failure_is_reported_as_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/faculties"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let err = client.get::<MessageResponse>("/v1/faculties").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn sync_posts_strategy_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/student-schedules/sync"))
        .and(body_json(json!({"strategy": "upsert"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "sync started"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let resp = client
        .sync_student_schedules(SyncStrategy::Upsert)
        .await
        .unwrap();
    assert_eq!(resp.message, "sync started");
}
