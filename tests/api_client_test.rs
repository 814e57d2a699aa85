use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value as JsonValue};

use jobmatch_client::client::ApiClient;
use jobmatch_client::config::Config;
use jobmatch_client::dto::resume_dto::CreateResumePayload;
use jobmatch_client::error::Error;

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });
    format!("http://{}", addr)
}

fn client_for(base_url: String) -> ApiClient {
    let config = Config {
        api_base_url: base_url,
        ..Config::default()
    };
    ApiClient::new(&config).expect("build client")
}

async fn get_resume(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 7 {
        Json(json!({
            "id": 7,
            "title": "Backend Engineer",
            "summary": "Seven years of Rust",
            "skills": "Rust, SQL, Tokio",
            "desired_salary": 150000,
            "location": "Moscow"
        }))
        .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Resume not found"})),
        )
            .into_response()
    }
}

#[tokio::test]
async fn successful_response_parses_into_the_model() {
    let base = spawn_backend(Router::new().route("/api/resumes/:id", get(get_resume))).await;
    let client = client_for(base);

    let resume = client.get_resume(7).await.unwrap();
    assert_eq!(resume.id, 7);
    assert_eq!(resume.title, "Backend Engineer");
    assert_eq!(resume.desired_salary, Some(150_000));
    assert_eq!(resume.experience, None);
}

#[tokio::test]
async fn missing_entity_surfaces_the_backend_detail() {
    let base = spawn_backend(Router::new().route("/api/resumes/:id", get(get_resume))).await;
    let client = client_for(base);

    let err = client.get_resume(99).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.detail(), "Resume not found");
}

#[tokio::test]
async fn server_error_becomes_a_typed_http_failure() {
    let app = Router::new().route(
        "/api/vacancies/all",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "database down"})),
            )
        }),
    );
    let base = spawn_backend(app).await;
    let client = client_for(base);

    match client.list_vacancies().await.unwrap_err() {
        Error::Http { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "database down");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn error_without_detail_body_falls_back_to_the_status_reason() {
    let app = Router::new().route(
        "/api/vacancies/all",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = spawn_backend(app).await;
    let client = client_for(base);

    match client.list_vacancies().await.unwrap_err() {
        Error::Http { status, detail } => {
            assert_eq!(status, 503);
            assert_eq!(detail, "Service Unavailable");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Grab a port nobody is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{}", addr));
    let err = client.get_vacancy(1).await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn malformed_success_body_is_a_json_error() {
    let app = Router::new().route("/api/vacancies/all", get(|| async { "not json" }));
    let base = spawn_backend(app).await;
    let client = client_for(base);

    let err = client.list_vacancies().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn create_resume_posts_the_payload_and_returns_the_new_id() {
    let app = Router::new().route(
        "/api/resumes",
        post(|Json(body): Json<JsonValue>| async move {
            assert_eq!(body["title"], "Backend Engineer");
            assert_eq!(body["user_id"], 1);
            (
                StatusCode::CREATED,
                Json(json!({
                    "id": 42,
                    "message": "created",
                    "embedding_generated": true
                })),
            )
        }),
    );
    let base = spawn_backend(app).await;
    let client = client_for(base);

    let payload = CreateResumePayload {
        user_id: 1,
        title: "Backend Engineer".to_string(),
        summary: None,
        skills: Some("Rust".to_string()),
        experience: None,
        education: None,
        desired_position: Some("Backend Engineer".to_string()),
        desired_salary: Some(150_000),
        location: None,
    };
    let saved = client.create_resume(&payload).await.unwrap();
    assert_eq!(saved.id, 42);
    assert_eq!(saved.embedding_generated, Some(true));
}

#[tokio::test]
async fn match_analysis_round_trips_all_fields() {
    let app = Router::new().route(
        "/api/resumes/:rid/vacancies/:vid/match-analysis",
        get(|Path((rid, vid)): Path<(i64, i64)>| async move {
            Json(json!({
                "resume_id": rid,
                "vacancy_id": vid,
                "match_percentage": 76.5,
                "matched_skills": ["Rust", "SQL"],
                "missing_skills": ["Kubernetes", "Go"],
                "critical_missing_skills": ["Go"],
                "extra_skills": ["Haskell"],
                "extra_skills_bonus": 5,
                "recommendations": "Learn Go basics"
            }))
        }),
    );
    let base = spawn_backend(app).await;
    let client = client_for(base);

    let analysis = client.match_analysis(7, 3).await.unwrap();
    assert_eq!(analysis.resume_id, 7);
    assert_eq!(analysis.vacancy_id, 3);
    assert_eq!(analysis.rounded_percentage(), 77);
    assert_eq!(analysis.matched_skills.len(), 2);
    assert_eq!(analysis.critical_missing_skills, vec!["Go".to_string()]);
    assert_eq!(analysis.extra_skills_bonus, Some(5));
}
