use app_config::{AppConfig, DeletionMode};
use app_error::AppResult;
use app_store::initialize_store;
use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode},
};
use futures::future::join_all;
use micro_academy::{routes::create_routes, schema::create_schema, service::AcademyService};
use serde_json::{Value, json};
use std::{collections::HashSet, io::Write, sync::Arc};
use tower::ServiceExt;

// Helper function to create a test app instance
fn setup_test_app(config: &AppConfig) -> AppResult<axum::Router> {
    config.validate()?;

    let store = initialize_store(&config.store);
    let academy_service = Arc::new(AcademyService::new(store));

    let schema = create_schema();
    Ok(create_routes(schema, academy_service, config))
}

// Helper to make GraphQL requests
async fn graphql_request(
    app: &axum::Router,
    query: &str,
    variables: Option<Value>,
) -> (StatusCode, Value) {
    let mut request_json = json!({
        "query": query
    });

    if let Some(vars) = variables {
        request_json["variables"] = vars;
    }

    let body_string = serde_json::to_string(&request_json).unwrap();

    let request = Request::builder()
        .uri("/graphql")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .body(Body::from(body_string))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body_json: Value = serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));

    (status, body_json)
}

const ADD_TEACHER: &str = r#"
    mutation AddTeacher($name: String!, $post: String!, $teaches: Int!) {
        addTeacher(name: $name, post: $post, teaches: $teaches) {
            id
            name
            teaches
        }
    }
"#;

#[tokio::test]
async fn test_health_check_endpoint() -> AppResult<()> {
    let app = setup_test_app(&AppConfig::default())?;

    let request = Request::builder()
        .uri("/health")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_course_lifecycle_flow() -> AppResult<()> {
    let app = setup_test_app(&AppConfig::default())?;

    // 1. Add a course nobody teaches yet
    let (status, body) = graphql_request(
        &app,
        r#"mutation { addCourse(coursecode: 110, coursename: "Operating Systems") { id coursecode teacher { id } } }"#,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["addCourse"]["id"], 11);
    assert!(body["data"]["addCourse"]["teacher"].is_null());

    // 2. Hire a teacher for it
    let (_, body) = graphql_request(
        &app,
        ADD_TEACHER,
        Some(json!({ "name": "Sir K", "post": "Lecturer", "teaches": 110 })),
    )
    .await;
    let teacher_id = body["data"]["addTeacher"]["id"].as_i64().unwrap();
    assert_eq!(teacher_id, 11);

    // 3. The course now resolves to the new teacher
    let (_, body) = graphql_request(&app, "{ course(id: 11) { teacher { id name } } }", None).await;
    assert_eq!(body["data"]["course"]["teacher"]["name"], "Sir K");

    // 4. Reassign the teacher, the course loses its instructor
    let (_, body) = graphql_request(
        &app,
        r#"mutation { updateTeacher(id: 11, name: "Sir K", post: "Senior Lecturer", teaches: 100) { post course { coursecode } } }"#,
        None,
    )
    .await;
    assert_eq!(body["data"]["updateTeacher"]["post"], "Senior Lecturer");
    assert_eq!(body["data"]["updateTeacher"]["course"]["coursecode"], 100);

    let (_, body) = graphql_request(&app, "{ course(id: 11) { teacher { id } } }", None).await;
    assert!(body["data"]["course"]["teacher"].is_null());

    // 5. Course 1 still resolves to its first teacher in collection order
    let (_, body) = graphql_request(&app, "{ course(id: 1) { teacher { name } } }", None).await;
    assert_eq!(body["data"]["course"]["teacher"]["name"], "Sir A");

    // 6. Drop the course
    let (_, body) = graphql_request(&app, "mutation { removeCourse(id: 11) { id } }", None).await;
    assert_eq!(body["data"]["removeCourse"].as_array().unwrap().len(), 10);

    let (_, body) = graphql_request(&app, "{ course(id: 11) { id } }", None).await;
    assert!(body["data"]["course"].is_null());

    Ok(())
}

#[tokio::test]
async fn test_ids_survive_removal() -> AppResult<()> {
    let app = setup_test_app(&AppConfig::default())?;

    graphql_request(&app, "mutation { removeTeacher(id: 10) { id } }", None).await;
    graphql_request(&app, "mutation { removeTeacher(id: 3) { id } }", None).await;

    let (_, body) = graphql_request(
        &app,
        ADD_TEACHER,
        Some(json!({ "name": "Sir L", "post": "HOD", "teaches": 102 })),
    )
    .await;

    // A length based id would collide with teacher 9
    assert_eq!(body["data"]["addTeacher"]["id"], 11);

    let (_, body) = graphql_request(&app, "{ teachers { id } }", None).await;
    let ids: Vec<i64> = body["data"]["teachers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|teacher| teacher["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 4, 5, 6, 7, 8, 9, 11]);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_additions_get_unique_ids() -> AppResult<()> {
    let app = setup_test_app(&AppConfig::default())?;

    let requests = (0..50).map(|n| {
        let app = app.clone();
        async move {
            graphql_request(
                &app,
                ADD_TEACHER,
                Some(json!({ "name": format!("Adjunct {n}"), "post": "Adjunct", "teaches": 104 })),
            )
            .await
        }
    });

    let responses = join_all(requests).await;

    let ids: HashSet<i64> = responses
        .iter()
        .map(|(status, body)| {
            assert_eq!(*status, StatusCode::OK);
            body["data"]["addTeacher"]["id"].as_i64().unwrap()
        })
        .collect();
    assert_eq!(ids.len(), 50);
    assert!(ids.iter().all(|id| (11..=60).contains(id)));

    let (_, body) = graphql_request(&app, "{ teachers { id } }", None).await;
    assert_eq!(body["data"]["teachers"].as_array().unwrap().len(), 60);

    Ok(())
}

#[tokio::test]
async fn test_config_file_drives_store_behaviour() -> AppResult<()> {
    let mut config = AppConfig::default();
    config.store.seed = false;
    config.store.deletion = DeletionMode::Detached;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&config).unwrap().as_bytes())
        .unwrap();

    let loaded = AppConfig::from_file(file.path())?;
    let app = setup_test_app(&loaded)?;

    let (_, body) = graphql_request(&app, "{ teachers { id } courses { id } }", None).await;
    assert!(body["data"]["teachers"].as_array().unwrap().is_empty());
    assert!(body["data"]["courses"].as_array().unwrap().is_empty());

    let (_, body) = graphql_request(
        &app,
        ADD_TEACHER,
        Some(json!({ "name": "Sir A", "post": "HOD", "teaches": 100 })),
    )
    .await;
    assert_eq!(body["data"]["addTeacher"]["id"], 1);

    let (_, body) = graphql_request(&app, "mutation { removeTeacher(id: 1) { id } }", None).await;
    assert!(body["data"]["removeTeacher"].as_array().unwrap().is_empty());

    let (_, body) = graphql_request(&app, "{ teacher(id: 1) { name course { id } } }", None).await;
    assert_eq!(body["data"]["teacher"]["name"], "Sir A");
    assert!(body["data"]["teacher"]["course"].is_null());

    Ok(())
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let mut config = AppConfig::default();
    config.server.request_timeout = 0;

    assert!(setup_test_app(&config).is_err());
}
