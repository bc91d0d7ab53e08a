use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json,
    extract::Extension,
    response::{Html, IntoResponse},
};
use serde::Serialize;
use std::sync::Arc;

use app_error::AppResult;

use crate::{
    schema::ApiSchema,
    service::{AcademyService, AcademyServiceTrait},
};

// Handler for GraphQL POST requests
pub async fn graphql_handler(
    Extension(schema): Extension<ApiSchema>,
    Extension(academy_service): Extension<Arc<AcademyService>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    // Resolvers reach the store through the request context
    let request = req.into_inner().data(academy_service);

    schema.execute(request).await.into()
}

// Handler for GraphQL playground UI
pub async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub teachers: usize,
    pub courses: usize,
}

pub async fn health_check(
    Extension(academy_service): Extension<Arc<AcademyService>>,
) -> AppResult<Json<HealthStatus>> {
    let store = academy_service.get_store();

    Ok(Json(HealthStatus {
        status: "ok",
        teachers: store.teacher_count()?,
        courses: store.course_count()?,
    }))
}
