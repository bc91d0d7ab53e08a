pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{Context, EmptySubscription, FieldError, Schema};
use std::sync::Arc;

use app_error::AppError;

use crate::service::AcademyService;
use mutation::{Mutation, create_mutation};
use query::{Query, create_query};

pub type ApiSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn create_schema() -> ApiSchema {
    Schema::build(create_query(), create_mutation(), EmptySubscription).finish()
}

// The service is attached per request by the GraphQL handler
pub(crate) fn academy_service<'ctx>(
    ctx: &Context<'ctx>,
) -> Result<&'ctx Arc<AcademyService>, FieldError> {
    ctx.data::<Arc<AcademyService>>().map_err(|_| {
        AppError::ServerError(anyhow::anyhow!(
            "Internal configuration error: Academy service not available"
        ))
        .to_field_error()
    })
}
