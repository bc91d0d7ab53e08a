use async_graphql::{Context, FieldError, Object};
use tracing::info;

use app_models::NewTeacher;

use crate::schema::{academy_service, types::TeacherObject};
use crate::service::AcademyServiceTrait;

#[derive(Default)]
pub struct TeacherMutation;

#[Object]
impl TeacherMutation {
    /// Add a Teacher
    async fn add_teacher(
        &self,
        ctx: &Context<'_>,
        name: String,
        post: String,
        teaches: i32,
    ) -> Result<TeacherObject, FieldError> {
        let service = academy_service(ctx)?;

        let teacher = service
            .add_teacher(NewTeacher { name, post, teaches })
            .await
            .map_err(|err| err.to_field_error())?;

        info!("Created teacher {} ({})", teacher.id, teacher.name);
        Ok(TeacherObject(teacher))
    }

    /// Remove a Teacher
    async fn remove_teacher(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> Result<Vec<TeacherObject>, FieldError> {
        let service = academy_service(ctx)?;

        let remaining = service
            .remove_teacher(id)
            .await
            .map_err(|err| err.to_field_error())?;

        Ok(remaining.into_iter().map(TeacherObject).collect())
    }

    /// Update a Teacher
    async fn update_teacher(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        post: String,
        teaches: i32,
    ) -> Result<TeacherObject, FieldError> {
        let service = academy_service(ctx)?;

        let teacher = service
            .update_teacher(id, NewTeacher { name, post, teaches })
            .await
            .map_err(|err| err.to_field_error())?;

        Ok(TeacherObject(teacher))
    }
}
