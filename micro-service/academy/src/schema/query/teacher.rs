use async_graphql::{Context, FieldError, Object};

use crate::schema::{academy_service, types::TeacherObject};
use crate::service::AcademyServiceTrait;

#[derive(Default)]
pub struct TeacherQuery;

#[Object]
impl TeacherQuery {
    /// A Single Teacher
    async fn teacher(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> Result<Option<TeacherObject>, FieldError> {
        let service = academy_service(ctx)?;

        let teacher = service
            .get_teacher_by_id(id)
            .await
            .map_err(|err| err.to_field_error())?;

        Ok(teacher.map(TeacherObject))
    }

    /// Return all Teachers
    async fn teachers(&self, ctx: &Context<'_>) -> Result<Vec<TeacherObject>, FieldError> {
        let service = academy_service(ctx)?;

        let teachers = service
            .list_teachers()
            .await
            .map_err(|err| err.to_field_error())?;

        Ok(teachers.into_iter().map(TeacherObject).collect())
    }
}
