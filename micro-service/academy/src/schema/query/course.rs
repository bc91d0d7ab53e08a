use async_graphql::{Context, FieldError, Object};

use crate::schema::{academy_service, types::CourseObject};
use crate::service::AcademyServiceTrait;

#[derive(Default)]
pub struct CourseQuery;

#[Object]
impl CourseQuery {
    /// A Single Course
    async fn course(&self, ctx: &Context<'_>, id: i32) -> Result<Option<CourseObject>, FieldError> {
        let service = academy_service(ctx)?;

        let course = service
            .get_course_by_id(id)
            .await
            .map_err(|err| err.to_field_error())?;

        Ok(course.map(CourseObject))
    }

    /// Return all Courses
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<CourseObject>, FieldError> {
        let service = academy_service(ctx)?;

        let courses = service
            .list_courses()
            .await
            .map_err(|err| err.to_field_error())?;

        Ok(courses.into_iter().map(CourseObject).collect())
    }
}
