use async_graphql::{Context, FieldError, Object};
use tracing::info;

use app_models::NewCourse;

use crate::schema::{academy_service, types::CourseObject};
use crate::service::AcademyServiceTrait;

#[derive(Default)]
pub struct CourseMutation;

#[Object]
impl CourseMutation {
    /// Add a Course
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        coursecode: i32,
        coursename: String,
    ) -> Result<CourseObject, FieldError> {
        let service = academy_service(ctx)?;

        let course = service
            .add_course(NewCourse {
                coursecode,
                coursename,
            })
            .await
            .map_err(|err| err.to_field_error())?;

        info!("Created course {} ({})", course.id, course.coursecode);
        Ok(CourseObject(course))
    }

    /// Remove a Course
    async fn remove_course(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> Result<Vec<CourseObject>, FieldError> {
        let service = academy_service(ctx)?;

        let remaining = service
            .remove_course(id)
            .await
            .map_err(|err| err.to_field_error())?;

        Ok(remaining.into_iter().map(CourseObject).collect())
    }
}
