use async_graphql::{Context, FieldError, Object};

use app_models::{Course, Teacher};

use super::academy_service;
use crate::service::AcademyServiceTrait;

pub struct TeacherObject(pub Teacher);

pub struct CourseObject(pub Course);

/// This represents a teacher in the university
#[Object(name = "Teacher")]
impl TeacherObject {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn post(&self) -> &str {
        &self.0.post
    }

    /// Code of the course this teacher instructs
    async fn teaches(&self) -> i32 {
        self.0.teaches
    }

    /// The first course whose code matches `teaches`, if any
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<CourseObject>, FieldError> {
        let service = academy_service(ctx)?;

        let course = service
            .course_for_teacher(&self.0)
            .await
            .map_err(|err| err.to_field_error())?;

        Ok(course.map(CourseObject))
    }
}

/// This represents a course
#[Object(name = "Course")]
impl CourseObject {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn coursecode(&self) -> i32 {
        self.0.coursecode
    }

    async fn coursename(&self) -> &str {
        &self.0.coursename
    }

    /// The first teacher whose `teaches` matches this course code, if any
    async fn teacher(&self, ctx: &Context<'_>) -> Result<Option<TeacherObject>, FieldError> {
        let service = academy_service(ctx)?;

        let teacher = service
            .teacher_for_course(&self.0)
            .await
            .map_err(|err| err.to_field_error())?;

        Ok(teacher.map(TeacherObject))
    }
}
