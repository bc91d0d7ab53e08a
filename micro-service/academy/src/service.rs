use app_error::AppResult;
use app_models::{Course, NewCourse, NewTeacher, Teacher};
use app_store::RecordStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Trait defining the teacher/course operations exposed over GraphQL
#[async_trait]
pub trait AcademyServiceTrait: Send + Sync {
    async fn get_teacher_by_id(&self, id: i32) -> AppResult<Option<Teacher>>;

    async fn list_teachers(&self) -> AppResult<Vec<Teacher>>;

    async fn get_course_by_id(&self, id: i32) -> AppResult<Option<Course>>;

    async fn list_courses(&self) -> AppResult<Vec<Course>>;

    async fn add_teacher(&self, input: NewTeacher) -> AppResult<Teacher>;

    async fn add_course(&self, input: NewCourse) -> AppResult<Course>;

    /// Remove a teacher and return the teachers that remain
    async fn remove_teacher(&self, id: i32) -> AppResult<Vec<Teacher>>;

    /// Remove a course and return the courses that remain
    async fn remove_course(&self, id: i32) -> AppResult<Vec<Course>>;

    /// Replace every field of an existing teacher but its id
    async fn update_teacher(&self, id: i32, input: NewTeacher) -> AppResult<Teacher>;

    async fn course_for_teacher(&self, teacher: &Teacher) -> AppResult<Option<Course>>;

    async fn teacher_for_course(&self, course: &Course) -> AppResult<Option<Teacher>>;

    fn get_store(&self) -> Arc<RecordStore>;
}

pub struct AcademyService {
    store: Arc<RecordStore>,
}

impl AcademyService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AcademyServiceTrait for AcademyService {
    async fn get_teacher_by_id(&self, id: i32) -> AppResult<Option<Teacher>> {
        self.store.get_teacher_by_id(id)
    }

    async fn list_teachers(&self) -> AppResult<Vec<Teacher>> {
        self.store.list_teachers()
    }

    async fn get_course_by_id(&self, id: i32) -> AppResult<Option<Course>> {
        self.store.get_course_by_id(id)
    }

    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.store.list_courses()
    }

    async fn add_teacher(&self, input: NewTeacher) -> AppResult<Teacher> {
        debug!(name = %input.name, teaches = input.teaches, "Adding teacher");
        self.store.add_teacher(input).inspect_err(|e| {
            warn!("Failed to add teacher: {}", e);
        })
    }

    async fn add_course(&self, input: NewCourse) -> AppResult<Course> {
        debug!(coursecode = input.coursecode, "Adding course");
        self.store.add_course(input).inspect_err(|e| {
            warn!("Failed to add course: {}", e);
        })
    }

    async fn remove_teacher(&self, id: i32) -> AppResult<Vec<Teacher>> {
        self.store.remove_teacher_by_id(id)
    }

    async fn remove_course(&self, id: i32) -> AppResult<Vec<Course>> {
        self.store.remove_course_by_id(id)
    }

    async fn update_teacher(&self, id: i32, input: NewTeacher) -> AppResult<Teacher> {
        self.store.update_teacher_by_id(id, input).inspect_err(|e| {
            warn!(id, "Failed to update teacher: {}", e);
        })
    }

    async fn course_for_teacher(&self, teacher: &Teacher) -> AppResult<Option<Course>> {
        self.store.course_for_teacher(teacher)
    }

    async fn teacher_for_course(&self, course: &Course) -> AppResult<Option<Teacher>> {
        self.store.teacher_for_course(course)
    }

    fn get_store(&self) -> Arc<RecordStore> {
        Arc::clone(&self.store)
    }
}
