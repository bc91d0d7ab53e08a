use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info};

use app_config::{DeletionMode, ReferencePolicy, StoreConfig};
use app_error::{AppError, AppResult, not_found_error, resource_exists_error, validation_error};
use app_models::{Course, NewCourse, NewTeacher, Record, Teacher};

use crate::{collection::Collection, relations, seed};

#[derive(Debug, Default)]
struct Collections {
    teachers: Collection<Teacher>,
    courses: Collection<Course>,
}

/// Owns the teacher and course collections.
///
/// Both collections and their id counters sit behind one lock, so a mutation
/// observes and updates them as a unit and concurrent inserts never share an
/// id.
#[derive(Debug)]
pub struct RecordStore {
    collections: RwLock<Collections>,
    config: StoreConfig,
}

impl RecordStore {
    /// Create a store from configuration, loading the fixture records when
    /// `seed` is set.
    pub fn new(config: StoreConfig) -> Self {
        if config.seed {
            Self::with_records(config, seed::seed_teachers(), seed::seed_courses())
        } else {
            Self::with_records(config, Vec::new(), Vec::new())
        }
    }

    pub fn with_records(config: StoreConfig, teachers: Vec<Teacher>, courses: Vec<Course>) -> Self {
        Self {
            collections: RwLock::new(Collections {
                teachers: Collection::from_records(teachers),
                courses: Collection::from_records(courses),
            }),
            config,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    fn read(&self, operation: &str) -> AppResult<RwLockReadGuard<'_, Collections>> {
        self.collections.read().map_err(|e| {
            error!("Failed to acquire read lock for '{}': {}", operation, e);
            AppError::store_operation_failed(operation, "records")
        })
    }

    fn write(&self, operation: &str) -> AppResult<RwLockWriteGuard<'_, Collections>> {
        self.collections.write().map_err(|e| {
            error!("Failed to acquire write lock for '{}': {}", operation, e);
            AppError::store_operation_failed(operation, "records")
        })
    }

    pub fn teacher_count(&self) -> AppResult<usize> {
        Ok(self.read("teacher_count")?.teachers.len())
    }

    pub fn course_count(&self) -> AppResult<usize> {
        Ok(self.read("course_count")?.courses.len())
    }

    pub fn get_teacher_by_id(&self, id: i32) -> AppResult<Option<Teacher>> {
        let collections = self.read("get_teacher_by_id")?;
        let teacher = collections.teachers.get(id).cloned();
        debug!(id, found = teacher.is_some(), "Teacher lookup");
        Ok(teacher)
    }

    pub fn list_teachers(&self) -> AppResult<Vec<Teacher>> {
        Ok(self.read("list_teachers")?.teachers.records().to_vec())
    }

    pub fn get_course_by_id(&self, id: i32) -> AppResult<Option<Course>> {
        let collections = self.read("get_course_by_id")?;
        let course = collections.courses.get(id).cloned();
        debug!(id, found = course.is_some(), "Course lookup");
        Ok(course)
    }

    pub fn list_courses(&self) -> AppResult<Vec<Course>> {
        Ok(self.read("list_courses")?.courses.records().to_vec())
    }

    pub fn add_teacher(&self, input: NewTeacher) -> AppResult<Teacher> {
        let mut collections = self.write("add_teacher")?;
        self.check_teaches(&collections, input.teaches)?;

        let teacher = collections
            .teachers
            .insert_with(|id| Teacher::new(id, input))?;

        info!(id = teacher.id, teaches = teacher.teaches, "Teacher added");
        Ok(teacher)
    }

    pub fn add_course(&self, input: NewCourse) -> AppResult<Course> {
        let mut collections = self.write("add_course")?;

        if self.config.references == ReferencePolicy::Enforced
            && relations::find_course_by_code(collections.courses.records(), input.coursecode)
                .is_some()
        {
            return resource_exists_error!(Course::KIND, "coursecode", input.coursecode);
        }

        let course = collections
            .courses
            .insert_with(|id| Course::new(id, input))?;

        info!(id = course.id, coursecode = course.coursecode, "Course added");
        Ok(course)
    }

    /// Returns the teachers left once `id` is excluded. In detached mode the
    /// store itself keeps the record.
    pub fn remove_teacher_by_id(&self, id: i32) -> AppResult<Vec<Teacher>> {
        let remaining = match self.config.deletion {
            DeletionMode::Persist => self.write("remove_teacher_by_id")?.teachers.remove(id),
            DeletionMode::Detached => self.read("remove_teacher_by_id")?.teachers.without(id),
        };

        info!(id, mode = %self.config.deletion, remaining = remaining.len(), "Teacher removal");
        Ok(remaining)
    }

    pub fn remove_course_by_id(&self, id: i32) -> AppResult<Vec<Course>> {
        let remaining = match self.config.deletion {
            DeletionMode::Persist => self.write("remove_course_by_id")?.courses.remove(id),
            DeletionMode::Detached => self.read("remove_course_by_id")?.courses.without(id),
        };

        info!(id, mode = %self.config.deletion, remaining = remaining.len(), "Course removal");
        Ok(remaining)
    }

    pub fn update_teacher_by_id(&self, id: i32, input: NewTeacher) -> AppResult<Teacher> {
        let mut collections = self.write("update_teacher_by_id")?;

        if collections.teachers.get(id).is_none() {
            return not_found_error!(Teacher::KIND, id);
        }
        self.check_teaches(&collections, input.teaches)?;

        let teacher = collections
            .teachers
            .replace(id, Teacher::new(id, input))
            .ok_or_else(|| AppError::resource_not_found(Teacher::KIND, &id.to_string()))?;

        info!(id, teaches = teacher.teaches, "Teacher updated");
        Ok(teacher)
    }

    pub fn course_for_teacher(&self, teacher: &Teacher) -> AppResult<Option<Course>> {
        let collections = self.read("course_for_teacher")?;
        Ok(relations::course_for_teacher(teacher, collections.courses.records()).cloned())
    }

    pub fn teacher_for_course(&self, course: &Course) -> AppResult<Option<Teacher>> {
        let collections = self.read("teacher_for_course")?;
        Ok(relations::teacher_for_course(course, collections.teachers.records()).cloned())
    }

    fn check_teaches(&self, collections: &Collections, teaches: i32) -> AppResult<()> {
        if self.config.references == ReferencePolicy::Enforced
            && relations::find_course_by_code(collections.courses.records(), teaches).is_none()
        {
            return validation_error!("teaches", format!("no course has code {}", teaches));
        }
        Ok(())
    }
}
