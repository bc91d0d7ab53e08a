//! Read-time joins between teachers and courses.
//!
//! A teacher's `teaches` is a soft reference to a course's `coursecode`.
//! Nothing keeps the two sides consistent, so every lookup is a fresh linear
//! scan that yields the first match in collection order, or nothing.

use app_models::{Course, Teacher};

pub fn find_course_by_code(courses: &[Course], coursecode: i32) -> Option<&Course> {
    courses.iter().find(|course| course.coursecode == coursecode)
}

pub fn course_for_teacher<'a>(teacher: &Teacher, courses: &'a [Course]) -> Option<&'a Course> {
    find_course_by_code(courses, teacher.teaches)
}

pub fn teacher_for_course<'a>(course: &Course, teachers: &'a [Teacher]) -> Option<&'a Teacher> {
    teachers
        .iter()
        .find(|teacher| teacher.teaches == course.coursecode)
}
