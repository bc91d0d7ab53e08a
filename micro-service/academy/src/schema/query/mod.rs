pub mod course;
pub mod teacher;

use async_graphql::MergedObject;

#[derive(MergedObject, Default)]
pub struct Query(teacher::TeacherQuery, course::CourseQuery);

pub fn create_query() -> Query {
    Query(teacher::TeacherQuery, course::CourseQuery)
}
