pub mod course;
pub mod teacher;

use async_graphql::MergedObject;

#[derive(MergedObject, Default)]
pub struct Mutation(teacher::TeacherMutation, course::CourseMutation);

pub fn create_mutation() -> Mutation {
    Mutation(teacher::TeacherMutation, course::CourseMutation)
}
