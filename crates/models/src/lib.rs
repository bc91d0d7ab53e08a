pub mod course;
pub mod record;
pub mod teacher;

pub use course::{Course, NewCourse};
pub use record::Record;
pub use teacher::{NewTeacher, Teacher};
