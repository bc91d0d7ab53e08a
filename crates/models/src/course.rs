use serde::{Deserialize, Serialize};

use crate::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    pub coursecode: i32,
    pub coursename: String,
}

impl Course {
    pub fn new(id: i32, input: NewCourse) -> Self {
        Self {
            id,
            coursecode: input.coursecode,
            coursename: input.coursename,
        }
    }
}

impl Record for Course {
    const KIND: &'static str = "Course";

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub coursecode: i32,
    pub coursename: String,
}

impl NewCourse {
    pub fn new(coursecode: i32, coursename: impl Into<String>) -> Self {
        Self {
            coursecode,
            coursename: coursename.into(),
        }
    }
}
