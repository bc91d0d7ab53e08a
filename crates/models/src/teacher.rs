use serde::{Deserialize, Serialize};

use crate::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i32,
    pub name: String,
    pub post: String,
    /// Course code of the course this teacher instructs
    pub teaches: i32,
}

impl Teacher {
    pub fn new(id: i32, input: NewTeacher) -> Self {
        Self {
            id,
            name: input.name,
            post: input.post,
            teaches: input.teaches,
        }
    }
}

impl Record for Teacher {
    const KIND: &'static str = "Teacher";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Fields supplied by `addTeacher` and `updateTeacher`; the id is assigned
/// by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    pub name: String,
    pub post: String,
    pub teaches: i32,
}

impl NewTeacher {
    pub fn new(name: impl Into<String>, post: impl Into<String>, teaches: i32) -> Self {
        Self {
            name: name.into(),
            post: post.into(),
            teaches,
        }
    }
}
