use app_models::{Course, NewCourse, NewTeacher, Teacher};

const COURSES: [(i32, i32, &str); 10] = [
    (1, 100, "Intro to computing"),
    (2, 101, "Programming fundamentals"),
    (3, 102, "English Language"),
    (4, 103, "Linear Algebra"),
    (5, 104, "Prob & Statistics"),
    (6, 105, "Theory of Automata"),
    (7, 106, "Design Patterns"),
    (8, 107, "Data Structures"),
    (9, 108, "Database"),
    (10, 109, "Information Security"),
];

const TEACHERS: [(i32, &str, &str, i32); 10] = [
    (1, "Sir A", "Associate Professor", 100),
    (2, "Sir B", "Associate Professor", 101),
    (3, "Sir C", "Assitant Professor", 102),
    (4, "Sir D", "Assitant Professor", 103),
    (5, "Sir E", "Associate Professor", 104),
    (6, "Sir F", "HOD", 105),
    (7, "Sir G", "Director", 106),
    (8, "Sir H", "Associate Professor", 107),
    (9, "Sir I", "Assitant Professor", 108),
    (10, "Sir J", "HOD", 109),
];

pub fn seed_courses() -> Vec<Course> {
    COURSES
        .iter()
        .map(|&(id, coursecode, coursename)| Course::new(id, NewCourse::new(coursecode, coursename)))
        .collect()
}

pub fn seed_teachers() -> Vec<Teacher> {
    TEACHERS
        .iter()
        .map(|&(id, name, post, teaches)| Teacher::new(id, NewTeacher::new(name, post, teaches)))
        .collect()
}
