//! In-memory record store for students and tutors.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Student, Tutor};

/// Insertion-ordered student and tutor collections shared by the handlers.
///
/// Readers get clones of the records so no lock is held while scoring.
#[derive(Debug, Default)]
pub struct ProfileStore {
    students: RwLock<Vec<Student>>,
    tutors: RwLock<Vec<Tutor>>,
}

impl ProfileStore {
    /// Creates a store holding the given records.
    pub fn with_records(students: Vec<Student>, tutors: Vec<Tutor>) -> Self {
        Self {
            students: RwLock::new(students),
            tutors: RwLock::new(tutors),
        }
    }

    /// Returns all students in insertion order.
    pub async fn students(&self) -> Vec<Student> {
        self.students.read().await.clone()
    }

    /// Returns the student with the given ID, if any.
    pub async fn find_student(&self, id: Uuid) -> Option<Student> {
        self.students
            .read()
            .await
            .iter()
            .find(|student| student.id == id)
            .cloned()
    }

    /// Appends students and returns how many were added.
    pub async fn insert_students(&self, students: Vec<Student>) -> usize {
        let count = students.len();
        self.students.write().await.extend(students);
        count
    }

    /// Removes every student and returns how many were removed.
    pub async fn clear_students(&self) -> usize {
        let mut students = self.students.write().await;
        let count = students.len();
        students.clear();
        count
    }

    /// Returns all tutors in insertion order.
    pub async fn tutors(&self) -> Vec<Tutor> {
        self.tutors.read().await.clone()
    }

    /// Appends tutors and returns how many were added.
    pub async fn insert_tutors(&self, tutors: Vec<Tutor>) -> usize {
        let count = tutors.len();
        self.tutors.write().await.extend(tutors);
        count
    }

    /// Removes every tutor and returns how many were removed.
    pub async fn clear_tutors(&self) -> usize {
        let mut tutors = self.tutors.write().await;
        let count = tutors.len();
        tutors.clear();
        count
    }
}
