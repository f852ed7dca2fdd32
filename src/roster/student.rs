use crate::roster::util::mean;

/// A single student: a display name and the grades entered for them, kept
/// in entry order. Duplicate values are allowed and no range is enforced at
/// this layer; the shell validates input before it gets here.
#[derive(Debug, Clone)]
pub struct Student {
    pub name: String,
    pub grades: Vec<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn add_grade(&mut self, grade: f64) {
        self.grades.push(grade);
    }

    /// Arithmetic mean of this student's grades, `None` when there are none.
    ///
    /// Per-student statistics signal "no grades" as absence; only the
    /// gradebook-wide average collapses the empty case to 0.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            None
        } else {
            Some(mean(&self.grades))
        }
    }

    pub fn highest(&self) -> Option<f64> {
        self.grades.iter().copied().reduce(f64::max)
    }

    pub fn lowest(&self) -> Option<f64> {
        self.grades.iter().copied().reduce(f64::min)
    }
}
