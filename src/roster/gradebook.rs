use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::codec::{escape, split_line};
use crate::roster::student::Student;
use crate::roster::util::{format_grade, mean};

/// The in-memory roster. Students stay in insertion order; listings that
/// want name order sort at the point of display.
#[derive(Debug, Default)]
pub struct Gradebook {
    students: Vec<Student>,
}

impl Gradebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    pub fn total_grades(&self) -> usize {
        self.students.iter().map(|s| s.grades.len()).sum()
    }

    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Case-insensitive lookup, ASCII folding rather than locale collation.
    pub fn find(&self, name: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Mean over every grade of every student. 0.0 when nobody has grades,
    /// unlike the per-student average which is absent when empty.
    pub fn global_average(&self) -> f64 {
        let all: Vec<f64> = self
            .students
            .iter()
            .flat_map(|s| s.grades.iter().copied())
            .collect();
        mean(&all)
    }

    /// The single highest grade anywhere, paired with its owner's name.
    /// Ties go to the first holder in insertion order. `None` when no
    /// grades exist; callers gate on [`Self::total_grades`].
    pub fn highest_grade(&self) -> Option<(f64, &str)> {
        self.extremum(|candidate, best| candidate > best)
    }

    /// The single lowest grade anywhere, paired with its owner's name.
    /// Ties go to the first holder in insertion order.
    pub fn lowest_grade(&self) -> Option<(f64, &str)> {
        self.extremum(|candidate, best| candidate < best)
    }

    fn extremum(&self, replaces: impl Fn(f64, f64) -> bool) -> Option<(f64, &str)> {
        let mut result: Option<(f64, &str)> = None;
        for student in &self.students {
            for &grade in &student.grades {
                let replace = match result {
                    None => true,
                    Some((best, _)) => replaces(grade, best),
                };
                if replace {
                    result = Some((grade, &student.name));
                }
            }
        }
        result
    }

    /// Writes the roster as `Name,Grades` rows in insertion order, grades
    /// pipe-joined in the fixed numeric format. Truncates any existing file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("opening {} for writing", path.display()))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "Name,Grades")?;
        for student in &self.students {
            let grades = student
                .grades
                .iter()
                .map(|g| format_grade(*g))
                .collect::<Vec<_>>()
                .join("|");
            writeln!(writer, "{},{}", escape(&student.name), escape(&grades))?;
        }
        writer.flush()?;

        info!(path = %path.display(), students = self.count(), "Roster saved");
        Ok(())
    }

    /// Replaces the whole roster with the contents of `path`.
    ///
    /// The first line is always skipped as a header. Blank lines and rows
    /// with fewer than two fields are skipped, and grade tokens that fail
    /// to parse are dropped, all without erroring. No duplicate-name check
    /// happens here; uniqueness is an interactive-add concern.
    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("opening {} for reading", path.display()))?;
        let reader = BufReader::new(file);

        self.students.clear();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if index == 0 {
                continue; // header
            }
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_line(&line);
            if fields.len() < 2 {
                debug!(row = index + 1, "Skipping short row");
                continue;
            }

            let mut student = Student::new(fields[0].trim());
            for token in fields[1].trim().split('|').map(str::trim) {
                if token.is_empty() {
                    continue;
                }
                match token.parse::<f64>() {
                    Ok(grade) => student.grades.push(grade),
                    Err(_) => debug!(row = index + 1, token, "Skipping unparsable grade"),
                }
            }
            self.students.push(student);
        }

        info!(path = %path.display(), students = self.count(), "Roster loaded");
        Ok(())
    }
}
