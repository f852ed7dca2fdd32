//! The interactive menu loop.
//!
//! Reads commands from any [`BufRead`] and writes to any [`Write`], so
//! tests can drive a full session with in-memory buffers instead of a
//! terminal. Input validation lives here, at the boundary: the roster
//! itself accepts whatever it is handed.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::report::export_summary_csv;
use crate::roster::util::format_grade;
use crate::roster::{Gradebook, Student};

/// Runs the menu loop until the user exits or input reaches EOF.
///
/// User-input problems are reported as one-line warnings and the loop
/// continues; I/O failures on save/load/export propagate out and end the
/// session.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    gradebook: &mut Gradebook,
    roster_path: &Path,
    summary_path: &Path,
) -> Result<()> {
    loop {
        print_menu(&mut output)?;
        let Some(choice) = read_line(&mut input)? else {
            return Ok(());
        };
        writeln!(output)?;

        match choice.trim() {
            "1" => add_student(&mut input, &mut output, gradebook)?,
            "2" => add_grade(&mut input, &mut output, gradebook)?,
            "3" => list_students(&mut output, gradebook)?,
            "4" => show_stats(&mut output, gradebook)?,
            "5" => {
                gradebook.save_csv(roster_path)?;
                writeln!(output, "Saved: {}", roster_path.display())?;
            }
            "6" => {
                if roster_path.exists() {
                    gradebook.load_csv(roster_path)?;
                    writeln!(output, "Loaded: {}", roster_path.display())?;
                } else {
                    writeln!(output, "Warning: {} not found.", roster_path.display())?;
                }
            }
            "7" => {
                export_summary_csv(gradebook, summary_path)?;
                writeln!(output, "Summary exported: {}", summary_path.display())?;
            }
            "0" => return Ok(()),
            _ => writeln!(output, "Invalid option.")?,
        }
    }
}

fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Student Gradebook")?;
    writeln!(output, "1) Add student")?;
    writeln!(output, "2) Add grade to student")?;
    writeln!(output, "3) List students & grades")?;
    writeln!(output, "4) Show statistics (avg / high / low)")?;
    writeln!(output, "5) Save to CSV")?;
    writeln!(output, "6) Load from CSV")?;
    writeln!(output, "7) Export summary CSV")?;
    writeln!(output, "0) Exit")?;
    write!(output, "Choose: ")?;
    output.flush()?;
    Ok(())
}

/// Reads one line, stripping the trailing newline. `None` means EOF.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn add_student<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    gradebook: &mut Gradebook,
) -> Result<()> {
    write!(output, "Enter student name: ")?;
    output.flush()?;
    let name = read_line(input)?.unwrap_or_default();
    let name = name.trim();

    if name.is_empty() {
        writeln!(output, "Warning: name cannot be empty.")?;
        return Ok(());
    }
    if gradebook.find(name).is_some() {
        writeln!(output, "Warning: student already exists.")?;
        return Ok(());
    }

    gradebook.add_student(Student::new(name));
    writeln!(output, "Added student: {name}")?;
    Ok(())
}

fn add_grade<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    gradebook: &mut Gradebook,
) -> Result<()> {
    if gradebook.count() == 0 {
        writeln!(output, "No students yet. Add a student first.")?;
        return Ok(());
    }

    write!(output, "Student name: ")?;
    output.flush()?;
    let name = read_line(input)?.unwrap_or_default();
    let Some(student) = gradebook.find_mut(name.trim()) else {
        writeln!(output, "Warning: student not found.")?;
        return Ok(());
    };

    write!(output, "Enter grade (0-100): ")?;
    output.flush()?;
    let raw = read_line(input)?.unwrap_or_default();
    match raw.trim().parse::<f64>() {
        Ok(grade) if (0.0..=100.0).contains(&grade) => {
            student.add_grade(grade);
            writeln!(
                output,
                "Added grade {} to {}",
                format_grade(grade),
                student.name
            )?;
        }
        _ => writeln!(output, "Warning: invalid grade.")?,
    }
    Ok(())
}

fn list_students<W: Write>(output: &mut W, gradebook: &Gradebook) -> Result<()> {
    if gradebook.count() == 0 {
        writeln!(output, "No students yet.")?;
        return Ok(());
    }

    let mut students: Vec<_> = gradebook.students().iter().collect();
    students.sort_by_key(|s| s.name.to_ascii_lowercase());

    for student in students {
        let grades = if student.grades.is_empty() {
            "-".to_string()
        } else {
            student
                .grades
                .iter()
                .map(|g| format_grade(*g))
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(output, "{}  |  Grades: {}", student.name, grades)?;
    }
    Ok(())
}

fn show_stats<W: Write>(output: &mut W, gradebook: &Gradebook) -> Result<()> {
    if gradebook.total_grades() == 0 {
        writeln!(output, "No grades yet.")?;
        return Ok(());
    }

    writeln!(
        output,
        "Average (all grades): {}",
        format_grade(gradebook.global_average())
    )?;
    if let Some((grade, name)) = gradebook.highest_grade() {
        writeln!(output, "Highest: {}  (by {})", format_grade(grade), name)?;
    }
    if let Some((grade, name)) = gradebook.lowest_grade() {
        writeln!(output, "Lowest : {}  (by {})", format_grade(grade), name)?;
    }
    Ok(())
}
