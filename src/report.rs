//! Summary export: a derived, read-only report distinct from the roster
//! persistence file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::codec::escape;
use crate::roster::Gradebook;
use crate::roster::util::format_grade;

/// Writes the per-student summary plus a GLOBAL footer row.
///
/// Students are ordered by name, case-insensitively; absent per-student
/// statistics render as empty columns. The blank separator line and the
/// GLOBAL row appear only when at least one grade exists anywhere.
pub fn export_summary_csv(gradebook: &Gradebook, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("opening {} for writing", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Name,Count,Average,Highest,Lowest")?;

    let mut students: Vec<_> = gradebook.students().iter().collect();
    students.sort_by_key(|s| s.name.to_ascii_lowercase());

    for student in students {
        let column = |value: Option<f64>| value.map(format_grade).unwrap_or_default();
        writeln!(
            writer,
            "{},{},{},{},{}",
            escape(&student.name),
            student.grades.len(),
            column(student.average()),
            column(student.highest()),
            column(student.lowest()),
        )?;
    }

    if let (Some((hi, hi_name)), Some((lo, lo_name))) =
        (gradebook.highest_grade(), gradebook.lowest_grade())
    {
        writeln!(writer)?;
        writeln!(
            writer,
            "GLOBAL (all grades),{},{},{} by {},{} by {}",
            gradebook.total_grades(),
            format_grade(gradebook.global_average()),
            format_grade(hi),
            escape(hi_name),
            format_grade(lo),
            escape(lo_name),
        )?;
    }

    writer.flush()?;
    info!(path = %path.display(), students = gradebook.count(), "Summary exported");
    Ok(())
}
