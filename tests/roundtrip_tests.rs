use gradebook::report::export_summary_csv;
use gradebook::roster::{Gradebook, Student};

fn student(name: &str, grades: &[f64]) -> Student {
    let mut s = Student::new(name);
    for &g in grades {
        s.add_grade(g);
    }
    s
}

#[test]
fn save_load_round_trip_preserves_names_and_grades() {
    let mut gb = Gradebook::new();
    gb.add_student(student("Alice", &[90.0, 85.5, 100.0]));
    gb.add_student(student("Doe, Jane", &[66.67]));
    gb.add_student(student("She said \"hi\"", &[0.0, 100.0]));
    gb.add_student(student("Gradeless", &[]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradebook.csv");
    gb.save_csv(&path).unwrap();

    let mut reloaded = Gradebook::new();
    reloaded.load_csv(&path).unwrap();

    assert_eq!(reloaded.count(), gb.count());
    for (before, after) in gb.students().iter().zip(reloaded.students()) {
        assert_eq!(after.name, before.name);
        assert_eq!(after.grades, before.grades);
    }
}

#[test]
fn export_reflects_loaded_roster() {
    let dir = tempfile::tempdir().unwrap();
    let roster = dir.path().join("gradebook.csv");
    let summary = dir.path().join("summary.csv");

    let mut gb = Gradebook::new();
    gb.add_student(student("Bob", &[70.0]));
    gb.add_student(student("Alice", &[90.0, 85.5, 100.0]));
    gb.save_csv(&roster).unwrap();

    let mut reloaded = Gradebook::new();
    reloaded.load_csv(&roster).unwrap();
    export_summary_csv(&reloaded, &summary).unwrap();

    let content = std::fs::read_to_string(&summary).unwrap();
    let expected = "Name,Count,Average,Highest,Lowest\n\
        Alice,3,91.83,100,85.5\n\
        Bob,1,70,70,70\n\
        \n\
        GLOBAL (all grades),4,86.38,100 by Alice,70 by Bob\n";
    assert_eq!(content, expected);
}
