//! The in-memory roster: student records, the gradebook collection, and
//! the statistics derived from them.

pub mod gradebook;
pub mod student;
pub mod util;

pub use gradebook::Gradebook;
pub use student::Student;
