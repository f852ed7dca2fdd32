pub mod codec;
pub mod report;
pub mod roster;
pub mod shell;
