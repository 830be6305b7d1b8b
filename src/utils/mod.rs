//! Small helpers shared by the reports

pub mod string;
