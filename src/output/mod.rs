//! Summary report rendering and destination handling.

pub mod report;
pub mod writer;

pub use report::write_summary;
pub use writer::setup_summary_writer;
