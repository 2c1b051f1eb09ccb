//! Output rendering (validation reports)

pub mod report;

pub use report::{render_failure, render_success, FAILURE_HEADER, SUCCESS_HEADER};
