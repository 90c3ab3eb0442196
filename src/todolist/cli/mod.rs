mod commands;
mod print;
mod setup;

pub use commands::{report_error, run};
