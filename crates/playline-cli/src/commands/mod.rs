pub mod compile;
pub mod create_project;
pub mod dump_code;
pub mod run_common;
