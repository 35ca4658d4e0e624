//! Output emission for a compilation result.
//!
//! Two shapes are supported:
//! - [`write_report`]: a JSON document of program, line texts and
//!   diagnostics, written to any stream
//! - [`emit_module`]: a `.yarnc.lua` file that registers the program and its
//!   projected lines under `Playline.Compiled`

pub mod lua;
pub mod module;
pub mod report;

#[cfg(test)]
mod report_tests;

pub use lua::LuaWriter;
pub use module::{
    DEFAULT_OUTPUT_NAME, ModuleArtifact, ModuleOptions, emit_module, output_name, render_module,
    string_table_name,
};
pub use report::write_report;
