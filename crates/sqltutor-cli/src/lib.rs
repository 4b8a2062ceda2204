//! Library surface of the sqltutor CLI: result loading, logging setup, and
//! terminal rendering. The binary wires these to the clap commands.

pub mod loader;
pub mod logging;
pub mod render;
