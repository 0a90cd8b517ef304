//! Command-line surface.
//!
//! Every argument is payload. There are no flags, so `-h` reaches the
//! sanitizer like any other value, and arguments are kept as raw OS
//! strings so encoding problems are reported as input errors.

use std::ffi::OsString;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "app-bootstrap")]
#[command(about = "Validate the environment and a JSON payload, then run", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// JSON payload; only the first value is used
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub input: Vec<OsString>,
}
