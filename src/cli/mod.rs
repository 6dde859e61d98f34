pub mod args;
pub mod display;
pub mod runner;

pub use args::{get_log_level_from_verbose, parse_cli, Cli, Commands, GlobalArgs, NewArgs};
pub use runner::run;
