//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{AddArgs, Cli, Commands, EditArgs, ListArgs};
pub use output::{
    format_breed_list, format_cat_detail, format_cat_list, format_dashboard, format_status_list,
};
