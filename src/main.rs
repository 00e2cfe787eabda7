//! Example call sites for the unittest crate.

mod tests;

#[macro_use]
extern crate log;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use unittest::ColorChoice;

#[derive(Parser)]
#[command(about = "Runs the unittest example cases")]
struct Args {
    /// When to colour the pass/fail markers
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    color: Color,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorChoice {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => ColorChoice::Auto,
            Color::Always => ColorChoice::Always,
            Color::Never => ColorChoice::Never,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    if let Err(e) = tests::demo_tests(args.color.into()) {
        error!("{:#}", e);
        return ExitCode::FAILURE;
    }

    unittest::exit_code()
}
