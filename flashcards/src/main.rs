// src/main.rs
use clap::Parser as _;
use flashcards::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match flashcards::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
