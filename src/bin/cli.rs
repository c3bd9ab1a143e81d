use std::io;
use std::process::ExitCode;

use week_scheduler::{Console, SchedulerConfig, logging};

fn main() -> ExitCode {
    logging::init(&SchedulerConfig::log_filter_from_env());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new();
    match console.run(stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("console error: {err}");
            ExitCode::FAILURE
        }
    }
}
