use std::process::ExitCode;

use hotseat_chess::shell::{self, ShellOptions};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    match shell::run_stdio(ShellOptions::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("shell stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
