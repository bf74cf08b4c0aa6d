// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::config::DEFAULT_MANIFEST_FILE;
use iced_reel::app::{self, Flags};
use std::process::ExitCode;

const USAGE: &str = "Usage: iced_reel [--lang <LOCALE>] [--config-dir <DIR>] [MANIFEST]";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let manifest_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok())
        .unwrap_or_else(|| DEFAULT_MANIFEST_FILE.to_string());

    Ok(Flags {
        lang,
        manifest_path: Some(manifest_path),
        config_dir,
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Application error: {}", err);
            ExitCode::FAILURE
        }
    }
}
