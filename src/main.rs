// SPDX-License-Identifier: MPL-2.0
use lowuder::app::{self, paths, Flags};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
Lowuder landing page

USAGE:
  lowuder [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
  --lang <TAG>            Display language for this session (en, es, id)
  --i18n-dir <DIR>        Directory with <tag>.json dictionaries to use instead of the built-in ones
  --data-dir <DIR>        Directory for persisted state (overrides LOWUDER_DATA_DIR)
  --config-dir <DIR>      Directory for settings.toml (overrides LOWUDER_CONFIG_DIR)
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
