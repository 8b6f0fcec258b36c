// SPDX-License-Identifier: MPL-2.0
use iced_menorah::app::{self, Flags};
use iced_menorah::domain::menorah::Day;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const HELP: &str = "\
Interactive Hanukkah menorah

USAGE:
  iced_menorah [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
      --lang <TAG>        Display language (en-US, ru, az, he)
      --day <1-8>         Night shown at startup
      --config-dir <DIR>  Directory holding settings.toml
      --i18n-dir <DIR>    Directory with .ftl files overriding the built-in ones
  -v, --verbose           Log debug output

ENVIRONMENT:
  GEMINI_API_KEY / API_KEY  Credential for the daily insight service
  MENORAH_CONFIG_DIR        Same as --config-dir
  LOG_LEVEL                 trace, debug, info, warn or error
";

fn log_level(verbose: bool) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(verbose))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let raw_day: Option<String> = args.opt_value_from_str("--day")?;
    let i18n_dir: Option<String> = args.opt_value_from_str("--i18n-dir")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    let day = raw_day.and_then(|raw| match raw.parse::<Day>() {
        Ok(day) => Some(day),
        Err(error) => {
            tracing::warn!(%error, "ignoring --day");
            None
        }
    });

    let flags = Flags {
        lang,
        day,
        i18n_dir,
        config_dir,
    };

    app::run(flags)?;
    Ok(())
}
