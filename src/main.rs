// SPDX-License-Identifier: MPL-2.0
use ledger_lens::app::{self, paths, Flags};
use ledger_lens::logging::{self, LogConfig};

const HELP: &str = "\
Ledger Lens

USAGE:
  ledger_lens [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --api-url <URL>        Base URL of the accounts service
  --route <ROUTE>        Initial screen: accounts | about
  --log <FILTER>         Log filter (overrides RUST_LOG)
  -h, --help             Print this help
";

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("ignoring {key}: {err}");
            None
        }
    }
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_filter = opt_string(&mut args, "--log");
    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        config_dir: opt_string(&mut args, "--config-dir"),
        api_url: opt_string(&mut args, "--api-url"),
        route: opt_string(&mut args, "--route"),
    };

    if let Err(err) = logging::init_logging(LogConfig::with_filter(log_filter)) {
        eprintln!("{err}; falling back to the default log filter");
        let _ = logging::init_logging(LogConfig::default());
    }

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
