// SPDX-License-Identifier: MPL-2.0
use timelapse_trigger::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: parse_optional(&mut args, "--lang"),
        route: parse_optional(&mut args, "--route"),
        config_dir: parse_optional(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn parse_optional(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, key, "ignoring malformed argument");
            None
        }
    }
}
