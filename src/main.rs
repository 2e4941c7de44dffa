// SPDX-License-Identifier: MPL-2.0
use pulse_viewer::app::{self, Flags};
use pulse_viewer::config::paths;
use pulse_viewer::logging;

const HELP: &str = "\
pulse_viewer

USAGE:
  pulse_viewer [OPTIONS] <FEED>

ARGS:
  <FEED>                 TOML feed file to open

OPTIONS:
  --lang <ID>            Interface language (e.g. en-US, fr, pt-BR)
  --as <USER>            Viewer identity, overrides [identity] viewer_id
  --index <N>            Open the viewer at this position (0-based)
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        viewer_id: args.opt_value_from_str("--as")?,
        index: args.opt_value_from_str("--index")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        feed_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::debug!(?flags, "starting");

    app::run(flags)
}
