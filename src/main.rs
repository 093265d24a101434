// SPDX-License-Identifier: MPL-2.0
use image_tilt::app::{App, Flags};
use image_tilt::config::{DEFAULT_IMAGE_PATH, DEFAULT_LOG_FILTER};
use image_tilt::viewer::SystemViewer;
use std::io;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let mut args = pico_args::Arguments::from_env();
    let show_help = args.contains(["-h", "--help"]);

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let leftover = args.finish();
    if !leftover.is_empty() {
        log::warn!("ignoring unexpected arguments: {leftover:?}");
    }

    let app = App::new(flags);
    if show_help {
        println!("{}", app.i18n().tr("help-usage"));
        return ExitCode::SUCCESS;
    }

    let stdin = io::stdin();
    match app.tilt(
        Path::new(DEFAULT_IMAGE_PATH),
        stdin.lock(),
        io::stdout(),
        SystemViewer::new(),
    ) {
        Ok(angle) => {
            log::info!("finished at {}°", angle.degrees());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "{}",
                app.i18n()
                    .tr_with_args("error-fatal", &[("error", err.to_string().as_str())])
            );
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
