// SPDX-License-Identifier: MPL-2.0
//! Application wiring: configuration, localization, and the tilt loop.
//!
//! The binary builds an [`App`] from parsed [`Flags`] and hands it the
//! process's stdin/stdout and a [`SystemViewer`](crate::viewer::SystemViewer).
//! Tests drive the same entry point with in-memory streams.

pub mod paths;

use crate::config::{self, Config};
use crate::domain::tilt::TiltAngle;
use crate::error::Result;
use crate::i18n::I18n;
use crate::media::{self, Resampling};
use crate::tilt::TiltSession;
use crate::viewer::Viewer;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Command-line options.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub lang: Option<String>,
    pub config_dir: Option<PathBuf>,
}

pub struct App {
    resampling: Resampling,
    i18n: I18n,
}

impl App {
    /// Loads settings and selects the UI language.
    ///
    /// An unreadable or invalid settings file is not fatal; defaults are used
    /// instead and a warning is logged.
    pub fn new(flags: Flags) -> Self {
        let config = config::load(flags.config_dir.as_deref()).unwrap_or_else(|err| {
            log::warn!("using default settings: {err}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);
        Self {
            resampling: config.resampling(),
            i18n,
        }
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Loads `image_path` and runs the interactive loop over it.
    ///
    /// Fails before anything is written to `output` if the image cannot be
    /// loaded.
    pub fn tilt<R, W, V>(&self, image_path: &Path, input: R, output: W, viewer: V) -> Result<TiltAngle>
    where
        R: BufRead,
        W: Write,
        V: Viewer,
    {
        let source = media::load_image(image_path)?;
        let mut session = TiltSession::new(source, viewer).with_resampling(self.resampling);
        session.run(input, output, &self.i18n)
    }
}
