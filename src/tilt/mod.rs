// SPDX-License-Identifier: MPL-2.0
//! Interactive tilt loop.
//!
//! A [`TiltSession`] owns the decoded source image and the cumulative angle.
//! Each accepted answer advances the angle by a fixed step and shows a fresh
//! rotation of the *original* image, never a rotation of a previous result.
//!
//! ```text
//!        "yes" (angle += step, show)
//!        ┌──────────────┐
//!        │              ▼
//!   ┌─────────────────────┐   "no"   ┌────────────┐
//!   │   AwaitingInput     │─────────▶│ Terminated │
//!   └─────────────────────┘          └────────────┘
//!        ▲              │
//!        └──────────────┘
//!        anything else (warn only)
//! ```

use crate::config::{EXPAND_CANVAS, TILT_STEP_DEGREES};
use crate::domain::tilt::{Answer, TiltAngle};
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::media::{self, Resampling};
use crate::viewer::Viewer;
use image_rs::DynamicImage;
use std::io::{BufRead, Write};

/// Result of applying one answer to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The angle advanced. `display_error` is set when the viewer failed;
    /// the tilt itself still counts.
    Tilted {
        angle: TiltAngle,
        display_error: Option<Error>,
    },
    /// The user declined; the loop is over.
    Stopped,
    /// Unrecognized input; nothing changed.
    Rejected,
}

pub struct TiltSession<V: Viewer> {
    source: DynamicImage,
    angle: TiltAngle,
    step: u32,
    resampling: Resampling,
    viewer: V,
}

impl<V: Viewer> TiltSession<V> {
    pub fn new(source: DynamicImage, viewer: V) -> Self {
        Self {
            source,
            angle: TiltAngle::ZERO,
            step: TILT_STEP_DEGREES,
            resampling: Resampling::default(),
            viewer,
        }
    }

    #[must_use]
    pub fn with_resampling(mut self, resampling: Resampling) -> Self {
        self.resampling = resampling;
        self
    }

    pub fn angle(&self) -> TiltAngle {
        self.angle
    }

    pub fn source(&self) -> &DynamicImage {
        &self.source
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn into_viewer(self) -> V {
        self.viewer
    }

    /// The source image rotated to the current angle.
    pub fn tilted_image(&self) -> DynamicImage {
        media::rotate(
            &self.source,
            f64::from(self.angle.degrees()),
            EXPAND_CANVAS,
            self.resampling,
        )
    }

    /// Applies one transition of the loop's state machine.
    pub fn respond(&mut self, answer: Answer) -> Outcome {
        match answer {
            Answer::Yes => {
                self.angle = self.angle.advance(self.step);
                let tilted = self.tilted_image();
                let display_error = self.viewer.show(&tilted).err();
                Outcome::Tilted {
                    angle: self.angle,
                    display_error,
                }
            }
            Answer::No => Outcome::Stopped,
            Answer::Invalid => Outcome::Rejected,
        }
    }

    /// Runs the prompt loop until the user answers `no` or input ends.
    ///
    /// Returns the final angle. I/O failures on `input` or `output` abort the
    /// loop; viewer failures are only logged.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        i18n: &I18n,
    ) -> Result<TiltAngle> {
        let mut line = String::new();
        loop {
            write!(output, "{}", i18n.tr("tilt-prompt"))?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // Keep the shell prompt off the dangling question.
                writeln!(output)?;
                log::debug!("input closed at {}°", self.angle.degrees());
                return Ok(self.angle);
            }

            match self.respond(Answer::parse(&line)) {
                Outcome::Tilted {
                    angle,
                    display_error,
                } => {
                    if let Some(err) = display_error {
                        let reason = err.to_string();
                        log::warn!(
                            "{}",
                            i18n.tr_with_args("tilt-display-failed", &[("error", reason.as_str())])
                        );
                    }
                    let degrees = angle.degrees().to_string();
                    writeln!(
                        output,
                        "{}",
                        i18n.tr_with_args("tilt-applied", &[("angle", degrees.as_str())])
                    )?;
                }
                Outcome::Stopped => {
                    writeln!(output, "{}", i18n.tr("tilt-stopped"))?;
                    return Ok(self.angle);
                }
                Outcome::Rejected => {
                    log::debug!("rejected input {:?}", line.trim_end());
                    writeln!(output, "{}", i18n.tr("tilt-invalid-input"))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::gradient_rgb;
    use image_rs::GenericImageView;
    use std::io::Cursor;

    #[derive(Default)]
    struct RecordingViewer {
        shown: Vec<DynamicImage>,
    }

    impl Viewer for RecordingViewer {
        fn show(&mut self, image: &DynamicImage) -> Result<()> {
            self.shown.push(image.clone());
            Ok(())
        }
    }

    struct FailingViewer;

    impl Viewer for FailingViewer {
        fn show(&mut self, _image: &DynamicImage) -> Result<()> {
            Err(Error::Display("no viewer available".into()))
        }
    }

    fn session() -> TiltSession<RecordingViewer> {
        TiltSession::new(gradient_rgb(40, 20), RecordingViewer::default())
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn yes_advances_by_step_and_shows_image() {
        let mut session = session();
        let outcome = session.respond(Answer::Yes);
        assert_eq!(
            outcome,
            Outcome::Tilted {
                angle: TiltAngle::new(30),
                display_error: None
            }
        );
        assert_eq!(session.viewer().shown.len(), 1);
    }

    #[test]
    fn k_yes_answers_reach_thirty_times_k() {
        let mut session = session();
        for k in 1..=14_u32 {
            session.respond(Answer::Yes);
            assert_eq!(session.angle().degrees(), 30 * k);
        }
    }

    #[test]
    fn no_stops_without_changing_angle() {
        let mut session = session();
        session.respond(Answer::Yes);
        assert_eq!(session.respond(Answer::No), Outcome::Stopped);
        assert_eq!(session.angle().degrees(), 30);
        assert_eq!(session.viewer().shown.len(), 1);
    }

    #[test]
    fn invalid_answer_changes_nothing() {
        let mut session = session();
        assert_eq!(session.respond(Answer::Invalid), Outcome::Rejected);
        assert_eq!(session.angle(), TiltAngle::ZERO);
        assert!(session.viewer().shown.is_empty());
    }

    #[test]
    fn each_tilt_rotates_the_original() {
        let mut session = session();
        session.respond(Answer::Yes);
        session.respond(Answer::Yes);

        let original = session.source().clone();
        let viewer = session.into_viewer();
        let expected = media::rotate(&original, 60.0, true, Resampling::Nearest);
        let compounded = media::rotate(
            &media::rotate(&original, 30.0, true, Resampling::Nearest),
            30.0,
            true,
            Resampling::Nearest,
        );

        assert_eq!(viewer.shown[1].to_rgb8(), expected.to_rgb8());
        assert_ne!(viewer.shown[1].dimensions(), compounded.dimensions());
    }

    #[test]
    fn source_is_untouched_by_tilting() {
        let mut session = session();
        let before = session.source().to_rgb8();
        session.respond(Answer::Yes);
        session.respond(Answer::Yes);
        assert_eq!(session.source().to_rgb8(), before);
    }

    #[test]
    fn viewer_failure_still_counts_the_tilt() {
        let mut session = TiltSession::new(gradient_rgb(8, 8), FailingViewer);
        match session.respond(Answer::Yes) {
            Outcome::Tilted {
                angle,
                display_error,
            } => {
                assert_eq!(angle.degrees(), 30);
                assert!(matches!(display_error, Some(Error::Display(_))));
            }
            other => panic!("expected Tilted, got {other:?}"),
        }
    }

    #[test]
    fn run_writes_prompt_and_messages() {
        let mut session = session();
        let mut output = Vec::new();
        let angle = session
            .run(Cursor::new("yes\nno\n"), &mut output, &english())
            .expect("run should succeed");

        assert_eq!(angle.degrees(), 30);
        let text = String::from_utf8(output).expect("utf8 output");
        assert_eq!(
            text,
            "Do you want to tilt the image? (yes/no): Image tilted to 30°\n\
             Do you want to tilt the image? (yes/no): Stopping tilt operation.\n"
        );
    }

    #[test]
    fn run_stops_at_end_of_input() {
        let mut session = session();
        let mut output = Vec::new();
        let angle = session
            .run(Cursor::new("yes\n"), &mut output, &english())
            .expect("run should succeed");

        assert_eq!(angle.degrees(), 30);
        let text = String::from_utf8(output).expect("utf8 output");
        assert!(!text.contains("Stopping tilt operation."));
        assert!(text.ends_with("(yes/no): \n"));
    }

    #[test]
    fn run_with_failing_viewer_keeps_going() {
        let mut session = TiltSession::new(gradient_rgb(8, 8), FailingViewer);
        let mut output = Vec::new();
        let angle = session
            .run(Cursor::new("yes\nyes\nno\n"), &mut output, &english())
            .expect("run should succeed");
        assert_eq!(angle.degrees(), 60);
    }
}
