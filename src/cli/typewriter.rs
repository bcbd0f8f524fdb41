//! Hero phrases animated in the terminal.

use std::io::{self, Write};

use showcase::typewriter::{cycle_duration, drive};
use showcase::{ShowcaseError, TimerSlot, TypewriterCommand, TypewriterDisplay, TypewriterEngine};
use tokio::sync::mpsc;

use super::session::Session;

/// Rewrites the current terminal line on every frame.
pub struct TerminalDisplay<W: Write> {
    writer: W,
    error: Option<String>,
}

impl<W: Write> TerminalDisplay<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Ends the line and returns the writer, or the first write failure.
    pub fn finish(mut self) -> Result<W, ShowcaseError> {
        if let Some(message) = self.error {
            return Err(ShowcaseError::Io { message });
        }
        writeln!(self.writer)
            .and_then(|()| self.writer.flush())
            .map_err(|error| ShowcaseError::Io {
                message: error.to_string(),
            })?;
        Ok(self.writer)
    }
}

impl<W: Write> TypewriterDisplay for TerminalDisplay<W> {
    fn show(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        let written = write!(self.writer, "\r\x1b[2K{text}").and_then(|()| self.writer.flush());
        if let Err(error) = written {
            self.error = Some(error.to_string());
        }
    }
}

/// Animates the session's phrases for one full cycle on stdout.
///
/// # Errors
///
/// Returns [`ShowcaseError::Translation`] when there are no phrases to
/// animate and [`ShowcaseError::Io`] if the terminal cannot be written.
pub async fn run(session: &Session) -> Result<(), ShowcaseError> {
    let phrases = session.typing_phrases();
    if phrases.is_empty() {
        return Err(ShowcaseError::Translation {
            message: format!("no typing phrases available for '{}'", session.language),
        });
    }
    animate(phrases, io::stdout()).await.map(drop)
}

/// Plays one uninterrupted cycle of `phrases` into `writer`.
pub async fn animate<W: Write>(phrases: Vec<String>, writer: W) -> Result<W, ShowcaseError> {
    let duration = cycle_duration(&phrases);
    let mut engine = TypewriterEngine::new(TimerSlot::new(), TerminalDisplay::new(writer));
    let (sender, mut receiver) = mpsc::channel(2);

    sender
        .send(TypewriterCommand::Restart(phrases))
        .await
        .map_err(|error| ShowcaseError::Io {
            message: format!("typewriter channel closed: {error}"),
        })?;
    let stopper = tokio::spawn(async move {
        tokio::time::sleep(duration).await;
        if sender.send(TypewriterCommand::Stop).await.is_err() {
            tracing::debug!("typewriter already stopped");
        }
    });

    drive(&mut engine, &mut receiver).await;
    stopper.await.map_err(|error| ShowcaseError::Io {
        message: format!("typewriter timer failed: {error}"),
    })?;

    engine.into_display().finish()
}
