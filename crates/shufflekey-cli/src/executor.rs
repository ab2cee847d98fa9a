//! Terminal action executor.
//!
//! Feeds events to a [`Keyboard`] and carries out the returned actions:
//! arrangements and input text are written to the terminal, feedback and
//! styling are logged. The terminal cannot animate, so an animated shuffle is
//! acknowledged with `ShuffleApplied` as soon as it has been drawn.

use std::io::Write;

use shufflekey_core::{Environment, KeySequence, Keyboard, KeyboardAction, KeyboardEvent};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::HostError;

/// Render keys as rows of bracketed labels.
///
/// ```text
/// [7] [8] [9]
/// [4] [5] [6]
/// ```
pub fn render_grid(keys: &KeySequence, columns: usize) -> String {
    keys.rows(columns)
        .map(|row| row.iter().map(|key| format!("[{}]", key.value)).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keyboard session bound to a terminal writer.
pub struct Session<E: Environment, W: Write> {
    keyboard: Keyboard<E>,
    out: W,
}

impl<E: Environment, W: Write> Session<E, W> {
    /// Create a session. Nothing is drawn until [`Session::start`].
    pub fn new(keyboard: Keyboard<E>, out: W) -> Self {
        Self { keyboard, out }
    }

    /// The driven keyboard.
    pub fn keyboard(&self) -> &Keyboard<E> {
        &self.keyboard
    }

    /// Consume the session, returning the writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Draw the initial arrangement and theme.
    pub fn start(&mut self) -> Result<(), HostError> {
        let theme = self.keyboard.theme();
        tracing::info!(theme = theme.name, primary = %theme.primary.to_hex(), "session started");
        self.draw_keys(&self.keyboard.keys().clone())
    }

    /// Send one event and execute its actions.
    ///
    /// Non-fatal keyboard errors are logged and swallowed.
    pub fn send(&mut self, event: KeyboardEvent) -> Result<(), HostError> {
        let actions = match self.keyboard.handle(event) {
            Ok(actions) => actions,
            Err(e) if !e.is_fatal() => {
                tracing::warn!("event ignored: {}", e);
                return Ok(());
            },
            Err(e) => return Err(e.into()),
        };

        let animated = self.execute(actions)?;
        if animated {
            self.send(KeyboardEvent::ShuffleApplied)?;
        }
        Ok(())
    }

    /// Type `text` by pressing, for each character, the key currently
    /// carrying that label.
    pub fn type_text(&mut self, text: &str) -> Result<(), HostError> {
        for grapheme in text.graphemes(true) {
            let id = self
                .keyboard
                .keys()
                .iter()
                .find(|key| key.value == grapheme)
                .map(|key| key.id)
                .ok_or_else(|| HostError::UnknownLabel { label: grapheme.to_owned() })?;

            self.send(KeyboardEvent::PressKey { id })?;
        }
        Ok(())
    }

    /// Execute actions in order. Returns whether a shuffle awaits its
    /// animation.
    fn execute(&mut self, actions: Vec<KeyboardAction>) -> Result<bool, HostError> {
        let mut animated = false;

        for action in actions {
            match action {
                KeyboardAction::KeysChanged { keys, animate } => {
                    tracing::debug!(animate, "keys changed");
                    self.draw_keys(&keys)?;
                    animated |= animate;
                },
                KeyboardAction::DisplayChanged { text } => {
                    writeln!(self.out, "> {text}")?;
                },
                KeyboardAction::Haptic(style) => tracing::debug!(?style, "haptic"),
                KeyboardAction::PlaySound(sound) => tracing::debug!(sound = sound.0, "sound"),
                KeyboardAction::ThemeChanged(theme) => {
                    tracing::info!(theme = theme.name, primary = %theme.primary.to_hex(), "theme changed");
                },
                KeyboardAction::TapAreaChanged { size } => {
                    tracing::info!(size, "tap area changed");
                },
                KeyboardAction::Submitted { text } => {
                    writeln!(self.out, "submitted: {text}")?;
                },
            }
        }

        Ok(animated)
    }

    fn draw_keys(&mut self, keys: &KeySequence) -> Result<(), HostError> {
        let grid = render_grid(keys, self.keyboard.config().layout.columns());
        writeln!(self.out, "{grid}\n")?;
        Ok(())
    }
}
