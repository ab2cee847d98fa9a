//! ShuffleKey terminal binary.
//!
//! # Usage
//!
//! ```bash
//! # Shuffle the keypad three times, then type a PIN in password mode
//! shufflekey --shuffles 3 --password --type 2468
//!
//! # Custom labels on a 4-column grid
//! shufflekey --custom A,B,C,D,E,F,G,H --layout grid4x4 --min-change 0.5
//! ```

use std::io;

use clap::{Parser, ValueEnum};
use shufflekey_cli::{Session, SystemEnv};
use shufflekey_core::{CharacterSet, InputMode, Keyboard, KeyboardConfig, KeyboardEvent, LayoutMode};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Built-in label sets.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Charset {
    /// Phone-style keypad digits
    Numbers,
    /// A to Z
    Letters,
    /// Common punctuation
    Symbols,
}

/// Grid layouts.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Layout {
    /// Three columns
    #[value(name = "grid3x3")]
    Grid3x3,
    /// Four columns
    #[value(name = "grid4x4")]
    Grid4x4,
    /// Five columns
    #[value(name = "grid5x5")]
    Grid5x5,
}

/// ShuffleKey keyboard
#[derive(Parser, Debug)]
#[command(name = "shufflekey")]
#[command(about = "Randomized on-screen keyboard, driven from the terminal")]
#[command(version)]
struct Args {
    /// Built-in character set
    #[arg(long, value_enum, default_value = "numbers")]
    charset: Charset,

    /// Comma-separated custom labels (overrides --charset)
    #[arg(long)]
    custom: Option<String>,

    /// Grid layout
    #[arg(long, value_enum, default_value = "grid3x3")]
    layout: Layout,

    /// Minimum fraction of keys each shuffle must move
    #[arg(long, default_value = "0.3")]
    min_change: f64,

    /// Shuffle attempts before the fallback arrangement
    #[arg(long, default_value = "1000")]
    max_attempts: u32,

    /// Number of shuffles to perform before typing
    #[arg(short, long, default_value = "1")]
    shuffles: usize,

    /// Labels to type after shuffling, then submit
    #[arg(short = 't', long = "type")]
    text: Option<String>,

    /// Maximum input length in characters
    #[arg(long, default_value = "20")]
    max_length: usize,

    /// Mask the input
    #[arg(short, long)]
    password: bool,

    /// Cycle through this many themes before typing
    #[arg(long, default_value = "0")]
    themes: usize,

    /// Disable haptic and sound feedback actions
    #[arg(long)]
    no_feedback: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn keyboard_config(&self) -> KeyboardConfig {
        let character_set = match (&self.custom, self.charset) {
            (Some(labels), _) => CharacterSet::custom(labels.split(',').map(str::trim)),
            (None, Charset::Numbers) => CharacterSet::Numbers,
            (None, Charset::Letters) => CharacterSet::Letters,
            (None, Charset::Symbols) => CharacterSet::Symbols,
        };
        let layout = match self.layout {
            Layout::Grid3x3 => LayoutMode::Grid3x3,
            Layout::Grid4x4 => LayoutMode::Grid4x4,
            Layout::Grid5x5 => LayoutMode::Grid5x5,
        };

        KeyboardConfig {
            layout,
            character_set,
            input_mode: if self.password { InputMode::Password } else { InputMode::Normal },
            haptic_enabled: !self.no_feedback,
            sound_enabled: !self.no_feedback,
            minimum_shuffle_fraction: self.min_change,
            max_shuffle_attempts: self.max_attempts,
            max_input_length: self.max_length,
            clear_after_submit: true,
            ..KeyboardConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let config = args.keyboard_config();
    tracing::info!(
        charset = config.character_set.name(),
        fraction = config.minimum_shuffle_fraction,
        "ShuffleKey starting"
    );

    let keyboard = Keyboard::new(SystemEnv, config)?;
    let mut session = Session::new(keyboard, io::stdout().lock());
    session.start()?;

    for _ in 0..args.themes {
        session.send(KeyboardEvent::NextTheme)?;
    }

    for _ in 0..args.shuffles {
        session.send(KeyboardEvent::Shuffle)?;
    }

    if let Some(text) = &args.text {
        session.type_text(text)?;
        session.send(KeyboardEvent::Submit)?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shufflekey_core::ConfigError;

    use super::*;

    fn config_from(args: &[&str]) -> KeyboardConfig {
        let argv = std::iter::once("shufflekey").chain(args.iter().copied());
        Args::try_parse_from(argv).unwrap().keyboard_config()
    }

    #[test]
    fn defaults_build_the_keypad() {
        let config = config_from(&[]);
        assert_eq!(config.character_set, CharacterSet::Numbers);
        assert_eq!(config.layout, LayoutMode::Grid3x3);
        assert_eq!(config.input_mode, InputMode::Normal);
        assert!(config.clear_after_submit);
        assert_eq!(config.validate().unwrap().len(), 11);
    }

    #[test]
    fn custom_labels_override_charset() {
        let config = config_from(&["--charset", "letters", "--custom", "A, B,C", "--layout", "grid4x4"]);
        assert_eq!(config.character_set, CharacterSet::custom(["A", "B", "C"]));
        assert_eq!(config.layout, LayoutMode::Grid4x4);
        assert_eq!(config.validate().unwrap().len(), 3);
    }

    #[test]
    fn multi_character_custom_labels_are_rejected() {
        let config = config_from(&["--custom", "10,11,12"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MultiCharacterLabel { label: "10".to_owned() })
        );
    }

    #[test]
    fn flags_map_onto_config() {
        let config = config_from(&[
            "--password",
            "--no-feedback",
            "--min-change",
            "0.5",
            "--max-attempts",
            "7",
            "--max-length",
            "4",
        ]);
        assert_eq!(config.input_mode, InputMode::Password);
        assert!(!config.haptic_enabled && !config.sound_enabled);
        assert!((config.minimum_shuffle_fraction - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.max_shuffle_attempts, 7);
        assert_eq!(config.max_input_length, 4);
    }
}
