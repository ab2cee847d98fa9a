//! Haptic and sound feedback.
//!
//! The core never plays feedback itself. Each successful operation maps to a
//! [`FeedbackKind`], and the keyboard turns that into [`KeyboardAction`]s for
//! the host to execute.
//!
//! [`KeyboardAction`]: crate::event::KeyboardAction

/// Haptic pattern to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticStyle {
    /// Light impact.
    Light,
    /// Medium impact.
    Medium,
    /// Rigid impact.
    Rigid,
    /// Soft impact.
    Soft,
    /// Warning notification.
    Warning,
    /// Selection tick.
    Selection,
}

/// Platform system sound identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

impl SoundId {
    /// Key click.
    pub const KEY_PRESS: Self = Self(1104);
    /// Light tap.
    pub const THEME_CHANGE: Self = Self(1123);
    /// Page turn.
    pub const SHUFFLE: Self = Self(1124);
    /// Delete.
    pub const DELETE: Self = Self(1155);
    /// Sharp delete.
    pub const CLEAR: Self = Self(1521);
}

/// Operation that produced feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// A character key was accepted.
    KeyPress,
    /// A character was deleted.
    Delete,
    /// The input was cleared.
    Clear,
    /// Keys were shuffled.
    Shuffle,
    /// The theme changed.
    ThemeChange,
    /// The tap area size changed.
    SizeChange,
}

impl FeedbackKind {
    /// Haptic pattern for this operation.
    pub fn haptic(self) -> HapticStyle {
        match self {
            Self::KeyPress => HapticStyle::Light,
            Self::Delete => HapticStyle::Medium,
            Self::Clear => HapticStyle::Warning,
            Self::Shuffle => HapticStyle::Rigid,
            Self::ThemeChange => HapticStyle::Soft,
            Self::SizeChange => HapticStyle::Selection,
        }
    }

    /// Sound for this operation, if any.
    pub fn sound(self) -> Option<SoundId> {
        match self {
            Self::KeyPress => Some(SoundId::KEY_PRESS),
            Self::Delete => Some(SoundId::DELETE),
            Self::Clear => Some(SoundId::CLEAR),
            Self::Shuffle => Some(SoundId::SHUFFLE),
            Self::ThemeChange => Some(SoundId::THEME_CHANGE),
            Self::SizeChange => None,
        }
    }
}
