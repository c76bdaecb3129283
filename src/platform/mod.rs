//! Platform abstraction layer
//!
//! The simulation never touches a window, a speaker or a dialog box. It calls
//! into a [`Platform`] for:
//! - Sound effects (fire-and-forget)
//! - Blocking notifications (level up, game over)

use crate::audio::SoundEffect;

/// Side effects requested by the simulation
pub trait Platform {
    /// Play a sound effect; nothing is returned to the simulation
    fn play_sound(&mut self, effect: SoundEffect);

    /// Show a message to the player
    fn show_message(&mut self, text: &str);
}

/// Discards every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlatform;

impl Platform for NullPlatform {
    fn play_sound(&mut self, _effect: SoundEffect) {}

    fn show_message(&mut self, _text: &str) {}
}

/// Routes requests to the `log` facade (headless runs)
#[derive(Debug, Clone, Default)]
pub struct LogPlatform {
    /// Running count of sounds requested
    pub sounds_played: u64,
    /// Every message shown, oldest first
    pub messages: Vec<String>,
}

impl Platform for LogPlatform {
    fn play_sound(&mut self, effect: SoundEffect) {
        self.sounds_played += 1;
        log::trace!("sound: {}", effect.as_str());
    }

    fn show_message(&mut self, text: &str) {
        log::info!("{text}");
        self.messages.push(text.to_string());
    }
}

/// Records every request in order
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingPlatform {
    pub sounds: Vec<SoundEffect>,
    pub messages: Vec<String>,
}

#[cfg(test)]
impl RecordingPlatform {
    /// Number of times `effect` was requested
    pub(crate) fn count(&self, effect: SoundEffect) -> usize {
        self.sounds.iter().filter(|&&s| s == effect).count()
    }
}

#[cfg(test)]
impl Platform for RecordingPlatform {
    fn play_sound(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
