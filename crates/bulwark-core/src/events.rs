//! Audio cues emitted by the simulation.
//!
//! The engine holds one [`AudioSink`] handed in at construction and
//! notifies it fire-and-forget; nothing comes back.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// Sound-worthy simulation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    Explosion,
    WeaponFired { weapon: WeaponKind },
}

/// Receiver of audio cues. Must not block.
pub trait AudioSink {
    fn notify(&mut self, cue: AudioCue);
}

/// Sink that drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn notify(&mut self, _cue: AudioCue) {}
}

/// Forward cues over a channel; a hung-up receiver is ignored.
impl AudioSink for mpsc::Sender<AudioCue> {
    fn notify(&mut self, cue: AudioCue) {
        let _ = self.send(cue);
    }
}
