//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::{Deserialize, Serialize};

use crate::constants::labels::{IDLE_ACTION, SPINNING_ACTION};

/// A slice color, usually a `#RRGGBB` hex string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels when the token is a `#RRGGBB` hex color
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Nearest entry of the 6x6x6 cube in the 256-color terminal palette
    pub fn ansi256(&self) -> Option<u8> {
        let (r, g, b) = self.rgb()?;
        let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
        Some(16 + 36 * level(r) + 6 * level(g) + level(b))
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ColorToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Lifecycle of a wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinState {
    #[default]
    Idle,
    Spinning,
}

impl SpinState {
    /// Text of the button that triggers a spin in this state
    pub fn action_label(self) -> &'static str {
        match self {
            SpinState::Idle => IDLE_ACTION,
            SpinState::Spinning => SPINNING_ACTION,
        }
    }
}

impl std::fmt::Display for SpinState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpinState::Idle => write!(f, "idle"),
            SpinState::Spinning => write!(f, "spinning"),
        }
    }
}

/// Result of one completed spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpinOutcome {
    /// Total rotation of the wheel, in whole degrees
    pub target_rotation_degrees: u32,
    /// `target_rotation_degrees mod 360`
    pub normalized_angle: u32,
    pub winning_index: usize,
    /// Label reported to the caller, after display substitution
    pub winning_label: String,
}
