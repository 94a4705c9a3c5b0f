//! Keyboard and compass events to observer and clock commands
//!
//! The adapter owns no state. It reads the device-orientation flags it is
//! given and emits messages; whoever owns the observer state and the clock
//! applies them.

use serde::{Deserialize, Serialize};
use zenith_clock::RateCommand;
use zenith_core::{Degrees, OffsetDelta};

use crate::observer_state::ObserverMessage;
use crate::orientation::DeviceOrientation;

/// Heading change per arrow key press
pub const NUDGE_STEP_DEGREES: Degrees = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Char(char),
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowUp"`, `"."`)
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    /// Device orientation reading
    Orientation {
        /// Rotation around the z axis, degrees
        alpha: Option<f64>,
        /// Absolute compass heading, where the platform reports one
        compass_heading: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputCommand {
    Observer(ObserverMessage),
    Rate(RateCommand),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputAdapter;

impl InputAdapter {
    pub fn translate(&self, event: &InputEvent, orientation: &DeviceOrientation) -> Vec<InputCommand> {
        match event {
            InputEvent::KeyDown(key) => Self::key_command(*key).into_iter().collect(),
            InputEvent::Orientation {
                alpha,
                compass_heading,
            } => Self::orientation_commands(*alpha, *compass_heading, orientation),
        }
    }

    fn key_command(key: Key) -> Option<InputCommand> {
        let nudge = |delta| Some(InputCommand::Observer(ObserverMessage::Nudge(delta)));

        match key {
            Key::ArrowRight => nudge(OffsetDelta::azimuthal(NUDGE_STEP_DEGREES)),
            Key::ArrowLeft => nudge(OffsetDelta::azimuthal(-NUDGE_STEP_DEGREES)),
            Key::ArrowUp => nudge(OffsetDelta::altitudinal(NUDGE_STEP_DEGREES)),
            Key::ArrowDown => nudge(OffsetDelta::altitudinal(-NUDGE_STEP_DEGREES)),
            Key::Char('.') => Some(InputCommand::Rate(RateCommand::Increment)),
            Key::Char(',') => Some(InputCommand::Rate(RateCommand::Decrement)),
            Key::Char('/') => Some(InputCommand::Rate(RateCommand::Freeze)),
            Key::Char('`') => Some(InputCommand::Rate(RateCommand::Reset)),
            Key::Char(_) => None,
        }
    }

    fn orientation_commands(
        alpha: Option<f64>,
        compass_heading: Option<f64>,
        orientation: &DeviceOrientation,
    ) -> Vec<InputCommand> {
        let mut commands = Vec::new();
        let set = |azimuthal| InputCommand::Observer(ObserverMessage::SetAzimuthalOffset(azimuthal));

        // Zero readings come from devices without a sensor
        if let Some(alpha) = alpha.filter(|a| a.is_finite() && *a != 0.0) {
            commands.push(set(alpha));
        }

        if orientation.in_use() {
            if let Some(heading) = compass_heading.filter(|h| h.is_finite() && *h != 0.0) {
                commands.push(set(360.0 - (180.0 - heading)));
            }
        }

        commands
    }
}
