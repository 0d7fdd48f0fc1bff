//! The actuator command record — the sole channel through which the
//! engine affects the world, emitted at most once per tick.
//!
//! Analog channels are clamped to [-1, 1] at construction. Positive
//! steer/yaw turn the nose counter-clockwise seen from above; positive
//! pitch raises the nose; positive roll drops the right side.

use serde::{Deserialize, Serialize};

/// One tick's worth of actuator commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub throttle: f64,
    pub steer: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    pub jump: bool,
    pub boost: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_throttle(mut self, throttle: f64) -> Self {
        self.throttle = throttle.clamp(-1.0, 1.0);
        self
    }

    pub fn with_steer(mut self, steer: f64) -> Self {
        self.steer = steer.clamp(-1.0, 1.0);
        self
    }

    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch.clamp(-1.0, 1.0);
        self
    }

    pub fn with_yaw(mut self, yaw: f64) -> Self {
        self.yaw = yaw.clamp(-1.0, 1.0);
        self
    }

    pub fn with_roll(mut self, roll: f64) -> Self {
        self.roll = roll.clamp(-1.0, 1.0);
        self
    }

    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    pub fn with_boost(mut self, boost: bool) -> Self {
        self.boost = boost;
        self
    }
}
