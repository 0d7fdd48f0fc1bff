//! Enumeration types used throughout the agent.

use serde::{Deserialize, Serialize};

/// Tactical intent a plan serves; the arbitration key for interruption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Posture {
    /// No particular intent (default chase behavior).
    #[default]
    Neutral,
    /// Contesting the kickoff.
    Kickoff,
    /// Going for a strike on the opponent goal.
    Offensive,
    /// Recovering from the air onto the wheels.
    Landing,
    /// Rotating back while the ball is pinned in a corner.
    WaitToClear,
    /// Clearing the ball out of the defensive half.
    Clear,
    /// Blocking an imminent shot on the own goal.
    Save,
}

/// Terminal strike action family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrikeStyle {
    /// Ground-level dodge into the ball.
    FlipHit,
    /// Mash jump straight up, then dodge into the ball.
    JumpHit,
    /// Jump followed by a sideways dodge.
    SideFlip,
    /// Boost-assisted flight to an elevated contact.
    Aerial,
}
