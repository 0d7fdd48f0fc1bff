//! Tuning parameters for the maneuver engine.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Vehicle physical model ---

/// Downward acceleration (m/s²).
pub const GRAVITY: f64 = 13.0;

/// Upward assist while the jump button stays held (m/s²).
pub const JUMP_ASSIST: f64 = 3.0;

/// Instantaneous vertical speed gained on a jump press (m/s).
pub const JUMP_IMPULSE: f64 = 9.6;

/// Height of the vehicle's center when resting on its wheels (m).
pub const RESTING_HEIGHT: f64 = 0.34;

/// Wiggle room above resting height still counted as "on the ground".
pub const GROUND_EPSILON: f64 = 0.03;

/// Apex of a held ("mashed") jump: resting height plus the ballistic rise
/// under the net deficit `GRAVITY - JUMP_ASSIST`.
pub const MASH_JUMP_HEIGHT: f64 =
    RESTING_HEIGHT + JUMP_IMPULSE * JUMP_IMPULSE / (2.0 * (GRAVITY - JUMP_ASSIST));

/// Constant climb rate of the modelled boost-assisted aerial (m/s).
pub const AERIAL_RISE_RATE: f64 = 8.0;

// --- Readiness evaluation ---

/// Minimum boost in the tank before an aerial is considered at all.
pub const BOOST_NEEDED_FOR_AERIAL: f64 = 20.0;

/// Reserve kept on top of the aerial minimum when budgeting boost for
/// ground travel.
pub const BOOST_BUDGET_RESERVE: f64 = 5.0;

/// Contact heights at or above this need an aerial rather than a jump.
pub const NEEDS_AERIAL_THRESHOLD: f64 = MASH_JUMP_HEIGHT;

/// Ceiling for jump-hit and side-flip contacts (m).
pub const MAX_JUMP_HIT: f64 = MASH_JUMP_HEIGHT;

/// Ceiling for flip-hit contacts (m).
pub const MAX_FLIP_HIT: f64 = 3.6;

/// Contact heights above this want a jump rather than a flat flip.
pub const NEEDS_JUMP_HIT_THRESHOLD: f64 = 3.6;

/// Contact heights above this want a flip rather than a plain drive.
pub const NEEDS_FLIP_THRESHOLD: f64 = 2.2;

/// Launching is "on schedule" while the countdown is below this (s).
pub const LAUNCH_SLACK: f64 = 0.1;

/// A maneuver is categorically out of reach once its countdown falls
/// below the negative of this (s). Tuned equal to `LAUNCH_SLACK` today,
/// but independently adjustable.
pub const INACCESSIBLE_SLACK: f64 = 0.1;

/// Correction angle to the contact must be within this to count as
/// lined up (radians, 3 degrees).
pub const ALIGNMENT_TOLERANCE: f64 = std::f64::consts::PI / 60.0;

/// Contacts further out in time than this are too far off to commit a
/// plan against (s).
pub const PLAN_COMMIT_HORIZON: f64 = 4.0;

/// Minimum vertical component of the roof vector to count as upright.
pub const UPRIGHT_ROOF_MIN: f64 = 0.99;

/// Minimum velocity/nose alignment to count as not skidding.
pub const SKID_DOT_MIN: f64 = 0.99;

// --- Set pieces ---

/// How long the launch commands of an aerial are held blind (s).
pub const AERIAL_LAUNCH_HOLD_SECONDS: f64 = 0.36;

/// Blind settle window after a flip's dodge tap (s).
pub const FLIP_SETTLE_SECONDS: f64 = 0.05;

// --- Closed-loop step tuning ---

/// Distance from the contact point at which a midair strike counts as
/// having arrived (m).
pub const STRIKE_CONTACT_RADIUS: f64 = 1.0;

/// Pitch gain of the midair strike correction loop.
pub const MIDAIR_PITCH_GAIN: f64 = 4.0;

/// Yaw gain of the midair strike correction loop.
pub const MIDAIR_YAW_GAIN: f64 = 2.0;

/// Minimum nose/target alignment before boosting mid-air.
pub const MIDAIR_BOOST_ALIGNMENT: f64 = 0.7;

/// Pitch/roll gain used while levelling out for a landing.
pub const LEVEL_ATTITUDE_GAIN: f64 = 2.0;
