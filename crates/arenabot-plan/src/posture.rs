//! Posture dominance — the interruption contract as one auditable table.

use arenabot_core::enums::Posture;

/// Dominant posture → postures it may interrupt. Anything not listed
/// (including a posture against itself) may not interrupt.
const DOMINANCE: &[(Posture, &[Posture])] = &[
    (
        Posture::Save,
        &[
            Posture::Clear,
            Posture::WaitToClear,
            Posture::Landing,
            Posture::Offensive,
            Posture::Neutral,
        ],
    ),
    (
        Posture::Clear,
        &[Posture::WaitToClear, Posture::Offensive, Posture::Neutral],
    ),
    (Posture::WaitToClear, &[Posture::Offensive, Posture::Neutral]),
    (Posture::Landing, &[Posture::Offensive, Posture::Neutral]),
    (Posture::Kickoff, &[Posture::Neutral]),
    (Posture::Offensive, &[Posture::Neutral]),
];

/// Whether `proposed` is allowed to interrupt a stoppable plan holding
/// `current`.
pub fn dominates(proposed: Posture, current: Posture) -> bool {
    DOMINANCE
        .iter()
        .find(|(dominant, _)| *dominant == proposed)
        .is_some_and(|(_, dominated)| dominated.contains(&current))
}
