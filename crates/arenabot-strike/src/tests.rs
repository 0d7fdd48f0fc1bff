#[cfg(test)]
mod tests {
    use glam::DVec3;

    use arenabot_core::constants::*;
    use arenabot_core::enums::StrikeStyle;
    use arenabot_core::motion::seconds_to_mash_jump_height;
    use arenabot_core::types::{Orientation, SpaceTime, VehicleState};

    use crate::profile;
    use crate::readiness::*;

    /// Grounded, upright vehicle at the origin facing +x, rolling forward.
    fn grounded_vehicle(boost: f64) -> VehicleState {
        VehicleState {
            position: DVec3::new(0.0, 0.0, RESTING_HEIGHT),
            velocity: DVec3::new(20.0, 0.0, 0.0),
            angular_velocity: DVec3::ZERO,
            orientation: Orientation::upright(),
            boost,
            time: 0.0,
        }
    }

    /// Contact dead ahead of the vehicle at the given height and lead time.
    fn contact_ahead(height: f64, seconds_till: f64) -> SpaceTime {
        SpaceTime::new(DVec3::new(30.0, 0.0, height), seconds_till)
    }

    // ---- Countdown monotonicity ----

    #[test]
    fn test_jump_accessibility_turns_on_with_time() {
        let vehicle = grounded_vehicle(100.0);
        let height = 3.0;
        let ascent = seconds_to_mash_jump_height(height).unwrap();

        // Too late to even begin: countdown below the inaccessibility band.
        assert!(!is_jump_hit_accessible(
            &vehicle,
            &contact_ahead(height, ascent - INACCESSIBLE_SLACK - 0.05)
        ));

        // Just inside the band.
        assert!(is_jump_hit_accessible(
            &vehicle,
            &contact_ahead(height, ascent - INACCESSIBLE_SLACK + 0.05)
        ));

        // Once accessible, more time never revokes it.
        let mut seconds_till = ascent;
        while seconds_till < 3.0 {
            assert!(
                is_jump_hit_accessible(&vehicle, &contact_ahead(height, seconds_till)),
                "accessibility lost at seconds_till={seconds_till}"
            );
            seconds_till += 0.1;
        }
    }

    #[test]
    fn test_jump_accessibility_non_increasing_in_height() {
        let vehicle = grounded_vehicle(100.0);
        let seconds_till = 0.3;

        let mut was_accessible = true;
        let mut height = 0.5;
        while height < MASH_JUMP_HEIGHT {
            let accessible =
                is_jump_hit_accessible(&vehicle, &contact_ahead(height, seconds_till));
            assert!(
                !(accessible && !was_accessible),
                "accessibility regained at height={height}"
            );
            was_accessible = accessible;
            height += 0.1;
        }
    }

    // ---- Height ceilings ----

    #[test]
    fn test_jump_and_side_flip_ceiling_is_absolute() {
        let vehicle = grounded_vehicle(100.0);
        // Plenty of time — height alone must exclude these.
        let contact = contact_ahead(MAX_JUMP_HIT + 0.01, 10.0);
        assert!(!is_jump_hit_accessible(&vehicle, &contact));
        assert!(!is_side_flip_accessible(&vehicle, &contact));
    }

    #[test]
    fn test_flip_hit_ceiling_ignores_timing() {
        assert!(!is_flip_hit_accessible(MAX_FLIP_HIT + 0.01));
        // A flip is gated purely by height; timing never enters.
        assert!(is_flip_hit_accessible(1.0));
        assert!(is_flip_hit_accessible(MAX_FLIP_HIT));
    }

    #[test]
    fn test_side_flip_gating_matches_jump_hit() {
        let vehicle = grounded_vehicle(100.0);
        for &(height, seconds_till) in &[
            (0.5, 0.05),
            (2.0, 0.1),
            (3.0, 0.2),
            (4.5, 0.5),
            (4.9, 2.0),
            (5.5, 3.0),
        ] {
            let contact = contact_ahead(height, seconds_till);
            assert_eq!(
                is_jump_hit_accessible(&vehicle, &contact),
                is_side_flip_accessible(&vehicle, &contact),
                "gating diverged at height={height}, t={seconds_till}"
            );
        }
    }

    // ---- Umbrella consistency ----

    #[test]
    fn test_umbrella_defers_to_jump_below_threshold() {
        // No boost at all — the jump branch must not care.
        let vehicle = grounded_vehicle(0.0);
        let height = 3.0;
        let ascent = seconds_to_mash_jump_height(height).unwrap();

        assert!(is_vertically_accessible(
            &vehicle,
            &contact_ahead(height, ascent + 0.2)
        ));
        assert!(!is_vertically_accessible(
            &vehicle,
            &contact_ahead(height, ascent - INACCESSIBLE_SLACK - 0.05)
        ));
    }

    #[test]
    fn test_umbrella_defers_to_boosted_aerial_at_threshold() {
        let height = NEEDS_AERIAL_THRESHOLD + 1.0;
        let ascent = (height - RESTING_HEIGHT) / AERIAL_RISE_RATE;

        let boosted = grounded_vehicle(100.0);
        assert!(is_vertically_accessible(
            &boosted,
            &contact_ahead(height, ascent + 0.05)
        ));
        assert!(!is_vertically_accessible(
            &boosted,
            &contact_ahead(height, ascent - INACCESSIBLE_SLACK - 0.05)
        ));

        // Same geometry without boost is flatly inaccessible.
        let dry = grounded_vehicle(0.0);
        assert!(!is_vertically_accessible(
            &dry,
            &contact_ahead(height, ascent + 0.05)
        ));
    }

    // ---- Checklists ----

    /// An aerial contact the grounded test vehicle is fully ready for.
    fn ready_aerial_contact() -> SpaceTime {
        let height = NEEDS_AERIAL_THRESHOLD + 1.0;
        let ascent = (height - RESTING_HEIGHT) / AERIAL_RISE_RATE;
        contact_ahead(height, ascent + 0.05)
    }

    #[test]
    fn test_aerial_checklist_all_green() {
        let vehicle = grounded_vehicle(100.0);
        let checklist = check_aerial_readiness(&vehicle, &ready_aerial_contact());
        assert!(checklist.launch.lined_up);
        assert!(checklist.launch.close_enough);
        assert!(checklist.launch.within_reach);
        assert!(checklist.launch.time_for_ignition);
        assert!(checklist.launch.upright);
        assert!(checklist.launch.on_the_ground);
        assert!(checklist.not_skidding);
        assert!(checklist.has_boost);
        assert!(checklist.ready());
    }

    #[test]
    fn test_aerial_checklist_boost_gate() {
        let vehicle = grounded_vehicle(BOOST_NEEDED_FOR_AERIAL - 0.1);
        let checklist = check_aerial_readiness(&vehicle, &ready_aerial_contact());
        assert!(!checklist.has_boost);
        assert!(!checklist.ready());
    }

    #[test]
    fn test_aerial_checklist_skid_gate() {
        let mut vehicle = grounded_vehicle(100.0);
        // Sliding sideways: moving +y while the nose points +x.
        vehicle.velocity = DVec3::new(0.0, 20.0, 0.0);
        let checklist = check_aerial_readiness(&vehicle, &ready_aerial_contact());
        assert!(!checklist.not_skidding);
        assert!(checklist.has_boost, "skid must not affect the boost field");
    }

    #[test]
    fn test_checklist_alignment_is_independent() {
        let mut vehicle = grounded_vehicle(100.0);
        // Face +y while the contact sits on +x; keep velocity on the nose
        // so only the alignment field should flip.
        vehicle.orientation = Orientation::new(DVec3::Y, DVec3::Z);
        vehicle.velocity = DVec3::new(0.0, 20.0, 0.0);

        let checklist = check_aerial_readiness(&vehicle, &ready_aerial_contact());
        assert!(!checklist.launch.lined_up);
        assert!(checklist.launch.close_enough);
        assert!(checklist.launch.within_reach);
        assert!(checklist.launch.time_for_ignition);
        assert!(checklist.launch.upright);
        assert!(checklist.launch.on_the_ground);
        assert!(checklist.not_skidding);
        assert!(checklist.has_boost);
    }

    #[test]
    fn test_checklist_airborne_is_independent() {
        let mut vehicle = grounded_vehicle(100.0);
        vehicle.position.z = 1.5;
        let checklist = check_aerial_readiness(&vehicle, &ready_aerial_contact());
        assert!(!checklist.launch.on_the_ground);
        assert!(checklist.launch.upright);
        assert!(checklist.launch.lined_up);
    }

    #[test]
    fn test_checklist_horizon_gate() {
        let vehicle = grounded_vehicle(100.0);
        let contact = contact_ahead(NEEDS_AERIAL_THRESHOLD + 1.0, PLAN_COMMIT_HORIZON + 1.0);
        let checklist = check_aerial_readiness(&vehicle, &contact);
        assert!(!checklist.launch.close_enough);
        // Way too early also means no ignition yet.
        assert!(!checklist.launch.time_for_ignition);
    }

    #[test]
    fn test_jump_hit_ignition_window_includes_dodge() {
        let vehicle = grounded_vehicle(100.0);
        let height = 3.0;
        let window =
            seconds_to_mash_jump_height(height).unwrap() + profile::FLIP_HIT.dodge_seconds;

        let inside = check_jump_hit_readiness(&vehicle, &contact_ahead(height, window - 0.05));
        assert!(inside.time_for_ignition);

        let outside = check_jump_hit_readiness(&vehicle, &contact_ahead(height, window + 0.05));
        assert!(!outside.time_for_ignition);
    }

    #[test]
    fn test_flip_hit_checklist_forces_reach() {
        let vehicle = grounded_vehicle(100.0);
        // Not enough time left for any jump — the umbrella says no...
        let contact = contact_ahead(3.0, 0.1);
        assert!(!is_vertically_accessible(&vehicle, &contact));
        // ...but a flip never needed vertical reach in the first place.
        let checklist = check_flip_hit_readiness(&vehicle, &contact);
        assert!(checklist.within_reach);
        assert!(checklist.time_for_ignition);
    }

    // ---- Profiles ----

    #[test]
    fn test_strike_profile_time_costs() {
        assert_eq!(profile::FLIP_HIT.total_seconds(), 0.4);
        assert_eq!(profile::FLIP_HIT.style, StrikeStyle::FlipHit);

        let jump = profile::jump_hit(3.0);
        let expected = seconds_to_mash_jump_height(3.0).unwrap() + 0.4;
        assert!((jump.total_seconds() - expected).abs() < 1e-9);

        // Beyond the apex, a jump hit costs forever.
        assert!(profile::jump_hit(MASH_JUMP_HEIGHT + 1.0)
            .total_seconds()
            .is_infinite());

        let aerial = profile::aerial(RESTING_HEIGHT + 2.0 * AERIAL_RISE_RATE);
        assert!((aerial.maneuver_seconds - 2.0).abs() < 1e-9);
        assert_eq!(aerial.dodge_seconds, 0.0);

        assert_eq!(profile::side_flip(2.0).style, StrikeStyle::SideFlip);
    }

    #[test]
    fn test_recommended_style_ladder() {
        assert_eq!(profile::recommended_style(0.5), None);
        assert_eq!(
            profile::recommended_style(NEEDS_FLIP_THRESHOLD + 0.1),
            Some(StrikeStyle::FlipHit)
        );
        assert_eq!(
            profile::recommended_style(NEEDS_JUMP_HIT_THRESHOLD + 0.1),
            Some(StrikeStyle::JumpHit)
        );
        assert_eq!(
            profile::recommended_style(NEEDS_AERIAL_THRESHOLD),
            Some(StrikeStyle::Aerial)
        );
    }

    #[test]
    fn test_boost_budget_reserves_aerial_minimum() {
        let vehicle = grounded_vehicle(50.0);
        assert_eq!(
            boost_budget(&vehicle),
            50.0 - BOOST_NEEDED_FOR_AERIAL - BOOST_BUDGET_RESERVE
        );
        // Budget can go negative; the caller decides what to do with that.
        assert!(boost_budget(&grounded_vehicle(10.0)) < 0.0);
    }
}
