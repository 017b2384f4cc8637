use super::*;
use crate::consts::QUARTER_TURN_DEG;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashSet;

// =============================================================
// Tables
// =============================================================

#[test]
fn big_spin_table_matches_expected_angles() {
    let expected = [(720, 720), (630, 720), (720, 810), (720, 630), (810, 720), (900, 720)];
    for (face, (x, y)) in Face::ALL.into_iter().zip(expected) {
        assert_eq!(settle_target(face, RollMode::BigSpin), RotationTarget::new(x, y), "face {face}");
    }
}

#[test]
fn overshoot_table_matches_expected_angles() {
    let expected = [(0, 0), (-90, 0), (0, 90), (0, -90), (90, 0), (180, 0)];
    for (face, (x, y)) in Face::ALL.into_iter().zip(expected) {
        assert_eq!(settle_target(face, RollMode::Overshoot), RotationTarget::new(x, y), "face {face}");
    }
}

#[test]
fn no_two_faces_share_a_target_within_a_mode() {
    for mode in RollMode::ALL {
        let targets: HashSet<_> = Face::ALL.iter().map(|f| settle_target(*f, mode)).collect();
        assert_eq!(targets.len(), 6, "mode {mode}");
    }
}

#[test]
fn targets_are_whole_quarter_turns() {
    for mode in RollMode::ALL {
        for face in Face::ALL {
            let t = settle_target(face, mode);
            assert_eq!(t.x_deg % QUARTER_TURN_DEG, 0);
            assert_eq!(t.y_deg % QUARTER_TURN_DEG, 0);
        }
    }
}

#[test]
fn big_spin_settle_always_spins_forward() {
    let mut rng = SmallRng::seed_from_u64(1);
    let out = spin_out_target(RollMode::BigSpin, &mut rng);
    for face in Face::ALL {
        let rest = settle_target(face, RollMode::BigSpin);
        assert!(rest.x_deg > out.x_deg);
        assert!(rest.y_deg > out.y_deg);
    }
}

// =============================================================
// Spin-out
// =============================================================

#[test]
fn big_spin_out_is_fixed() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..10 {
        assert_eq!(spin_out_target(RollMode::BigSpin, &mut rng), RotationTarget::new(-720, -720));
    }
}

#[test]
fn overshoot_out_stays_in_range() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..1000 {
        let t = spin_out_target(RollMode::Overshoot, &mut rng);
        assert!((300..500).contains(&t.x_deg));
        assert!((300..500).contains(&t.y_deg));
    }
}

#[test]
fn overshoot_out_varies_between_draws() {
    let mut rng = SmallRng::seed_from_u64(3);
    let draws: HashSet<_> = (0..20).map(|_| spin_out_target(RollMode::Overshoot, &mut rng)).collect();
    assert!(draws.len() > 1);
}

#[test]
fn spin_out_never_matches_a_rest_target() {
    let mut rng = SmallRng::seed_from_u64(11);
    for mode in RollMode::ALL {
        for _ in 0..200 {
            let out = spin_out_target(mode, &mut rng);
            assert!(Face::ALL.iter().all(|f| settle_target(*f, mode) != out));
        }
    }
}

// =============================================================
// RollMode
// =============================================================

#[test]
fn roll_mode_parses_names() {
    assert_eq!("big-spin".parse::<RollMode>(), Ok(RollMode::BigSpin));
    assert_eq!(" Overshoot ".parse::<RollMode>(), Ok(RollMode::Overshoot));
    assert_eq!("sideways".parse::<RollMode>(), Err(ModeError::Unknown("sideways".to_owned())));
}

#[test]
fn roll_mode_accepts_only_canonical_names() {
    for alias in ["a", "b", "bigspin", "big_spin"] {
        assert_eq!(alias.parse::<RollMode>(), Err(ModeError::Unknown(alias.to_owned())), "{alias}");
    }
    for mode in RollMode::ALL {
        assert_eq!(mode.as_str().parse::<RollMode>(), Ok(mode));
    }
}

#[test]
fn roll_mode_durations() {
    assert_eq!(RollMode::BigSpin.settle_duration(), Duration::from_millis(2000));
    assert_eq!(RollMode::Overshoot.settle_duration(), Duration::from_millis(2050));
    assert_eq!(RollMode::COMMIT_DELAY, Duration::from_millis(50));
}

#[test]
fn roll_mode_serde_uses_kebab_case() {
    assert_eq!(serde_json::to_string(&RollMode::BigSpin).ok().as_deref(), Some("\"big-spin\""));
    assert_eq!(serde_json::from_str::<RollMode>("\"overshoot\"").ok(), Some(RollMode::Overshoot));
}

#[test]
fn rotation_target_renders_css_transform() {
    assert_eq!(RotationTarget::new(-90, 0).to_css(), "rotateX(-90deg) rotateY(0deg)");
}
