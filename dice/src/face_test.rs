use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn new_accepts_one_through_six() {
    for value in 1..=6 {
        assert_eq!(Face::new(value).map(Face::value), Some(value));
    }
}

#[test]
fn new_rejects_out_of_range() {
    assert_eq!(Face::new(0), None);
    assert_eq!(Face::new(7), None);
    assert_eq!(Face::new(u8::MAX), None);
}

#[test]
fn try_from_reports_out_of_range_value() {
    assert_eq!(Face::try_from(9), Err(FaceError::OutOfRange(9)));
    assert_eq!(Face::try_from(3), Ok(Face::THREE));
}

#[test]
fn all_is_ascending_and_complete() {
    let values: Vec<u8> = Face::ALL.iter().map(|f| f.value()).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn pip_count_matches_value() {
    assert_eq!(Face::ONE.pip_count(), 1);
    assert_eq!(Face::SIX.pip_count(), 6);
}

#[test]
fn random_stays_in_range_and_covers_all_faces() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut seen = [false; 6];
    for _ in 0..500 {
        let face = Face::random(&mut rng);
        seen[usize::from(face.value() - 1)] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn serde_rejects_invalid_face() {
    assert_eq!(serde_json::from_str::<Face>("4").ok(), Some(Face::FOUR));
    assert!(serde_json::from_str::<Face>("0").is_err());
    assert_eq!(serde_json::to_string(&Face::FIVE).ok().as_deref(), Some("5"));
}

#[test]
fn display_prints_the_value() {
    assert_eq!(Face::TWO.to_string(), "2");
}

#[test]
fn from_f64_accepts_whole_faces() {
    for face in Face::ALL {
        assert_eq!(Face::from_f64(f64::from(face.value())), Some(face));
    }
}

#[test]
fn from_f64_rejects_values_that_would_wrap_or_truncate() {
    for value in [262.0, 6.5, 6.9, 0.5, -250.0, 0.0, -0.0, 7.0, 257.0] {
        assert_eq!(Face::from_f64(value), None, "{value}");
    }
}

#[test]
fn from_f64_rejects_non_finite() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(Face::from_f64(value), None, "{value}");
    }
}
