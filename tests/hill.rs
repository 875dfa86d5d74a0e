use astronav::frames::series::{states_from_components, states_from_epochs};
use astronav::frames::{
    AngleUnit, FrameError, HillDirection, OrbitalElements, StateVector, azel_residuals,
    azimuth_elevation, first_eccentric_epoch, hill_to_inertial, hill_to_inertial_series, inertial_to_hill,
    inertial_to_hill_matrix, inertial_to_hill_series, kep_to_cart,
};
use astronav::matrix::{self, IDENTITY};

const MU_EARTH: f64 = 398_600.0e9; // m^3 / s^2

fn sample_states() -> Vec<StateVector> {
    [
        [7_000_000.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [7_500_000.0, 0.1, 45.0, 15.0, 135.0, 77.0],
        [26_600_000.0, 0.74, 63.4, 40.0, 270.0, 10.0],
        [42_164_000.0, 0.0002, 0.05, 100.0, 20.0, 300.0],
        [10_000_000.0, 0.3, 150.0, 250.0, 45.0, 190.0],
    ]
    .into_iter()
    .map(|oe| kep_to_cart(OrbitalElements::from_array(oe), MU_EARTH, AngleUnit::Degrees))
    .collect()
}

fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!((x - y).abs() <= tol, "component {i}: {x} vs {y} (tol {tol})");
    }
}

#[test]
fn hill_matrix_is_a_proper_rotation() {
    for state in sample_states() {
        let r = inertial_to_hill_matrix(&state, HillDirection::InertialToHill).expect("rotation");
        let rrt = matrix::mul(&r, &matrix::transpose(&r));
        for i in 0..3 {
            assert_close(&rrt[i], &IDENTITY[i], 1e-12);
        }
        assert!((matrix::determinant(&r) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn hill_matrix_rows_are_radial_transverse_normal() {
    let state = [7_000_000.0, 0.0, 0.0, 0.0, 7_546.0, 0.0];
    let r = inertial_to_hill_matrix(&state, HillDirection::InertialToHill).expect("rotation");
    assert_close(&r[0], &[1.0, 0.0, 0.0], 1e-15);
    assert_close(&r[1], &[0.0, 1.0, 0.0], 1e-15);
    assert_close(&r[2], &[0.0, 0.0, 1.0], 1e-15);
}

#[test]
fn inverse_direction_is_the_transpose() {
    for state in sample_states() {
        let fwd = inertial_to_hill_matrix(&state, HillDirection::InertialToHill).unwrap();
        let inv = inertial_to_hill_matrix(&state, HillDirection::HillToInertial).unwrap();
        assert_eq!(inv, matrix::transpose(&fwd));
    }
}

#[test]
fn transpose_flag_accepts_only_zero_and_one() {
    assert_eq!(HillDirection::try_from(0u8), Ok(HillDirection::InertialToHill));
    assert_eq!(HillDirection::try_from(1u8), Ok(HillDirection::HillToInertial));
    assert_eq!(HillDirection::try_from(2u8), Err(FrameError::InvalidFlag(2)));
}

#[test]
fn degenerate_reference_states_fail() {
    let at_origin = [0.0, 0.0, 0.0, 0.0, 7_500.0, 0.0];
    let radial = [7_000_000.0, 0.0, 0.0, 100.0, 0.0, 0.0];
    for state in [at_origin, radial] {
        assert!(matches!(
            inertial_to_hill_matrix(&state, HillDirection::InertialToHill),
            Err(FrameError::DegenerateVector { .. })
        ));
        assert!(matches!(
            inertial_to_hill(&state, &state),
            Err(FrameError::DegenerateVector { .. })
        ));
    }
}

#[test]
fn identical_objects_have_zero_relative_state() {
    let states = sample_states();
    let hill = inertial_to_hill_series(&states, &states).expect("same length");
    assert_eq!(hill.len(), states.len());
    for h in hill {
        assert!(h.iter().all(|c| *c == 0.0), "{h:?}");
    }
    let single = inertial_to_hill(&states[1], &states[1]).unwrap();
    assert!(single.iter().all(|c| *c == 0.0));
}

#[test]
fn co_rotating_point_is_stationary_in_hill_frame() {
    let r = 7_000_000.0;
    let n = (MU_EARTH / (r * r * r)).sqrt();
    let d = 1_000.0;
    let reference = [r, 0.0, 0.0, 0.0, n * r, 0.0];
    let relative = [r + d, 0.0, 0.0, 0.0, n * (r + d), 0.0];
    let hill = inertial_to_hill(&reference, &relative).unwrap();
    assert_close(&hill, &[d, 0.0, 0.0, 0.0, 0.0, 0.0], 1e-9);

    // An along-track offset with the reference velocity drifts radially by n·d.
    let ahead = [r, d, 0.0, 0.0, n * r, 0.0];
    let hill = inertial_to_hill(&reference, &ahead).unwrap();
    assert_close(&hill, &[0.0, d, 0.0, n * d, 0.0, 0.0], 1e-9);
}

#[test]
fn series_matches_single_epoch_calls() {
    let refs = sample_states();
    let rels: Vec<StateVector> = refs
        .iter()
        .map(|s| {
            let mut s = *s;
            s[0] += 250.0;
            s[2] -= 75.0;
            s[4] += 0.05;
            s
        })
        .collect();
    let series = inertial_to_hill_series(&refs, &rels).unwrap();
    for ((r, s), h) in refs.iter().zip(&rels).zip(&series) {
        assert_eq!(inertial_to_hill(r, s).unwrap(), *h);
    }
}

#[test]
fn series_length_mismatch_is_rejected() {
    let states = sample_states();
    let err = inertial_to_hill_series(&states, &states[..4]).unwrap_err();
    assert!(matches!(
        err,
        FrameError::ShapeMismatch {
            reference: 5,
            relative: 4,
            ..
        }
    ));
    assert!(matches!(
        inertial_to_hill_series(&[], &[]),
        Err(FrameError::ShapeMismatch { .. })
    ));
}

#[test]
fn hill_to_inertial_inverts_the_forward_transform() {
    let refs = sample_states();
    let rels: Vec<StateVector> = refs
        .iter()
        .map(|s| [s[0] - 3_000.0, s[1] + 1_200.0, s[2] + 40.0, s[3] + 0.3, s[4] - 0.1, s[5]])
        .collect();
    let hill = inertial_to_hill_series(&refs, &rels).unwrap();
    let back = hill_to_inertial_series(&refs, &hill).unwrap();
    for (b, s) in back.iter().zip(&rels) {
        assert_close(&b[..3], &s[..3], 1e-6);
        assert_close(&b[3..], &s[3..], 1e-9);
    }
    let one = hill_to_inertial(&refs[0], &hill[0]).unwrap();
    assert_eq!(one, back[0]);
}

#[test]
fn component_and_epoch_layouts_build_the_same_series() {
    let states = sample_states();
    let epochs: Vec<Vec<f64>> = states.iter().map(|s| s.to_vec()).collect();
    let components: Vec<Vec<f64>> = (0..6)
        .map(|c| states.iter().map(|s| s[c]).collect())
        .collect();
    assert_eq!(states_from_epochs(&epochs).unwrap(), states);
    assert_eq!(states_from_components(&components).unwrap(), states);

    let mut short = epochs.clone();
    short[2].pop();
    assert!(matches!(
        states_from_epochs(&short),
        Err(FrameError::ShapeMismatch { relative: 5, .. })
    ));
    assert!(matches!(
        states_from_components(&components[..5]),
        Err(FrameError::ShapeMismatch { .. })
    ));
    let mut ragged = components.clone();
    ragged[4].push(1.0);
    assert!(matches!(
        states_from_components(&ragged),
        Err(FrameError::ShapeMismatch { .. })
    ));
}

#[test]
fn azimuth_elevation_points_at_the_central_body() {
    // Line of sight is -x: azimuth is ±π depending on the sign of zero.
    let [az, el] = azimuth_elevation(&[7_000_000.0, 0.0, 0.0, 0.0, 7_500.0, 0.0]);
    assert!((az.abs() - std::f64::consts::PI).abs() < 1e-15);
    assert!(el.abs() < 1e-15);

    let [_, el] = azimuth_elevation(&[0.0, 0.0, -7_000_000.0, 7_500.0, 0.0, 0.0]);
    assert!((el - std::f64::consts::FRAC_PI_2).abs() < 1e-15);

    let [az, _] = azimuth_elevation(&[0.0, -7_000_000.0, 0.0, 7_500.0, 0.0, 0.0]);
    assert!((az - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
}

#[test]
fn azel_residuals_vanish_for_identical_series() {
    let states = sample_states();
    let res = azel_residuals(&states, &states).unwrap();
    assert!(res.iter().all(|[a, e]| *a == 0.0 && *e == 0.0));
    assert!(azel_residuals(&states, &states[1..]).is_err());
}

#[test]
fn eccentric_reference_is_flagged_but_still_transformed() {
    let circular: Vec<StateVector> = (0..4)
        .map(|i| {
            let oe = OrbitalElements::from_array([7_000_000.0, 0.0, 51.6, 30.0, 0.0, i as f64 * 90.0]);
            kep_to_cart(oe, MU_EARTH, AngleUnit::Degrees)
        })
        .collect();
    assert_eq!(first_eccentric_epoch(&circular), None);

    let molniya: Vec<StateVector> = [0.0, 90.0, 180.0]
        .into_iter()
        .map(|ta| {
            let oe = OrbitalElements::from_array([26_600_000.0, 0.74, 63.4, 40.0, 270.0, ta]);
            kep_to_cart(oe, MU_EARTH, AngleUnit::Degrees)
        })
        .collect();
    assert_eq!(first_eccentric_epoch(&molniya), Some(1));

    let rels: Vec<StateVector> = molniya
        .iter()
        .map(|s| [s[0] + 500.0, s[1], s[2] - 200.0, s[3], s[4] + 0.1, s[5]])
        .collect();
    let hill = inertial_to_hill_series(&molniya, &rels).expect("eccentric reference is accepted");
    assert_eq!(hill.len(), 3);
    let back = hill_to_inertial_series(&molniya, &hill).unwrap();
    for (b, s) in back.iter().zip(&rels) {
        assert_close(&b[..3], &s[..3], 1e-6);
        assert_close(&b[3..], &s[3..], 1e-9);
    }
}
