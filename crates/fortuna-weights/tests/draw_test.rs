use fortuna_core::errors::DrawError;
use fortuna_core::models::{Catalog, SelectionMode};
use fortuna_weights::{draw_index, validate_weights, Drawer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn abc() -> Catalog {
    Catalog::from_parts(&["A", "B", "C"], &[1.0, 1.0, 1.0]).unwrap()
}

#[test]
fn single_positive_weight_always_wins() {
    let mut drawer = Drawer::seeded(7);
    for _ in 0..1_000 {
        let draw = drawer
            .draw(&abc(), SelectionMode::Normal, vec![1.0, 0.0, 0.0])
            .unwrap();
        assert_eq!(draw.index, 0);
        assert_eq!(draw.item, "A");
    }
}

#[test]
fn zero_weight_items_are_never_drawn() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..1_000 {
        let index = draw_index(&[0.0, 2.0, 0.0, 1.0], &mut rng).unwrap();
        assert!(index == 1 || index == 3);
    }
}

#[test]
fn zero_sum_fails() {
    let mut drawer = Drawer::seeded(1);
    let err = drawer
        .draw(&abc(), SelectionMode::Normal, vec![0.0, 0.0, 0.0])
        .unwrap_err();
    assert_eq!(err, DrawError::ZeroTotal);
}

#[test]
fn length_mismatch_fails() {
    let mut drawer = Drawer::seeded(1);
    let err = drawer
        .draw(&abc(), SelectionMode::Normal, vec![1.0, 1.0])
        .unwrap_err();
    assert_eq!(
        err,
        DrawError::LengthMismatch {
            weights: 2,
            catalog: 3
        }
    );
}

#[test]
fn negative_and_non_finite_weights_fail() {
    assert_eq!(
        validate_weights(&[1.0, -0.5]),
        Err(DrawError::NegativeWeight {
            index: 1,
            weight: -0.5
        })
    );
    assert!(matches!(
        validate_weights(&[f64::NAN, 1.0]),
        Err(DrawError::NonFiniteWeight { index: 0, .. })
    ));
    assert!(matches!(
        validate_weights(&[f64::MAX, f64::MAX]),
        Err(DrawError::TotalOverflow { .. })
    ));
    assert_eq!(validate_weights(&[]), Err(DrawError::EmptyCatalog));
}

#[test]
fn same_seed_same_sequence() {
    let weights = vec![0.3, 0.5, 0.2];
    let mut a = Drawer::seeded(42);
    let mut b = Drawer::seeded(42);
    for _ in 0..50 {
        let x = a.draw(&abc(), SelectionMode::Normal, weights.clone()).unwrap();
        let y = b.draw(&abc(), SelectionMode::Normal, weights.clone()).unwrap();
        assert_eq!(x.index, y.index);
    }
}

#[test]
fn uniform_weights_give_uniform_distribution() {
    const TRIALS: usize = 30_000;
    // χ² critical value for 2 degrees of freedom at p = 0.001.
    const CHI_SQUARE_CRITICAL: f64 = 13.816;

    let catalog = abc();
    let mut drawer = Drawer::seeded(2024);
    let mut observed = [0usize; 3];
    for _ in 0..TRIALS {
        let draw = drawer
            .draw(&catalog, SelectionMode::Normal, catalog.base_weights())
            .unwrap();
        observed[draw.index] += 1;
    }

    let expected = TRIALS as f64 / 3.0;
    let chi_square: f64 = observed
        .iter()
        .map(|&o| (o as f64 - expected).powi(2) / expected)
        .sum();
    assert!(
        chi_square < CHI_SQUARE_CRITICAL,
        "χ² = {chi_square:.3}, observed = {observed:?}"
    );
}

#[test]
fn draw_records_mode_and_weights() {
    let mut drawer = Drawer::seeded(5);
    let draw = drawer
        .draw(&abc(), SelectionMode::AvoidRecent, vec![0.1, 1.0, 1.0])
        .unwrap();
    assert_eq!(draw.mode, SelectionMode::AvoidRecent);
    assert_eq!(draw.weights, vec![0.1, 1.0, 1.0]);
}
