use fitness_tracker_core::metrics::floor_div;
use fitness_tracker_core::{read_package, SportsWalking, Workout};

#[test]
fn reference_walk() {
    let t = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let info = t.show_training_info();
    assert_eq!(info.training_type, "SportsWalking");
    assert!((info.distance - 5.85).abs() < 1e-9);
    // 5.85^2 // 180 = 0 -> bare vektleddet
    assert!((info.calories - 157.5).abs() < 1e-9);
}

#[test]
fn floor_division_differs_from_true_division() {
    assert_eq!(floor_div(5.0, 3.0), 1.0);
    assert!(5.0f64 / 3.0 > 1.6);
}

#[test]
fn floor_term_kicks_in_above_height() {
    // 20000 skritt på 1 t -> 13 km/t, 169 // 160 = 1
    let walk = SportsWalking::new(20000, 1.0, 70.0, 160.0).unwrap();
    assert_eq!(walk.height(), 160.0);
    assert!((walk.get_mean_speed() - 13.0).abs() < 1e-9);
    assert!((walk.get_spent_calories() - 268.8).abs() < 1e-9);
}
