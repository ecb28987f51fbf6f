use fitness_tracker_core::{read_package, Running, Training, Workout};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reference_run() {
    let t = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert!(matches!(t, Training::Running(_)));
    assert!(approx(t.get_distance(), 9.75));
    assert!(approx(t.get_mean_speed(), 9.75));
    assert!(approx(t.get_spent_calories(), 699.75));
}

#[test]
fn distance_is_steps_times_stride() {
    for action in [0u32, 1, 999, 12_345, 40_000] {
        let run = Running::new(action, 1.5, 70.0).unwrap();
        assert!(approx(run.get_distance(), f64::from(action) * 0.65 / 1000.0));
    }
}

#[test]
fn calories_follow_mean_speed() {
    // Halv time: fart dobles i forhold til distanse
    let run = Running::new(9000, 0.5, 60.0).unwrap();
    let speed = run.get_mean_speed();
    assert!(approx(speed, 11.7));
    let expected = (18.0 * speed - 20.0) * 60.0 / 1000.0 * 60.0 * 0.5;
    assert_eq!(run.get_spent_calories(), expected);
}
