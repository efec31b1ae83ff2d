/// Daily calorie baseline: the Mifflin-St Jeor formula without the sex
/// term, shifted by a fixed offset for the stated goal. Goals other than
/// "gain" and "lose" pass through unchanged rather than erroring.
pub fn calculate_bmr(weight: f64, height: f64, age: i64, goal: &str) -> f64 {
    let bmr = 10.0 * weight + 6.25 * height - 5.0 * age as f64 + 5.0;
    match goal {
        "gain" => bmr + 500.0,
        "lose" => bmr - 500.0,
        _ => bmr,
    }
}
