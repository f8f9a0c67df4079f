//! Rounding helpers shared by the ledger and the coach.

/// Rounds to cents.
pub fn money(x: f64) -> f64 {
    round_to(x, 2)
}

pub fn round_to(x: f64, places: i32) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(places);
    let rounded = (x * factor).round() / factor;
    // avoid printing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Whole-unit weekly step needed to close `gap` over `weeks`, never below 1.
pub fn weekly_step(gap: f64, weeks: f64) -> i64 {
    ((gap / weeks).ceil() as i64).max(1)
}
