//! Market-size estimate for the calculator stage.

/// Potential monthly sales in bottles:
/// `floor(population * penetration% / 100 * purchase_rate)`.
///
/// `penetration_pct` is a percentage (0–100); `purchase_rate` is bottles
/// per reached customer per month.
pub fn potential_monthly_sales(population: u64, penetration_pct: f64, purchase_rate: f64) -> u64 {
    let estimate = population as f64 * penetration_pct / 100.0 * purchase_rate;
    if estimate.is_finite() && estimate > 0.0 {
        estimate.floor() as u64
    } else {
        0
    }
}

/// Thousands-separated rendering for display, e.g. `1234567` → `"1,234,567"`.
pub fn format_quantity(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
