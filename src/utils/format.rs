/// Renders an `f64` the way a JVM `double` prints: integral values keep a trailing `.0`,
/// magnitudes outside `[1e-3, 1e7)` switch to `<mantissa>E<exp>` notation.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        if amount.fract() == 0.0 {
            format!("{:.1}", amount)
        } else {
            format!("{}", amount)
        }
    } else {
        let scientific = format!("{:E}", amount);
        match scientific.split_once('E') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                format!("{}.0E{}", mantissa, exponent)
            }
            _ => scientific,
        }
    }
}
