use rust_decimal::Decimal;

/// Formats an integer with `,` between thousands groups.
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Formats a decimal as `$1,234.56`.
pub fn money(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((&text, "00"));
    let integer = integer.parse::<usize>().map(group_thousands).unwrap_or_else(|_| integer.to_string());

    format!("{sign}${integer}.{fraction}")
}

/// Formats a percentage without trailing zeros, keeping one decimal place: `40.0%`, `33.33%`.
pub fn percent(value: Decimal) -> String {
    let value = value.normalize();

    if value.scale() == 0 {
        format!("{value:.1}%")
    } else {
        format!("{value}%")
    }
}

pub const UNAVAILABLE: &str = "n/a";
