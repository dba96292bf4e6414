use iced::Color;
use super::toast::ToastLevel;

/// Brazilian currency rendering, e.g. `R$ 149.999,99`.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();

    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}

pub fn format_availability(available: bool) -> &'static str {
    if available { "Disponível" } else { "Indisponível" }
}

pub fn availability_color(available: bool) -> Color {
    if available {
        Color::from_rgb(0.2, 0.7, 0.2) // Green
    } else {
        Color::from_rgb(0.6, 0.6, 0.6) // Gray
    }
}

pub fn toast_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Success => Color::from_rgb(0.2, 0.7, 0.2),
        ToastLevel::Error => Color::from_rgb(0.9, 0.2, 0.2),
    }
}

/// Shown in place of an empty optional column.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_brazilian_grouping() {
        assert_eq!(format_price(149999.99), "R$ 149.999,99");
        assert_eq!(format_price(1999999.5), "R$ 1.999.999,50");
        assert_eq!(format_price(999.0), "R$ 999,00");
        assert_eq!(format_price(0.0), "R$ 0,00");
    }

    #[test]
    fn empty_optionals_render_as_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("Acme")), "Acme");
    }
}
