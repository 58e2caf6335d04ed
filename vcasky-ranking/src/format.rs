/// `"{h}h {mm}m"`, minutes zero-padded, hours not.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

/// Brazilian Real in pt-BR notation: `R$ 1.234,56`.
///
/// The symbol is separated by a non-breaking space, matching what browsers
/// render for `Intl.NumberFormat("pt-BR", { currency: "BRL" })`.
pub fn format_price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!(
        "{}R$\u{a0}{},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0h 00m");
        assert_eq!(format_duration(95), "1h 35m");
        assert_eq!(format_duration(60), "1h 00m");
        assert_eq!(format_duration(585), "9h 45m");
        assert_eq!(format_duration(1505), "25h 05m");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "R$\u{a0}0,00");
        assert_eq!(format_price(350.0), "R$\u{a0}350,00");
        assert_eq!(format_price(1234.5), "R$\u{a0}1.234,50");
        assert_eq!(format_price(2800.0), "R$\u{a0}2.800,00");
        assert_eq!(format_price(1234567.891), "R$\u{a0}1.234.567,89");
    }

    #[test]
    fn test_format_price_rounds_to_cents() {
        assert_eq!(format_price(99.999), "R$\u{a0}100,00");
        assert_eq!(format_price(-12.5), "-R$\u{a0}12,50");
        assert_eq!(format_price(-0.001), "R$\u{a0}0,00");
    }
}
