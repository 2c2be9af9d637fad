/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Денежная сумма в рублях без копеек: "245 000 ₽"
pub fn format_money(value: f64) -> String {
    format!("{} ₽", format_number_with_decimals(value, 0))
}

/// Число с фиксированным количеством знаков.
///
/// Ровная половина округляется от нуля: 12.25 -> "12.3", а не "12.2".
/// Ноль всегда без знака.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", decimals, 0.0);
    }
    let factor = 10f64.powi(decimals as i32);
    let abs = value.abs();
    let scaled = abs * factor;
    // половина только если умножение точное, иначе 0.15 * 10 тоже дало бы 1.5
    let is_tie = scaled.fract() == 0.5 && abs.mul_add(factor, -scaled) == 0.0;
    if !is_tie {
        return format!("{:.*}", decimals, value);
    }
    let rounded = scaled.ceil() / factor;
    format!("{:.*}", decimals, rounded.copysign(value))
}

/// Процент с одним знаком: "61.1%"
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_fixed(value, 1))
}

/// Средняя оценка: "3.0 / 5"
pub fn format_rating(value: f64) -> String {
    format!("{} / 5", format_fixed(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1 234");
        assert_eq!(format_number_with_decimals(-123456.0, 0), "-123 456");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(245_000.0), "245 000 ₽");
        assert_eq!(format_money(1_234_567.0), "1 234 567 ₽");
        assert_eq!(format_money(0.0), "0 ₽");
    }

    #[test]
    fn test_format_fixed_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(12.25, 1), "12.3");
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(0.05, 1), "0.1");
        assert_eq!(format_fixed(-12.25, 1), "-12.3");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(1.125, 2), "1.13");
    }

    #[test]
    fn test_format_fixed_non_ties() {
        // 0.15 хранится как 0.1499999...
        assert_eq!(format_fixed(0.15, 1), "0.1");
        assert_eq!(format_fixed(12.24, 1), "12.2");
        assert_eq!(format_fixed(33.333333, 1), "33.3");
        assert_eq!(format_fixed(90.0, 1), "90.0");
        assert_eq!(format_fixed(f64::NAN, 1), "NaN");
    }

    #[test]
    fn test_format_fixed_negative_zero() {
        assert_eq!(format_fixed(-0.0, 1), "0.0");
        assert_eq!(format_fixed(-0.0, 0), "0");
    }

    #[test]
    fn test_format_percent_and_rating() {
        assert_eq!(format_percent(12.25), "12.3%");
        assert_eq!(format_percent(61.111), "61.1%");
        assert_eq!(format_rating(3.0), "3.0 / 5");
    }
}
