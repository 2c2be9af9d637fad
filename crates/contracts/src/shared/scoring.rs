//! Расчёт процента выполнения плана и оценки 0..5
//!
//! Все функции чистые и тотальные: никаких ошибок, любой вход даёт результат.

use serde::{Deserialize, Serialize};

/// Максимальная оценка
pub const MAX_RATING: u8 = 5;

/// Верхние (включительные) границы процента для оценок 0..4.
/// Всё, что выше последней границы, получает `MAX_RATING`.
pub const RATING_THRESHOLDS: [f64; 5] = [10.0, 35.0, 50.0, 65.0, 79.0];

/// Цвета оценок 0..5: от красного к зелёному
pub const RATING_COLORS: [&str; 6] = [
    "#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16", "#22c55e",
];

/// Цвет для оценки вне диапазона
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Результат оценки одной пары план/факт
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub percentage: f64,
    pub rating: u8,
}

/// Процент выполнения плана.
///
/// При нулевом плане возвращает 0: это значение-заглушка, а не ошибка.
/// Верхнего ограничения нет, перевыполнение даёт больше 100.
pub fn calculate_percentage(fact: f64, plan: f64) -> f64 {
    if plan == 0.0 {
        return 0.0;
    }
    (fact / plan) * 100.0
}

/// Оценка по проценту выполнения.
///
/// Границы включаются в нижнюю полосу: ровно 10% это ещё 0, 10.0001% уже 1.
/// `NaN` получает 0.
pub fn calculate_rating(percentage: f64) -> u8 {
    if percentage.is_nan() {
        return 0;
    }
    RATING_THRESHOLDS
        .iter()
        .position(|&upper| percentage <= upper)
        .map(|idx| idx as u8)
        .unwrap_or(MAX_RATING)
}

/// Процент и оценка для пары план/факт
pub fn score(plan: f64, fact: f64) -> Score {
    let percentage = calculate_percentage(fact, plan);
    Score {
        percentage,
        rating: calculate_rating(percentage),
    }
}

/// Цвет оценки для отображения
pub fn rating_color(rating: u8) -> &'static str {
    RATING_COLORS
        .get(rating as usize)
        .copied()
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_completion_is_top_rating() {
        for plan in [1.0, 80_000.0, 0.5, 1e9] {
            let s = score(plan, plan);
            assert_eq!(s.percentage, 100.0);
            assert_eq!(s.rating, 5);
        }
    }

    #[test]
    fn test_zero_plan_sentinel() {
        assert_eq!(score(0.0, 50.0), Score { percentage: 0.0, rating: 0 });
        assert_eq!(score(0.0, 0.0), Score { percentage: 0.0, rating: 0 });
        assert_eq!(score(0.0, -10.0).rating, 0);
    }

    #[test]
    fn test_over_achievement_not_clamped() {
        let s = score(100.0, 200.0);
        assert_eq!(s.percentage, 200.0);
        assert_eq!(s.rating, 5);
        assert_eq!(calculate_rating(150.0), 5);
    }

    #[test]
    fn test_rating_boundaries() {
        let cases = [
            (0.0, 0),
            (10.0, 0),
            (10.0001, 1),
            (35.0, 1),
            (35.0001, 2),
            (50.0, 2),
            (50.0001, 3),
            (65.0, 3),
            (65.0001, 4),
            (79.0, 4),
            (79.0001, 5),
            (100.0, 5),
        ];
        for (pct, expected) in cases {
            assert_eq!(calculate_rating(pct), expected, "percentage {pct}");
        }
    }

    #[test]
    fn test_rating_negative_and_non_finite() {
        assert_eq!(calculate_rating(-25.0), 0);
        assert_eq!(calculate_rating(f64::NAN), 0);
        assert_eq!(calculate_rating(f64::NEG_INFINITY), 0);
        assert_eq!(calculate_rating(f64::INFINITY), 5);
        assert_eq!(score(f64::NAN, 10.0).rating, 0);
    }

    #[test]
    fn test_negative_inputs_are_computed() {
        let s = score(-100.0, 50.0);
        assert_eq!(s.percentage, -50.0);
        assert_eq!(s.rating, 0);
    }

    #[test]
    fn test_rating_colors() {
        let colors: Vec<_> = (0..=5).map(rating_color).collect();
        assert_eq!(colors, RATING_COLORS.to_vec());
        for (i, c) in colors.iter().enumerate() {
            assert!(!colors[i + 1..].contains(c), "duplicate color {c}");
        }
        assert_eq!(rating_color(6), FALLBACK_COLOR);
        assert_eq!(rating_color(u8::MAX), FALLBACK_COLOR);
    }
}
