use contracts::dashboards::d100_sales_performance::{
    ChartRow, EmployeeDetails, RatingBucket, SalesPerformanceResponse, SalesStats,
};
use contracts::domain::a001_employee::Employee;
use contracts::shared::scoring::{rating_color, MAX_RATING};

use crate::shared::format::{format_fixed, format_money, format_percent, format_rating};

/// Итоги и средние по всем сотрудникам.
///
/// Средний процент это среднее процентов сотрудников, каждый сотрудник
/// весит одинаково независимо от размера плана. Пустой список даёт нули.
pub fn aggregate(employees: &[Employee]) -> SalesStats {
    if employees.is_empty() {
        return SalesStats::default();
    }

    let count = employees.len() as f64;
    let total_plan: f64 = employees.iter().map(|e| e.plan).sum();
    let total_fact: f64 = employees.iter().map(|e| e.fact).sum();
    let pct_sum: f64 = employees.iter().map(|e| e.percentage).sum();
    let rating_sum: f64 = employees.iter().map(|e| f64::from(e.rating)).sum();

    SalesStats {
        total_plan,
        total_fact,
        avg_percentage: pct_sum / count,
        avg_rating: rating_sum / count,
    }
}

/// Одна строка на сотрудника, в порядке списка
pub fn project_chart(employees: &[Employee]) -> Vec<ChartRow> {
    employees
        .iter()
        .map(|e| ChartRow {
            label: e.short_name().to_string(),
            plan: e.plan,
            fact: e.fact,
            percentage_text: format_fixed(e.percentage, 1),
        })
        .collect()
}

/// Распределение по оценкам 0..=5, включая пустые
pub fn project_rating_histogram(employees: &[Employee]) -> Vec<RatingBucket> {
    (0..=MAX_RATING)
        .map(|rating| RatingBucket {
            label: format!("Оценка {}", rating),
            rating,
            count: employees.iter().filter(|e| e.rating == rating).count(),
            color: rating_color(rating).to_string(),
        })
        .collect()
}

/// Карточки сотрудников с показателями и товарными таблицами по разделам
pub fn project_employees(employees: &[Employee]) -> Vec<EmployeeDetails> {
    employees
        .iter()
        .map(|e| EmployeeDetails {
            id: e.id,
            name: e.name.clone(),
            plan: e.plan,
            fact: e.fact,
            percentage: e.percentage,
            percentage_text: format_fixed(e.percentage, 1),
            rating: e.rating,
            rating_color: rating_color(e.rating).to_string(),
            additional_metrics: e.additional_metrics.clone(),
            perishable_products: e.perishable_products().cloned().collect(),
            urgent_sales: e.urgent_sales().cloned().collect(),
        })
        .collect()
}

/// Данные дашборда эффективности продаж
pub fn build_dashboard(employees: &[Employee]) -> SalesPerformanceResponse {
    SalesPerformanceResponse {
        stats: aggregate(employees),
        chart: project_chart(employees),
        rating_distribution: project_rating_histogram(employees),
        employees: project_employees(employees),
    }
}

/// Подписи и значения карточек сводки
pub fn summary_lines(stats: &SalesStats) -> Vec<(&'static str, String)> {
    vec![
        ("Общий план", format_money(stats.total_plan)),
        ("Выполнено", format_money(stats.total_fact)),
        ("Средний процент", format_percent(stats.avg_percentage)),
        ("Средняя оценка", format_rating(stats.avg_rating)),
    ]
}
