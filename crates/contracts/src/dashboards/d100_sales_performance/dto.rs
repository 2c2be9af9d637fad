use crate::domain::a001_employee::{AdditionalMetric, EmployeeId, ProductTable};
use serde::{Deserialize, Serialize};

/// Сводные показатели по всем сотрудникам
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesStats {
    pub total_plan: f64,
    pub total_fact: f64,
    /// Среднее процентов сотрудников (не total_fact / total_plan)
    pub avg_percentage: f64,
    pub avg_rating: f64,
}

/// Строка данных для графиков "План vs Факт" и "Динамика выполнения плана"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Первое слово ФИО
    pub label: String,
    pub plan: f64,
    pub fact: f64,
    /// Процент с одним знаком после запятой, например "33.3"
    pub percentage_text: String,
}

/// Сегмент диаграммы распределения оценок
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBucket {
    /// Подпись, например "Оценка 3"
    pub label: String,
    pub rating: u8,
    pub count: usize,
    pub color: String,
}

/// Карточка сотрудника для вкладки "Сотрудники", таблицы аналитики и окна деталей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    pub id: EmployeeId,
    pub name: String,
    pub plan: f64,
    pub fact: f64,
    pub percentage: f64,
    pub percentage_text: String,
    pub rating: u8,
    pub rating_color: String,
    pub additional_metrics: Vec<AdditionalMetric>,
    pub perishable_products: Vec<ProductTable>,
    pub urgent_sales: Vec<ProductTable>,
}

/// Ответ дашборда эффективности продаж
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPerformanceResponse {
    pub stats: SalesStats,
    pub chart: Vec<ChartRow>,
    /// Всегда шесть сегментов, оценки 0..=5 по возрастанию
    pub rating_distribution: Vec<RatingBucket>,
    /// Сотрудники в порядке списка
    pub employees: Vec<EmployeeDetails>,
}
