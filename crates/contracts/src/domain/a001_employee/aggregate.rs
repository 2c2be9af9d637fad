use crate::domain::common::EntityMetadata;
use crate::shared::scoring::{calculate_percentage, score};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для агрегата Сотрудник
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Дополнительные показатели
// ============================================================================

/// Дополнительный показатель сотрудника (новые клиенты, повторные продажи, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalMetric {
    pub id: Uuid,
    pub name: String,
    pub plan: f64,
    pub fact: f64,
    pub percentage: f64,
}

impl AdditionalMetric {
    pub fn new(name: impl Into<String>, plan: f64, fact: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            plan,
            fact,
            percentage: calculate_percentage(fact, plan),
        }
    }

    pub fn recalculate(&mut self) {
        self.percentage = calculate_percentage(self.fact, self.plan);
    }
}

// ============================================================================
// Товарные таблицы
// ============================================================================

/// Раздел, к которому относится товарная таблица
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Скоропортящиеся товары
    Perishable,
    /// Срочные продажи
    Urgent,
}

/// Строка товарной таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductItem {
    pub id: Uuid,
    pub name: String,
    pub plan: f64,
    pub fact: f64,
    pub percentage: f64,
}

impl ProductItem {
    pub fn new(name: impl Into<String>, plan: f64, fact: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            plan,
            fact,
            percentage: calculate_percentage(fact, plan),
        }
    }

    pub fn recalculate(&mut self) {
        self.percentage = calculate_percentage(self.fact, self.plan);
    }
}

/// Именованная группа товаров с общим процентом выполнения.
///
/// `total_percentage` считается как сумма факта к сумме плана по строкам,
/// а не как среднее процентов строк.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTable {
    pub id: Uuid,
    pub table_name: String,
    pub category: ProductCategory,
    pub items: Vec<ProductItem>,
    pub total_percentage: f64,
}

impl ProductTable {
    pub fn new(table_name: impl Into<String>, category: ProductCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            table_name: table_name.into(),
            category,
            items: Vec::new(),
            total_percentage: 0.0,
        }
    }

    pub fn with_item(mut self, name: impl Into<String>, plan: f64, fact: f64) -> Self {
        self.items.push(ProductItem::new(name, plan, fact));
        self.total_percentage = self.items_total_percentage();
        self
    }

    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.recalculate();
        }
        self.total_percentage = self.items_total_percentage();
    }

    fn items_total_percentage(&self) -> f64 {
        let plan: f64 = self.items.iter().map(|i| i.plan).sum();
        let fact: f64 = self.items.iter().map(|i| i.fact).sum();
        calculate_percentage(fact, plan)
    }
}

// ============================================================================
// Сотрудник
// ============================================================================

/// Сотрудник с планом продаж (агрегат a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// ФИО, например "Иванов Иван"
    pub name: String,
    pub plan: f64,
    pub fact: f64,
    pub percentage: f64,
    /// Оценка 0..5
    pub rating: u8,
    pub additional_metrics: Vec<AdditionalMetric>,
    /// Скоропортящиеся товары и срочные продажи вместе, различаются по `category`
    pub product_tables: Vec<ProductTable>,
    pub metadata: EntityMetadata,
}

impl Employee {
    pub fn new(name: impl Into<String>, plan: f64, fact: f64) -> Self {
        let s = score(plan, fact);
        Self {
            id: EmployeeId::new_v4(),
            name: name.into(),
            plan,
            fact,
            percentage: s.percentage,
            rating: s.rating,
            additional_metrics: Vec::new(),
            product_tables: Vec::new(),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn with_metric(mut self, name: impl Into<String>, plan: f64, fact: f64) -> Self {
        self.additional_metrics
            .push(AdditionalMetric::new(name, plan, fact));
        self
    }

    pub fn with_product_table(mut self, table: ProductTable) -> Self {
        self.product_tables.push(table);
        self
    }

    /// Изменить план/факт и пересчитать все производные поля
    pub fn set_plan_fact(&mut self, plan: f64, fact: f64) {
        self.plan = plan;
        self.fact = fact;
        self.recalculate();
        self.metadata.touch();
    }

    /// Пересчёт процента и оценки на всех уровнях.
    ///
    /// Каждый уровень считается по своей паре план/факт, проценты
    /// вложенных записей в процент сотрудника не попадают.
    pub fn recalculate(&mut self) {
        let s = score(self.plan, self.fact);
        self.percentage = s.percentage;
        self.rating = s.rating;
        for metric in &mut self.additional_metrics {
            metric.recalculate();
        }
        for table in &mut self.product_tables {
            table.recalculate();
        }
    }

    pub fn perishable_products(&self) -> impl Iterator<Item = &ProductTable> {
        self.tables_in(ProductCategory::Perishable)
    }

    pub fn urgent_sales(&self) -> impl Iterator<Item = &ProductTable> {
        self.tables_in(ProductCategory::Urgent)
    }

    fn tables_in(&self, category: ProductCategory) -> impl Iterator<Item = &ProductTable> {
        self.product_tables
            .iter()
            .filter(move |t| t.category == category)
    }

    /// Короткое имя для подписей графиков: первое слово ФИО
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Данные формы добавления сотрудника (значения как ввёл пользователь)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub plan: String,
    pub fact: String,
}
