use super::{EmployeeError, EmployeeRoster};
use contracts::domain::a001_employee::{
    CreateEmployeeRequest, Employee, EmployeeId, ProductCategory, ProductTable,
};

/// Разбор числа из поля формы: непустое, конечное, не отрицательное
fn parse_amount(field: &'static str, raw: &str) -> Result<f64, EmployeeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(EmployeeError::EmptyField(field));
    }
    let value: f64 = raw.parse().map_err(|_| EmployeeError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;
    check_amount(field, value)
}

fn check_amount(field: &'static str, value: f64) -> Result<f64, EmployeeError> {
    if !value.is_finite() {
        return Err(EmployeeError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(EmployeeError::NegativeValue { field, value });
    }
    // "-0" проходит проверку выше, знак убираем
    Ok(value + 0.0)
}

/// Добавление сотрудника из формы
pub fn create(
    roster: &mut EmployeeRoster,
    dto: CreateEmployeeRequest,
) -> Result<EmployeeId, EmployeeError> {
    let name = dto.name.trim();
    if name.is_empty() {
        return Err(EmployeeError::EmptyName);
    }
    let plan = parse_amount("plan", &dto.plan)?;
    let fact = parse_amount("fact", &dto.fact)?;

    let employee = Employee::new(name, plan, fact);
    tracing::info!(
        "Сотрудник добавлен: {} ({:.1}%, оценка {})",
        employee.name,
        employee.percentage,
        employee.rating
    );
    Ok(roster.insert(employee))
}

/// Изменение плана/факта с пересчётом процента и оценки
pub fn update_plan_fact(
    roster: &mut EmployeeRoster,
    id: EmployeeId,
    plan: f64,
    fact: f64,
) -> Result<(), EmployeeError> {
    let plan = check_amount("plan", plan)?;
    let fact = check_amount("fact", fact)?;
    let employee = roster
        .get_by_id_mut(id)
        .ok_or(EmployeeError::NotFound(id))?;
    employee.set_plan_fact(plan, fact);
    tracing::debug!("employee {} rescored: rating {}", id, employee.rating);
    Ok(())
}

/// Удаление сотрудника
pub fn delete(roster: &mut EmployeeRoster, id: EmployeeId) -> Result<Employee, EmployeeError> {
    let removed = roster.remove(id).ok_or(EmployeeError::NotFound(id))?;
    tracing::info!("Сотрудник удалён: {}", removed.name);
    Ok(removed)
}

/// Вставка тестовых данных
pub fn insert_test_data(roster: &mut EmployeeRoster) {
    let data = vec![
        Employee::new("Иванов Иван", 80_000.0, 72_000.0)
            .with_metric("Новые клиенты", 20.0, 18.0)
            .with_metric("Повторные продажи", 50.0, 45.0)
            .with_product_table(
                ProductTable::new("Молочные продукты", ProductCategory::Perishable)
                    .with_item("Молоко", 100.0, 90.0)
                    .with_item("Творог", 80.0, 70.0)
                    .with_item("Сметана", 60.0, 45.0),
            )
            .with_product_table(
                ProductTable::new("Акционные товары", ProductCategory::Urgent)
                    .with_item("Товар А", 200.0, 180.0)
                    .with_item("Товар Б", 150.0, 135.0)
                    .with_item("Товар В", 100.0, 80.0),
            ),
        Employee::new("Петрова Анна", 75_000.0, 45_000.0)
            .with_metric("Новые клиенты", 15.0, 10.0)
            .with_metric("Повторные продажи", 40.0, 22.0),
        Employee::new("Сидоров Петр", 90_000.0, 30_000.0)
            .with_metric("Новые клиенты", 25.0, 8.0)
            .with_metric("Повторные продажи", 60.0, 20.0),
    ];

    let count = data.len();
    for employee in data {
        roster.insert(employee);
    }
    tracing::info!("Загружено тестовых сотрудников: {}", count);
}
