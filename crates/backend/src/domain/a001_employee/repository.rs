use contracts::domain::a001_employee::{Employee, EmployeeId};

/// Список сотрудников в памяти.
///
/// Единственный владелец коллекции; порядок вставки сохраняется.
#[derive(Debug, Default)]
pub struct EmployeeRoster {
    employees: Vec<Employee>,
}

impl EmployeeRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, employee: Employee) -> EmployeeId {
        let id = employee.id;
        self.employees.push(employee);
        id
    }

    pub fn get_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn get_by_id_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }

    pub fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        let pos = self.employees.iter().position(|e| e.id == id)?;
        Some(self.employees.remove(pos))
    }

    pub fn list_all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
