use crate::modules::employees::core::employee::Employee;

/// Records the server starts with when seeding is enabled. The id sequence
/// continues at 6.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee::new("Juan Pérez", "Desarrollador Frontend", 50_000.0).with_id(1),
        Employee::new("María García", "Desarrolladora Backend", 55_000.0).with_id(2),
        Employee::new("Carlos López", "DevOps Engineer", 60_000.0).with_id(3),
        Employee::new("Ana Martínez", "UI/UX Designer", 45_000.0).with_id(4),
        Employee::new("Luis Rodríguez", "Project Manager", 65_000.0).with_id(5),
    ]
}
