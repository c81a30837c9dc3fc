//! Demo staff roster.

use rota_core::Employee;

const ACTIVE: [(&str, &str); 10] = [
    ("Wanda", "Morgan"),
    ("Jonathan", "Hudson"),
    ("Jessica", "Sharp"),
    ("Colin", "Cornish"),
    ("Sue", "Wilson"),
    ("Richard", "Buckland"),
    ("Joseph", "Lee"),
    ("Alison", "Chapman"),
    ("Nathan", "Carr"),
    ("Jan", "Martin"),
];

const INACTIVE: [(&str, &str); 20] = [
    ("Paulene", "Berube"),
    ("Rich", "Vallecillo"),
    ("Shanell", "Lasala"),
    ("Hassan", "Mcclendon"),
    ("Roselle", "Larose"),
    ("Marylouise", "Santerre"),
    ("Milan", "Wimmer"),
    ("Christy", "Lindgren"),
    ("Lanie", "Stegner"),
    ("Katina", "Hammers"),
    ("Lekisha", "Janelle"),
    ("Shane", "Schatz"),
    ("Lorena", "Hanneman"),
    ("Chad", "Westerlund"),
    ("Elmira", "Vanbuskirk"),
    ("Nerissa", "Montville"),
    ("Tomasa", "Holst"),
    ("Zachery", "Brinkmann"),
    ("Jere", "Salo"),
    ("Erna", "Hom"),
];

/// Thirty employees: ten active, then twenty inactive. Ids start at 1.
pub fn demo_employees() -> Vec<Employee> {
    let active = ACTIVE.iter().map(|&(n, f)| (n, f, true));
    let inactive = INACTIVE.iter().map(|&(n, f)| (n, f, false));
    active
        .chain(inactive)
        .enumerate()
        .map(|(i, (name, family_name, is_active))| {
            Employee::new(i as i64 + 1, name, family_name).with_active(is_active)
        })
        .collect()
}

/// The ten active demo employees.
pub fn active_demo_employees() -> Vec<Employee> {
    demo_employees().into_iter().filter(|e| e.is_active).collect()
}

/// `count` active employees named `Employee 1`, `Employee 2`, ...
pub fn staff(count: usize) -> Vec<Employee> {
    (1..=count)
        .map(|i| Employee::new(i as i64, "Employee", i.to_string()))
        .collect()
}
