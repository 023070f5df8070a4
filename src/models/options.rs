//! Fixed option lists presented by the register form.

/// Departments offered as checkboxes.
pub const DEPARTMENTS: [&str; 5] = ["HR", "Sales", "Finance", "Engineer", "Others"];

/// Separator used when departments are stored as one text value.
pub const DEPARTMENT_SEPARATOR: &str = ", ";

/// Profile pictures the user can pick from.
pub const PROFILE_IMAGES: [&str; 4] = [
    "https://randomuser.me/api/portraits/women/44.jpg",
    "https://randomuser.me/api/portraits/men/46.jpg",
    "https://randomuser.me/api/portraits/women/65.jpg",
    "https://randomuser.me/api/portraits/men/52.jpg",
];

/// Step between salary tiers.
pub const SALARY_STEP: u32 = 5000;

/// Number of salary tiers.
pub const SALARY_TIER_COUNT: u32 = 30;

/// Allowed salary values, lowest first. Zero is never a tier.
pub fn salary_tiers() -> Vec<u32> {
    (1..=SALARY_TIER_COUNT).map(|i| i * SALARY_STEP).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_tiers() {
        let tiers = salary_tiers();
        assert_eq!(tiers.len(), 30);
        assert_eq!(tiers.first(), Some(&5000));
        assert_eq!(tiers.last(), Some(&150_000));
        assert!(!tiers.contains(&0));
        assert!(tiers.windows(2).all(|w| w[1] - w[0] == SALARY_STEP));
    }
}
