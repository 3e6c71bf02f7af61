//! Statically bundled sample data shown when the backend is unreachable

use crate::types::CategoryRecord;

/// The fixed category set used when `/api/categories` cannot be fetched.
pub fn fallback_categories() -> Vec<CategoryRecord> {
    vec![
        CategoryRecord {
            id: 1,
            name: "Эконом".to_string(),
            slug: "economy".to_string(),
            icon: Some("🚗".to_string()),
            description: None,
        },
        CategoryRecord {
            id: 2,
            name: "Комфорт".to_string(),
            slug: "comfort".to_string(),
            icon: Some("🚙".to_string()),
            description: None,
        },
        CategoryRecord {
            id: 3,
            name: "SUV".to_string(),
            slug: "suv".to_string(),
            icon: Some("🚐".to_string()),
            description: None,
        },
    ]
}
