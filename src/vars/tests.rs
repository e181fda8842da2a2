use std::collections::HashSet;

use crate::descriptor::Category;

use super::{by_name, in_category, ALL, KBC_MANAGE_API_URL, TEST_ABS_ACCOUNT_KEY};

#[test]
fn names_are_unique() {
    let names: HashSet<_> = ALL.iter().map(|var| var.name).collect();
    assert_eq!(names.len(), ALL.len());
}

#[test]
fn names_are_env_style() {
    for var in ALL {
        assert!(
            var.name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
            "{var}"
        );
        assert!(!var.description.is_empty(), "{var}");
    }
}

#[test]
fn manage_api_url() {
    assert_eq!(KBC_MANAGE_API_URL.name, "KBC_MANAGE_API_URL");
    assert_eq!(
        KBC_MANAGE_API_URL.description,
        "URL where Keboola Connection is running"
    );
    assert_eq!(KBC_MANAGE_API_URL.category, Category::ManageApi);
}

#[test]
fn lookup_by_name() {
    for var in ALL {
        assert_eq!(by_name(var.name), Some(var));
    }
    assert_eq!(by_name("TEST_ABS_ACCOUNT_KEY"), Some(&TEST_ABS_ACCOUNT_KEY));
    assert_eq!(by_name("KBC_MANAGE_API_URL_TYPO"), None);
    assert_eq!(by_name(""), None);
}

#[test]
fn categories_cover_table() {
    let categories = [
        Category::ManageApi,
        Category::TestAdmins,
        Category::Snowflake,
        Category::Abs,
        Category::S3,
        Category::Gcs,
    ];

    let total: usize = categories
        .iter()
        .map(|&category| in_category(category).count())
        .sum();
    assert_eq!(total, ALL.len());

    for category in categories {
        assert!(in_category(category).count() > 0, "{category}");
        assert!(in_category(category).all(|var| var.category == category));
    }
}

#[test]
fn storage_providers() {
    let abs: Vec<_> = in_category(Category::Abs).map(|var| var.name).collect();
    assert!(abs.contains(&"TEST_ABS_ACCOUNT_KEY"));
    assert!(abs.contains(&"TEST_ABS_ROTATE_ACCOUNT_KEY"));

    let gcs: Vec<_> = in_category(Category::Gcs).map(|var| var.name).collect();
    assert!(gcs.contains(&"TEST_GCS_KEYFILE_JSON"));
}
