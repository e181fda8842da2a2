use std::fmt::{self, Display};

use clap::ValueEnum;
use serde::Serialize;

/// A named environment variable the test suite depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvVar {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
}

impl EnvVar {
    pub const fn new(name: &'static str, description: &'static str, category: Category) -> Self {
        EnvVar {
            name,
            description,
            category,
        }
    }
}

impl Display for EnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Grouping used by tooling to select related variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Manage API connection and tokens
    ManageApi,
    /// Test admin accounts
    TestAdmins,
    /// Snowflake backend credentials
    Snowflake,
    /// Azure Blob Storage credentials
    Abs,
    /// AWS S3 credentials
    S3,
    /// Google Cloud Storage credentials
    Gcs,
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::ManageApi => "manage-api",
            Category::TestAdmins => "test-admins",
            Category::Snowflake => "snowflake",
            Category::Abs => "abs",
            Category::S3 => "s3",
            Category::Gcs => "gcs",
        };
        f.write_str(s)
    }
}
