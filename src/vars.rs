//! Every environment variable the Manage API test suite reads.
//!
//! Each entry produces a descriptor constant, a getter that reads it from the
//! process environment, and a slot in [`ALL`]. See `README.md` for how to
//! provision them.

use crate::{
    descriptor::{Category, EnvVar},
    env,
    error::Result,
};

macro_rules! env_vars {
    ($(
        $category:ident {
            $($getter:ident => $name:ident: $description:literal,)*
        }
    )*) => {
        $($(
            pub const $name: EnvVar = EnvVar::new(
                stringify!($name),
                $description,
                Category::$category,
            );

            #[doc = concat!("Reads `", stringify!($name), "` from the process environment.")]
            ///
            /// # Errors
            ///
            /// [`Error::MissingConfiguration`](crate::Error::MissingConfiguration)
            /// when the variable is unset or empty.
            pub fn $getter() -> Result<String> {
                env::get(&$name)
            }
        )*)*

        pub static ALL: &[EnvVar] = &[$($($name,)*)*];
    };
}

env_vars! {
    ManageApi {
        manage_api_url => KBC_MANAGE_API_URL:
            "URL where Keboola Connection is running",
        manage_api_token => KBC_MANAGE_API_TOKEN:
            "Personal access token of a superadmin user without MFA",
        super_admin_with_mfa_token => KBC_SUPER_ADMIN_WITH_MFA_TOKEN:
            "Personal access token of a superadmin user with MFA enabled",
        super_api_token => KBC_SUPER_API_TOKEN:
            "Application token with all scopes, used for maintenance of the test stack",
        super_token_with_projects_read_scope => KBC_SUPER_API_TOKEN_WITH_PROJECTS_READ_SCOPE:
            "Application token with the projects:read scope",
        super_token_with_deleted_projects_read_scope => KBC_SUPER_API_TOKEN_WITH_DELETED_PROJECTS_READ_SCOPE:
            "Application token with the deleted-projects:read scope",
        super_token_with_organizations_read_scope => KBC_SUPER_API_TOKEN_WITH_ORGANIZATIONS_READ_SCOPE:
            "Application token with the organizations:read scope",
        super_token_with_ui_manage_scope => KBC_SUPER_API_TOKEN_WITH_UI_MANAGE_SCOPE:
            "Application token with the manage:ui scope",
        super_token_with_storage_tokens_scope => KBC_SUPER_API_TOKEN_WITH_STORAGE_TOKENS_SCOPE:
            "Application token with the manage:storage-tokens scope",
        super_token_without_scopes => KBC_SUPER_API_TOKEN_WITHOUT_SCOPES:
            "Application token without any scopes",
    }

    TestAdmins {
        test_admin_email => KBC_TEST_ADMIN_EMAIL:
            "Email of a regular (non-superadmin) test user without MFA",
        test_admin_token => KBC_TEST_ADMIN_TOKEN:
            "Personal access token of the KBC_TEST_ADMIN_EMAIL user",
        test_admin_with_mfa_email => KBC_TEST_ADMIN_WITH_MFA_EMAIL:
            "Email of a regular (non-superadmin) test user with MFA enabled",
        test_admin_with_mfa_token => KBC_TEST_ADMIN_WITH_MFA_TOKEN:
            "Personal access token of the KBC_TEST_ADMIN_WITH_MFA_EMAIL user",
        second_test_admin_email => KBC_SECOND_TEST_ADMIN_EMAIL:
            "Email of a second regular test user without MFA, used for invitations and joins",
        second_test_admin_token => KBC_SECOND_TEST_ADMIN_TOKEN:
            "Personal access token of the KBC_SECOND_TEST_ADMIN_EMAIL user",
    }

    Snowflake {
        snowflake_backend_host => KBC_TEST_SNOWFLAKE_BACKEND_HOST:
            "Hostname of the Snowflake account used as a storage backend",
        snowflake_backend_warehouse => KBC_TEST_SNOWFLAKE_BACKEND_WAREHOUSE:
            "Snowflake warehouse used by the storage backend",
        snowflake_backend_region => KBC_TEST_SNOWFLAKE_BACKEND_REGION:
            "Region of the Snowflake account, e.g. us-east-1",
        snowflake_backend_username => KBC_TEST_SNOWFLAKE_BACKEND_NAME:
            "Username of the Snowflake user the storage backend connects as",
        snowflake_backend_password => KBC_TEST_SNOWFLAKE_BACKEND_PASSWORD:
            "Password of the KBC_TEST_SNOWFLAKE_BACKEND_NAME user",
        snowflake_backend_private_key => KBC_TEST_SNOWFLAKE_BACKEND_PRIVATE_KEY:
            "PEM encoded private key for key-pair authentication of the KBC_TEST_SNOWFLAKE_BACKEND_NAME user",
        snowflake_backend_database => KBC_TEST_SNOWFLAKE_BACKEND_DATABASE:
            "Snowflake database owned by the storage backend user",
        snowflake_backend_client_db_prefix => KBC_TEST_SNOWFLAKE_BACKEND_CLIENT_DB_PREFIX:
            "Prefix of databases and roles created by the storage backend",
    }

    Abs {
        abs_account_name => TEST_ABS_ACCOUNT_NAME:
            "Azure Storage account name for file storage",
        abs_account_key => TEST_ABS_ACCOUNT_KEY:
            "Primary access key of the TEST_ABS_ACCOUNT_NAME account",
        abs_rotate_account_key => TEST_ABS_ROTATE_ACCOUNT_KEY:
            "Secondary access key of the TEST_ABS_ACCOUNT_NAME account, used to test key rotation",
        abs_container_name => TEST_ABS_CONTAINER_NAME:
            "Blob container in the TEST_ABS_ACCOUNT_NAME account",
        abs_region => TEST_ABS_REGION:
            "Azure region of the TEST_ABS_ACCOUNT_NAME account, e.g. eastus2",
    }

    S3 {
        s3_access_key => TEST_S3_ACCESS_KEY:
            "AWS access key id of the IAM user with access to TEST_S3_FILES_BUCKET",
        s3_secret_key => TEST_S3_SECRET_KEY:
            "AWS secret access key belonging to TEST_S3_ACCESS_KEY",
        s3_rotate_access_key => TEST_S3_ROTATE_ACCESS_KEY:
            "Second AWS access key id of the same IAM user, used to test key rotation",
        s3_rotate_secret_key => TEST_S3_ROTATE_SECRET_KEY:
            "AWS secret access key belonging to TEST_S3_ROTATE_ACCESS_KEY",
        s3_files_bucket => TEST_S3_FILES_BUCKET:
            "S3 bucket for file storage",
        s3_region => TEST_S3_REGION:
            "AWS region of TEST_S3_FILES_BUCKET, e.g. us-east-1",
    }

    Gcs {
        gcs_keyfile_json => TEST_GCS_KEYFILE_JSON:
            "Contents of the JSON key file of the service account with access to TEST_GCS_FILES_BUCKET",
        gcs_keyfile_rotate_json => TEST_GCS_KEYFILE_ROTATE_JSON:
            "Contents of a second JSON key file of the same service account, used to test key rotation",
        gcs_files_bucket => TEST_GCS_FILES_BUCKET:
            "GCS bucket for file storage",
        gcs_region => TEST_GCS_REGION:
            "GCS region of TEST_GCS_FILES_BUCKET, e.g. europe-west1",
    }
}

pub fn by_name(name: &str) -> Option<&'static EnvVar> {
    ALL.iter().find(|var| var.name == name)
}

pub fn in_category(category: Category) -> impl Iterator<Item = &'static EnvVar> {
    ALL.iter().filter(move |var| var.category == category)
}

#[cfg(test)]
mod tests;
