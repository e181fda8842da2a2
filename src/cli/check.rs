use log::{debug, error, info, warn};

use crate::{
    descriptor::{Category, EnvVar},
    env::Env,
    error::{Error, Result},
    source::{EnvSource, ProcessEnv},
    vars,
};

use super::CheckArgs;

pub fn main(args: &CheckArgs) -> Result<()> {
    let selected = select(&args.names, &args.categories)?;
    check(&Env::new(ProcessEnv), &selected)
}

fn select(names: &[String], categories: &[Category]) -> Result<Vec<&'static EnvVar>> {
    if names.is_empty() && categories.is_empty() {
        return Ok(vars::ALL.iter().collect());
    }

    let mut selected: Vec<&'static EnvVar> = vec![];
    for name in names {
        let var = vars::by_name(name).ok_or_else(|| Error::UnknownVariable(name.clone()))?;
        if !selected.contains(&var) {
            selected.push(var);
        }
    }

    for var in vars::ALL {
        if categories.contains(&var.category) && !selected.contains(&var) {
            selected.push(var);
        }
    }

    Ok(selected)
}

fn check<S: EnvSource>(env: &Env<S>, selected: &[&'static EnvVar]) -> Result<()> {
    let mut missing = 0;
    for var in selected {
        match env.get(var) {
            Ok(_) => debug!("{var} is set"),
            Err(err) if err.is_missing() => {
                error!("{err}");
                missing += 1;
            }
            Err(err) => warn!("{err}"),
        }
    }

    if missing > 0 {
        return Err(Error::MissingVariables(missing));
    }

    info!("all {} variables are set", selected.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{descriptor::Category, env::Env, error::Error, source::MapEnv, vars};

    use super::{check, select};

    fn names(selected: &[&crate::descriptor::EnvVar]) -> Vec<&'static str> {
        selected.iter().map(|var| var.name).collect()
    }

    #[test]
    fn select_all_by_default() {
        let selected = select(&[], &[]).unwrap();
        assert_eq!(selected.len(), vars::ALL.len());
    }

    #[test]
    fn select_names_then_categories() {
        let selected = select(
            &["TEST_S3_REGION".to_owned(), "KBC_MANAGE_API_URL".to_owned()],
            &[Category::S3],
        )
        .unwrap();

        assert_eq!(
            names(&selected),
            [
                "TEST_S3_REGION",
                "KBC_MANAGE_API_URL",
                "TEST_S3_ACCESS_KEY",
                "TEST_S3_SECRET_KEY",
                "TEST_S3_ROTATE_ACCESS_KEY",
                "TEST_S3_ROTATE_SECRET_KEY",
                "TEST_S3_FILES_BUCKET",
            ]
        );
    }

    #[test]
    fn select_unknown_name() {
        let err = select(&["NOT_A_VARIABLE".to_owned()], &[]).unwrap_err();
        assert!(matches!(err, Error::UnknownVariable(name) if name == "NOT_A_VARIABLE"));
    }

    #[test]
    fn counts_missing() {
        let env = Env::new(
            MapEnv::new()
                .with("TEST_GCS_KEYFILE_JSON", "{}")
                .with("TEST_GCS_REGION", ""),
        );
        let selected = select(&[], &[Category::Gcs]).unwrap();

        let err = check(&env, &selected).unwrap_err();
        assert!(matches!(err, Error::MissingVariables(3)));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_counts_as_set() {
        use std::{ffi::OsString, os::unix::ffi::OsStringExt};

        let env = Env::new(MapEnv::new().with(
            "TEST_GCS_KEYFILE_JSON",
            OsString::from_vec(vec![0x7b, 0x80, 0x7d]),
        ));
        let selected = select(&[], &[Category::Gcs]).unwrap();
        assert_eq!(selected[0].name, "TEST_GCS_KEYFILE_JSON");

        let err = check(&env, &selected).unwrap_err();
        assert!(matches!(err, Error::MissingVariables(3)));
        assert_eq!(env.missing(selected.iter().copied()).len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_alone_passes() {
        use std::{ffi::OsString, os::unix::ffi::OsStringExt};

        let env = Env::new(
            MapEnv::new().with("TEST_S3_REGION", OsString::from_vec(vec![0xff])),
        );
        let selected = select(&["TEST_S3_REGION".to_owned()], &[]).unwrap();
        assert!(check(&env, &selected).is_ok());
    }

    #[test]
    fn passes_when_set() {
        let env = Env::new(MapEnv::new().with("KBC_MANAGE_API_URL", "https://example.com"));
        let selected = select(&["KBC_MANAGE_API_URL".to_owned()], &[]).unwrap();
        assert!(check(&env, &selected).is_ok());
    }
}
