use crate::{
    env::Env,
    error::{Error, Result},
    source::{EnvSource, ProcessEnv},
    vars,
};

use super::GetArgs;

pub fn main(args: &GetArgs) -> Result<()> {
    let value = lookup(&Env::new(ProcessEnv), &args.name)?;
    println!("{value}");
    Ok(())
}

fn lookup<S: EnvSource>(env: &Env<S>, name: &str) -> Result<String> {
    let var = vars::by_name(name).ok_or_else(|| Error::UnknownVariable(name.to_owned()))?;
    env.get(var)
}

#[cfg(test)]
mod tests {
    use crate::{env::Env, error::Error, source::MapEnv};

    use super::lookup;

    #[test]
    fn known_variable() {
        let env = Env::new(MapEnv::new().with("TEST_S3_REGION", "us-east-1"));
        assert_eq!(lookup(&env, "TEST_S3_REGION").unwrap(), "us-east-1");
    }

    #[test]
    fn missing_variable() {
        let env = Env::new(MapEnv::new());
        let err = lookup(&env, "TEST_S3_REGION").unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn unknown_variable() {
        let env = Env::new(MapEnv::new().with("HOME", "/root"));
        let err = lookup(&env, "HOME").unwrap_err();
        assert!(matches!(err, Error::UnknownVariable(name) if name == "HOME"));
    }
}
