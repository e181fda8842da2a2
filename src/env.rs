use crate::{
    descriptor::EnvVar,
    error::{Error, Result},
    source::{EnvSource, ProcessEnv},
};

/// Looks up descriptors in an [`EnvSource`].
///
/// Every call reads the source again, so changes made between calls are
/// observed. Unset and empty variables are both reported as
/// [`Error::MissingConfiguration`] with the same message.
#[derive(Debug, Clone, Default)]
pub struct Env<S = ProcessEnv> {
    source: S,
}

impl<S: EnvSource> Env<S> {
    pub fn new(source: S) -> Self {
        Env { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the value of `var`, unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::MissingConfiguration`] when the variable is unset or empty,
    /// [`Error::NotUnicode`] when its value is not valid UTF-8.
    pub fn get(&self, var: &EnvVar) -> Result<String> {
        let value = self
            .source
            .var_os(var.name)
            .filter(|value| !value.is_empty())
            .ok_or(Error::MissingConfiguration {
                name: var.name,
                description: var.description,
            })?;

        value
            .into_string()
            .map_err(|_| Error::NotUnicode { name: var.name })
    }

    pub fn is_set(&self, var: &EnvVar) -> bool {
        !matches!(self.get(var), Err(Error::MissingConfiguration { .. }))
    }

    /// Returns the variables that are unset or empty, in input order.
    pub fn missing<'a, I>(&self, vars: I) -> Vec<EnvVar>
    where
        I: IntoIterator<Item = &'a EnvVar>,
    {
        vars.into_iter()
            .filter(|var| !self.is_set(var))
            .copied()
            .collect()
    }

    /// Fails with the first missing variable, if any.
    ///
    /// # Errors
    ///
    /// [`Error::MissingConfiguration`] for the first unset or empty variable.
    pub fn check<'a, I>(&self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a EnvVar>,
    {
        for var in vars {
            match self.get(var) {
                Err(err) if err.is_missing() => return Err(err),
                _ => {}
            }
        }

        Ok(())
    }
}

/// Reads `var` from the process environment.
///
/// # Errors
///
/// See [`Env::get`].
pub fn get(var: &EnvVar) -> Result<String> {
    Env::new(ProcessEnv).get(var)
}
