#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! Environment variables required by the Keboola Manage API test suite.
//!
//! Every variable has a [`EnvVar`] descriptor in [`vars`] and a getter that
//! reads it from the process environment:
//!
//! ```no_run
//! let url = kbc_test_env::vars::manage_api_url()?;
//! # Ok::<(), kbc_test_env::Error>(())
//! ```
//!
//! Use [`Env`] with a [`MapEnv`] to read from an in-memory environment instead.

pub mod cli;
pub mod descriptor;
pub mod env;
pub mod error;
pub mod source;
pub mod vars;

mod logger;

pub use descriptor::{Category, EnvVar};
pub use env::{get, Env};
pub use error::{Error, Result};
pub use source::{EnvSource, MapEnv, ProcessEnv};
