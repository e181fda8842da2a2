use clap::builder::styling::AnsiColor;
use log::info;
use serde::Serialize;

use crate::{
    descriptor::{Category, EnvVar},
    env::Env,
    error::Result,
    source::{EnvSource, ProcessEnv},
    vars,
};

use super::ListArgs;

#[derive(Serialize, Debug, PartialEq)]
struct Entry {
    name: &'static str,
    description: &'static str,
    category: Category,
    set: bool,
}

pub fn main(args: &ListArgs) -> Result<()> {
    let table = entries(&Env::new(ProcessEnv), args.category);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let width = table.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
    for entry in &table {
        let (status_style, status) = if entry.set {
            (AnsiColor::Green.on_default(), "set")
        } else {
            (AnsiColor::Red.on_default(), "unset")
        };
        let name_style = AnsiColor::Blue.on_default();
        info!(
            "{name_style}{:width$}{name_style:#} {status_style}{status:5}{status_style:#} [{}] {}",
            entry.name, entry.category, entry.description,
        );
    }

    Ok(())
}

fn entries<S: EnvSource>(env: &Env<S>, category: Option<Category>) -> Vec<Entry> {
    vars::ALL
        .iter()
        .filter(|var| category.is_none_or(|category| var.category == category))
        .map(|var| entry(env, var))
        .collect()
}

fn entry<S: EnvSource>(env: &Env<S>, var: &EnvVar) -> Entry {
    Entry {
        name: var.name,
        description: var.description,
        category: var.category,
        set: env.is_set(var),
    }
}
