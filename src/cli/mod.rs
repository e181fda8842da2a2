mod check;
mod get;
mod list;

use std::process::ExitCode;

use clap::{
    builder::{styling::AnsiColor, Styles},
    ArgAction, Args, Parser, Subcommand,
};
use concolor_clap::ColorChoice;
use log::error;

use crate::{descriptor::Category, logger};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, propagate_version = true, styles = cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the environment variables the test suite reads
    List(ListArgs),

    /// Verify that required environment variables are set
    Check(CheckArgs),

    /// Print the value of one environment variable
    Get(GetArgs),
}

impl Command {
    fn global(&self) -> &GlobalArgs {
        match self {
            Command::List(args) => &args.global,
            Command::Check(args) => &args.global,
            Command::Get(args) => &args.global,
        }
    }
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Only list variables in this category
    #[arg(short = 'c', long, value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// Print the table as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Variables to check (or all variables if empty)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Check every variable in this category
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Variable to print
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// When to use color in output
    #[arg(long, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print more output
    #[arg(short, long, action = ArgAction::Count, group = "verbosity")]
    pub verbose: u8,

    /// Print less output
    #[arg(short, long, action = ArgAction::Count, group = "verbosity")]
    pub quiet: u8,
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.command.global());

    let result = match cli.command {
        Command::List(args) => list::main(&args),
        Command::Check(args) => check::main(&args),
        Command::Get(args) => get::main(&args),
    };

    if let Err(err) = result {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logger(args: &GlobalArgs) {
    let level = logger::level_from_args(args.verbose, args.quiet);
    logger::init(level, args.color);
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightMagenta.on_default())
        .usage(AnsiColor::BrightMagenta.on_default())
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightCyan.on_default())
}
