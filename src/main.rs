use std::process::ExitCode;

fn main() -> ExitCode {
    kbc_test_env::cli::main()
}
