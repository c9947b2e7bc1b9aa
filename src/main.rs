use std::process::ExitCode;

fn main() -> ExitCode {
    typechart::cli::run()
}
