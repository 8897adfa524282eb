use std::process::ExitCode;

fn main() -> ExitCode {
    match gwtgen_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
