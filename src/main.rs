use std::process::ExitCode;

fn main() -> ExitCode {
    match apiload::entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            apiload::entry::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
