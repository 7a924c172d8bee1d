use super::*;
use clap::Parser;
use std::ffi::OsString;

fn normalized(argv: &[&str]) -> Vec<String> {
    normalize_args(argv.iter().map(OsString::from))
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn normalize_rewrites_single_dash_flags() -> Result<(), String> {
    let args = normalized(&[
        "apiload",
        "http://localhost",
        "-totalCalls",
        "5",
        "-keepConnectsOpen",
        "-?",
    ]);
    let expected = [
        "apiload",
        "http://localhost",
        "--totalCalls",
        "5",
        "--keepConnectsOpen",
        "--help",
    ];
    if args != expected {
        return Err(format!("Unexpected args: {:?}", args));
    }
    Ok(())
}

#[test]
fn normalize_leaves_other_args_alone() -> Result<(), String> {
    let argv = ["apiload", "--totalCalls", "5", "-v", "-totalcalls", "http://x"];
    let args = normalized(&argv);
    if args != argv {
        return Err(format!("Unexpected args: {:?}", args));
    }
    Ok(())
}

#[test]
fn parse_args_defaults() -> Result<(), String> {
    let args = TesterArgs::try_parse_from(["apiload", "http://localhost"])
        .map_err(|err| err.to_string())?;

    let checks = [
        (args.url.as_deref() == Some("http://localhost"), "Unexpected url"),
        (args.total_calls.get() == 10_000, "Unexpected total_calls"),
        (args.num_threads.get() == 12, "Unexpected num_threads"),
        (args.sleep_time_ms == 0, "Unexpected sleep_time_ms"),
        (
            args.request_timeout_ms.get() == 10_000,
            "Unexpected request_timeout_ms",
        ),
        (
            args.connect_timeout_ms.is_none(),
            "Expected connect_timeout_ms to be None",
        ),
        (!args.reuse_connects, "Expected reuse_connects to be false"),
        (
            !args.keep_connects_open,
            "Expected keep_connects_open to be false",
        ),
        (args.config.is_none(), "Expected config to be None"),
        (!args.verbose, "Expected verbose to be false"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

#[test]
fn zero_workers_rejected() -> Result<(), String> {
    if TesterArgs::try_parse_from(["apiload", "http://localhost", "--numThreads", "0"]).is_ok() {
        return Err("Expected zero workers to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn positive_types_reject_zero() -> Result<(), String> {
    if PositiveU64::try_from(0).is_ok() || PositiveUsize::try_from(0).is_ok() {
        return Err("Zero must not be accepted".to_owned());
    }
    if "42".parse::<PositiveUsize>().ok().map(PositiveUsize::get) != Some(42) {
        return Err("Expected 42 to parse".to_owned());
    }
    Ok(())
}

#[test]
fn help_lists_every_single_dash_flag() -> Result<(), String> {
    use clap::CommandFactory;

    let help = TesterArgs::command().render_help().to_string();
    for flag in super::defaults::SINGLE_DASH_FLAGS {
        if !help.contains(&format!("  {} ", flag)) {
            return Err(format!("Help does not list {}:\n{}", flag, help));
        }
    }
    Ok(())
}
