use clap::{arg, command, value_parser, ArgAction, ArgMatches, Command};
use std::ffi::OsString;

const LONG_FLAGS: [&str; 3] = ["requests", "headers", "output"];

pub fn build_command() -> Command {
    return command!()
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            arg!(-r --requests <FILE>)
                .help("JSON requests file")
                .required(true)
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            arg!(-H --headers <FILE>)
                .help("Common headers file")
                .required(false)
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            arg!(-o --output <FILE>)
                .help("Output file")
                .required(true)
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        );
}

/// Rewrites single-dash long flags (`-requests x`, `-output=y`) to the
/// double-dash form clap expects. Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    return args
        .into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str() {
                Some(text) if is_single_dash_long_flag(text) => OsString::from(format!("-{}", text)),
                _ => arg,
            }
        })
        .collect();
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let name = match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => rest,
        _ => return false,
    };
    let name = name.split_once('=').map(|(name, _)| name).unwrap_or(name);
    return LONG_FLAGS.contains(&name);
}

/// Parses a raw argument list, including the program name.
pub fn get_matches<I, T>(args: I) -> ArgMatches
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    return build_command().get_matches_from(normalize_args(args));
}
