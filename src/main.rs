use anyhow::Result;
use httpbatch::cli::get_matches;
use httpbatch::config::Config;
use httpbatch::execute::execute_batch;
use httpbatch::logging::init_logging;

fn main() -> Result<()> {
    let matches = get_matches(std::env::args_os());
    init_logging();

    let config = Config::new(
        matches.get_one::<String>("requests").map(String::as_str).unwrap_or_default(),
        matches.get_one::<String>("headers").map(String::as_str),
        matches.get_one::<String>("output").map(String::as_str).unwrap_or_default(),
    )?;
    tracing::debug!("{:?}", config);

    return execute_batch(&config);
}
