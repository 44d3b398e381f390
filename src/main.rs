mod args;
mod config;

use ccr::Result;

fn main() -> Result {
    config::configure_logging()?;

    log::debug!("Application configured. Parsing arguments...");

    let input = args::parse_input_args()?;
    log::debug!("Parsed input args: {input:?}");

    let response = input.parse_response()?;
    log::debug!("Built credit check response: {response:?}");

    println!("{response}");

    log::debug!("Application finished successfully!");

    Ok(())
}
