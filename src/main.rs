use std::{env, process::exit, time::Duration};

use anyhow::Context;
use gh_last_release::{get_error_chain, get_last_release, Config, Error};
use reqwest::Client;
use serde_json::Value;
use tokio::runtime;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

async fn inner_main(json: bool) -> anyhow::Result<()> {
    let config = Config::from_env();
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("could not build http client")?;

    let last_release = get_last_release(&client, &config, &Value::Null, &Value::Null).await?;

    if let Err(err) = last_release.semver() {
        log::warn!("last release {} is not valid semver: {err}", last_release.version);
    }

    if json {
        println!("{}", serde_json::to_string(&last_release)?);
    } else {
        println!("version: {}", last_release.version);
        println!("gitHead: {}", last_release.git_head);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let has_flag = |flags: &[&str]| args.iter().any(|a| flags.contains(&a.as_str()));

    let level = if has_flag(&["-v", "--verbose"]) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let rt = runtime::Builder::new_current_thread()
        .enable_io()
        .enable_time()
        .build()?;

    if let Err(err) = rt.block_on(inner_main(has_flag(&["--json"]))) {
        let code = err.downcast_ref::<Error>().map_or("EUNKNOWN", Error::code);
        eprintln!("failed to get last release ({code})");
        eprintln!("errors: {}", get_error_chain(&err));
        exit(1);
    }

    Ok(())
}
