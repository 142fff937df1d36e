mod aggregate;
mod cache;
mod cli;
mod config;
mod error;
mod github;
mod listing;
mod report;

use clap::Parser;

use crate::cache::{LanguageCache, paths};
use crate::cli::Args;
use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = Config::from_env()?;
    let mut client = GitHubClient::new(&config.token)?;

    let repos = listing::list_repositories(&mut client, &config).await?;
    println!("\nFound {} repositories. Analyzing languages...", repos.len());

    let today = cache::today();
    let mut lang_cache = LanguageCache::load(paths::languages_path(&config.username), &today);
    let agg = aggregate::aggregate(&mut client, &repos, args.include_forks(), &mut lang_cache).await;
    lang_cache.persist(&today);

    let rate = client.rate_limit();
    log::debug!(
        "rate limit: {}/{} remaining, window resets at {}",
        rate.remaining,
        rate.limit,
        rate.reset
    );

    if agg.totals.is_empty() {
        println!("\nNo language data found in your repositories.");
        return Ok(());
    }

    let ranked = report::rank(&agg.totals, args.top_n);
    println!("\n{}", report::render_summary(&ranked, agg.grand_total()));
    println!(
        "\n{}",
        report::render_table(&repos, &agg.used, &ranked, args.include_forks())
    );

    Ok(())
}
