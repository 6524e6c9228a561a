use std::sync::Arc;

use clap::Parser;
use common::{config::AppConfig, logging, AppError, Result};
use fetcher::{FetchError, ProfileFetcher, RestGithubClient};
use normalizer::models::UserProfile;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roast::{RoastNarrative, StatsSummary};
use tracing::{info, Level};

#[derive(Debug, Parser)]
#[command(name = "gitshame", about = "Roast a GitHub user's recent public activity")]
struct Args {
    /// GitHub login to roast
    username: String,
    /// Pin the random draws (worst-commit pick and phrasing) for
    /// reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging(Level::INFO);
    let args = Args::parse();
    let config = AppConfig::load()?;

    let client = Arc::new(RestGithubClient::new(&config.github).map_err(AppError::http)?);
    let service = ProfileFetcher::new(client, config.fetcher.clone());

    let dataset = match service.fetch_dataset(&args.username).await {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("{}", user_facing_message(&err));
            std::process::exit(1);
        }
    };

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stats = roast::process(&dataset.events, &dataset.repos, &mut rng);
    let narrative = roast::generate(&stats);
    info!(
        login = %dataset.profile.login,
        commits = stats.commits,
        streak = stats.streak,
        "roast ready"
    );

    render(&dataset.profile, &stats, &narrative, &mut rng);
    Ok(())
}

fn user_facing_message(err: &FetchError) -> &'static str {
    match err {
        FetchError::NotFound => "User not found",
        FetchError::RateLimited => "Rate limit exceeded. Try again later.",
        FetchError::Network(_) | FetchError::Decode(_) => "Network error",
    }
}

fn render<R: Rng + ?Sized>(
    profile: &UserProfile,
    stats: &StatsSummary,
    narrative: &RoastNarrative,
    rng: &mut R,
) {
    for slide in &narrative.slides {
        println!("== {} ==", slide.title);
        println!("  [{}]", slide.stat);
        println!("  \"{}\"", slide.pick(rng));
        println!();
    }

    println!("== Final Verdict ==");
    println!("  @{}", profile.login);
    println!("  \"{}\"", narrative.final_verdict.pick(rng));
    println!();
    println!(
        "  Commits: {}   Issues: {}",
        stats.commits,
        stats.issues_opened.saturating_add(stats.issues_closed)
    );
}
