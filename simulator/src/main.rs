use anyhow::{Context, Result};
use clap::Parser;
use daruma_simulator::{run_batch, MatchSetup};
use daruma_types::{CooldownBonusFactors, GameConfig, PopulationStats, DEFAULT_BASE_COOLDOWN_SECS};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "daruma-simulator", about = "Run daruma matches locally")]
struct Args {
    /// Human seats per match.
    #[arg(long, default_value_t = 1)]
    humans: usize,

    /// Seed the channel NPC as an extra seat.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    fill_npc: bool,

    /// Matches to run (consecutive seeds).
    #[arg(long, default_value_t = 1)]
    matches: u64,

    /// Seed of the first match.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maximum rounds before a match resolves without a winner.
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Base cooldown in seconds fed to the cooldown factory.
    #[arg(long, default_value_t = DEFAULT_BASE_COOLDOWN_SECS)]
    base_cooldown_secs: u64,

    /// Full match reports to keep in the summary.
    #[arg(long, default_value_t = 8)]
    keep_reports: usize,

    /// Pretty-print the JSON summary.
    #[arg(long)]
    pretty: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();
}

fn build_setup(args: &Args) -> Result<MatchSetup> {
    let mut config = GameConfig::default();
    if let Some(max_rounds) = args.max_rounds {
        config.max_rounds = max_rounds;
    }
    config.validate().context("invalid game configuration")?;

    let factors = CooldownBonusFactors::default();
    factors.validate().context("invalid cooldown factors")?;

    Ok(MatchSetup {
        humans: args.humans,
        fill_npc: args.fill_npc,
        channel_id: 1,
        match_seed: args.seed,
        config,
        factors,
        // A fixed synthetic population; production supplies real medians
        // from an aggregation query.
        stats: PopulationStats {
            median_games_played: 10,
            median_wallet_count: 2,
            median_rank_score: 100,
        },
        base_cooldown_secs: args.base_cooldown_secs,
    })
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let setup = build_setup(&args)?;

    info!(
        humans = setup.humans,
        fill_npc = setup.fill_npc,
        matches = args.matches,
        "starting batch"
    );
    let summary = run_batch(&setup, args.matches, args.keep_reports)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{json}");
    Ok(())
}
