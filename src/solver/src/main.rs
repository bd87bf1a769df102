use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use word_hunt::config::SolverConfig;
use word_hunt::game::{BoardGenerator, GameEngine, SerializableSolution, Solution, Strategy};

/// Finds every word on a word hunt board and picks the ones worth entering.
#[derive(Parser, Debug)]
#[command(name = "word-hunt", version)]
struct Args {
    /// Word list, one word per line
    #[arg(long, env = "WORDHUNT_DICTIONARY", default_value = "wordlist")]
    dictionary: PathBuf,

    /// Board letters, row by row, without spaces
    #[arg(long, required_unless_present = "seed", conflicts_with = "seed")]
    board: Option<String>,

    /// Generate a random board from this seed instead
    #[arg(long)]
    seed: Option<String>,

    /// Override the complexity budget
    #[arg(long)]
    budget: Option<i64>,

    /// greedy, length, size[:min_length] or goal[:percent]
    #[arg(long)]
    strategy: Option<Strategy>,

    /// JSON config file; WORDHUNT_* variables still override it
    #[arg(long, env = "WORDHUNT_CONFIG")]
    config: Option<PathBuf>,

    /// Print the full solution as JSON
    #[arg(long)]
    json: bool,

    /// Also list the words that were left out
    #[arg(long)]
    show_unchosen: bool,

    /// Score the list through the last word you reached
    #[arg(long)]
    reached: Option<String>,

    #[arg(long, env = "WORDHUNT_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<SolverConfig> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::from_json_file(path)?.with_overrides(|key| env::var(key).ok()),
        None => SolverConfig::from_env(),
    };
    if let Some(budget) = args.budget {
        config.complexity_budget = budget;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    Ok(config)
}

fn print_solution(solution: &Solution, show_unchosen: bool) {
    println!("{}", solution.board());

    for group in solution.chosen_groups() {
        for candidate in group {
            println!("{}", candidate.word.to_uppercase());
        }
        println!();
    }

    if show_unchosen {
        println!("Other words:");
        for candidate in solution.unchosen_by_length() {
            println!("{}", candidate.word.to_uppercase());
        }
        println!();
    }

    let all = solution.all_stats();
    let chosen = solution.chosen_stats();
    println!("total reward: {}", all.total_reward);
    println!("total words: {}", all.num_words);
    println!("chosen reward: {}", chosen.total_reward);
    println!("chosen words: {}", chosen.num_words);
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = load_config(&args)?;
    info!(
        budget = config.complexity_budget,
        board_size = config.board_size,
        strategy = %config.strategy,
        "Configuration loaded"
    );

    info!("Loading dictionary from {}", args.dictionary.display());
    let engine = GameEngine::new(&args.dictionary, config)?;

    let board = match (&args.board, &args.seed) {
        (Some(letters), _) => engine.board_from_letters(letters.trim())?,
        (None, Some(seed)) => {
            info!("Generating board from seed {}", seed);
            BoardGenerator::new()?
                .generate_board(&mut BoardGenerator::seeded(seed), engine.config().board_size)?
        }
        (None, None) => anyhow::bail!("either --board or --seed is required"),
    };

    let solution = engine.solve(&board);

    if args.json {
        let serializable = SerializableSolution::from(&solution);
        println!("{}", serde_json::to_string_pretty(&serializable)?);
    } else {
        print_solution(&solution, args.show_unchosen);
    }

    if let Some(word) = &args.reached {
        let progress = solution.progress_through(&word.to_lowercase());
        println!(
            "score: {} similarity: {} words: {}",
            progress.reward, progress.similarity, progress.words
        );
    }

    Ok(())
}
