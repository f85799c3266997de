use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use quiz_sim::quiz::error::QuizError;
use quiz_sim::quiz::export::{save_results_to_csv, DEFAULT_OUTPUT};
use quiz_sim::quiz::simulation::{
    simulate_many_quizzes, SimulationConfig, DEFAULT_ATTEMPTS, DEFAULT_PASSING_SCORE,
    DEFAULT_QUESTIONS,
};

/// Simulates random guessing on a four-option multiple-choice quiz.
#[derive(Debug, Parser)]
#[command(name = "quiz-sim", version)]
struct Args {
    /// Number of quizzes to simulate
    #[arg(short = 'n', long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Minimum number of correct guesses that counts as a pass
    #[arg(short, long, default_value_t = DEFAULT_PASSING_SCORE)]
    passing_score: usize,

    /// Questions per quiz
    #[arg(short, long, default_value_t = DEFAULT_QUESTIONS)]
    questions: usize,

    /// CSV file the scores are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Also print how many attempts landed on each score
    #[arg(long)]
    histogram: bool,
}

impl Args {
    fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            attempts: self.attempts,
            passing_score: self.passing_score,
            questions: self.questions,
        }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let config = args.simulation_config();
    // Fail before drawing anything.
    config.validate()?;

    let mut rng = args.rng();
    let outcome = simulate_many_quizzes(&config, &mut rng)?;

    println!("{}", outcome);
    if args.histogram {
        println!("{}", outcome.render_distribution());
    }
    info!(
        "Simulation finished: {} of {} attempts passed, mean score {:.2}",
        outcome.passes(),
        outcome.attempts(),
        outcome.mean_score()
    );

    save_results_to_csv(outcome.scores(), &args.output)?;
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();
    info!("Starting quiz simulation...");

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
