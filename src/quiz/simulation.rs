use std::fmt;

use log::{debug, trace};

use super::error::{ConfigError, QuizError};
use super::{ChoiceSource, Quiz, Score};

pub const DEFAULT_ATTEMPTS: usize = 1000;
pub const DEFAULT_PASSING_SCORE: Score = 3;
pub const DEFAULT_QUESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// How many quizzes to simulate.
    pub attempts: usize,
    /// Minimum score, inclusive, that counts as a pass.
    pub passing_score: Score,
    /// Questions per quiz.
    pub questions: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            passing_score: DEFAULT_PASSING_SCORE,
            questions: DEFAULT_QUESTIONS,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }
}

/// Scores of every simulated attempt, in attempt order, plus the pass tally.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    scores: Vec<Score>,
    passes: usize,
    passing_score: Score,
    questions: usize,
}

impl SimulationOutcome {
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn into_scores(self) -> Vec<Score> {
        self.scores
    }

    pub fn attempts(&self) -> usize {
        self.scores.len()
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn passing_score(&self) -> Score {
        self.passing_score
    }

    /// Fraction of attempts that reached the passing score, in `[0, 1]`.
    pub fn pass_rate(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.passes as f64 / self.scores.len() as f64
    }

    pub fn mean_score(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().sum::<Score>() as f64 / self.scores.len() as f64
    }

    /// `distribution()[k]` is the number of attempts that scored exactly `k`.
    pub fn distribution(&self) -> Vec<usize> {
        let mut counts = vec![0; self.questions + 1];
        for &score in &self.scores {
            counts[score] += 1;
        }
        counts
    }

    pub fn render_distribution(&self) -> String {
        let attempts = self.attempts().max(1) as f64;
        self.distribution()
            .iter()
            .enumerate()
            .map(|(score, count)| {
                format!(
                    "Score {}: {} ({:.2}%)",
                    score,
                    count,
                    *count as f64 / attempts * 100.0
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for SimulationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulated {} quizzes", self.attempts())?;
        write!(
            f,
            "Pass rate (score >= {}): {:.2}%",
            self.passing_score,
            self.pass_rate() * 100.0
        )
    }
}

/// Runs `config.attempts` fresh quizzes, drawing both the correct answers and the
/// guesses from `rng`.
pub fn simulate_many_quizzes<R: ChoiceSource + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationOutcome, QuizError> {
    run_attempts(config, || {
        let quiz = Quiz::generate(config.questions, rng);
        quiz.take(rng)
    })
}

/// Same as [`simulate_many_quizzes`], but correct answers and guesses come from
/// separate sources.
pub fn simulate_with_sources<A, G>(
    config: &SimulationConfig,
    answers: &mut A,
    guesses: &mut G,
) -> Result<SimulationOutcome, QuizError>
where
    A: ChoiceSource + ?Sized,
    G: ChoiceSource + ?Sized,
{
    run_attempts(config, || {
        let quiz = Quiz::generate(config.questions, answers);
        quiz.take(guesses)
    })
}

fn run_attempts(
    config: &SimulationConfig,
    mut attempt: impl FnMut() -> Score,
) -> Result<SimulationOutcome, QuizError> {
    config.validate()?;
    debug!("Simulating with {:?}", config);

    let mut scores = Vec::with_capacity(config.attempts);
    let mut passes = 0;

    for i in 0..config.attempts {
        let score = attempt();
        trace!("Attempt {} scored {}/{}", i + 1, score, config.questions);
        if score >= config.passing_score {
            passes += 1;
        }
        scores.push(score);
    }

    Ok(SimulationOutcome {
        scores,
        passes,
        passing_score: config.passing_score,
        questions: config.questions,
    })
}
