pub mod error;
pub mod export;
pub mod simulation;

use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use error::QuizError;

/// Number of questions answered correctly in one attempt.
pub type Score = usize;

/// One of the four labels a multiple-choice question can be answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    /// The answer alphabet. Correct answers and guesses are both drawn from here.
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    pub fn label(&self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Choice {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Choice::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| QuizError::UnknownChoice(s.to_string()))
    }
}

impl Distribution<Choice> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
    }
}

/// Anything that can hand out answer labels.
///
/// Every `rand::Rng` is a uniform source; tests plug in fixed sequences instead.
pub trait ChoiceSource {
    fn draw_choice(&mut self) -> Choice;
}

impl<R: Rng> ChoiceSource for R {
    fn draw_choice(&mut self) -> Choice {
        self.gen()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    correct_answer: Choice,
}

impl Question {
    pub fn new(correct_answer: Choice) -> Self {
        Self { correct_answer }
    }

    /// Picks the correct answer, consuming one draw from `source`.
    pub fn generate<S: ChoiceSource + ?Sized>(source: &mut S) -> Self {
        Self::new(source.draw_choice())
    }

    pub fn correct_answer(&self) -> Choice {
        self.correct_answer
    }

    pub fn check_answer(&self, guessed_answer: Choice) -> bool {
        guessed_answer == self.correct_answer
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Builds `count` independent questions. An empty quiz is fine and always scores 0.
    pub fn generate<S: ChoiceSource + ?Sized>(count: usize, source: &mut S) -> Self {
        Self::new((0..count).map(|_| Question::generate(source)).collect())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Guesses every question once and counts the hits.
    pub fn take<S: ChoiceSource + ?Sized>(&self, guesses: &mut S) -> Score {
        self.questions
            .iter()
            .filter(|question| question.check_answer(guesses.draw_choice()))
            .count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Always hands out the same label.
    pub(crate) struct Always(pub Choice);

    impl ChoiceSource for Always {
        fn draw_choice(&mut self) -> Choice {
            self.0
        }
    }

    /// Replays a fixed script, wrapping around at the end.
    pub(crate) struct Scripted {
        script: Vec<Choice>,
        next: usize,
    }

    impl Scripted {
        pub(crate) fn new(script: &str) -> Self {
            let script = script
                .chars()
                .map(|c| c.to_string().parse::<Choice>().unwrap())
                .collect();
            Self { script, next: 0 }
        }
    }

    impl ChoiceSource for Scripted {
        fn draw_choice(&mut self) -> Choice {
            let choice = self.script[self.next % self.script.len()];
            self.next += 1;
            choice
        }
    }

    #[test]
    fn all_wrong_guesses_score_zero() {
        let quiz = Quiz::generate(5, &mut Always(Choice::A));
        assert_eq!(quiz.take(&mut Always(Choice::B)), 0);
    }

    #[test]
    fn all_right_guesses_score_full_marks() {
        let quiz = Quiz::generate(5, &mut Always(Choice::A));
        assert_eq!(quiz.take(&mut Always(Choice::A)), 5);
    }

    #[test]
    fn guesses_are_matched_position_by_position() {
        let quiz = Quiz::generate(4, &mut Scripted::new("ABCD"));
        assert_eq!(quiz.take(&mut Scripted::new("ABDD")), 3);
        assert_eq!(quiz.take(&mut Scripted::new("DCBA")), 0);
    }

    #[test]
    fn empty_quiz_scores_zero_without_drawing() {
        let quiz = Quiz::generate(0, &mut Always(Choice::C));
        assert!(quiz.is_empty());

        let mut guesses = Scripted::new("C");
        assert_eq!(quiz.take(&mut guesses), 0);
        assert_eq!(guesses.next, 0);
    }

    #[test]
    fn check_answer_is_plain_equality() {
        let question = Question::new(Choice::C);
        assert!(question.check_answer(Choice::C));
        for guess in [Choice::A, Choice::B, Choice::D] {
            assert!(!question.check_answer(guess));
        }
    }

    #[test]
    fn choice_parses_its_own_labels() {
        for choice in Choice::ALL {
            assert_eq!(choice.to_string().parse::<Choice>().unwrap(), choice);
        }
        assert_eq!(" b ".parse::<Choice>().unwrap(), Choice::B);
        assert!(matches!("E".parse::<Choice>(), Err(QuizError::UnknownChoice(_))));
    }

    #[test]
    fn uniform_draws_cover_the_whole_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts = [0usize; 4];
        for _ in 0..40_000 {
            let choice = rng.draw_choice();
            counts[Choice::ALL.iter().position(|c| *c == choice).unwrap()] += 1;
        }
        for count in counts {
            // 10_000 expected per label
            assert!((9_500..=10_500).contains(&count), "counts: {:?}", counts);
        }
    }

    #[test]
    fn same_seed_builds_the_same_quiz() {
        let a = Quiz::generate(20, &mut ChaCha8Rng::seed_from_u64(1));
        let b = Quiz::generate(20, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }
}
