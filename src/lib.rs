//! Monte Carlo simulation of random guessing on a multiple-choice quiz.

pub mod quiz;
