use std::fs::File;
use std::io;
use std::path::Path;

use log::info;

use super::error::QuizError;
use super::Score;

pub const DEFAULT_OUTPUT: &str = "quiz_results.csv";

/// One CSV row. The serde names double as the header.
#[derive(Debug, serde::Serialize)]
struct AttemptRecord {
    #[serde(rename = "Quiz Attempt")]
    attempt: usize,
    #[serde(rename = "Score")]
    score: Score,
}

/// Writes the header and one `attempt,score` row per score, numbering attempts from 1.
pub fn write_results<W: io::Write>(scores: &[Score], writer: W) -> Result<(), QuizError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    // An empty result set still gets its header.
    if scores.is_empty() {
        writer.write_record(["Quiz Attempt", "Score"])?;
    }
    for (i, &score) in scores.iter().enumerate() {
        writer.serialize(AttemptRecord {
            attempt: i + 1,
            score,
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Saves the scores to `path`, replacing whatever was there.
pub fn save_results_to_csv<P: AsRef<Path>>(scores: &[Score], path: P) -> Result<(), QuizError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| QuizError::Export {
        path: path.to_path_buf(),
        source,
    })?;

    write_results(scores, file)?;

    info!("Saved {} results to {}", scores.len(), path.display());
    Ok(())
}
