use std::path::PathBuf;
use thiserror::Error;

use crate::store::{MovieId, PersonId};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error in file {file}: {source}")]
    Csv { file: PathBuf, source: csv::Error },
    #[error("Missing dataset file {file}")]
    MissingFile { file: PathBuf },
}

#[derive(Debug, Error)]
pub enum DegreesError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Unknown person id `{0}`")]
    UnknownPerson(PersonId),

    #[error("Unknown movie id `{0}`")]
    UnknownMovie(MovieId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
