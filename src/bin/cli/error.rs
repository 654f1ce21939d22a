use thiserror::Error;

use colortable::TableError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    TableError(#[from] TableError),
    #[error("could not set up logging\n{0}")]
    LoggingError(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("no color table given (use --preset or --input)")]
    MissingTable,
    #[error("no output path given")]
    MissingOutput,
}
