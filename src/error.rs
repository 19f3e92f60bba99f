#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The underlying sink rejected a write or close.
    #[error("I/O failure in underlying sink: {0}")]
    Io(#[from] std::io::Error),
    /// Operation attempted after the sink was closed.
    #[error("sink is closed")]
    Closed,
    /// The metrics registry could not create or register a metric.
    #[error("metrics registry unavailable: {0}")]
    MetricsUnavailable(String),
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
