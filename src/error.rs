use std::fmt;

#[derive(Debug)]
pub enum Error {
    MissingEndpoint(String),
    UnknownAlgorithm(String),
    UnknownHeuristic(String),
    UnknownRoutingMode(String),
    InvalidMapParameters(String),
    NoPath { source: String, destination: String },
    SameSourceAndDestination(String),
    InvalidData(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingEndpoint(name) => {
                write!(f, "Cannot add edge: missing endpoint '{name}'")
            }
            Error::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: {name}"),
            Error::UnknownHeuristic(name) => write!(f, "Unknown heuristic: {name}"),
            Error::UnknownRoutingMode(name) => write!(f, "Unknown routing mode: {name}"),
            Error::InvalidMapParameters(msg) => write!(f, "Invalid map parameters: {msg}"),
            Error::NoPath {
                source,
                destination,
            } => write!(f, "No path between '{source}' and '{destination}'"),
            Error::SameSourceAndDestination(name) => {
                write!(f, "Source and destination are the same node: '{name}'")
            }
            Error::InvalidData(msg) => write!(f, "Invalid data: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
