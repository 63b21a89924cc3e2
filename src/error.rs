use snafu::Snafu;
use std::num::ParseIntError;

pub type RollcallResult<T> = Result<T, RollcallError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RollcallError {
    #[snafu(display("Error reaching the students service"))]
    Transport { source: reqwest::Error },
    #[snafu(display("Students service answered {status}"))]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
    #[snafu(display("Error decoding the students service response"))]
    Decode { source: reqwest::Error },
    #[snafu(display("Year must be a whole number, got {:?}", original))]
    ParseYear {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse env var `{}` as a number", name))]
    ParseNumber {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Unable to build HTTP client"))]
    BuildClient { source: reqwest::Error },
    #[snafu(display("Unable to listen on {}", address))]
    Bind {
        source: std::io::Error,
        address: String,
    },
    #[snafu(display("Error serving the app"))]
    Serve { source: std::io::Error },
}

impl RollcallError {
    /// The text shown to the user for this error: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::UnexpectedStatus {
                message: Some(message),
                ..
            } => message.clone(),
            Self::ParseYear { .. } => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}
