use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("GH_REPOSITORY_URL or CIRCLE_REPOSITORY_URL is requried")]
    MissingRepoUrl,

    #[error("GH_TOKEN is requried")]
    MissingToken,

    /// The url does not end in `owner/repo`.
    #[error("could not find owner and repository in `{0}`")]
    MalformedRepoUrl(String),

    /// The repository has no release yet.
    #[error("There is no release on GH yet. First make an initial release there.")]
    NoDistTag,

    #[error("github api responded with {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// A stable identifier callers can match on instead of the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRepoUrl => "ENOREPOURL",
            Self::MissingToken => "ENOGHTOKEN",
            Self::MalformedRepoUrl(_) => "EINVALIDREPOURL",
            Self::NoDistTag => "ENODISTTAG",
            Self::Api { .. } => "EGHAPI",
            Self::Http(_) => "EHTTP",
        }
    }

    /// Whether the error comes from missing or invalid configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingRepoUrl | Self::MissingToken | Self::MalformedRepoUrl(_)
        )
    }
}
