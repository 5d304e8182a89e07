pub mod config;
pub mod error;
pub mod github;
pub mod resolver;

pub use config::Config;
pub use error::{Error, Result};
pub use github::{Release, RepoSlug};
pub use resolver::{get_last_release, LastRelease};

pub fn get_error_chain(err: &anyhow::Error) -> String {
    err.chain()
        .rev()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" => ")
}
