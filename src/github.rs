use reqwest::{Client, Method, Url};
use serde::Deserialize;

use crate::error::{Error, Result};

/// A github release. Does not contain all fields.
///
/// See the github [docs](https://docs.github.com/en/rest/releases/releases?apiVersion=2022-11-28#list-releases) for more information
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub tag_name: String,
    /// The commit sha or branch the release was cut from.
    pub target_commitish: String,
}

/// Owner and name of a repository, taken from the end of its url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Takes the last two non-empty path segments of `url`.
    ///
    /// Scheme and host never count as segments, so `https://github.com/foo` is
    /// rejected. Input that is not an absolute url is split on `/` as is.
    /// Nothing is stripped from the segments, so `https://github.com/foo/bar.git`
    /// gives the repo `bar.git`.
    pub fn parse(url: &str) -> Result<Self> {
        let malformed = || Error::MalformedRepoUrl(url.to_string());

        let segments: Vec<String> = match Url::parse(url) {
            Ok(parsed) => parsed
                .path_segments()
                .ok_or_else(malformed)?
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            Err(_) => url
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        };
        let mut segments = segments.into_iter().rev();

        match (segments.next(), segments.next()) {
            (Some(repo), Some(owner)) => Ok(Self { owner, repo }),
            _ => Err(malformed()),
        }
    }
}

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Lists one page of releases, newest first.
pub async fn list_releases(
    client: &Client,
    api_url: &str,
    token: &str,
    slug: &RepoSlug,
    page: u32,
    per_page: u32,
) -> Result<Vec<Release>> {
    let url = format!("{api_url}/repos/{}/{}/releases", slug.owner, slug.repo);
    log::debug!("GET {url}?page={page}&per_page={per_page}");

    let request = client
        .request(Method::GET, &url)
        .query(&[("page", page), ("per_page", per_page)])
        .header("Accept", "application/vnd.github+json")
        .header("X-GitHub-Api-Version", "2022-11-28")
        .header("User-Agent", USER_AGENT)
        .bearer_auth(token)
        .build()?;

    let resp = client.execute(request).await?;
    match resp.status() {
        status if status.is_success() => Ok(resp.json().await?),
        status => Err(Error::Api {
            status,
            message: resp.text().await.map_or_else(
                |_| "no text could be parsed".to_string(),
                |t| t.trim().to_string(),
            ),
        }),
    }
}
