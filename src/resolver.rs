use reqwest::Client;
use semver::Version;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Config,
    error::{Error, Result},
    github::{self, Release, RepoSlug},
};

/// The baseline for the next release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastRelease {
    /// The release tag without its leading `v`.
    ///
    /// Tags that do not start with `v` are kept whole, no other character is
    /// removed.
    pub version: String,
    #[serde(rename = "gitHead")]
    pub git_head: String,
}

impl LastRelease {
    pub fn semver(&self) -> std::result::Result<Version, semver::Error> {
        Version::parse(&self.version)
    }
}

impl From<Release> for LastRelease {
    fn from(release: Release) -> Self {
        // skip v (in 'v0.0.1')
        let version = match release.tag_name.strip_prefix('v') {
            Some(version) => version.to_string(),
            None => release.tag_name,
        };

        Self {
            version,
            git_head: release.target_commitish,
        }
    }
}

/// Fetches the newest release of the configured repository.
///
/// `plugin_config` and `semver_config` belong to the host's plugin contract and
/// are not read. Nothing is sent if the repository url or token is missing.
pub async fn get_last_release(
    client: &Client,
    config: &Config,
    _plugin_config: &Value,
    _semver_config: &Value,
) -> Result<LastRelease> {
    let Some(repo_url) = config.repo_url.as_deref() else {
        return Err(Error::MissingRepoUrl);
    };
    let Some(token) = config.token.as_deref() else {
        return Err(Error::MissingToken);
    };

    let slug = RepoSlug::parse(repo_url)?;
    let releases = github::list_releases(client, &config.api_url, token, &slug, 1, 1).await?;

    releases
        .into_iter()
        .next()
        .map(LastRelease::from)
        .ok_or(Error::NoDistTag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(tag_name: &str) -> Release {
        Release {
            tag_name: tag_name.to_string(),
            target_commitish: "commit-hash".to_string(),
        }
    }

    #[test]
    fn strips_single_v() {
        for (tag, version) in [
            ("v1.1.0", "1.1.0"),
            ("v0.0.1-beta.2", "0.0.1-beta.2"),
            ("vv2.0.0", "v2.0.0"),
            ("v", ""),
        ] {
            assert_eq!(LastRelease::from(release(tag)).version, version, "{tag}");
        }
    }

    #[test]
    fn untagged_version_is_kept() {
        assert_eq!(LastRelease::from(release("1.2.3")).version, "1.2.3");
    }

    #[test]
    fn git_head_is_verbatim() {
        let last = LastRelease::from(Release {
            tag_name: "v1.0.0".to_string(),
            target_commitish: "refs/heads/main".to_string(),
        });
        assert_eq!(last.git_head, "refs/heads/main");
    }

    #[test]
    fn semver_view() {
        let last = LastRelease::from(release("v1.1.0"));
        assert_eq!(last.semver().unwrap(), Version::new(1, 1, 0));
        assert!(LastRelease::from(release("vnext")).semver().is_err());
    }

    #[test]
    fn serializes_git_head_in_camel_case() {
        let json = serde_json::to_value(LastRelease::from(release("v1.1.0"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "version": "1.1.0", "gitHead": "commit-hash" })
        );
    }

    #[tokio::test]
    async fn missing_repo_url_is_checked_first() {
        let config = Config::new(None, None);
        let err = get_last_release(&Client::new(), &config, &Value::Null, &Value::Null)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingRepoUrl));
    }

    #[tokio::test]
    async fn malformed_url_fails_before_request() {
        // unroutable, a request would fail with Error::Http instead
        let config = Config::new(Some("bar".into()), Some("token".into()))
            .with_api_url("http://127.0.0.1:9");
        let err = get_last_release(&Client::new(), &config, &Value::Null, &Value::Null)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "EINVALIDREPOURL");
    }
}
