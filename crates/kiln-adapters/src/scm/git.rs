//! Git adapter built on `git2`. Never fetches or pushes.

use std::path::Path;

use git2::{ErrorCode, Repository};
use tracing::{debug, info, instrument};
use url::Url;

use kiln_core::{
    application::{ApplicationError, RemoteStatus, ScmOutcome, ports::SourceControl},
    error::KilnResult,
};

const ORIGIN: &str = "origin";
const ALLOWED_SCHEMES: [&str; 5] = ["http", "https", "ssh", "git", "file"];

#[derive(Debug, Clone, Copy, Default)]
pub struct GitInitializer;

impl GitInitializer {
    pub fn new() -> Self {
        Self
    }
}

impl SourceControl for GitInitializer {
    fn validate_remote(&self, url: &str) -> KilnResult<()> {
        Ok(validate_remote_url(url)?)
    }

    #[instrument(skip_all, fields(root = %root.display(), remote = ?remote))]
    fn initialize(&self, root: &Path, remote: Option<&str>) -> KilnResult<ScmOutcome> {
        if let Some(url) = remote {
            validate_remote_url(url)?;
        }

        let (repo, created) = match Repository::open(root) {
            Ok(repo) => {
                debug!("Reusing existing repository");
                (repo, false)
            }
            Err(e) if e.code() == ErrorCode::NotFound => {
                let repo = Repository::init(root).map_err(|e| scm_failed(root, &e))?;
                info!("Initialized git repository");
                (repo, true)
            }
            Err(e) => return Err(scm_failed(root, &e).into()),
        };

        let remote = match remote {
            None => RemoteStatus::NotRequested,
            Some(url) => configure_origin(&repo, root, url)?,
        };

        Ok(ScmOutcome::Configured {
            root: root.to_path_buf(),
            created,
            remote,
        })
    }
}

fn configure_origin(repo: &Repository, root: &Path, url: &str) -> KilnResult<RemoteStatus> {
    let status = match repo.find_remote(ORIGIN) {
        Ok(existing) if existing.url() == Some(url) => RemoteStatus::Unchanged,
        Ok(_) => {
            repo.remote_set_url(ORIGIN, url)
                .map_err(|e| scm_failed(root, &e))?;
            RemoteStatus::Updated
        }
        Err(e) if e.code() == ErrorCode::NotFound => {
            repo.remote(ORIGIN, url).map_err(|e| scm_failed(root, &e))?;
            RemoteStatus::Added
        }
        Err(e) => return Err(scm_failed(root, &e).into()),
    };
    debug!(?status, url, "Configured origin");
    Ok(status)
}

/// Accept `http`, `https`, `ssh`, `git` and `file` URLs, plus the scp-like
/// `user@host:path` form.
pub fn validate_remote_url(url: &str) -> Result<(), ApplicationError> {
    let invalid = |reason: String| ApplicationError::InvalidRemoteUrl {
        url: url.to_string(),
        reason,
    };

    if url.is_empty() {
        return Err(invalid("URL is empty".into()));
    }
    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid("URL contains whitespace".into()));
    }

    match Url::parse(url) {
        Ok(parsed) => {
            let scheme = parsed.scheme();
            if !ALLOWED_SCHEMES.contains(&scheme) {
                return Err(invalid(format!("unsupported scheme '{scheme}'")));
            }
            if scheme != "file" && parsed.host_str().is_none_or(str::is_empty) {
                return Err(invalid("missing host".into()));
            }
            Ok(())
        }
        Err(url::ParseError::RelativeUrlWithoutBase) if is_scp_like(url) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) => Err(invalid(
            "expected a URL with a scheme or user@host:path".into(),
        )),
        Err(e) => Err(invalid(e.to_string())),
    }
}

fn is_scp_like(url: &str) -> bool {
    let Some((user, rest)) = url.split_once('@') else {
        return false;
    };
    let Some((host, path)) = rest.split_once(':') else {
        return false;
    };
    !user.is_empty() && !host.is_empty() && !host.contains('/') && !path.is_empty()
}

fn scm_failed(root: &Path, e: &git2::Error) -> ApplicationError {
    ApplicationError::SourceControlFailed {
        path: root.to_path_buf(),
        reason: e.message().to_string(),
    }
}
