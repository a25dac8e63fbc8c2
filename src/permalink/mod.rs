use crate::error::{Error, Field, Result};
use crate::identity::RepositoryIdentity;
use crate::provider::ProviderKind;


/// Everything needed to link to a file (and optionally a line range) at a ref.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermalinkRequest {
    /// Dialect of the link.
    pub provider: ProviderKind,
    /// Host override. Required for [`ProviderKind::Generic`] and [`ProviderKind::Unknown`].
    pub host: Option<String>,
    /// Owning group, organisation or Bitbucket project.
    pub namespace: String,
    /// Repository name.
    pub project: String,
    /// Branch, tag or commit.
    pub git_ref: String,
    /// Repository-relative file path. Backslashes and a leading `/` are tolerated.
    pub file: String,
    /// 1-based first line; `0` or less means no anchor.
    pub start_line: i64,
    /// 1-based last line; `0` or less, or before `start_line`, means a single line.
    pub end_line: i64,
}

impl PermalinkRequest {
    /// A request pointing at `file` at `git_ref` in a resolved repository.
    pub fn for_identity(
        identity: &RepositoryIdentity,
        git_ref: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            provider: identity.provider,
            host: Some(identity.host.clone()),
            namespace: identity.namespace.clone(),
            project: identity.repository.clone(),
            git_ref: git_ref.into(),
            file: file.into(),
            ..Self::default()
        }
    }

    /// Anchor the link at `start..=end`.
    #[must_use]
    pub fn lines(mut self, start: i64, end: i64) -> Self {
        self.start_line = start;
        self.end_line = end;
        self
    }

    /// Build the link. See [`build`].
    pub fn build(&self) -> Result<String> {
        build(self)
    }
}

/// Build a provider-correct, browsable link for `request`.
pub fn build(request: &PermalinkRequest) -> Result<String> {
    let required = [
        (Field::Namespace, &request.namespace),
        (Field::Project, &request.project),
        (Field::Ref, &request.git_ref),
        (Field::File, &request.file),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(Error::MissingField(*field));
    }

    let host = request
        .host
        .as_deref()
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .or_else(|| request.provider.default_host())
        .ok_or(Error::MissingHost {
            provider: request.provider,
        })?;

    let file = request.file.replace('\\', "/");
    let file = file.trim_start_matches('/');
    let PermalinkRequest {
        namespace,
        project,
        git_ref,
        ..
    } = request;
    let lines = line_range(request.start_line, request.end_line);

    let link = match request.provider {
        ProviderKind::GitLab => {
            let anchor = lines.map_or_else(String::new, |range| match range {
                (start, end) if start == end => format!("#L{start}"),
                (start, end) => format!("#L{start}-{end}"),
            });
            format!("https://{host}/{namespace}/{project}/-/blob/{git_ref}/{file}{anchor}")
        }
        ProviderKind::BitbucketServer => {
            let anchor = lines.map_or_else(String::new, |range| match range {
                (start, end) if start == end => format!("#{start}"),
                (start, end) => format!("#{start}-{end}"),
            });
            format!("https://{host}/projects/{namespace}/repos/{project}/browse/{file}?at={git_ref}{anchor}")
        }
        ProviderKind::GitHub | ProviderKind::Generic | ProviderKind::Unknown => {
            let anchor = lines.map_or_else(String::new, |range| match range {
                (start, end) if start == end => format!("#L{start}"),
                (start, end) => format!("#L{start}-L{end}"),
            });
            format!("https://{host}/{namespace}/{project}/blob/{git_ref}/{file}{anchor}")
        }
    };

    log::debug!("built {} permalink {link}", request.provider);
    Ok(link)
}

/// Clamp a requested line range: `None` when there is no anchor at all, a
/// single line when the end is missing or before the start.
fn line_range(start: i64, end: i64) -> Option<(i64, i64)> {
    if start <= 0 {
        return None;
    }
    if end <= 0 || end < start {
        return Some((start, start));
    }
    Some((start, end))
}
