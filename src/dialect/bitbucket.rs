use crate::error::{Error, Result};
use crate::links::LinkTemplate;
use crate::reference::ParsedReference;

use super::{Dialect, Extraction};

/// Bitbucket Server (API v1 / on-prem) web-UI, SCM and SSH paths.
///
/// Shapes are tried in order, first match wins:
///
/// | shape            | scheme | segments                                               |
/// |------------------|--------|--------------------------------------------------------|
/// | whole host       | any    | *(none)*                                               |
/// | project          | http(s)| `projects/<project>`                                   |
/// | user repository  | http(s)| `users/<user>/repos/<repo>/...`                        |
/// | pull request     | http(s)| `projects/<project>/repos/<repo>/pull-requests/<id>/...` |
/// | repository       | http(s)| `projects/<project>/repos/<repo>/...`                  |
/// | SCM clone        | http(s)| `scm/<project>[/.../<repo>]`                           |
/// | SSH clone        | ssh    | `<project>[/.../<repo>]`                               |
#[derive(Debug, Clone, Copy, Default)]
pub struct BitbucketServer;

impl Dialect for BitbucketServer {
    fn extract(&self, reference: &ParsedReference) -> Result<Extraction> {
        let segments: Vec<&str> = reference.segments.iter().map(String::as_str).collect();

        if segments.is_empty() {
            return Ok(Extraction::new(LinkTemplate::BitbucketProject { port: None }));
        }

        if reference.scheme.is_web() {
            return extract_web(&segments).ok_or_else(|| Error::UnsupportedBitbucketPath {
                path: reference.path.clone(),
            });
        }

        // SSH: the input's own port, never another reference's.
        let template = LinkTemplate::BitbucketProject {
            port: reference.port,
        };
        Ok(match segments.as_slice() {
            [namespace] => Extraction::new(template).namespace(*namespace),
            [namespace, .., repository] => Extraction::new(template)
                .namespace(*namespace)
                .repository(*repository),
            [] => Extraction::new(template),
        })
    }
}

fn extract_web(segments: &[&str]) -> Option<Extraction> {
    let project = LinkTemplate::BitbucketProject { port: None };
    let user = LinkTemplate::BitbucketUser { port: None };

    let extraction = match segments {
        ["projects", namespace] => Extraction::new(project).namespace(*namespace),
        ["users", namespace, "repos", repository, ..] => Extraction::new(user)
            .namespace(*namespace)
            .repository(*repository),
        ["projects", namespace, "repos", repository, "pull-requests", id, ..] => {
            Extraction::new(project)
                .namespace(*namespace)
                .repository(*repository)
                .pull_request(*id)
        }
        ["projects", namespace, "repos", repository, ..] => Extraction::new(project)
            .namespace(*namespace)
            .repository(*repository),
        ["scm", namespace] => Extraction::new(project).namespace(*namespace),
        ["scm", namespace, .., repository] => Extraction::new(project)
            .namespace(*namespace)
            .repository(*repository),
        _ => return None,
    };
    Some(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::classify;

    fn extract(raw: &str) -> Result<Extraction> {
        let (_, parsed) = classify(raw, Some("bitbucket"))?;
        BitbucketServer.extract(&parsed)
    }

    #[test]
    fn test_whole_host() {
        let e = extract("https://bitbucket.example.com").unwrap();
        assert_eq!(e.namespace, "");
        assert_eq!(e.repository, "");
    }

    #[test]
    fn test_project_page() {
        let e = extract("https://bitbucket.example.com/projects/PROJ").unwrap();
        assert_eq!(e.namespace, "PROJ");
        assert_eq!(e.repository, "");
    }

    #[test]
    fn test_user_repository() {
        let e = extract("https://bitbucket.example.com/users/jdoe/repos/dotfiles/browse").unwrap();
        assert_eq!(e.namespace, "jdoe");
        assert_eq!(e.repository, "dotfiles");
        assert_eq!(e.template, LinkTemplate::BitbucketUser { port: None });
    }

    #[test]
    fn test_pull_request() {
        let e = extract(
            "https://bitbucket.example.com/projects/PROJ/repos/repo/pull-requests/42/overview",
        )
        .unwrap();
        assert_eq!(e.namespace, "PROJ");
        assert_eq!(e.repository, "repo");
        assert_eq!(e.pull_request_id, "42");
    }

    #[test]
    fn test_repository_browse() {
        let e = extract("https://bitbucket.example.com/projects/PROJ/repos/repo/browse/src/main.rs")
            .unwrap();
        assert_eq!(e.namespace, "PROJ");
        assert_eq!(e.repository, "repo");
        assert_eq!(e.pull_request_id, "");
    }

    #[test]
    fn test_short_pull_requests_listing_is_a_repository() {
        let e = extract("https://bitbucket.example.com/projects/PROJ/repos/repo/pull-requests")
            .unwrap();
        assert_eq!(e.repository, "repo");
        assert_eq!(e.pull_request_id, "");
    }

    #[test]
    fn test_scm_clone_paths() {
        let e = extract("https://bitbucket.example.com/scm/PROJ/repo.git").unwrap();
        assert_eq!(e.namespace, "PROJ");
        assert_eq!(e.repository, "repo");

        let e = extract("https://bitbucket.example.com/scm/PROJ").unwrap();
        assert_eq!(e.namespace, "PROJ");
        assert_eq!(e.repository, "");
    }

    #[test]
    fn test_ssh_paths_keep_their_own_port() {
        let e = extract("ssh://git@bitbucket.example.com:7999/PROJ/repo.git").unwrap();
        assert_eq!(e.namespace, "PROJ");
        assert_eq!(e.repository, "repo");
        assert_eq!(e.template, LinkTemplate::BitbucketProject { port: Some(7999) });

        let e = extract("git@bitbucket.example.com:PROJ/repo.git").unwrap();
        assert_eq!(e.template, LinkTemplate::BitbucketProject { port: None });
    }

    #[test]
    fn test_ssh_namespace_only() {
        let e = extract("ssh://git@bitbucket.example.com/PROJ").unwrap();
        assert_eq!(e.namespace, "PROJ");
        assert_eq!(e.repository, "");
    }

    #[test]
    fn test_unknown_web_paths_fail() {
        for raw in [
            "https://bitbucket.example.com/PROJ/repo",
            "https://bitbucket.example.com/projects/PROJ/settings/permissions/x",
            "https://bitbucket.example.com/users/jdoe",
            "https://bitbucket.example.com/scm",
        ] {
            let err = extract(raw).unwrap_err();
            assert!(
                matches!(err, Error::UnsupportedBitbucketPath { .. }),
                "{raw} should be rejected, got {err:?}"
            );
        }
    }
}
