/// Default SSH port of Bitbucket Server.
pub const BITBUCKET_SSH_PORT: u16 = 7989;

/// The canonical clone links of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneLinks {
    /// HTTPS clone (or browse) link.
    pub http: String,
    /// SSH clone link.
    pub ssh: String,
}

/// How a dialect spells its clone links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTemplate {
    /// `namespace/repository` on GitHub, GitLab and unrecognised hosts.
    Generic,
    /// A repository owned by a Bitbucket project.
    BitbucketProject {
        /// Explicit SSH port from the input, if any.
        port: Option<u16>,
    },
    /// A repository in a Bitbucket user's personal space.
    BitbucketUser {
        /// Explicit SSH port from the input, if any.
        port: Option<u16>,
    },
}

impl LinkTemplate {
    /// Render the links, or `None` when there is no repository to link to.
    pub fn build(self, host: &str, namespace: &str, repository: &str) -> Option<CloneLinks> {
        if repository.is_empty() {
            return None;
        }
        let links = match self {
            Self::Generic => CloneLinks {
                http: format!("https://{host}/{namespace}/{repository}"),
                ssh: format!("ssh://git@{host}/{namespace}/{repository}.git"),
            },
            Self::BitbucketProject { port } => {
                let port = port.unwrap_or(BITBUCKET_SSH_PORT);
                CloneLinks {
                    http: format!("https://{host}/scm/{namespace}/{repository}.git"),
                    ssh: format!("ssh://git@{host}:{port}/{namespace}/{repository}.git"),
                }
            }
            Self::BitbucketUser { port } => {
                let port = port.unwrap_or(BITBUCKET_SSH_PORT);
                CloneLinks {
                    http: format!("https://{host}/users/{namespace}/repos/{repository}/browse"),
                    ssh: format!("ssh://git@{host}:{port}/~{namespace}/{repository}.git"),
                }
            }
        };
        Some(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_links() {
        let links = LinkTemplate::Generic
            .build("gitlab.com", "group/sub", "repo")
            .unwrap();
        assert_eq!(links.http, "https://gitlab.com/group/sub/repo");
        assert_eq!(links.ssh, "ssh://git@gitlab.com/group/sub/repo.git");
    }

    #[test]
    fn test_bitbucket_project_links_default_port() {
        let links = LinkTemplate::BitbucketProject { port: None }
            .build("bitbucket.example.com", "PROJ", "repo")
            .unwrap();
        assert_eq!(links.http, "https://bitbucket.example.com/scm/PROJ/repo.git");
        assert_eq!(links.ssh, "ssh://git@bitbucket.example.com:7989/PROJ/repo.git");
    }

    #[test]
    fn test_bitbucket_project_links_explicit_port() {
        let links = LinkTemplate::BitbucketProject { port: Some(7999) }
            .build("bitbucket.example.com", "PROJ", "repo")
            .unwrap();
        assert_eq!(links.ssh, "ssh://git@bitbucket.example.com:7999/PROJ/repo.git");
    }

    #[test]
    fn test_bitbucket_user_links() {
        let links = LinkTemplate::BitbucketUser { port: None }
            .build("bitbucket.example.com", "jdoe", "dotfiles")
            .unwrap();
        assert_eq!(
            links.http,
            "https://bitbucket.example.com/users/jdoe/repos/dotfiles/browse"
        );
        assert_eq!(
            links.ssh,
            "ssh://git@bitbucket.example.com:7989/~jdoe/dotfiles.git"
        );
    }

    #[test]
    fn test_no_links_without_repository() {
        assert_eq!(LinkTemplate::Generic.build("github.com", "acme", ""), None);
        assert_eq!(
            LinkTemplate::BitbucketProject { port: Some(22) }.build("h", "PROJ", ""),
            None
        );
    }
}
