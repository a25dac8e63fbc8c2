use crate::error::Result;
use crate::links::LinkTemplate;
use crate::reference::ParsedReference;

use super::{Dialect, Extraction};

/// `namespace/.../repository` paths shared by GitHub, GitLab and unrecognised hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generic;

impl Dialect for Generic {
    fn extract(&self, reference: &ParsedReference) -> Result<Extraction> {
        let extraction = Extraction::new(LinkTemplate::Generic);
        let segments = &reference.segments;

        Ok(match segments.as_slice() {
            [] => extraction,
            [namespace] => extraction.namespace(namespace.as_str()),
            [groups @ .., repository] => extraction
                .namespace(groups.join("/"))
                .repository(repository.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::classify;

    fn extract(raw: &str) -> Extraction {
        let (_, parsed) = classify(raw, None).unwrap();
        Generic.extract(&parsed).unwrap()
    }

    #[test]
    fn test_whole_host() {
        let e = extract("https://github.com/");
        assert_eq!(e.namespace, "");
        assert_eq!(e.repository, "");
    }

    #[test]
    fn test_whole_namespace() {
        let e = extract("https://github.com/juice-shop");
        assert_eq!(e.namespace, "juice-shop");
        assert_eq!(e.repository, "");
    }

    #[test]
    fn test_namespace_and_repository() {
        let e = extract("git@github.com:juice-shop/juice-shop.git");
        assert_eq!(e.namespace, "juice-shop");
        assert_eq!(e.repository, "juice-shop");
        assert_eq!(e.pull_request_id, "");
        assert_eq!(e.template, LinkTemplate::Generic);
    }

    #[test]
    fn test_nested_groups() {
        let e = extract("https://gitlab.com/group/sub1/sub2/repo");
        assert_eq!(e.namespace, "group/sub1/sub2");
        assert_eq!(e.repository, "repo");
    }
}
