use super::*;

#[test]
fn test_hint_is_case_insensitive_and_trimmed() {
    assert_eq!(
        ProviderKind::from_hint(Some("  GitHub ")).unwrap(),
        Some(ProviderKind::GitHub)
    );
    assert_eq!(
        ProviderKind::from_hint(Some("BITBUCKET")).unwrap(),
        Some(ProviderKind::BitbucketServer)
    );
    assert_eq!(
        ProviderKind::from_hint(Some("gitlab")).unwrap(),
        Some(ProviderKind::GitLab)
    );
}

#[test]
fn test_blank_hint_means_infer() {
    assert_eq!(ProviderKind::from_hint(None).unwrap(), None);
    assert_eq!(ProviderKind::from_hint(Some("")).unwrap(), None);
    assert_eq!(ProviderKind::from_hint(Some("   ")).unwrap(), None);
}

#[test]
fn test_unknown_hint_is_rejected() {
    let err = ProviderKind::from_hint(Some("sourcehut")).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedProviderName { ref name } if name == "sourcehut"
    ));
}

#[test]
fn test_infer_from_host() {
    assert_eq!(ProviderKind::infer_from_host("github.com"), ProviderKind::GitHub);
    assert_eq!(
        ProviderKind::infer_from_host("github.acme.internal"),
        ProviderKind::GitHub
    );
    assert_eq!(
        ProviderKind::infer_from_host("GitLab.Example.com"),
        ProviderKind::GitLab
    );
    assert_eq!(
        ProviderKind::infer_from_host("bitbucket.corp.example"),
        ProviderKind::BitbucketServer
    );
    assert_eq!(
        ProviderKind::infer_from_host("git.example.com"),
        ProviderKind::Generic
    );
}

#[test]
fn test_default_hosts() {
    assert_eq!(ProviderKind::GitHub.default_host(), Some("github.com"));
    assert_eq!(ProviderKind::GitLab.default_host(), Some("gitlab.com"));
    assert_eq!(
        ProviderKind::BitbucketServer.default_host(),
        Some("bitbucket.org")
    );
    assert_eq!(ProviderKind::Generic.default_host(), None);
    assert_eq!(ProviderKind::Unknown.default_host(), None);
}

#[test]
fn test_display_matches_hint_grammar() {
    for kind in [
        ProviderKind::Generic,
        ProviderKind::GitHub,
        ProviderKind::GitLab,
        ProviderKind::BitbucketServer,
    ] {
        assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
    }
}

#[test]
fn test_generic_hint_is_accepted() {
    assert_eq!(
        ProviderKind::from_hint(Some(" Generic ")).unwrap(),
        Some(ProviderKind::Generic)
    );
}

#[test]
fn test_unknown_is_not_a_hint() {
    let err = ProviderKind::Unknown
        .to_string()
        .parse::<ProviderKind>()
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedProviderName { ref name } if name == "unknown"));
}
