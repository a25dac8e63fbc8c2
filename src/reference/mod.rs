use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use url::Url;

use crate::error::{Error, Result};
use crate::provider::ProviderKind;


/// `user@host:path`, the SCP-like shorthand accepted by git over SSH.
static SCP_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<user>[^@/\s]+)@(?P<host>[^:/\s]+):(?P<path>[^\s]*)$")
        .expect("SCP-like pattern is valid")
});

/// Transport scheme of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    Https,
    /// SSH, including rewritten SCP-like references.
    Ssh,
}

impl Scheme {
    fn parse(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            "ssh" => Some(Self::Ssh),
            _ => None,
        }
    }

    /// True for `http` and `https`.
    pub const fn is_web(self) -> bool {
        matches!(self, Self::Http | Self::Https)
    }
}

/// A reference broken into its parts. Lives only for the duration of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Validated transport scheme.
    pub scheme: Scheme,
    /// Hostname as it appeared in the reference.
    pub host: String,
    /// Port, only when spelled out in the input and not the scheme default.
    pub port: Option<u16>,
    /// URI path after normalisation, still percent-encoded.
    pub path: String,
    /// Non-empty, percent-decoded path segments in order.
    pub segments: Vec<String>,
    /// The reference exactly as the caller supplied it.
    pub raw: String,
}

/// Rewrite SCP-like shorthand to `ssh://host/path` and drop trailing slashes and `.git`.
///
/// Inputs that are not SCP-like pass through untouched apart from the suffix.
pub fn normalize(raw: &str) -> String {
    let raw = raw.trim();
    let mut rewritten = SCP_LIKE.captures(raw).map_or_else(
        || raw.to_string(),
        |caps| {
            let path = caps["path"].trim_start_matches('/');
            format!("ssh://{}/{path}", &caps["host"])
        },
    );
    let trimmed = rewritten.trim_end_matches('/').len();
    rewritten.truncate(trimmed);
    if let Some(len) = rewritten.strip_suffix(".git").map(str::len) {
        rewritten.truncate(len);
    }
    rewritten
}

/// Split a URI path on `/`, dropping empty segments and decoding percent escapes.
pub fn segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect()
}

/// Normalise and parse `raw`, then decide which provider dialect applies.
///
/// A recognised `hint` always wins over the hostname. Without a hint the
/// provider is inferred from the hostname, falling back to
/// [`ProviderKind::Generic`].
pub fn classify(raw: &str, hint: Option<&str>) -> Result<(ProviderKind, ParsedReference)> {
    let normalized = normalize(raw);

    let url = Url::parse(&normalized).map_err(|source| Error::UnparsableReference {
        input: raw.to_string(),
        source: Some(source),
    })?;

    let scheme = Scheme::parse(url.scheme()).ok_or_else(|| Error::InvalidScheme {
        scheme: url.scheme().to_string(),
    })?;

    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| Error::UnparsableReference {
            input: raw.to_string(),
            source: None,
        })?
        .to_string();

    let provider =
        ProviderKind::from_hint(hint)?.unwrap_or_else(|| ProviderKind::infer_from_host(&host));
    log::trace!("classified {raw:?} as {provider} ({scheme:?} on {host})");

    Ok((
        provider,
        ParsedReference {
            scheme,
            host,
            port: url.port(),
            path: url.path().to_string(),
            segments: segments(url.path()),
            raw: raw.to_string(),
        },
    ))
}
