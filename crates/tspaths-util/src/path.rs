//! Slash-normalized path primitives.
//!
//! Every function here works on `/`-separated strings regardless of the host.
//! Windows-style input is converted with [`slash`] first when the injected
//! [`Platform`] says so. Nothing here touches the filesystem or reads the
//! process working directory.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Path convention used when normalizing and testing absoluteness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Posix,
    Windows,
}

impl Platform {
    /// The convention of the platform this binary was compiled for.
    #[must_use]
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "win32" => Ok(Self::Windows),
            other => Err(format!("unknown platform '{other}' (expected posix or windows)")),
        }
    }
}

/// Replace every backslash with a forward slash.
#[must_use]
pub fn slash(p: &str) -> Cow<'_, str> {
    if p.contains('\\') {
        Cow::Owned(p.replace('\\', "/"))
    } else {
        Cow::Borrowed(p)
    }
}

/// Normalize `p` for the given platform.
///
/// On [`Platform::Windows`] the path is slashed first and a leading drive
/// (`C:`) is kept out of `..` folding.
#[must_use]
pub fn normalize_path(p: &str, platform: Platform) -> String {
    match platform {
        Platform::Posix => normalize(p),
        Platform::Windows => {
            let slashed = slash(p);
            let (drive, rest) = split_drive(&slashed);
            if drive.is_empty() {
                normalize(rest)
            } else if rest.is_empty() {
                drive.to_string()
            } else {
                format!("{drive}{}", normalize(rest))
            }
        }
    }
}

/// POSIX normalization of a `/`-separated path.
///
/// Collapses repeated separators, drops `.` segments and folds `..` segments.
/// An absolute path never climbs above `/`. A trailing separator is kept and
/// an empty path becomes `.`.
#[must_use]
pub fn normalize(p: &str) -> String {
    if p.is_empty() {
        return ".".to_string();
    }

    let absolute = p.starts_with('/');
    let trailing = p.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in p.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let body = segments.join("/");
    if body.is_empty() {
        return match (absolute, trailing) {
            (true, _) => "/".to_string(),
            (false, true) => "./".to_string(),
            (false, false) => ".".to_string(),
        };
    }

    let mut out = String::with_capacity(body.len() + 2);
    if absolute {
        out.push('/');
    }
    out.push_str(&body);
    if trailing {
        out.push('/');
    }
    out
}

/// Whether `p` is absolute under the given platform's rules.
#[must_use]
pub fn is_absolute(p: &str, platform: Platform) -> bool {
    match platform {
        Platform::Posix => p.starts_with('/'),
        Platform::Windows => {
            let bytes = p.as_bytes();
            match bytes.first() {
                Some(b'/' | b'\\') => true,
                Some(c) if c.is_ascii_alphabetic() => {
                    bytes.len() >= 3 && bytes[1] == b':' && matches!(bytes[2], b'/' | b'\\')
                }
                _ => false,
            }
        }
    }
}

/// Join two `/`-separated paths and normalize the result.
///
/// Only call this on normalized paths.
#[must_use]
pub fn join(base: &str, segment: &str) -> String {
    match (base.is_empty(), segment.is_empty()) {
        (true, true) => ".".to_string(),
        (true, false) => normalize(segment),
        (false, true) => normalize(base),
        (false, false) => normalize(&format!("{base}/{segment}")),
    }
}

/// Resolve `p` against `base`.
///
/// An absolute `p` wins outright. On Windows a root-relative `p` (`/src`)
/// takes the drive of `base`. Unlike Node's `path.resolve`, a relative result
/// stays relative: the process working directory is never consulted.
#[must_use]
pub fn resolve(base: &str, p: &str, platform: Platform) -> String {
    if is_absolute(p, platform) {
        if platform == Platform::Windows && (p.starts_with('/') || p.starts_with('\\')) {
            let slashed_base = slash(base);
            let (drive, _) = split_drive(&slashed_base);
            if !drive.is_empty() {
                return normalize_path(&format!("{drive}{p}"), platform);
            }
        }
        return normalize_path(p, platform);
    }

    match platform {
        Platform::Posix => join(base, p),
        Platform::Windows => normalize_path(&join(&slash(base), &slash(p)), platform),
    }
}

/// Relative path from `from` to `to`.
///
/// Only call this on absolute, normalized paths. Identical paths give `""`.
#[must_use]
pub fn relative(from: &str, to: &str) -> String {
    let from_segments: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to_segments: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();

    let common = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from_segments.len() - common];
    parts.extend_from_slice(&to_segments[common..]);
    parts.join("/")
}

/// Parent directory of `p`.
#[must_use]
pub fn dirname(p: &str, platform: Platform) -> String {
    match platform {
        Platform::Posix => posix_dirname(p),
        Platform::Windows => {
            let slashed = slash(p);
            let (drive, rest) = split_drive(&slashed);
            let dir = posix_dirname(rest);
            if drive.is_empty() {
                dir
            } else if dir == "." {
                drive.to_string()
            } else {
                format!("{drive}{dir}")
            }
        }
    }
}

/// Final segment of `p`, ignoring a trailing separator.
///
/// Only call this on normalized paths.
#[must_use]
pub fn basename(p: &str) -> &str {
    let trimmed = p.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

fn posix_dirname(p: &str) -> String {
    if p.is_empty() {
        return ".".to_string();
    }

    let trimmed = p.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches('/');
            if parent.is_empty() {
                "/".to_string()
            } else {
                parent.to_string()
            }
        }
    }
}

/// Split a leading `X:` drive off a slashed path.
fn split_drive(p: &str) -> (&str, &str) {
    let bytes = p.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        p.split_at(2)
    } else {
        ("", p)
    }
}
