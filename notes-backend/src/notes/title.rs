//! Title validation and routed-path matching.
//!
//! One character-set policy applies to every entry point that accepts a
//! title: one or more ASCII letters or digits, nothing else. That keeps the
//! derived file path inside the notes-root.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::PageError;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());
static ROUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(view|edit|save)/([a-zA-Z0-9]+)$").unwrap());

/// Page lifecycle action addressed by a `/<action>/<title>` path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    View,
    Edit,
    Save,
}

impl PageAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageAction::View => "view",
            PageAction::Edit => "edit",
            PageAction::Save => "save",
        }
    }

    fn from_keyword(s: &str) -> Option<PageAction> {
        match s {
            "view" => Some(PageAction::View),
            "edit" => Some(PageAction::Edit),
            "save" => Some(PageAction::Save),
            _ => None,
        }
    }
}

/// A validated page title, safe to use as a filename stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn parse(raw: &str) -> Result<Self, PageError> {
        if TITLE_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(PageError::InvalidTitle(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Match a request path against `/(view|edit|save)/<title>`.
///
/// Returns `None` for anything else, including an empty title, nested
/// segments, punctuation, percent-escapes and non-ASCII characters.
pub fn match_route(path: &str) -> Option<(PageAction, PageTitle)> {
    let caps = ROUTE_RE.captures(path)?;
    let action = PageAction::from_keyword(caps.get(1)?.as_str())?;
    Some((action, PageTitle(caps.get(2)?.as_str().to_string())))
}
