// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::Deserialize;

use crate::{InlineString, inline_string};

/// Name of a team. Subteams are named by their full dotted path from the root team, eg:
/// `acme.dev.web` is a subteam of `acme.dev`, which is a subteam of `acme`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Teamname(pub InlineString);

impl Teamname {
    pub const SUBTEAM_SEPARATOR: char = '.';

    #[must_use]
    pub fn as_str(&self) -> &str { self.0.as_str() }

    /// The first segment of the name, eg: `acme` for `acme.dev.web`.
    #[must_use]
    pub fn root(&self) -> &str {
        self.0
            .split_once(Self::SUBTEAM_SEPARATOR)
            .map_or(self.as_str(), |(root, _)| root)
    }

    /// The immediate parent, or `None` for a root team.
    #[must_use]
    pub fn parent(&self) -> Option<Teamname> {
        self.0
            .rsplit_once(Self::SUBTEAM_SEPARATOR)
            .map(|(parent, _)| Teamname::from(parent))
    }

    #[must_use]
    pub fn is_subteam(&self) -> bool { self.0.contains(Self::SUBTEAM_SEPARATOR) }

    /// The part of this name below `ancestor`, eg: `dev.web` for `acme.dev.web` under
    /// `acme`. If this team isn't a descendant of `ancestor`, the full name is returned.
    #[must_use]
    pub fn name_relative_to(&self, ancestor: &str) -> &str {
        self.as_str()
            .strip_prefix(ancestor)
            .and_then(|rest| rest.strip_prefix(Self::SUBTEAM_SEPARATOR))
            .filter(|rest| !rest.is_empty())
            .unwrap_or(self.as_str())
    }
}

impl From<&str> for Teamname {
    fn from(name: &str) -> Self { Self(inline_string!("{name}")) }
}

impl Display for Teamname {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

impl AsRef<str> for Teamname {
    fn as_ref(&self) -> &str { self.as_str() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("acme.dev.web", "acme", "dev.web")]
    #[test_case("acme.dev.web", "acme.dev", "web")]
    #[test_case("acme", "acme", "acme")]
    #[test_case("acmecorp.dev", "acme", "acmecorp.dev")]
    #[test_case("other.dev", "acme", "other.dev")]
    fn test_name_relative_to(name: &str, ancestor: &str, expected: &str) {
        assert_eq2!(Teamname::from(name).name_relative_to(ancestor), expected);
    }

    #[test]
    fn test_root_and_parent() {
        let it = Teamname::from("acme.dev.web");
        assert_eq2!(it.root(), "acme");
        assert_eq2!(it.parent(), Some(Teamname::from("acme.dev")));
        assert!(it.is_subteam());

        let it = Teamname::from("acme");
        assert_eq2!(it.root(), "acme");
        assert_eq2!(it.parent(), None);
        assert!(!it.is_subteam());
    }

    #[test]
    fn test_deserialize_transparent() {
        let it: Teamname = serde_json::from_str(r#""acme.dev""#).unwrap();
        assert_eq2!(it, Teamname::from("acme.dev"));
    }
}
