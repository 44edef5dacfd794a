use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL that ORCID identifiers are resolved against
pub const ORCID_BASE_URL: &str = "https://orcid.org/";

#[derive(Builder, Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct Author {
    pub first: String,
    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    /// Also used as the author's key within the byline, so it is expected to be unique
    pub last: String,
    #[builder(setter(each(name = "affiliation", into)), default)]
    #[serde(default)]
    pub affiliations: Vec<String>,
    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
}

impl Author {
    /// The author's ORCID profile link, if they have a non-empty ORCID
    pub fn orcid_url(&self) -> Option<String> {
        self.orcid
            .as_deref()
            .filter(|orcid| !orcid.is_empty())
            .map(|orcid| format!("{ORCID_BASE_URL}{orcid}"))
    }
}

/// Formats the author the way they appear in a byline. A missing middle name still takes up its
/// slot, so `first` and `last` end up separated by two spaces.
impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}, {}",
            self.first,
            self.middle.as_deref().unwrap_or_default(),
            self.last,
            self.affiliations.join(", ")
        )
    }
}
