//! Normalized label collections.
//!
//! Subjects and levels are free text with no controlled vocabulary. A
//! [`LabelSet`] holds their normalized forms so that the matchers only ask
//! "does this set contain that label", whatever the comparison strategy is.

use super::normalize;

/// A collection of normalized labels.
///
/// Order and multiplicity of the source labels are preserved.
///
/// # Examples
///
/// ```
/// use tutor_match::matching::LabelSet;
///
/// let taught = LabelSet::new(["Maths", "Sciences Économiques"]);
/// assert!(taught.contains("MATHS"));
/// assert!(taught.contains("sciences economiques"));
/// assert!(!taught.contains("Chimie"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Builds a set from raw labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|label| normalize(label.as_ref()))
                .collect(),
        }
    }

    /// Returns true if the set holds no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the number of labels, duplicates included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if `label` matches any label in the set.
    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// Returns the index of the first label matching `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        let needle = normalize(label);
        self.labels.iter().position(|candidate| *candidate == needle)
    }
}
