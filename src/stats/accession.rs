//! Compound protein accession parsing
//!
//! PQP protein groups are stored as a single accession string of the form
//! `<count>/<id_1>/<id_2>/.../<id_n>`. The leading count is discarded
//! without being checked against the number of identifiers.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Separator between the tokens of a compound accession
pub const ACCESSION_SEPARATOR: char = '/';

/// Set of indistinguishable protein identifiers from one protein row
///
/// Identifiers are kept ordered, so two groups with the same members compare
/// (and hash) equal regardless of the order they were listed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProteinGroup(BTreeSet<String>);

impl ProteinGroup {
    /// Parse a compound accession
    ///
    /// A non-empty accession without any separator is a group of one.
    pub fn parse(accession: &str) -> Self {
        let mut tokens = accession.split(ACCESSION_SEPARATOR);
        match tokens.next() {
            Some(first) if !accession.is_empty() && first.len() == accession.len() => {
                Self(BTreeSet::from([accession.to_string()]))
            }
            _ => Self(tokens.map(str::to_string).collect()),
        }
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the accession listed no identifiers after the count
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `protein` is a member of this group
    pub fn contains(&self, protein: &str) -> bool {
        self.0.contains(protein)
    }

    /// Iterate identifiers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Borrow the identifier set
    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ProteinGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ProteinGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.len())?;
        for protein in &self.0 {
            write!(f, "{}{}", ACCESSION_SEPARATOR, protein)?;
        }
        Ok(())
    }
}

/// Split every accession into its protein group, preserving order
pub fn split_protein_names<I, S>(accessions: I) -> Vec<ProteinGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    accessions
        .into_iter()
        .map(|accession| ProteinGroup::parse(accession.as_ref()))
        .collect()
}
