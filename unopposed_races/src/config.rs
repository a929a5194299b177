// ********* Input data structures ***********

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A breakdown of counts by party label.
pub type PartyCounts = BTreeMap<String, u64>;

/// One candidate row, as published in a state snapshot.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub office: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub candidate: String,
    #[serde(default = "unknown_party")]
    pub party: String,
    /// Free-text stage descriptor: "Primary", "General" or "Primary & General".
    #[serde(default)]
    pub unopposed_in: String,
    #[serde(default)]
    pub source: String,
}

/// The party of the rows that do not name one.
pub const UNKNOWN_PARTY: &str = "Unknown";

fn unknown_party() -> String {
    UNKNOWN_PARTY.to_string()
}

/// Summary of the general election of a state, when published.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralStats {
    #[serde(default)]
    pub total_unopposed: u64,
    #[serde(default)]
    pub total_races: u64,
    #[serde(default)]
    pub unopposed_by_party: PartyCounts,
}

/// Summary of the primaries of a state, when published.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrimaryStats {
    #[serde(default)]
    pub total_unopposed: u64,
    #[serde(default)]
    pub total_races_by_party: PartyCounts,
    #[serde(default)]
    pub unopposed_by_party: PartyCounts,
}

/// The election data of one state for one year.
///
/// Some numeric fields are not always present in the snapshots. They are kept private
/// and read through accessors that default to zero.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElectionData {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default)]
    pub year: u32,
    #[serde(rename = "total", skip_serializing_if = "Option::is_none", default)]
    pub(crate) _total: Option<u64>,
    #[serde(rename = "total_races", skip_serializing_if = "Option::is_none", default)]
    pub(crate) _total_races: Option<u64>,
    #[serde(default)]
    pub total_races_by_party: PartyCounts,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub general: Option<GeneralStats>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub primary: Option<PrimaryStats>,
    #[serde(default)]
    pub scraped_at: String,
    #[serde(
        rename = "unopposed_candidates",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub(crate) _unopposed_candidates: Option<Vec<Candidate>>,
}

impl ElectionData {
    /// The published number of unopposed candidates (0 if missing).
    pub fn total(&self) -> u64 {
        self._total.unwrap_or(0)
    }

    /// The published number of races held (0 if missing).
    pub fn total_races(&self) -> u64 {
        self._total_races.unwrap_or(0)
    }

    /// The unopposed candidates, or an empty slice if the list is missing.
    pub fn candidates(&self) -> &[Candidate] {
        self._unopposed_candidates.as_deref().unwrap_or(&[])
    }

    /// False when the snapshot carries no candidate list at all.
    ///
    /// An empty list is still a list.
    pub fn has_candidate_list(&self) -> bool {
        self._unopposed_candidates.is_some()
    }

    /// The race limit for a party. Parties that are not listed have no races.
    pub fn total_races_for_party(&self, party: &str) -> u64 {
        self.total_races_by_party.get(party).cloned().unwrap_or(0)
    }
}

/// The data of a state for a given year: either a loaded record, or nothing.
///
/// Snapshots that failed to load, or that were flagged as erroneous by the scraper,
/// are represented as `Absent` by the loader.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum StateData {
    Available(ElectionData),
    Absent,
}

impl StateData {
    pub fn as_available(&self) -> Option<&ElectionData> {
        match self {
            StateData::Available(ed) => Some(ed),
            StateData::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, StateData::Absent)
    }
}

impl From<Option<ElectionData>> for StateData {
    fn from(x: Option<ElectionData>) -> Self {
        match x {
            Some(ed) => StateData::Available(ed),
            None => StateData::Absent,
        }
    }
}

// ******** Output data structures *********

/// Nationwide totals over a set of states.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "totalUnopposed")]
    pub total_unopposed: u64,
    #[serde(rename = "totalRaces")]
    pub total_races: u64,
    /// Number of unopposed candidate rows per party.
    #[serde(rename = "countByParty")]
    pub count_by_party: PartyCounts,
    /// Number of races per party.
    #[serde(rename = "totalByParty")]
    pub total_by_party: PartyCounts,
}

impl Summary {
    /// Combines the summaries of two disjoint sets of states.
    pub fn merge(mut self, other: &Summary) -> Summary {
        self.total_unopposed += other.total_unopposed;
        self.total_races += other.total_races;
        add_counts(&mut self.count_by_party, &other.count_by_party);
        add_counts(&mut self.total_by_party, &other.total_by_party);
        self
    }
}

/// The general and primary statistics of one year, summed over all the states.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct NationwideStats {
    pub general: GeneralStats,
    pub primary: PrimaryStats,
}

/// The index of the available years, as served next to the snapshots.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub years: Vec<u32>,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nationwide: Option<BTreeMap<String, NationwideStats>>,
}

/// The checks run against every record.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// The `total` field does not match the number of candidate rows.
    CandidateCountMismatch,
    /// A party holds more distinct unopposed races than races overall.
    PartyRacesExceeded,
    /// The distinct unopposed races exceed the total number of races.
    UniqueRacesExceedTotal,
    /// `general.total_unopposed` exceeds `general.total_races`.
    GeneralUnopposedExceeded,
    /// A party has more unopposed primaries than primaries.
    PrimaryPartyExceeded,
}

/// A failed check on one record.
///
/// `observed` is the value that was measured and `limit` the value it was compared to.
/// For a candidate count mismatch, the limit is the published `total`.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub state: String,
    pub kind: ViolationKind,
    pub party: Option<String>,
    pub observed: u64,
    pub limit: u64,
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let party = self.party.as_deref().unwrap_or("");
        match self.kind {
            ViolationKind::CandidateCountMismatch => write!(
                f,
                "{}: total ({}) != candidate count ({})",
                self.state, self.limit, self.observed
            ),
            ViolationKind::PartyRacesExceeded => write!(
                f,
                "{}: {} has {} unopposed races but only {} total races",
                self.state, party, self.observed, self.limit
            ),
            ViolationKind::UniqueRacesExceedTotal => write!(
                f,
                "{}: {} unique unopposed races exceeds {} total races",
                self.state, self.observed, self.limit
            ),
            ViolationKind::GeneralUnopposedExceeded => write!(
                f,
                "{}: general.total_unopposed ({}) exceeds general.total_races ({})",
                self.state, self.observed, self.limit
            ),
            ViolationKind::PrimaryPartyExceeded => write!(
                f,
                "{}: {} primary has {} unopposed but only {} total races",
                self.state, party, self.observed, self.limit
            ),
        }
    }
}

pub(crate) fn add_counts(acc: &mut PartyCounts, other: &PartyCounts) {
    for (party, count) in other.iter() {
        *acc.entry(party.clone()).or_insert(0) += count;
    }
}
