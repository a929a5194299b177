mod config;
pub mod builder;
pub mod manual;
pub mod states;

use log::{debug, info};

use std::collections::{BTreeMap, BTreeSet, HashMap};

pub use crate::config::*;

// **** Races ****

/// The identity of a contest. Several candidate rows may refer to the same race.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Ord, PartialOrd)]
pub struct RaceKey {
    pub office: String,
    pub district: String,
}

impl RaceKey {
    pub fn of(c: &Candidate) -> RaceKey {
        RaceKey {
            office: c.office.clone(),
            district: c.district.clone(),
        }
    }
}

fn races_by_party<'a, I>(candidates: I) -> BTreeMap<String, BTreeSet<RaceKey>>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut res: BTreeMap<String, BTreeSet<RaceKey>> = BTreeMap::new();
    for c in candidates {
        res.entry(c.party.clone())
            .or_default()
            .insert(RaceKey::of(c));
    }
    res
}

/// Counts, for each party, the distinct races in which this party has an unopposed candidate.
///
/// Rows that refer to the same (office, district) for the same party are counted once.
pub fn count_unique_races_by_party(data: &ElectionData) -> PartyCounts {
    races_by_party(data.candidates())
        .into_iter()
        .map(|(party, races)| (party, races.len() as u64))
        .collect()
}

/// Counts the distinct races with an unopposed candidate, regardless of the party.
pub fn count_unique_races(data: &ElectionData) -> u64 {
    let races: BTreeSet<RaceKey> = data.candidates().iter().map(RaceKey::of).collect();
    races.len() as u64
}

// **** Summary ****

/// Sums the records of a set of states into nationwide totals.
///
/// Absent states are skipped. Records without a candidate list are skipped as well,
/// while a record with an empty list still contributes its totals.
pub fn summarize<'a, I>(states: I) -> Summary
where
    I: IntoIterator<Item = &'a StateData>,
{
    let mut res = Summary::default();
    let mut num_states = 0;
    for sd in states {
        let ed = match sd {
            StateData::Available(ed) if ed.has_candidate_list() => ed,
            StateData::Available(ed) => {
                debug!("summarize: {}: no candidate list, skipping", ed.state);
                continue;
            }
            StateData::Absent => continue,
        };
        num_states += 1;
        res.total_unopposed += ed.total();
        res.total_races += ed.total_races();
        for c in ed.candidates() {
            *res.count_by_party.entry(c.party.clone()).or_insert(0) += 1;
        }
        add_counts(&mut res.total_by_party, &ed.total_races_by_party);
    }
    debug!(
        "summarize: {} states, {} unopposed out of {} races",
        num_states, res.total_unopposed, res.total_races
    );
    res
}

// **** Integrity checks ****

/// Runs all the consistency checks on one record.
///
/// All the checks are run: a failure does not prevent the following checks from running.
pub fn validate_record(state_id: &str, data: &ElectionData) -> Vec<Violation> {
    let mut res: Vec<Violation> = Vec::new();
    let violation = |kind: ViolationKind, party: Option<&str>, observed: u64, limit: u64| {
        Violation {
            state: state_id.to_string(),
            kind,
            party: party.map(|p| p.to_string()),
            observed,
            limit,
        }
    };

    let num_candidates = data.candidates().len() as u64;
    if num_candidates != data.total() {
        res.push(violation(
            ViolationKind::CandidateCountMismatch,
            None,
            num_candidates,
            data.total(),
        ));
    }

    for (party, unopposed) in count_unique_races_by_party(data) {
        let limit = data.total_races_for_party(&party);
        if unopposed > limit {
            res.push(violation(
                ViolationKind::PartyRacesExceeded,
                Some(party.as_str()),
                unopposed,
                limit,
            ));
        }
    }

    let unique_races = count_unique_races(data);
    if unique_races > data.total_races() {
        res.push(violation(
            ViolationKind::UniqueRacesExceedTotal,
            None,
            unique_races,
            data.total_races(),
        ));
    }

    if let Some(general) = &data.general {
        if general.total_unopposed > general.total_races {
            res.push(violation(
                ViolationKind::GeneralUnopposedExceeded,
                None,
                general.total_unopposed,
                general.total_races,
            ));
        }
    }

    if let Some(primary) = &data.primary {
        for (party, unopposed) in primary.unopposed_by_party.iter() {
            let limit = primary
                .total_races_by_party
                .get(party)
                .cloned()
                .unwrap_or(0);
            if *unopposed > limit {
                res.push(violation(
                    ViolationKind::PrimaryPartyExceeded,
                    Some(party.as_str()),
                    *unopposed,
                    limit,
                ));
            }
        }
    }

    debug!(
        "validate_record: {}: {} violation(s)",
        state_id,
        res.len()
    );
    res
}

/// Runs the consistency checks on every available record of a corpus.
///
/// The corpus is given as pairs of (identifier, data). Absent records have nothing
/// to check and are skipped.
pub fn validate_corpus<'a, K, I>(corpus: I) -> Vec<Violation>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, &'a StateData)>,
{
    let mut res: Vec<Violation> = Vec::new();
    let mut num_checked = 0;
    let mut num_skipped = 0;
    for (state_id, sd) in corpus {
        match sd {
            StateData::Available(ed) => {
                num_checked += 1;
                res.extend(validate_record(state_id.as_ref(), ed));
            }
            StateData::Absent => {
                debug!("validate_corpus: {}: no data, skipping", state_id.as_ref());
                num_skipped += 1;
            }
        }
    }
    info!(
        "Checked {} records ({} skipped): {} violation(s)",
        num_checked,
        num_skipped,
        res.len()
    );
    res
}

// **** Nationwide statistics ****

const GENERAL_STAGE: &str = "General";
const PRIMARY_STAGE: &str = "Primary";

/// Derives the general and primary statistics of one state from its candidate rows.
///
/// A candidate counts for the general election (resp. the primary) when its
/// `unopposed_in` descriptor mentions it. Races are deduplicated; party counts are not.
pub fn compute_state_stats(data: &ElectionData) -> NationwideStats {
    let general_candidates: Vec<&Candidate> = data
        .candidates()
        .iter()
        .filter(|c| c.unopposed_in.contains(GENERAL_STAGE))
        .collect();
    let primary_candidates: Vec<&Candidate> = data
        .candidates()
        .iter()
        .filter(|c| c.unopposed_in.contains(PRIMARY_STAGE))
        .collect();

    let general_races: BTreeSet<RaceKey> = general_candidates
        .iter()
        .map(|c| RaceKey::of(c))
        .collect();
    let general = GeneralStats {
        total_unopposed: general_races.len() as u64,
        total_races: data.total_races(),
        unopposed_by_party: count_rows_by_party(&general_candidates),
    };

    let primary_races = races_by_party(primary_candidates.iter().cloned());
    let primary = PrimaryStats {
        total_unopposed: primary_races.values().map(|s| s.len() as u64).sum(),
        total_races_by_party: data.total_races_by_party.clone(),
        unopposed_by_party: count_rows_by_party(&primary_candidates),
    };

    NationwideStats { general, primary }
}

fn count_rows_by_party(candidates: &[&Candidate]) -> PartyCounts {
    let mut res = PartyCounts::new();
    for c in candidates {
        *res.entry(c.party.clone()).or_insert(0) += 1;
    }
    res
}

/// Sums the statistics of the states of a single year.
pub fn compute_nationwide_stats<'a, I>(records: I) -> NationwideStats
where
    I: IntoIterator<Item = &'a ElectionData>,
{
    let mut res = NationwideStats::default();
    for ed in records {
        let s = compute_state_stats(ed);

        res.general.total_unopposed += s.general.total_unopposed;
        res.general.total_races += s.general.total_races;
        add_counts(
            &mut res.general.unopposed_by_party,
            &s.general.unopposed_by_party,
        );

        res.primary.total_unopposed += s.primary.total_unopposed;
        add_counts(
            &mut res.primary.total_races_by_party,
            &s.primary.total_races_by_party,
        );
        add_counts(
            &mut res.primary.unopposed_by_party,
            &s.primary.unopposed_by_party,
        );
    }
    res
}

/// Groups the available records by year and computes the nationwide statistics of each year.
///
/// The year of each record is given by the caller (usually the year of the snapshot file),
/// not read from the record. The years are returned in descending order.
pub fn build_nationwide_by_year<'a, I>(states: I) -> Vec<(u32, NationwideStats)>
where
    I: IntoIterator<Item = (u32, &'a StateData)>,
{
    let mut by_year: HashMap<u32, Vec<&ElectionData>> = HashMap::new();
    for (year, sd) in states {
        if let Some(ed) = sd.as_available() {
            by_year.entry(year).or_default().push(ed);
        }
    }
    let mut years: Vec<u32> = by_year.keys().cloned().collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years
        .into_iter()
        .map(|year| {
            let records = by_year.remove(&year).unwrap_or_default();
            info!("Year {}: {} states", year, records.len());
            (year, compute_nationwide_stats(records))
        })
        .collect()
}

// **** Candidate rows ****

/// Maps the usual spellings of the major parties to a single label.
pub fn normalize_party(party: &str) -> String {
    let p = party.trim();
    let normalized = match p.to_lowercase().as_str() {
        "democratic" | "democrat" | "dem" => "Democrat",
        "republican" | "rep" | "gop" => "Republican",
        "libertarian" | "lib" => "Libertarian",
        "green" | "green/rainbow" => "Green/Rainbow",
        "independent" | "ind" => "Independent",
        _ => p,
    };
    normalized.to_string()
}

/// Merges two stage descriptors: `Primary` and `General` give `Primary & General`.
pub fn merge_unopposed_in(existing: &str, new: &str) -> String {
    let stages: BTreeSet<&str> = existing.split(" & ").chain(new.split(" & ")).collect();
    [PRIMARY_STAGE, GENERAL_STAGE]
        .iter()
        .filter(|s| stages.contains(*s))
        .cloned()
        .collect::<Vec<&str>>()
        .join(" & ")
}

/// Removes the repeated rows of the same candidate in the same race.
///
/// The first row is kept, with the stages of all its repetitions merged.
pub fn deduplicate_candidates(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut positions: HashMap<(&str, &str, &str, &str), usize> = HashMap::new();
    let mut res: Vec<Candidate> = Vec::new();
    for c in candidates {
        let key = (
            c.state.as_str(),
            c.office.as_str(),
            c.district.as_str(),
            c.candidate.as_str(),
        );
        if let Some(idx) = positions.get(&key) {
            let merged = merge_unopposed_in(&res[*idx].unopposed_in, &c.unopposed_in);
            if !merged.is_empty() {
                res[*idx].unopposed_in = merged;
            }
        } else {
            positions.insert(key, res.len());
            res.push(c.clone());
        }
    }
    if res.len() < candidates.len() {
        debug!(
            "deduplicate_candidates: {} rows -> {} rows",
            candidates.len(),
            res.len()
        );
    }
    res
}

#[cfg(test)]
mod tests {
    use super::builder::ElectionDataBuilder;
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // 22 unopposed candidates in 211 races.
    fn massachusetts() -> ElectionData {
        let mut b = ElectionDataBuilder::new("MA", 2026)
            .total_races(211)
            .races_for_party("Democrat", 200)
            .races_for_party("Republican", 150);
        for idx in 0..18 {
            b.add_candidate(
                "State House",
                &format!("District {}", idx + 1),
                &format!("Democrat {}", idx),
                "Democrat",
                "Primary & General",
            );
        }
        for idx in 0..4 {
            b.add_candidate(
                "State Senate",
                &format!("District {}", idx + 1),
                &format!("Republican {}", idx),
                "Republican",
                "Primary",
            );
        }
        b.build()
    }

    fn virginia() -> ElectionData {
        let mut b = ElectionDataBuilder::new("VA", 2025)
            .total_races(100)
            .races_for_party("Democrat", 100)
            .races_for_party("Republican", 100)
            .races_for_party("Independent", 3);
        b.add_candidate("House of Delegates", "District 4", "A", "Democrat", "General");
        b.add_candidate("House of Delegates", "District 7", "B", "Republican", "General");
        b.add_candidate("House of Delegates", "District 9", "C", "Independent", "General");
        b.build()
    }

    fn available(ed: ElectionData) -> StateData {
        StateData::Available(ed)
    }

    #[test]
    fn summary_single_state() {
        init();
        let states = vec![available(massachusetts())];
        let s = summarize(&states);
        assert_eq!(s.total_unopposed, 22);
        assert_eq!(s.total_races, 211);
        assert_eq!(s.count_by_party.values().sum::<u64>(), 22);
        assert_eq!(s.count_by_party.get("Democrat"), Some(&18));
        assert_eq!(s.total_by_party.get("Republican"), Some(&150));
    }

    #[test]
    fn summary_multiple_states() {
        let ma = massachusetts();
        let va = virginia();
        let states = vec![available(ma.clone()), available(va.clone())];
        let s = summarize(&states);
        assert_eq!(s.total_unopposed, ma.total() + va.total());
        assert_eq!(s.total_races, ma.total_races() + va.total_races());
        assert_eq!(s.total_by_party.get("Democrat"), Some(&300));
        assert_eq!(s.total_by_party.get("Independent"), Some(&3));
    }

    #[test]
    fn summary_absent_state_is_neutral() {
        let mut states: BTreeMap<String, StateData> = BTreeMap::new();
        states.insert("MA".to_string(), available(massachusetts()));
        let without = summarize(states.values());
        states.insert("XX".to_string(), StateData::Absent);
        let with = summarize(states.values());
        assert_eq!(with, without);
        assert_eq!(with.total_unopposed, 22);
    }

    #[test]
    fn summary_is_additive() {
        let a = vec![available(massachusetts())];
        let b = vec![available(virginia()), StateData::Absent];
        let all: Vec<StateData> = a.iter().chain(b.iter()).cloned().collect();
        let merged = summarize(&a).merge(&summarize(&b));
        assert_eq!(summarize(&all), merged);
        let reversed: Vec<StateData> = all.iter().rev().cloned().collect();
        assert_eq!(summarize(&reversed), merged);
    }

    #[test]
    fn summary_empty_and_missing_candidate_lists() {
        let empty = ElectionDataBuilder::new("WY", 2026).total_races(40).build();
        let s = summarize(&vec![available(empty)]);
        assert_eq!(s.total_races, 40);
        assert_eq!(s.total_unopposed, 0);
        assert!(s.count_by_party.is_empty());

        let missing: ElectionData =
            serde_json::from_str(r#"{"state": "WY", "year": 2026, "total": 3, "total_races": 40}"#)
                .unwrap();
        assert!(!missing.has_candidate_list());
        assert_eq!(summarize(&vec![available(missing)]), Summary::default());
    }

    #[test]
    fn unique_races_deduplicate_rows() {
        let mut b = ElectionDataBuilder::new("MA", 2026)
            .total_races(10)
            .races_for_party("Democrat", 1);
        b.add_candidate("Senate", "1", "Jane Doe", "Democrat", "Primary");
        b.add_candidate("Senate", "1", "Jane Doe", "Democrat", "General");
        b.add_candidate("Senate", "2", "John Roe", "Republican", "General");
        let ed = b.build();
        let counts = count_unique_races_by_party(&ed);
        assert_eq!(counts.get("Democrat"), Some(&1));
        assert_eq!(counts.get("Republican"), Some(&1));
        assert_eq!(count_unique_races(&ed), 2);
    }

    #[test]
    fn unique_races_same_race_different_parties() {
        let mut b = ElectionDataBuilder::new("NY", 2026);
        b.add_candidate("State Assembly", "12", "A", "Democrat", "Primary");
        b.add_candidate("State Assembly", "12", "B", "Republican", "Primary");
        let ed = b.build();
        let counts = count_unique_races_by_party(&ed);
        assert_eq!(counts.get("Democrat"), Some(&1));
        assert_eq!(counts.get("Republican"), Some(&1));
        assert_eq!(count_unique_races(&ed), 1);
    }

    #[test]
    fn valid_record_has_no_violation() {
        init();
        let ma = massachusetts();
        assert_eq!(validate_record("massachusetts_2026.json", &ma), vec![]);
    }

    #[test]
    fn total_mismatch_is_reported() {
        let mut b = ElectionDataBuilder::new("MA", 2026)
            .total(5)
            .total_races(10)
            .races_for_party("Democrat", 10);
        b.add_candidate("Senate", "1", "A", "Democrat", "General");
        let v = validate_record("MA", &b.build());
        assert_eq!(
            v,
            vec![Violation {
                state: "MA".to_string(),
                kind: ViolationKind::CandidateCountMismatch,
                party: None,
                observed: 1,
                limit: 5,
            }]
        );
        assert_eq!(v[0].to_string(), "MA: total (5) != candidate count (1)");
    }

    #[test]
    fn missing_party_limit_is_zero() {
        let mut b = ElectionDataBuilder::new("VA", 2025)
            .total_races(10)
            .races_for_party("Democrat", 10);
        b.add_candidate("House of Delegates", "3", "A", "Libertarian", "General");
        let v = validate_record("VA", &b.build());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind, ViolationKind::PartyRacesExceeded);
        assert_eq!(v[0].party.as_deref(), Some("Libertarian"));
        assert_eq!((v[0].observed, v[0].limit), (1, 0));
        assert_eq!(
            v[0].to_string(),
            "VA: Libertarian has 1 unopposed races but only 0 total races"
        );
    }

    #[test]
    fn all_violations_are_reported() {
        let mut b = ElectionDataBuilder::new("TX", 2026)
            .total(7)
            .total_races(1)
            .races_for_party("Democrat", 1)
            .general(GeneralStats {
                total_unopposed: 12,
                total_races: 10,
                unopposed_by_party: PartyCounts::new(),
            })
            .primary(PrimaryStats {
                total_unopposed: 4,
                total_races_by_party: [("Democrat".to_string(), 2)].into_iter().collect(),
                unopposed_by_party: [
                    ("Democrat".to_string(), 3),
                    ("Republican".to_string(), 1),
                ]
                .into_iter()
                .collect(),
            });
        b.add_candidate("State House", "1", "A", "Democrat", "Primary");
        b.add_candidate("State House", "2", "B", "Democrat", "Primary");
        let v = validate_record("texas_2026.json", &b.build());
        let kinds: Vec<ViolationKind> = v.iter().map(|x| x.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::CandidateCountMismatch,
                ViolationKind::PartyRacesExceeded,
                ViolationKind::UniqueRacesExceedTotal,
                ViolationKind::GeneralUnopposedExceeded,
                ViolationKind::PrimaryPartyExceeded,
                ViolationKind::PrimaryPartyExceeded,
            ]
        );
        assert_eq!(v[4].party.as_deref(), Some("Democrat"));
        assert_eq!((v[5].observed, v[5].limit), (1, 0));
        assert!(v.iter().all(|x| x.state == "texas_2026.json"));
    }

    #[test]
    fn primary_zero_over_missing_limit_is_fine() {
        let ed = ElectionDataBuilder::new("OR", 2026)
            .primary(PrimaryStats {
                total_unopposed: 0,
                total_races_by_party: PartyCounts::new(),
                unopposed_by_party: [("Green/Rainbow".to_string(), 0)].into_iter().collect(),
            })
            .build();
        assert!(validate_record("OR", &ed).is_empty());
    }

    #[test]
    fn corpus_skips_absent_records() {
        let mut bad = massachusetts();
        bad._total = Some(3);
        let corpus: Vec<(String, StateData)> = vec![
            ("massachusetts_2026.json".to_string(), available(bad)),
            ("nevada_2026.json".to_string(), StateData::Absent),
            ("virginia_2025.json".to_string(), available(virginia())),
        ];
        let v = validate_corpus(corpus.iter().map(|(id, sd)| (id, sd)));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].state, "massachusetts_2026.json");
        assert_eq!((v[0].observed, v[0].limit), (22, 3));
    }

    #[test]
    fn state_stats_split_stages() {
        let mut b = ElectionDataBuilder::new("MA", 2026)
            .total_races(50)
            .races_for_party("Democrat", 40)
            .races_for_party("Republican", 30);
        b.add_candidate("Senate", "1", "A", "Democrat", "Primary & General");
        b.add_candidate("Senate", "1", "A2", "Democrat", "Primary");
        b.add_candidate("House", "2", "B", "Republican", "General");
        b.add_candidate("House", "3", "C", "Republican", "Primary");
        let s = compute_state_stats(&b.build());

        assert_eq!(s.general.total_unopposed, 2);
        assert_eq!(s.general.total_races, 50);
        assert_eq!(s.general.unopposed_by_party.get("Democrat"), Some(&1));
        assert_eq!(s.general.unopposed_by_party.get("Republican"), Some(&1));

        // Senate 1 is counted once for the Democrats.
        assert_eq!(s.primary.total_unopposed, 2);
        assert_eq!(s.primary.unopposed_by_party.get("Democrat"), Some(&2));
        assert_eq!(s.primary.unopposed_by_party.get("Republican"), Some(&1));
        assert_eq!(s.primary.total_races_by_party.get("Republican"), Some(&30));
    }

    #[test]
    fn nationwide_by_year() {
        let states = vec![
            (2026, available(massachusetts())),
            (2025, available(virginia())),
            (2026, StateData::Absent),
        ];
        let res = build_nationwide_by_year(states.iter().map(|(y, sd)| (*y, sd)));
        let years: Vec<u32> = res.iter().map(|(y, _)| *y).collect();
        assert_eq!(years, vec![2026, 2025]);
        let (_, ma) = &res[0];
        assert_eq!(ma.general.total_races, 211);
        assert_eq!(ma.general.total_unopposed, 18);
        assert_eq!(ma.primary.total_unopposed, 22);
        let (_, va) = &res[1];
        assert_eq!(va.general.total_unopposed, 3);
        assert_eq!(va.primary.total_unopposed, 0);
        assert_eq!(va.primary.total_races_by_party.get("Independent"), Some(&3));
    }

    #[test]
    fn nationwide_uses_given_year() {
        // The record carries no year of its own.
        let mut ma = massachusetts();
        ma.year = 0;
        let states = vec![(2026, available(ma)), (2026, available(virginia()))];
        let res = build_nationwide_by_year(states.iter().map(|(y, sd)| (*y, sd)));
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].0, 2026);
        assert_eq!(res[0].1.general.total_races, 311);
    }

    #[test]
    fn missing_party_is_unknown() {
        let ed: ElectionData = serde_json::from_str(
            r#"{"state": "OH", "year": 2026, "total": 1, "total_races": 5,
                "unopposed_candidates": [{"office": "Senate", "district": "3", "unopposed_in": "General"}]}"#,
        )
        .unwrap();
        assert_eq!(ed.candidates()[0].party, "Unknown");
        let s = compute_state_stats(&ed);
        assert_eq!(s.general.unopposed_by_party.get("Unknown"), Some(&1));
        let summary = summarize(&vec![available(ed)]);
        assert_eq!(summary.count_by_party.get("Unknown"), Some(&1));
    }

    #[test]
    fn state_data_from_option() {
        assert!(StateData::from(None).is_absent());
        let sd = StateData::from(Some(virginia()));
        assert_eq!(sd.as_available().map(|ed| ed.total()), Some(3));
    }

    #[test]
    fn party_normalization() {
        assert_eq!(normalize_party("Democratic"), "Democrat");
        assert_eq!(normalize_party("dem"), "Democrat");
        assert_eq!(normalize_party("GOP"), "Republican");
        assert_eq!(normalize_party("green"), "Green/Rainbow");
        assert_eq!(normalize_party("ind"), "Independent");
        assert_eq!(normalize_party("  spaced  "), "spaced");
        assert_eq!(normalize_party("Some Other Party"), "Some Other Party");
    }

    #[test]
    fn stage_merging() {
        assert_eq!(merge_unopposed_in("Primary", "Primary"), "Primary");
        assert_eq!(merge_unopposed_in("General", "Primary"), "Primary & General");
        assert_eq!(
            merge_unopposed_in("Primary & General", "Primary"),
            "Primary & General"
        );
        assert_eq!(merge_unopposed_in("", ""), "");
    }

    #[test]
    fn deduplicate_merges_repeated_rows() {
        let mut b = ElectionDataBuilder::new("CA", 2026);
        b.add_candidate("US House", "District 1", "John Doe", "Democrat", "Primary");
        b.add_candidate("US House", "District 2", "Jane Doe", "Republican", "General");
        b.add_candidate("US House", "District 1", "John Doe", "Democrat", "General");
        let ed = b.build();
        let res = deduplicate_candidates(ed.candidates());
        assert_eq!(res.len(), 2);
        assert_eq!(res[0].unopposed_in, "Primary & General");
        assert_eq!(res[1].candidate, "Jane Doe");
        // The record itself is untouched.
        assert_eq!(ed.candidates().len(), 3);
        assert_eq!(ed.candidates()[0].unopposed_in, "Primary");
    }
}
