pub use crate::config::*;

/// A builder for election records.
///
/// Snapshots are normally read from JSON, but synthetic records are convenient
/// for testing the checks.
///
/// ```
/// use unopposed_races::builder::ElectionDataBuilder;
///
/// let mut builder = ElectionDataBuilder::new("MA", 2026)
///     .total_races(211)
///     .races_for_party("Democrat", 180);
///
/// builder.add_candidate("State Senate", "1st Middlesex", "Jane Doe", "Democrat", "General");
///
/// let record = builder.build();
/// assert_eq!(record.total(), 1);
/// assert_eq!(record.state_name, "Massachusetts");
/// ```
pub struct ElectionDataBuilder {
    _data: ElectionData,
    _candidates: Vec<Candidate>,
    _total: Option<u64>,
}

impl ElectionDataBuilder {
    pub fn new(state: &str, year: u32) -> ElectionDataBuilder {
        ElectionDataBuilder {
            _data: ElectionData {
                state: state.to_string(),
                state_name: crate::states::state_name(state)
                    .unwrap_or(state)
                    .to_string(),
                year,
                ..ElectionData::default()
            },
            _candidates: Vec::new(),
            _total: None,
        }
    }

    /// Overrides the `total` field. By default, it is the number of candidates added.
    pub fn total(mut self, total: u64) -> ElectionDataBuilder {
        self._total = Some(total);
        self
    }

    pub fn total_races(mut self, total_races: u64) -> ElectionDataBuilder {
        self._data._total_races = Some(total_races);
        self
    }

    pub fn races_for_party(mut self, party: &str, count: u64) -> ElectionDataBuilder {
        self._data
            .total_races_by_party
            .insert(party.to_string(), count);
        self
    }

    pub fn general(mut self, general: GeneralStats) -> ElectionDataBuilder {
        self._data.general = Some(general);
        self
    }

    pub fn primary(mut self, primary: PrimaryStats) -> ElectionDataBuilder {
        self._data.primary = Some(primary);
        self
    }

    /// Adds a candidate row.
    pub fn add_candidate(
        &mut self,
        office: &str,
        district: &str,
        name: &str,
        party: &str,
        unopposed_in: &str,
    ) {
        self._candidates.push(Candidate {
            state: self._data.state.clone(),
            office: office.to_string(),
            district: district.to_string(),
            candidate: name.to_string(),
            party: party.to_string(),
            unopposed_in: unopposed_in.to_string(),
            source: "Ballotpedia".to_string(),
        });
    }

    pub fn build(self) -> ElectionData {
        let total = self._total.unwrap_or(self._candidates.len() as u64);
        ElectionData {
            _total: Some(total),
            _unopposed_candidates: Some(self._candidates),
            ..self._data
        }
    }
}
