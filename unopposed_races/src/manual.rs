/*!

This is the long-form manual for `unopposed_races` and the `unopposed` command.

## Snapshots

Each state publishes one JSON snapshot per election year, named after the state
(`massachusetts_2026.json`, `new_york_2025.json`, see [`crate::states::snapshot_filename`]).
A snapshot looks like this:

```json
{
  "state": "MA",
  "state_name": "Massachusetts",
  "year": 2026,
  "total": 22,
  "total_races": 211,
  "total_races_by_party": {"Democrat": 200, "Republican": 150},
  "general": {"total_unopposed": 18, "total_races": 211, "unopposed_by_party": {"Democrat": 18}},
  "scraped_at": "2026-03-01T12:00:00+00:00",
  "unopposed_candidates": [
    {
      "state": "MA",
      "office": "State House",
      "district": "1st Barnstable",
      "candidate": "Jane Doe",
      "party": "Democrat",
      "unopposed_in": "Primary & General",
      "source": "Ballotpedia"
    }
  ]
}
```

`total`, `total_races`, `general` and `primary` may be missing. Missing numbers are
read as zero, and candidates without a party are counted under `"Unknown"`. The
year of a snapshot is the one in its file name. When the scraper could not collect a state, the snapshot only contains
an `"error"` field and a message. Such snapshots are loaded as
[`crate::StateData::Absent`], like the states that have no snapshot at all.

## Races and candidates

A race is identified by its office and district. A snapshot may list the same race
more than once: several candidates of the same party in a primary, or the same
candidate scraped twice. The checks always reason on distinct races, see
[`crate::count_unique_races_by_party`].

## Checks

[`crate::validate_record`] runs the following checks and reports every failure:

| check                      | condition                                                        |
|----------------------------|------------------------------------------------------------------|
| `CandidateCountMismatch`   | `total` equals the number of candidate rows                      |
| `PartyRacesExceeded`       | distinct races of a party <= `total_races_by_party[party]`       |
| `UniqueRacesExceedTotal`   | distinct races <= `total_races`                                  |
| `GeneralUnopposedExceeded` | `general.total_unopposed` <= `general.total_races`               |
| `PrimaryPartyExceeded`     | `primary.unopposed_by_party[p]` <= `primary.total_races_by_party[p]` |

A party that is missing from a denominator has no races: any unopposed race of
this party is a failure.

## The `unopposed` command

```bash
# Summary of 2026 for all the states
unopposed --data-dir election_data --year 2026

# Summary of a few states
unopposed --data-dir election_data --year 2026 --states MA --states VA

# Run the checks over all the snapshots
unopposed --data-dir election_data --check

# Regenerate the manifest, and compare it to the published one
unopposed --data-dir election_data --out election_data/manifest.json \
  --reference published/manifest.json
```

The options can also be provided in a JSON configuration file with `--config`:

```json
{
  "dataDirectory": "election_data",
  "outputPath": "election_data/manifest.json",
  "years": [2026],
  "excludedFiles": ["test_2026.json"]
}
```

Options passed on the command line take precedence over the configuration file.
`--states` only restricts the summary: it is rejected together with `--check`, `--out`
or `--reference`. The excluded files are skipped in every mode.
Pass `--verbose` (or set `RUST_LOG`) to see the details of the processing.

*/
