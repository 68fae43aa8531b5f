//! Random base-item selection
//!
//! Filters are resolved by the caller (a faction and/or a main type, `None`
//! meaning any); this module only matches records against them and picks one
//! uniformly with the caller's RNG.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::lore::{faction_and_type, split_type};
use crate::record::{eligible, FlatItemRecord};

/// Faction and main type of a record.
///
/// Read from the bracket tags in `Lore`, falling back to the `Class` and
/// `Type` columns for records whose lore carries no tags.
pub fn classify(record: &FlatItemRecord) -> (Option<String>, Option<String>) {
    let (faction, item_type) = record.get("Lore").map(faction_and_type).unwrap_or_default();
    let faction = faction.or_else(|| record.get("Class").map(String::from));
    let item_type = item_type.or_else(|| {
        record
            .get("Type")
            .or_else(|| record.get("Supertype"))
            .map(|t| split_type(t).0)
    });
    (faction, item_type)
}

/// Resolved filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub faction: Option<String>,
    pub item_type: Option<String>,
}

impl ItemFilter {
    pub fn new(faction: Option<String>, item_type: Option<String>) -> Self {
        // "Any" is how selection lists spell the wildcard
        let any = |v: Option<String>| v.filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("any"));
        ItemFilter {
            faction: any(faction),
            item_type: any(item_type),
        }
    }

    pub fn is_any(&self) -> bool {
        self.faction.is_none() && self.item_type.is_none()
    }

    pub fn matches(&self, record: &FlatItemRecord) -> bool {
        if self.is_any() {
            return true;
        }
        let (faction, item_type) = classify(record);
        let faction_ok = self.faction.is_none() || self.faction == faction;
        let type_ok = self.item_type.is_none() || self.item_type == item_type;
        faction_ok && type_ok
    }
}

/// Pick a random eligible record matching `filter`
pub fn choose<'a, R: Rng + ?Sized>(
    records: &'a [FlatItemRecord],
    filter: &ItemFilter,
    rng: &mut R,
) -> Option<&'a FlatItemRecord> {
    let candidates: Vec<&FlatItemRecord> =
        eligible(records).filter(|r| filter.matches(r)).collect();
    debug!(candidates = candidates.len(), ?filter, "Choosing base item");
    candidates.choose(rng).copied()
}

/// Distinct factions and main types across eligible records, for filter lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub factions: BTreeSet<String>,
    pub item_types: BTreeSet<String>,
}

pub fn facets(records: &[FlatItemRecord]) -> Facets {
    let mut facets = Facets::default();
    for record in eligible(records) {
        let (faction, item_type) = classify(record);
        facets.factions.extend(faction);
        facets.item_types.extend(item_type);
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(pairs: &[(&str, &str)]) -> FlatItemRecord {
        pairs.iter().copied().collect()
    }

    fn sample() -> Vec<FlatItemRecord> {
        vec![
            record(&[("ItemName", "Halo"), ("Lore", "&9[Angelic]\n&9[Melee, Sword]")]),
            record(&[("ItemName", "Ember"), ("Lore", "&9[Nether]\n&9[Melee, Axe]")]),
            record(&[("ItemName", "Wing"), ("Class", "Angelic"), ("Type", "Ranged, Bow")]),
            record(&[("Display", "nameless"), ("Lore", "&9[Angelic]")]),
        ]
    }

    #[test]
    fn test_classify_from_lore_and_columns() {
        let records = sample();
        assert_eq!(
            classify(&records[0]),
            (Some("Angelic".into()), Some("Melee".into()))
        );
        assert_eq!(
            classify(&records[2]),
            (Some("Angelic".into()), Some("Ranged".into()))
        );
        assert_eq!(classify(&record(&[("ItemName", "x")])), (None, None));
    }

    #[test]
    fn test_filter_wildcards() {
        let filter = ItemFilter::new(Some("Any".into()), Some(String::new()));
        assert!(filter.is_any());
        assert!(filter.matches(&record(&[("ItemName", "x")])));
    }

    #[test]
    fn test_filter_matches() {
        let records = sample();
        let angelic = ItemFilter::new(Some("Angelic".into()), None);
        let names: Vec<_> = eligible(&records)
            .filter(|r| angelic.matches(r))
            .filter_map(FlatItemRecord::item_name)
            .collect();
        assert_eq!(names, vec!["Halo", "Wing"]);

        let melee_nether = ItemFilter::new(Some("Nether".into()), Some("Melee".into()));
        assert!(melee_nether.matches(&records[1]));
        assert!(!melee_nether.matches(&records[0]));
    }

    #[test]
    fn test_choose_only_matching_eligible() {
        let records = sample();
        let filter = ItemFilter::new(Some("Angelic".into()), Some("Ranged".into()));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = choose(&records, &filter, &mut rng).unwrap();
            assert_eq!(picked.item_name(), Some("Wing"));
        }
    }

    #[test]
    fn test_choose_none_when_nothing_matches() {
        let records = sample();
        let filter = ItemFilter::new(Some("Void".into()), None);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(choose(&records, &filter, &mut rng).is_none());
        assert!(choose(&[], &ItemFilter::default(), &mut rng).is_none());
    }

    #[test]
    fn test_seeded_choice_is_reproducible() {
        let records = sample();
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            choose(&records, &ItemFilter::default(), &mut rng).and_then(FlatItemRecord::item_name)
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn test_facets() {
        let facets = facets(&sample());
        assert_eq!(
            facets.factions.into_iter().collect::<Vec<_>>(),
            vec!["Angelic", "Nether"]
        );
        assert_eq!(
            facets.item_types.into_iter().collect::<Vec<_>>(),
            vec!["Melee", "Ranged"]
        );
    }
}
