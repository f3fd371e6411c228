//! Search, sort, filter, and statistics over an in-memory donor list. The
//! directory pages fetch the list wholesale and run these on every keystroke,
//! so everything here is pure and allocation-light.

use super::{BloodType, DonorRecord};
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    BloodType,
    City,
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::BloodType,
        SortKey::City,
        SortKey::Newest,
    ];

    /// Stable value for `<option value=..>`.
    pub fn key(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::BloodType => "bloodType",
            SortKey::City => "city",
            SortKey::Newest => "date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::BloodType => "Blood Type",
            SortKey::City => "City",
            SortKey::Newest => "Registration Date",
        }
    }

    pub fn from_key(value: &str) -> Option<SortKey> {
        SortKey::ALL.into_iter().find(|key| key.key() == value)
    }
}

/// Case-insensitive substring search across name, city, and blood group,
/// then an ordering pass. An empty term keeps everything.
pub fn search_and_sort(donors: &[DonorRecord], term: &str, key: SortKey) -> Vec<DonorRecord> {
    let term = term.trim().to_lowercase();
    let mut matched: Vec<DonorRecord> = donors
        .iter()
        .filter(|donor| term.is_empty() || matches_term(donor, &term))
        .cloned()
        .collect();
    sort_donors(&mut matched, key);
    matched
}

fn matches_term(donor: &DonorRecord, term: &str) -> bool {
    donor.name.to_lowercase().contains(term)
        || donor.city.to_lowercase().contains(term)
        || donor
            .blood_type
            .is_some_and(|blood_type| blood_type.label().to_lowercase().contains(term))
}

fn sort_donors(donors: &mut [DonorRecord], key: SortKey) {
    match key {
        SortKey::Name => {
            donors.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::BloodType => {
            // None (unknown group) sorts last.
            donors.sort_by(|a, b| match (a.blood_type, b.blood_type) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        SortKey::City => {
            donors.sort_by(|a, b| a.city.to_lowercase().cmp(&b.city.to_lowercase()));
        }
        SortKey::Newest => {
            // Descending; rows without a timestamp go last.
            donors.sort_by(|a, b| match (a.created_at, b.created_at) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
    }
}

/// Find-donor filters: exact blood group, case-insensitive city substring.
/// `None` / empty means "no filter".
pub fn filter_donors(
    donors: &[DonorRecord],
    blood_type: Option<BloodType>,
    city: &str,
) -> Vec<DonorRecord> {
    let city = city.trim().to_lowercase();
    donors
        .iter()
        .filter(|donor| {
            blood_type.is_none_or(|wanted| donor.blood_type == Some(wanted))
                && (city.is_empty() || donor.city.to_lowercase().contains(&city))
        })
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub cities: usize,
    pub blood_types: usize,
}

pub fn stats(donors: &[DonorRecord]) -> DirectoryStats {
    let cities: HashSet<&str> = donors
        .iter()
        .map(|donor| donor.city.as_str())
        .filter(|city| !city.is_empty())
        .collect();
    let blood_types: HashSet<BloodType> =
        donors.iter().filter_map(|donor| donor.blood_type).collect();

    DirectoryStats {
        total: donors.len(),
        cities: cities.len(),
        blood_types: blood_types.len(),
    }
}

/// Count and rounded percentage for each of the eight groups, zero counts
/// included, in the canonical group order.
pub fn distribution(donors: &[DonorRecord]) -> Vec<(BloodType, usize, u32)> {
    BloodType::ALL
        .into_iter()
        .map(|blood_type| {
            let count = donors
                .iter()
                .filter(|donor| donor.blood_type == Some(blood_type))
                .count();
            let percent = if donors.is_empty() {
                0
            } else {
                ((count as f64 / donors.len() as f64) * 100.0).round() as u32
            };
            (blood_type, count, percent)
        })
        .collect()
}

/// Registration date for display; rows without a timestamp show "N/A".
pub fn registered_on(record: &DonorRecord) -> String {
    match record.created_at {
        Some(created_at) => created_at.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        distribution, filter_donors, registered_on, search_and_sort, stats, SortKey,
    };
    use crate::donors::{BloodType, DonorRecord};
    use chrono::{TimeZone, Utc};

    fn donor(id: i64, name: &str, city: &str, blood_type: Option<BloodType>) -> DonorRecord {
        DonorRecord {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "9876543210".to_string(),
            blood_type,
            city: city.to_string(),
            location: String::new(),
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, id as u32, 12, 0, 0).unwrap()),
        }
    }

    fn sample() -> Vec<DonorRecord> {
        vec![
            donor(1, "Asha", "Pune", Some(BloodType::OPositive)),
            donor(2, "Rahul", "Mumbai", Some(BloodType::ANegative)),
            donor(3, "Meera", "Pune", Some(BloodType::OPositive)),
            donor(4, "Vikram", "Nagpur", None),
        ]
    }

    #[test]
    fn search_matches_name_city_and_blood_group() {
        let donors = sample();

        let by_name = search_and_sort(&donors, "rah", SortKey::Name);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Rahul");

        let by_city = search_and_sort(&donors, "PUNE", SortKey::Name);
        assert_eq!(by_city.len(), 2);

        let by_group = search_and_sort(&donors, "o+", SortKey::Name);
        assert_eq!(by_group.len(), 2);

        let everything = search_and_sort(&donors, "  ", SortKey::Name);
        assert_eq!(everything.len(), 4);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut donors = sample();
        donors[0].name = "asha".to_string();
        let sorted = search_and_sort(&donors, "", SortKey::Name);
        let names: Vec<&str> = sorted.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["asha", "Meera", "Rahul", "Vikram"]);
    }

    #[test]
    fn newest_sort_is_descending_with_undated_rows_last() {
        let mut donors = sample();
        donors[1].created_at = None;
        let sorted = search_and_sort(&donors, "", SortKey::Newest);
        let ids: Vec<i64> = sorted.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![4, 3, 1, 2]);
    }

    #[test]
    fn blood_type_sort_puts_unknown_last() {
        let sorted = search_and_sort(&sample(), "", SortKey::BloodType);
        let groups: Vec<Option<BloodType>> = sorted.iter().map(|d| d.blood_type).collect();
        assert_eq!(
            groups,
            vec![
                Some(BloodType::ANegative),
                Some(BloodType::OPositive),
                Some(BloodType::OPositive),
                None
            ]
        );
    }

    #[test]
    fn filters_compose_and_ignore_case() {
        let donors = sample();

        let o_positive = filter_donors(&donors, Some(BloodType::OPositive), "");
        assert_eq!(o_positive.len(), 2);

        let pune_o_positive = filter_donors(&donors, Some(BloodType::OPositive), "pun");
        assert_eq!(pune_o_positive.len(), 2);

        let mumbai_o_positive = filter_donors(&donors, Some(BloodType::OPositive), "Mumbai");
        assert!(mumbai_o_positive.is_empty());

        let unfiltered = filter_donors(&donors, None, "");
        assert_eq!(unfiltered.len(), 4);
    }

    #[test]
    fn stats_count_distinct_values() {
        let counted = stats(&sample());
        assert_eq!(counted.total, 4);
        assert_eq!(counted.cities, 3);
        assert_eq!(counted.blood_types, 2);

        assert_eq!(stats(&[]).total, 0);
    }

    #[test]
    fn distribution_covers_all_groups_with_rounded_percentages() {
        let donors = vec![
            donor(1, "Asha", "Pune", Some(BloodType::OPositive)),
            donor(2, "Rahul", "Mumbai", Some(BloodType::OPositive)),
            donor(3, "Meera", "Pune", Some(BloodType::ANegative)),
        ];
        let spread = distribution(&donors);

        assert_eq!(spread.len(), 8);
        assert!(spread.contains(&(BloodType::OPositive, 2, 67)));
        assert!(spread.contains(&(BloodType::ANegative, 1, 33)));
        assert!(spread.contains(&(BloodType::AbPositive, 0, 0)));

        let empty = distribution(&[]);
        assert!(empty.iter().all(|&(_, count, percent)| count == 0 && percent == 0));
    }

    #[test]
    fn registration_date_falls_back_to_na() {
        let mut record = donor(5, "Asha", "Pune", None);
        assert_eq!(registered_on(&record), "Jan 5, 2024");
        record.created_at = None;
        assert_eq!(registered_on(&record), "N/A");
    }
}
