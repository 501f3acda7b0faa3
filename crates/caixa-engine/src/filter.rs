use crate::records::FilterableRecord;

/// Filter criteria for one ledger view. `None` means "all" for the two
/// enumerated dimensions; an empty search matches every record.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: String,
}

impl FilterCriteria {
    pub fn is_identity(&self) -> bool {
        self.status.is_none() && self.category.is_none() && self.search.is_empty()
    }
}

/// Returns the records matching every criterion, in input order. Summaries
/// are computed over the full collection elsewhere; this only decides which
/// rows a view shows.
pub fn filter_records<T>(records: &[T], criteria: &FilterCriteria) -> Vec<T>
where
    T: FilterableRecord + Clone,
{
    if criteria.is_identity() {
        return records.to_vec();
    }

    let search = criteria.search.to_lowercase();
    records
        .iter()
        .filter(|record| matches_criteria(*record, criteria, &search))
        .cloned()
        .collect()
}

fn matches_criteria<T>(record: &T, criteria: &FilterCriteria, search_lower: &str) -> bool
where
    T: FilterableRecord,
{
    if let Some(status) = criteria.status.as_deref()
        && record.status_key() != status
    {
        return false;
    }

    if let Some(category) = criteria.category.as_deref() {
        // A concrete category filter never matches a kind without categories.
        match record.category_key() {
            Some(key) if key == category => {}
            _ => return false,
        }
    }

    if search_lower.is_empty() {
        return true;
    }
    record.primary_name().to_lowercase().contains(search_lower)
}

#[cfg(test)]
mod tests {
    use crate::filter::{FilterCriteria, filter_records};
    use crate::records::FilterableRecord;
    use crate::seed::{seed_payables, seed_receivables};

    #[test]
    fn identity_criteria_returns_every_record_in_order() {
        let records = seed_payables();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_identity());

        let filtered = filter_records(&records, &criteria);
        assert_eq!(filtered.len(), records.len());
        for (kept, original) in filtered.iter().zip(records.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn search_is_case_insensitive_substring_on_primary_name() {
        let records = seed_payables();
        let criteria = FilterCriteria {
            search: "alpha".to_string(),
            ..FilterCriteria::default()
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
        assert_eq!(filtered[0].supplier, "Fornecedor Alpha");
    }

    #[test]
    fn status_filter_keeps_only_matching_records() {
        let records = seed_payables();
        let criteria = FilterCriteria {
            status: Some("overdue".to_string()),
            ..FilterCriteria::default()
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
        assert_eq!(filtered[0].supplier, "Aluguel Escritório");
    }

    #[test]
    fn category_filter_combines_with_status_and_search() {
        let records = seed_payables();
        let criteria = FilterCriteria {
            status: Some("pending".to_string()),
            category: Some("services".to_string()),
            search: "ti".to_string(),
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn category_filter_never_matches_uncategorized_records() {
        let records = seed_receivables();
        let criteria = FilterCriteria {
            category: Some("services".to_string()),
            ..FilterCriteria::default()
        };

        let filtered = filter_records(&records, &criteria);
        assert!(filtered.is_empty());
    }

    #[test]
    fn empty_result_is_valid_not_an_error() {
        let records = seed_payables();
        let criteria = FilterCriteria {
            search: "no such supplier".to_string(),
            ..FilterCriteria::default()
        };

        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn filtered_amounts_never_exceed_the_full_ledger() {
        let records = seed_payables();
        let full_total: f64 = records.iter().map(|record| record.amount).sum();

        for status in ["paid", "pending", "overdue"] {
            let criteria = FilterCriteria {
                status: Some(status.to_string()),
                ..FilterCriteria::default()
            };
            let subset_total: f64 = filter_records(&records, &criteria)
                .iter()
                .map(|record| record.amount)
                .sum();
            assert!(subset_total <= full_total);
        }
    }

    #[test]
    fn every_returned_record_satisfies_all_predicates() {
        let records = seed_payables();
        let criteria = FilterCriteria {
            status: Some("pending".to_string()),
            category: None,
            search: "e".to_string(),
        };

        for record in filter_records(&records, &criteria) {
            assert_eq!(record.status_key(), "pending");
            assert!(record.primary_name().to_lowercase().contains('e'));
        }
    }
}
