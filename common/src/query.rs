use crate::SearchFilters;

/// Assembles the free-text search phrase for `filters`.
///
/// Produces `Jobs in {location}[ for {title}][ in {companies}][ {work type}]`,
/// appending each optional segment only when it is non-empty. Values are used
/// as given: no trimming, escaping or length limit.
pub fn build_query(filters: &SearchFilters) -> String {
    let mut query = format!("Jobs in {}", filters.location);

    if let Some(title) = non_empty(&filters.job_title) {
        query.push_str(" for ");
        query.push_str(title);
    }

    if let Some(companies) = non_empty(&filters.companies) {
        query.push_str(" in ");
        query.push_str(companies);
    }

    if let Some(work_type) = non_empty(&filters.work_type) {
        query.push(' ');
        query.push_str(work_type);
    }

    query
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
