use crate::domain::model::ServiceType;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServiceDropdown<'a> {
    Hidden,
    /// Open, nothing matches the query.
    Empty,
    Items(&'a [ServiceType]),
}

/// Case-insensitive substring match on the display name. An empty query matches nothing.
pub fn filter_services(services: &[ServiceType], query: &str) -> Vec<ServiceType> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    services
        .iter()
        .filter(|service| service.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone)]
pub struct ServiceFilter {
    services: Arc<[ServiceType]>,
    query: String,
    filtered: Vec<ServiceType>,
    dropdown_open: bool,
}

impl ServiceFilter {
    pub fn new(services: Arc<[ServiceType]>) -> Self {
        Self {
            services,
            query: String::new(),
            filtered: Vec::new(),
            dropdown_open: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn services(&self) -> &Arc<[ServiceType]> {
        &self.services
    }

    pub fn filtered(&self) -> &[ServiceType] {
        &self.filtered
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn dropdown(&self) -> ServiceDropdown<'_> {
        match (self.dropdown_open, self.filtered.is_empty()) {
            (false, _) => ServiceDropdown::Hidden,
            (true, true) => ServiceDropdown::Empty,
            (true, false) => ServiceDropdown::Items(&self.filtered),
        }
    }

    pub fn set_services(&mut self, services: Arc<[ServiceType]>) {
        self.services = services;
        self.recompute();
    }

    /// Typed input. A non-empty query opens the dropdown.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        if !self.query.is_empty() {
            self.dropdown_open = true;
        }
        self.recompute();
    }

    /// Sets the text without opening the dropdown (page parameters on mount).
    pub fn prefill(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.recompute();
    }

    pub fn focus(&mut self) {
        if !self.query.is_empty() {
            self.dropdown_open = true;
        }
    }

    pub fn select_index(&mut self, index: usize) -> Option<ServiceType> {
        let service = self.filtered.get(index)?.clone();
        self.query = service.name.clone();
        self.recompute();
        self.dropdown_open = false;
        Some(service)
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    fn recompute(&mut self) {
        self.filtered = filter_services(&self.services, &self.query);
        if self.query.is_empty() {
            self.dropdown_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services(names: &[&str]) -> Arc<[ServiceType]> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| ServiceType {
                id: format!("s{}", i),
                name: name.to_string(),
                image: format!("https://img.test/{}.png", i),
            })
            .collect()
    }

    fn names(list: &[ServiceType]) -> Vec<&str> {
        list.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let list = services(&["Cafe", "Lounge", "Spa & Massage", "Currency Exchange"]);
        assert_eq!(names(&filter_services(&list, "lou")), vec!["Lounge"]);
        assert_eq!(names(&filter_services(&list, "AGE")), vec!["Spa & Massage"]);
        assert_eq!(
            names(&filter_services(&list, "c")),
            vec!["Cafe", "Currency Exchange"]
        );
        assert!(filter_services(&list, "").is_empty());
    }

    #[test]
    fn test_filter_matches_exact_subset_for_every_query() {
        let list = services(&["Cafe", "Lounge", "Pharmacy", "Duty Free"]);
        for query in ["a", "E", "ge", "free", "zz", "CAFE", " "] {
            let expected: Vec<&str> = list
                .iter()
                .filter(|s| s.name.to_lowercase().contains(&query.to_lowercase()))
                .map(|s| s.name.as_str())
                .collect();
            assert_eq!(names(&filter_services(&list, query)), expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_typing_filters_and_opens_dropdown() {
        let mut filter = ServiceFilter::new(services(&["Cafe", "Lounge"]));
        filter.set_query("lou");
        assert_eq!(names(filter.filtered()), vec!["Lounge"]);
        assert!(matches!(filter.dropdown(), ServiceDropdown::Items(items) if items.len() == 1));

        filter.set_query("xyz");
        assert!(filter.filtered().is_empty());
        assert_eq!(filter.dropdown(), ServiceDropdown::Empty);
    }

    #[test]
    fn test_empty_query_closes_dropdown() {
        let mut filter = ServiceFilter::new(services(&["Cafe", "Lounge"]));
        filter.set_query("ca");
        assert!(filter.is_dropdown_open());

        filter.set_query("");
        assert!(filter.filtered().is_empty());
        assert_eq!(filter.dropdown(), ServiceDropdown::Hidden);

        filter.focus();
        assert!(!filter.is_dropdown_open());
    }

    #[test]
    fn test_select_writes_name_and_closes() {
        let mut filter = ServiceFilter::new(services(&["Cafe", "Lounge"]));
        filter.set_query("l");
        let picked = filter.select_index(0).unwrap();
        assert_eq!(picked.name, "Lounge");
        assert_eq!(filter.query(), "Lounge");
        assert!(!filter.is_dropdown_open());
        assert!(filter.select_index(5).is_none());
    }

    #[test]
    fn test_service_list_arrival_recomputes() {
        let mut filter = ServiceFilter::new(services(&[]));
        filter.prefill("cafe");
        assert!(filter.filtered().is_empty());
        assert!(!filter.is_dropdown_open());

        filter.set_services(services(&["Cafe", "Lounge"]));
        assert_eq!(names(filter.filtered()), vec!["Cafe"]);
        assert!(!filter.is_dropdown_open());
    }
}
