use crate::core::navigation::service_link;
use crate::domain::model::ServiceType;
use std::sync::Arc;

pub const FEATURED_COUNT: usize = 2;
pub const GRID_LIMIT: usize = 6;

/// Service cards promoted at the top of the home page.
pub fn featured_services(services: &[ServiceType]) -> &[ServiceType] {
    &services[..services.len().min(FEATURED_COUNT)]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceTile<'a> {
    pub service: &'a ServiceType,
    pub href: String,
}

impl<'a> ServiceTile<'a> {
    fn new(service: &'a ServiceType) -> Self {
        Self {
            service,
            href: service_link(&service.name),
        }
    }
}

/// Home page service grid with its "view all" modal.
#[derive(Debug, Clone)]
pub struct CatalogSection {
    services: Arc<[ServiceType]>,
    modal_open: bool,
}

impl CatalogSection {
    pub fn new(services: Arc<[ServiceType]>) -> Self {
        Self {
            services,
            modal_open: false,
        }
    }

    pub fn shows_view_all(&self) -> bool {
        self.services.len() > GRID_LIMIT
    }

    /// First five tiles when "view all" is shown, leaving the sixth slot for the button.
    pub fn grid(&self) -> Vec<ServiceTile<'_>> {
        let visible = if self.shows_view_all() {
            &self.services[..GRID_LIMIT - 1]
        } else {
            &self.services[..]
        };
        visible.iter().map(ServiceTile::new).collect()
    }

    pub fn open_all(&mut self) {
        self.modal_open = true;
    }

    pub fn close_all(&mut self) {
        self.modal_open = false;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Every tile; empty while the modal is closed.
    pub fn modal_tiles(&self) -> Vec<ServiceTile<'_>> {
        if !self.modal_open {
            return Vec::new();
        }
        self.services.iter().map(ServiceTile::new).collect()
    }

    /// Following a tile from the modal closes it.
    pub fn follow(&mut self, index: usize) -> Option<String> {
        let href = service_link(&self.services.get(index)?.name);
        self.modal_open = false;
        Some(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services(count: usize) -> Arc<[ServiceType]> {
        (0..count)
            .map(|i| ServiceType {
                id: format!("s{}", i),
                name: format!("Service {}", i),
                image: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_featured_takes_at_most_two() {
        assert_eq!(featured_services(&services(5)).len(), 2);
        assert_eq!(featured_services(&services(1)).len(), 1);
        assert!(featured_services(&services(0)).is_empty());
    }

    #[test]
    fn test_small_catalog_shows_everything() {
        let section = CatalogSection::new(services(6));
        assert!(!section.shows_view_all());
        assert_eq!(section.grid().len(), 6);
    }

    #[test]
    fn test_large_catalog_shows_five_and_view_all() {
        let section = CatalogSection::new(services(9));
        assert!(section.shows_view_all());
        let grid = section.grid();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0].href, "/search?service=Service+0");
    }

    #[test]
    fn test_modal_lists_all_and_closes_on_follow() {
        let mut section = CatalogSection::new(services(9));
        assert!(section.modal_tiles().is_empty());

        section.open_all();
        assert_eq!(section.modal_tiles().len(), 9);

        assert_eq!(section.follow(8).as_deref(), Some("/search?service=Service+8"));
        assert!(!section.is_modal_open());
        assert!(section.follow(42).is_none());
    }
}
