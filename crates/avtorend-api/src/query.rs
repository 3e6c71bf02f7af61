//! Query parameters for `GET /api/cars`

use avtorend_core::{CarStatus, CategoryFilter};

/// Upper bound the backend enforces on `limit`.
pub const MAX_LIMIT: u32 = 100;

/// Filter and paging options for a vehicle listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleQuery {
    pub category_id: Option<u64>,
    pub brand: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub status: Option<CarStatus>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl VehicleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query scoped to a category filter (`All` omits `category_id`).
    pub fn for_filter(filter: CategoryFilter) -> Self {
        Self {
            category_id: filter.category_id(),
            ..Self::default()
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_status(mut self, status: CarStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set paging; `limit` is clamped to `1..=MAX_LIMIT`.
    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit.clamp(1, MAX_LIMIT));
        self.offset = Some(offset);
        self
    }

    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from(self.category_id)
    }

    /// Query pairs in the order the backend documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.category_id {
            pairs.push(("category_id", id.to_string()));
        }
        if let Some(brand) = self.brand.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
            pairs.push(("brand", brand.to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", max.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_query().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }

    /// Append this query to `url`, leaving it untouched when empty.
    pub fn apply(&self, url: &mut url::Url) {
        let pairs = self.to_pairs();
        if pairs.is_empty() {
            return;
        }
        let mut serializer = url.query_pairs_mut();
        for (key, value) in pairs {
            serializer.append_pair(key, &value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn render(query: &VehicleQuery) -> String {
        let mut url = url::Url::parse("http://localhost:8000/api/cars").unwrap();
        query.apply(&mut url);
        url.to_string()
    }

    #[test]
    fn test_empty_query_has_no_query_string() {
        assert_snapshot!(render(&VehicleQuery::new()), @"http://localhost:8000/api/cars");
    }

    #[test]
    fn test_all_filter_omits_category() {
        let query = VehicleQuery::for_filter(CategoryFilter::All);
        assert!(query.to_pairs().is_empty());
    }

    #[test]
    fn test_category_filter_query() {
        let query = VehicleQuery::for_filter(CategoryFilter::Category(5));
        assert_snapshot!(render(&query), @"http://localhost:8000/api/cars?category_id=5");
    }

    #[test]
    fn test_full_query_order() {
        let query = VehicleQuery::for_filter(CategoryFilter::Category(2))
            .with_brand("Kia Motors")
            .with_price_range(Some(1500.0), Some(4000.5))
            .with_status(CarStatus::Available)
            .with_page(20, 40);
        assert_snapshot!(
            render(&query),
            @"http://localhost:8000/api/cars?category_id=2&brand=Kia+Motors&min_price=1500&max_price=4000.5&status=AVAILABLE&limit=20&offset=40"
        );
    }

    #[test]
    fn test_blank_brand_is_dropped() {
        let query = VehicleQuery::new().with_brand("   ");
        assert!(query.to_pairs().is_empty());
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(VehicleQuery::new().with_page(500, 0).limit, Some(MAX_LIMIT));
        assert_eq!(VehicleQuery::new().with_page(0, 0).limit, Some(1));
    }

    #[test]
    fn test_filter_roundtrip() {
        let query = VehicleQuery::for_filter(CategoryFilter::Category(9));
        assert_eq!(query.filter(), CategoryFilter::Category(9));
    }
}
