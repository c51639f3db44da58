//! Read-side operations over a snapshot of the collection: category filter,
//! name search, pagination and per-category counts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

use crate::models::Product;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Bucket for records whose category is empty.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Query string accepted by `GET /api/products`.
///
/// Kept as raw strings so bad numbers fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive exact category match
    pub category: Option<String>,
    /// Page number, starting at 1
    pub page: Option<String>,
    /// Page size
    pub limit: Option<String>,
}

impl ListQuery {
    /// True when the caller asked for the paginated envelope.
    pub fn wants_envelope(&self) -> bool {
        self.category.is_some() || self.page.is_some() || self.limit.is_some()
    }
}

/// Query string accepted by `GET /api/products/search`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name
    pub name: Option<String>,
}

/// Keep products whose category equals `category`, ignoring case.
/// A missing or blank filter keeps everything.
pub fn filter_by_category(products: Vec<Product>, category: Option<&str>) -> Vec<Product> {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => {
            let wanted = category.to_lowercase();
            products
                .into_iter()
                .filter(|p| p.category.to_lowercase() == wanted)
                .collect()
        }
        None => products,
    }
}

/// Products whose name contains `query`, ignoring case.
/// A blank query matches nothing.
pub fn search_by_name(products: Vec<Product>, query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    products
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Normalized page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn coerce(raw: Option<&str>, default: usize) -> usize {
    match raw.map(str::trim).and_then(|s| s.parse::<i64>().ok()) {
        Some(n) if n >= 1 => usize::try_from(n).unwrap_or(usize::MAX),
        Some(_) => 1,
        None => default,
    }
}

impl Pagination {
    /// Absent or non-numeric values take the defaults; numbers below 1 become 1.
    /// Only integer strings are numeric, so `2.5` also takes the default.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: coerce(page, DEFAULT_PAGE),
            limit: coerce(limit, DEFAULT_LIMIT),
        }
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit).max(1)
    }

    /// Slice one page out of `items`. Pages past the end are empty.
    pub fn apply<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let start = (self.page - 1).saturating_mul(self.limit);
        let data = items.into_iter().skip(start).take(self.limit).collect();

        Page {
            total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages(total),
            data,
        }
    }
}

/// Paginated envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub data: Vec<T>,
}

/// Record counts per lowercased category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryStats {
    pub total: usize,
    pub categories: BTreeMap<String, usize>,
}

pub fn category_stats(products: &[Product]) -> CategoryStats {
    let mut categories = BTreeMap::new();
    for product in products {
        let key = match product.category.trim() {
            "" => UNCATEGORIZED.to_string(),
            category => category.to_lowercase(),
        };
        *categories.entry(key).or_insert(0) += 1;
    }

    CategoryStats {
        total: products.len(),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_products;

    fn numbered(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let lower = filter_by_category(sample_products(), Some("electronics"));
        let mixed = filter_by_category(sample_products(), Some("Electronics"));

        assert_eq!(lower.len(), 2);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_category_filter_blank_keeps_everything() {
        assert_eq!(filter_by_category(sample_products(), None).len(), 3);
        assert_eq!(filter_by_category(sample_products(), Some("  ")).len(), 3);
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        assert!(filter_by_category(sample_products(), Some("electro")).is_empty());
    }

    #[test]
    fn test_search_matches_substring_ignoring_case() {
        let found = search_by_name(sample_products(), "PHONE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Smartphone");
    }

    #[test]
    fn test_search_blank_query_returns_nothing() {
        assert!(search_by_name(sample_products(), "").is_empty());
        assert!(search_by_name(sample_products(), "   ").is_empty());
    }

    #[test]
    fn test_pagination_defaults_and_coercion() {
        assert_eq!(Pagination::from_raw(None, None), Pagination::default());
        assert_eq!(
            Pagination::from_raw(Some("abc"), Some("")),
            Pagination { page: 1, limit: 10 }
        );
        assert_eq!(
            Pagination::from_raw(Some("0"), Some("-5")),
            Pagination { page: 1, limit: 1 }
        );
        assert_eq!(
            Pagination::from_raw(Some("3"), Some("25")),
            Pagination { page: 3, limit: 25 }
        );
    }

    #[test]
    fn test_fractional_pagination_takes_defaults() {
        assert_eq!(
            Pagination::from_raw(Some("2.5"), Some("7.0")),
            Pagination::default()
        );
    }

    #[test]
    fn test_total_pages_has_minimum_of_one() {
        let pagination = Pagination { page: 1, limit: 10 };
        assert_eq!(pagination.total_pages(0), 1);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(11), 2);
    }

    #[test]
    fn test_pages_reconstruct_full_list() {
        for total in [0, 1, 7, 10, 23] {
            for limit in [1, 3, 10, 50] {
                let items = numbered(total);
                let total_pages = Pagination { page: 1, limit }.total_pages(total);

                let rebuilt: Vec<usize> = (1..=total_pages)
                    .flat_map(|page| Pagination { page, limit }.apply(items.clone()).data)
                    .collect();

                assert_eq!(rebuilt, items, "total={total} limit={limit}");
                assert_eq!(total_pages, total.div_ceil(limit).max(1));
            }
        }
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = Pagination { page: 5, limit: 10 }.apply(numbered(12));
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 2);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = Pagination {
            page: usize::MAX,
            limit: usize::MAX,
        }
        .apply(numbered(3));
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_page_serializes_total_pages_in_camel_case() {
        let json = serde_json::to_value(Pagination::default().apply(numbered(2))).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["data"], serde_json::json!([0, 1]));
    }

    #[test]
    fn test_stats_counts_lowercased_categories() {
        let mut products = sample_products();
        products[0].category = "Electronics".to_string();
        products[2].category = String::new();

        let stats = category_stats(&products);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.categories.get("electronics"), Some(&2));
        assert_eq!(stats.categories.get(UNCATEGORIZED), Some(&1));
        assert_eq!(stats.categories.get("kitchen"), None);
    }
}
