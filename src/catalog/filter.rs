use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::Product;

/// Category selection of the catalog grid. `All` is the default button and
/// matches every product, including those without a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Id(i64),
}

impl FromStr for CategoryFilter {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Id)
        }
    }
}

/// Sort order applied after filtering. `Default` keeps the fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Default,
    NameAsc,
    NameDesc,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortKey::Default),
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            _ => Err(UnknownSortKey(s.to_owned())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(String);

/// Derives the filtered view from the full cache. The term matches any of
/// title, description or category name (case-insensitive substring, OR),
/// AND'ed with exact category-id equality unless the filter is `All`.
///
/// Always filters the full list, never a previous result, so term and
/// category changes compose instead of accumulating.
pub fn filter_products(all: &[Product], term: &str, category: CategoryFilter) -> Vec<Product> {
    let term = term.trim().to_lowercase();
    all.iter()
        .filter(|product| matches_category(product, category) && matches_term(product, &term))
        .cloned()
        .collect()
}

fn matches_category(product: &Product, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        // No category on the product means no match against a concrete id.
        CategoryFilter::Id(id) => product.category.as_ref().map_or(false, |c| c.id == id),
    }
}

fn matches_term(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    product.title.to_lowercase().contains(term)
        || product
            .description
            .as_deref()
            .map_or(false, |d| d.to_lowercase().contains(term))
        || product
            .category
            .as_ref()
            .map_or(false, |c| c.name.to_lowercase().contains(term))
}

/// Sorts in place. `Default` is a no-op: the list stays in fetch order and
/// the sort is stable, so ties keep their relative order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::NameAsc => products.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::NameDesc => products.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        SortKey::PriceLow => products.sort_by(|a, b| compare_prices(a.price, b.price)),
        SortKey::PriceHigh => products.sort_by(|a, b| compare_prices(b.price, a.price)),
    }
}

// Case-folded comparison stands in for the browser's locale compare; exact
// bytes break the remaining ties so asc and desc mirror each other.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_prices(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn product(id: i64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_owned(),
            price,
            description: None,
            category: None,
            images: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn with_category(mut p: Product, id: i64, name: &str) -> Product {
        p.category = Some(Category {
            id,
            name: name.to_owned(),
            slug: None,
        });
        p
    }

    fn with_description(mut p: Product, description: &str) -> Product {
        p.description = Some(description.to_owned());
        p
    }

    fn sample() -> Vec<Product> {
        vec![
            with_category(
                with_description(product(1, "Red Shirt", 20.0), "A cotton shirt"),
                1,
                "Clothes",
            ),
            with_category(product(2, "Laptop", 900.0), 2, "Electronics"),
            with_description(product(3, "Mystery Box", 5.0), "Could be anything"),
            product(4, "Bare Item", 10.0),
        ]
    }

    #[test]
    fn empty_term_matches_all() {
        let all = sample();
        let filtered = filter_products(&all, "", CategoryFilter::All);
        assert_eq!(filtered.len(), all.len());
    }

    #[test]
    fn term_matches_title_description_or_category_name() {
        let all = sample();
        assert_eq!(filter_products(&all, "laptop", CategoryFilter::All).len(), 1);
        assert_eq!(filter_products(&all, "cotton", CategoryFilter::All).len(), 1);
        assert_eq!(filter_products(&all, "electronics", CategoryFilter::All).len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let all = sample();
        assert_eq!(filter_products(&all, "LAPTOP", CategoryFilter::All).len(), 1);
        assert_eq!(filter_products(&all, "ClOtHeS", CategoryFilter::All).len(), 1);
    }

    #[test]
    fn products_without_the_field_never_match_on_it() {
        let all = sample();
        // "anything" only appears in product 3's description; product 4 has
        // no description and must not leak in.
        let filtered = filter_products(&all, "anything", CategoryFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn category_filter_excludes_products_without_category() {
        let all = sample();
        let filtered = filter_products(&all, "", CategoryFilter::Id(1));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);

        // "All" keeps category-less products in.
        let ids: Vec<i64> = filter_products(&all, "", CategoryFilter::All)
            .iter()
            .map(|p| p.id)
            .collect();
        assert!(ids.contains(&3));
        assert!(ids.contains(&4));
    }

    #[test]
    fn term_and_category_are_conjunctive() {
        let all = sample();
        // "shirt" matches product 1 but category 2 does not.
        let filtered = filter_products(&all, "shirt", CategoryFilter::Id(2));
        assert!(filtered.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let all = sample();
        let once = filter_products(&all, "it", CategoryFilter::All);
        let twice = filter_products(&once, "it", CategoryFilter::All);
        assert_eq!(once, twice);
    }

    #[test]
    fn name_sort_orders_case_insensitively() {
        let mut products = vec![
            product(1, "banana", 1.0),
            product(2, "Apple", 1.0),
            product(3, "cherry", 1.0),
        ];
        sort_products(&mut products, SortKey::NameAsc);
        let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn name_desc_is_the_exact_reverse_of_name_asc() {
        let mut asc = sample();
        sort_products(&mut asc, SortKey::NameAsc);
        let mut desc = sample();
        sort_products(&mut desc, SortKey::NameDesc);
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn price_sorts_numerically() {
        let mut products = sample();
        sort_products(&mut products, SortKey::PriceLow);
        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![5.0, 10.0, 20.0, 900.0]);

        sort_products(&mut products, SortKey::PriceHigh);
        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![900.0, 20.0, 10.0, 5.0]);
    }

    #[test]
    fn default_sort_preserves_fetch_order() {
        let mut products = sample();
        let before: Vec<i64> = products.iter().map(|p| p.id).collect();
        sort_products(&mut products, SortKey::Default);
        let after: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn sort_keys_round_trip_their_wire_names() {
        for key in [
            SortKey::Default,
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::PriceLow,
            SortKey::PriceHigh,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("price-middle".parse::<SortKey>().is_err());
    }

    #[test]
    fn category_filter_parses_all_and_ids() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("3".parse::<CategoryFilter>().unwrap(), CategoryFilter::Id(3));
        assert!("garbage".parse::<CategoryFilter>().is_err());
    }
}
