//! Catalog loading, caching and the in-memory filter/sort engine.

mod filter;
mod source;

pub use filter::{filter_products, sort_products, CategoryFilter, SortKey, UnknownSortKey};
pub use source::{FallbackSource, HttpProductSource, ProductSource};

use crate::models::{Category, Product};

/// Where the catalog currently stands. `Failed` is retryable: the caller
/// re-triggers the load, nothing else needs resetting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

/// Session state of the catalog views.
///
/// Replaces the original scripts' module-level globals (`allProducts`,
/// `filteredProducts`, `currentCategory`, ...) with one owned object that
/// the filter and view-model functions receive explicitly.
#[derive(Debug, Default)]
pub struct CatalogState {
    all: Vec<Product>,
    filtered: Vec<Product>,
    categories: Vec<Category>,
    term: String,
    category: CategoryFilter,
    sort: SortKey,
    phase: LoadPhase,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Installs a freshly fetched product list: full cache, filtered view
    /// seeded as a plain copy (pending selections are kept but not applied
    /// until the next filter event, like the originals), categories
    /// extracted in first-seen order.
    pub fn load(&mut self, products: Vec<Product>) {
        self.categories = extract_categories(&products);
        self.filtered = products.clone();
        self.all = products;
        self.phase = LoadPhase::Ready;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::Failed {
            message: message.into(),
        };
    }

    /// Drops all cached data and selections back to the initial state.
    pub fn reset(&mut self) {
        *self = CatalogState::default();
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into().trim().to_owned();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Recomputes the filtered view from the untouched full cache and
    /// applies the current sort key. Term and category always re-apply
    /// together; filters never stack on a previous result.
    pub fn apply_filters(&mut self) {
        self.filtered = filter_products(&self.all, &self.term, self.category);
        sort_products(&mut self.filtered, self.sort);
    }

    pub fn all(&self) -> &[Product] {
        &self.all
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn find(&self, id: i64) -> Option<&Product> {
        self.all.iter().find(|p| p.id == id)
    }
}

fn extract_categories(products: &[Product]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for product in products {
        if let Some(category) = &product.category {
            if !categories.iter().any(|c| c.id == category.id) {
                categories.push(category.clone());
            }
        }
    }
    categories
}
