use std::sync::{Arc, Mutex};
use std::time::Duration;

use mediator::AsyncMediator;

use crate::app::{Debouncer, SharedMediator};
use crate::catalog::{CatalogState, CategoryFilter, LoadPhase, SortKey};
use crate::models::Category;
use crate::queries::LoadCatalogRequest;
use crate::viewmodel::{CatalogStats, ProductCard, ProductDetail, ProductRow};

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Shell for the catalog pages. One instance backs both the grid and the
/// admin table; they differ only in which view-model accessor they read
/// and which search entry point they wire to their input.
pub struct CatalogApp {
    mediator: SharedMediator,
    state: Arc<Mutex<CatalogState>>,
    search_debounce: Debouncer,
}

impl CatalogApp {
    pub fn new(mediator: SharedMediator) -> Self {
        CatalogApp {
            mediator,
            state: Arc::new(Mutex::new(CatalogState::new())),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    /// Initial load and the retry action are the same operation: fetch
    /// through the source chain, then either install the list or move to
    /// the retryable `Failed` phase.
    pub async fn reload(&self) {
        self.state.lock().unwrap().begin_loading();
        let result = self.mediator.lock().await.send(LoadCatalogRequest).await;

        let mut state = self.state.lock().unwrap();
        match result {
            Ok(Ok(products)) => state.load(products),
            Ok(Err(err)) => state.fail(err.to_string()),
            Err(err) => state.fail(err.to_string()),
        }
    }

    pub async fn retry(&self) {
        self.reload().await;
    }

    /// Commit-on-change search: filters immediately (admin table variant).
    pub fn search(&self, term: &str) {
        let mut state = self.state.lock().unwrap();
        state.set_term(term);
        state.apply_filters();
    }

    /// Search-as-you-type: the term is recorded at once but filtering only
    /// runs 300 ms after the last keystroke (grid variant).
    pub fn search_input(&mut self, term: &str) {
        self.state.lock().unwrap().set_term(term);
        let state = self.state.clone();
        self.search_debounce.schedule(async move {
            state.lock().unwrap().apply_filters();
        });
    }

    pub fn select_category(&self, category: CategoryFilter) {
        let mut state = self.state.lock().unwrap();
        state.set_category(category);
        state.apply_filters();
    }

    pub fn change_sort(&self, sort: SortKey) {
        let mut state = self.state.lock().unwrap();
        state.set_sort(sort);
        state.apply_filters();
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.lock().unwrap().phase().clone()
    }

    pub fn cards(&self) -> Vec<ProductCard> {
        self.state
            .lock()
            .unwrap()
            .filtered()
            .iter()
            .map(ProductCard::from)
            .collect()
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        self.state
            .lock()
            .unwrap()
            .filtered()
            .iter()
            .map(ProductRow::from)
            .collect()
    }

    /// Detail view for one product, looked up in the full cache so a
    /// filtered-out product can still be opened.
    pub fn detail(&self, id: i64) -> Option<ProductDetail> {
        self.state.lock().unwrap().find(id).map(ProductDetail::from)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state.lock().unwrap().categories().to_vec()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::of(&self.state.lock().unwrap())
    }
}
