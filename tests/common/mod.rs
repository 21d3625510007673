#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use storefront_client::catalog::ProductSource;
use storefront_client::error::{Error, Result};
use storefront_client::models::{Category, Comment, Post, Product};
use storefront_client::records::{Record, RecordStore};

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// In-memory stand-in for a REST collection. Tracks how many mutations
/// were attempted so tests can assert that skipped operations really sent
/// nothing.
pub struct MemoryCollection<V> {
    items: Mutex<Vec<V>>,
    fail: AtomicBool,
    pub creates: AtomicUsize,
    pub replaces: AtomicUsize,
    pub removes: AtomicUsize,
}

impl<V: Record> MemoryCollection<V> {
    pub fn new(items: Vec<V>) -> Self {
        MemoryCollection {
            items: Mutex::new(items),
            fail: AtomicBool::new(false),
            creates: AtomicUsize::new(0),
            replaces: AtomicUsize::new(0),
            removes: AtomicUsize::new(0),
        }
    }

    pub fn items(&self) -> Vec<V> {
        self.items.lock().unwrap().clone()
    }

    pub fn find(&self, id: &str) -> Option<V> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Makes every subsequent call fail with a server error.
    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(Error::Status {
                url: "memory".to_owned(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<V: Record> RecordStore<V> for MemoryCollection<V> {
    async fn get_all(&self) -> Result<Vec<V>> {
        self.check()?;
        Ok(self.items())
    }

    async fn get(&self, id: &str) -> Result<Option<V>> {
        self.check()?;
        Ok(self.find(id))
    }

    async fn create(&self, value: &V) -> Result<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.items.lock().unwrap().push(value.clone());
        Ok(())
    }

    async fn replace(&self, id: &str, value: &V) -> Result<()> {
        self.replaces.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                *item = value.clone();
                Ok(())
            }
            None => Err(Error::Status {
                url: format!("memory/{}", id),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() < before {
            Ok(())
        } else {
            Err(Error::Status {
                url: format!("memory/{}", id),
                status: StatusCode::NOT_FOUND,
            })
        }
    }
}

/// Catalog source that always delivers the same list.
pub struct StaticSource(pub Vec<Product>);

#[async_trait]
impl ProductSource for StaticSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.0.clone())
    }
}

/// Catalog source that always answers with the given status.
pub struct FailingSource(pub StatusCode);

#[async_trait]
impl ProductSource for FailingSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Err(Error::Status {
            url: "failing".to_owned(),
            status: self.0,
        })
    }
}

/// Catalog source that fails a fixed number of times before recovering.
pub struct FlakySource {
    products: Vec<Product>,
    failures_left: AtomicUsize,
}

impl FlakySource {
    pub fn new(products: Vec<Product>, failures: usize) -> Self {
        FlakySource {
            products,
            failures_left: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl ProductSource for FlakySource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        if self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            })
            .is_ok()
        {
            Err(Error::Status {
                url: "flaky".to_owned(),
                status: StatusCode::SERVICE_UNAVAILABLE,
            })
        } else {
            Ok(self.products.clone())
        }
    }
}

pub fn product(id: i64, title: &str, price: f64) -> Product {
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

pub fn categorized(mut p: Product, category_id: i64, name: &str) -> Product {
    p.category = Some(Category {
        id: category_id,
        name: name.to_owned(),
        slug: None,
    });
    p
}

pub fn post(id: &str, title: &str, views: i64) -> Post {
    Post {
        id: id.to_owned(),
        title: title.to_owned(),
        views,
        is_deleted: false,
    }
}

pub fn comment(id: &str, text: &str, post_id: &str) -> Comment {
    Comment {
        id: id.to_owned(),
        text: text.to_owned(),
        post_id: post_id.to_owned(),
    }
}
