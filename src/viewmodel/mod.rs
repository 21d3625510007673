//! Pure data → view-model transformations.
//!
//! Everything a UI needs to paint the catalog and the admin tables is
//! precomputed here, with no reference to any widget toolkit, so the whole
//! rendering contract is testable headlessly.

use chrono::{DateTime, Utc};

use crate::catalog::CatalogState;
use crate::models::{Comment, Post, Product};

const CARD_PLACEHOLDER: &str = "https://placehold.co/600x400/1a1a2e/667eea?text=No+Image";
const ROW_PLACEHOLDER: &str = "https://placehold.co/60x60/1a1a2e/667eea?text=No+Image";
const DETAIL_PLACEHOLDER: &str = "https://placehold.co/800x400/1a1a2e/667eea?text=No+Image";

const ROW_DESCRIPTION_LIMIT: usize = 100;

/// One product card in the grid view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category_name: String,
    pub price_label: String,
    pub image_url: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        ProductCard {
            id: product.id,
            title: product.title.clone(),
            description: description_or_default(product),
            category_name: category_or(product, "Uncategorized"),
            price_label: price_label(product.price),
            image_url: first_image(product, CARD_PLACEHOLDER),
        }
    }
}

/// One row of the admin table view. The description is clipped so the
/// table stays scannable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category_name: String,
    pub price_label: String,
    pub image_url: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        ProductRow {
            id: product.id,
            title: product.title.clone(),
            description: truncate(&description_or(product, "No description"), ROW_DESCRIPTION_LIMIT),
            category_name: category_or(product, "N/A"),
            price_label: price_label(product.price),
            image_url: first_image(product, ROW_PLACEHOLDER),
        }
    }
}

/// The expanded product view behind "View Details".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category_name: String,
    pub price_label: String,
    pub image_url: String,
    pub created_label: String,
    pub updated_label: String,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        ProductDetail {
            id: product.id,
            title: product.title.clone(),
            description: description_or_default(product),
            category_name: category_or(product, "Uncategorized"),
            price_label: price_label(product.price),
            image_url: first_image(product, DETAIL_PLACEHOLDER),
            created_label: date_label(product.created_at),
            updated_label: date_label(product.updated_at),
        }
    }
}

/// "Showing X of Y" counters shared by both catalog variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub showing: usize,
    pub total: usize,
    pub categories: usize,
}

impl CatalogStats {
    pub fn of(state: &CatalogState) -> Self {
        CatalogStats {
            showing: state.filtered().len(),
            total: state.all().len(),
            categories: state.categories().len(),
        }
    }
}

/// One row of the posts table. Soft-deleted posts stay listed but are
/// flagged for struck-through rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    pub id: String,
    pub title: String,
    pub views: i64,
    pub struck_through: bool,
}

impl From<&Post> for PostRow {
    fn from(post: &Post) -> Self {
        PostRow {
            id: post.id.clone(),
            title: post.title.clone(),
            views: post.views,
            struck_through: post.is_deleted,
        }
    }
}

/// One row of the comments table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub id: String,
    pub text: String,
    pub post_id: String,
}

impl From<&Comment> for CommentRow {
    fn from(comment: &Comment) -> Self {
        CommentRow {
            id: comment.id.clone(),
            text: comment.text.clone(),
            post_id: comment.post_id.clone(),
        }
    }
}

/// Contents of the comment edit form. Empty by default; populated when an
/// edit action fetches an existing comment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentForm {
    pub id: String,
    pub text: String,
    pub post_id: String,
}

impl From<&Comment> for CommentForm {
    fn from(comment: &Comment) -> Self {
        CommentForm {
            id: comment.id.clone(),
            text: comment.text.clone(),
            post_id: comment.post_id.clone(),
        }
    }
}

/// Dollar label with en-US grouping and at most two fraction digits:
/// `1250` → `$1,250`, `10.5` → `$10.5`.
pub fn price_label(price: f64) -> String {
    format!("${}", format_price(price))
}

/// Number part of the price label; grouping commas, 0 to 2 decimals.
pub fn format_price(price: f64) -> String {
    let negative = price < 0.0;
    let cents = (price.abs() * 100.0).round() as i64;
    let grouped = group_thousands(cents / 100);
    let mut out = if negative && cents != 0 {
        format!("-{}", grouped)
    } else {
        grouped
    };
    let frac = cents % 100;
    if frac != 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{:02}", frac));
        }
    }
    out
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

fn description_or_default(product: &Product) -> String {
    description_or(product, "No description available")
}

fn description_or(product: &Product, fallback: &str) -> String {
    product
        .description
        .clone()
        .unwrap_or_else(|| fallback.to_owned())
}

fn category_or(product: &Product, fallback: &str) -> String {
    product
        .category
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| fallback.to_owned())
}

fn first_image(product: &Product, placeholder: &str) -> String {
    product
        .images
        .first()
        .map(String::as_str)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(placeholder)
        .to_owned()
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let clipped: String = text.chars().take(limit).collect();
        format!("{}...", clipped)
    } else {
        text.to_owned()
    }
}

fn date_label(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_owned())
}
