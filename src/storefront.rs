// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Pure storefront view-model: filtering and projection of the immutable
//! catalog into display records. No HTTP or template types in here, so the
//! whole layer is testable as plain functions.

use serde::Serialize;

use crate::catalog::Product;

pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// Per-request filter inputs, read from the query string. Never persisted.
#[derive(Debug, Default, Clone)]
pub struct FilterState {
    pub query: String,
    pub tag: String,
}

/// A product is shown iff the query (case-insensitive) matches its name,
/// description or tag, and the tag select (exact, as stored) matches its
/// tag. Empty inputs match everything.
pub fn filter_products<'a>(products: &'a [Product], filter: &FilterState) -> Vec<&'a Product> {
    let query = filter.query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            let matches_query = query.is_empty()
                || p.name.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
                || p.tag.to_lowercase().contains(&query);
            let matches_tag = filter.tag.is_empty() || p.tag == filter.tag;
            matches_query && matches_tag
        })
        .collect()
}

/// Distinct tags of the full collection, sorted. Derived from the unfiltered
/// catalog so the select options never shrink while filtering.
pub fn tag_options(products: &[Product]) -> Vec<String> {
    let mut tags: Vec<String> = products.iter().map(|p| p.tag.clone()).collect();
    tags.sort();
    tags.dedup();
    tags
}

pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Display label for a tag option: stored value with the first letter
/// uppercased.
pub fn tag_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_display: String,
    pub tag: String,
    pub image: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let image = if product.image.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            product.image.clone()
        };
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price_display: format_price(product.price),
            tag: product.tag.clone(),
            image,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagOption {
    pub value: String,
    pub label: String,
}

/// Projects the catalog plus the request's filter into everything the
/// storefront template needs.
pub fn project_cards(products: &[Product], filter: &FilterState) -> Vec<ProductCard> {
    filter_products(products, filter)
        .into_iter()
        .map(ProductCard::from_product)
        .collect()
}

pub fn project_tag_options(products: &[Product]) -> Vec<TagOption> {
    tag_options(products)
        .into_iter()
        .map(|tag| TagOption {
            label: tag_label(&tag),
            value: tag,
        })
        .collect()
}
