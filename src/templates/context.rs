// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Value, context};

use crate::storefront::{ProductCard, TagOption};

const STYLESHEET: &str = "/assets/vitrina.css";

#[derive(Debug, Clone)]
pub struct StorefrontContext {
    store_name: String,
    hero_tagline: String,
    accent: String,
    query: String,
    selected_tag: String,
    cards: Vec<ProductCard>,
    tag_options: Vec<TagOption>,
    degraded: bool,
    load_failed: bool,
}

impl StorefrontContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store_name: &str,
        hero_tagline: &str,
        accent: &str,
        query: &str,
        selected_tag: &str,
        cards: Vec<ProductCard>,
        tag_options: Vec<TagOption>,
        degraded: bool,
        load_failed: bool,
    ) -> Self {
        Self {
            store_name: store_name.to_string(),
            hero_tagline: hero_tagline.to_string(),
            accent: accent.to_string(),
            query: query.to_string(),
            selected_tag: selected_tag.to_string(),
            cards,
            tag_options,
            degraded,
            load_failed,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            stylesheet => STYLESHEET,
            store_name => &self.store_name,
            hero_tagline => &self.hero_tagline,
            accent => &self.accent,
            query => &self.query,
            selected_tag => &self.selected_tag,
            cards => Value::from_serialize(&self.cards),
            tag_options => Value::from_serialize(&self.tag_options),
            degraded => self.degraded,
            load_failed => self.load_failed
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailContext {
    store_name: String,
    accent: String,
    card: ProductCard,
}

impl DetailContext {
    pub fn new(store_name: &str, accent: &str, card: ProductCard) -> Self {
        Self {
            store_name: store_name.to_string(),
            accent: accent.to_string(),
            card,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            stylesheet => STYLESHEET,
            store_name => &self.store_name,
            accent => &self.accent,
            card => Value::from_serialize(&self.card)
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispatchErrorContext {
    store_name: String,
    detail: String,
}

impl DispatchErrorContext {
    pub fn new(store_name: &str, detail: &str) -> Self {
        Self {
            store_name: store_name.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            stylesheet => STYLESHEET,
            store_name => &self.store_name,
            detail => &self.detail
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    store_name: String,
}

impl ErrorPageContext {
    pub fn new(store_name: &str) -> Self {
        Self {
            store_name: store_name.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            stylesheet => STYLESHEET,
            store_name => &self.store_name
        }
    }
}
