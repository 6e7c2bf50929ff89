// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Catalog loading. Sources are tried in order (remote primary, then the
//! catalog compiled into the binary); the first source that yields a valid
//! product list wins, and the winning origin is kept so the storefront can
//! surface degraded operation.

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;

/// Fallback catalog compiled into the binary. Used whenever the primary
/// source is unreachable or returns an invalid payload.
const EMBEDDED_CATALOG: &str = include_str!("../builtin/products.json");

#[derive(Debug)]
pub enum CatalogError {
    Http(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Http(msg) => write!(f, "Catalog request failed: {}", msg),
            CatalogError::Parse(msg) => write!(f, "Catalog payload is not valid JSON: {}", msg),
            CatalogError::Invalid(msg) => write!(f, "Catalog payload is invalid: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tag: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Primary,
    Fallback,
    Exhausted,
}

/// The immutable product collection for this process, plus which source
/// produced it. Shared read-only across workers; never mutated after load.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    products: Vec<Product>,
    origin: CatalogOrigin,
}

impl LoadedCatalog {
    pub fn from_parts(products: Vec<Product>, origin: CatalogOrigin) -> Self {
        Self { products, origin }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn is_degraded(&self) -> bool {
        self.origin == CatalogOrigin::Fallback
    }

    pub fn is_exhausted(&self) -> bool {
        self.origin == CatalogOrigin::Exhausted
    }
}

/// Strict parse of a catalog payload: a JSON array of complete product
/// records. A record with a blank id or a negative price fails the whole
/// payload, so a half-broken source never reaches rendering.
pub fn parse_catalog(raw: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> =
        serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
    for product in &products {
        if product.id.trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "product '{}' has an empty id",
                product.name
            )));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::Invalid(format!(
                "product '{}' has an invalid price {}",
                product.id, product.price
            )));
        }
    }
    Ok(products)
}

pub fn load_embedded() -> Result<Vec<Product>, CatalogError> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Single attempt against the primary source, cache bypassed both with
/// request headers and a query token. No retries; the platform default
/// timeout applies.
async fn fetch_primary(url: &str) -> Result<Vec<Product>, CatalogError> {
    let client = reqwest::Client::builder()
        .user_agent("vitrina-catalog")
        .build()
        .map_err(|e| CatalogError::Http(e.to_string()))?;

    let separator = if url.contains('?') { '&' } else { '?' };
    let busted = format!(
        "{}{}cb={}",
        url,
        separator,
        chrono::Utc::now().timestamp_millis()
    );

    let response = client
        .get(&busted)
        .header("Cache-Control", "no-cache")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| CatalogError::Http(e.to_string()))?;

    if !response.status().is_success() {
        return Err(CatalogError::Http(format!(
            "unexpected status {} from {}",
            response.status(),
            url
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Http(e.to_string()))?;
    parse_catalog(&body)
}

fn resolve(
    primary: Result<Vec<Product>, CatalogError>,
    fallback: Result<Vec<Product>, CatalogError>,
) -> LoadedCatalog {
    match primary {
        Ok(products) => {
            info!("Catalog loaded from primary source ({} products)", products.len());
            LoadedCatalog::from_parts(products, CatalogOrigin::Primary)
        }
        Err(primary_err) => match fallback {
            Ok(products) => {
                warn!(
                    "Primary catalog source failed ({}); serving embedded fallback ({} products)",
                    primary_err,
                    products.len()
                );
                LoadedCatalog::from_parts(products, CatalogOrigin::Fallback)
            }
            Err(fallback_err) => {
                error!(
                    "All catalog sources failed (primary: {}; fallback: {}); serving an empty catalog",
                    primary_err, fallback_err
                );
                LoadedCatalog::from_parts(Vec::new(), CatalogOrigin::Exhausted)
            }
        },
    }
}

/// Loads the catalog once, at startup, before the server binds.
pub async fn load_catalog(config: &CatalogConfig) -> LoadedCatalog {
    resolve(fetch_primary(&config.primary_url).await, load_embedded())
}
