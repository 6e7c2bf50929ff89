// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use std::sync::Arc;
use vitrina::app_state::AppState;
use vitrina::assets;
use vitrina::catalog::{CatalogOrigin, LoadedCatalog, Product};
use vitrina::config::{
    CatalogConfig, LoggingConfig, ServerConfig, StoreConfig, ValidatedConfig,
};
use vitrina::public;

pub const STORE_NAME: &str = "Café Minimal";
pub const VALID_DESTINATION: &str = "50760000000";

#[derive(Clone)]
pub struct AppBundle {
    pub config: Arc<ValidatedConfig>,
    pub app_state: Arc<AppState>,
    pub catalog: Arc<LoadedCatalog>,
}

pub fn test_config() -> ValidatedConfig {
    config_with_destination(VALID_DESTINATION)
}

pub fn config_with_destination(destination: &str) -> ValidatedConfig {
    ValidatedConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 1,
        },
        store: StoreConfig {
            name: STORE_NAME.to_string(),
            whatsapp_number: destination.to_string(),
            accent: "amber-700".to_string(),
            hero_tagline: "Tostado fresco, molido a tu gusto.".to_string(),
        },
        catalog: CatalogConfig {
            primary_url: "http://127.0.0.1:1/products.json".to_string(),
        },
        logging: LoggingConfig {
            level: "info".to_string(),
        },
    }
}

pub fn product(id: &str, name: &str, description: &str, price: f64, tag: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        tag: tag.to_string(),
        image: String::new(),
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product("p1", "Tueste Claro", "Notas florales y cítricas", 12.5, "granos"),
        product("p2", "Tueste Oscuro", "Cuerpo intenso", 11.0, "granos"),
        product("p3", "Prensa Francesa", "Vidrio y acero inoxidable", 24.0, "accesorios"),
        product("p4", "Molido Espresso", "Molienda fina", 13.25, "molido"),
    ]
}

pub fn bundle_with(
    config: ValidatedConfig,
    products: Vec<Product>,
    origin: CatalogOrigin,
) -> AppBundle {
    let app_state = Arc::new(AppState::new(&config.store.name));
    AppBundle {
        config: Arc::new(config),
        app_state,
        catalog: Arc::new(LoadedCatalog::from_parts(products, origin)),
    }
}

pub fn bundle() -> AppBundle {
    bundle_with(test_config(), sample_products(), CatalogOrigin::Primary)
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(bundle.config))
        .app_data(web::Data::from(bundle.app_state))
        .app_data(web::Data::from(bundle.catalog))
        .configure(assets::configure)
        .configure(public::configure)
}
