// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};
use vitrina::catalog::{CatalogOrigin, load_embedded};

#[actix_web::test]
async fn fallback_origin_shows_the_degraded_banner() {
    let products = load_embedded().expect("embedded catalog");
    let expected_names: Vec<String> = products.iter().map(|p| p.name.clone()).collect();
    let bundle = common::bundle_with(common::test_config(), products, CatalogOrigin::Fallback);
    let app = test::init_service(common::build_test_app(bundle)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);

    assert!(html.contains("catálogo de respaldo"));
    // The rendered grid is exactly the fallback collection.
    assert_eq!(
        html.matches("<article class=\"card\">").count(),
        expected_names.len()
    );
    for name in expected_names {
        assert!(html.contains(&name), "missing card for {}", name);
    }
}

#[actix_web::test]
async fn primary_origin_shows_no_banner() {
    let app = test::init_service(common::build_test_app(common::bundle())).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);

    assert!(!html.contains("catálogo de respaldo"));
    assert!(!html.contains("No hay datos de productos"));
}

#[actix_web::test]
async fn exhausted_sources_render_the_empty_state() {
    let bundle = common::bundle_with(
        common::test_config(),
        Vec::new(),
        CatalogOrigin::Exhausted,
    );
    let app = test::init_service(common::build_test_app(bundle)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);

    assert_eq!(html.matches("<article class=\"card\">").count(), 0);
    assert!(html.contains("No hay datos de productos disponibles"));
    assert!(html.contains("No encontramos productos con esos filtros."));
}
