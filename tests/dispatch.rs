// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};
use vitrina::catalog::CatalogOrigin;

fn location_of(resp: &actix_web::dev::ServiceResponse) -> Option<String> {
    resp.headers()
        .get("Location")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

#[actix_web::test]
async fn buy_redirects_to_the_composed_wa_link() {
    let app = test::init_service(common::build_test_app(common::bundle())).await;

    let req = test::TestRequest::get().uri("/wa/buy/p1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let location = location_of(&resp).expect("Location header");
    let prefix = format!("https://wa.me/{}?text=", common::VALID_DESTINATION);
    assert!(location.starts_with(&prefix));

    let encoded = location.strip_prefix(&prefix).expect("encoded message");
    let decoded = urlencoding::decode(encoded).expect("decodes");
    assert_eq!(
        decoded,
        "Hola, me interesa *Tueste Claro* (USD 12.50). ¿Está disponible?"
    );
}

#[actix_web::test]
async fn invalid_destination_refuses_dispatch_without_a_link() {
    let bundle = common::bundle_with(
        common::config_with_destination("123"),
        common::sample_products(),
        CatalogOrigin::Primary,
    );
    let app = test::init_service(common::build_test_app(bundle)).await;

    let req = test::TestRequest::get().uri("/wa/buy/p1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(location_of(&resp).is_none());

    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("No se pudo abrir WhatsApp"));
}

#[actix_web::test]
async fn invalid_destination_leaves_the_storefront_usable() {
    let bundle = common::bundle_with(
        common::config_with_destination("123"),
        common::sample_products(),
        CatalogOrigin::Primary,
    );
    let app = test::init_service(common::build_test_app(bundle)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn buy_for_an_unknown_product_is_not_found() {
    let app = test::init_service(common::build_test_app(common::bundle())).await;

    let req = test::TestRequest::get().uri("/wa/buy/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(location_of(&resp).is_none());
}

#[actix_web::test]
async fn contact_button_composes_the_store_info_message() {
    let app = test::init_service(common::build_test_app(common::bundle())).await;

    let req = test::TestRequest::get().uri("/wa/contact").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let location = location_of(&resp).expect("Location header");
    let encoded = location.split("text=").nth(1).expect("text parameter");
    let decoded = urlencoding::decode(encoded).expect("decodes");
    assert_eq!(
        decoded,
        "Hola, me gustaría obtener más información sobre Café Minimal."
    );
}

#[actix_web::test]
async fn contact_form_carries_the_sender_fields() {
    let app = test::init_service(common::build_test_app(common::bundle())).await;

    let req = test::TestRequest::post()
        .uri("/wa/contact")
        .set_form([
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("message", "¿Tienen molido fino?"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let location = location_of(&resp).expect("Location header");
    let encoded = location.split("text=").nth(1).expect("text parameter");
    let decoded = urlencoding::decode(encoded).expect("decodes");
    assert_eq!(
        decoded,
        "Hola, soy Ana (ana@example.com).\nMensaje: ¿Tienen molido fino?"
    );
}
