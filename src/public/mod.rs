// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

pub mod error;
pub mod handlers;
pub mod seo;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/robots.txt", web::get().to(seo::robots_txt))
        .route("/sitemap.xml", web::get().to(seo::sitemap_xml))
        .route("/", web::get().to(handlers::index))
        .route("/p/{id}", web::get().to(handlers::detail))
        .route("/wa/buy/{id}", web::get().to(handlers::buy))
        .route("/wa/contact", web::get().to(handlers::contact))
        .route("/wa/contact", web::post().to(handlers::contact_form))
        .route("/{path:.*}", web::get().to(handlers::not_found));
}
