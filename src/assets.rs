// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Static assets compiled into the binary, so a deployed instance is a
//! single file plus its config.yaml.

use actix_web::{HttpRequest, HttpResponse, Result, web};

const CACHE_CONTROL_IMMUTABLE: &str = "public, max-age=31536000, immutable";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/favicon.ico", web::get().to(serve_favicon));
    cfg.route("/assets/{filename:.*}", web::get().to(serve_asset));
}

fn embedded_asset(filename: &str) -> Option<(&'static str, &'static str)> {
    match filename {
        "vitrina.css" => Some((include_str!("../builtin/vitrina.css"), "text/css")),
        "placeholder.svg" => Some((
            include_str!("../builtin/placeholder.svg"),
            "image/svg+xml",
        )),
        "favicon.svg" => Some((include_str!("../builtin/favicon.svg"), "image/svg+xml")),
        _ => None,
    }
}

async fn serve_favicon(_req: HttpRequest) -> Result<HttpResponse> {
    serve_embedded("favicon.svg")
}

async fn serve_asset(req: HttpRequest) -> Result<HttpResponse> {
    let filename: String = match req.match_info().get("filename") {
        Some(f) => f.to_string(),
        None => {
            log::error!("Missing 'filename' parameter in asset handler");
            return Ok(HttpResponse::InternalServerError().body("Internal Server Error"));
        }
    };
    serve_embedded(&filename)
}

fn serve_embedded(filename: &str) -> Result<HttpResponse> {
    match embedded_asset(filename) {
        Some((content, mime_type)) => Ok(HttpResponse::Ok()
            .content_type(mime_type)
            .insert_header(("Cache-Control", CACHE_CONTROL_IMMUTABLE))
            .body(content)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_assets_resolve_with_mime_types() {
        let (content, mime) = embedded_asset("vitrina.css").expect("stylesheet");
        assert!(!content.is_empty());
        assert_eq!(mime, "text/css");

        let (_, mime) = embedded_asset("placeholder.svg").expect("placeholder");
        assert_eq!(mime, "image/svg+xml");
    }

    #[test]
    fn unknown_assets_are_absent() {
        assert!(embedded_asset("missing.js").is_none());
        assert!(embedded_asset("../config.yaml").is_none());
    }
}
