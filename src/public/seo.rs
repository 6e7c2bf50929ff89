// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::catalog::LoadedCatalog;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use std::fmt::Write;

pub async fn robots_txt(req: HttpRequest) -> Result<HttpResponse> {
    let base_url = request_base_url(&req);

    let mut body = String::new();
    body.push_str("User-agent: *\n");
    body.push_str("Disallow: /wa/\n");
    body.push_str("Allow: /\n\n");
    let _ = writeln!(body, "Sitemap: {}/sitemap.xml", base_url);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body))
}

pub async fn sitemap_xml(
    req: HttpRequest,
    catalog: web::Data<LoadedCatalog>,
) -> Result<HttpResponse> {
    let base_url = request_base_url(&req);

    let mut locs = vec![format!("{}/", base_url)];
    for product in catalog.products() {
        locs.push(format!("{}/p/{}", base_url, product.id));
    }
    locs.sort();

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for loc in locs {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&loc));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");

    Ok(HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(xml))
}

fn request_base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_xml_handles_markup_characters() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
