// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::templates::{
    DispatchErrorContext, ErrorPageContext, TemplateEngine, render_minijinja_template,
};
use actix_web::{HttpResponse, Result};

#[derive(Clone)]
pub struct ErrorRenderer {
    store_name: String,
}

impl ErrorRenderer {
    pub fn new(store_name: String) -> Self {
        Self { store_name }
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }
}

pub fn serve_404(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
) -> Result<HttpResponse> {
    let context = ErrorPageContext::new(renderer.store_name()).to_value();

    let html = match template_engine {
        Some(engine) => match render_minijinja_template(engine, "error_404.html", context) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render 404 error template: {}", e);
                fallback_404_html(renderer.store_name())
            }
        },
        None => fallback_404_html(renderer.store_name()),
    };

    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .body(html))
}

pub fn serve_500(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
) -> Result<HttpResponse> {
    let context = ErrorPageContext::new(renderer.store_name()).to_value();

    let html = match template_engine {
        Some(engine) => match render_minijinja_template(engine, "error_500.html", context) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render 500 error template: {}", e);
                fallback_500_html(renderer.store_name())
            }
        },
        None => fallback_500_html(renderer.store_name()),
    };

    Ok(HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .body(html))
}

/// Shown when a dispatch route refuses to build a wa.me link (misconfigured
/// destination). The storefront itself stays reachable.
pub fn serve_dispatch_error(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
    detail: &str,
) -> Result<HttpResponse> {
    let context = DispatchErrorContext::new(renderer.store_name(), detail).to_value();

    let html = match template_engine {
        Some(engine) => match render_minijinja_template(engine, "dispatch_error.html", context) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render dispatch error template: {}", e);
                fallback_500_html(renderer.store_name())
            }
        },
        None => fallback_500_html(renderer.store_name()),
    };

    Ok(HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .body(html))
}

fn fallback_404_html(store_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>404 - Not Found | {}</title></head>
<body><h1>404 - Page Not Found</h1></body></html>"#,
        store_name
    )
}

fn fallback_500_html(store_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>500 - Internal Server Error | {}</title></head>
<body><h1>500 - Internal Server Error</h1></body></html>"#,
        store_name
    )
}
