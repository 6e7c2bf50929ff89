// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::error;
use crate::app_state::AppState;
use crate::catalog::LoadedCatalog;
use crate::config::ValidatedConfig;
use crate::storefront::{FilterState, ProductCard, project_cards, project_tag_options};
use crate::templates::{DetailContext, StorefrontContext, render_minijinja_template};
use crate::whatsapp;
use actix_web::{HttpResponse, Result, web};
use log::{debug, warn};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

pub async fn index(
    params: web::Query<FilterParams>,
    config: web::Data<ValidatedConfig>,
    catalog: web::Data<LoadedCatalog>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let filter = FilterState {
        query: params.q.trim().to_string(),
        tag: params.tag.trim().to_string(),
    };

    let cards = project_cards(catalog.products(), &filter);
    let tag_options = project_tag_options(catalog.products());
    debug!(
        "Storefront render: {} of {} products (q='{}', tag='{}')",
        cards.len(),
        catalog.products().len(),
        filter.query,
        filter.tag
    );

    let context = StorefrontContext::new(
        &config.store.name,
        &config.store.hero_tagline,
        &config.store.accent,
        &filter.query,
        &filter.tag,
        cards,
        tag_options,
        catalog.is_degraded(),
        catalog.is_exhausted(),
    )
    .to_value();

    match render_minijinja_template(app_state.templates.as_ref(), "storefront.html", context) {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(e) => {
            log::error!("Failed to render storefront template: {}", e);
            error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}

pub async fn detail(
    path: web::Path<String>,
    config: web::Data<ValidatedConfig>,
    catalog: web::Data<LoadedCatalog>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let product = match catalog.find(&id) {
        Some(product) => product,
        None => {
            return error::serve_404(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            );
        }
    };

    let context = DetailContext::new(
        &config.store.name,
        &config.store.accent,
        ProductCard::from_product(product),
    )
    .to_value();

    match render_minijinja_template(app_state.templates.as_ref(), "detail.html", context) {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(e) => {
            log::error!("Failed to render detail template: {}", e);
            error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}

pub async fn buy(
    path: web::Path<String>,
    config: web::Data<ValidatedConfig>,
    catalog: web::Data<LoadedCatalog>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let product = match catalog.find(&id) {
        Some(product) => product,
        None => {
            return error::serve_404(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            );
        }
    };

    let message = whatsapp::purchase_message(&product.name, product.price);
    dispatch_redirect(&config, &app_state, &message)
}

pub async fn contact(
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let message = whatsapp::contact_message(&config.store.name);
    dispatch_redirect(&config, &app_state, &message)
}

pub async fn contact_form(
    form: web::Form<ContactForm>,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let message = whatsapp::contact_form_message(
        form.name.trim(),
        form.email.trim(),
        form.message.trim(),
    );
    dispatch_redirect(&config, &app_state, &message)
}

pub async fn not_found(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    error::serve_404(
        &app_state.error_renderer,
        Some(app_state.templates.as_ref()),
    )
}

/// Answers 303 to the composed wa.me link, or the configuration-error page
/// when the destination fails its format check. No link is opened on error.
fn dispatch_redirect(
    config: &ValidatedConfig,
    app_state: &AppState,
    message: &str,
) -> Result<HttpResponse> {
    match whatsapp::build_url(&config.store.whatsapp_number, message) {
        Ok(url) => Ok(HttpResponse::SeeOther()
            .insert_header(("Location", url))
            .finish()),
        Err(e) => {
            warn!("Refusing WhatsApp dispatch: {}", e);
            error::serve_dispatch_error(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
                &e.to_string(),
            )
        }
    }
}
