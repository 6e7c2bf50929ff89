// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::public::error::ErrorRenderer;
use crate::templates::{MiniJinjaEngine, TemplateEngine};

pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    pub error_renderer: ErrorRenderer,
}

impl AppState {
    pub fn new(store_name: &str) -> Self {
        Self {
            templates: Arc::new(MiniJinjaEngine::new()),
            error_renderer: ErrorRenderer::new(store_name.to_string()),
        }
    }
}
