// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Composition of wa.me dispatch links. Building a link never contacts the
//! messaging service; the caller redirects the browser to the returned URL.

const WA_BASE_URL: &str = "https://wa.me";
const DESTINATION_MIN_DIGITS: usize = 8;
const DESTINATION_MAX_DIGITS: usize = 15;

#[derive(Debug, PartialEq, Eq)]
pub enum DispatchError {
    InvalidDestination(String),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::InvalidDestination(value) => write!(
                f,
                "Invalid WhatsApp destination '{}': expected {}-{} digits",
                value, DESTINATION_MIN_DIGITS, DESTINATION_MAX_DIGITS
            ),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Destination identifiers are bare international numbers: digits only,
/// no '+', spaces or separators.
pub fn validate_destination(destination: &str) -> Result<(), DispatchError> {
    let digits_only = destination.chars().all(|c| c.is_ascii_digit());
    let length_ok =
        (DESTINATION_MIN_DIGITS..=DESTINATION_MAX_DIGITS).contains(&destination.len());
    if digits_only && length_ok {
        Ok(())
    } else {
        Err(DispatchError::InvalidDestination(destination.to_string()))
    }
}

/// Builds the dispatch URL, validating the destination first. No link is
/// produced for a malformed destination.
pub fn build_url(destination: &str, message: &str) -> Result<String, DispatchError> {
    validate_destination(destination)?;
    Ok(format!(
        "{}/{}?text={}",
        WA_BASE_URL,
        destination,
        urlencoding::encode(message)
    ))
}

pub fn purchase_message(product_name: &str, price: f64) -> String {
    format!(
        "Hola, me interesa *{}* (USD {:.2}). ¿Está disponible?",
        product_name, price
    )
}

pub fn contact_message(store_name: &str) -> String {
    format!(
        "Hola, me gustaría obtener más información sobre {}.",
        store_name
    )
}

pub fn contact_form_message(name: &str, email: &str, message: &str) -> String {
    format!("Hola, soy {} ({}).\nMensaje: {}", name, email, message)
}
