// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info, warn};
use std::io::Write;
use std::sync::Arc;

mod app_state;
mod assets;
mod bootstrap;
mod catalog;
mod config;
mod public;
mod storefront;
mod templates;
mod whatsapp;

use app_state::AppState;
use catalog::LoadedCatalog;
use config::ValidatedConfig;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if parsed_args.show_help {
        print!("{}", help_text());
        return 0;
    }

    let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Bootstrap error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    let result = System::new().block_on(run_server(bootstrap));
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

async fn run_server(bootstrap: bootstrap::BootstrapResult) -> std::io::Result<()> {
    let validated_config = Arc::new(bootstrap.validated_config);

    // Parse log level from config
    let log_level = match validated_config.logging.level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    // Configure logging with a stable format
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    if bootstrap.created_config {
        info!("Created a default config.yaml; edit the store section before going live");
    }

    // Load the catalog once; everything served afterwards reads this
    // immutable collection.
    let loaded_catalog = Arc::new(catalog::load_catalog(&validated_config.catalog).await);
    match loaded_catalog.origin() {
        catalog::CatalogOrigin::Primary => {
            info!("✅ Catalog ready ({} products)", loaded_catalog.products().len())
        }
        catalog::CatalogOrigin::Fallback => warn!(
            "Catalog running in degraded mode from the embedded fallback ({} products)",
            loaded_catalog.products().len()
        ),
        catalog::CatalogOrigin::Exhausted => {
            warn!("Catalog is empty: all sources failed; the storefront will show a load error")
        }
    }

    let app_state = Arc::new(AppState::new(&validated_config.store.name));
    info!(
        "✅ App state initialized for store: {}",
        validated_config.store.name
    );

    let host = validated_config.server.host.clone();
    let port = validated_config.server.port;
    let workers = validated_config.server.workers;

    let factory = {
        let config_for_app = validated_config.clone();
        let app_state_for_app = app_state.clone();
        let catalog_for_app = loaded_catalog.clone();

        move || {
            let config_for_app = config_for_app.clone();
            let app_state_for_app = app_state_for_app.clone();
            let catalog_for_app = catalog_for_app.clone();

            App::new()
                .app_data(web::Data::from(config_for_app))
                .app_data(web::Data::from(app_state_for_app))
                .app_data(web::Data::from(catalog_for_app))
                .wrap(Logger::new(
                    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
                ))
                .configure(assets::configure)
                .configure(public::configure)
        }
    };

    info!("Storefront listening on {}:{}", host, port);

    HttpServer::new(factory)
        .workers(workers)
        .bind((host.as_str(), port))?
        .run()
        .await
}

struct ParsedArgs {
    runtime_root: std::path::PathBuf,
    show_help: bool,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        return Ok(ParsedArgs {
            runtime_root: std::path::PathBuf::from("."),
            show_help: true,
        });
    }

    let mut args = args.into_iter();
    let mut runtime_root = std::path::PathBuf::from(".");

    while let Some(arg) = args.next() {
        if arg == "-C" {
            let value = args
                .next()
                .ok_or_else(|| "Missing value for -C".to_string())?;
            runtime_root = std::path::PathBuf::from(value);
        } else {
            return Err(format!("Unknown argument '{}'", arg));
        }
    }

    let runtime_root = make_runtime_root_absolute(runtime_root)?;

    Ok(ParsedArgs {
        runtime_root,
        show_help: false,
    })
}

fn make_runtime_root_absolute(
    runtime_root: std::path::PathBuf,
) -> Result<std::path::PathBuf, String> {
    if runtime_root.is_absolute() {
        return Ok(runtime_root);
    }

    let current_dir = std::env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {}", error))?;
    Ok(current_dir.join(runtime_root))
}

fn help_text() -> String {
    [
        "vitrina - single-store catalog server",
        "",
        "Usage: vitrina [-C <root>]",
        "",
        "  -C <root>   runtime directory holding config.yaml (default: .)",
        "  -h, --help  show this help",
        "",
    ]
    .join("\n")
}
