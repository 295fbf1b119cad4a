// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus CLI entrypoint.
//!
//! By default this runs the interactive TUI and serves MCP over streamable HTTP at
//! `http://<addr>/mcp`.
//!
//! Use `--mcp` to run the MCP server over stdio instead (intended for tool integrations).

use std::error::Error;
use std::ffi::OsStr;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use tokio::sync::Mutex;

use proteus::model::{Figure, FigureId, Workbench};

const DEFAULT_MCP_HTTP_PORT: u16 = 46737;

fn default_mcp_http_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], DEFAULT_MCP_HTTP_PORT))
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--figure <path>] [--mcp-http [<addr>]]\n  {program} --demo [--mcp-http [<addr>]]\n  {program} [--figure <path>] --mcp\n  {program} --demo --mcp\n\nTUI mode (default) serves MCP over streamable HTTP at `http://<addr>/mcp`.\n--mcp-http selects the bind address (default 127.0.0.1:{DEFAULT_MCP_HTTP_PORT}).\n\n--mcp runs a headless MCP server over stdio instead (no TUI, no HTTP).\n--figure preloads a figure from a text file, named after the file stem.\n--demo preloads the built-in demo figures and cannot be combined with --figure."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    mcp: bool,
    demo: bool,
    help: bool,
    figure_path: Option<String>,
    mcp_http_addr: Option<SocketAddr>,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut args = args.peekable();
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--help" => {
                if options.help {
                    return Err(());
                }
                options.help = true;
            }
            "--figure" => {
                if options.figure_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.figure_path = Some(path);
            }
            "--mcp-http" => {
                if options.mcp_http_addr.is_some() {
                    return Err(());
                }
                let addr = if args.peek().map_or(false, |next| !next.starts_with('-')) {
                    let Some(raw) = args.next() else {
                        return Err(());
                    };
                    raw.parse().map_err(|_| ())?
                } else {
                    default_mcp_http_addr()
                };
                options.mcp_http_addr = Some(addr);
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.figure_path.is_some() {
        return Err(());
    }

    if options.mcp && options.mcp_http_addr.is_some() {
        return Err(());
    }

    Ok(options)
}

fn slug_for_stem(stem: &str) -> String {
    let mut slug = String::with_capacity(stem.len());
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("figure");
    }
    slug
}

fn initial_workbench(options: &CliOptions) -> Result<Workbench, Box<dyn Error>> {
    if options.demo {
        return Ok(proteus::tui::demo_workbench());
    }

    let mut workbench = Workbench::new();
    if let Some(path) = options.figure_path.as_deref() {
        let source = std::fs::read_to_string(path)?;
        let stem = Path::new(path).file_stem().and_then(OsStr::to_str).unwrap_or("figure");
        let figure_id = FigureId::new(slug_for_stem(stem))?;
        workbench.upsert_figure(Figure::new(figure_id.clone(), stem, source));
        workbench.set_active_figure_id(Some(figure_id));
    }
    Ok(workbench)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "proteus".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.help {
            print_usage(&program);
            return Ok(());
        }

        let workbench = initial_workbench(&options)?;

        if options.mcp {
            let mcp = proteus::mcp::ProteusMcp::new(workbench);

            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let workbench = Arc::new(Mutex::new(workbench));
        let ui_state = Arc::new(Mutex::new(proteus::ui::UiState::default()));
        let mcp_http_addr = options.mcp_http_addr.unwrap_or_else(default_mcp_http_addr);

        let mcp = proteus::mcp::ProteusMcp::new_shared_with_ui_state(
            workbench.clone(),
            Some(ui_state.clone()),
        );

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(mcp_http_addr).await?;

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();
            let server_shutdown = shutdown_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service =
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config);

            let router = Router::new().nest_service("/mcp", mcp_service);
            let server_handle = tokio::spawn(async move {
                let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                    server_shutdown.cancelled().await;
                });
                if let Err(err) = serve.await {
                    eprintln!("proteus: MCP HTTP server error: {err}");
                }
            });

            let tui_workbench = workbench.clone();
            let tui_ui_state = ui_state.clone();
            let tui_join = tokio::task::spawn_blocking(move || {
                proteus::tui::run_with_workbench(tui_workbench, Some(tui_ui_state))
                    .map_err(|err| err.to_string())
            })
            .await;

            shutdown_token.cancel();
            let _ = server_handle.await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| {
                Box::new(std::io::Error::new(std::io::ErrorKind::Other, err)) as Box<dyn Error>
            })?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("proteus: {err}");
        std::process::exit(1);
    }
}
