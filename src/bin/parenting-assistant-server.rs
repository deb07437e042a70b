// ABOUTME: Server binary for the parenting assistant form service
// ABOUTME: Loads configuration, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! # Parenting Assistant Server Binary
//!
//! Starts the HTTP server on `HOST:HTTP_PORT` (default `0.0.0.0:8000`).

use anyhow::Result;
use clap::Parser;
use parenting_assistant::{config::ServerConfig, logging, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "parenting-assistant-server")]
#[command(about = "AI Parenting Assistant Suite - planner, meals, and emotions forms")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Log every route the server exposes
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available Endpoints ===");
    info!("   Landing Page:      GET  {base}/");
    info!("   Family Planner:    GET  {base}/planner   POST {base}/planner");
    info!("   Meal Planner:      GET  {base}/meals     POST {base}/meals");
    info!("   Emotional Support: GET  {base}/emotions  POST {base}/emotions");
    info!("   Health Check:      GET  {base}/health");
    info!("   Readiness:         GET  {base}/ready");
    info!("   Static Assets:     GET  {base}/static/...");
    info!("=== End of Endpoint List ===");
}
