#![forbid(unsafe_code)]

//! Manual inspection CLI: feeds a raw byte capture (file or stdin) through
//! the preread controller and prints the exported variables
//! (`clap::Parser`, init tracing, then dispatch with a clean error exit),
//! a runnable artifact a developer can point at a captured ClientHello
//! without writing a test.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{error, info};

use huginn_preread_tls::{PrereadContext, PrereadController};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect a raw TLS ClientHello capture")]
struct Cli {
    /// Path to a raw byte capture (the first bytes of a TCP stream). Reads
    /// stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report {
    is_ssl: bool,
    protocol: Option<&'static str>,
    server_name: Option<String>,
    alpn_protocols: Option<String>,
    ja3n: Option<String>,
    ja3n_hash: Option<String>,
    prologue: Option<String>,
}

fn main() {
    huginn_preread_tls::telemetry::init_tracing();

    let cli = Cli::parse();
    let bytes = match read_input(cli.input) {
        Ok(b) => b,
        Err(err) => {
            error!(%err, "failed to read capture");
            std::process::exit(1);
        }
    };

    let controller = PrereadController::new(true);
    let mut ctx = PrereadContext::new();
    let outcome = controller.poll(&mut ctx, &bytes);
    info!(?outcome, "preread finished");

    let vars = ctx.variables();
    let report = Report {
        is_ssl: ctx.is_ssl(),
        protocol: vars.protocol(),
        server_name: vars.server_name().map(|c| c.into_owned()),
        alpn_protocols: vars.alpn_protocols().map(|c| c.into_owned()),
        ja3n: vars.ja3n(),
        ja3n_hash: vars.ja3n_hash(),
        prologue: vars.prologue(),
    };

    match cli.format {
        Format::Text => print_text(&report),
        Format::Json => match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                error!(%err, "failed to serialize report");
                std::process::exit(1);
            }
        },
    }
}

fn print_text(report: &Report) {
    println!("is_ssl: {}", report.is_ssl);
    println!("protocol: {}", report.protocol.unwrap_or("not found"));
    println!(
        "server_name: {}",
        report.server_name.as_deref().unwrap_or("not found")
    );
    println!(
        "alpn_protocols: {}",
        report.alpn_protocols.as_deref().unwrap_or("not found")
    );
    println!("ja3n: {}", report.ja3n.as_deref().unwrap_or("not found"));
    println!(
        "ja3n_hash: {}",
        report.ja3n_hash.as_deref().unwrap_or("not found")
    );
    println!(
        "prologue: {}",
        report.prologue.as_deref().unwrap_or("not found")
    );
}

fn read_input(path: Option<PathBuf>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match path {
        Some(p) => {
            std::fs::File::open(p)?.read_to_end(&mut buf)?;
        }
        None => {
            std::io::stdin().read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}
