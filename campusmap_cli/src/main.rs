// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless front end for the campus map.
//!
//! `campusmap list` prints the selectable locations and the authored routes.
//! `campusmap route <origin> <destination>` runs one route calculation the
//! way the map's calculate button does, prints the badge and the viewport
//! transform, and can write the composed map to an SVG file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use campusmap::{AssetLoadFailure, FileSource, HttpSource, MapConfig, MapSession, load_asset};
use campusmap_draw_svg::{MapDocument, SvgCanvas};
use campusmap_route::{CampusData, RenderOutcome};
use clap::{Parser, Subcommand};
use kurbo::{Point, Size};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "campusmap")]
#[command(version, about = "Campus map routes from the command line", long_about = None)]
struct Cli {
    /// Debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON session config; defaults apply to missing keys.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON campus tables instead of the built-in ones.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List locations and available routes.
    List,
    /// Calculate and draw the route between two locations.
    Route {
        /// Origin location id.
        origin: String,
        /// Destination location id.
        destination: String,
        /// Map image: a file path or an http(s) URL. Defaults to the config's asset path.
        #[arg(long)]
        asset: Option<String>,
        /// Container size the map is fitted into.
        #[arg(long, default_value = "800x600", value_parser = parse_size)]
        container: Size,
        /// Zoom button presses after fitting; negative zooms out.
        #[arg(
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(-64..=64)
        )]
        zoom: i32,
        /// Move the live marker to this position.
        #[arg(long, value_parser = parse_point)]
        live: Option<Point>,
        /// Write the composed SVG here.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn parse_size(text: &str) -> Result<Size, String> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{text}`"))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("bad width `{w}`"))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("bad height `{h}`"))?;
    if w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite() {
        Ok(Size::new(w, h))
    } else {
        Err(format!("container must be positive, got `{text}`"))
    }
}

fn parse_point(text: &str) -> Result<Point, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{text}`"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("bad x `{x}`"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("bad y `{y}`"))?;
    Ok(Point::new(x, y))
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber")
}

fn load_data(path: Option<&Path>) -> Result<CampusData> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading campus data {}", path.display()))?;
            CampusData::from_json(&text)
                .with_context(|| format!("loading campus data {}", path.display()))
        }
        None => CampusData::builtin().context("loading built-in campus data"),
    }
}

fn fetch_asset(asset: &str) -> Result<MapDocument, AssetLoadFailure> {
    if asset.starts_with("http://") || asset.starts_with("https://") {
        let source = HttpSource::new(asset)?;
        return load_asset(&source, "");
    }
    load_asset(&FileSource::new("."), asset)
}

fn list(data: &CampusData) {
    println!("Locations:");
    for (id, label) in data.selector_options() {
        println!("  {id:<24} {label}");
    }
    println!("Routes:");
    for (route, label) in data.routes().zip(data.route_labels()) {
        println!("  {label}  {}", route.badge_text());
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => MapConfig::load(path)?,
        None => MapConfig::default(),
    };
    let data = load_data(cli.data.as_deref())?;

    let Command::Route {
        origin,
        destination,
        asset,
        container,
        zoom,
        live,
        out,
    } = cli.command
    else {
        list(&data);
        return Ok(ExitCode::SUCCESS);
    };

    let asset = fetch_asset(asset.as_deref().unwrap_or(&config.asset_path));
    let mut session = MapSession::initialize(config, data, SvgCanvas::new(), container, asset);
    if let Some(at) = live {
        session.update_live_marker(at.x, at.y);
    }
    for _ in 0..zoom.unsigned_abs() {
        if zoom > 0 {
            session.zoom_in();
        } else {
            session.zoom_out();
        }
    }

    session.select_origin(origin);
    session.select_destination(destination);
    let code = match session.calculate_route() {
        Ok(RenderOutcome::Drawn { .. }) => {
            if let Some(badge) = session.badge() {
                println!("{badge}");
            }
            ExitCode::SUCCESS
        }
        Ok(RenderOutcome::Skipped { resolved }) => {
            eprintln!("route has only {resolved} drawable point(s)");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}", err.guidance());
            ExitCode::FAILURE
        }
    };
    println!("transform: {}", session.viewport().css_transform());

    if let Some(out) = out {
        std::fs::write(&out, session.to_svg())
            .with_context(|| format!("writing {}", out.display()))?;
    }
    Ok(code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = setup_logging(cli.verbose) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use kurbo::{Point, Size};

    use super::{Cli, Command, parse_point, parse_size};

    #[test]
    fn sizes_parse() {
        assert_eq!(parse_size("800x600"), Ok(Size::new(800.0, 600.0)));
        assert_eq!(parse_size("1024X768"), Ok(Size::new(1024.0, 768.0)));
        assert!(parse_size("800").is_err());
        assert!(parse_size("0x600").is_err());
    }

    #[test]
    fn points_parse() {
        assert_eq!(parse_point("382,409"), Ok(Point::new(382.0, 409.0)));
        assert_eq!(parse_point(" 1.5 , -2 "), Ok(Point::new(1.5, -2.0)));
        assert!(parse_point("382").is_err());
    }

    #[test]
    fn zoom_presses_are_bounded() {
        let parse = |zoom: &str| {
            Cli::try_parse_from(["campusmap", "route", "cafeteria", "edificio_p", "--zoom", zoom])
        };
        let cli = parse("-64").unwrap();
        assert!(matches!(cli.command, Command::Route { zoom: -64, .. }));
        assert!(parse("64").is_ok());
        assert!(parse("65").is_err());
        assert!(parse("-2147483648").is_err());
    }
}
