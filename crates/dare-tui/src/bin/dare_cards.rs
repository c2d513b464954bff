// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Run the dare cards prototype in the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dare_config_types::{load_from_file, schema_json, Screen, UiConfig};
use dare_core::{
    FilePicker, FixedFilePicker, InMemoryProofUploader, MockDareService, QueueNotifier,
};
use dare_logging::{CliLogLevel, CliLoggingArgs};
use dare_tui::{run_cards, CardCollaborators, CardsDependencies, InputGate, TerminalPathPicker, Theme};
use tracing::info;

const COMPONENT: &str = "dare-cards";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScreenArg {
    Cards,
    Achievements,
}

impl From<ScreenArg> for Screen {
    fn from(value: ScreenArg) -> Self {
        match value {
            ScreenArg::Cards => Screen::Cards,
            ScreenArg::Achievements => Screen::Achievements,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "dare-cards", about = "Swipeable dare cards and achievements")]
struct Args {
    /// Screen to open
    #[arg(long, value_enum)]
    screen: Option<ScreenArg>,

    /// TOML configuration file
    #[arg(long, env = "DARE_CARDS_CONFIG")]
    config: Option<PathBuf>,

    /// User id of the local viewer; wins are only shown for this user
    #[arg(long)]
    viewer: Option<String>,

    /// High contrast palette
    #[arg(long)]
    high_contrast: bool,

    /// Answer every "Add Proof" prompt with this file instead of asking
    #[arg(long)]
    proof_file: Option<PathBuf>,

    /// Print the configuration JSON schema and exit
    #[arg(long)]
    print_config_schema: bool,

    #[command(flatten)]
    logging: CliLoggingArgs,
}

fn resolve_config(args: &Args) -> anyhow::Result<UiConfig> {
    let mut config = match &args.config {
        Some(path) => load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => UiConfig::default(),
    };
    if let Some(screen) = args.screen {
        config.screen = screen.into();
    }
    if let Some(viewer) = &args.viewer {
        config.viewer_id = Some(viewer.clone());
    }
    if args.high_contrast {
        config.high_contrast = true;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config_schema {
        println!("{}", schema_json()?);
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let default_level = match config.log_level.as_deref() {
        Some(level) => level.parse::<CliLogLevel>().map_err(anyhow::Error::msg)?,
        None => CliLogLevel::Info,
    };
    args.logging
        .clone()
        .init_with_default_level(COMPONENT, true, default_level)?;
    info!(screen = ?config.screen, viewer = ?config.viewer_id, "starting");

    let input_gate = InputGate::new();
    let file_picker: Arc<dyn FilePicker> = match &args.proof_file {
        Some(path) => Arc::new(FixedFilePicker::new(path.clone())),
        None => Arc::new(TerminalPathPicker::new(input_gate.clone())),
    };
    let notifications = QueueNotifier::new();

    let deps = CardsDependencies {
        source: Arc::new(MockDareService::new()),
        collaborators: CardCollaborators {
            notifier: Arc::new(notifications.clone()),
            file_picker,
            proof_uploader: Arc::new(InMemoryProofUploader::new()),
        },
        notifications,
        theme: Theme::for_config(config.high_contrast),
        config,
        input_gate,
    };

    run_cards(deps)
}
