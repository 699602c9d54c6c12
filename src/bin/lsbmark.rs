// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Command-line front end: embed, decode, score and attack watermarks.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lsbmark_core::{attack, io, quality, Attack, BitDepth, CarrierState, Channel, FlipAxis};

#[derive(Parser, Debug)]
#[command(author, version, about = "Bit-plane watermarking for RGB images")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Channel and bit depth shared by every codec subcommand.
#[derive(clap::Args, Debug)]
struct Plane {
    /// Colour channel: red, green or blue
    #[arg(long, default_value = "red")]
    channel: Channel,

    /// Bit depth 0..=7 (0 = most significant, 7 = least significant)
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(0..=7))]
    depth: u8,
}

impl Plane {
    fn depth(&self) -> Result<BitDepth> {
        Ok(BitDepth::new(self.depth)?)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a binary image pattern (tiled over the whole carrier)
    EmbedImage {
        carrier: PathBuf,
        pattern: PathBuf,
        #[arg(short, long)]
        out: PathBuf,
        #[command(flatten)]
        plane: Plane,
    },
    /// Hide a text message
    EmbedText {
        carrier: PathBuf,
        text: String,
        #[arg(short, long)]
        out: PathBuf,
        #[command(flatten)]
        plane: Plane,
    },
    /// Extract a bit plane as a black/white image
    DecodeImage {
        image: PathBuf,
        #[arg(short, long)]
        out: PathBuf,
        #[command(flatten)]
        plane: Plane,
    },
    /// Extract a text message
    DecodeText {
        image: PathBuf,
        #[command(flatten)]
        plane: Plane,
    },
    /// Try every channel and depth for a text message
    Scan { image: PathBuf },
    /// PSNR between two images
    Psnr { first: PathBuf, second: PathBuf },
    /// Apply an attack to an image
    Attack {
        image: PathBuf,
        #[arg(short, long)]
        out: PathBuf,
        #[command(subcommand)]
        kind: AttackKind,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum AttackKind {
    /// JPEG recompression at quality 0..=100
    Recompress { quality: u8 },
    /// Rotate by 0..=90 degrees and back
    Rotate { degrees: f64 },
    /// Scale to 0..=100 percent
    Resize { percent: u32 },
    /// Mirror horizontally or vertically
    Flip { axis: FlipAxis },
}

impl From<AttackKind> for Attack {
    fn from(kind: AttackKind) -> Self {
        match kind {
            AttackKind::Recompress { quality } => Attack::Recompress { quality },
            AttackKind::Rotate { degrees } => Attack::Rotate { degrees },
            AttackKind::Resize { percent } => Attack::Resize { percent },
            AttackKind::Flip { axis } => Attack::Flip(axis),
        }
    }
}

fn load_state(path: &Path) -> Result<CarrierState> {
    let img = io::load_rgb(path).with_context(|| format!("could not read {}", path.display()))?;
    Ok(CarrierState::new(img)?)
}

fn save(path: &Path, state: &CarrierState) -> Result<()> {
    io::save_rgb(path, state.working()).with_context(|| format!("could not write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::EmbedImage { carrier, pattern, out, plane } => {
            let mut state = load_state(&carrier)?;
            let mask = io::load_pattern(&pattern)
                .with_context(|| format!("could not read {}", pattern.display()))?;
            lsbmark_core::encode_image_payload(&mut state, plane.channel, &mask, plane.depth()?)?;
            println!("PSNR: {:.2} dB", state.psnr_against_original()?);
            save(&out, &state)
        }
        Command::EmbedText { carrier, text, out, plane } => {
            let mut state = load_state(&carrier)?;
            lsbmark_core::encode_text_payload(&mut state, plane.channel, &text, plane.depth()?)?;
            println!("PSNR: {:.2} dB", state.psnr_against_original()?);
            save(&out, &state)
        }
        Command::DecodeImage { image, out, plane } => {
            let state = load_state(&image)?;
            let mask = lsbmark_core::decode_image_pattern(&state, plane.channel, plane.depth()?);
            io::save_pattern(&out, &mask).with_context(|| format!("could not write {}", out.display()))?;
            println!("wrote {}", out.display());
            Ok(())
        }
        Command::DecodeText { image, plane } => {
            let state = load_state(&image)?;
            let text = lsbmark_core::decode_text_payload(&state, plane.channel, plane.depth()?)?;
            println!("{text}");
            Ok(())
        }
        Command::Scan { image } => {
            let state = load_state(&image)?;
            let hit = lsbmark_core::scan_text(&state)?;
            println!("{} depth {}: {}", hit.channel, hit.depth, hit.text);
            Ok(())
        }
        Command::Psnr { first, second } => {
            let a = io::load_rgb(&first).with_context(|| format!("could not read {}", first.display()))?;
            let b = io::load_rgb(&second).with_context(|| format!("could not read {}", second.display()))?;
            println!("{:.2}", quality::psnr(&a, &b)?);
            Ok(())
        }
        Command::Attack { image, out, kind } => {
            let mut state = load_state(&image)?;
            attack::apply(&mut state, kind.into())?;
            let (w, h) = state.dimensions();
            tracing::info!(?kind, w, h, "attack applied");
            if let Ok(score) = state.psnr_against_original() {
                println!("PSNR: {score:.2} dB");
            }
            save(&out, &state)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    run(cli)
}
