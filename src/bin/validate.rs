// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Unified validation CLI: loads a single STL mesh and checks it against
//! the kernel's closed-manifold invariants, reporting the first violation.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use csgkernel::{io, validate};

#[derive(Parser)]
#[command(name = "csgkernel-validate")]
#[command(about = "Validate an STL mesh against the kernel's closed-manifold invariants")]
struct Cli {
    /// Path to the STL file to check
    mesh: String,

    /// Print vertex/triangle counts alongside the verdict
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mesh = io::read_stl(&cli.mesh).with_context(|| format!("failed to read {}", cli.mesh))?;

    if cli.verbose {
        println!(
            "{} vertices / {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    match validate(&mesh) {
        Ok(()) => {
            println!("{} {}", "Valid:".green().bold(), cli.mesh);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "Invalid:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
