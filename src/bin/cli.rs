// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CSG kernel CLI: Boolean operations over pairs of STL files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use csgkernel::{boolean, io, BooleanOp};

#[derive(Parser)]
#[command(name = "csgkernel")]
#[command(about = "CSG Boolean operations over STL meshes", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perform a Boolean operation on two STL meshes
    Boolean {
        /// Which combination to realize
        op: Op,

        /// First operand
        a: String,

        /// Second operand
        b: String,

        /// Output STL path
        #[arg(short, long)]
        output: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Op {
    Union,
    Intersection,
    Difference,
}

impl From<Op> for BooleanOp {
    fn from(op: Op) -> Self {
        match op {
            Op::Union => BooleanOp::Union,
            Op::Intersection => BooleanOp::Intersection,
            Op::Difference => BooleanOp::Difference,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Boolean { op, a, b, output } => boolean_command(op, &a, &b, &output, cli.verbose),
    }
}

fn boolean_command(op: Op, a_path: &str, b_path: &str, output: &str, verbose: bool) -> Result<()> {
    if verbose {
        println!("{}", "Reading operands...".bold());
    }
    let mesh_a = io::read_stl(a_path).with_context(|| format!("failed to read {a_path}"))?;
    let mesh_b = io::read_stl(b_path).with_context(|| format!("failed to read {b_path}"))?;

    if verbose {
        println!(
            "  a: {} vertices / {} triangles",
            mesh_a.vertex_count(),
            mesh_a.triangle_count()
        );
        println!(
            "  b: {} vertices / {} triangles",
            mesh_b.vertex_count(),
            mesh_b.triangle_count()
        );
    }

    let result = boolean(op.into(), &mesh_a, &mesh_b)
        .map_err(|e| anyhow::anyhow!("boolean operation failed: {e}"))?;

    io::write_stl(output, &result).with_context(|| format!("failed to write {output}"))?;

    println!(
        "{} {} -> {} ({} vertices, {} triangles)",
        "Wrote".green(),
        output,
        "ok".green(),
        result.vertex_count(),
        result.triangle_count()
    );

    Ok(())
}
