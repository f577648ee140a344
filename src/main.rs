//! invictus CLI - renders the robot model to OpenSCAD and reports on it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use invictus_cad::{
    Assembly, DEFAULT_SEGMENTS, PLA_DENSITY, Robot, ScadDocument, WEIGHT_LIMIT_G, estimate_mass,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "invictus")]
#[command(about = "Parametric CAD model of a one-pound combat robot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an assembly to an OpenSCAD file
    Render {
        /// Which top-level composition to emit
        #[arg(short, long, value_enum, default_value_t)]
        assembly: Assembly,
        /// Curve tessellation ($fn) for the external renderer
        #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
        segments: u32,
        /// Output path
        #[arg(short, long, default_value = "gladius_invictus.scad")]
        output: PathBuf,
    },
    /// Estimate printed mass against the weight budget
    Mass {
        /// Filament density in g/mm^3
        #[arg(short, long, default_value_t = PLA_DENSITY)]
        density: f32,
    },
    /// Show composition statistics for an assembly
    Info {
        /// Which top-level composition to inspect
        #[arg(short, long, value_enum, default_value_t)]
        assembly: Assembly,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let robot = Robot::new();

    match cli.command {
        Some(Commands::Render {
            assembly,
            segments,
            output,
        }) => render(&robot, assembly, segments, &output),
        Some(Commands::Mass { density }) => {
            mass_report(&robot, density);
            Ok(())
        }
        Some(Commands::Info { assembly }) => {
            info(&robot, assembly);
            Ok(())
        }
        None => render(
            &robot,
            Assembly::default(),
            DEFAULT_SEGMENTS,
            &PathBuf::from("gladius_invictus.scad"),
        ),
    }
}

fn render(robot: &Robot, assembly: Assembly, segments: u32, output: &PathBuf) -> Result<()> {
    let shape = assembly.shape(robot);
    let doc = ScadDocument::new(shape).with_segments(segments);
    doc.write_to(output)?;
    println!(
        "Wrote {} ({}, {} primitives)",
        output.display(),
        assembly,
        doc.root.primitive_count()
    );
    Ok(())
}

fn mass_report(robot: &Robot, density: f32) {
    // Printed parts only; motors, wheels, and electronics weigh what their
    // datasheets say.
    let printed = [
        ("frame", robot.frame_solid()),
        ("drive mount (x2)", robot.drive.mount()),
        (
            "weapon blade",
            robot.blade.solid(&robot.weapon_motor),
        ),
    ];

    let mut total = 0.0;
    println!("printed mass estimate (density {density} g/mm^3, upper bounds):");
    for (name, shape) in &printed {
        let mut grams = estimate_mass(shape, density);
        if name.ends_with("(x2)") {
            grams *= 2.0;
        }
        total += grams;
        println!("  {name:<20} {grams:>8.1} g");
    }
    println!("  {:<20} {total:>8.1} g", "total");
    println!(
        "  budget: {WEIGHT_LIMIT_G} g, headroom {:.1} g before hardware",
        WEIGHT_LIMIT_G - total
    );
}

fn info(robot: &Robot, assembly: Assembly) {
    let shape = assembly.shape(robot);
    println!("{assembly}: {} primitives", shape.primitive_count());
}
