//! Cathedral CLI
//!
//! The command surface over `cathedral_core`: render geometry and fractal
//! presets to PNG, compose template designs, export the suite catalog, draw
//! tarot cards, launch the (opt-in) Azure agent swarm, and run the dedupe
//! and pillar-audit maintenance tools.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use cathedral_core::agents::{
    azure_allowed, run_swarm, save_metrics, AgentSpec, AgentsConfig, FoundryClient, RunnerConfig,
};
use cathedral_core::arcana::{SynthLab, TarotSystem};
use cathedral_core::design::{DesignSuite, Layer};
use cathedral_core::png;
use cathedral_core::tools::{audit_pillars, dedupe_file, walk_targets};

#[derive(Parser)]
#[command(name = "cathedral", about = "Cathedral of Circuits creative suite", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the design suite overview demo
    Suite,
    /// Render a sacred geometry preset to PNG
    Geometry {
        /// Registry key, e.g. flower_of_life
        name: String,
        #[arg(long, default_value_t = 800)]
        width: u32,
        #[arg(long, default_value_t = 800)]
        height: u32,
        /// Output path; defaults to <name>.png
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render a fractal preset to PNG
    Fractal {
        /// Registry key, e.g. mandelbrot_cathedral
        name: String,
        #[arg(long, default_value_t = 800)]
        width: u32,
        #[arg(long, default_value_t = 800)]
        height: u32,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compose a design template and describe its layer stack
    Design {
        /// Template key, e.g. business_card_magical
        template: String,
        /// Dump rendered layers as PNGs into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Export the complete suite catalog as JSON
    Export {
        /// Output path; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a tarot card, or search the deck
    Tarot {
        /// Search cards by keyword instead of drawing
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Show the legendary synth collection
    Synths,
    /// Run the agent swarm over a context file (requires ALLOW_AZURE)
    Agents {
        /// Context file posted to every agent
        #[arg(long)]
        context_file: PathBuf,
        /// Instances per agent type
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Directory for responses and metrics.json
        #[arg(long, default_value = "agent_responses")]
        out_dir: PathBuf,
    },
    /// Remove consecutive duplicate lines from files
    Dedupe {
        /// Target files
        files: Vec<PathBuf>,
        /// Process every text file under the current directory
        #[arg(long)]
        all: bool,
    },
    /// Audit the pillar registry directory
    Audit {
        #[arg(long, default_value = "main/registry/pillars")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Commands::Suite => suite_demo(),
        Commands::Geometry { name, width, height, out } => {
            let suite = DesignSuite::new();
            let raster = suite.generate_sacred_geometry(&name, (width, height))?;
            let out = out.unwrap_or_else(|| PathBuf::from(format!("{name}.png")));
            png::save(&raster, &out)?;
            println!("🔮 {} rendered to {}", name, out.display());
            Ok(())
        }
        Commands::Fractal { name, width, height, out } => {
            let suite = DesignSuite::new();
            let raster = suite.generate_fractal(&name, (width, height))?;
            let out = out.unwrap_or_else(|| PathBuf::from(format!("{name}.png")));
            png::save(&raster, &out)?;
            println!("🌀 {} rendered to {}", name, out.display());
            Ok(())
        }
        Commands::Design { template, out_dir } => design_demo(&template, out_dir),
        Commands::Export { out } => {
            let doc = serde_json::to_string_pretty(&DesignSuite::new().export_complete_suite())?;
            match out {
                Some(path) => {
                    std::fs::write(&path, doc)?;
                    println!("📦 Suite exported to {}", path.display());
                }
                None => println!("{doc}"),
            }
            Ok(())
        }
        Commands::Tarot { keyword } => tarot_demo(keyword),
        Commands::Synths => synths_demo(),
        Commands::Agents { context_file, count, out_dir } => {
            run_agents(context_file, count, out_dir).await
        }
        Commands::Dedupe { files, all } => dedupe(files, all),
        Commands::Audit { dir } => audit(dir),
    }
}

fn suite_demo() -> Result<()> {
    println!("🎨 CATHEDRAL CREATIVE DESIGN SUITE");
    println!("{}", "=".repeat(60));
    let suite = DesignSuite::new();
    println!("✨ Professional design suite initialized:");
    println!("   • {} Sacred geometry patterns", suite.sacred_geometries.len());
    println!("   • {} Fractal algorithms", suite.fractal_patterns.len());
    println!("   • {} Professional color palettes", suite.color_palettes.len());
    println!("   • {} Design templates", suite.design_templates.len());
    println!("   • Precision brush set with 6 specialized tools");
    println!("   • Witch Eye logo integration\n");

    println!("🔮 Generating sample sacred geometry: Flower of Life...");
    let flower = suite.generate_sacred_geometry("flower_of_life", (800, 800))?;
    println!("   Generated {}x{} image", flower.width(), flower.height());

    println!("🌀 Generating sample fractal: Cathedral Mandelbrot...");
    let fractal = suite.generate_fractal("mandelbrot_cathedral", (800, 800))?;
    println!("   Generated {}x{} fractal", fractal.width(), fractal.height());

    println!("🎯 Creating sample design: Magical Business Card...");
    let card = suite.create_design_from_template(
        "business_card_magical",
        Some(serde_json::json!({
            "company_name": "Cathedral Circuits",
            "tagline": "Where Art Meets Sacred Science",
        })),
    )?;
    println!("   Design created: {}", card.template_name);
    println!(
        "   Dimensions: {}x{} inches",
        card.dimensions_inches.0, card.dimensions_inches.1
    );
    println!("   Layers: {}", card.layers.len());

    println!("\n🏛️ Cathedral Design Suite operational!");
    Ok(())
}

fn design_demo(template: &str, out_dir: Option<PathBuf>) -> Result<()> {
    let suite = DesignSuite::new();
    let design = suite.create_design_from_template(template, None)?;
    println!("🎯 {} ({})", design.template_name, design.category);
    println!(
        "   {}x{} in @ {} dpi -> {}x{} px",
        design.dimensions_inches.0,
        design.dimensions_inches.1,
        design.dpi,
        design.dimensions_pixels.0,
        design.dimensions_pixels.1
    );
    for (i, layer) in design.layers.iter().enumerate() {
        match layer {
            Layer::SacredGeometry { name, opacity, .. } => {
                println!("   layer {i}: sacred geometry '{name}' at {opacity}")
            }
            Layer::FractalPattern { name, opacity, .. } => {
                println!("   layer {i}: fractal '{name}' at {opacity}")
            }
            Layer::WitchEyeLogo { position, .. } => {
                println!("   layer {i}: witch eye logo ({position:?})")
            }
            Layer::Content { .. } => println!("   layer {i}: content"),
        }
    }
    if let Some(dir) = out_dir {
        std::fs::create_dir_all(&dir)?;
        for (i, layer) in design.layers.iter().enumerate() {
            let (image, tag) = match layer {
                Layer::SacredGeometry { image, .. } => (image, "geometry"),
                Layer::FractalPattern { image, .. } => (image, "fractal"),
                _ => continue,
            };
            let path = dir.join(format!("layer_{i}_{tag}.png"));
            png::save(image, &path)?;
            println!("   saved {}", path.display());
        }
    }
    Ok(())
}

fn tarot_demo(keyword: Option<String>) -> Result<()> {
    let system = TarotSystem::new();
    match keyword {
        Some(query) => {
            let hits = system.search_by_keyword(&query);
            if hits.is_empty() {
                println!("No cards match '{query}'");
            }
            for card in hits {
                println!(
                    "{:2}. {} — {} [{}]",
                    card.number,
                    card.name,
                    card.archetype,
                    card.keywords.join(", ")
                );
            }
        }
        None => {
            let mut rng = rand::thread_rng();
            let (card, reversed) = system.draw_card(&mut rng);
            println!("🎴 {} {}", card.name, if reversed { "(Reversed)" } else { "(Upright)" });
            println!("   Archetype: {}", card.archetype);
            println!("   Element: {} | Planet: {}", card.element, card.planet);
            println!("   Frequency: {} Hz", card.solfeggio_frequency);
            println!(
                "   Meaning: {}",
                if reversed { card.reversed_meaning } else { card.upright_meaning }
            );
        }
    }
    Ok(())
}

fn synths_demo() -> Result<()> {
    println!("🎹 CATHEDRAL SYNTH LAB - LEGENDARY COLLECTION");
    println!("{}", "=".repeat(60));
    let lab = SynthLab::new();
    let info = lab.collection_info();
    println!("📊 Collection Overview:");
    println!("   • Total Synthesizers: {}", info["total_synths"]);
    println!("   • Combined Original Value: ${}", info["total_original_value"]);
    let mut names: Vec<&String> = info["synths"].as_object().unwrap().keys().collect();
    names.sort();
    for key in names {
        let details = &info["synths"][key];
        println!(
            "   • {} ({}) — {} voices, {} element",
            details["name"].as_str().unwrap_or(key),
            details["year"],
            details["polyphony"],
            details["magic_element"].as_str().unwrap_or("?")
        );
    }
    Ok(())
}

async fn run_agents(context_file: PathBuf, count: usize, out_dir: PathBuf) -> Result<()> {
    if !azure_allowed() {
        bail!(
            "⚠️  Azure usage is disabled by repository policy. To enable, set ALLOW_AZURE=1 \
             or create a .allow_azure file in the repo root."
        );
    }
    let content = std::fs::read_to_string(&context_file)?;
    println!("📄 Loaded context: {} characters", content.len());

    let config = AgentsConfig::from_env()?;
    let client = Arc::new(FoundryClient::new(&config)?);

    let mut specs = Vec::new();
    for i in 0..count {
        specs.push(AgentSpec { label: format!("KAOZ_{i}"), agent_id: config.agent_id_kaoz.clone() });
        specs.push(AgentSpec { label: format!("ORDER_{i}"), agent_id: config.agent_id_order.clone() });
    }

    let runner_config = RunnerConfig {
        max_parallel_agents: config.max_parallel_agents,
        batch_size: config.batch_size,
        out_dir: Some(out_dir.clone()),
        ..Default::default()
    };
    let summary = run_swarm(
        client,
        specs,
        Arc::new(content),
        Arc::new(runner_config),
    )
    .await;

    save_metrics(&summary, &out_dir.join("metrics.json"))?;
    println!("\n🎉 EXECUTION COMPLETE");
    println!("Total Agents: {}", summary.total_agents);
    println!("Successful: {}", summary.successful_agents);
    println!("Failed: {}", summary.failed_agents);
    println!("Total Messages Sent: {}", summary.total_messages_sent);
    println!("Total Messages Received: {}", summary.total_messages_received);
    println!("Check {} for results!", out_dir.display());
    Ok(())
}

fn dedupe(files: Vec<PathBuf>, all: bool) -> Result<()> {
    let targets = if all {
        walk_targets(std::path::Path::new("."))
    } else if files.is_empty() {
        bail!("no files given");
    } else {
        files
    };
    for path in targets {
        let removed = dedupe_file(&path)?;
        if removed > 0 {
            println!("{}: removed {} duplicate line(s)", path.display(), removed);
        }
    }
    Ok(())
}

fn audit(dir: PathBuf) -> Result<()> {
    let report = audit_pillars(&dir)?;
    println!("Pillar files found: {}", report.total_files);
    println!("Identified pillars: {:?}", report.found);
    if report.is_complete() {
        println!("All 21 pillars are present and accounted for.");
    } else {
        println!("Missing pillars: {:?}", report.missing);
    }
    if !report.unrecognized.is_empty() {
        println!("Unrecognized files: {:?}", report.unrecognized);
    }
    Ok(())
}
