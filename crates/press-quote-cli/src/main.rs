mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pquote", about = "Press sheet imposition and quoting", version)]
struct Cli {
    /// Log policy decisions and per-paper details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how many items fit on one sheet
    Layout {
        /// Sheet width in cm
        #[arg(long)]
        sheet_width: f64,

        /// Sheet height in cm
        #[arg(long)]
        sheet_height: f64,

        /// Product type
        #[arg(long, default_value = "flyer", value_enum)]
        product: ProductArg,

        /// Flat item width in cm (product default if omitted)
        #[arg(long)]
        width: Option<f64>,

        /// Flat item height in cm (product default if omitted)
        #[arg(long)]
        height: Option<f64>,

        /// Bag preset name (small, medium, large, wine)
        #[arg(long)]
        bag_preset: Option<String>,

        /// Gripper margin in cm
        #[arg(long, default_value = "0.9")]
        gripper: f64,

        /// Edge margin in cm
        #[arg(long, default_value = "0.5")]
        margin: f64,

        /// Gap between items in cm
        #[arg(long, default_value = "0.5")]
        gap: f64,

        /// Bleed in cm
        #[arg(long, default_value = "0.3")]
        bleed: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Quote an order described by a JSON request file
    Quote {
        /// Request file
        #[arg(short, long)]
        input: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an example request file
    Init {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProductArg {
    BusinessCard,
    Flyer,
    Brochure,
    Letterhead,
    Poster,
    Sticker,
    Envelope,
    Bag,
    Cup,
    Custom,
}

impl From<ProductArg> for press_impose::ProductKind {
    fn from(arg: ProductArg) -> Self {
        match arg {
            ProductArg::BusinessCard => Self::BusinessCard,
            ProductArg::Flyer => Self::Flyer,
            ProductArg::Brochure => Self::Brochure,
            ProductArg::Letterhead => Self::Letterhead,
            ProductArg::Poster => Self::Poster,
            ProductArg::Sticker => Self::Sticker,
            ProductArg::Envelope => Self::Envelope,
            ProductArg::Bag => Self::PaperBag,
            ProductArg::Cup => Self::PaperCup,
            ProductArg::Custom => Self::Custom,
        }
    }
}

fn example_request() -> press_impose::QuoteRequest {
    use press_impose::*;

    QuoteRequest {
        product: ProductSpec::new(ProductKind::BusinessCard, 9.0, 5.5),
        quantity: 1000,
        production: ProductionParameters::default(),
        printing: PrintSetup {
            method: PrintingMethod::FourColor,
            sides: PrintSides::Double,
            plate_price: 12.0,
            unit_price: 0.35,
        },
        papers: vec![PaperJob {
            gsm: Some(350),
            ..PaperJob::new(
                "350gsm matt",
                SheetSize::new(35.0, 50.0),
                PaperPricing::hybrid(15.0, 200.0, 20),
            )
        }],
        finishing: vec![FinishingSelection {
            technique: FinishingTechnique::UvSpot,
            side: FinishingSide::Front,
        }],
        finishing_override: None,
    }
}

fn print_layout(layout: &press_impose::LayoutResult) {
    println!("  Usable area: {:.2} x {:.2} cm", layout.usable_width, layout.usable_height);
    println!("  Gripper edge: {:?}", layout.gripper_edge);
    println!("  Orientation: {:?}", layout.orientation);
    println!(
        "  Items per sheet: {} ({} x {})",
        layout.items_per_sheet, layout.items_per_row, layout.items_per_col
    );
    println!("  Gap used: {:.2} cm", layout.gap_used);
    println!("  Efficiency: {:.1}%", layout.efficiency_percent);
    if let Some(adjustment) = layout.adjustment {
        println!("  Adjusted by: {:?}", adjustment);
    }
}

fn print_quote(quote: &press_impose::Quote) {
    let (w, h) = quote.item.size();
    println!("Item: {:?} {:.2} x {:.2} cm", quote.item.kind, w, h);

    for job in &quote.jobs {
        println!("Paper: {}", job.paper);
        print_layout(&job.layout);
        println!(
            "  Sheets: {} (recommended {})",
            job.sheets.actual, job.sheets.recommended
        );
        println!(
            "  Material: {:.2} ({:?}, {:.4} per sheet)",
            job.material.total, job.material.mode, job.material.per_sheet
        );
        println!("  Plates: {} -> {:.2}", job.plates.effective, job.plate_cost);
        println!("  Units: {} -> {:.2}", job.units.effective, job.impression_cost);
    }

    for line in &quote.finishing.lines {
        println!("Finishing: {} ({:?}) {:.2}", line.technique, line.side, line.cost);
    }
    println!("Finishing total: {:.2}", quote.finishing_cost);
    println!("Total: {:.2}", quote.total);

    for warning in &quote.warnings {
        println!("Warning: {:?}", warning);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Layout {
            sheet_width,
            sheet_height,
            product,
            width,
            height,
            bag_preset,
            gripper,
            margin,
            gap,
            bleed,
            json,
        } => {
            let spec = press_impose::ProductSpec {
                kind: product.into(),
                flat_width: width,
                flat_height: height,
                bag_preset,
            };
            let params = press_impose::ProductionParameters {
                gripper_width: gripper,
                edge_margin: margin,
                gap_width: gap,
                bleed_width: bleed,
            };

            let item = press_impose::resolve_geometry(&spec);
            let sheet = press_impose::SheetSize::new(sheet_width, sheet_height);
            let layout = press_impose::impose(sheet, &item, &params);

            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                let (w, h) = item.size();
                println!("Layout of {:.2} x {:.2} cm on {} x {} cm:", w, h, sheet_width, sheet_height);
                print_layout(&layout);
            }
        }

        Commands::Quote { input, json } => {
            let request = press_impose::QuoteRequest::load(&input).await?;
            request.validate()?;
            log::info!("Quoting {} from {}", request.quantity, input.display());

            let quote = press_impose::quote(&request);

            if json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print_quote(&quote);
            }
        }

        Commands::Init { output } => {
            example_request().save(&output).await?;
            println!("Example request → {}", output.display());
        }
    }

    Ok(())
}
