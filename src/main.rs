use anyhow::Result;
use clap::{Parser, Subcommand};
use mealswipe::cli::{
    FilterArgs,
    recipe::{RecipeArgs, recipe},
    show::show,
    simulate::{Step, simulate},
};
use validator::Validate;

/// mealswipe - Swipeable meal menu
#[derive(Parser)]
#[command(name = "mealswipe")]
#[command(about = "Browse breakfast, lunch and dinner suggestions by swiping", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the menu for the given preferences
    Show {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Play scripted drags (SLOT:DX or SLOT:cancel:DX) and print the result
    Simulate {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(required = true, allow_hyphen_values = true)]
        steps: Vec<Step>,
    },
    /// Validate a new recipe and print it as JSON
    Recipe {
        #[command(flatten)]
        recipe: RecipeArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealswipe::config::Config::load(cli.config.clone())?;
    config.validate()?;

    mealswipe::observability::init_observability(
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Show { filters } => {
            println!("{}", show(&config, &filters)?);
        }
        Commands::Simulate { filters, steps } => {
            let report = simulate(&config, &filters, &steps).await?;
            tracing::info!(
                swipes = report.swipes.len(),
                frames = report.frames,
                settled = report.settled,
                "Simulation finished"
            );
            println!("{}", report.menu);
        }
        Commands::Recipe { recipe: args } => {
            println!("{}", recipe(&args)?);
        }
    }

    Ok(())
}
