use anyhow::Result;
use clap::{ Parser, Subcommand };
use dotenv::dotenv;

use cats_db_cli::config;
use cats_db_cli::handlers::cats::{ self, AgeUpdate, FeatureUpdate };
use cats_db_cli::handlers::init;
use cats_db_cli::utils::format::{ render_cat, render_cat_list };

#[derive(Parser)]
#[command(name = "cats-db", version, about = "Bootstrap and manage the cats_db development database")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the cats_user principal and load the sample cats (not re-runnable)
    Init,
    /// Show every cat
    List {
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Show one cat by name
    Get {
        name: String,
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Add a new cat
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        age: i32,
        /// Free-text traits, kept in the order given
        features: Vec<String>,
    },
    /// Change a cat's age
    UpdateAge {
        name: String,
        #[arg(allow_negative_numbers = true)]
        age: i32,
    },
    /// Append a trait to a cat
    AddFeature {
        name: String,
        feature: String,
    },
    /// Delete one cat by name
    Remove {
        name: String,
    },
    /// Delete every cat
    RemoveAll {
        /// Required; there is no interactive confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init => {
            let db = config::connect_admin().await?;
            init::run(&db).await?;
        }
        Command::List { json } => {
            let db = config::connect_app().await?;
            let all = cats::list_cats(&db).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                println!("{}", render_cat_list(&all));
            }
        }
        Command::Get { name, json } => {
            let db = config::connect_app().await?;
            let cat = cats::get_cat(&db, &name).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&cat)?);
            } else {
                println!("{}", render_cat(&cat));
            }
        }
        Command::Add { name, age, features } => {
            let db = config::connect_app().await?;
            let cat = cats::add_cat(&db, &name, age, features).await?;
            println!("Added cat '{}'", cat.name);
            println!("{}", render_cat(&cat));
        }
        Command::UpdateAge { name, age } => {
            let db = config::connect_app().await?;
            match cats::update_age(&db, &name, age).await? {
                AgeUpdate::Updated => println!("Updated '{}' to age {}", name, age),
                AgeUpdate::Unchanged => println!("'{}' was already age {}", name, age),
            }
        }
        Command::AddFeature { name, feature } => {
            let db = config::connect_app().await?;
            match cats::add_feature(&db, &name, &feature).await? {
                FeatureUpdate::Added => println!("Added feature '{}' to '{}'", feature, name),
                FeatureUpdate::AlreadyPresent => {
                    println!("'{}' already has feature '{}'", name, feature);
                }
            }
        }
        Command::Remove { name } => {
            let db = config::connect_app().await?;
            cats::remove_cat(&db, &name).await?;
            println!("Removed cat '{}'", name);
        }
        Command::RemoveAll { yes } => {
            if !yes {
                anyhow::bail!("Refusing to delete all cats without --yes");
            }
            let db = config::connect_app().await?;
            let deleted = cats::remove_all_cats(&db).await?;
            println!("Removed {} cat(s)", deleted);
        }
    }

    Ok(())
}
