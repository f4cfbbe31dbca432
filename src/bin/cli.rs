//! Medboard CLI
//!
//! Command-line interface for Medboard operations:
//! - List, look up, search, and append records on a running server
//! - Check server status
//! - Preview a rendered section offline
//! - Generate a default config file

use clap::{Parser, Subcommand};
use medboard::store::{CollectionName, FieldMap, RecordStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hospital admin dashboard client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://127.0.0.1:8080", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the records of a collection
    Collections {
        /// patients, doctors, appointments, bills, or reports
        name: String,
        /// Only records with this status (report type for reports)
        #[arg(long)]
        status: Option<String>,
        /// Only records whose text fields contain this
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one record
    Show {
        /// Collection name
        name: String,
        /// Record id
        id: u64,
    },

    /// Search patients by name
    Search {
        query: String,
    },

    /// Append a record
    Add {
        /// Collection name
        name: String,
        /// Fields in key=value format
        fields: Vec<String>,
    },

    /// Show the dashboard stats snapshot
    Stats,

    /// Show server status
    Status,

    /// Render a section from a freshly seeded store, without a server
    Preview {
        /// Section id; unknown ids render the dashboard
        #[arg(default_value = "dashboard")]
        section: String,
        /// Reports tab (monthly, revenue, analytics)
        #[arg(short, long)]
        tab: Option<String>,
        /// Print the node tree as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Collections {
            name,
            status,
            search,
        } => {
            let collection: CollectionName = name.parse()?;

            let mut params = Vec::new();
            if let Some(status) = status {
                params.push(("status", status));
            }
            if let Some(search) = search {
                params.push(("search", search));
            }

            let response = client
                .get(format!("{}/api/v1/collections/{}", cli.api_url, collection))
                .query(&params)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                eprintln!("Request failed ({}): {}", status, text);
                std::process::exit(1);
            }

            let data: serde_json::Value = response.json().await?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data["records"])?);
            } else {
                print_records(collection, &data["records"]);
            }
        }

        Commands::Add { name, fields } => {
            let collection: CollectionName = name.parse()?;
            let body = parse_fields(&fields)?;

            let response = client
                .post(format!("{}/api/v1/collections/{}", cli.api_url, collection))
                .json(&body)
                .send()
                .await?;

            if response.status().is_success() {
                let record: serde_json::Value = response.json().await?;
                println!(
                    "Added {} with id {}",
                    collection.singular().to_lowercase(),
                    record["id"]
                );
            } else {
                let status = response.status();
                let error: serde_json::Value = response.json().await.unwrap_or_default();
                eprintln!(
                    "Failed ({}): {}",
                    status,
                    error["error"]["message"].as_str().unwrap_or("unknown error")
                );
                std::process::exit(1);
            }
        }

        Commands::Show { name, id } => {
            let collection: CollectionName = name.parse()?;

            let response = client
                .get(format!("{}/api/v1/collections/{}/{}", cli.api_url, collection, id))
                .send()
                .await?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                eprintln!("No {} with id {}", collection.singular().to_lowercase(), id);
                std::process::exit(1);
            }

            let record: serde_json::Value = response.error_for_status()?.json().await?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_records(collection, &serde_json::Value::Array(vec![record]));
            }
        }

        Commands::Search { query } => {
            let data: serde_json::Value = client
                .get(format!("{}/api/v1/patients/search", cli.api_url))
                .query(&[("q", &query)])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data["results"])?);
            } else {
                print_records(CollectionName::Patients, &data["results"]);
            }
        }

        Commands::Stats => {
            let stats: serde_json::Value = client
                .get(format!("{}/api/v1/stats", cli.api_url))
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Total patients:  {}", stats["totalPatients"]);
                println!("Active patients: {}", stats["activePatients"]);
                println!("Total doctors:   {}", stats["totalDoctors"]);
                println!("Total revenue:   ${}", stats["totalRevenue"]);
                println!("Monthly growth:  +{}%", stats["monthlyGrowth"]);
            }
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!(
                        "Medboard v{}",
                        health["version"].as_str().unwrap_or(env!("CARGO_PKG_VERSION"))
                    );
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );

                    println!();
                    println!("Records:");
                    for collection in CollectionName::all() {
                        if let Some(count) = health["records"][collection.as_str()].as_u64() {
                            println!("  {:<14} {}", collection.as_str(), count);
                        }
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Medboard at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Medboard server is running:");
                    eprintln!("  cargo run --bin medboard");
                    std::process::exit(1);
                }
            }
        }

        Commands::Preview { section, tab, json } => {
            let store = RecordStore::seeded();
            let tree = medboard::render::render_section(&store, &section, tab.as_deref());

            if json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                println!("{}", tree);
            }
        }

        Commands::Config { output } => {
            let config = medboard::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Parse `key=value` arguments into record fields
fn parse_fields(args: &[String]) -> anyhow::Result<FieldMap> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .ok_or_else(|| anyhow::anyhow!("Invalid field '{}': expected key=value", arg))
        })
        .collect()
}

fn print_records(collection: CollectionName, records: &serde_json::Value) {
    let Some(records) = records.as_array().filter(|r| !r.is_empty()) else {
        println!("No {} yet", collection);
        return;
    };

    let columns: Vec<&str> = std::iter::once("id")
        .chain(collection.required_fields().iter().copied())
        .collect();

    let header: Vec<String> = columns.iter().map(|c| format!("{:<18}", c)).collect();
    println!("{}", header.join(" ").trim_end());
    println!("{}", "-".repeat(columns.len() * 19));

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|c| {
                let value = match &record[*c] {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Null => "-".to_string(),
                    other => other.to_string(),
                };
                format!("{:<18}", truncate(&value, 18))
            })
            .collect();
        println!("{}", row.join(" ").trim_end());
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
