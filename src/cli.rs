use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{
    fs,
    path::{Path, PathBuf},
};

use savora_core::{entities::*, map, seed, usecases};
use savora_gateways::postgrest::PostgrestTable;

use crate::config::Config;

/// Administration of the Savora restaurant table.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the cities restaurants can be browsed in
    Cities,
    /// List the restaurants of a city
    List {
        #[arg(long, default_value_t = City::default())]
        city: City,
        /// Print the map search URL of every restaurant
        #[arg(long)]
        map_url: bool,
    },
    /// Upsert restaurants into the table, merging on their name
    Seed {
        /// JSON array of restaurants, the bundled demo data if omitted
        #[arg(long, value_name = "JSON")]
        file: Option<PathBuf>,
    },
}

pub async fn run(command: Command, cfg: Config) -> Result<()> {
    match command {
        Command::Cities => {
            for city in City::all() {
                println!("{}", city.label());
            }
        }
        Command::List { city, map_url } => {
            let table = connect(&cfg)?;
            let restaurants = usecases::fetch_restaurants(&table, city)
                .await
                .with_context(|| format!("Unable to fetch the restaurants in {city}"))?;
            if restaurants.is_empty() {
                log::info!("No restaurants found in {city}");
            }
            for restaurant in &restaurants {
                println!("{}", format_restaurant(restaurant));
                if map_url {
                    println!("    {}", map::restaurant_map_url(restaurant));
                }
            }
        }
        Command::Seed { file } => {
            let rows = match file {
                Some(path) => read_restaurants(&path)?,
                None => seed::demo_restaurants(),
            };
            let table = connect(&cfg)?;
            let count = usecases::seed_restaurants(&table, &rows)
                .await
                .context("Failed to seed data")?;
            println!("Successfully seeded {count} restaurants!");
        }
    }
    Ok(())
}

fn connect(cfg: &Config) -> Result<PostgrestTable> {
    let table = &cfg.table;
    log::debug!("Connecting to table '{}' at {}", table.name, table.url);
    let client = PostgrestTable::new(&table.url, &table.api_key, &table.name, table.timeout)
        .context("Unable to create the table client")?;
    Ok(client)
}

fn read_restaurants(path: &Path) -> Result<Vec<NewRestaurant>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    parse_restaurants(&json).with_context(|| format!("Invalid restaurants in {}", path.display()))
}

fn parse_restaurants(json: &str) -> Result<Vec<NewRestaurant>> {
    let rows: Vec<savora_boundary::NewRestaurant> = serde_json::from_str(json)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

fn format_restaurant(restaurant: &Restaurant) -> String {
    let Restaurant {
        name,
        cuisine_type,
        rating,
        price_range,
        ..
    } = restaurant;
    let address = restaurant.address_or_empty();
    if address.is_empty() {
        format!("{name} ({cuisine_type}) ★ {rating} {price_range}")
    } else {
        format!("{name} ({cuisine_type}) ★ {rating} {price_range}, {address}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn list_defaults_to_kochi() {
        let args = Args::try_parse_from(["savora", "list"]).unwrap();
        match args.command {
            Command::List { city, map_url } => {
                assert_eq!(city, City::Kochi);
                assert!(!map_url);
            }
            cmd => panic!("Unexpected command {cmd:?}"),
        }
    }

    #[test]
    fn parse_city_case_insensitive() {
        let args = Args::try_parse_from([
            "savora",
            "--config",
            "custom.toml",
            "list",
            "--city",
            "pimpri-chinchwad",
            "--map-url",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        match args.command {
            Command::List { city, map_url } => {
                assert_eq!(city, City::PimpriChinchwad);
                assert!(map_url);
            }
            cmd => panic!("Unexpected command {cmd:?}"),
        }
    }

    #[test]
    fn reject_unknown_city() {
        assert!(Args::try_parse_from(["savora", "list", "--city", "Atlantis"]).is_err());
    }

    #[test]
    fn parse_seed_file() {
        let json = r#"[
            {
                "name": "Dhe Puttu",
                "cuisine_type": "South Indian",
                "city": "Kochi",
                "rating": 4.2,
                "price_range": "$",
                "image_url": "",
                "address": "Edappally Bypass"
            }
        ]"#;
        let rows = parse_restaurants(json).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Dhe Puttu");
        assert_eq!(rows[0].address.as_deref(), Some("Edappally Bypass"));
        assert_eq!(rows[0].description, None);
    }

    #[test]
    fn reject_malformed_seed_file() {
        assert!(parse_restaurants(r#"[{"name": "Incomplete"}]"#).is_err());
    }

    #[test]
    fn format_restaurant_line() {
        let restaurant = NewRestaurant {
            name: "Paragon Restaurant".into(),
            cuisine_type: "Kerala".into(),
            city: "Kochi".into(),
            rating: 4.7,
            price_range: "$$".into(),
            image_url: String::new(),
            description: None,
            address: None,
        }
        .into_restaurant("1".into());
        assert_eq!(
            format_restaurant(&restaurant),
            "Paragon Restaurant (Kerala) ★ 4.7 $$"
        );
    }
}
