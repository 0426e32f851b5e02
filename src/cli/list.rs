//! List command implementation.
//!
//! Prints the sprite catalog and faction palettes, either as an aligned
//! table or as JSON for tooling.

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::error::Result;
use crate::sprites::CATALOG;
use crate::types::Faction;

/// List the sprite catalog and faction palettes
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

#[derive(Serialize)]
struct SpriteRow {
    name: &'static str,
    kind: crate::sprites::SpriteKind,
    width: u32,
    height: u32,
    tintable: bool,
}

#[derive(Serialize)]
struct FactionRow {
    name: &'static str,
    colour: String,
}

#[derive(Serialize)]
struct Inventory {
    sprites: Vec<SpriteRow>,
    factions: Vec<FactionRow>,
}

pub fn run(args: ListArgs) -> Result<()> {
    let inventory = build_inventory();

    match args.format {
        Format::Table => print_table(&inventory),
        Format::Json => {
            let json = serde_json::to_string_pretty(&inventory)
                .expect("catalog serialization cannot fail");
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inventory() -> Inventory {
    let sprites = CATALOG
        .iter()
        .map(|entry| {
            let (width, height) = entry.dimensions();
            SpriteRow {
                name: entry.name,
                kind: entry.kind,
                width,
                height,
                tintable: entry.tintable(),
            }
        })
        .collect();

    let factions = Faction::all()
        .into_iter()
        .map(|faction| FactionRow {
            name: faction.name,
            colour: faction.colour.to_string(),
        })
        .collect();

    Inventory { sprites, factions }
}

fn print_table(inventory: &Inventory) {
    let name_width = inventory
        .sprites
        .iter()
        .map(|row| row.name.len())
        .max()
        .unwrap_or(0);

    for row in &inventory.sprites {
        let tint = if row.tintable { "tinted" } else { "neutral" };
        println!(
            "{:<name_width$}  {:<8}  {:>3}x{:<3}  {}",
            row.name,
            row.kind.name(),
            row.width,
            row.height,
            tint
        );
    }

    println!();
    for faction in &inventory.factions {
        println!("{:<name_width$}  faction   {}", faction.name, faction.colour);
    }
}
