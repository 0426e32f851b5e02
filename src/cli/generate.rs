//! Generate command implementation.
//!
//! Renders the base sprite catalog, writes each sprite as a PNG, then
//! writes faction-tinted variants of the unit and building sprites under
//! per-faction subdirectories.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, SpriteError};
use crate::output::{display_path, plural, Printer};
use crate::render::{apply_faction_tint, write_png};
use crate::sprites::{find_sprite, SpriteEntry, CATALOG};
use crate::types::{Canvas, Faction, TINT_INTENSITY};

/// Generate the base sprite set and faction-tinted variants
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory for sprite PNGs
    #[arg(long, short, default_value = "assets/textures/sprites")]
    pub output: PathBuf,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Generate only the named sprites (default: whole catalog)
    #[arg(long = "sprite")]
    pub sprites: Vec<String>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let selection = resolve_selection(&args.sprites)?;

    if !args.sprites.is_empty() {
        printer.info(
            "Selecting",
            &format!("{} of {}", plural(selection.len(), "sprite", "sprites"), CATALOG.len()),
        );
    }

    ensure_dir(&args.output)?;

    // Base sprites
    let mut rendered: Vec<(&SpriteEntry, Canvas)> = Vec::with_capacity(selection.len());
    let mut written = 0;

    for &entry in &selection {
        let canvas = entry.render();
        let path = args.output.join(format!("{}.png", entry.name));
        write_png(&canvas, &path, args.scale)?;
        printer.status(
            "Generating",
            &format!("{} ({}x{})", entry.name, canvas.width(), canvas.height()),
        );
        written += 1;
        rendered.push((entry, canvas));
    }

    // Faction-tinted variants for unit and building sprites
    let any_tintable = rendered.iter().any(|(entry, _)| entry.tintable());

    if any_tintable {
        for faction in Faction::all() {
            let faction_dir = args.output.join(faction.name);
            ensure_dir(&faction_dir)?;

            for (entry, canvas) in rendered.iter().filter(|(entry, _)| entry.tintable()) {
                let tinted = apply_faction_tint(canvas, faction.colour, TINT_INTENSITY);
                let path = faction_dir.join(format!("{}.png", entry.name));
                write_png(&tinted, &path, args.scale)?;
                printer.status("Tinting", &format!("{}/{}", faction.name, entry.name));
                written += 1;
            }
        }
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(written, "sprite", "sprites"),
            display_path(&args.output)
        ),
    );

    Ok(())
}

/// Resolve the `--sprite` filters against the catalog, defaulting to the
/// whole catalog when no filter is given. Catalog order is preserved.
fn resolve_selection(names: &[String]) -> Result<Vec<&'static SpriteEntry>> {
    if names.is_empty() {
        return Ok(CATALOG.iter().collect());
    }

    for name in names {
        if find_sprite(name).is_none() {
            let known: Vec<&str> = CATALOG.iter().map(|e| e.name).collect();
            return Err(SpriteError::UnknownSprite {
                name: name.clone(),
                help: Some(format!("Known sprites: {}", known.join(", "))),
            });
        }
    }

    Ok(CATALOG
        .iter()
        .filter(|e| names.iter().any(|n| n == e.name))
        .collect())
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn generate_into(output: PathBuf, sprites: Vec<String>, scale: u32) -> Result<()> {
        run(
            GenerateArgs {
                output,
                scale,
                sprites,
            },
            &Printer::new(),
        )
    }

    #[test]
    fn test_generate_full_catalog() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("sprites");

        generate_into(output.clone(), vec![], 1).unwrap();

        // 11 base sprites
        for entry in &CATALOG {
            assert!(
                output.join(format!("{}.png", entry.name)).exists(),
                "missing base sprite {}",
                entry.name
            );
        }

        // 8 tinted sprites per faction
        for faction in Faction::all() {
            let faction_dir = output.join(faction.name);
            let count = fs::read_dir(&faction_dir).unwrap().count();
            assert_eq!(count, 8, "wrong tinted count for {}", faction.name);
        }

        // Decodable with the declared dimensions
        let img = image::open(output.join("terrain.png")).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (80, 60));

        let img = image::open(output.join("continuity").join("turret.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!((img.width(), img.height()), (24, 24));
    }

    #[test]
    fn test_generate_tint_preserves_alpha() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("sprites");

        generate_into(output.clone(), vec!["turret".to_string()], 1).unwrap();

        let base = image::open(output.join("turret.png")).unwrap().to_rgba8();
        let tinted = image::open(output.join("collegium").join("turret.png"))
            .unwrap()
            .to_rgba8();

        for (base_px, tinted_px) in base.pixels().zip(tinted.pixels()) {
            assert_eq!(base_px.0[3], tinted_px.0[3]);
            if base_px.0[3] == 0 {
                assert_eq!(base_px.0, tinted_px.0);
            }
        }
    }

    #[test]
    fn test_generate_with_scale() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("sprites");

        generate_into(output.clone(), vec!["infantry".to_string()], 2).unwrap();

        let img = image::open(output.join("infantry.png")).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    #[test]
    fn test_generate_untintable_selection_skips_faction_dirs() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("sprites");

        generate_into(output.clone(), vec!["terrain".to_string()], 1).unwrap();

        assert!(output.join("terrain.png").exists());
        assert!(!output.join("continuity").exists());
        assert!(!output.join("collegium").exists());
    }

    #[test]
    fn test_generate_unknown_sprite() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("sprites");

        let err = generate_into(output, vec!["dreadnought".to_string()], 1).unwrap_err();
        assert!(matches!(err, SpriteError::UnknownSprite { .. }));
    }

    #[test]
    fn test_resolve_selection_keeps_catalog_order() {
        let selection =
            resolve_selection(&["turret".to_string(), "infantry".to_string()]).unwrap();
        let names: Vec<&str> = selection.iter().map(|e| e.name).collect();
        assert_eq!(names, ["infantry", "turret"]);
    }
}
