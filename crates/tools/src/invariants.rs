//! Postconditions every generated cave must satisfy.

use cavegen::{CaveConfig, Cell, GeneratedCave, generate_cave};

/// Checks `generated` against the config it was produced from, returning the first
/// violation found. Regenerates once to confirm the output is reproducible.
pub fn check_cave(config: &CaveConfig, generated: &GeneratedCave) -> Result<(), String> {
    if (generated.width, generated.height) != (config.width, config.height)
        || generated.tiles.tiles.len() != config.width * config.height
    {
        return Err(format!(
            "dimensions {}x{} do not match requested {}x{}",
            generated.width, generated.height, config.width, config.height
        ));
    }

    let floor_cells = generated.floor_count();
    let region_cells: usize = generated.regions.iter().map(|region| region.size()).sum();
    if region_cells != floor_cells {
        return Err(format!("regions cover {region_cells} cells but {floor_cells} are floor"));
    }

    if config.connect_caves && floor_cells > 0 && generated.regions.len() != 1 {
        return Err(format!(
            "connected cave has {} regions instead of one",
            generated.regions.len()
        ));
    }

    if let Some(small) =
        generated.regions.iter().find(|region| region.size() < config.min_cave_size.max(1))
    {
        return Err(format!(
            "region {} has {} cells, below minimum {}",
            small.id,
            small.size(),
            config.min_cave_size
        ));
    }

    if let Some(spawn) = generated.spawn_point()
        && generated.cell_at(spawn) != Cell::Floor
    {
        return Err(format!("spawn point {spawn:?} is not floor"));
    }

    let replay_config = CaveConfig { seed: Some(generated.seed.value()), ..config.clone() };
    let replay = generate_cave(&replay_config).map_err(|err| err.to_string())?;
    if replay.fingerprint() != generated.fingerprint() {
        return Err("regenerating with the same seed produced a different cave".to_string());
    }

    Ok(())
}
