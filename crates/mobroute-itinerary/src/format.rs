//! Plain text renderings for terminals and logs.

use mobroute_paths::Path;

use crate::consolidate::Stop;

/// One numbered line per step. Each line but the last names the portal to
/// take toward the next map.
pub fn format_path(path: &Path) -> String {
    let mut out = format!("Path to {}:", path.target_mob);
    if let Some(score) = path.score {
        out.push_str(&format!(" (score {score:.1})"));
    }
    for (i, step) in path.steps.iter().enumerate() {
        out.push_str(&format!("\n{}. {} ({})", i + 1, step.map_name, step.map_id));
        match path.steps.get(i + 1) {
            Some(next) => {
                if let Some(dir) = &next.direction {
                    out.push_str(&format!(" → {dir}"));
                }
            }
            None => out.push_str(" (destination)"),
        }
    }
    out
}

/// A block per stop: mobs, targets found here, and portals to take.
pub fn format_itinerary(stops: &[Stop]) -> String {
    let mut out = String::new();
    for (i, stop) in stops.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}. {} ({})", i + 1, stop.map_name, stop.map_id));
        if !stop.targets.is_empty() {
            out.push_str(&format!(" [target: {}]", stop.targets.join(", ")));
        }
        out.push('\n');
        if !stop.mobs.is_empty() {
            let mobs: Vec<String> = stop
                .mobs
                .iter()
                .map(|(name, n)| format!("{name} x{n}"))
                .collect();
            out.push_str(&format!("   mobs: {}\n", mobs.join(", ")));
        }
        for exit in &stop.exits {
            out.push_str(&format!("   → {} via {}\n", exit.toward, exit.direction));
        }
    }
    out
}
