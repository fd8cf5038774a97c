use mobroute_paths::{Path, PathStep};

pub fn step(id: &str, direction: Option<&str>, mobs: &[(&str, u32)]) -> PathStep {
    PathStep {
        map_id: id.into(),
        map_name: format!("Map {id}"),
        direction: direction.map(str::to_owned),
        portal: None,
        minimap: None,
        mobs: mobs.iter().map(|&(n, c)| (n.to_owned(), c)).collect(),
    }
}

pub fn path(target: &str, steps: Vec<PathStep>) -> Path {
    let mob_locations = steps.last().map(|s| s.map_id.clone()).into_iter().collect();
    Path {
        steps,
        target_mob: target.to_owned(),
        mob_locations,
        score: None,
    }
}
