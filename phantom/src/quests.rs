//! The daily "[Wanted]" quests of Phantom Forest.

use crate::error::Error;

/// Quests that can be taken on the same day.
pub const MAX_SELECTED: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quest {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub count: u32,
    pub mobs: &'static [&'static str],
    /// Set when the quest is better rerolled, with the reason.
    pub reroll: Option<&'static str>,
}

const fn wanted(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    count: u32,
    mobs: &'static [&'static str],
) -> Quest {
    Quest {
        id,
        title,
        description,
        count,
        mobs,
        reroll: None,
    }
}

pub const QUESTS: [Quest; 8] = [
    Quest {
        reroll: Some(
            "Phantom Trees have low spawn rate and are spread out across multiple maps",
        ),
        ..wanted(
            "1",
            "[Wanted] Logging Work",
            "Eliminate 50 Phantom Trees",
            50,
            &["Phantom Tree"],
        )
    },
    wanted(
        "2",
        "[Wanted] Dust to Dust",
        "Eliminate 200 Elderwraiths",
        200,
        &["Elderwraith"],
    ),
    Quest {
        reroll: Some("Krakian Spirits spawn from Phantom Trees"),
        ..wanted(
            "3",
            "[Wanted] Ashes to Ashes",
            "Eliminate 200 Krakian Spirits",
            200,
            &["Krakian Spirit"],
        )
    },
    wanted(
        "4",
        "[Wanted] A Sword of Heartbreak",
        "Eliminate 200 Corrupted Masters",
        200,
        &["Corrupted Master"],
    ),
    wanted(
        "5",
        "[Wanted] Caught in the Storm",
        "Eliminate 200 Corrupted Stormcasters",
        200,
        &["Corrupted Stormcaster"],
    ),
    wanted(
        "6",
        "[Wanted] Broken Arrow",
        "Eliminate 200 Corrupted Windreavers",
        200,
        &["Corrupted Windreaver"],
    ),
    wanted(
        "7",
        "[Wanted] The Lost Shadow",
        "Eliminate 200 Corrupted Shadowknights",
        200,
        &["Corrupted Shadowknight"],
    ),
    wanted(
        "8",
        "[Wanted] Blind Flame",
        "Eliminate 200 Corrupted Flamekeepers",
        200,
        &["Corrupted Flamekeeper"],
    ),
];

pub fn quest(id: &str) -> Option<&'static Quest> {
    QUESTS.iter().find(|q| q.id == id)
}

/// Look up the selected quests, ignoring repeats.
pub fn select<S: AsRef<str>>(ids: &[S]) -> Result<Vec<&'static Quest>, Error> {
    let mut picked: Vec<&'static Quest> = Vec::new();
    for id in ids {
        let id = id.as_ref().trim();
        let q = quest(id).ok_or_else(|| Error::UnknownQuest(id.to_owned()))?;
        if !picked.iter().any(|p| p.id == q.id) {
            picked.push(q);
        }
    }
    if picked.len() > MAX_SELECTED {
        return Err(Error::TooManyQuests {
            max: MAX_SELECTED,
            got: picked.len(),
        });
    }
    Ok(picked)
}

/// Target mob names of `quests`, in quest order.
pub fn targets(quests: &[&Quest]) -> Vec<String> {
    quests
        .iter()
        .flat_map(|q| q.mobs.iter().map(|&m| m.to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog() {
        assert_eq!(QUESTS.len(), 8);
        for (i, q) in QUESTS.iter().enumerate() {
            assert_eq!(q.id, (i + 1).to_string());
            assert!(q.title.starts_with("[Wanted] "));
            assert_eq!(q.mobs.len(), 1);
        }
        let rerolls: Vec<&str> = QUESTS
            .iter()
            .filter(|q| q.reroll.is_some())
            .map(|q| q.id)
            .collect();
        assert_eq!(rerolls, ["1", "3"]);
        assert_eq!(quest("1").unwrap().count, 50);
        assert_eq!(quest("8").unwrap().mobs, ["Corrupted Flamekeeper"]);
        assert!(quest("9").is_none());
    }

    #[test]
    fn selection() {
        let qs = select(&["4", "2", "4"]).unwrap();
        assert_eq!(targets(&qs), ["Corrupted Master", "Elderwraith"]);
        assert!(select::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn selection_limits() {
        assert!(matches!(select(&["0"]), Err(Error::UnknownQuest(id)) if id == "0"));
        assert!(matches!(
            select(&["1", "2", "3", "4"]),
            Err(Error::TooManyQuests { max: 3, got: 4 })
        ));
    }
}
