use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Stat {
    Friends,
    Followers,
    Wall,
    Photos,
    Videos,
    Audios,
    Notes,
    Groups,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub photo_200: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub verified: bool,
    #[serde(default, deserialize_with = "flag")]
    pub online: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_closed: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub music: Option<String>,
    #[serde(default)]
    pub movies: Option<String>,
    #[serde(default)]
    pub tv: Option<String>,
    #[serde(default)]
    pub books: Option<String>,
    #[serde(default)]
    pub games: Option<String>,
    #[serde(default)]
    pub universities: Vec<Institution>,
    #[serde(default)]
    pub schools: Vec<Institution>,
    #[serde(default)]
    pub counters: Option<StatCounters>,
    #[serde(default)]
    pub friends_count: Option<u64>,
    #[serde(default)]
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub wall_count: Option<u64>,
    #[serde(default)]
    pub photos_count: Option<u64>,
    #[serde(default)]
    pub videos_count: Option<u64>,
    #[serde(default)]
    pub audios_count: Option<u64>,
    #[serde(default)]
    pub notes_count: Option<u64>,
    #[serde(default)]
    pub groups_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatCounters {
    #[serde(default)]
    pub friends_count: Option<u64>,
    #[serde(default)]
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub wall_count: Option<u64>,
    #[serde(default)]
    pub photos_count: Option<u64>,
    #[serde(default)]
    pub videos_count: Option<u64>,
    #[serde(default)]
    pub audios_count: Option<u64>,
    #[serde(default)]
    pub notes_count: Option<u64>,
    #[serde(default)]
    pub groups_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Institution {
    #[serde(default)]
    pub name: Option<String>,
}

impl UserRecord {
    pub fn display_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let name = name.trim();

        if name.is_empty() {
            "(no name)".to_string()
        } else {
            name.to_string()
        }
    }

    // Nested counters win over the top-level fields; anything the server
    // omitted reads as zero.
    pub fn stat(&self, stat: Stat) -> u64 {
        self.counters
            .as_ref()
            .and_then(|counters| counters.get(stat))
            .or_else(|| self.top_level_stat(stat))
            .unwrap_or(0)
    }

    fn top_level_stat(&self, stat: Stat) -> Option<u64> {
        match stat {
            Stat::Friends => self.friends_count,
            Stat::Followers => self.followers_count,
            Stat::Wall => self.wall_count,
            Stat::Photos => self.photos_count,
            Stat::Videos => self.videos_count,
            Stat::Audios => self.audios_count,
            Stat::Notes => self.notes_count,
            Stat::Groups => self.groups_count,
        }
    }
}

impl StatCounters {
    fn get(&self, stat: Stat) -> Option<u64> {
        match stat {
            Stat::Friends => self.friends_count,
            Stat::Followers => self.followers_count,
            Stat::Wall => self.wall_count,
            Stat::Photos => self.photos_count,
            Stat::Videos => self.videos_count,
            Stat::Audios => self.audios_count,
            Stat::Notes => self.notes_count,
            Stat::Groups => self.groups_count,
        }
    }
}

// OpenVK instances return flags as booleans or as 0/1 integers depending on
// the endpoint; accept both and treat anything else as unset.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(flag)) => flag,
        Some(serde_json::Value::Number(number)) => number.as_i64().unwrap_or(0) != 0,
        _ => false,
    })
}
