//! Level curve and XP-to-level mapping

use serde::{Deserialize, Serialize};

/// One row of the level curve
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelDef {
    pub level: i32,
    pub xp_required: i64,
    pub title: String,
    pub icon: String,
}

/// Where a given XP total sits on the curve
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelInfo {
    pub level: i32,
    pub title: String,
    pub icon: String,
    pub xp_floor: i64,
    /// XP at which the next level starts (None at max level)
    pub xp_ceiling: Option<i64>,
}

impl LevelInfo {
    pub fn is_max(&self) -> bool {
        self.xp_ceiling.is_none()
    }

    /// Fraction of the way to the next level, in [0, 1]
    pub fn progress(&self, total_xp: i64) -> f64 {
        match self.xp_ceiling {
            Some(ceiling) if ceiling > self.xp_floor => {
                let gained = (total_xp - self.xp_floor).max(0) as f64;
                (gained / (ceiling - self.xp_floor) as f64).min(1.0)
            }
            _ => 1.0,
        }
    }
}

/// Validated level curve.
///
/// Never empty, starts at 0 XP, thresholds strictly increasing and level
/// numbers consecutive from 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<LevelDef>", into = "Vec<LevelDef>")]
pub struct LevelTable {
    levels: Vec<LevelDef>,
}

impl LevelTable {
    pub fn new(levels: Vec<LevelDef>) -> common::Result<Self> {
        let first = levels
            .first()
            .ok_or_else(|| common::Error::Config("level table is empty".to_string()))?;

        if first.xp_required != 0 {
            return Err(common::Error::Config(format!(
                "first level must start at 0 XP, got {}",
                first.xp_required
            )));
        }

        for (i, def) in levels.iter().enumerate() {
            if def.level != i as i32 + 1 {
                return Err(common::Error::Config(format!(
                    "level numbers must count up from 1, found {} at position {}",
                    def.level,
                    i + 1
                )));
            }
        }

        for pair in levels.windows(2) {
            if pair[1].xp_required <= pair[0].xp_required {
                return Err(common::Error::Config(format!(
                    "level {} requires {} XP, not more than level {} ({} XP)",
                    pair[1].level, pair[1].xp_required, pair[0].level, pair[0].xp_required
                )));
            }
        }

        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[LevelDef] {
        &self.levels
    }

    pub fn max_level(&self) -> i32 {
        self.levels.last().map(|l| l.level).unwrap_or(1)
    }

    /// Map cumulative XP to a level. Negative XP counts as zero and XP past
    /// the top threshold clamps to the top level.
    pub fn level_for(&self, total_xp: i64) -> LevelInfo {
        let xp = total_xp.max(0);
        let idx = self
            .levels
            .iter()
            .rposition(|l| xp >= l.xp_required)
            .unwrap_or(0);

        let current = &self.levels[idx];
        LevelInfo {
            level: current.level,
            title: current.title.clone(),
            icon: current.icon.clone(),
            xp_floor: current.xp_required,
            xp_ceiling: self.levels.get(idx + 1).map(|next| next.xp_required),
        }
    }
}

impl TryFrom<Vec<LevelDef>> for LevelTable {
    type Error = common::Error;

    fn try_from(levels: Vec<LevelDef>) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl From<LevelTable> for Vec<LevelDef> {
    fn from(table: LevelTable) -> Self {
        table.levels
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        let levels = [
            (0, "Penny Saver", "🪙"),
            (100, "Budget Builder", "💵"),
            (250, "Smart Spender", "🛒"),
            (500, "Savings Star", "⭐"),
            (1000, "Money Master", "💰"),
            (2000, "Investment Pro", "📈"),
            (3500, "Finance Guru", "🧠"),
            (5000, "Wealth Wizard", "🧙"),
            (7500, "Market Maven", "🏦"),
            (10000, "Financial Legend", "👑"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (xp_required, title, icon))| LevelDef {
            level: i as i32 + 1,
            xp_required,
            title: title.to_string(),
            icon: icon.to_string(),
        })
        .collect();

        Self { levels }
    }
}
