use crate::api::models::Match;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ModeStats {
    pub mode: String,
    pub games: usize,
    pub kills: f64,
    pub deaths: f64,
    pub damage_done: f64,
}

impl ModeStats {
    pub fn new(mode: String) -> Self {
        ModeStats {
            mode,
            games: 0,
            kills: 0.0,
            deaths: 0.0,
            damage_done: 0.0,
        }
    }

    /// Kills per death; a deathless run reports its kill count.
    pub fn kd_ratio(&self) -> f64 {
        if self.deaths == 0.0 {
            self.kills
        } else {
            self.kills / self.deaths
        }
    }

    pub fn kills_per_game(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.kills / self.games as f64
        }
    }
}

pub struct ModeStatsTracker {
    stats: HashMap<String, ModeStats>,
}

impl ModeStatsTracker {
    pub fn new() -> Self {
        ModeStatsTracker {
            stats: HashMap::new(),
        }
    }

    pub fn from_matches(matches: &[Match]) -> Self {
        let mut tracker = Self::new();
        for m in matches {
            tracker.add_match(m);
        }
        tracker
    }

    pub fn add_match(&mut self, m: &Match) {
        let entry = self
            .stats
            .entry(m.mode.clone())
            .or_insert_with(|| ModeStats::new(m.mode.clone()));

        entry.games += 1;
        entry.kills += m.player_stats.kills;
        entry.deaths += m.player_stats.deaths;
        entry.damage_done += m.player_stats.damage_done;
    }

    /// Most played modes first, ties broken by name.
    pub fn get_stats(&self) -> Vec<ModeStats> {
        let mut stats: Vec<ModeStats> = self.stats.values().cloned().collect();
        stats.sort_by(|a, b| b.games.cmp(&a.games).then_with(|| a.mode.cmp(&b.mode)));
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::MatchPlayerStats;

    fn game(mode: &str, kills: f64, deaths: f64) -> Match {
        Match {
            mode: mode.to_string(),
            player_stats: MatchPlayerStats {
                kills,
                deaths,
                damage_done: kills * 250.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn groups_by_mode() {
        let tracker = ModeStatsTracker::from_matches(&[
            game("br_brquads", 4.0, 1.0),
            game("br_brtrios", 2.0, 1.0),
            game("br_brquads", 6.0, 1.0),
        ]);
        let stats = tracker.get_stats();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].mode, "br_brquads");
        assert_eq!(stats[0].games, 2);
        assert_eq!(stats[0].kills, 10.0);
        assert_eq!(stats[0].kd_ratio(), 5.0);
        assert_eq!(stats[0].kills_per_game(), 5.0);
        assert_eq!(stats[0].damage_done, 2500.0);
        assert_eq!(stats[1].mode, "br_brtrios");
    }

    #[test]
    fn no_deaths_reports_kills() {
        let tracker = ModeStatsTracker::from_matches(&[game("br_dmz", 3.0, 0.0)]);
        assert_eq!(tracker.get_stats()[0].kd_ratio(), 3.0);
    }

    #[test]
    fn empty_history() {
        assert!(ModeStatsTracker::from_matches(&[]).get_stats().is_empty());
    }
}
