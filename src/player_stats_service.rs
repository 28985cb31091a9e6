use crate::models::{BestStat, EnrichedPlayer, RosterEntry};
use crate::models_external::player::RawSeasonStat;
use crate::models_external::ApiRsp;
use crate::rest_client;

// Minimum minutes before a derived rate counts. A player with 1 card in 10
// minutes would otherwise score at 9.00 per 90.
const MIN_SAMPLE_MINUTES: i64 = 90;

impl RawSeasonStat {
    pub fn cards_per_90(&self) -> f64 {
        match &self.cards_per_90_overall {
            Some(supplied) => supplied.to_f64(),
            None => self.derive_cards_per_90(),
        }
    }

    fn derive_cards_per_90(&self) -> f64 {
        if self.minutes_played_overall < MIN_SAMPLE_MINUTES {
            return 0.0;
        }
        let cards = (self.yellow_cards_overall + self.red_cards_overall) as f64;
        let rate = cards / self.minutes_played_overall as f64 * 90.0;
        (rate * 100.0).round() / 100.0
    }
}

impl From<&RawSeasonStat> for BestStat {
    fn from(raw: &RawSeasonStat) -> Self {
        BestStat {
            competition_id: raw.competition_id.as_ref().map(|e| e.to_num()),
            yellow_cards: raw.yellow_cards_overall,
            red_cards: raw.red_cards_overall,
            minutes_played: raw.minutes_played_overall,
            appearances: raw.appearances_overall,
            goals: raw.goals_overall,
            assists: raw.assists_overall,
            cards_per_90: format!("{:.2}", raw.cards_per_90()),
            min_per_card: raw.min_per_card_overall.as_ref().map(|e| e.to_str()),
        }
    }
}

pub struct PlayerStatsService;

impl PlayerStatsService {
    // Highest rate wins, ties keep the first-encountered record.
    pub fn best_stat(records: &[RawSeasonStat]) -> Option<BestStat> {
        let mut best: Option<&RawSeasonStat> = None;
        for record in records {
            let better = match best {
                Some(current) => record.cards_per_90() > current.cards_per_90(),
                None => true,
            };
            if better {
                best = Some(record);
            }
        }
        best.map(BestStat::from)
    }

    // A failed or empty fetch yields the bare entry, never an error.
    pub async fn resolve_best(entry: &RosterEntry) -> EnrichedPlayer {
        let url = rest_client::get_player_stats_url(entry.player_id);
        let rsp: Option<ApiRsp<Vec<RawSeasonStat>>> = rest_client::get_call(&url).await;
        let stats = rsp
            .and_then(|e| e.data)
            .and_then(|records| PlayerStatsService::best_stat(&records));
        EnrichedPlayer { entry: entry.clone(), stats }
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerStatsService;
    use crate::models::StringOrNum;
    use crate::models_external::player::RawSeasonStat;

    fn get_stat(yellow: i64, red: i64, minutes: i64) -> RawSeasonStat {
        RawSeasonStat {
            yellow_cards_overall: yellow,
            red_cards_overall: red,
            minutes_played_overall: minutes,
            ..Default::default()
        }
    }

    fn get_supplied_stat(rate: &str) -> RawSeasonStat {
        RawSeasonStat {
            cards_per_90_overall: Some(StringOrNum::String(rate.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn derives_rate_from_counts() {
        let best = PlayerStatsService::best_stat(&[get_stat(2, 0, 900)]).unwrap();
        assert_eq!(best.cards_per_90, "0.20");
    }

    #[test]
    fn small_sample_forces_zero_rate() {
        let best = PlayerStatsService::best_stat(&[get_stat(1, 1, 45)]).unwrap();
        assert_eq!(best.cards_per_90, "0.00");

        let best = PlayerStatsService::best_stat(&[get_stat(3, 1, 0)]).unwrap();
        assert_eq!(best.cards_per_90, "0.00");
    }

    #[test]
    fn supplied_rate_is_used_as_is() {
        let best = PlayerStatsService::best_stat(&[get_supplied_stat("0.35")]).unwrap();
        assert_eq!(best.cards_per_90, "0.35");
    }

    #[test]
    fn selects_highest_rate_regardless_of_order() {
        let records = [get_supplied_stat("0.10"), get_supplied_stat("0.35")];
        let best = PlayerStatsService::best_stat(&records).unwrap();
        assert_eq!(best.cards_per_90, "0.35");

        let records = [get_supplied_stat("0.35"), get_supplied_stat("0.10")];
        let best = PlayerStatsService::best_stat(&records).unwrap();
        assert_eq!(best.cards_per_90, "0.35");
    }

    #[test]
    fn equal_rates_keep_the_first_record() {
        let mut first = get_supplied_stat("0.25");
        first.competition_id = Some(StringOrNum::Int(1));
        let mut second = get_supplied_stat("0.25");
        second.competition_id = Some(StringOrNum::Int(2));

        let best = PlayerStatsService::best_stat(&[first, second]).unwrap();
        assert_eq!(best.competition_id, Some(1));
    }

    #[test]
    fn no_records_means_no_stats() {
        assert!(PlayerStatsService::best_stat(&[]).is_none());
    }
}
