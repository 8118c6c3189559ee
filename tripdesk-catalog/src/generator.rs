use chrono::{Duration, NaiveDate};
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tripdesk_core::Opening;
use tripdesk_shared::{Country, HotelCompany, LodgingClass};
use uuid::Builder;

/// Start dates are drawn from this calendar year.
const SEASON_YEAR: i32 = 2024;

/// Stay length bounds in days, as `[min, max)`.
const MIN_STAY_DAYS: i64 = 2;
const MAX_STAY_DAYS: i64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("invalid sampling weights: {0}")]
    Weights(#[from] WeightedError),
    #[error("invalid season year {0}")]
    Season(i32),
}

/// Synthetic inventory source.
///
/// Categorical fields are sampled with weights proportional to `1 / rank`
/// over each enum's declaration order. All randomness, including opening
/// ids, comes from one seeded RNG, so a seed fully determines the output
/// sequence across successive `generate` calls.
pub struct OpeningGenerator {
    rng: StdRng,
    countries: WeightedIndex<f64>,
    hotels: WeightedIndex<f64>,
    lodgings: WeightedIndex<f64>,
    season_start: NaiveDate,
    season_days: i64,
}

impl OpeningGenerator {
    pub fn seeded(seed: u64) -> Result<Self, GeneratorError> {
        let season_start = NaiveDate::from_ymd_opt(SEASON_YEAR, 1, 1)
            .ok_or(GeneratorError::Season(SEASON_YEAR))?;
        let season_end = NaiveDate::from_ymd_opt(SEASON_YEAR, 12, 31)
            .ok_or(GeneratorError::Season(SEASON_YEAR))?;

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            countries: WeightedIndex::new(rank_weights(Country::ALL.len()))?,
            hotels: WeightedIndex::new(rank_weights(HotelCompany::ALL.len()))?,
            lodgings: WeightedIndex::new(rank_weights(LodgingClass::ALL.len()))?,
            season_start,
            season_days: (season_end - season_start).num_days() + 1,
        })
    }

    pub fn generate(&mut self, n: usize) -> Vec<Opening> {
        let openings: Vec<Opening> = (0..n).map(|_| self.next_opening()).collect();
        tracing::debug!("Generated {} openings", openings.len());
        openings
    }

    fn next_opening(&mut self) -> Opening {
        let country = Country::ALL[self.countries.sample(&mut self.rng)];
        let hotel_company = HotelCompany::ALL[self.hotels.sample(&mut self.rng)];
        let lodging_class = LodgingClass::ALL[self.lodgings.sample(&mut self.rng)];

        let (low, high) = lodging_class.rate_range();
        let day_rate = self.rng.gen_range(low..high) as f64;

        let start_date = self.season_start + Duration::days(self.rng.gen_range(0..self.season_days));
        let end_date = start_date + Duration::days(self.rng.gen_range(MIN_STAY_DAYS..MAX_STAY_DAYS));

        Opening {
            opening_id: Builder::from_random_bytes(self.rng.gen()).into_uuid(),
            start_date,
            end_date,
            country,
            lodging_class,
            day_rate,
            hotel_company,
            ranking_score: None,
        }
    }
}

/// Normalized `1/k` weights for ranks `1..=n`.
fn rank_weights(n: usize) -> Vec<f64> {
    let raw: Vec<f64> = (1..=n).map(|k| 1.0 / k as f64).collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_same_seed_same_inventory() {
        let a = OpeningGenerator::seeded(42).unwrap().generate(50);
        let b = OpeningGenerator::seeded(42).unwrap().generate(50);
        assert_eq!(a, b);

        let c = OpeningGenerator::seeded(7).unwrap().generate(50);
        assert_ne!(a, c);
    }

    #[test]
    fn test_successive_batches_continue_the_sequence() {
        let mut gen = OpeningGenerator::seeded(42).unwrap();
        let first = gen.generate(5);
        let second = gen.generate(5);
        let ids: HashSet<_> = first.iter().chain(&second).map(|o| o.opening_id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_generated_fields_within_bounds() {
        let openings = OpeningGenerator::seeded(1).unwrap().generate(500);
        for o in &openings {
            let stay = o.days_count();
            assert!((MIN_STAY_DAYS..MAX_STAY_DAYS).contains(&stay), "stay {}", stay);

            let (low, high) = o.lodging_class.rate_range();
            assert!(o.day_rate >= low as f64 && o.day_rate < high as f64);

            assert_eq!(chrono::Datelike::year(&o.start_date), SEASON_YEAR);
            assert!(o.ranking_score.is_none());
        }
    }

    #[test]
    fn test_first_rank_is_most_common() {
        let openings = OpeningGenerator::seeded(42).unwrap().generate(3000);
        let mut counts: HashMap<Country, usize> = HashMap::new();
        for o in &openings {
            *counts.entry(o.country).or_default() += 1;
        }
        let india = counts.get(&Country::India).copied().unwrap_or(0);
        let sudan = counts.get(&Country::Sudan).copied().unwrap_or(0);
        assert!(india > sudan * 5, "india={} sudan={}", india, sudan);
    }

    #[test]
    fn test_rank_weights_sum_to_one() {
        let w = rank_weights(4);
        assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(w[0] > w[1] && w[1] > w[2] && w[2] > w[3]);
    }
}
