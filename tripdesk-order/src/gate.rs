use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simulated contention for competitive bookings.
///
/// Draws from one seeded RNG per process; a fixed seed replays the same
/// admit/reject sequence.
pub struct CompetitionGate {
    rng: Mutex<StdRng>,
    reject_probability: f64,
}

impl CompetitionGate {
    pub fn new(seed: u64, reject_probability: f64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            reject_probability: reject_probability.clamp(0.0, 1.0),
        }
    }

    /// `true` lets the booking through.
    pub fn admit(&self) -> bool {
        let draw: f64 = self.rng.lock().gen();
        draw >= self.reject_probability
    }

    pub fn reject_probability(&self) -> f64 {
        self.reject_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let a = CompetitionGate::new(1337, 0.3);
        let b = CompetitionGate::new(1337, 0.3);
        let seq_a: Vec<bool> = (0..200).map(|_| a.admit()).collect();
        let seq_b: Vec<bool> = (0..200).map(|_| b.admit()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_reject_rate_close_to_configured() {
        let gate = CompetitionGate::new(1337, 0.3);
        let trials = 10_000;
        let rejected = (0..trials).filter(|_| !gate.admit()).count();
        let rate = rejected as f64 / trials as f64;
        assert!((rate - 0.3).abs() < 0.03, "reject rate {}", rate);
    }

    #[test]
    fn test_extremes() {
        let always = CompetitionGate::new(1, 0.0);
        assert!((0..100).all(|_| always.admit()));

        let never = CompetitionGate::new(1, 1.0);
        assert!((0..100).all(|_| !never.admit()));

        assert_eq!(CompetitionGate::new(1, 7.0).reject_probability(), 1.0);
    }
}
