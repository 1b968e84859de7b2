//! The ant colony engine.
//!
//! [`AntColonyEngine`] keeps the pheromone field and the precomputed distance
//! matrix, and runs one batch of ant tours per pull through [`Stepwise`].

use tracing::debug;

use super::options::ColonyOptions;
use super::pheromone::PheromoneField;
use crate::{
    error::{Result, TspError},
    geometry::{City, DistanceMatrix, Tour},
    history::History,
    rng::RandomNumberGenerator,
    stepwise::{BestRecord, EngineState, LogLevel, Step, Stepwise},
};

/// Added to every distance before inverting it, so coincident cities get a
/// large but finite attractiveness.
pub const DISTANCE_EPSILON: f64 = 1e-6;

/// Ant colony optimizer, advanced one iteration (one batch of ant tours) per pull.
///
/// Each ant starts at a uniformly random city and extends its tour by
/// roulette-wheel selection over the unvisited cities, weighting candidate
/// `j` from city `i` by `pheromone[i][j]^alpha * (1 / (d[i][j] + ε))^beta`.
/// Once every ant has a tour the whole field evaporates by `1 - rho`, then
/// every tour deposits `q / length` on both directions of each of its edges.
#[derive(Debug, Clone)]
pub struct AntColonyEngine {
    cities: Vec<City>,
    options: ColonyOptions,
    rng: RandomNumberGenerator,
    distances: DistanceMatrix,
    /// `(1 / (d + ε))^beta` for every pair; fixed for the engine's lifetime.
    heuristic: Vec<f64>,
    pheromone: PheromoneField,
    best: Option<BestRecord>,
    history: History,
    iteration: usize,
    state: EngineState,
}

impl AntColonyEngine {
    /// Creates a new engine over a private copy of `cities` and precomputes
    /// the distance matrix.
    ///
    /// # Errors
    ///
    /// - `TspError::DegenerateInput` if `cities` is empty.
    /// - `TspError::InvalidConfiguration` if the options are invalid.
    pub fn new(
        cities: impl Into<Vec<City>>,
        options: ColonyOptions,
        rng: RandomNumberGenerator,
    ) -> Result<Self> {
        let cities = cities.into();
        if cities.is_empty() {
            return Err(TspError::DegenerateInput(
                "Ant colony engine needs at least one city".to_string(),
            ));
        }

        options.validate()?;

        let n = cities.len();
        let distances = DistanceMatrix::new(&cities);
        let beta = options.get_beta();
        let heuristic = (0..n * n)
            .map(|k| (1.0 / (distances.get(k / n, k % n) + DISTANCE_EPSILON)).powf(beta))
            .collect();

        debug!(
            cities = n,
            ant_count = options.get_ant_count(),
            iterations = options.get_iterations(),
            alpha = options.get_alpha(),
            beta,
            rho = options.get_rho(),
            deposit_scale = options.get_deposit_scale(),
            "ant colony engine constructed"
        );

        Ok(Self {
            cities,
            options,
            rng,
            distances,
            heuristic,
            pheromone: PheromoneField::new(n),
            best: None,
            history: History::new(),
            iteration: 0,
            state: EngineState::Constructed,
        })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn options(&self) -> &ColonyOptions {
        &self.options
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    fn attractiveness(&self, from: usize, to: usize) -> f64 {
        let n = self.cities.len();
        self.pheromone.get(from, to).powf(self.options.get_alpha()) * self.heuristic[from * n + to]
    }

    /// Roulette-wheel choice of the next city among the unvisited ones,
    /// scanned in ascending index order. Falls back to the last candidate
    /// when rounding keeps the running sum below the drawn threshold.
    ///
    /// Returns `None` only when every city has been visited.
    fn select_next(&mut self, current: usize, visited: &[bool]) -> Option<usize> {
        let candidates: Vec<(usize, f64)> = (0..self.cities.len())
            .filter(|&j| !visited[j])
            .map(|j| (j, self.attractiveness(current, j)))
            .collect();

        let total: f64 = candidates.iter().map(|&(_, weight)| weight).sum();
        let threshold = self.rng.gen_unit() * total;

        let mut cumulative = 0.0;
        for &(city, weight) in &candidates {
            cumulative += weight;
            if cumulative >= threshold {
                return Some(city);
            }
        }

        candidates.last().map(|&(city, _)| city)
    }

    fn build_tour(&mut self) -> Tour {
        let n = self.cities.len();
        let start = self.rng.gen_index(n);

        let mut visited = vec![false; n];
        let mut tour = Vec::with_capacity(n);
        visited[start] = true;
        tour.push(start);

        let mut current = start;
        while tour.len() < n {
            let Some(next) = self.select_next(current, &visited) else {
                break;
            };
            visited[next] = true;
            tour.push(next);
            current = next;
        }

        tour
    }

    fn update_pheromone(&mut self, tours: &[(Tour, f64)]) {
        self.pheromone.evaporate(self.options.get_rho());

        let q = self.options.get_deposit_scale();
        for (tour, length) in tours {
            // A zero-length tour (one city, or all cities coincident) has no finite deposit.
            if *length > 0.0 {
                self.pheromone.deposit(tour, q / length);
            }
        }
    }

    fn run_iteration(&mut self) -> Step {
        let mut best = self.best.take().unwrap_or_else(BestRecord::unset);
        let mut iteration_best = BestRecord::unset();

        let mut tours = Vec::with_capacity(self.options.get_ant_count());
        for _ in 0..self.options.get_ant_count() {
            let tour = self.build_tour();
            let length = self.distances.tour_length(&tour);
            iteration_best.offer(&tour, length);
            tours.push((tour, length));
        }

        self.update_pheromone(&tours);
        best.offer(&iteration_best.tour, iteration_best.length);

        let step = Step {
            index: self.iteration,
            tour: best.tour.clone(),
            length: best.length,
        };

        self.best = Some(best);
        self.history.push(step.index, step.length);

        match self.options.get_log_level() {
            LogLevel::Minimal => debug!(
                iteration = step.index,
                best_length = step.length,
                "iteration complete"
            ),
            LogLevel::Verbose => debug!(
                iteration = step.index,
                best_length = step.length,
                iteration_best = iteration_best.length,
                best_tour = ?step.tour,
                "iteration complete"
            ),
            LogLevel::None => {}
        }

        self.iteration += 1;
        step
    }
}

impl Stepwise for AntColonyEngine {
    fn step(&mut self) -> Option<Step> {
        if self.state == EngineState::Exhausted {
            return None;
        }

        if self.iteration >= self.options.get_iterations() {
            self.state = EngineState::Exhausted;
            debug!(iterations = self.iteration, "ant colony engine exhausted");
            return None;
        }

        let step = self.run_iteration();
        self.state = EngineState::Running;
        Some(step)
    }

    fn state(&self) -> EngineState {
        self.state
    }

    fn best(&self) -> Option<&BestRecord> {
        self.best.as_ref()
    }

    fn history(&self) -> &History {
        &self.history
    }

    fn steps_taken(&self) -> usize {
        self.iteration
    }

    fn index_label(&self) -> &'static str {
        "Iteration"
    }
}

impl Iterator for AntColonyEngine {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{generate_cities, is_permutation};

    fn engine(n: usize, options: ColonyOptions, seed: u64) -> AntColonyEngine {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let cities = generate_cities(n, &mut rng);
        AntColonyEngine::new(cities, options, rng).unwrap()
    }

    #[test]
    fn test_rejects_empty_cities() {
        let result = AntColonyEngine::new(
            Vec::<City>::new(),
            ColonyOptions::default(),
            RandomNumberGenerator::from_seed(0),
        );
        assert!(matches!(result, Err(TspError::DegenerateInput(_))));
    }

    #[test]
    fn test_rejects_invalid_options() {
        let result = AntColonyEngine::new(
            vec![City::new(0.0, 0.0)],
            ColonyOptions::builder().rho(2.0).build(),
            RandomNumberGenerator::from_seed(0),
        );
        assert!(matches!(result, Err(TspError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_build_tour_is_permutation() {
        let mut engine = engine(15, ColonyOptions::default(), 1);
        for _ in 0..50 {
            let tour = engine.build_tour();
            assert!(is_permutation(&tour, 15));
        }
    }

    #[test]
    fn test_select_next_only_unvisited() {
        let mut engine = engine(6, ColonyOptions::default(), 2);
        let visited = [true, false, true, true, false, true];
        for _ in 0..100 {
            let next = engine.select_next(0, &visited).unwrap();
            assert!(next == 1 || next == 4);
        }
    }

    #[test]
    fn test_select_next_single_candidate() {
        let mut engine = engine(4, ColonyOptions::default(), 3);
        let visited = [true, true, false, true];
        assert_eq!(engine.select_next(1, &visited), Some(2));
        assert_eq!(engine.select_next(1, &[true; 4]), None);
    }

    #[test]
    fn test_select_next_zero_weights_takes_first_candidate() {
        // Zero pheromone zeroes every weight, so the threshold is 0 and the
        // first candidate already reaches it.
        let mut engine = engine(5, ColonyOptions::default(), 4);
        engine.pheromone.evaporate(1.0);
        let visited = [true, false, false, false, false];
        for _ in 0..20 {
            assert_eq!(engine.select_next(0, &visited), Some(1));
        }
    }

    #[test]
    fn test_select_next_falls_back_to_last_candidate() {
        // NaN weights never reach the threshold, so the scan runs off the end.
        let mut engine = engine(5, ColonyOptions::default(), 4);
        engine.heuristic.iter_mut().for_each(|h| *h = f64::NAN);
        let visited = [true, false, false, false, true];
        for _ in 0..20 {
            assert_eq!(engine.select_next(0, &visited), Some(3));
        }
    }

    #[test]
    fn test_coincident_cities_stay_finite() {
        let cities = vec![City::new(5.0, 5.0); 4];
        let mut engine = AntColonyEngine::new(
            cities,
            ColonyOptions::builder().iterations(3).build(),
            RandomNumberGenerator::from_seed(5),
        )
        .unwrap();

        let steps: Vec<Step> = engine.by_ref().collect();
        assert_eq!(steps.len(), 3);
        for step in steps {
            assert_eq!(step.length, 0.0);
            assert!(is_permutation(&step.tour, 4));
        }
        assert!(engine.pheromone().min_weight().unwrap().is_finite());
    }

    #[test]
    fn test_pheromone_after_iteration() {
        let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
        let mut engine = AntColonyEngine::new(
            cities,
            ColonyOptions::builder().ant_count(1).iterations(1).build(),
            RandomNumberGenerator::from_seed(6),
        )
        .unwrap();

        let step = engine.step().unwrap();
        assert_eq!(step.length, 10.0);
        // Evaporated to 0.5, then the single two-city tour deposits
        // 100 / 10 twice on each direction (edge out and closing edge back).
        assert_eq!(engine.pheromone().get(0, 1), 0.5 + 20.0);
        assert_eq!(engine.pheromone().get(1, 0), 0.5 + 20.0);
        assert_eq!(engine.pheromone().get(0, 0), 0.5);
    }

    #[test]
    fn test_index_label() {
        let engine = engine(3, ColonyOptions::default(), 7);
        assert_eq!(engine.index_label(), "Iteration");
    }
}
