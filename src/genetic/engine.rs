//! The generational genetic engine.
//!
//! [`GeneticEngine`] owns its population and advances it one generation per
//! pull through the [`Stepwise`] trait.

use tracing::debug;

use super::operators::{order_crossover, swap_mutation};
use super::options::GeneticOptions;
use crate::{
    error::{Result, TspError},
    geometry::{tour_length, City, Tour},
    history::History,
    rng::RandomNumberGenerator,
    stepwise::{BestRecord, EngineState, LogLevel, Step, Stepwise},
};

/// Fewest cities for which crossover and mutation can pick two distinct positions.
pub const MIN_GENETIC_CITIES: usize = 2;

/// Generational genetic algorithm over tours, advanced one generation per pull.
///
/// Each generation breeds `population_size` children. Every child comes from
/// two distinct parents drawn uniformly from the current population (no
/// fitness weighting), combined with [`order_crossover`] and then swap-mutated
/// with probability `mutation_rate`. The children replace the whole
/// population. The shortest tour ever seen is tracked outside the population,
/// so the reported best never gets worse even when a generation does.
#[derive(Debug, Clone)]
pub struct GeneticEngine {
    cities: Vec<City>,
    options: GeneticOptions,
    rng: RandomNumberGenerator,
    population: Vec<Tour>,
    best: Option<BestRecord>,
    history: History,
    generation: usize,
    state: EngineState,
}

impl GeneticEngine {
    /// Creates a new engine over a private copy of `cities`.
    ///
    /// No population exists until the first step is pulled.
    ///
    /// # Errors
    ///
    /// - `TspError::DegenerateInput` if `cities` is empty.
    /// - `TspError::InvalidConfiguration` if the options are invalid or there
    ///   are fewer than two cities.
    pub fn new(
        cities: impl Into<Vec<City>>,
        options: GeneticOptions,
        rng: RandomNumberGenerator,
    ) -> Result<Self> {
        let cities = cities.into();
        if cities.is_empty() {
            return Err(TspError::DegenerateInput(
                "Genetic engine needs at least one city".to_string(),
            ));
        }

        options.validate()?;

        if cities.len() < MIN_GENETIC_CITIES {
            return Err(TspError::InvalidConfiguration(format!(
                "Genetic engine needs at least {} cities, got {}",
                MIN_GENETIC_CITIES,
                cities.len()
            )));
        }

        debug!(
            cities = cities.len(),
            population_size = options.get_population_size(),
            generations = options.get_generations(),
            mutation_rate = options.get_mutation_rate(),
            "genetic engine constructed"
        );

        Ok(Self {
            cities,
            options,
            rng,
            population: Vec::new(),
            best: None,
            history: History::new(),
            generation: 0,
            state: EngineState::Constructed,
        })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn options(&self) -> &GeneticOptions {
        &self.options
    }

    /// The current population; empty before the first step.
    pub fn population(&self) -> &[Tour] {
        &self.population
    }

    /// Fills the population with uniform random tours and returns the
    /// shortest of them as the starting best.
    fn seed_population(&mut self) -> BestRecord {
        let n = self.cities.len();
        self.population = (0..self.options.get_population_size())
            .map(|_| {
                let mut tour: Tour = (0..n).collect();
                self.rng.shuffle(&mut tour);
                tour
            })
            .collect();

        self.shortest_in_population()
    }

    /// First shortest individual of the current population.
    fn shortest_in_population(&self) -> BestRecord {
        let mut shortest = BestRecord::unset();
        for tour in &self.population {
            shortest.offer(tour, tour_length(tour, &self.cities));
        }
        shortest
    }

    /// Two distinct population indices, drawn uniformly.
    fn choose_parents(&mut self) -> (usize, usize) {
        self.rng.distinct_pair(self.population.len())
    }

    /// Crossover segment bounds `a < b`, two distinct positions in `[0, n)`.
    fn choose_cut_points(&mut self) -> (usize, usize) {
        let (x, y) = self.rng.distinct_pair(self.cities.len());
        (x.min(y), x.max(y))
    }

    fn breed_child(&mut self) -> Tour {
        let n = self.cities.len();
        let (i, j) = self.choose_parents();
        let (a, b) = self.choose_cut_points();

        let mut child = order_crossover(&self.population[i], &self.population[j], a, b);

        if self.rng.gen_unit() < self.options.get_mutation_rate() {
            let (x, y) = self.rng.distinct_pair(n);
            swap_mutation(&mut child, x, y);
        }

        child
    }

    fn run_generation(&mut self) -> Step {
        let mut best = match self.best.take() {
            Some(best) => best,
            None => self.seed_population(),
        };

        let offspring: Vec<Tour> = (0..self.options.get_population_size())
            .map(|_| self.breed_child())
            .collect();
        self.population = offspring;

        let generation_best = self.shortest_in_population();
        best.offer(&generation_best.tour, generation_best.length);

        let step = Step {
            index: self.generation,
            tour: best.tour.clone(),
            length: best.length,
        };

        self.best = Some(best);
        self.history.push(step.index, step.length);

        match self.options.get_log_level() {
            LogLevel::Minimal => debug!(
                generation = step.index,
                best_length = step.length,
                "generation complete"
            ),
            LogLevel::Verbose => debug!(
                generation = step.index,
                best_length = step.length,
                population_best = generation_best.length,
                best_tour = ?step.tour,
                "generation complete"
            ),
            LogLevel::None => {}
        }

        self.generation += 1;
        step
    }
}

impl Stepwise for GeneticEngine {
    fn step(&mut self) -> Option<Step> {
        if self.state == EngineState::Exhausted {
            return None;
        }

        if self.generation >= self.options.get_generations() {
            self.state = EngineState::Exhausted;
            debug!(generations = self.generation, "genetic engine exhausted");
            return None;
        }

        let step = self.run_generation();
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
        self.generation
    }

    fn index_label(&self) -> &'static str {
        "Generation"
    }
}

impl Iterator for GeneticEngine {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.step()
    }
}
