/// Pheromone weight for every ordered pair of cities.
///
/// Starts at 1.0 everywhere. Entries stay non-negative as long as the
/// evaporation rate lies in `[0, 1]` and deposits are non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    n: usize,
    weights: Vec<f64>,
}

impl PheromoneField {
    pub const INITIAL_WEIGHT: f64 = 1.0;

    pub fn new(n: usize) -> Self {
        Self {
            n,
            weights: vec![Self::INITIAL_WEIGHT; n * n],
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight on the edge from `i` to `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "city index out of range");
        self.weights[i * self.n + j]
    }

    /// Multiplies every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for weight in &mut self.weights {
            *weight *= keep;
        }
    }

    /// Adds `amount` to both directions of every edge of the closed `tour`.
    pub fn deposit(&mut self, tour: &[usize], amount: f64) {
        let len = tour.len();
        for i in 0..len {
            let a = tour[i];
            let b = tour[(i + 1) % len];
            self.weights[a * self.n + b] += amount;
            self.weights[b * self.n + a] += amount;
        }
    }

    /// Smallest entry, or `None` for an empty field.
    pub fn min_weight(&self) -> Option<f64> {
        self.weights.iter().copied().reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialized_to_one() {
        let field = PheromoneField::new(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(field.get(i, j), 1.0);
            }
        }
    }

    #[test]
    fn test_evaporate() {
        let mut field = PheromoneField::new(2);
        field.evaporate(0.25);
        assert_eq!(field.get(0, 1), 0.75);

        field.evaporate(1.0);
        assert_eq!(field.min_weight(), Some(0.0));
    }

    #[test]
    fn test_deposit_is_undirected_and_closes_tour() {
        let mut field = PheromoneField::new(3);
        field.evaporate(1.0);
        field.deposit(&[0, 1, 2], 0.5);

        assert_eq!(field.get(0, 1), 0.5);
        assert_eq!(field.get(1, 0), 0.5);
        assert_eq!(field.get(1, 2), 0.5);
        assert_eq!(field.get(2, 1), 0.5);
        assert_eq!(field.get(2, 0), 0.5);
        assert_eq!(field.get(0, 2), 0.5);
        assert_eq!(field.get(0, 0), 0.0);
    }

    #[test]
    fn test_deposit_single_city_hits_diagonal_twice() {
        let mut field = PheromoneField::new(1);
        field.deposit(&[0], 1.0);
        assert_eq!(field.get(0, 0), 3.0);
    }

    #[test]
    fn test_min_weight_empty() {
        assert_eq!(PheromoneField::new(0).min_weight(), None);
    }
}
