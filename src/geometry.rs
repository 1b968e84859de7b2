//! # Geometry
//!
//! Cities, tours and Euclidean distances. Everything here is a pure function
//! of its inputs except [`generate_cities`], which draws from the generator it
//! is given.

use std::ops::RangeInclusive;

use crate::rng::RandomNumberGenerator;

/// Coordinate range used by [`generate_cities`] on each axis.
pub const CITY_COORD_RANGE: RangeInclusive<i32> = 50..=450;

/// A city position in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A cyclic visiting order: a permutation of city indices with an implicit
/// closing edge from the last entry back to the first.
pub type Tour = Vec<usize>;

/// Generates `n` cities with integer-valued coordinates drawn uniformly from
/// [`CITY_COORD_RANGE`] on each axis.
pub fn generate_cities(n: usize, rng: &mut RandomNumberGenerator) -> Vec<City> {
    (0..n)
        .map(|_| {
            let x = rng.gen_coordinate(CITY_COORD_RANGE);
            let y = rng.gen_coordinate(CITY_COORD_RANGE);
            City::new(x, y)
        })
        .collect()
}

/// Length of the closed tour over `cities`, including the edge from the last
/// city back to the first.
///
/// A single-city tour has length 0. An empty tour also yields 0, but it is
/// not a meaningful tour and the engines refuse empty city lists.
///
/// # Panics
///
/// Panics if a tour entry is not a valid index into `cities`.
pub fn tour_length(tour: &[usize], cities: &[City]) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| cities[tour[i]].distance_to(&cities[tour[(i + 1) % n]]))
        .sum()
}

/// Computes the full distance matrix for `cities`.
pub fn pairwise_distance(cities: &[City]) -> DistanceMatrix {
    DistanceMatrix::new(cities)
}

/// Returns true if `tour` contains every index in `[0, n)` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Symmetric `n × n` table of Euclidean distances with a zero diagonal.
///
/// Built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances between `cities`.
    ///
    /// Only the upper triangle is computed; the lower triangle mirrors it so
    /// `get(i, j) == get(j, i)` holds bit for bit.
    pub fn new(cities: &[City]) -> Self {
        let n = cities.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }
        Self { n, distances }
    }

    /// Number of cities the matrix covers.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between city `i` and city `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "city index out of range");
        self.distances[i * self.n + j]
    }

    /// Length of the closed tour, read from the matrix.
    ///
    /// Agrees exactly with [`tour_length`] over the cities the matrix was
    /// built from.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n).map(|i| self.get(tour[i], tour[(i + 1) % n])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(0.0, 10.0),
            City::new(10.0, 10.0),
            City::new(10.0, 0.0),
        ]
    }

    #[test]
    fn test_tour_length_square() {
        let cities = square();
        assert_eq!(tour_length(&[0, 1, 2, 3], &cities), 40.0);
        let crossed = tour_length(&[0, 2, 1, 3], &cities);
        assert!((crossed - (20.0 + 2.0 * 200f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn test_tour_length_single_city() {
        let cities = vec![City::new(3.0, 4.0)];
        assert_eq!(tour_length(&[0], &cities), 0.0);
    }

    #[test]
    fn test_tour_length_two_cities_counts_both_edges() {
        let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
        assert_eq!(tour_length(&[0, 1], &cities), 10.0);
    }

    #[test]
    fn test_matrix_symmetric_zero_diagonal() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let cities = generate_cities(12, &mut rng);
        let matrix = pairwise_distance(&cities);

        assert_eq!(matrix.len(), 12);
        for i in 0..12 {
            assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..12 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_matrix_tour_length_matches_cities() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let cities = generate_cities(9, &mut rng);
        let matrix = DistanceMatrix::new(&cities);
        let mut tour: Tour = (0..9).collect();
        rng.shuffle(&mut tour);

        assert_eq!(matrix.tour_length(&tour), tour_length(&tour, &cities));
    }

    #[test]
    fn test_generate_cities_in_range() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let cities = generate_cities(50, &mut rng);
        assert_eq!(cities.len(), 50);
        for city in cities {
            assert!((50.0..=450.0).contains(&city.x));
            assert!((50.0..=450.0).contains(&city.y));
        }
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[2, 0, 0], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }
}
