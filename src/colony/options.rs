//! # ColonyOptions
//!
//! Parameters of the ant colony engine.
//!
//! ## Example
//!
//! ```rust
//! use tspalg::colony::ColonyOptions;
//!
//! let options = ColonyOptions::builder()
//!     .ant_count(10)
//!     .iterations(50)
//!     .rho(0.3)
//!     .build();
//!
//! assert_eq!(options.get_beta(), 5.0);
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## Defaults
//!
//! - `ant_count`: 20
//! - `iterations`: 200
//! - `alpha`: 1.0 (pheromone influence exponent)
//! - `beta`: 5.0 (inverse-distance influence exponent)
//! - `rho`: 0.5 (evaporation rate)
//! - `deposit_scale`: 100.0 (the `q` in `q / length`)
//! - `log_level`: `LogLevel::None`

use crate::error::{Result, TspError};
use crate::stepwise::LogLevel;

pub const DEFAULT_ANT_COUNT: usize = 20;
pub const DEFAULT_ITERATIONS: usize = 200;
pub const DEFAULT_ALPHA: f64 = 1.0;
pub const DEFAULT_BETA: f64 = 5.0;
pub const DEFAULT_RHO: f64 = 0.5;
pub const DEFAULT_DEPOSIT_SCALE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ColonyOptions {
    ant_count: usize,
    iterations: usize,
    alpha: f64,
    beta: f64,
    rho: f64,
    deposit_scale: f64,
    log_level: LogLevel,
}

impl ColonyOptions {
    pub fn new(
        ant_count: usize,
        iterations: usize,
        alpha: f64,
        beta: f64,
        rho: f64,
        deposit_scale: f64,
        log_level: LogLevel,
    ) -> Self {
        Self {
            ant_count,
            iterations,
            alpha,
            beta,
            rho,
            deposit_scale,
            log_level,
        }
    }

    pub fn get_ant_count(&self) -> usize {
        self.ant_count
    }

    pub fn get_iterations(&self) -> usize {
        self.iterations
    }

    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    pub fn get_beta(&self) -> f64 {
        self.beta
    }

    pub fn get_rho(&self) -> f64 {
        self.rho
    }

    pub fn get_deposit_scale(&self) -> f64 {
        self.deposit_scale
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_ant_count(&mut self, ant_count: usize) {
        self.ant_count = ant_count;
    }

    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = iterations;
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    pub fn set_beta(&mut self, beta: f64) {
        self.beta = beta;
    }

    pub fn set_rho(&mut self, rho: f64) {
        self.rho = rho;
    }

    pub fn set_deposit_scale(&mut self, deposit_scale: f64) {
        self.deposit_scale = deposit_scale;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks the parameters on their own.
    ///
    /// # Errors
    ///
    /// Returns `TspError::InvalidConfiguration` if there are no ants, `rho`
    /// is outside `[0, 1]`, `alpha` or `beta` is not finite, or the deposit
    /// scale is negative or not finite. The last two keep every pheromone
    /// entry finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.ant_count == 0 {
            return Err(TspError::InvalidConfiguration(
                "Ant count must be at least 1".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.rho) {
            return Err(TspError::InvalidConfiguration(format!(
                "Evaporation rate rho must lie in [0, 1], got {}",
                self.rho
            )));
        }

        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(TspError::InvalidConfiguration(format!(
                "Exponents must be finite, got alpha = {}, beta = {}",
                self.alpha, self.beta
            )));
        }

        if !self.deposit_scale.is_finite() || self.deposit_scale < 0.0 {
            return Err(TspError::InvalidConfiguration(format!(
                "Deposit scale must be finite and non-negative, got {}",
                self.deposit_scale
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating a `ColonyOptions` instance.
    pub fn builder() -> ColonyOptionsBuilder {
        ColonyOptionsBuilder::default()
    }
}

impl Default for ColonyOptions {
    fn default() -> Self {
        Self {
            ant_count: DEFAULT_ANT_COUNT,
            iterations: DEFAULT_ITERATIONS,
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            rho: DEFAULT_RHO,
            deposit_scale: DEFAULT_DEPOSIT_SCALE,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `ColonyOptions`.
#[derive(Debug, Clone, Default)]
pub struct ColonyOptionsBuilder {
    ant_count: Option<usize>,
    iterations: Option<usize>,
    alpha: Option<f64>,
    beta: Option<f64>,
    rho: Option<f64>,
    deposit_scale: Option<f64>,
    log_level: Option<LogLevel>,
}

impl ColonyOptionsBuilder {
    pub fn ant_count(mut self, value: usize) -> Self {
        self.ant_count = Some(value);
        self
    }

    pub fn iterations(mut self, value: usize) -> Self {
        self.iterations = Some(value);
        self
    }

    pub fn alpha(mut self, value: f64) -> Self {
        self.alpha = Some(value);
        self
    }

    pub fn beta(mut self, value: f64) -> Self {
        self.beta = Some(value);
        self
    }

    pub fn rho(mut self, value: f64) -> Self {
        self.rho = Some(value);
        self
    }

    pub fn deposit_scale(mut self, value: f64) -> Self {
        self.deposit_scale = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `ColonyOptions` instance.
    pub fn build(self) -> ColonyOptions {
        ColonyOptions {
            ant_count: self.ant_count.unwrap_or(DEFAULT_ANT_COUNT),
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            alpha: self.alpha.unwrap_or(DEFAULT_ALPHA),
            beta: self.beta.unwrap_or(DEFAULT_BETA),
            rho: self.rho.unwrap_or(DEFAULT_RHO),
            deposit_scale: self.deposit_scale.unwrap_or(DEFAULT_DEPOSIT_SCALE),
            log_level: self.log_level.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ColonyOptions::default();
        assert_eq!(options.get_ant_count(), 20);
        assert_eq!(options.get_iterations(), 200);
        assert_eq!(options.get_alpha(), 1.0);
        assert_eq!(options.get_beta(), 5.0);
        assert_eq!(options.get_rho(), 0.5);
        assert_eq!(options.get_deposit_scale(), 100.0);
        assert!(options.validate().is_ok());
        assert_eq!(ColonyOptions::builder().build(), options);
    }

    #[test]
    fn test_new_and_setters_agree() {
        let mut options = ColonyOptions::default();
        options.set_ant_count(3);
        options.set_iterations(9);
        options.set_alpha(2.0);
        options.set_beta(1.5);
        options.set_rho(0.0);
        options.set_deposit_scale(1.0);
        options.set_log_level(LogLevel::Minimal);

        assert_eq!(
            options,
            ColonyOptions::new(3, 9, 2.0, 1.5, 0.0, 1.0, LogLevel::Minimal)
        );
    }

    #[test]
    fn test_validate_ant_count() {
        let options = ColonyOptions::builder().ant_count(0).build();
        assert!(matches!(
            options.validate(),
            Err(TspError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_rho_bounds() {
        for rho in [-0.1, 1.5, f64::NAN] {
            let options = ColonyOptions::builder().rho(rho).build();
            assert!(options.validate().is_err(), "rho = {} accepted", rho);
        }
        for rho in [0.0, 1.0] {
            assert!(ColonyOptions::builder().rho(rho).build().validate().is_ok());
        }
    }

    #[test]
    fn test_validate_exponents_and_deposit() {
        assert!(ColonyOptions::builder()
            .alpha(f64::INFINITY)
            .build()
            .validate()
            .is_err());
        assert!(ColonyOptions::builder()
            .beta(f64::NAN)
            .build()
            .validate()
            .is_err());
        assert!(ColonyOptions::builder()
            .deposit_scale(-1.0)
            .build()
            .validate()
            .is_err());
        assert!(ColonyOptions::builder()
            .deposit_scale(0.0)
            .build()
            .validate()
            .is_ok());
    }
}
