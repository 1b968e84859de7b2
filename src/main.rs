use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{info, Level};

use tspalg::{
    geometry::generate_cities, AntColonyEngine, ColonyOptions, GeneticEngine, GeneticOptions,
    LogLevel, RandomNumberGenerator, Result, Stepwise,
};

/// Races a genetic algorithm against an ant colony on the same random cities
/// and exports both convergence histories as CSV.
#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
    /// Number of cities to generate
    #[clap(short = 'n', long, default_value_t = 15)]
    cities: usize,

    /// Seed for city generation and both engines; random when omitted
    #[clap(short, long)]
    seed: Option<u64>,

    /// GA population size
    #[clap(long, default_value_t = 50)]
    population_size: usize,

    /// Number of GA generations
    #[clap(long, default_value_t = 200)]
    generations: usize,

    /// Probability that a GA child gets one swap mutation
    #[clap(long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Ants per ACO iteration
    #[clap(long, default_value_t = 20)]
    ants: usize,

    /// Number of ACO iterations
    #[clap(long, default_value_t = 200)]
    iterations: usize,

    /// Pheromone influence exponent
    #[clap(long, default_value_t = 1.0)]
    alpha: f64,

    /// Inverse-distance influence exponent
    #[clap(long, default_value_t = 5.0)]
    beta: f64,

    /// Pheromone evaporation rate, in [0, 1]
    #[clap(long, default_value_t = 0.5)]
    rho: f64,

    /// Pheromone deposit scale q
    #[clap(short, long, default_value_t = 100.0)]
    q: f64,

    /// Pause between polls of the two engines, in milliseconds
    #[clap(long, default_value_t = 0)]
    interval_ms: u64,

    /// Where to write the GA history CSV
    #[clap(long, default_value = "ga_history.csv")]
    ga_csv: PathBuf,

    /// Where to write the ACO history CSV
    #[clap(long, default_value = "aco_history.csv")]
    aco_csv: PathBuf,

    /// Repeat for more output (-v: per-step progress, -vv: best tours too)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn engine_log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::None,
            1 => LogLevel::Minimal,
            _ => LogLevel::Verbose,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose == 0 {
            Level::INFO
        } else {
            Level::DEBUG
        })
        .init();

    let mut rng = match args.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };
    let cities = generate_cities(args.cities, &mut rng);
    let log_level = args.engine_log_level();

    let ga_options = GeneticOptions::builder()
        .population_size(args.population_size)
        .generations(args.generations)
        .mutation_rate(args.mutation_rate)
        .log_level(log_level)
        .build();
    let aco_options = ColonyOptions::builder()
        .ant_count(args.ants)
        .iterations(args.iterations)
        .alpha(args.alpha)
        .beta(args.beta)
        .rho(args.rho)
        .deposit_scale(args.q)
        .log_level(log_level)
        .build();

    let mut ga = GeneticEngine::new(cities.as_slice(), ga_options, rng.clone())?;
    let mut aco = AntColonyEngine::new(cities.as_slice(), aco_options, rng)?;

    info!(cities = cities.len(), "starting GA and ACO");

    loop {
        let ga_step = ga.step();
        let aco_step = aco.step();
        if ga_step.is_none() && aco_step.is_none() {
            break;
        }

        if let Some(step) = &ga_step {
            info!(generation = step.index, distance = step.length, "GA");
        }
        if let Some(step) = &aco_step {
            info!(iteration = step.index, distance = step.length, "ACO");
        }

        if args.interval_ms > 0 {
            thread::sleep(Duration::from_millis(args.interval_ms));
        }
    }

    ga.history().save_csv(&args.ga_csv, ga.index_label())?;
    aco.history().save_csv(&args.aco_csv, aco.index_label())?;

    for (name, best) in [("GA", ga.best()), ("ACO", aco.best())] {
        match best {
            Some(record) => println!("{name}: best distance {:.2} via {:?}", record.length, record.tour),
            None => println!("{name}: no steps run"),
        }
    }
    println!(
        "History written to {} and {}",
        args.ga_csv.display(),
        args.aco_csv.display()
    );

    Ok(())
}
