use clap::{Parser, Subcommand, ValueEnum};
use gridmdp::mdps::{
    mdp_simulator::{discounted_return, rollout},
    mdp_solver_policy::{MdpSolverPolicy, Policy},
};
use gridmdp::render::{render_policy, render_values};
use gridmdp::*;
use rand::prelude::*;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "gridmdp", about = "Solve grid world MDPs by dynamic programming")]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,

    #[arg(long, value_enum, default_value_t = Algorithm::Both, global = true)]
    algorithm: Algorithm,

    /// Seed for the initial policy and for rollouts.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Sample this many episodes of each solved policy.
    #[arg(long, default_value_t = 0, global = true)]
    rollouts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the board described by a JSON scenario file.
    Solve { scenario: PathBuf },
    /// Solve the built-in bridge board.
    Bridge {
        #[arg(long, default_value = "deterministic")]
        transition_model: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Value,
    Policy,
    Both,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut scenario = match cli.cmd {
        Commands::Solve { scenario } => Scenario::load(scenario)?,
        Commands::Bridge { transition_model } => Scenario {
            board: boards::BRIDGE
                .iter()
                .map(|row| row.iter().map(|t| t.to_string()).collect())
                .collect(),
            transition_model,
            solver: SolverConfig::default(),
        },
    };
    if cli.seed.is_some() {
        scenario.solver.seed = cli.seed;
    }

    let mdp = scenario.mdp()?;
    info!(
        states = mdp.states().len(),
        model = %mdp.transition_model(),
        "Loaded board"
    );
    let rng = &mut match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if cli.algorithm != Algorithm::Policy {
        let vi = &mut ValueIteration::new(&mdp, &scenario.solver)?;
        let (delta, n) = vi.exec();
        println!("Value iteration: {n} sweeps, last change {delta:e}");
        println!("{}\n", render_values(&mdp, vi.values()));
        let policy = MdpSolverPolicy { mdp_solver: &*vi };
        println!("{}\n", render_policy(&mdp, &policy));
        print_rollouts(&mdp, &policy, rng, cli.rollouts, scenario.solver.discount);
    }

    if cli.algorithm != Algorithm::Value {
        let pi = &mut PolicyIteration::new(&mdp, &scenario.solver)?;
        let (stable, n) = pi.exec();
        println!("Policy iteration: policy stable: {stable}, {n} iterations");
        println!("{}\n", render_values(&mdp, pi.values()));
        println!("{}\n", render_policy(&mdp, pi.policy()));
        print_rollouts(&mdp, pi.policy(), rng, cli.rollouts, scenario.solver.discount);
    }

    Ok(())
}

fn print_rollouts(mdp: &GridMdp, policy: &dyn Policy, rng: &mut StdRng, n: usize, gamma: f64) {
    for i in 0..n {
        let ep = rollout(mdp, policy, rng, 1000);
        let path = ep.iter().map(|e| e.s.to_string()).collect::<Vec<_>>();
        println!(
            "Episode {i}: return {:.3} via {}",
            discounted_return(&ep, gamma),
            path.join(" -> ")
        );
    }
}
