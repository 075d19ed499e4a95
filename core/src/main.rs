use clap::Parser;
use workout_core::cli::{main_with_args, Args};

fn main() -> anyhow::Result<()> {
    // Logg til stderr; stdout er forbeholdt oppsummeringene.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    main_with_args(Args::parse())
}
