use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::produce::config::{read_config, Config};
use crate::produce::generator::ScenarioGenerator;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod produce;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct CliArgs {
    #[arg(short = 'c', long, value_name = "Scenario Configuration File")]
    config: String,
}

fn main() {
    let config_file: String = CliArgs::parse().config;
    let start = std::time::Instant::now();
    let file_path = PathBuf::from(config_file);
    let config: Config = read_config(&file_path);
    let generator = ScenarioGenerator::new(config, &file_path);
    generator.initialize();

    let generated = match generator.generate() {
        Ok(generated) => generated,
        Err(e) => panic!("Failed to generate the scenario: {}", e),
    };
    if let Err(e) = generator.write_results(&generated) {
        panic!("Failed to write the scenario files: {}", e);
    }
    let elapsed = start.elapsed();
    info!("Scenario generation finished in {} ms.", elapsed.as_millis());
    println!(
        "Placed {} mobiles around {} sites in {} ms.",
        generated.mobiles.len(),
        generated.sites.len(),
        elapsed.as_millis()
    );
}
