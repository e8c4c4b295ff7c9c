use clap::Parser;
use fire_spread_core::{
    CellState, FireParameters, FireSimulation, SpreadMode, TerrainGrid, TickSummary,
};

/// Headless fire spread demo on a uniform synthetic landscape
#[derive(Parser, Debug)]
#[command(name = "fire-spread-demo")]
#[command(about = "Grid-based wildfire spread demo", long_about = None)]
struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 41)]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 41)]
    cols: usize,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 60)]
    ticks: u64,

    /// Uniform fuel load (fuel-model units)
    #[arg(short, long, default_value_t = 0.2)]
    fuel: f32,

    /// Cell size in meters
    #[arg(long, default_value_t = 30.0)]
    cell_size: f32,

    /// Midflame wind speed (ft/min)
    #[arg(short, long, default_value_t = 0.0)]
    wind_speed: f32,

    /// Wind direction in degrees (0 = North, 90 = East)
    #[arg(long, default_value_t = 0.0)]
    wind_direction: f32,

    /// Dead fuel moisture content (fraction)
    #[arg(long, default_value_t = 0.05)]
    moisture: f32,

    /// Use the simple cellular-automaton spread mode instead of
    /// arrival-time propagation
    #[arg(long)]
    immediate: bool,

    /// Report interval in ticks
    #[arg(short, long, default_value_t = 5)]
    report_interval: u64,

    /// Print an ASCII map of the final state
    #[arg(short, long)]
    map: bool,
}

fn print_summary(summary: &TickSummary) {
    println!(
        "tick {:>4}  t={:>6.1}  unburned {:>6}  burning {:>5}  burned {:>6}  ignited {:>5}",
        summary.tick, summary.time, summary.unburned, summary.burning, summary.burned,
        summary.ignited
    );
}

fn print_map(sim: &FireSimulation) {
    for row in 0..sim.rows() {
        let line: String = (0..sim.cols())
            .map(|col| match sim.state_at(row, col) {
                Some(CellState::Burning) => '*',
                Some(CellState::Burned) => '#',
                Some(CellState::Unburned) => '.',
                None => ' ',
            })
            .collect();
        println!("{line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let terrain = TerrainGrid::uniform(args.rows, args.cols, args.fuel, args.cell_size)?;
    let params = FireParameters {
        wind_speed: args.wind_speed,
        wind_direction: args.wind_direction,
        moisture_content: args.moisture,
        ..FireParameters::default()
    };
    let mode = if args.immediate {
        SpreadMode::Immediate
    } else {
        SpreadMode::ArrivalTime
    };
    let mut sim = FireSimulation::new(&terrain, params)?.with_mode(mode);

    println!(
        "{}x{} grid, fuel {}, wind {} ft/min @ {} deg, mode {:?}",
        args.rows, args.cols, args.fuel, args.wind_speed, args.wind_direction, mode
    );

    // Ignite the center cell
    sim.ignite(args.rows / 2, args.cols / 2);

    let report_interval = args.report_interval.max(1);
    for _ in 0..args.ticks {
        let summary = sim.step();
        if summary.tick % report_interval == 0 {
            print_summary(&summary);
        }
        if sim.is_quiescent() {
            print_summary(&summary);
            println!("quiescent after {} ticks", summary.tick);
            break;
        }
    }

    let counts = sim.counts();
    println!(
        "final: unburned {}  burning {}  burned {}",
        counts.unburned, counts.burning, counts.burned
    );

    if args.map {
        print_map(&sim);
    }

    Ok(())
}
