//! Fire spread propagation engine
//!
//! Owns the cell array, the simulation clock and the fire parameters, and
//! advances the per-cell combustion state machines one tick at a time.
//!
//! Each tick is two-phase: a read-only pass over the cells burning at the
//! start of the tick computes candidate arrival times for their unburned
//! neighbors (min-aggregated per target), then state transitions are applied.
//! A cell that ignites during a tick never propagates within that same tick,
//! so results are independent of cell iteration order.
//!
//! Pending ignitions live in a min-heap keyed by arrival time and are popped
//! once the clock passes them, so quiet regions of the grid cost nothing.
//! Heap entries superseded by a lower arrival time are invalidated lazily on
//! pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core_types::{Cell, CellState, TerrainSample};
use crate::grid::{
    bearing_degrees, moore_neighbors, neighbor_distance, TerrainError, TerrainGrid,
};
use crate::physics::rothermel::directional_spread_rate;
use crate::physics::{FireParameters, ParameterError};

/// Fixed clock step per tick.
pub const DT: f32 = 1.0;

/// Construction-time configuration failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Terrain layer validation failed
    Terrain(TerrainError),
    /// Fire parameter validation failed
    Parameters(ParameterError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Terrain(e) => write!(f, "terrain configuration error: {e}"),
            ConfigError::Parameters(e) => write!(f, "fire parameter error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<TerrainError> for ConfigError {
    fn from(e: TerrainError) -> Self {
        ConfigError::Terrain(e)
    }
}

impl From<ParameterError> for ConfigError {
    fn from(e: ParameterError) -> Self {
        ConfigError::Parameters(e)
    }
}

/// How burning cells ignite their neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadMode {
    /// Arrival-time propagation: neighbors ignite when the clock passes the
    /// earliest rate-of-spread arrival any burning neighbor proposed.
    /// Physically grounded; the default.
    ArrivalTime,
    /// Simple cellular automaton: every fuel-bearing neighbor of a burning
    /// cell ignites on the next tick, ignoring spread rates. Kept as an
    /// explicit fast-preview mode; fronts are square rather than round.
    Immediate,
}

/// Per-tick state counts returned by [`FireSimulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSummary {
    /// Tick number (1-based after the first `step`)
    pub tick: u64,
    /// Simulation time after this tick
    pub time: f32,
    /// Cells still unburned
    pub unburned: usize,
    /// Cells currently burning
    pub burning: usize,
    /// Cells fully burned
    pub burned: usize,
    /// Cells that transitioned to burning during this tick
    pub ignited: usize,
}

/// Snapshot of how many cells sit in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    /// Cells still unburned
    pub unburned: usize,
    /// Cells currently burning
    pub burning: usize,
    /// Cells fully burned
    pub burned: usize,
}

/// Heap entry for a predicted ignition. Ordered as a min-heap on arrival
/// time (ties broken by cell index) via reversed comparisons.
#[derive(Debug, Clone, Copy)]
struct PendingIgnition {
    arrival_time: f32,
    index: usize,
}

impl PartialEq for PendingIgnition {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PendingIgnition {}

impl PartialOrd for PendingIgnition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingIgnition {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .arrival_time
            .total_cmp(&self.arrival_time)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// The simulation context: grid of cells, clock, parameters, and the pending
/// ignition queue. All mutation of cell state happens here (plus the
/// caller-driven [`FireSimulation::ignite`]).
#[derive(Debug, Clone)]
pub struct FireSimulation {
    rows: usize,
    cols: usize,
    cell_size: f32,
    params: FireParameters,
    mode: SpreadMode,
    cells: Vec<Cell>,
    time: f32,
    tick: u64,
    pending: BinaryHeap<PendingIgnition>,
}

impl FireSimulation {
    /// Create a simulation over a terrain grid.
    ///
    /// Cells are parameterized from the terrain once, here; the grid is not
    /// referenced afterwards.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parameters`] when the fire parameters fail
    /// validation. (Terrain validation happens when the [`TerrainGrid`] is
    /// built; [`ConfigError::Terrain`] lets callers funnel both failures
    /// through one error type.)
    pub fn new(terrain: &TerrainGrid, params: FireParameters) -> Result<Self, ConfigError> {
        params.validate()?;

        let rows = terrain.rows();
        let cols = terrain.cols();
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                // sample() is infallible inside the grid's own bounds
                let sample = terrain.sample(row, col).unwrap_or_default();
                cells.push(Cell::new(sample));
            }
        }

        info!(rows, cols, "fire simulation created");

        Ok(FireSimulation {
            rows,
            cols,
            cell_size: terrain.cell_size(),
            params,
            mode: SpreadMode::ArrivalTime,
            cells,
            time: 0.0,
            tick: 0,
            pending: BinaryHeap::new(),
        })
    }

    /// Select the spread mode (builder-style).
    pub fn with_mode(mut self, mode: SpreadMode) -> Self {
        self.mode = mode;
        self
    }

    /// Ignite the cell at `(row, col)` at the current simulation time.
    ///
    /// Usable before the first tick to seed the fire and at any later tick as
    /// a mid-simulation intervention (lightning strike). Idempotent on an
    /// already-burning cell; a no-op on burned cells, incombustible cells,
    /// and out-of-bounds positions.
    pub fn ignite(&mut self, row: usize, col: usize) {
        if row >= self.rows || col >= self.cols {
            debug!(row, col, "ignition outside grid ignored");
            return;
        }
        let time = self.time;
        let cell = &mut self.cells[row * self.cols + col];
        if cell.state != CellState::Unburned || !cell.is_combustible() {
            return;
        }
        cell.state = CellState::Burning;
        cell.arrival_time = cell.arrival_time.min(time);
        cell.burn_time = Some(time);
        info!(row, col, time, "cell ignited");
    }

    /// Advance the simulation one tick.
    ///
    /// Runs the two-phase propagation algorithm: burning cells (snapshot at
    /// tick start) propose arrival times to unburned neighbors, due pending
    /// ignitions fire, and cells that have burned for a full tick burn out.
    pub fn step(&mut self) -> TickSummary {
        self.tick += 1;
        self.time += DT;

        let burning: Vec<usize> = (0..self.cells.len())
            .filter(|&i| self.cells[i].state == CellState::Burning)
            .collect();

        let ignited = match self.mode {
            SpreadMode::ArrivalTime => {
                self.propose_arrivals(&burning);
                self.promote_due_ignitions()
            }
            SpreadMode::Immediate => self.spread_immediate(&burning),
        };

        // Snapshot cells have now burned for a full tick
        let time = self.time;
        for &idx in &burning {
            let cell = &mut self.cells[idx];
            if cell.burn_time.is_some_and(|t| time > t) {
                cell.state = CellState::Burned;
            }
        }

        let counts = self.counts();
        let summary = TickSummary {
            tick: self.tick,
            time: self.time,
            unburned: counts.unburned,
            burning: counts.burning,
            burned: counts.burned,
            ignited,
        };
        debug!(
            tick = summary.tick,
            time = summary.time,
            unburned = summary.unburned,
            burning = summary.burning,
            burned = summary.burned,
            ignited = summary.ignited,
            "tick complete"
        );
        summary
    }

    /// Proposal pass: burning cells propose rate-of-spread arrival times to their
    /// unburned, fuel-bearing neighbors. Proposals are computed in parallel
    /// over the burning snapshot (read-only), min-merged per target, then
    /// applied; an improved arrival time is queued for promotion.
    fn propose_arrivals(&mut self, burning: &[usize]) {
        let rows = self.rows;
        let cols = self.cols;
        let cell_size = self.cell_size;
        let time = self.time;
        let params = self.params;
        let cells = &self.cells;

        let proposals: Vec<(usize, f32)> = burning
            .par_iter()
            .flat_map_iter(|&idx| {
                let row = idx / cols;
                let col = idx % cols;
                moore_neighbors(rows, cols, row, col).filter_map(move |(nr, nc)| {
                    let nidx = nr * cols + nc;
                    let target = &cells[nidx];
                    if target.state != CellState::Unburned || !target.is_combustible() {
                        return None;
                    }

                    let d_row = nr as i32 - row as i32;
                    let d_col = nc as i32 - col as i32;
                    let bearing = bearing_degrees(d_row, d_col);
                    let rate = directional_spread_rate(&target.terrain, bearing, &params);
                    if rate <= 0.0 {
                        return None;
                    }

                    let distance = neighbor_distance(d_row, d_col) * cell_size;
                    Some((nidx, time + distance / rate))
                })
            })
            .collect();

        // Min-aggregation: a cell ignites at the earliest proposed arrival
        let mut best: FxHashMap<usize, f32> = FxHashMap::default();
        for (idx, candidate) in proposals {
            best.entry(idx)
                .and_modify(|current| {
                    if candidate < *current {
                        *current = candidate;
                    }
                })
                .or_insert(candidate);
        }

        for (idx, candidate) in best {
            let cell = &mut self.cells[idx];
            if candidate < cell.arrival_time {
                cell.arrival_time = candidate;
                self.pending.push(PendingIgnition {
                    arrival_time: candidate,
                    index: idx,
                });
            }
        }
    }

    /// Pop due pending ignitions and promote them to burning.
    /// Entries whose arrival time was superseded (or whose cell already
    /// ignited) are stale and skipped.
    fn promote_due_ignitions(&mut self) -> usize {
        let mut ignited = 0;
        while self
            .pending
            .peek()
            .is_some_and(|p| p.arrival_time <= self.time)
        {
            let Some(pending) = self.pending.pop() else {
                break;
            };
            let cell = &mut self.cells[pending.index];
            if cell.state != CellState::Unburned || pending.arrival_time != cell.arrival_time {
                continue; // stale entry
            }
            cell.state = CellState::Burning;
            cell.burn_time = Some(self.time);
            ignited += 1;
        }
        ignited
    }

    /// Immediate-mode spread: every unburned fuel-bearing neighbor of a
    /// snapshot-burning cell ignites this tick.
    fn spread_immediate(&mut self, burning: &[usize]) -> usize {
        let mut to_ignite: Vec<usize> = Vec::new();
        for &idx in burning {
            let row = idx / self.cols;
            let col = idx % self.cols;
            for (nr, nc) in moore_neighbors(self.rows, self.cols, row, col) {
                let nidx = nr * self.cols + nc;
                let target = &self.cells[nidx];
                if target.state == CellState::Unburned && target.is_combustible() {
                    to_ignite.push(nidx);
                }
            }
        }
        to_ignite.sort_unstable();
        to_ignite.dedup();

        for idx in &to_ignite {
            let cell = &mut self.cells[*idx];
            cell.state = CellState::Burning;
            cell.arrival_time = cell.arrival_time.min(self.time);
            cell.burn_time = Some(self.time);
        }
        to_ignite.len()
    }

    /// Whether no further state change is possible: nothing is burning and
    /// no unburned cell holds a finite predicted arrival.
    pub fn is_quiescent(&self) -> bool {
        self.cells.iter().all(|cell| match cell.state {
            CellState::Burning => false,
            CellState::Unburned => cell.arrival_time.is_infinite(),
            CellState::Burned => true,
        })
    }

    /// Count cells in each state.
    pub fn counts(&self) -> StateCounts {
        let mut counts = StateCounts {
            unburned: 0,
            burning: 0,
            burned: 0,
        };
        for cell in &self.cells {
            match cell.state {
                CellState::Unburned => counts.unburned += 1,
                CellState::Burning => counts.burning += 1,
                CellState::Burned => counts.burned += 1,
            }
        }
        counts
    }

    /// Combustion state at `(row, col)`, or `None` outside the grid.
    pub fn state_at(&self, row: usize, col: usize) -> Option<CellState> {
        self.cell_at(row, col).map(|c| c.state)
    }

    /// Terrain attributes at `(row, col)`, or `None` outside the grid.
    pub fn sample_at(&self, row: usize, col: usize) -> Option<TerrainSample> {
        self.cell_at(row, col).map(|c| c.terrain)
    }

    /// Fuel value at `(row, col)`, or `None` outside the grid.
    pub fn fuel_at(&self, row: usize, col: usize) -> Option<f32> {
        self.cell_at(row, col).map(|c| c.terrain.fuel)
    }

    /// Predicted arrival time at `(row, col)` (infinity if no fire front is
    /// known to reach it), or `None` outside the grid.
    pub fn arrival_time_at(&self, row: usize, col: usize) -> Option<f32> {
        self.cell_at(row, col).map(|c| c.arrival_time)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Current simulation time.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Ticks elapsed.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TerrainGrid;
    use approx::assert_relative_eq;

    /// Uniform flat grid where fuel 0.2 gives a spread rate of 4/3 cell per
    /// tick: edge neighbors ignite two ticks after their source, diagonals
    /// three.
    fn uniform_sim(rows: usize, cols: usize) -> FireSimulation {
        let terrain = TerrainGrid::uniform(rows, cols, 0.2, 1.0).unwrap();
        FireSimulation::new(&terrain, FireParameters::default()).unwrap()
    }

    #[test]
    fn test_ignite_seeds_burning_state() {
        let mut sim = uniform_sim(3, 3);
        sim.ignite(1, 1);
        assert_eq!(sim.state_at(1, 1), Some(CellState::Burning));
        assert_relative_eq!(sim.arrival_time_at(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_ignite_is_idempotent() {
        let mut sim = uniform_sim(3, 3);
        sim.ignite(1, 1);
        let arrival = sim.arrival_time_at(1, 1).unwrap();
        sim.ignite(1, 1);
        assert_eq!(sim.state_at(1, 1), Some(CellState::Burning));
        assert_eq!(sim.arrival_time_at(1, 1).unwrap(), arrival);
    }

    #[test]
    fn test_ignite_out_of_bounds_is_noop() {
        let mut sim = uniform_sim(3, 3);
        sim.ignite(10, 10);
        assert_eq!(sim.counts().burning, 0);
    }

    #[test]
    fn test_ignite_incombustible_is_noop() {
        let terrain = TerrainGrid::uniform(3, 3, 0.0, 1.0).unwrap();
        let mut sim = FireSimulation::new(&terrain, FireParameters::default()).unwrap();
        sim.ignite(1, 1);
        assert_eq!(sim.state_at(1, 1), Some(CellState::Unburned));
    }

    #[test]
    fn test_ignite_burned_cell_is_noop() {
        let mut sim = uniform_sim(1, 1);
        sim.ignite(0, 0);
        sim.step();
        assert_eq!(sim.state_at(0, 0), Some(CellState::Burned));
        sim.ignite(0, 0);
        assert_eq!(sim.state_at(0, 0), Some(CellState::Burned));
    }

    #[test]
    fn test_burning_lasts_exactly_one_tick() {
        let mut sim = uniform_sim(3, 3);
        sim.ignite(1, 1);
        sim.step();
        assert_eq!(sim.state_at(1, 1), Some(CellState::Burned));
    }

    #[test]
    fn test_no_same_tick_cascade() {
        let mut sim = uniform_sim(1, 5);
        sim.ignite(0, 0);
        sim.step(); // tick 1: (0,1) receives an arrival proposal only
        assert_eq!(sim.state_at(0, 1), Some(CellState::Unburned));
        sim.step(); // tick 2: (0,1) ignites
        assert_eq!(sim.state_at(0, 1), Some(CellState::Burning));
        // (0,2) has no proposal yet: (0,1) only starts proposing next tick
        assert_eq!(sim.state_at(0, 2), Some(CellState::Unburned));
        assert!(sim.arrival_time_at(0, 2).unwrap().is_infinite());
    }

    #[test]
    fn test_diagonals_ignite_after_edge_neighbors() {
        let mut sim = uniform_sim(3, 3);
        sim.ignite(1, 1);

        sim.step(); // tick 1: proposals only
        sim.step(); // tick 2: edge neighbors ignite
        assert_eq!(sim.state_at(0, 1), Some(CellState::Burning));
        assert_eq!(sim.state_at(1, 0), Some(CellState::Burning));
        assert_eq!(sim.state_at(0, 0), Some(CellState::Unburned));

        sim.step(); // tick 3: diagonal neighbors ignite
        assert_eq!(sim.state_at(0, 0), Some(CellState::Burning));
        assert_eq!(sim.state_at(0, 1), Some(CellState::Burned));
    }

    #[test]
    fn test_full_burnout_of_3x3() {
        let mut sim = uniform_sim(3, 3);
        sim.ignite(1, 1);
        for _ in 0..6 {
            sim.step();
        }
        let counts = sim.counts();
        assert_eq!(counts.burned, 9, "all cells should burn out: {counts:?}");
        assert!(sim.is_quiescent());
    }

    #[test]
    fn test_arrival_times_monotonically_decrease() {
        let mut sim = uniform_sim(6, 6);
        sim.ignite(0, 0);
        let mut previous: Vec<f32> = (0..36).map(|_| f32::INFINITY).collect();
        for _ in 0..12 {
            sim.step();
            for row in 0..6 {
                for col in 0..6 {
                    let arrival = sim.arrival_time_at(row, col).unwrap();
                    let prev = &mut previous[row * 6 + col];
                    assert!(
                        arrival <= *prev,
                        "arrival time rose at ({row}, {col}): {prev} -> {arrival}"
                    );
                    *prev = arrival;
                }
            }
        }
    }

    #[test]
    fn test_burning_implies_arrival_reached() {
        let mut sim = uniform_sim(5, 5);
        sim.ignite(2, 2);
        for _ in 0..8 {
            sim.step();
            for row in 0..5 {
                for col in 0..5 {
                    if sim.state_at(row, col) == Some(CellState::Burning) {
                        assert!(sim.arrival_time_at(row, col).unwrap() <= sim.time());
                    }
                }
            }
        }
    }

    #[test]
    fn test_fuel_zero_cell_never_ignites() {
        let mut fuel = vec![0.2; 9];
        fuel[5] = 0.0; // (1, 2)
        let terrain = TerrainGrid::from_layers(
            3,
            3,
            vec![0.0; 9],
            vec![0.0; 9],
            vec![0.0; 9],
            fuel,
            vec![0.0; 9],
            1.0,
        )
        .unwrap();
        let mut sim = FireSimulation::new(&terrain, FireParameters::default()).unwrap();
        sim.ignite(1, 1);
        for _ in 0..20 {
            sim.step();
        }
        assert_eq!(sim.state_at(1, 2), Some(CellState::Unburned));
        assert!(sim.arrival_time_at(1, 2).unwrap().is_infinite());
        assert!(sim.is_quiescent());
    }

    #[test]
    fn test_later_closer_source_lowers_queued_arrival() {
        // Fast fuel (0.2) everywhere except a slow target at (1, 2) with
        // fuel 0.05 (rate 1/3). The diagonal source (0, 1) proposes first;
        // the adjacent source (1, 1) ignites one tick later but proposes a
        // strictly earlier arrival, superseding the queued entry.
        let mut fuel = vec![0.2; 6];
        fuel[5] = 0.05; // (1, 2)
        let terrain = TerrainGrid::from_layers(
            2,
            3,
            vec![0.0; 6],
            vec![0.0; 6],
            vec![0.0; 6],
            fuel,
            vec![0.0; 6],
            1.0,
        )
        .unwrap();
        let mut sim = FireSimulation::new(&terrain, FireParameters::default()).unwrap();
        sim.ignite(0, 0);

        sim.step(); // tick 1: (0,1)/(1,0) proposed at 1.75, (1,1) at ~2.06
        sim.step(); // tick 2: (0,1) and (1,0) ignite
        sim.step(); // tick 3: (0,1) proposes (1,2) diagonally: 3 + sqrt(2)*3
        let first = sim.arrival_time_at(1, 2).unwrap();
        assert_relative_eq!(first, 3.0 + std::f32::consts::SQRT_2 * 3.0, epsilon = 1e-3);

        sim.step(); // tick 4: (1,1) proposes (1,2) adjacently: 4 + 3
        let improved = sim.arrival_time_at(1, 2).unwrap();
        assert_relative_eq!(improved, 7.0, epsilon = 1e-3);
        assert!(improved < first);

        for _ in 0..4 {
            sim.step(); // through tick 8; stale 7.24 entry is skipped
        }
        assert_ne!(sim.state_at(1, 2), Some(CellState::Unburned));
        assert_relative_eq!(sim.arrival_time_at(1, 2).unwrap(), 7.0, epsilon = 1e-3);
    }

    #[test]
    fn test_wind_biases_front_downwind() {
        let terrain = TerrainGrid::uniform(5, 5, 0.2, 1.0).unwrap();
        let params = FireParameters {
            wind_speed: 5.0,
            wind_direction: 90.0, // blowing east
            ..FireParameters::default()
        };
        let mut sim = FireSimulation::new(&terrain, params).unwrap();
        sim.ignite(2, 2);
        sim.step();

        let east = sim.arrival_time_at(2, 3).unwrap();
        let west = sim.arrival_time_at(2, 1).unwrap();
        assert!(
            east < west,
            "downwind arrival ({east}) should precede upwind ({west})"
        );
        assert!(west.is_finite(), "upwind spread creeps, never stalls");
    }

    #[test]
    fn test_immediate_mode_ignites_all_neighbors_next_tick() {
        let mut sim = uniform_sim(3, 3).with_mode(SpreadMode::Immediate);
        sim.ignite(1, 1);

        let summary = sim.step();
        assert_eq!(summary.ignited, 8);
        for (row, col) in moore_neighbors(3, 3, 1, 1) {
            assert_eq!(sim.state_at(row, col), Some(CellState::Burning));
        }
        assert_eq!(sim.state_at(1, 1), Some(CellState::Burned));

        sim.step();
        assert_eq!(sim.counts().burned, 9);
        assert!(sim.is_quiescent());
    }

    #[test]
    fn test_immediate_mode_respects_fuel_zero() {
        let mut fuel = vec![0.2; 9];
        fuel[0] = 0.0;
        let terrain = TerrainGrid::from_layers(
            3,
            3,
            vec![0.0; 9],
            vec![0.0; 9],
            vec![0.0; 9],
            fuel,
            vec![0.0; 9],
            1.0,
        )
        .unwrap();
        let mut sim = FireSimulation::new(&terrain, FireParameters::default())
            .unwrap()
            .with_mode(SpreadMode::Immediate);
        sim.ignite(1, 1);
        for _ in 0..5 {
            sim.step();
        }
        assert_eq!(sim.state_at(0, 0), Some(CellState::Unburned));
    }

    #[test]
    fn test_tick_summary_accounting() {
        let mut sim = uniform_sim(3, 3);
        sim.ignite(1, 1);
        let summary = sim.step();
        assert_eq!(summary.tick, 1);
        assert_relative_eq!(summary.time, 1.0);
        assert_eq!(summary.unburned + summary.burning + summary.burned, 9);
        assert_eq!(summary.burned, 1);
        assert_eq!(summary.ignited, 0);
    }

    #[test]
    fn test_quiescence_detection() {
        let mut sim = uniform_sim(1, 2);
        assert!(sim.is_quiescent(), "unignited grid is quiescent");
        sim.ignite(0, 0);
        assert!(!sim.is_quiescent());
        for _ in 0..4 {
            sim.step();
        }
        assert!(sim.is_quiescent());
        assert_eq!(sim.counts().burned, 2);
    }

    #[test]
    fn test_invalid_parameters_rejected_at_construction() {
        let terrain = TerrainGrid::uniform(2, 2, 1.0, 1.0).unwrap();
        let params = FireParameters {
            fuel_density: 0.0,
            ..FireParameters::default()
        };
        let err = FireSimulation::new(&terrain, params).unwrap_err();
        assert!(matches!(err, ConfigError::Parameters(_)));
        assert!(err.to_string().contains("fuel particle density"));
    }

    #[test]
    fn test_queries_out_of_bounds_return_none() {
        let sim = uniform_sim(2, 2);
        assert!(sim.state_at(2, 0).is_none());
        assert!(sim.fuel_at(0, 9).is_none());
        assert!(sim.arrival_time_at(9, 9).is_none());
        assert!(sim.sample_at(2, 2).is_none());
    }
}
