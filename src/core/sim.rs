use crate::core::event::{Event, EventKind, QueueItem};
use crate::core::grid::CellGrid;
use crate::core::particle::Particle;
use crate::error::{Error, Result};
use log::{info, warn};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Static description of a configured simulation, suitable for storing
/// alongside trajectory output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimAttrs {
    /// Positional coordinate dimension.
    pub dimension: usize,
    /// Number of particles.
    pub particles: usize,
    /// Hard sphere contact distance.
    pub pair_separation: f64,
    /// Cells per axis.
    pub cells: u32,
    /// Cell edge length.
    pub cell_length: f64,
    /// Particle density.
    pub density: f64,
    /// Periodic box edge length.
    pub box_length: f64,
}

/// Wall-clock accounting of [`Simulation::mdstep`] calls, split into
/// event queue processing and phase space sampling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerfCounters {
    /// Total time spent in `mdstep`.
    pub total: Duration,
    /// Time spent processing the event queue.
    pub queue: Duration,
    /// Time spent extrapolating the phase space sample.
    pub sampling: Duration,
    /// Number of `mdstep` calls.
    pub steps: u64,
}

/// Event-driven hard sphere simulation in a periodic box of dimension
/// `D` (2 or 3).
///
/// Between events particles move in free flight; each particle's state
/// is stored at the time of its own most recent event and advanced
/// lazily. The next event of every particle lives in `event_list`, and
/// an entry per scheduled event sits in the time-ordered `event_queue`.
/// Rescheduling never removes queue entries; outdated ones are
/// recognized at pop time because their time no longer matches the
/// particle's pending event.
///
/// Setup is staged: `set_particles`, `set_pair_separation` and one of
/// `set_density`/`set_box_length` define the system, `init_cell` builds
/// the cell grid, `lattice`/`restore` and `set_temperature` populate
/// the phase space state, and `init_event_list` arms the scheduler.
#[derive(Debug)]
pub struct Simulation<const D: usize> {
    /// Number of particles.
    npart: usize,
    /// Hard sphere contact distance.
    pair_sep: f64,
    /// Squared contact distance.
    pair_sep_sq: f64,
    /// Particle density.
    density: f64,
    /// Periodic box edge length.
    box_length: f64,
    /// Cell grid for the collision partner search.
    grid: CellGrid<D>,
    /// Particle states, each at the time of its last event.
    part: Vec<Particle<D>>,
    /// Pending event per particle.
    event_list: Vec<Event<D>>,
    /// Time-ordered queue over pending events.
    event_queue: BinaryHeap<Reverse<QueueItem>>,
    /// Whether positions have been assigned to the particles.
    populated: bool,
    /// Periodically reduced positions at the sample time.
    r_sample: Vec<[f64; D]>,
    /// Periodically extended positions at the sample time.
    r_ext_sample: Vec<[f64; D]>,
    /// Velocities at the sample time.
    v_sample: Vec<[f64; D]>,
    /// Virial accumulated over the last `mdstep`, per particle.
    virial: f64,
    /// Time of the last phase space sample.
    sample_time: f64,
    rng: StdRng,
    perf: PerfCounters,
}

impl<const D: usize> Simulation<D> {
    /// Create an unconfigured simulation. Only dimensions 2 and 3 are
    /// supported.
    pub fn new() -> Result<Self> {
        if D != 2 && D != 3 {
            return Err(Error::Config("dimension must be 2 or 3".into()));
        }
        info!("positional coordinates dimension: {}", D);
        Ok(Self {
            npart: 0,
            pair_sep: 0.0,
            pair_sep_sq: 0.0,
            density: 0.0,
            box_length: 0.0,
            grid: CellGrid::empty(),
            part: Vec::new(),
            event_list: Vec::new(),
            event_queue: BinaryHeap::new(),
            populated: false,
            r_sample: Vec::new(),
            r_ext_sample: Vec::new(),
            v_sample: Vec::new(),
            virial: 0.0,
            sample_time: 0.0,
            rng: SeedableRng::seed_from_u64(rng().random()),
            perf: PerfCounters::default(),
        })
    }

    /// Set the number of particles and allocate the particle states and
    /// sample buffers. Invalidates the cell grid and the event list.
    pub fn set_particles(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidParam(
                "number of particles must be non-zero".into(),
            ));
        }
        self.part.clear();
        self.part
            .try_reserve_exact(n)
            .map_err(|e| Error::Alloc(format!("failed to allocate particle states: {}", e)))?;
        self.part.resize(n, Particle::zeroed());
        for buf in [
            &mut self.r_sample,
            &mut self.r_ext_sample,
            &mut self.v_sample,
        ] {
            buf.clear();
            buf.try_reserve_exact(n)
                .map_err(|e| Error::Alloc(format!("failed to allocate phase space sample: {}", e)))?;
            buf.resize(n, [0.0; D]);
        }
        self.npart = n;
        self.invalidate_setup();
        info!("number of particles: {}", n);
        Ok(())
    }

    /// Set the hard sphere contact distance. Invalidates the cell grid
    /// and the event list.
    pub fn set_pair_separation(&mut self, sigma: f64) -> Result<()> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::InvalidParam(
                "pair separation must be greater than zero".into(),
            ));
        }
        self.pair_sep = sigma;
        self.pair_sep_sq = sigma * sigma;
        self.invalidate_setup();
        info!("pair separation: {}", sigma);
        Ok(())
    }

    /// Set the particle density and derive the periodic box length.
    /// Requires the number of particles.
    pub fn set_density(&mut self, density: f64) -> Result<()> {
        self.require_particles()?;
        if !density.is_finite() || density <= 0.0 {
            return Err(Error::InvalidParam(
                "particle density must be greater than zero".into(),
            ));
        }
        self.density = density;
        self.box_length = (self.npart as f64 / density).powf(1.0 / D as f64);
        self.invalidate_setup();
        info!("particle density: {}", density);
        info!("periodic box length: {}", self.box_length);
        Ok(())
    }

    /// Set the periodic box length and derive the particle density.
    /// Requires the number of particles.
    pub fn set_box_length(&mut self, length: f64) -> Result<()> {
        self.require_particles()?;
        if !length.is_finite() || length <= 0.0 {
            return Err(Error::InvalidParam(
                "periodic box length must be greater than zero".into(),
            ));
        }
        self.box_length = length;
        self.density = self.npart as f64 / length.powi(D as i32);
        self.invalidate_setup();
        info!("periodic box length: {}", length);
        info!("particle density: {}", self.density);
        Ok(())
    }

    /// Build the cell grid from the configured system. Any previously
    /// assigned phase space state must be populated again afterwards.
    pub fn init_cell(&mut self) -> Result<()> {
        self.require_particles()?;
        if self.pair_sep <= 0.0 {
            return Err(Error::Config("pair separation not set".into()));
        }
        if self.box_length <= 0.0 {
            return Err(Error::Config("periodic box length not set".into()));
        }
        self.grid = CellGrid::new(self.npart, self.box_length, self.pair_sep)?;
        self.populated = false;
        self.event_list.clear();
        self.event_queue.clear();
        info!("cells per dimension: {}", self.grid.ncell());
        info!("cell length: {}", self.grid.cell_length());
        Ok(())
    }

    /// Seed the random number generator for reproducible velocity
    /// initialization.
    pub fn seed(&mut self, seed: u64) {
        info!("random number generator seed: {}", seed);
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Restore positions and velocities from a phase space sample. The
    /// visitor fills the position and velocity buffers; positions are
    /// reduced into the periodic box afterwards and particle clocks are
    /// reset to zero.
    pub fn restore<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut [[f64; D]], &mut [[f64; D]]),
    {
        self.require_cells()?;
        info!("restoring system state from phase space sample");
        f(&mut self.r_sample, &mut self.v_sample);
        for n in 0..self.npart {
            for d in 0..D {
                if !self.r_sample[n][d].is_finite() || !self.v_sample[n][d].is_finite() {
                    return Err(Error::InvalidParam(
                        "phase space sample contains non-finite values".into(),
                    ));
                }
            }
        }
        for n in 0..self.npart {
            let mut r = [0.0; D];
            for d in 0..D {
                r[d] = wrap_centered(self.r_sample[n][d], self.box_length);
            }
            let p = &mut self.part[n];
            p.r = r;
            p.r_ext = r;
            p.v = self.v_sample[n];
            p.t = 0.0;
            p.count = 0;
        }
        self.rebuild_cells();
        Ok(())
    }

    /// Place the particles on a face-centered cubic lattice (or its
    /// two-site planar analogue), chosen as the closest packing of
    /// spheres. Velocities are left untouched.
    pub fn lattice(&mut self) -> Result<()> {
        self.require_cells()?;
        if D == 3 {
            info!("placing particles on fcc lattice");
        } else {
            info!("placing particles on square lattice");
        }
        // lattice sites per unit cell
        let m = 2 * (D - 1);
        // smallest side length accommodating all particles
        let mut n = (self.npart as f64 / m as f64).powf(1.0 / D as f64) as u32;
        if m * (n as usize).pow(D as u32) < self.npart {
            n += 1;
        }
        let sites = m * (n as usize).pow(D as u32);
        if sites > self.npart {
            warn!("lattice not fully occupied ({} sites)", sites);
        }

        let a = self.box_length / f64::from(n);
        // nearest neighbor distance within the unit cell
        let dist = a / 2.0_f64.sqrt();
        info!("minimum lattice distance: {}", dist);
        if dist < self.pair_sep {
            return Err(Error::Config(
                "minimum lattice distance smaller than pair separation".into(),
            ));
        }

        let half = 0.5 * self.box_length;
        for i in 0..self.npart {
            let k = i as u32;
            let mut r = [0.0; D];
            if D == 3 {
                // compose primitive vectors from the one-dimensional index
                r[0] = a * (f64::from((k >> 2) % n) + 0.5 * f64::from((k ^ (k >> 1)) & 1)) - half;
                r[1] = a * (f64::from((k >> 2) / n % n) + 0.5 * f64::from(k & 1)) - half;
                r[2] = a * (f64::from((k >> 2) / n / n) + 0.5 * f64::from((k >> 1) & 1)) - half;
            } else {
                r[0] = a * (f64::from((k >> 1) % n) + 0.5 * f64::from(k & 1)) - half;
                r[1] = a * (f64::from((k >> 1) / n) + 0.5 * f64::from(k & 1)) - half;
            }
            let p = &mut self.part[i];
            p.r = r;
            p.r_ext = r;
            p.t = 0.0;
            p.count = 0;
        }
        self.rebuild_cells();
        Ok(())
    }

    /// Draw velocities from a Maxwell-Boltzmann distribution at the
    /// given temperature and subtract the center of mass velocity.
    /// Invalidates the event list.
    pub fn set_temperature(&mut self, temp: f64) -> Result<()> {
        self.require_particles()?;
        if !temp.is_finite() || temp <= 0.0 {
            return Err(Error::InvalidParam(
                "temperature must be greater than zero".into(),
            ));
        }
        info!(
            "initializing velocities from Boltzmann distribution at temperature: {}",
            temp
        );
        let dist = Normal::new(0.0, temp.sqrt())
            .map_err(|e| Error::InvalidParam(format!("invalid temperature: {}", e)))?;
        let mut v_cm = [0.0; D];
        for p in &mut self.part {
            for d in 0..D {
                p.v[d] = dist.sample(&mut self.rng);
                v_cm[d] += p.v[d];
            }
        }
        for x in &mut v_cm {
            *x /= self.npart as f64;
        }
        // set center of mass velocity to zero
        for (p, v) in self.part.iter_mut().zip(&mut self.v_sample) {
            for d in 0..D {
                p.v[d] -= v_cm[d];
            }
            *v = p.v;
        }
        self.event_list.clear();
        self.event_queue.clear();
        Ok(())
    }

    /// Predict the initial event of every particle and fill the event
    /// queue. Requires a populated phase space state.
    pub fn init_event_list(&mut self) -> Result<()> {
        self.require_populated()?;
        self.event_list.clear();
        self.event_list
            .try_reserve_exact(self.npart)
            .map_err(|e| Error::Alloc(format!("failed to allocate event list: {}", e)))?;
        for n in 0..self.npart {
            self.event_list.push(Event::unscheduled(self.part[n].cell));
        }
        self.event_queue.clear();
        for n in 0..self.npart {
            self.schedule_event(n)?;
        }
        Ok(())
    }

    /// Process all events up to `sample_time` and sample the phase
    /// space state at that time.
    ///
    /// The sample time may coincide with the previous one but must not
    /// precede it.
    pub fn mdstep(&mut self, sample_time: f64) -> Result<()> {
        if !sample_time.is_finite() {
            return Err(Error::InvalidParam("sample time must be finite".into()));
        }
        if sample_time < self.sample_time {
            return Err(Error::InvalidParam(
                "sample time must not precede the current sample time".into(),
            ));
        }
        if self.event_list.is_empty() {
            return Err(Error::Config("event list not initialized".into()));
        }

        let start = Instant::now();
        self.virial = 0.0;

        while let Some(&Reverse(item)) = self.event_queue.peek() {
            if item.time() > sample_time {
                break;
            }
            self.event_queue.pop();
            let n = item.n as usize;
            // a superseded entry no longer matches the pending event time
            if item.time() != self.event_list[n].t {
                continue;
            }
            match self.event_list[n].kind {
                EventKind::Collision { n2, count2 } => {
                    self.process_collision(n, n2 as usize, count2)?;
                }
                EventKind::Cell { cell2 } => {
                    self.process_cell_crossing(n, cell2)?;
                }
            }
        }
        let queued = Instant::now();

        self.virial /= self.npart as f64;

        // sample phase space by extrapolating each particle's free flight
        for n in 0..self.npart {
            let p = self.part[n];
            let dt = sample_time - p.t;
            for d in 0..D {
                self.r_sample[n][d] = wrap_centered(p.r[d] + p.v[d] * dt, self.box_length);
                self.r_ext_sample[n][d] = p.r_ext[d] + p.v[d] * dt;
            }
            self.v_sample[n] = p.v;
        }
        self.sample_time = sample_time;
        let sampled = Instant::now();

        self.perf.queue += queued - start;
        self.perf.sampling += sampled - queued;
        self.perf.total += (queued - start) + (sampled - queued);
        self.perf.steps += 1;
        Ok(())
    }

    /// Visit the phase space sample of the last `mdstep`: reduced
    /// positions, extended positions, velocities and the virial per
    /// particle.
    pub fn sample<F>(&self, f: F)
    where
        F: FnOnce(&[[f64; D]], &[[f64; D]], &[[f64; D]], f64),
    {
        f(&self.r_sample, &self.r_ext_sample, &self.v_sample, self.virial);
    }

    /// Return the accumulated performance counters and reset them.
    pub fn times(&mut self) -> PerfCounters {
        std::mem::take(&mut self.perf)
    }

    /// Describe the configured simulation. Requires the cell grid.
    pub fn attrs(&self) -> Result<SimAttrs> {
        self.require_cells()?;
        Ok(SimAttrs {
            dimension: D,
            particles: self.npart,
            pair_separation: self.pair_sep,
            cells: self.grid.ncell(),
            cell_length: self.grid.cell_length(),
            density: self.density,
            box_length: self.box_length,
        })
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.npart
    }

    /// Hard sphere contact distance.
    pub fn pair_separation(&self) -> f64 {
        self.pair_sep
    }

    /// Particle density.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Periodic box edge length.
    pub fn box_length(&self) -> f64 {
        self.box_length
    }

    /// Cells per axis, or zero before `init_cell`.
    pub fn cells(&self) -> u32 {
        self.grid.ncell()
    }

    /// Cell edge length.
    pub fn cell_length(&self) -> f64 {
        self.grid.cell_length()
    }

    /// Virial per particle accumulated over the last `mdstep`.
    pub fn virial(&self) -> f64 {
        self.virial
    }

    /// Time of the last phase space sample.
    pub fn time(&self) -> f64 {
        self.sample_time
    }

    /// Total kinetic energy at unit particle mass.
    pub fn kinetic_energy(&self) -> f64 {
        self.part.iter().map(Particle::kinetic_energy).sum()
    }

    /// Total momentum at unit particle mass.
    pub fn momentum(&self) -> [f64; D] {
        let mut p = [0.0; D];
        for part in &self.part {
            for d in 0..D {
                p[d] += part.v[d];
            }
        }
        p
    }

    /// Particle states at the times of their respective last events.
    pub fn state(&self) -> &[Particle<D>] {
        &self.part
    }

    /// The cell grid.
    pub fn grid(&self) -> &CellGrid<D> {
        &self.grid
    }

    fn require_particles(&self) -> Result<()> {
        if self.npart == 0 {
            return Err(Error::Config("number of particles not set".into()));
        }
        Ok(())
    }

    fn require_cells(&self) -> Result<()> {
        if !self.grid.is_ready() {
            return Err(Error::Config("cells not initialized".into()));
        }
        Ok(())
    }

    fn require_populated(&self) -> Result<()> {
        if !self.populated {
            return Err(Error::Config("system state not initialized".into()));
        }
        Ok(())
    }

    /// Geometry changed: drop the cell grid and everything built on it.
    fn invalidate_setup(&mut self) {
        self.grid = CellGrid::empty();
        self.populated = false;
        self.event_list.clear();
        self.event_queue.clear();
    }

    /// Rebuild cell membership and the sample buffers from the particle
    /// states and reset the event machinery to a fresh start of time.
    fn rebuild_cells(&mut self) {
        self.grid.clear_members();
        for n in 0..self.npart {
            let cell = self.grid.compute_cell(&self.part[n].r);
            self.part[n].cell = cell;
            self.grid.insert(cell, n as u32);
            self.r_sample[n] = self.part[n].r;
            self.r_ext_sample[n] = self.part[n].r_ext;
            self.v_sample[n] = self.part[n].v;
        }
        self.sample_time = 0.0;
        self.virial = 0.0;
        self.event_list.clear();
        self.event_queue.clear();
        self.populated = true;
    }

    /// Predict the next event of particle `n` and push it onto the
    /// queue. The earlier of the cell boundary crossing and the first
    /// collision within the adjacent cells wins.
    fn schedule_event(&mut self, n: usize) -> Result<()> {
        self.event_list[n] = Event::unscheduled(self.part[n].cell);
        self.compute_cell_event(n);
        let cell = self.part[n].cell;
        self.compute_collision_event(n, cell);
        for k in 0..self.grid.neighbor_count() {
            let offset = self.grid.neighbor_offset(k);
            let cell2 = self.grid.wrap_neighbor(cell, offset);
            self.compute_collision_event(n, cell2);
        }
        let item = QueueItem::new(self.event_list[n].t, n as u32)?;
        self.event_queue.push(Reverse(item));
        Ok(())
    }

    /// Predict when particle `n` crosses a boundary of its cell, and
    /// make that the pending event if it precedes the current one.
    fn compute_cell_event(&mut self, n: usize) {
        let p = self.part[n];
        let len = self.grid.cell_length();
        let half = 0.5 * self.box_length;
        let mut dt3 = [f64::MAX; D];
        let mut dt = f64::MAX;
        for d in 0..D {
            if p.v[d] < 0.0 {
                dt3[d] = (f64::from(p.cell[d]) * len - half - p.r[d]) / p.v[d];
            } else if p.v[d] > 0.0 {
                dt3[d] = (f64::from(p.cell[d] + 1) * len - half - p.r[d]) / p.v[d];
            }
            dt = dt.min(dt3[d]);
        }
        if dt < self.event_list[n].t - p.t {
            let ncell = self.grid.ncell();
            let mut cell2 = p.cell;
            for d in 0..D {
                // axes reaching their boundary at the same instant advance together
                if dt3[d] == dt {
                    cell2[d] = if p.v[d] < 0.0 {
                        (p.cell[d] + ncell - 1) % ncell
                    } else {
                        (p.cell[d] + 1) % ncell
                    };
                }
            }
            self.event_list[n] = Event {
                t: p.t + dt,
                kind: EventKind::Cell { cell2 },
            };
        }
    }

    /// Predict the first collision of particle `n` with any particle in
    /// `cell`, and make it the pending event if it precedes the current
    /// one. Partners are extrapolated to particle `n`'s time.
    fn compute_collision_event(&mut self, n: usize, cell: [u32; D]) {
        let pn = self.part[n];
        let mut dt = f64::MAX;
        let mut partner = None;

        for &j in self.grid.members(cell) {
            if j as usize == n {
                continue;
            }
            let pj = self.part[j as usize];
            let lag = pn.t - pj.t;
            let mut dr = [0.0; D];
            let mut dv = [0.0; D];
            for d in 0..D {
                let x = pj.r[d] + pj.v[d] * lag - pn.r[d];
                dr[d] = min_image(x, self.box_length);
                dv[d] = pj.v[d] - pn.v[d];
            }
            let drdv = dot(&dr, &dv);
            if drdv >= 0.0 {
                // not approaching
                continue;
            }
            let dvdv = dot(&dv, &dv);
            let rad = drdv * drdv - dvdv * (dot(&dr, &dr) - self.pair_sep_sq);
            if rad < 0.0 {
                // contact distance is never reached
                continue;
            }
            let dt2 = (-drdv - rad.sqrt()) / dvdv;
            if dt2 < 0.0 {
                continue;
            }
            if dt2 < dt {
                dt = dt2;
                partner = Some(j);
            }
        }

        if let Some(n2) = partner {
            if dt < self.event_list[n].t - pn.t {
                self.event_list[n] = Event {
                    t: pn.t + dt,
                    kind: EventKind::Collision {
                        n2,
                        count2: self.part[n2 as usize].count,
                    },
                };
            }
        }
    }

    /// Process a collision between particles `n1` and `n2`. If the
    /// partner has collided since the event was predicted, only `n1` is
    /// rescheduled.
    fn process_collision(&mut self, n1: usize, n2: usize, count2: u64) -> Result<()> {
        let t = self.event_list[n1].t;
        self.part[n1].advance(t);

        if self.part[n2].count != count2 {
            return self.schedule_event(n1);
        }
        self.part[n2].advance(t);

        let mut dr = [0.0; D];
        let mut dv = [0.0; D];
        for d in 0..D {
            dr[d] = min_image(self.part[n2].r[d] - self.part[n1].r[d], self.box_length);
            dv[d] = self.part[n1].v[d] - self.part[n2].v[d];
        }
        // exchange the velocity component along the line of centers
        let scale = dot(&dr, &dv) / dot(&dr, &dr);
        for d in 0..D {
            let dvc = dr[d] * scale;
            self.part[n1].v[d] -= dvc;
            self.part[n2].v[d] += dvc;
            self.virial += dr[d] * dvc;
        }

        self.part[n1].bump_count();
        self.part[n2].bump_count();

        self.schedule_event(n1)?;
        self.schedule_event(n2)
    }

    /// Move particle `n` into the adjacent cell `cell2`, wrapping the
    /// reduced position when a box face is crossed.
    fn process_cell_crossing(&mut self, n: usize, cell2: [u32; D]) -> Result<()> {
        let t = self.event_list[n].t;
        self.part[n].advance(t);

        let old = self.part[n].cell;
        let ncell = self.grid.ncell();
        for d in 0..D {
            if old[d] == ncell - 1 && cell2[d] == 0 {
                self.part[n].r[d] -= self.box_length;
            } else if old[d] == 0 && cell2[d] == ncell - 1 {
                self.part[n].r[d] += self.box_length;
            }
        }
        self.grid.remove(old, n as u32);
        self.grid.insert(cell2, n as u32);
        self.part[n].cell = cell2;
        self.schedule_event(n)
    }
}

#[inline]
fn dot<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Nearest image separation for one coordinate.
#[inline]
fn min_image(x: f64, l: f64) -> f64 {
    x - (x / l).round() * l
}

/// Reduce one coordinate into the centered box `[-l/2, l/2)`.
#[inline]
fn wrap_centered(x: f64, l: f64) -> f64 {
    x - (x / l + 0.5).floor() * l
}
