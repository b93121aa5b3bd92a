//! Event-driven molecular dynamics of hard spheres in a periodic box,
//! with an optional Python extension module behind the `python` feature.

pub mod core;
pub mod error;

#[cfg(feature = "python")]
mod python {
    use crate::core::Simulation;
    use numpy::ndarray::Array2;
    use numpy::{IntoPyArray, PyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use pyo3::types::PyDict;

    fn py_err<E: ToString>(e: E) -> PyErr {
        PyValueError::new_err(e.to_string())
    }

    /// Python-facing wrapper around the three-dimensional simulation.
    ///
    /// The constructor runs the staged setup in one go: system
    /// definition, cell grid, lattice placement, optional Boltzmann
    /// velocities and the initial event list.
    #[pyclass]
    pub struct HardSpheres {
        sim: Simulation<3>,
    }

    #[pymethods]
    impl HardSpheres {
        /// Configure a hard sphere fluid.
        ///
        /// Parameters
        /// - particles: number of particles (int, > 0)
        /// - pair_separation: hard sphere contact distance (float, > 0)
        /// - density: particle density; derives the box length
        /// - box_length: periodic box edge length; derives the density
        /// - temperature: if given, draw Boltzmann velocities at this temperature
        /// - seed: RNG seed (int) for reproducibility; None for nondeterministic
        ///
        /// Exactly one of `density` and `box_length` must be given.
        /// Errors: raises ValueError on invalid parameters.
        #[new]
        #[pyo3(signature = (particles, pair_separation, density=None, box_length=None, temperature=None, seed=None))]
        fn new(
            particles: usize,
            pair_separation: f64,
            density: Option<f64>,
            box_length: Option<f64>,
            temperature: Option<f64>,
            seed: Option<u64>,
        ) -> PyResult<Self> {
            let mut sim = Simulation::<3>::new().map_err(py_err)?;
            sim.set_particles(particles).map_err(py_err)?;
            sim.set_pair_separation(pair_separation).map_err(py_err)?;
            match (density, box_length) {
                (Some(d), None) => sim.set_density(d).map_err(py_err)?,
                (None, Some(l)) => sim.set_box_length(l).map_err(py_err)?,
                _ => {
                    return Err(py_err(
                        "exactly one of density and box_length is required",
                    ))
                }
            }
            sim.init_cell().map_err(py_err)?;
            if let Some(s) = seed {
                sim.seed(s);
            }
            sim.lattice().map_err(py_err)?;
            if let Some(t) = temperature {
                sim.set_temperature(t).map_err(py_err)?;
            }
            sim.init_event_list().map_err(py_err)?;
            Ok(Self { sim })
        }

        /// Process all events up to the given sample time and sample the
        /// phase space state (releases the GIL during computation).
        fn mdstep(&mut self, py: Python<'_>, sample_time: f64) -> PyResult<()> {
            py.detach(|| self.sim.mdstep(sample_time)).map_err(py_err)
        }

        /// Periodically reduced positions as a NumPy array of shape (N, 3).
        fn get_positions<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
            let mut arr = Array2::<f64>::zeros((self.sim.num_particles(), 3));
            self.sim.sample(|r, _, _, _| {
                for (i, ri) in r.iter().enumerate() {
                    for (d, &x) in ri.iter().enumerate() {
                        arr[[i, d]] = x;
                    }
                }
            });
            Ok(arr.into_pyarray(py).unbind())
        }

        /// Periodically extended positions as a NumPy array of shape (N, 3).
        fn get_extended_positions<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
            let mut arr = Array2::<f64>::zeros((self.sim.num_particles(), 3));
            self.sim.sample(|_, r_ext, _, _| {
                for (i, ri) in r_ext.iter().enumerate() {
                    for (d, &x) in ri.iter().enumerate() {
                        arr[[i, d]] = x;
                    }
                }
            });
            Ok(arr.into_pyarray(py).unbind())
        }

        /// Velocities as a NumPy array of shape (N, 3).
        fn get_velocities<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
            let mut arr = Array2::<f64>::zeros((self.sim.num_particles(), 3));
            self.sim.sample(|_, _, v, _| {
                for (i, vi) in v.iter().enumerate() {
                    for (d, &x) in vi.iter().enumerate() {
                        arr[[i, d]] = x;
                    }
                }
            });
            Ok(arr.into_pyarray(py).unbind())
        }

        /// Virial per particle accumulated over the last mdstep.
        fn virial(&self) -> f64 {
            self.sim.virial()
        }

        /// Total kinetic energy at unit particle mass.
        fn kinetic_energy(&self) -> f64 {
            self.sim.kinetic_energy()
        }

        /// Number of particles.
        fn num_particles(&self) -> usize {
            self.sim.num_particles()
        }

        /// Static simulation attributes as a dict.
        fn attrs<'py>(&self, py: Python<'py>) -> PyResult<Py<PyDict>> {
            let attrs = self.sim.attrs().map_err(py_err)?;
            let out = PyDict::new(py);
            out.set_item("dimension", attrs.dimension)?;
            out.set_item("particles", attrs.particles)?;
            out.set_item("pair_separation", attrs.pair_separation)?;
            out.set_item("cells", attrs.cells)?;
            out.set_item("cell_length", attrs.cell_length)?;
            out.set_item("density", attrs.density)?;
            out.set_item("box_length", attrs.box_length)?;
            Ok(out.into())
        }

        /// Wall-clock counters since the last call, as
        /// (total, queue, sampling, steps) with times in seconds.
        fn times(&mut self) -> (f64, f64, f64, u64) {
            let t = self.sim.times();
            (
                t.total.as_secs_f64(),
                t.queue.as_secs_f64(),
                t.sampling.as_secs_f64(),
                t.steps,
            )
        }
    }

    /// The edmd Python module entry point.
    #[pymodule]
    fn edmd(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<HardSpheres>()?;
        Ok(())
    }
}
