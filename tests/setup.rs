use edmd::core::{SimAttrs, Simulation};
use edmd::error::{Error, Result};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn configured(npart: usize, pair_sep: f64, box_length: f64) -> Result<Simulation<3>> {
    let mut sim = Simulation::<3>::new()?;
    sim.set_particles(npart)?;
    sim.set_pair_separation(pair_sep)?;
    sim.set_box_length(box_length)?;
    sim.init_cell()?;
    Ok(sim)
}

/// The full staged setup from an empty simulation to a first step, with
/// attributes reflecting the derived geometry.
#[test]
fn staged_setup_produces_consistent_attrs() -> Result<()> {
    init_logging();
    let mut sim = Simulation::<3>::new()?;
    sim.set_particles(108)?;
    sim.set_pair_separation(0.5)?;
    sim.set_density(0.4)?;
    sim.init_cell()?;
    sim.seed(17);
    sim.lattice()?;
    sim.set_temperature(1.0)?;
    sim.init_event_list()?;
    sim.mdstep(0.1)?;

    let attrs = sim.attrs()?;
    assert_eq!(attrs.dimension, 3);
    assert_eq!(attrs.particles, 108);
    assert_eq!(attrs.pair_separation, 0.5);
    assert_eq!(attrs.density, 0.4);
    let volume = attrs.box_length.powi(3);
    assert!(
        (attrs.density * volume - 108.0).abs() < 1e-9,
        "density and box length disagree: rho={} L={}",
        attrs.density,
        attrs.box_length
    );
    assert_eq!(attrs.cells, 9);
    assert!((attrs.cell_length - attrs.box_length / 9.0).abs() < 1e-12);
    Ok(())
}

/// Setting the density derives the box length and vice versa.
#[test]
fn density_and_box_length_derive_each_other() -> Result<()> {
    let mut sim = Simulation::<3>::new()?;
    sim.set_particles(256)?;
    sim.set_pair_separation(0.5)?;
    sim.set_density(0.5)?;
    // 256 particles at density 0.5 fill a box of edge 8
    assert!((sim.box_length() - 8.0).abs() < 1e-9);
    sim.set_box_length(8.0)?;
    assert_eq!(sim.density(), 0.5);
    Ok(())
}

/// Every stage checks that its prerequisites have been configured.
#[test]
fn setup_stages_are_order_checked() -> Result<()> {
    let mut sim = Simulation::<3>::new()?;
    assert!(matches!(sim.set_density(0.5), Err(Error::Config(_))));
    assert!(matches!(sim.set_box_length(10.0), Err(Error::Config(_))));
    assert!(matches!(sim.set_temperature(1.0), Err(Error::Config(_))));
    assert!(matches!(sim.init_cell(), Err(Error::Config(_))));
    assert!(matches!(sim.lattice(), Err(Error::Config(_))));
    assert!(matches!(sim.init_event_list(), Err(Error::Config(_))));
    assert!(matches!(sim.mdstep(1.0), Err(Error::Config(_))));

    sim.set_particles(8)?;
    assert!(matches!(sim.init_cell(), Err(Error::Config(_))));
    sim.set_pair_separation(0.5)?;
    assert!(matches!(sim.init_cell(), Err(Error::Config(_))));
    sim.set_box_length(6.0)?;
    sim.init_cell()?;
    assert!(matches!(sim.init_event_list(), Err(Error::Config(_))));
    sim.lattice()?;
    assert!(matches!(sim.mdstep(1.0), Err(Error::Config(_))));
    sim.init_event_list()?;
    sim.mdstep(1.0)?;
    Ok(())
}

#[test]
fn invalid_parameters_are_rejected() -> Result<()> {
    let mut sim = Simulation::<3>::new()?;
    assert!(matches!(sim.set_particles(0), Err(Error::InvalidParam(_))));
    sim.set_particles(8)?;
    assert!(matches!(
        sim.set_pair_separation(0.0),
        Err(Error::InvalidParam(_))
    ));
    assert!(matches!(
        sim.set_pair_separation(-1.0),
        Err(Error::InvalidParam(_))
    ));
    assert!(matches!(
        sim.set_pair_separation(f64::NAN),
        Err(Error::InvalidParam(_))
    ));
    assert!(matches!(sim.set_density(-0.5), Err(Error::InvalidParam(_))));
    assert!(matches!(
        sim.set_box_length(f64::INFINITY),
        Err(Error::InvalidParam(_))
    ));
    assert!(matches!(
        sim.set_temperature(-1.0),
        Err(Error::InvalidParam(_))
    ));
    Ok(())
}

/// A box shorter than three pair separations cannot hold a cell grid.
#[test]
fn too_small_box_cannot_hold_a_cell_grid() -> Result<()> {
    init_logging();
    let mut sim = Simulation::<3>::new()?;
    sim.set_particles(4)?;
    sim.set_pair_separation(1.0)?;
    sim.set_box_length(2.5)?;
    let err = sim.init_cell().unwrap_err();
    assert!(
        err.to_string().contains("at least 3"),
        "unexpected error: {}",
        err
    );
    Ok(())
}

/// Lattice placement refuses configurations where neighboring lattice
/// sites would overlap.
#[test]
fn lattice_rejects_overlapping_spheres() -> Result<()> {
    let mut sim = Simulation::<3>::new()?;
    sim.set_particles(108)?;
    sim.set_pair_separation(3.0)?;
    sim.set_box_length(10.0)?;
    sim.init_cell()?;
    let err = sim.lattice().unwrap_err();
    assert!(
        err.to_string().contains("lattice distance"),
        "unexpected error: {}",
        err
    );
    Ok(())
}

#[test]
fn restore_rejects_non_finite_state() -> Result<()> {
    let mut sim = configured(2, 0.5, 6.0)?;
    let err = sim
        .restore(|r, _v| {
            r[0] = [f64::NAN, 0.0, 0.0];
            r[1] = [1.0, 1.0, 1.0];
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParam(_)));
    // the failed restore leaves no populated state behind
    assert!(sim.init_event_list().is_err());
    Ok(())
}

/// Identically seeded runs evolve bit for bit identically; a different
/// seed draws different velocities.
#[test]
fn seeded_runs_are_reproducible() -> Result<()> {
    let make = |seed: u64| -> Result<Simulation<3>> {
        let mut sim = configured(32, 0.5, 8.0)?;
        sim.seed(seed);
        sim.lattice()?;
        sim.set_temperature(1.0)?;
        sim.init_event_list()?;
        sim.mdstep(5.0)?;
        Ok(sim)
    };
    let a = make(42)?;
    let b = make(42)?;
    for (pa, pb) in a.state().iter().zip(b.state()) {
        assert_eq!(pa.r, pb.r);
        assert_eq!(pa.v, pb.v);
        assert_eq!(pa.count, pb.count);
    }
    let c = make(43)?;
    let same = a.state().iter().zip(c.state()).all(|(pa, pc)| pa.v == pc.v);
    assert!(!same, "different seeds produced identical velocities");
    Ok(())
}

#[test]
fn attrs_serialize_to_json_and_back() -> Result<()> {
    let sim = configured(32, 0.5, 8.0)?;
    let attrs = sim.attrs()?;
    let json = serde_json::to_string(&attrs).expect("attrs serialize");
    let back: SimAttrs = serde_json::from_str(&json).expect("attrs deserialize");
    assert_eq!(back, attrs);
    Ok(())
}
