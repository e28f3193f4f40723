use ccea::{
    evolution::{Challenge, CoevolutionOptions, CooperativeCoevolution},
    problems::{Minimize, ParameterFit, Rastrigin, Sphere},
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn options_for(bounds: (f64, f64), dimensions: usize, num_species: usize) -> CoevolutionOptions {
    CoevolutionOptions::builder()
        .dimensions(dimensions)
        .bounds(bounds.0, bounds.1)
        .num_species(num_species)
        .population_size(30)
        .generations(40)
        .log_interval(10)
        .seed(42)
        .build()
}

#[test]
fn test_sphere_converges_towards_origin() {
    init_logging();

    let mut ccea =
        CooperativeCoevolution::new(Minimize(Sphere), options_for(Sphere::bounds(), 12, 3))
            .unwrap();
    let best = ccea.run().unwrap();

    let history = ccea.best_fitness_history();
    assert_eq!(history.len(), 40);
    assert!(best.score > history[0]);
    assert!(best.score <= 0.0);
    assert_eq!(best.score, -Sphere.score(&best.solution));
}

#[test]
fn test_rastrigin_runs_with_random_collaborators() {
    init_logging();

    let mut options = options_for(Rastrigin::bounds(), 10, 2);
    options.set_collaboration_size(3);
    let mut ccea = CooperativeCoevolution::new(Minimize(Rastrigin), options).unwrap();
    let best = ccea.run().unwrap();

    assert_eq!(best.solution.len(), 10);
    assert!(best.score <= 0.0);
    assert!(ccea.best_fitness_history().iter().all(|f| f.is_finite()));
    // 40 generations of 2 species of 30, plus initial sweep and history.
    assert_eq!(ccea.evaluations(), 30 * 2 * 41 + 41);
}

#[test]
fn test_parameter_fit_reduces_error() {
    init_logging();

    let problem = ParameterFit::default();
    let mut ccea =
        CooperativeCoevolution::new(Minimize(problem), options_for(ParameterFit::bounds(), 8, 2))
            .unwrap();

    let initial_worst_case = -problem.score(&[0.0; 8]);
    let best = ccea.run().unwrap();

    assert!(best.score > initial_worst_case);
    assert_eq!(best.solution.len(), 8);
    assert!(best
        .solution
        .iter()
        .all(|g| (-10.0..=10.0).contains(g)));
}
