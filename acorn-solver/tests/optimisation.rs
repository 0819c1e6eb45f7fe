use itertools::Itertools;

use acorn_solver::branching::branchers::IndependentVariableValueBrancher;
use acorn_solver::branching::value_selection::InDomainRandom;
use acorn_solver::branching::variable_selection::InputOrder;
use acorn_solver::options::RestartOptions;
use acorn_solver::options::SequenceGeneratorType;
use acorn_solver::options::SolverOptions;
use acorn_solver::propagators::BinaryNotEqualsPropagator;
use acorn_solver::propagators::LinearLessOrEqualPropagator;
use acorn_solver::results::OptimisationResult;
use acorn_solver::results::ProblemSolution;
use acorn_solver::termination::DecisionBudget;
use acorn_solver::termination::Indefinite;
use acorn_solver::variables::TransformableVariable;
use acorn_solver::Solver;

#[test]
fn the_final_bound_matches_the_exhaustively_computed_optimum() {
    let mut solver = Solver::default();
    let x = solver.new_bounded_integer(0, 5);
    let y = solver.new_bounded_integer(0, 5);
    let s = solver.new_bounded_integer(0, 20);

    // s = x + y, expressed through two opposing inequalities
    solver
        .add_propagator(LinearLessOrEqualPropagator::new(
            vec![x.scaled(1), y.scaled(1), s.scaled(-1)].into(),
            0,
        ))
        .expect("no root conflict");
    solver
        .add_propagator(LinearLessOrEqualPropagator::new(
            vec![s.scaled(1), x.scaled(-1), y.scaled(-1)].into(),
            0,
        ))
        .expect("no root conflict");

    // 2x + y <= 7
    solver
        .add_propagator(LinearLessOrEqualPropagator::new(
            vec![x.scaled(2), y.scaled(1)].into(),
            7,
        ))
        .expect("no root conflict");

    let expected_optimum = (0..=5)
        .cartesian_product(0..=5)
        .filter(|(x_value, y_value)| 2 * x_value + y_value <= 7)
        .map(|(x_value, y_value)| x_value + y_value)
        .max()
        .expect("the problem has solutions");

    let mut brancher = solver.default_brancher();
    match solver.maximise(&mut brancher, &mut Indefinite, s) {
        OptimisationResult::Optimal(solution) => {
            let x_value = solution.get_integer_value(x);
            let y_value = solution.get_integer_value(y);
            let s_value = solution.get_integer_value(s);

            assert_eq!(s_value, expected_optimum);
            assert_eq!(s_value, x_value + y_value);
            assert!(2 * x_value + y_value <= 7);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn minimisation_is_symmetric_to_maximisation() {
    let mut solver = Solver::default();
    let x = solver.new_bounded_integer(1, 10);

    // -x <= -3, i.e. x >= 3
    solver
        .add_propagator(LinearLessOrEqualPropagator::new(vec![x.scaled(-1)].into(), -3))
        .expect("no root conflict");

    let mut brancher = solver.default_brancher();
    match solver.minimise(&mut brancher, &mut Indefinite, x) {
        OptimisationResult::Optimal(solution) => {
            assert_eq!(solution.get_integer_value(x), 3);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn an_unsatisfiable_problem_reports_unsatisfiable() {
    let mut solver = Solver::default();
    let variables = (0..3)
        .map(|_| solver.new_bounded_integer(0, 1))
        .collect::<Vec<_>>();

    for i in 0..variables.len() {
        for j in (i + 1)..variables.len() {
            solver
                .add_propagator(BinaryNotEqualsPropagator::new(variables[i], variables[j]))
                .expect("no root conflict");
        }
    }

    let mut brancher = solver.default_brancher();
    let result = solver.maximise(&mut brancher, &mut Indefinite, variables[0]);
    assert!(matches!(result, OptimisationResult::Unsatisfiable));
}

#[test]
fn an_exhausted_budget_reports_unknown() {
    let mut solver = Solver::default();
    let x = solver.new_bounded_integer(0, 10);

    let mut brancher = solver.default_brancher();
    let result = solver.maximise(&mut brancher, &mut DecisionBudget::new(0), x);
    assert!(matches!(result, OptimisationResult::Unknown));
}

#[test]
fn branch_and_bound_converges_with_restarts_and_random_values() {
    let mut solver = Solver::with_options(SolverOptions {
        restart_options: Some(RestartOptions {
            sequence_generator_type: SequenceGeneratorType::Luby,
            base_interval: 1,
            min_num_conflicts_before_first_restart: 1,
            geometric_coef: 1.1,
        }),
        ..Default::default()
    });
    let x = solver.new_bounded_integer(0, 5);

    let mut brancher =
        IndependentVariableValueBrancher::new(InputOrder::new(&[x]), InDomainRandom);
    match solver.maximise(&mut brancher, &mut Indefinite, x) {
        OptimisationResult::Optimal(solution) => {
            assert_eq!(solution.get_integer_value(x), 5);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn every_incumbent_is_reported_through_the_solution_callback() {
    let mut solver = Solver::default();
    let x = solver.new_bounded_integer(0, 3);

    let incumbents = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let recorded = std::rc::Rc::clone(&incumbents);
    solver.with_solution_callback(move |solution| {
        recorded.borrow_mut().push(solution.get_integer_value(x));
    });

    let mut brancher = solver.default_brancher();
    let result = solver.maximise(&mut brancher, &mut Indefinite, x);
    assert!(matches!(result, OptimisationResult::Optimal(_)));

    // in-domain-min branching improves the incumbent one value at a time
    assert_eq!(*incumbents.borrow(), vec![0, 1, 2, 3]);
}
