use acorn_solver::propagators::BinaryNotEqualsPropagator;
use acorn_solver::results::ProblemSolution;
use acorn_solver::results::SatisfactionResult;
use acorn_solver::termination::Indefinite;
use acorn_solver::variables::TransformableVariable;
use acorn_solver::Solver;

fn main() {
    env_logger::init();

    let n = std::env::args()
        .nth(1)
        .expect("Please provide a value for 'n'")
        .parse::<u32>()
        .expect("'n' is not a valid unsigned integer");

    if n < 2 {
        println!("Please provide an 'n > 1'");
        return;
    }

    let mut solver = Solver::default();
    let variables = (0..n)
        .map(|_| solver.new_bounded_integer(0, n as i32 - 1))
        .collect::<Vec<_>>();

    // No two queens share a column, and no two queens share a diagonal.
    for i in 0..variables.len() {
        for j in (i + 1)..variables.len() {
            let _ = solver.add_propagator(BinaryNotEqualsPropagator::new(
                variables[i],
                variables[j],
            ));
            let _ = solver.add_propagator(BinaryNotEqualsPropagator::new(
                variables[i].offset(i as i32),
                variables[j].offset(j as i32),
            ));
            let _ = solver.add_propagator(BinaryNotEqualsPropagator::new(
                variables[i].offset(-(i as i32)),
                variables[j].offset(-(j as i32)),
            ));
        }
    }

    let mut brancher = solver.default_brancher();
    match solver.satisfy(&mut brancher, &mut Indefinite) {
        SatisfactionResult::Satisfiable(solution) => {
            let row_separator = format!("{}+", "+---".repeat(n as usize));

            for row in 0..n {
                println!("{row_separator}");

                let queen_col = solution.get_integer_value(variables[row as usize]) as u32;

                for col in 0..n {
                    let string = if queen_col == col { "| * " } else { "|   " };

                    print!("{string}");
                }

                println!("|");
            }

            println!("{row_separator}");
        }

        SatisfactionResult::Unsatisfiable => {
            println!("{n}-queens is unsatisfiable.");
        }

        SatisfactionResult::Unknown => {
            println!("Timeout.");
        }
    }
}
