//! Basic example of using the Sudoku engine

use sudoku_core::{Grid, Position, SolveError, Solver};

fn main() {
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let grid = Grid::from_string(puzzle_string).expect("fixture is well-formed");

    println!("Puzzle:");
    println!("{}", grid);
    println!("Given cells: {}", grid.given_count());
    println!("Empty cells: {}", grid.empty_count());

    // Inspect the candidates of the first empty cell
    let pos = Position::new(0, 2);
    let digits: Vec<u8> = grid.available_digits(pos).iter().collect();
    println!("Candidates for row 1, column 3: {:?}\n", digits);

    // Solve it
    let solver = Solver::new();
    match solver.solve(&grid) {
        Ok(solution) => {
            println!("Solution:");
            println!("{}", solution);
            assert!(solution.is_valid_solution());
        }
        Err(SolveError::Unsolvable) => println!("No solution exists."),
        Err(e) => eprintln!("Solver error: {}", e),
    }

    // Live input feedback: would a 9 be legal in the top-left corner's row?
    let legal = grid.check_value(Position::new(0, 2), 9);
    println!("Placing 9 at row 1, column 3 is legal: {}", legal);
}
