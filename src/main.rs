use docopt::Docopt;
use error_chain::bail;
use log::info;
use maze_runner::{
    maze::Maze,
    units::{ColumnsCount, RowsCount},
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Maze Runner

Usage:
    maze_runner -h | --help
    maze_runner [--rows=<n>] [--columns=<n>] [--seed=<n>] [--solve | --no-solve] [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --rows=<n>             Number of rows in the maze grid. Asked for when not given.
    --columns=<n>          Number of columns in the maze grid. Asked for when not given.
    --seed=<n>             Seed for the random number generator, for a reproducible maze.
    --solve                Show the solution without asking.
    --no-solve             Never show the solution and do not ask.
    --text-out=<path>      Also write the final maze text to this file.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: Option<usize>,
    flag_columns: Option<usize>,
    flag_seed: Option<u64>,
    flag_solve: bool,
    flag_no_solve: bool,
    flag_text_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            NotANumber(::std::num::ParseIntError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to the maze runner.");
    let columns = match args.flag_columns {
        Some(columns) => columns,
        None => prompt_count(&mut input, "How many columns? ")?,
    };
    let rows = match args.flag_rows {
        Some(rows) => rows,
        None => prompt_count(&mut input, "How many rows? ")?,
    };

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Generating a {}x{} maze with seed {}", rows, columns, seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let mut maze = Maze::new(RowsCount(rows), ColumnsCount(columns), &mut rng)
        .chain_err(|| format!("Cannot build a maze with {} rows and {} columns", rows, columns))?;

    println!("{}x{} Maze", rows, columns);
    print!("{}", maze);

    let show_solution = if args.flag_solve {
        true
    } else if args.flag_no_solve {
        false
    } else {
        prompt_yes(&mut input, "Would you like to see the solution (y/n)? ")?
    };

    if show_solution {
        if let Some(path) = maze.solve() {
            info!("Solution passes through {} cells", path.len());
            println!("{}x{} Maze Solution", rows, columns);
            print!("{}", maze);
        } else {
            println!("No solution found.");
        }
    }

    if !args.flag_text_out.is_empty() {
        write_text_to_file(&format!("{}", maze), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    println!("Thank you for using Maze Runner!");

    Ok(())
}

fn prompt<B: BufRead>(input: &mut B, question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        bail!("Input ended before answering: {}", question.trim());
    }
    Ok(answer.trim().to_owned())
}

fn prompt_count<B: BufRead>(input: &mut B, question: &str) -> Result<usize> {
    let answer = prompt(input, question)?;
    Ok(answer.parse::<usize>()?)
}

fn prompt_yes<B: BufRead>(input: &mut B, question: &str) -> Result<bool> {
    let answer = prompt(input, question)?;
    Ok(answer.starts_with('y') || answer.starts_with('Y'))
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
