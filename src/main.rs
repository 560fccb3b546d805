#[cfg(test)]
#[macro_use]
extern crate matches;

use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::process;

use log::debug;
use structopt::StructOpt;

use lifo_stack::{LifoStack, StackError};

const SAMPLE_VALUES: [i64; 5] = [5, 10, 15, 20, 25];

#[derive(Debug, StructOpt)]
#[structopt(name = "lifo_stack", about = "Walks a stack through its operations")]
struct Opt {
    /// Values to push, bottom first (defaults to 5 10 15 20 25)
    values: Vec<i64>,

    /// Value to look up once the stack has been popped and peeked
    #[structopt(short = "p", long = "probe", default_value = "50")]
    probe: i64,

    /// Only print counts, not the stack contents
    #[structopt(short = "q", long = "quiet")]
    quiet: bool,
}

#[derive(Debug)]
enum DemoError {
    IoFail(io::Error),
    Stack(StackError),
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        DemoError::IoFail(e)
    }
}
impl From<StackError> for DemoError {
    fn from(e: StackError) -> Self {
        DemoError::Stack(e)
    }
}

impl fmt::Display for DemoError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DemoError::IoFail(e) => {
                writeln!(formatter, "IO error")?;
                write!(formatter, "{}", e)
            }
            DemoError::Stack(e) => {
                writeln!(formatter, "Stack error")?;
                write!(formatter, "{}", e)
            }
        }
    }
}

impl Error for DemoError {}

fn print_stack<W: Write>(
    out: &mut W,
    stack: &LifoStack<i64>,
    quiet: bool,
) -> io::Result<()> {
    if !quiet {
        for item in stack {
            writeln!(out, "{}", item)?;
        }
    }
    writeln!(out, "Count: {}", stack.len())
}

fn run<W: Write>(opt: &Opt, mut out: W) -> Result<(), DemoError> {
    let values: &[i64] = if opt.values.is_empty() {
        &SAMPLE_VALUES
    } else {
        &opt.values
    };
    let mut stack = LifoStack::with_capacity(values.len());

    writeln!(out, "Pushing items onto the stack:")?;
    stack.extend(values.iter().cloned());
    print_stack(&mut out, &stack, opt.quiet)?;

    writeln!(out, "Popping item from the stack:")?;
    let popped = stack.pop()?;
    writeln!(out, "Popped {}", popped)?;
    print_stack(&mut out, &stack, opt.quiet)?;

    writeln!(out, "Peeking item from the stack:")?;
    let top = *stack.peek()?;
    writeln!(out, "Top is {}", top)?;
    print_stack(&mut out, &stack, opt.quiet)?;

    writeln!(
        out,
        "Stack contains {}: {}",
        opt.probe,
        stack.contains(&opt.probe)
    )?;

    stack.clear();
    writeln!(out, "Cleared, count is {}", stack.len())?;

    if let Err(e) = stack.pop() {
        writeln!(out, "Popping the empty stack: {}", e)?;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();
    debug!("{:?}", opt);

    let stdout = io::stdout();
    if let Err(e) = run(&opt, stdout.lock()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn output_of(opt: &Opt) -> Result<String, DemoError> {
        let mut printed = Vec::new();
        run(opt, &mut printed)?;
        Ok(String::from_utf8(printed).unwrap())
    }

    #[test]
    fn test_default_walkthrough() {
        let opt = Opt {
            values: vec![],
            probe: 50,
            quiet: false,
        };
        let expected = indoc!(
            "
            Pushing items onto the stack:
            25
            20
            15
            10
            5
            Count: 5
            Popping item from the stack:
            Popped 25
            20
            15
            10
            5
            Count: 4
            Peeking item from the stack:
            Top is 20
            20
            15
            10
            5
            Count: 4
            Stack contains 50: false
            Cleared, count is 0
            Popping the empty stack: The stack is empty
            "
        );

        let printed = output_of(&opt).unwrap();
        assert_eq!(printed.trim_end(), expected.trim_end());
    }

    #[test]
    fn test_quiet_with_values() {
        let opt = Opt {
            values: vec![1, 2, 3],
            probe: 1,
            quiet: true,
        };
        let expected = indoc!(
            "
            Pushing items onto the stack:
            Count: 3
            Popping item from the stack:
            Popped 3
            Count: 2
            Peeking item from the stack:
            Top is 2
            Count: 2
            Stack contains 1: true
            Cleared, count is 0
            Popping the empty stack: The stack is empty
            "
        );

        let printed = output_of(&opt).unwrap();
        assert_eq!(printed.trim_end(), expected.trim_end());
    }

    #[test]
    fn test_single_value_runs_dry() {
        let opt = Opt {
            values: vec![7],
            probe: 7,
            quiet: false,
        };

        assert_matches!(
            output_of(&opt),
            Err(DemoError::Stack(StackError::Empty))
        );
    }
}
