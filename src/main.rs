use anyhow::{anyhow, Context, Result};
use crossterm::tty::IsTty;
use life_check::config::{Config, USAGE};
use life_check::life;
use life_check::reader::GridReader;
use life_check::render::write_labeled;
use life_check::report::{create_report_logger, ReportLogger};
use life_check::Grid;
use std::env;
use std::io::{self, BufRead, Write};

const GRID_PROMPT: &str =
    "Enter the grid row by row (0s and 1s separated by spaces). End input with an empty line:";
const SIZED_GRID_PROMPT: &str =
    "Enter the number of rows and columns, then the grid row by row (0s and 1s separated by spaces):";

fn read_state<R: BufRead, W: Write>(
    reader: &mut GridReader<R>,
    out: &mut W,
    config: &Config,
    prompt: &str,
) -> Result<Grid> {
    if !config.quiet {
        writeln!(out, "{prompt}")?;
        writeln!(
            out,
            "{}",
            if config.sized {
                SIZED_GRID_PROMPT
            } else {
                GRID_PROMPT
            }
        )?;
        out.flush()?;
    }

    let grid = if config.sized {
        reader.read_sized_grid()?
    } else {
        reader.read_grid()?
    };
    Ok(grid)
}

fn write_mismatches<W: Write>(out: &mut W, mismatches: &[(usize, usize)]) -> io::Result<()> {
    if mismatches.is_empty() {
        return Ok(());
    }
    let cells: Vec<String> = mismatches
        .iter()
        .map(|(row, col)| format!("({row}, {col})"))
        .collect();
    writeln!(out, "differs at {}", cells.join(", "))
}

fn run(config: &Config, report: &mut dyn ReportLogger) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = GridReader::new(stdin.lock());
    let stdout = io::stdout();
    let style = config.style.for_output(stdout.is_tty());
    let mut out = stdout.lock();

    let t0 = read_state(&mut reader, &mut out, config, "Enter the current state (t0):")
        .context("failed to read the current state (t0)")?;
    report.log_grid("t0", &t0);
    let t1 = read_state(&mut reader, &mut out, config, "Enter the target state (t1):")
        .context("failed to read the target state (t1)")?;
    report.log_grid("t1", &t1);

    write_labeled(&mut out, "t0", &t0, style)?;
    write_labeled(&mut out, "t1", &t1, style)?;

    let verdict = life::check(&t0, &t1);
    report.log_successor(&verdict.successor);
    report.log_verdict(verdict.is_next_state, &verdict.mismatches);

    if verdict.is_next_state {
        writeln!(out, "t1 is the next state of t0.")?;
    } else {
        if config.show_successor {
            write_labeled(&mut out, "next(t0)", &verdict.successor, style)?;
            write_mismatches(&mut out, &verdict.mismatches)?;
        }
        writeln!(out, "t1 is not the next state of t0.")?;
    }

    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_args(env::args().skip(1)).map_err(|e| anyhow!("{e}\n{USAGE}"))?;
    if config.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut report = create_report_logger(config.report.clone());
    let result = run(&config, report.as_mut());
    if let Err(e) = &result {
        report.log_error(format!("{e:#}"));
    }

    let saved = report.save();
    result?;
    saved.context("failed to write the report")
}
