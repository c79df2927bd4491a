//! `monotable`: render tab-separated stdin as an aligned text table.
//!
//! The first line of input is the header unless `--no-header` is given.
//! Run with `--help` for the full list of options.

use std::io::{self, BufRead};

use log::LevelFilter;
use monotable::logging::StderrLogger;
use monotable::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Config {
    help: bool,
    style: Option<String>,
    header_style: Option<String>,
    widths: Option<Vec<Option<usize>>>,
    line: Option<char>,
    gapped: bool,
    no_header: bool,
    ambiguous: AmbiguousWidth,
    log_level: LevelFilter,
}

impl Config {
    fn with_defaults() -> Self {
        Self {
            help: false,
            style: None,
            header_style: None,
            widths: None,
            line: None,
            gapped: false,
            no_header: false,
            ambiguous: AmbiguousWidth::default(),
            log_level: LevelFilter::Off,
        }
    }
}

fn main() {
    let cfg = match parse_args(std::env::args()) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if cfg.help {
        print!("{HELP_TEXT}");
        return;
    }

    if cfg.log_level != LevelFilter::Off {
        // Only fails if a logger is already installed.
        let _ = StderrLogger::new().level(cfg.log_level).init();
    }

    let rows = match read_rows(io::stdin().lock()) {
        Ok(rows) => rows,
        Err(err) => {
            eprintln!("Failed to read stdin: {err}");
            std::process::exit(1);
        }
    };

    if rows.is_empty() {
        return;
    }

    match build_table(&cfg, &rows) {
        Ok(table) => println!("{table}"),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut iter = args.into_iter();
    // Drop binary name if present.
    let _ = iter.next();

    let mut cfg = Config::with_defaults();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "--style" => cfg.style = Some(next_value(&mut iter, "--style")?),
            "--header-style" => cfg.header_style = Some(next_value(&mut iter, "--header-style")?),
            "--widths" => {
                let raw = next_value(&mut iter, "--widths")?;
                cfg.widths = Some(parse_widths(&raw)?);
            }
            "--line" => {
                let raw = next_value(&mut iter, "--line")?;
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(fill), None) => cfg.line = Some(fill),
                    _ => {
                        return Err(format!(
                            "Invalid --line value `{raw}` (expected a single character)."
                        ));
                    }
                }
            }
            "--gapped" => cfg.gapped = true,
            "--no-header" => cfg.no_header = true,
            "--ambiguous" => {
                let raw = next_value(&mut iter, "--ambiguous")?;
                cfg.ambiguous = match raw.as_str() {
                    "wide" => AmbiguousWidth::Wide,
                    "narrow" => AmbiguousWidth::Narrow,
                    _ => {
                        return Err(format!(
                            "Invalid --ambiguous value `{raw}` (expected wide|narrow)."
                        ));
                    }
                };
            }
            "--log-level" => {
                let raw = next_value(&mut iter, "--log-level")?;
                cfg.log_level = raw.parse::<LevelFilter>().map_err(|_| {
                    format!(
                        "Invalid --log-level value `{raw}` (expected off|error|warn|info|debug|trace)."
                    )
                })?;
            }
            _ => {
                return Err(format!(
                    "Unknown flag: {arg}\n\nRun with `--help` to see valid options."
                ));
            }
        }
    }

    if cfg.gapped && cfg.line.is_none() {
        cfg.line = Some(monotable::row::DEFAULT_LINE_FILL);
    }

    Ok(cfg)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next()
        .ok_or_else(|| format!("Missing value for `{flag}`."))
}

fn parse_widths(raw: &str) -> Result<Vec<Option<usize>>, String> {
    raw.split(',')
        .map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                return Ok(None);
            }
            entry.parse::<usize>().map(Some).map_err(|_| {
                format!("Invalid --widths entry `{entry}` (expected a non-negative integer).")
            })
        })
        .collect()
}

/// One non-blank input line, split on tabs.
#[derive(Debug, Clone, PartialEq)]
struct InputRow {
    /// 1-based line number in the input.
    line: usize,
    cells: Vec<String>,
}

fn read_rows(reader: impl BufRead) -> io::Result<Vec<InputRow>> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        rows.push(InputRow {
            line: index + 1,
            cells: line.split('\t').map(str::to_string).collect(),
        });
    }
    Ok(rows)
}

fn default_template(columns: usize) -> String {
    vec!["{}"; columns].join("  ")
}

fn build_table(cfg: &Config, rows: &[InputRow]) -> Result<Table, String> {
    let columns = rows.first().map_or(0, |row| row.cells.len());
    let template = cfg
        .style
        .clone()
        .unwrap_or_else(|| default_template(columns));

    let mut builder = Style::builder(template).ambiguous_width(cfg.ambiguous);
    if let Some(header) = &cfg.header_style {
        builder = builder.header(header.clone());
    }
    if let Some(widths) = &cfg.widths {
        builder = builder.widths(widths.iter().copied());
    }
    let style = builder.build().map_err(|err| format!("Invalid style: {err}"))?;

    let mut table = Table::new(style);
    for (index, input) in rows.iter().enumerate() {
        let line_no = input.line;
        // Data cells print verbatim; numeric-looking ones only align right.
        let row = if index == 0 && !cfg.no_header {
            Row::header(input.cells.iter().map(String::as_str))
        } else {
            Row::data(input.cells.iter().map(|cell| Value::infer(cell)))
        };
        table
            .append(row)
            .map_err(|err| format!("Line {line_no}: {err}"))?;

        if index == 0
            && !cfg.no_header
            && let Some(fill) = cfg.line
        {
            let line = if cfg.gapped {
                Row::gapped_line(fill)
            } else {
                Row::line(fill)
            };
            table
                .append(line)
                .map_err(|err| format!("Line {line_no}: {err}"))?;
        }
    }

    log::info!("rendering {} row(s) in {} column(s)", table.len(), table.style().columns());
    Ok(table)
}

const HELP_TEXT: &str = r"monotable - aligned text tables from tab-separated input

USAGE:
    monotable [OPTIONS] < input.tsv

The first input line is the header unless --no-header is given. Cells are
printed exactly as read. Integer and decimal cells are right aligned by
default; text is left aligned.

OPTIONS:
    --style <template>          Body template, e.g. '{:<}  {:>}'
                                (default: '{}' per column, joined by two spaces)
    --header-style <template>   Header template (default: body template)
    --widths <list>             Explicit widths, e.g. '10,,5' (empty = none)
    --line <char>               Draw a separator under the header
    --gapped                    Keep gaps between columns in the separator
    --no-header                 Treat every line as data
    --ambiguous <wide|narrow>   Width of ambiguous characters (default: wide)
    --log-level <level>         off|error|warn|info|debug|trace (default: off)
    -h, --help                  Print help and exit

EXAMPLES:
    printf 'Name\tScore\nAlice\t10\n' | monotable --line -
    monotable --style '{:>}  {:<12}' --widths ',12' < ratings.tsv
";
