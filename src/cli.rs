//! Command line front end: one subcommand per puzzle.
use crate::ocr::Account;
use crate::permute::permutations;
use crate::poker::Hand;
use crate::ranges::expand;
use crate::ranges::extract;
use crate::rectangles::decompose;
use crate::search::Grid;
use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Self-contained puzzle solvers", long_about = None)]
pub struct Kata {
    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub query: Query,
}

#[derive(Subcommand)]
pub enum Query {
    #[command(about = "Read a scanned account number (file or stdin)")]
    Ocr { path: Option<PathBuf> },
    #[command(about = "Classify a five card hand, e.g. 4♣ 4♦ 4♥ 4♠ 10♥")]
    Poker {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    #[command(about = "Break an ASCII figure into rectangles (file or stdin)", alias = "rect")]
    Rectangles { path: Option<PathBuf> },
    #[command(about = "Search a grid for a snaking word")]
    Search {
        #[arg(required = true)]
        word: String,
        #[arg(required = true, num_args = 1..)]
        rows: Vec<String>,
    },
    #[command(about = "List every ordering of some symbols", alias = "perm")]
    Permute {
        #[arg(required = true)]
        symbols: String,
    },
    #[command(about = "Compress sorted integers into range notation")]
    Ranges {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    #[command(about = "Expand range notation back into integers")]
    Expand {
        #[arg(required = true, allow_hyphen_values = true)]
        notation: String,
    },
}

impl Kata {
    pub fn run(self) -> anyhow::Result<()> {
        log::debug!("running {}", self.query.name());
        match self.query {
            Query::Ocr { ref path } => {
                let account = Account::try_from(read(path)?.as_str())?;
                match self.json {
                    true => Self::emit(&serde_json::json!({
                        "account": account,
                        "digits": account.digits(),
                        "valid": account.is_valid(),
                    })),
                    false => match account.is_valid() {
                        true => println!("{}", account.to_string().green()),
                        false => println!("{} {}", account.to_string().yellow(), "ERR".red()),
                    },
                }
            }
            Query::Poker { ref cards } => {
                let tokens = cards.iter().map(String::as_str).collect::<Vec<_>>();
                let hand = Hand::try_from(tokens.as_slice())?;
                let ranking = hand.ranking();
                match self.json {
                    true => Self::emit(&serde_json::json!({
                        "hand": hand.cards(),
                        "ranking": ranking,
                    })),
                    false => println!("{:<20} {}", hand.to_string(), ranking.to_string().cyan()),
                }
            }
            Query::Rectangles { ref path } => {
                let figure = read(path)?;
                let rects = decompose(&figure).collect::<Result<Vec<_>, _>>()?;
                log::info!("found {} rectangles", rects.len());
                match self.json {
                    true => {
                        let pieces = rects
                            .iter()
                            .map(|r| serde_json::json!({ "at": r, "block": r.block() }))
                            .collect::<Vec<serde_json::Value>>();
                        Self::emit(&serde_json::Value::Array(pieces))
                    }
                    false => {
                        let blocks = rects.iter().map(|r| r.block()).collect::<Vec<_>>();
                        println!("{}", blocks.join("\n\n"));
                    }
                }
            }
            Query::Search { ref word, ref rows } => {
                let rows = rows.iter().map(String::as_str).collect::<Vec<_>>();
                let grid = Grid::try_from(rows.as_slice())?;
                let path = grid.path(word);
                match self.json {
                    true => Self::emit(&serde_json::json!({
                        "word": word,
                        "found": path.is_some(),
                        "path": path,
                    })),
                    false => match path {
                        Some(path) => println!("{}", highlight(&grid, &path)),
                        None => println!("{} not found", word.red()),
                    },
                }
            }
            Query::Permute { ref symbols } => match self.json {
                true => {
                    let all = permutations(symbols).collect::<Vec<String>>();
                    Self::emit(&serde_json::json!(all))
                }
                false => permutations(symbols).for_each(|p| println!("{}", p)),
            },
            Query::Ranges { ref values } => match self.json {
                true => Self::emit(&serde_json::json!(extract(values))),
                false => println!("{}", extract(values)),
            },
            Query::Expand { ref notation } => {
                let values = expand(notation)?;
                match self.json {
                    true => Self::emit(&serde_json::json!(values)),
                    false => println!(
                        "{}",
                        values
                            .iter()
                            .map(|n| n.to_string())
                            .collect::<Vec<_>>()
                            .join(" ")
                    ),
                }
            }
        }
        Ok(())
    }

    fn emit(value: &serde_json::Value) {
        println!("{}", value);
    }
}

impl Query {
    fn name(&self) -> &'static str {
        match self {
            Query::Ocr { .. } => "ocr",
            Query::Poker { .. } => "poker",
            Query::Rectangles { .. } => "rectangles",
            Query::Search { .. } => "search",
            Query::Permute { .. } => "permute",
            Query::Ranges { .. } => "ranges",
            Query::Expand { .. } => "expand",
        }
    }
}

/// whole file, or stdin when no path is given
fn read(path: &Option<PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("reading stdin"),
    }
}

/// the grid with the found path in bold green
fn highlight(grid: &Grid, path: &[(usize, usize)]) -> String {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let cell = grid.at((row, col)).unwrap_or(' ').to_string();
                    match path.contains(&(row, col)) {
                        true => cell.green().bold().to_string(),
                        false => cell.dimmed().to_string(),
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
