use anyhow::Result;
use chem_search::{
    config::Config,
    game::{GameSession, SelectionOutcome},
    models::Coordinate,
    words::WordList,
};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Drag(Coordinate, Coordinate),
    Hint,
    Timer(bool),
    Reset,
    Show,
    Clues,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = match parts.next()? {
            "drag" => {
                let numbers: Vec<usize> = parts
                    .by_ref()
                    .map(str::parse)
                    .collect::<Result<_, _>>()
                    .ok()?;
                match numbers.as_slice() {
                    [r1, c1, r2, c2] => {
                        Command::Drag(Coordinate::new(*r1, *c1), Coordinate::new(*r2, *c2))
                    }
                    _ => return None,
                }
            }
            "hint" => Command::Hint,
            "timer" => match parts.next()? {
                "on" => Command::Timer(true),
                "off" => Command::Timer(false),
                _ => return None,
            },
            "reset" => Command::Reset,
            "show" => Command::Show,
            "clues" => Command::Clues,
            "quit" | "exit" => Command::Quit,
            _ => return None,
        };

        if parts.next().is_some() {
            return None;
        }
        Some(command)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chem_search=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting word search...");

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let words = match &config.game.word_list_path {
        Some(path) => match WordList::load(path).await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Failed to load word list: {}. Using built-in list.", e);
                WordList::builtin()
            }
        },
        None => WordList::builtin(),
    };

    let mut rng = match config.game.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut session = GameSession::new(words, config.session_settings(), &mut rng);
    print_board(&session);
    print_clues(&session);
    println!("Commands: drag r1 c1 r2 c2 | hint | timer on|off | reset | show | clues | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(command) = Command::parse(line) else {
            println!("Unknown command: {}", line);
            continue;
        };

        let now = Utc::now();
        match command {
            Command::Drag(start, end) => match session.submit_drag(start, end, now) {
                SelectionOutcome::Found { word, won, .. } => {
                    let (found, placed) = session.progress();
                    println!("Correct! {} ({}/{})", word, found, placed);
                    if won {
                        let elapsed = session.elapsed(now).num_seconds();
                        if session.timer().is_enabled() {
                            println!(
                                "All words found in {:02}:{:02}!",
                                elapsed / 60,
                                elapsed % 60
                            );
                        } else {
                            println!("All words found!");
                        }
                    }
                }
                SelectionOutcome::AlreadyFound { word } => println!("{} was already found", word),
                SelectionOutcome::NoMatch { text } => println!("No word: {}", text),
            },
            Command::Hint => match session.use_hint(&mut rng) {
                Some(cell) => {
                    println!(
                        "A word starts at row {}, col {} ({} hints left)",
                        cell.row,
                        cell.col,
                        session.hints_remaining()
                    );
                    print_board(&session);
                    session.clear_hint();
                }
                None => println!("No hints available"),
            },
            Command::Timer(true) => session.enable_timer(now),
            Command::Timer(false) => session.disable_timer(),
            Command::Reset => {
                session.reset(&mut rng, now);
                print_board(&session);
            }
            Command::Show => print_board(&session),
            Command::Clues => print_clues(&session),
            Command::Quit => break,
        }
    }

    tracing::info!("Goodbye");
    Ok(())
}

/// Found letters print lowercase and the hinted cell is starred
fn print_board(session: &GameSession) {
    for row in session.grid().rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                if session.active_hint() == Some(cell.coordinate) {
                    format!("{}*", cell.letter)
                } else if session.is_found_cell(cell.coordinate) {
                    format!("{} ", cell.letter.to_ascii_lowercase())
                } else {
                    format!("{} ", cell.letter)
                }
            })
            .collect();
        println!("{}", line.concat().trim_end());
    }
}

fn print_clues(session: &GameSession) {
    for clue in session.clues() {
        let answer = if clue.found {
            clue.entry.word.clone()
        } else {
            "_".repeat(clue.entry.letter_count())
        };
        println!("{} ({}) {}", answer, clue.entry.letter_count(), clue.entry.definition);
    }
    let (found, placed) = session.progress();
    println!("{} / {} Found", found, placed);
}
