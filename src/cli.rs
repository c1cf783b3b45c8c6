use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use crate::batch::run_texture_sweep;
use crate::cards::{parse_board, parse_card, Deck};
use crate::combo::Combo;
use crate::display::{board_display, print_error, print_section, range_grid, stats_table};
use crate::draws::classify_draws;
use crate::error::RangeResult;
use crate::made_hands::classify_combo;
use crate::nut_ranks::{nut_flush_card, nut_flush_draw_cards, nut_straight_rank};
use crate::range_stats::classify_range;
use crate::ranges::{parse_range, range_labels};

#[derive(Parser)]
#[command(
    name = "rangelab",
    version = "1.0.0",
    about = "Range trainer analytics: made hands, draws, and nut ranks across a range."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    fn as_str(self) -> &'static str {
        match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }

    fn card_count(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Break a range down into made-hand and drawing buckets on a board
    Stats {
        /// Range notation (e.g., "22+, ATs+, KQo, AhKh")
        range: String,
        /// Board cards (e.g., Qs7h2d)
        #[arg(short, long)]
        board: String,
        /// Include drawing-hand rows
        #[arg(short, long)]
        draws: bool,
        /// Show the range as a 13x13 matrix first
        #[arg(short, long)]
        grid: bool,
    },
    /// Classify a single combo against a board
    Classify {
        /// Exact combo (e.g., AhKh)
        combo: String,
        /// Board cards (e.g., Qs7h2d)
        #[arg(short, long)]
        board: String,
    },
    /// Show the nut flush, straight, and flush-draw cards for a board
    Nuts {
        /// Board cards (e.g., Qs7h2d)
        board: String,
    },
    /// Deal a random board and break the range down on it
    Deal {
        /// Range notation
        range: String,
        /// Street to deal
        #[arg(short, long, default_value = "flop")]
        street: Street,
        /// Include drawing-hand rows
        #[arg(short, long)]
        draws: bool,
    },
    /// Sweep a range across many random boards and average the results
    Batch {
        /// Range notation
        range: String,
        /// Number of boards to deal
        #[arg(short = 'n', long, default_value = "100")]
        boards: usize,
        /// Street to deal
        #[arg(short, long, default_value = "flop")]
        street: Street,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Stats {
            range,
            board,
            draws,
            grid,
        } => cmd_stats(&range, &board, draws, grid),
        Commands::Classify { combo, board } => cmd_classify(&combo, &board),
        Commands::Nuts { board } => cmd_nuts(&board),
        Commands::Deal {
            range,
            street,
            draws,
        } => cmd_deal(&range, street, draws),
        Commands::Batch {
            range,
            boards,
            street,
            json,
        } => cmd_batch(&range, boards, street, json),
    };
    if let Err(e) = outcome {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn cmd_stats(range_str: &str, board_str: &str, draws: bool, grid: bool) -> RangeResult<()> {
    let range = parse_range(range_str)?;
    let board = parse_board(board_str)?;

    if grid {
        let labels = range_labels(&range);
        println!("{}", range_grid(&labels, "Range"));
    }

    let stats = classify_range(&range, &board)?;
    print_section("Board", &board_display(&board));
    println!(
        "  {} combos in range, {} unblocked",
        range.len(),
        stats.total_combos
    );
    println!("\n{}", stats_table(&stats, draws));
    Ok(())
}

fn cmd_classify(combo_str: &str, board_str: &str) -> RangeResult<()> {
    let combo = parse_combo(combo_str)?;
    let board = parse_board(board_str)?;

    print_section("Board", &board_display(&board));
    print_section("Combo", &board_display(&combo.cards()));

    if combo.blocked_by(&board) {
        println!("\n  {}", "Blocked: combo shares a card with the board".red());
        return Ok(());
    }

    let made = classify_combo(&combo, &board);
    let label = match (made.category, made.sub_rank) {
        (Some(cat), Some(sub)) => format!("{} ({})", cat, sub),
        (Some(cat), None) => cat.to_string(),
        (None, _) => "No made hand".to_string(),
    };
    print_section("Made hand", &label.bold().to_string());
    if made.ace_high {
        println!("  {}", "Ace High".yellow());
    }
    if made.overcards {
        println!("  {}", "Overcards".yellow());
    }

    let draws = classify_draws(&combo, &board);
    if draws.is_empty() {
        print_section("Draws", "none");
    } else {
        print_section("Draws", "");
        for (name, slot) in [
            ("Flush Draw", draws.flush_draw),
            ("Straight Draw", draws.straight_draw),
            ("BD Flush Draw", draws.backdoor_flush),
            ("BD Str Draw", draws.backdoor_straight),
        ] {
            if let Some(sub) = slot {
                println!("  {} ({})", name.cyan(), sub);
            }
        }
    }
    Ok(())
}

fn cmd_nuts(board_str: &str) -> RangeResult<()> {
    let board = parse_board(board_str)?;
    print_section("Board", &board_display(&board));

    let flushes: Vec<String> = (1..=3)
        .filter_map(|n| nut_flush_card(&board, n).map(|c| format!("{}: {}", ordinal(n), c)))
        .collect();
    print_section(
        "Nut flush cards",
        if flushes.is_empty() {
            "no flush possible".to_string()
        } else {
            flushes.join("  ")
        }
        .as_str(),
    );

    let straights: Vec<String> = (1..=2)
        .filter_map(|n| {
            nut_straight_rank(&board, n).map(|r| format!("{}: {}", ordinal(n), r.to_char()))
        })
        .collect();
    print_section(
        "Nut straight ranks",
        if straights.is_empty() {
            "no straight possible".to_string()
        } else {
            straights.join("  ")
        }
        .as_str(),
    );

    if board.len() < 5 {
        let fd: Vec<String> = nut_flush_draw_cards(&board, 1)
            .iter()
            .map(|c| c.to_string())
            .collect();
        print_section(
            "Nut flush-draw cards",
            if fd.is_empty() {
                "no flush draw possible".to_string()
            } else {
                fd.join("  ")
            }
            .as_str(),
        );
    }
    Ok(())
}

fn cmd_deal(range_str: &str, street: Street, draws: bool) -> RangeResult<()> {
    let range = parse_range(range_str)?;
    let board = Deck::new(None).shuffle().deal(street.card_count())?;

    let stats = classify_range(&range, &board)?;
    print_section(
        &format!("Dealt {}", street.as_str()),
        &board_display(&board),
    );
    println!("\n{}", stats_table(&stats, draws));
    Ok(())
}

fn cmd_batch(range_str: &str, boards: usize, street: Street, json: bool) -> RangeResult<()> {
    let range = parse_range(range_str)?;
    let report = run_texture_sweep(&range, boards, street.card_count(), street.as_str())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "\n  {} {} boards on the {}",
        "Sweep:".bold(),
        report.boards,
        report.street
    );
    for row in report.made_hands.iter().chain(report.draws.iter()) {
        if row.boards_hit == 0 {
            continue;
        }
        println!(
            "  {:<16} avg {:>5.1}%  on {}/{} boards",
            row.category,
            row.avg_frequency * 100.0,
            row.boards_hit,
            report.boards
        );
    }
    Ok(())
}

fn parse_combo(notation: &str) -> RangeResult<Combo> {
    let notation = notation.trim();
    if notation.len() != 4 {
        return Err(crate::error::RangeError::InvalidHandNotation(
            notation.to_string(),
        ));
    }
    Combo::new(parse_card(&notation[..2])?, parse_card(&notation[2..])?)
}

fn ordinal(n: usize) -> &'static str {
    match n {
        1 => "1st",
        2 => "2nd",
        _ => "3rd",
    }
}
