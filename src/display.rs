use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit};
use crate::range_stats::RangeStats;

const RANGE_GRID_RANKS: [char; 13] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];

pub fn board_display(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let text = format!("{}{}", card.rank.to_char(), card.suit.symbol());
            match card.suit {
                Suit::Hearts => text.red().to_string(),
                Suit::Diamonds => text.blue().to_string(),
                Suit::Clubs => text.green().to_string(),
                Suit::Spades => text.white().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn freq_bar(freq: f64, width: usize) -> String {
    let filled = (freq * width as f64).round() as usize;
    let filled = filled.min(width);
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.1}%", freq * 100.0);

    if freq >= 0.25 {
        format!("{} {}", bar.green(), pct)
    } else if freq >= 0.10 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.dimmed(), pct)
    }
}

fn combos_preview(combos: &[crate::combo::Combo], max: usize) -> String {
    let mut text = combos
        .iter()
        .take(max)
        .map(|c| c.text().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if combos.len() > max {
        text.push_str(&format!(" (+{})", combos.len() - max));
    }
    text
}

/// One table covering the made-hand rows and, when requested, the drawing
/// rows, each with its sub-rank breakdown indented beneath it.
pub fn stats_table(stats: &RangeStats, show_draws: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Hand").set_alignment(CellAlignment::Left),
        Cell::new("Combos").set_alignment(CellAlignment::Right),
        Cell::new("Frequency").set_alignment(CellAlignment::Left),
        Cell::new("Examples").set_alignment(CellAlignment::Left),
    ]);

    for bucket in &stats.made_hands {
        table.add_row(vec![
            Cell::new(bucket.category.to_string().bold().to_string()),
            Cell::new(bucket.combos.len()).set_alignment(CellAlignment::Right),
            Cell::new(freq_bar(bucket.frequency, 12)),
            Cell::new(combos_preview(&bucket.combos, 6)),
        ]);
        for sub in &bucket.sub_buckets {
            table.add_row(vec![
                Cell::new(format!("  {}", sub.sub_rank).dimmed().to_string()),
                Cell::new(sub.combos.len()).set_alignment(CellAlignment::Right),
                Cell::new(freq_bar(sub.frequency, 12)),
                Cell::new(combos_preview(&sub.combos, 6).dimmed().to_string()),
            ]);
        }
    }

    if show_draws {
        for bucket in &stats.draws {
            table.add_row(vec![
                Cell::new(bucket.category.to_string().cyan().bold().to_string()),
                Cell::new(bucket.combos.len()).set_alignment(CellAlignment::Right),
                Cell::new(freq_bar(bucket.frequency, 12)),
                Cell::new(combos_preview(&bucket.combos, 6)),
            ]);
            for sub in &bucket.sub_buckets {
                table.add_row(vec![
                    Cell::new(format!("  {}", sub.sub_rank).dimmed().to_string()),
                    Cell::new(sub.combos.len()).set_alignment(CellAlignment::Right),
                    Cell::new(freq_bar(sub.frequency, 12)),
                    Cell::new(combos_preview(&sub.combos, 6).dimmed().to_string()),
                ]);
            }
        }
    }

    table.to_string()
}

/// 13x13 matrix of a range: pairs on the diagonal, suited above, offsuit
/// below, labels in the range highlighted.
pub fn range_grid(labels_in_range: &[String], title: &str) -> String {
    let in_range: std::collections::HashSet<&str> =
        labels_in_range.iter().map(|s| s.as_str()).collect();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    for &r in &RANGE_GRID_RANKS {
        header.push(Cell::new(r).set_alignment(CellAlignment::Center));
    }
    table.set_header(header);

    for (i, &r1) in RANGE_GRID_RANKS.iter().enumerate() {
        let mut row = vec![Cell::new(format!("{}", r1).bold().to_string())];
        for (j, &r2) in RANGE_GRID_RANKS.iter().enumerate() {
            let label = if i == j {
                format!("{}{}", r1, r2)
            } else if i < j {
                format!("{}{}s", r1, r2)
            } else {
                format!("{}{}o", r2, r1)
            };

            let cell = if in_range.contains(label.as_str()) {
                Cell::new(label.green().bold().to_string())
            } else {
                Cell::new(label.dimmed().to_string())
            };
            row.push(cell.set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }

    format!("  {}\n{}", title.bold(), table)
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("  {}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
