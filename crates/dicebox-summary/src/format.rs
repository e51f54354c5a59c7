//! Display strings for roll results.
//!
//! Modifiers are styled bold green when positive and bold red when negative;
//! kept and dropped dice in a pair are green and red. Styling is skipped
//! automatically when the terminal does not support colour.

use console::style;
use dicebox_draw::DrawPair;

fn push_modifier(out: &mut String, modifier: i64) {
    if modifier > 0 {
        out.push_str(&format!(" + {}", style(modifier).bold().green()));
    } else if modifier < 0 {
        out.push_str(&format!(" - {}", style(modifier.unsigned_abs()).bold().red()));
    }
}

fn push_total(out: &mut String, total: i128) {
    out.push_str(&format!(" = {total}"));
}

/// Renders `a + b + c [± modifier] = total`.
#[must_use]
pub fn format_sum(values: &[u64], modifier: i64) -> String {
    let mut out = match values.split_first() {
        Some((first, rest)) => rest
            .iter()
            .fold(first.to_string(), |acc, value| format!("{acc} + {value}")),
        None => "0".to_owned(),
    };
    push_modifier(&mut out, modifier);

    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    push_total(&mut out, sum + i128::from(modifier));
    out
}

/// Renders an advantage roll: `low | high [± modifier] = high + modifier`.
#[must_use]
pub fn format_advantage(pair: DrawPair, modifier: i64) -> String {
    let mut out = format!("{} | {}", style(pair.low).red(), style(pair.high).green());
    push_modifier(&mut out, modifier);
    push_total(&mut out, i128::from(pair.high) + i128::from(modifier));
    out
}

/// Renders a disadvantage roll: `high | low [± modifier] = low + modifier`.
#[must_use]
pub fn format_disadvantage(pair: DrawPair, modifier: i64) -> String {
    let mut out = format!("{} | {}", style(pair.high).red(), style(pair.low).green());
    push_modifier(&mut out, modifier);
    push_total(&mut out, i128::from(pair.low) + i128::from(modifier));
    out
}
