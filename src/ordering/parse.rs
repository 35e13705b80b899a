// src/ordering/parse.rs

use crate::errors::{PuzzleError, Result};
use crate::ordering::rules::{RuleSet, Update};

/// Parse `a|b` rule lines, a blank separator line, then `a,b,c` update lines.
///
/// Input without a blank separator is all rules and no updates. Trailing blank
/// lines after the updates are ignored.
pub fn parse_print_queue(input: &str) -> Result<(RuleSet, Vec<Update>)> {
    let mut rules = RuleSet::new();
    let mut updates = Vec::new();
    let mut in_updates = false;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            in_updates = true;
            continue;
        }

        if in_updates {
            let pages = line
                .split(',')
                .map(|token| parse_page(token, line_no))
                .collect::<Result<Vec<_>>>()?;
            let update = Update::new(pages).map_err(|e| PuzzleError::parse(line_no, e))?;
            updates.push(update);
        } else {
            let (before, after) = line.split_once('|').ok_or_else(|| {
                PuzzleError::parse(line_no, format!("expected rule 'a|b', got '{line}'"))
            })?;
            if after.contains('|') {
                return Err(PuzzleError::parse(
                    line_no,
                    format!("rule has more than one '|': '{line}'"),
                ));
            }
            rules.add(parse_page(before, line_no)?, parse_page(after, line_no)?);
        }
    }

    Ok((rules, updates))
}

fn parse_page(token: &str, line_no: usize) -> Result<u32> {
    let token = token.trim();
    token
        .parse::<u32>()
        .map_err(|e| PuzzleError::parse(line_no, format!("invalid page '{token}': {e}")))
}
