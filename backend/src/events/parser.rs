//! Parser for the textual event log
//!
//! Each non-blank line of an event file describes one initial event:
//!
//! ```text
//! <timestamp> Arrive <customer-name> (<item-name> <item-seconds>)+
//! <timestamp> Close <line-number>
//! ```
//!
//! For example:
//!
//! ```text
//! 10 Arrive Tamara Bananas 7
//! 5 Arrive Jugo Bread 3 Cheese 3
//! 20 Close 0
//! ```
//!
//! The parser is the validation boundary for event input: it surfaces every
//! malformed record as a [`ParseError`] naming the offending line, and the
//! simulation core only ever sees well-typed events.

use crate::models::customer::{Customer, Item};
use crate::models::event::Event;
use thiserror::Error;

/// Errors reading an event file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A record with too few fields for its event kind
    #[error("line {line}: incomplete event record")]
    Incomplete { line: usize },

    /// A record whose event kind is unknown
    #[error("line {line}: unknown event kind '{kind}'")]
    UnknownKind { line: usize, kind: String },

    /// A field that should be a non-negative integer but is not
    #[error("line {line}: invalid integer '{value}' for {field}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// An arrival record whose item list is empty or has a dangling name
    #[error("line {line}: items must be (name, seconds) pairs")]
    MalformedItems { line: usize },
}

/// Parse an event file into typed events
///
/// Records may appear in any time order; the event queue orders them.
/// Blank lines are skipped. Parsed arrivals carry customers who have not
/// yet arrived (no arrival time recorded).
///
/// # Example
///
/// ```rust
/// use checkout_simulator_core_rs::create_event_list;
///
/// let events = create_event_list("10 Arrive Tamara Bananas 7\n").unwrap();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].timestamp(), 10);
/// ```
pub fn create_event_list(text: &str) -> Result<Vec<Event>, ParseError> {
    let mut events = Vec::new();
    for (index, record) in text.lines().enumerate() {
        let line = index + 1;
        let mut fields = record.split_whitespace();

        let timestamp = match fields.next() {
            Some(field) => parse_integer(line, "timestamp", field)?,
            // blank line
            None => continue,
        };
        let kind = fields.next().ok_or(ParseError::Incomplete { line })?;

        match kind {
            "Arrive" => {
                let name = fields.next().ok_or(ParseError::Incomplete { line })?;
                let items = parse_items(line, fields)?;
                events.push(Event::CustomerArrival {
                    timestamp,
                    customer: Customer::new(name, items),
                });
            }
            "Close" => {
                let field = fields.next().ok_or(ParseError::Incomplete { line })?;
                let line_number = parse_integer(line, "line number", field)? as usize;
                events.push(Event::CloseLine {
                    timestamp,
                    line_number,
                });
            }
            other => {
                return Err(ParseError::UnknownKind {
                    line,
                    kind: other.to_string(),
                })
            }
        }
    }
    Ok(events)
}

fn parse_integer(line: usize, field: &'static str, value: &str) -> Result<u64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_items<'a>(
    line: usize,
    fields: impl Iterator<Item = &'a str>,
) -> Result<Vec<Item>, ParseError> {
    let fields: Vec<&str> = fields.collect();
    if fields.is_empty() || fields.len() % 2 != 0 {
        return Err(ParseError::MalformedItems { line });
    }

    let mut items = Vec::with_capacity(fields.len() / 2);
    for pair in fields.chunks(2) {
        let seconds = parse_integer(line, "item seconds", pair[1])?;
        items.push(Item::new(pair[0], seconds));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_lines() {
        let events = create_event_list("\n10 Arrive Tamara Bananas 7\n\n").unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_dangling_item_name_is_error() {
        let result = create_event_list("10 Arrive Tamara Bananas\n");
        assert_eq!(result, Err(ParseError::MalformedItems { line: 1 }));
    }

    #[test]
    fn test_unknown_kind_is_error() {
        let result = create_event_list("10 Depart Tamara\n");
        assert_eq!(
            result,
            Err(ParseError::UnknownKind {
                line: 1,
                kind: "Depart".to_string()
            })
        );
    }
}
