//! Constraint expression parsing
//!
//! ```text
//! Expression := Clause ('||' Clause)*
//! Clause     := Term (',' Term)*
//! Term       := Operator? Pattern
//! Pattern    := Component ('.' Component){0,2} ('-' Prerelease)? ('+' Build)?
//! Component  := Digits | '*' | 'x' | 'X'
//! ```

use crate::constraint::range::{Pattern, WILDCARD_MAJOR};
use crate::constraint::{compact, Constraint, Operator, Union};
use crate::scanner::{
    is_dash, is_dot, is_num, is_plus, is_wildcard, read_label, read_num, read_op, skip_leading, skip_spaces,
};
use crate::version::{pack, FIELD_MASK};
use crate::{ParseError, Version};

/// Parse a full constraint expression into a single tree.
///
/// Terms of a clause are folded into a right-leaning AND chain, then the
/// clauses into a right-leaning OR chain.
pub fn parse_constraint(input: &str) -> Result<Constraint, ParseError> {
    let parsed = parse_expression(input);
    if let Err(err) = &parsed {
        log::debug!("Rejected constraint {:?}: {}", input, err);
    }
    parsed
}

fn parse_expression(input: &str) -> Result<Constraint, ParseError> {
    let mut clauses = Vec::new();
    for clause in input.split("||") {
        let mut terms = Vec::new();
        for term in clause.split(',') {
            terms.push(parse_term(term)?);
        }
        let folded = compact(terms, Union::And).ok_or_else(|| ParseError::malformed_version(clause, 0))?;
        clauses.push(folded);
    }

    let root = compact(clauses, Union::Or).ok_or_else(|| ParseError::malformed_version(input, 0))?;
    log::trace!("Constraint {:?} folded to depth {}", input, root.depth());
    Ok(root)
}

/// Parse one `<op><pattern>` term into its guard pair.
pub(crate) fn parse_term(term: &str) -> Result<Constraint, ParseError> {
    let bytes = term.as_bytes();
    let (spelling, next) = read_op(term, skip_leading(bytes, 0));
    let operator = Operator::from_spelling(spelling).ok_or_else(|| ParseError::UnknownOperator {
        operator: spelling.to_string(),
        term: term.to_string(),
    })?;

    let pattern = scan_pattern(term, skip_leading(bytes, next))?;
    let constraint = (operator.rule())(&pattern).into_constraint();
    log::trace!(
        "Term {:?}: operator {:?}, pattern {}, wildcard {:#05b} => {}",
        term,
        operator,
        pattern.version,
        pattern.wildcard,
        constraint
    );
    Ok(constraint)
}

fn scan_pattern(term: &str, start: usize) -> Result<Pattern, ParseError> {
    let bytes = term.as_bytes();
    let mut components = [0u32; 3];
    let mut count = 0;
    let mut wildcard = 0u8;
    let mut i = start;

    loop {
        if count == components.len() {
            return Err(ParseError::malformed_version(term, i));
        }
        if i < bytes.len() && is_num(bytes[i]) {
            let (value, next) = read_num(bytes, i).ok_or_else(|| ParseError::malformed_version(term, i))?;
            components[count] = (value & u64::from(FIELD_MASK)) as u32;
            i = next;
        } else if i < bytes.len() && is_wildcard(bytes[i]) {
            // the most significant wildcard wins
            wildcard = wildcard.max(WILDCARD_MAJOR >> count);
            i += 1;
        } else {
            return Err(ParseError::malformed_version(term, i));
        }
        count += 1;
        if i < bytes.len() && is_dot(bytes[i]) {
            i += 1;
            continue;
        }
        break;
    }

    // Omitted trailing components act as wildcards.
    if count < components.len() {
        wildcard = wildcard.max(WILDCARD_MAJOR >> count);
    }

    let mut pre = "";
    if i < bytes.len() && is_dash(bytes[i]) {
        let (label, next) = read_label(term, i + 1);
        if label.is_empty() {
            return Err(ParseError::malformed_version(term, i + 1));
        }
        pre = label;
        i = next;
    }

    if i < bytes.len() && is_plus(bytes[i]) {
        let (build, next) = read_label(term, i + 1);
        if build.is_empty() {
            return Err(ParseError::malformed_version(term, i + 1));
        }
        i = next;
    }

    i = skip_spaces(bytes, i);
    if i != bytes.len() {
        return Err(ParseError::malformed_version(term, i));
    }

    Ok(Pattern {
        version: Version::from_parts(pack(components[0], components[1], components[2]), pre.to_string()),
        wildcard,
    })
}
