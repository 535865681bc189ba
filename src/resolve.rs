use {
    crate::codes::{self, STATUS_CODES},
    glob::Pattern,
    log::{debug, warn},
    std::collections::HashSet,
};

/// A single search term from the command line, classified by the characters
/// it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Contains `*` or `?` (underscores already turned into `?`). Matched as a
    /// glob against the decimal form of every known code.
    Pattern(String),
    /// Contains a digit but no wildcard. Matches the one code it parses to, if
    /// that code is known.
    Numeric(String),
    /// No digits and no wildcards. Each whitespace-separated word is looked up
    /// in the reason phrases.
    Text(String),
}

impl Term {
    pub fn parse(term: &str) -> Self {
        let term = term.replace('_', "?");
        if term.contains(&['*', '?'][..]) {
            Term::Pattern(term)
        } else if term.contains(|c: char| c.is_ascii_digit()) {
            Term::Numeric(term)
        } else {
            Term::Text(term)
        }
    }

    /// All codes this term matches, in table order.
    pub fn expand(&self) -> Vec<u16> {
        match self {
            Term::Pattern(pattern) => expand_pattern(pattern),
            Term::Numeric(number) => expand_number(number),
            Term::Text(text) => expand_text(text),
        }
    }
}

fn expand_pattern(pattern: &str) -> Vec<u16> {
    let Some(pattern) = compile(pattern) else {
        return Vec::new();
    };
    STATUS_CODES
        .iter()
        .copied()
        .filter(|code| pattern.matches(&code.to_string()))
        .collect()
}

/// Compiles a term into a glob.
///
/// Terms use the usual shell syntax: `[...]` classes negated with `[^...]`,
/// and `\` escaping the next character. `glob` negates with `[!...]` and
/// has no escapes, so the term is rewritten first. Codes are all digits, so
/// a class is reduced to the digits it accepts.
fn compile(pattern: &str) -> Option<Pattern> {
    let translated = match translate(pattern) {
        Ok(translated) => translated,
        Err(e) => {
            warn!("ignoring invalid pattern {:?}: {}", pattern, e);
            return None;
        }
    };
    match Pattern::new(&translated) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            warn!("ignoring invalid pattern {:?}: {}", pattern, e);
            None
        }
    }
}

fn translate(pattern: &str) -> Result<String, &'static str> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            // `glob` treats `**` as a recursive path wildcard and rejects it
            // inside a component
            '*' if out.ends_with('*') => {}
            '*' | '?' => out.push(c),
            '\\' => push_literal(&mut out, chars.next().ok_or("trailing backslash")?),
            '[' => {
                let negated = chars.next_if_eq(&'^').is_some();
                let mut ranges = Vec::new();
                loop {
                    if !ranges.is_empty() && chars.next_if_eq(&']').is_some() {
                        break;
                    }
                    let lo = class_char(&mut chars)?;
                    let hi = match chars.next_if_eq(&'-') {
                        Some(_) => class_char(&mut chars)?,
                        None => lo,
                    };
                    ranges.push((lo, hi));
                }
                let digits = ('0'..='9')
                    .filter(|d| ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(d)) != negated)
                    .collect::<String>();
                if digits.is_empty() {
                    // a single non-digit, which no code has
                    out.push_str("[!0-9]");
                } else {
                    out.push('[');
                    out.push_str(&digits);
                    out.push(']');
                }
            }
            _ => push_literal(&mut out, c),
        }
    }
    Ok(out)
}

/// Reads one member of a character class, resolving `\` escapes.
fn class_char(chars: &mut impl Iterator<Item = char>) -> Result<char, &'static str> {
    match chars.next() {
        None | Some('-') | Some(']') => Err("malformed character class"),
        Some('\\') => chars.next().ok_or("malformed character class"),
        Some(c) => Ok(c),
    }
}

fn push_literal(out: &mut String, c: char) {
    if matches!(c, '*' | '?' | '[' | ']') {
        out.push('[');
        out.push(c);
        out.push(']');
    } else {
        out.push(c);
    }
}

fn expand_number(number: &str) -> Vec<u16> {
    number
        .parse::<i64>()
        .ok()
        .and_then(|n| u16::try_from(n).ok())
        .filter(|&code| codes::reason(code).is_some())
        .into_iter()
        .collect()
}

fn expand_text(text: &str) -> Vec<u16> {
    let words = text
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();
    STATUS_CODES
        .iter()
        .copied()
        .filter(|&code| {
            let phrase = codes::reason(code).unwrap_or_default().to_lowercase();
            words.iter().any(|word| phrase.contains(word.as_str()))
        })
        .collect()
}

/// The outcome of resolving a list of terms.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Resolved {
    /// Every matched code, ascending, without duplicates.
    pub codes: Vec<u16>,
    /// How many terms matched nothing at all.
    pub not_found: usize,
}

/// Resolves each term in turn and merges the results.
///
/// A term counts as found when it expands to at least one code, even if every
/// one of those codes was already produced by an earlier term.
pub fn find_codes<S: AsRef<str>>(terms: &[S]) -> Resolved {
    let mut seen = HashSet::new();
    let mut resolved = Resolved::default();
    for term in terms {
        let term = Term::parse(term.as_ref());
        let expanded = term.expand();
        debug!("{:?} expanded to {} code(s)", term, expanded.len());
        if expanded.is_empty() {
            resolved.not_found += 1;
        }
        for code in expanded {
            if seen.insert(code) {
                resolved.codes.push(code);
            }
        }
    }
    resolved.codes.sort_unstable();
    resolved
}
