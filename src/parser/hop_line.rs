//! Single-line tokenizer for raw traceroute output.
//!
//! Raw trace text is irregular: variable spacing, optional hop numbers on
//! continuation lines, `*` placeholders for unanswered probes, and responder
//! pairs printed as either `name (address)` or `address (name)`. Instead of
//! one regex, we split on whitespace and apply typed extraction rules per
//! token.

use super::schema::Responder;
use log::debug;

/// Structured fields extracted from one physical line.
///
/// A fragment can carry any subset: a continuation line has no hop number,
/// an all-`*` line has neither responders nor latencies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineFragment {
    /// Hop number, if the line starts a new hop
    pub hop: Option<u32>,

    /// Hosts that answered on this line
    pub responders: Vec<Responder>,

    /// Round-trip times in milliseconds, one per answered probe
    pub latencies: Vec<f64>,
}

/// Tokenize one line of trace output into a [`LineFragment`]
///
/// **Public** - called per line by the run parser
///
/// Malformed tokens are skipped with a debug log; they never abort the line.
pub fn parse_line(line: &str) -> LineFragment {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut fragment = LineFragment::default();
    let mut index = 0;

    // A leading positive integer opens a new hop.
    if let Some(first) = tokens.first() {
        if let Some(hop) = parse_hop_number(first) {
            fragment.hop = Some(hop);
            index = 1;
        }
    }

    // Half-built responder pair; flushed when both sides are known
    // or at end of line.
    let mut pending_address: Option<String> = None;
    let mut pending_name: Option<String> = None;

    while index < tokens.len() {
        let token = tokens[index];

        // Non-response marker: contributes no latency, not an error.
        if token == "*" {
            index += 1;
            continue;
        }

        // Annotations like !H, !N, !X after a latency value.
        if token.starts_with('!') {
            index += 1;
            continue;
        }

        // "1.234 ms" (two tokens) or fused "1.234ms".
        if let Some((value, consumed)) = parse_latency(token, tokens.get(index + 1).copied()) {
            fragment.latencies.push(value);
            index += consumed;
            continue;
        }

        // A stray unit marker whose number failed to parse.
        if token == "ms" {
            index += 1;
            continue;
        }

        // Responder identity: parenthesized or bare, address or name,
        // in either order.
        if let Some(inner) = strip_parens(token) {
            if is_address(inner) {
                take_address(inner, &mut pending_address, &mut fragment.responders);
            } else {
                pending_name = Some(inner.to_string());
            }
        } else if is_address(token) {
            take_address(token, &mut pending_address, &mut fragment.responders);
        } else {
            // Bare word: a hostname candidate, or a malformed token we
            // cannot type. Either way it only survives if an address
            // shows up to pair with it.
            debug!("untyped token kept as name candidate: {:?}", token);
            pending_name = Some(token.to_string());
        }

        if let (Some(address), Some(name)) = (&pending_address, &pending_name) {
            fragment
                .responders
                .push(Responder::new(address.clone(), format!("({})", name)));
            pending_address = None;
            pending_name = None;
        }

        index += 1;
    }

    // An address with no symbolic name still identifies the responder;
    // a name with no address does not.
    if let Some(address) = pending_address {
        fragment.responders.push(placeholder_responder(&address));
    }

    fragment
}

/// Parse a leading hop number (positive integer)
///
/// **Private** - internal helper for parse_line
fn parse_hop_number(token: &str) -> Option<u32> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok().filter(|&hop| hop >= 1)
}

/// Parse a latency token, returning the value and tokens consumed
///
/// **Private** - internal helper for parse_line
///
/// Accepts `12.3` followed by `ms` (consumes 2) or fused `12.3ms`
/// (consumes 1). Rejects negative, NaN, and infinite values.
fn parse_latency(token: &str, next: Option<&str>) -> Option<(f64, usize)> {
    if let Some(number) = token.strip_suffix("ms") {
        if !number.is_empty() {
            if let Some(value) = parse_nonnegative(number) {
                return Some((value, 1));
            }
        }
        return None;
    }

    if matches!(next, Some("ms")) {
        if let Some(value) = parse_nonnegative(token) {
            return Some((value, 2));
        }
        debug!("ignoring malformed latency token: {:?}", token);
    }

    None
}

fn parse_nonnegative(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Record a bare address, flushing any previous unpaired one
///
/// **Private** - internal helper for parse_line
fn take_address(address: &str, pending: &mut Option<String>, responders: &mut Vec<Responder>) {
    if let Some(previous) = pending.take() {
        responders.push(placeholder_responder(&previous));
    }
    *pending = Some(address.to_string());
}

fn placeholder_responder(address: &str) -> Responder {
    Responder::new(address, format!("({})", address))
}

fn strip_parens(token: &str) -> Option<&str> {
    token
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .filter(|inner| !inner.is_empty())
}

/// Check whether a token looks like a numeric address (IPv4 or IPv6)
///
/// **Private** - internal helper for parse_line
fn is_address(token: &str) -> bool {
    is_ipv4(token) || is_ipv6(token)
}

fn is_ipv4(token: &str) -> bool {
    let parts: Vec<&str> = token.split('.').collect();
    parts.len() == 4 && parts.iter().all(|part| part.parse::<u8>().is_ok())
}

fn is_ipv6(token: &str) -> bool {
    token.contains(':')
        && token
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.')
}
