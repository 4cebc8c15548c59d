//! Text request parser.
//!
//! # Document format
//!
//! ```text
//! 3
//! Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
//! Stop Marushkino: 55.595884, 37.209755
//! Bus 750: Tolstopaltsevo - Marushkino
//! 2
//! Bus 750
//! Stop Marushkino
//! ```
//!
//! A count line, that many base requests, a second count line, that many
//! stat requests.  Blank lines are skipped everywhere.
//!
//! # Routes
//!
//! | Delimiter | Meaning                                  |
//! |-----------|------------------------------------------|
//! | `>`       | cyclic: the listed stops form a loop     |
//! | `-`       | linear: travelled there and back         |
//!
//! `>` wins if both appear.  Stop names are trimmed of surrounding spaces.

use std::io::BufRead;

use bn_core::BusId;

use crate::{BaseRequest, IoError, IoResult, RequestDocument, StatRequest};

const BUS: &str = "Bus";
const STOP: &str = "Stop";
const CYCLIC_DELIM: char = '>';
const LINEAR_DELIM: char = '-';
const DISTANCE_SEP: &str = "m to ";

// ── Public API ────────────────────────────────────────────────────────────────

/// Read a full request document from `reader`.
pub fn read_document<R: BufRead>(reader: R) -> IoResult<RequestDocument> {
    let mut lines = NumberedLines::new(reader);

    let base_count = read_count(&mut lines, "base request")?;
    let mut base = Vec::with_capacity(base_count);
    for _ in 0..base_count {
        let (no, line) = lines.require("base request")?;
        base.push(parse_base_request(no, &line)?);
    }

    let stat_count = read_count(&mut lines, "stat request")?;
    let mut stat = Vec::with_capacity(stat_count);
    for _ in 0..stat_count {
        let (no, line) = lines.require("stat request")?;
        stat.push(parse_stat_request(no, &line)?);
    }

    log::debug!("read {} base and {} stat requests", base.len(), stat.len());
    Ok(RequestDocument { base, stat })
}

/// Parse one `Stop …` or `Bus …` base request.  `line_no` is only used in
/// error messages.
pub fn parse_base_request(line_no: usize, line: &str) -> IoResult<BaseRequest> {
    let (kind, rest) = split_kind(line_no, line)?;
    let (head, body) = rest
        .split_once(':')
        .ok_or_else(|| IoError::parse(line_no, format!("expected ':' after {kind} name")))?;

    match kind {
        STOP => parse_stop(line_no, head.trim(), body),
        BUS => {
            let number = parse_bus_number(line_no, head)?;
            let (stops, cycled) = parse_route(line_no, body)?;
            Ok(BaseRequest::Bus { number, stops, cycled })
        }
        other => Err(IoError::parse(line_no, format!("unknown request kind {other:?}"))),
    }
}

/// Parse one `Bus <number>` or `Stop <name>` stat request.
pub fn parse_stat_request(line_no: usize, line: &str) -> IoResult<StatRequest> {
    let (kind, rest) = split_kind(line_no, line)?;
    match kind {
        BUS => Ok(StatRequest::Bus(parse_bus_number(line_no, rest)?)),
        STOP => {
            let name = rest.trim();
            if name.is_empty() {
                return Err(IoError::parse(line_no, "missing stop name"));
            }
            Ok(StatRequest::Stop(name.to_owned()))
        }
        other => Err(IoError::parse(line_no, format!("unknown search command {other:?}"))),
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn split_kind(line_no: usize, line: &str) -> IoResult<(&str, &str)> {
    let line = line.trim_start();
    match line.split_once(char::is_whitespace) {
        Some((kind, rest)) => Ok((kind, rest)),
        None => Err(IoError::parse(line_no, format!("malformed request {line:?}"))),
    }
}

fn parse_bus_number(line_no: usize, s: &str) -> IoResult<BusId> {
    let s = s.trim();
    s.parse::<u32>()
        .map(BusId)
        .map_err(|_| IoError::parse(line_no, format!("invalid bus number {s:?}")))
}

fn parse_stop(line_no: usize, name: &str, body: &str) -> IoResult<BaseRequest> {
    if name.is_empty() {
        return Err(IoError::parse(line_no, "missing stop name"));
    }

    let mut fields = body.split(',');
    let lat_deg = parse_coordinate(line_no, fields.next(), "latitude")?;
    let lon_deg = parse_coordinate(line_no, fields.next(), "longitude")?;

    let distances = fields
        .map(|field| parse_distance(line_no, field))
        .collect::<IoResult<Vec<_>>>()?;

    Ok(BaseRequest::Stop { name: name.to_owned(), lat_deg, lon_deg, distances })
}

fn parse_coordinate(line_no: usize, field: Option<&str>, what: &str) -> IoResult<f64> {
    let field = field
        .map(str::trim)
        .ok_or_else(|| IoError::parse(line_no, format!("missing {what}")))?;
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(IoError::parse(line_no, format!("invalid {what} {field:?}"))),
    }
}

/// `3900m to Marushkino` → `("Marushkino", 3900)`
fn parse_distance(line_no: usize, field: &str) -> IoResult<(String, u64)> {
    let field = field.trim();
    let (meters, to) = field.split_once(DISTANCE_SEP).ok_or_else(|| {
        IoError::parse(line_no, format!("expected \"<D>m to <stop>\", got {field:?}"))
    })?;
    let meters = meters
        .trim()
        .parse::<u64>()
        .map_err(|_| IoError::parse(line_no, format!("invalid distance {meters:?}")))?;
    let to = to.trim();
    if to.is_empty() {
        return Err(IoError::parse(line_no, "missing destination stop"));
    }
    Ok((to.to_owned(), meters))
}

fn parse_route(line_no: usize, body: &str) -> IoResult<(Vec<String>, bool)> {
    let cycled = body.contains(CYCLIC_DELIM);
    let delim = if cycled { CYCLIC_DELIM } else { LINEAR_DELIM };

    let stops: Vec<String> = body.split(delim).map(|s| s.trim().to_owned()).collect();
    if stops.iter().any(String::is_empty) {
        return Err(IoError::parse(line_no, format!("empty stop name in route {:?}", body.trim())));
    }
    Ok((stops, cycled))
}

fn read_count<R: BufRead>(lines: &mut NumberedLines<R>, what: &str) -> IoResult<usize> {
    let (no, line) = lines.require(what)?;
    line.trim()
        .parse::<usize>()
        .map_err(|_| IoError::parse(no, format!("expected {what} count, got {:?}", line.trim())))
}

/// Non-blank lines paired with 1-based line numbers.
struct NumberedLines<R> {
    inner: std::io::Lines<R>,
    no:    usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self { inner: reader.lines(), no: 0 }
    }

    fn require(&mut self, what: &str) -> IoResult<(usize, String)> {
        for line in self.inner.by_ref() {
            let line = line?;
            self.no += 1;
            if !line.trim().is_empty() {
                return Ok((self.no, line));
            }
        }
        Err(IoError::parse(self.no, format!("unexpected end of input, expected {what}")))
    }
}
