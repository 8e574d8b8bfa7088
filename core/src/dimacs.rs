//! Hand-written scanner for the two DIMACS-style input formats: `p ocr` for
//! one-sided crossing minimization and `p tww` for twin-width. The format
//! is regular enough that no parser-combinator crate is warranted; errors
//! carry enough location context to render a caret line the same way the
//! rest of the crate's diagnostics do.

use crate::error::{Location, ParseError};
use crate::graph::Graph;
use crate::tree_shortcut::UndirectedGraph;

pub enum Instance {
    Ocm { n_a: usize, n_b: usize, graph: Graph },
    Tww { n: usize, graph: UndirectedGraph },
}

struct Lines<'a> {
    raw: Vec<&'a str>,
    next: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Lines {
            raw: input.lines().collect(),
            next: 0,
        }
    }

    /// Next non-comment, non-blank line, or `None` at end of input.
    fn next_content_line(&mut self) -> Option<(usize, &'a str)> {
        while self.next < self.raw.len() {
            let idx = self.next;
            self.next += 1;
            let line = self.raw[idx];
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('c') {
                continue;
            }
            return Some((idx, line));
        }
        None
    }

    fn err_at(&self, line: usize, message: impl Into<String>) -> ParseError {
        let source = self.raw.get(line).copied().unwrap_or("").to_string();
        ParseError {
            at: Location {
                line,
                col: 0,
                source,
            },
            message: message.into(),
        }
    }
}

fn parse_usize(lines: &Lines, line: usize, tok: &str) -> Result<usize, ParseError> {
    tok.parse::<usize>()
        .map_err(|_| lines.err_at(line, format!("expected a non-negative integer, got `{tok}`")))
}

/// Parses a full DIMACS file, dispatching on the `p` line's problem tag.
pub fn parse(input: &str) -> Result<Instance, ParseError> {
    let mut lines = Lines::new(input);
    let (header_line, header) = lines.next_content_line().ok_or_else(|| ParseError {
        at: Location {
            line: 0,
            col: 0,
            source: String::new(),
        },
        message: "empty input: expected a `p` header line".into(),
    })?;

    let tokens: Vec<&str> = header.split_whitespace().collect();
    if tokens.first() != Some(&"p") {
        return Err(lines.err_at(header_line, "expected header line to start with `p`"));
    }

    match tokens.get(1) {
        Some(&"ocr") => parse_ocr(&mut lines, header_line, &tokens),
        Some(&"tww") => parse_tww(&mut lines, header_line, &tokens),
        Some(other) => Err(lines.err_at(
            header_line,
            format!("unknown problem tag `{other}`, expected `ocr` or `tww`"),
        )),
        None => Err(lines.err_at(header_line, "missing problem tag after `p`")),
    }
}

fn parse_ocr(
    lines: &mut Lines,
    header_line: usize,
    tokens: &[&str],
) -> Result<Instance, ParseError> {
    if tokens.len() < 5 {
        return Err(lines.err_at(header_line, "expected `p ocr n_a n_b m [cutwidth]`"));
    }
    let n_a = parse_usize(lines, header_line, tokens[2])?;
    let n_b = parse_usize(lines, header_line, tokens[3])?;
    let m = parse_usize(lines, header_line, tokens[4])?;
    let has_cutwidth = tokens.len() > 5;

    if has_cutwidth {
        for _ in 0..(n_a + n_b) {
            lines
                .next_content_line()
                .ok_or_else(|| lines.err_at(header_line, "expected more cutwidth ordering lines"))?;
        }
    }

    let mut edges = Vec::with_capacity(m);
    for _ in 0..m {
        let (line_idx, line) = lines
            .next_content_line()
            .ok_or_else(|| lines.err_at(header_line, "expected more edge lines"))?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(lines.err_at(line_idx, "expected exactly two vertex ids per edge line"));
        }
        let a = parse_usize(lines, line_idx, parts[0])?;
        let b = parse_usize(lines, line_idx, parts[1])?;
        if a < 1 || a > n_a {
            return Err(lines.err_at(line_idx, format!("A-vertex id {a} out of range 1..={n_a}")));
        }
        if b < n_a + 1 || b > n_a + n_b {
            return Err(lines.err_at(
                line_idx,
                format!("B-vertex id {b} out of range {}..={}", n_a + 1, n_a + n_b),
            ));
        }
        edges.push((a - 1, b - n_a - 1));
    }

    Ok(Instance::Ocm {
        n_a,
        n_b,
        graph: Graph::new(n_a, n_b, &edges),
    })
}

fn parse_tww(
    lines: &mut Lines,
    header_line: usize,
    tokens: &[&str],
) -> Result<Instance, ParseError> {
    if tokens.len() < 4 {
        return Err(lines.err_at(header_line, "expected `p tww n m`"));
    }
    let n = parse_usize(lines, header_line, tokens[2])?;
    let m = parse_usize(lines, header_line, tokens[3])?;

    let mut edges = Vec::with_capacity(m);
    for _ in 0..m {
        let (line_idx, line) = lines
            .next_content_line()
            .ok_or_else(|| lines.err_at(header_line, "expected more edge lines"))?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(lines.err_at(line_idx, "expected exactly two vertex ids per edge line"));
        }
        let u = parse_usize(lines, line_idx, parts[0])?;
        let v = parse_usize(lines, line_idx, parts[1])?;
        if u < 1 || u > n || v < 1 || v > n {
            return Err(lines.err_at(line_idx, format!("vertex id out of range 1..={n}")));
        }
        edges.push((u - 1, v - 1));
    }

    Ok(Instance::Tww {
        n,
        graph: UndirectedGraph::new(n, &edges),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ocr_scenario_one() {
        let input = "p ocr 2 2 2\n1 3\n2 4\n";
        let instance = parse(input).unwrap();
        match instance {
            Instance::Ocm { n_a, n_b, graph } => {
                assert_eq!(n_a, 2);
                assert_eq!(n_b, 2);
                assert_eq!(graph.n_a(), 2);
            }
            _ => panic!("expected an OCM instance"),
        }
    }

    #[test]
    fn parses_tww_triangle() {
        let input = "c a comment\np tww 3 3\n1 2\n2 3\n1 3\n";
        let instance = parse(input).unwrap();
        match instance {
            Instance::Tww { n, graph } => {
                assert_eq!(n, 3);
                assert_eq!(graph.degree(0), 2);
            }
            _ => panic!("expected a TWW instance"),
        }
    }

    #[test]
    fn out_of_range_vertex_is_a_parse_error() {
        let input = "p ocr 2 2 1\n5 3\n";
        assert!(parse(input).is_err());
    }

    #[test]
    fn unknown_tag_is_a_parse_error() {
        let input = "p wat 1 2 3\n";
        assert!(parse(input).is_err());
    }
}
