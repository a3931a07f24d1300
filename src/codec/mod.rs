//! Level serialization
//!
//! Two plain-text wire formats, both carrying the flat 576-tile sequence in
//! board order:
//!
//! - **Line format**: one registry code per line, newline after every entry.
//!   Decoding is lenient: unknown tokens become empty tiles, short input is
//!   padded, excess lines are dropped.
//! - **Array format**: the legacy dev export. Eighteen array-literal
//!   assignment lines, each carrying the level identifier and one row of
//!   tokens. Decoding is strict - any malformed row or token fails the
//!   whole parse.
//!
//! `decode_any` walks an ordered candidate list (line format first) and
//! fails with `UnrecognizedFormat` if no candidate accepts the input, so an
//! import either replaces the whole board or touches nothing.

use crate::board::{Block, HEIGHT, TILE_COUNT, WIDTH};

/// Structural marker opening every array-format line
const ARRAY_MARKER: &str = "levelArray[";

/// The two wire formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFormat {
    Lines,
    Array,
}

/// Error type for decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input matched neither format; the board must stay untouched
    UnrecognizedFormat,
    /// An array line did not parse as `levelArray[id][row] = [...];`
    BadArrayRow { line: usize },
    /// A token outside the registry in the (strict) array format
    BadToken { token: String },
    /// Array input did not contain exactly one row per board row
    WrongRowCount(usize),
    /// An array row held the wrong number of tokens
    WrongColumnCount { row: usize, count: usize },
    /// Rows disagreed about the level identifier
    MismatchedLevelId,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::UnrecognizedFormat => write!(f, "unrecognized level format"),
            DecodeError::BadArrayRow { line } => {
                write!(f, "malformed array row at line {}", line + 1)
            }
            DecodeError::BadToken { token } => write!(f, "unknown block token '{}'", token),
            DecodeError::WrongRowCount(n) => {
                write!(f, "expected {} array rows, found {}", HEIGHT, n)
            }
            DecodeError::WrongColumnCount { row, count } => {
                write!(f, "row {} holds {} tokens, expected {}", row, count, WIDTH)
            }
            DecodeError::MismatchedLevelId => write!(f, "rows disagree about the level id"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result of a successful format-sniffing decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLevel {
    pub blocks: Vec<Block>,
    pub format: LevelFormat,
    /// Level identifier, present only for the array format
    pub level: Option<String>,
}

// ---------------------------------------------------------------------------
// Line format
// ---------------------------------------------------------------------------

/// Encode to the line format: one code per line, trailing newline included.
///
/// Deterministic: byte-identical output for identical input. Notes degrade
/// to the bare `N0` marker here (their text does not fit on a single
/// token); this asymmetry with the array format is long-standing observed
/// behavior and is kept.
pub fn encode_lines(blocks: &[Block]) -> String {
    let mut out = String::with_capacity(blocks.len() * 3);
    for block in blocks {
        out.push_str(block.code());
        out.push('\n');
    }
    out
}

/// Decode the line format, leniently.
///
/// Unknown tokens decode as empty tiles, missing trailing lines are padded
/// with empties, excess lines are ignored. Never fails.
pub fn decode_lines(data: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = data
        .lines()
        .take(TILE_COUNT)
        .map(|line| Block::from_code(line.trim()).unwrap_or(Block::Empty))
        .collect();
    blocks.resize(TILE_COUNT, Block::Empty);
    blocks
}

// ---------------------------------------------------------------------------
// Array format
// ---------------------------------------------------------------------------

/// Encode to the array format, one assignment line per board row.
///
/// Notes keep their text here, as a quoted `"Note:<text>"` token.
pub fn encode_array(level: &str, blocks: &[Block]) -> String {
    let mut out = String::new();
    for (row, chunk) in blocks.chunks(WIDTH).enumerate() {
        out.push_str("levelArray[");
        out.push_str(level);
        out.push_str("][");
        out.push_str(&row.to_string());
        out.push_str("] = [");
        for (i, block) in chunk.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match block {
                Block::Note { text } => {
                    out.push('"');
                    out.push_str("Note:");
                    out.push_str(text);
                    out.push('"');
                }
                block => out.push_str(block.code()),
            }
        }
        out.push_str("];\n");
    }
    out
}

/// Decode the array format, strictly. Returns the level identifier and the
/// full tile sequence, or the first error encountered.
pub fn decode_array(data: &str) -> Result<(String, Vec<Block>), DecodeError> {
    let mut level: Option<String> = None;
    let mut blocks = Vec::with_capacity(TILE_COUNT);
    let mut row_count = 0usize;

    for (line_no, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (id, row, tokens) = parse_array_line(line, line_no)?;
        if row != row_count {
            return Err(DecodeError::BadArrayRow { line: line_no });
        }
        match &level {
            None => level = Some(id),
            Some(known) if *known == id => {}
            Some(_) => return Err(DecodeError::MismatchedLevelId),
        }
        if tokens.len() != WIDTH {
            return Err(DecodeError::WrongColumnCount {
                row,
                count: tokens.len(),
            });
        }
        for token in &tokens {
            blocks.push(parse_array_token(token)?);
        }
        row_count += 1;
    }

    if row_count != HEIGHT {
        return Err(DecodeError::WrongRowCount(row_count));
    }
    let level = level.ok_or(DecodeError::WrongRowCount(0))?;
    Ok((level, blocks))
}

/// Split one `levelArray[id][row] = [...];` line into its parts
fn parse_array_line(
    line: &str,
    line_no: usize,
) -> Result<(String, usize, Vec<String>), DecodeError> {
    let bad = || DecodeError::BadArrayRow { line: line_no };

    let rest = line.strip_prefix(ARRAY_MARKER).ok_or_else(bad)?;
    let (id, rest) = rest.split_once("][").ok_or_else(bad)?;
    let (row, rest) = rest.split_once(']').ok_or_else(bad)?;
    let row: usize = row.trim().parse().map_err(|_| bad())?;

    let body = rest
        .trim_start()
        .strip_prefix('=')
        .map(str::trim_start)
        .and_then(|s| s.strip_prefix('['))
        .ok_or_else(bad)?;
    let body = body
        .trim_end()
        .strip_suffix(';')
        .unwrap_or(body)
        .trim_end()
        .strip_suffix(']')
        .ok_or_else(bad)?;

    Ok((id.trim().to_string(), row, split_row_tokens(body)))
}

/// Split a row body on commas, honoring quoted tokens (note text may
/// contain commas). Surrounding quotes are stripped.
fn split_row_tokens(body: &str) -> Vec<String> {
    let mut tokens = Vec::with_capacity(WIDTH);
    let mut current = String::new();
    let mut in_quotes = false;

    for c in body.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                tokens.push(current.trim().to_string());
                current.clear();
            }
            c => current.push(c),
        }
    }
    if !current.trim().is_empty() || !tokens.is_empty() {
        tokens.push(current.trim().to_string());
    }
    tokens
}

fn parse_array_token(token: &str) -> Result<Block, DecodeError> {
    if let Some(text) = token.strip_prefix("Note:") {
        return Ok(Block::Note {
            text: text.to_string(),
        });
    }
    Block::from_code(token).ok_or_else(|| DecodeError::BadToken {
        token: token.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Format sniffing
// ---------------------------------------------------------------------------

/// Try the line format: accepted only when the input has exactly one line
/// per tile and no array marker anywhere.
fn try_lines(data: &str) -> Option<DecodedLevel> {
    if data.contains(ARRAY_MARKER) {
        return None;
    }
    if data.lines().count() != TILE_COUNT {
        return None;
    }
    Some(DecodedLevel {
        blocks: decode_lines(data),
        format: LevelFormat::Lines,
        level: None,
    })
}

fn try_array(data: &str) -> Option<DecodedLevel> {
    let (level, blocks) = decode_array(data).ok()?;
    Some(DecodedLevel {
        blocks,
        format: LevelFormat::Array,
        level: Some(level),
    })
}

/// Decode input of unknown format.
///
/// Candidates are tried in a fixed order, first success wins. Both failing
/// is `UnrecognizedFormat`; nothing is partially decoded.
pub fn decode_any(data: &str) -> Result<DecodedLevel, DecodeError> {
    let candidates: [fn(&str) -> Option<DecodedLevel>; 2] = [try_lines, try_array];
    candidates
        .iter()
        .find_map(|candidate| candidate(data))
        .ok_or(DecodeError::UnrecognizedFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    fn sample_blocks() -> Vec<Block> {
        let mut blocks = vec![Block::Empty; TILE_COUNT];
        blocks[0] = Block::Brick;
        blocks[1] = Block::Spawn;
        blocks[WIDTH] = Block::OneWay(Direction::Left);
        blocks[TILE_COUNT - 1] = Block::Exit;
        blocks
    }

    #[test]
    fn test_lines_round_trip() {
        let blocks = sample_blocks();
        let encoded = encode_lines(&blocks);
        assert_eq!(encoded.lines().count(), TILE_COUNT);
        assert!(encoded.ends_with('\n'));
        assert_eq!(decode_lines(&encoded), blocks);
    }

    #[test]
    fn test_lines_encode_deterministic() {
        let blocks = sample_blocks();
        assert_eq!(encode_lines(&blocks), encode_lines(&blocks));
    }

    #[test]
    fn test_lines_decode_lenient() {
        // Unknown tokens become empty, missing lines are padded
        let decoded = decode_lines("B0\nZZ\n!!bad\nE0\n");
        assert_eq!(decoded.len(), TILE_COUNT);
        assert_eq!(decoded[0], Block::Brick);
        assert_eq!(decoded[1], Block::Empty);
        assert_eq!(decoded[2], Block::Empty);
        assert_eq!(decoded[3], Block::Exit);
        assert!(decoded[4..].iter().all(Block::is_empty));
    }

    #[test]
    fn test_lines_decode_ignores_excess() {
        let mut data = encode_lines(&sample_blocks());
        data.push_str("B0\nB0\n");
        assert_eq!(decode_lines(&data), sample_blocks());
    }

    #[test]
    fn test_lines_note_degrades() {
        let mut blocks = vec![Block::Empty; TILE_COUNT];
        blocks[5] = Block::Note {
            text: "secret passage".to_string(),
        };
        let decoded = decode_lines(&encode_lines(&blocks));
        assert_eq!(
            decoded[5],
            Block::Note {
                text: String::new()
            }
        );
    }

    #[test]
    fn test_array_round_trip() {
        let blocks = sample_blocks();
        let encoded = encode_array("12", &blocks);
        let (level, decoded) = decode_array(&encoded).unwrap();
        assert_eq!(level, "12");
        assert_eq!(decoded, blocks);
    }

    #[test]
    fn test_array_round_trip_with_note() {
        let mut blocks = sample_blocks();
        // Commas in note text must survive the quoted token path
        blocks[40] = Block::Note {
            text: "up, up, and away".to_string(),
        };
        let encoded = encode_array("7", &blocks);
        let (_, decoded) = decode_array(&encoded).unwrap();
        assert_eq!(decoded, blocks);
    }

    #[test]
    fn test_array_rejects_unknown_token() {
        let mut encoded = encode_array("3", &sample_blocks());
        encoded = encoded.replacen("B0", "QQ", 1);
        assert_eq!(
            decode_array(&encoded),
            Err(DecodeError::BadToken {
                token: "QQ".to_string()
            })
        );
    }

    #[test]
    fn test_array_rejects_short_input() {
        let encoded = encode_array("3", &sample_blocks());
        let truncated: String = encoded.lines().take(5).map(|l| format!("{}\n", l)).collect();
        assert_eq!(decode_array(&truncated), Err(DecodeError::WrongRowCount(5)));
    }

    #[test]
    fn test_array_rejects_mismatched_id() {
        let encoded = encode_array("3", &sample_blocks());
        let mangled = encoded.replacen("levelArray[3]", "levelArray[4]", 1);
        assert_eq!(decode_array(&mangled), Err(DecodeError::MismatchedLevelId));
    }

    #[test]
    fn test_array_rejects_wrong_column_count() {
        let encoded = encode_array("3", &sample_blocks());
        let mangled = encoded.replacen("B0, ", "", 1);
        assert_eq!(
            decode_array(&mangled),
            Err(DecodeError::WrongColumnCount {
                row: 0,
                count: WIDTH - 1
            })
        );
    }

    #[test]
    fn test_decode_any_prefers_lines() {
        let blocks = sample_blocks();
        let decoded = decode_any(&encode_lines(&blocks)).unwrap();
        assert_eq!(decoded.format, LevelFormat::Lines);
        assert_eq!(decoded.blocks, blocks);
        assert_eq!(decoded.level, None);
    }

    #[test]
    fn test_decode_any_falls_back_to_array() {
        let blocks = sample_blocks();
        let decoded = decode_any(&encode_array("9", &blocks)).unwrap();
        assert_eq!(decoded.format, LevelFormat::Array);
        assert_eq!(decoded.blocks, blocks);
        assert_eq!(decoded.level, Some("9".to_string()));
    }

    #[test]
    fn test_decode_any_rejects_garbage() {
        assert_eq!(decode_any(""), Err(DecodeError::UnrecognizedFormat));
        assert_eq!(
            decode_any("this is not a level"),
            Err(DecodeError::UnrecognizedFormat)
        );
        // Right shape for neither format: too few lines, no marker
        assert_eq!(
            decode_any("B0\n00\nE0\n"),
            Err(DecodeError::UnrecognizedFormat)
        );
    }

    #[test]
    fn test_decode_any_rejects_broken_array() {
        // Array marker present but malformed: must not fall through to the
        // lenient line decoder
        let data = "levelArray[1][0] = [B0";
        assert_eq!(decode_any(data), Err(DecodeError::UnrecognizedFormat));
    }
}
