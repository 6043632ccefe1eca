// Reading one integer from a byte stream
//
// Leading whitespace is skipped, the first whitespace-delimited token is
// parsed, the rest of the stream is left unread.

use crate::error::ScanError;
use std::io::{self, BufRead};

/// Longest token read before giving up. A binary `i64::MIN` with a `_`
/// between every digit is 130 bytes.
pub const MAX_TOKEN_LEN: usize = 256;

pub fn scan_i64(mut reader: impl BufRead) -> Result<i64, ScanError> {
    let token = next_token(&mut reader)?.ok_or(ScanError::Empty)?;
    parse_i64(&token)
}

fn next_token<R: BufRead>(reader: &mut R) -> Result<Option<String>, ScanError> {
    let mut token = Vec::new();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut finished = false;
        let mut overlong = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    finished = true;
                    break;
                }
            } else if token.len() == MAX_TOKEN_LEN {
                overlong = true;
                break;
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);

        if overlong {
            let head = String::from_utf8_lossy(&token[..16]).into_owned();
            return Err(ScanError::invalid(
                format!("{head}..."),
                format!("token longer than {MAX_TOKEN_LEN} bytes"),
            ));
        }

        if finished {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

/// Parses `[+-](0b|0o|0x)?digits`, with single `_` separators between digits.
pub fn parse_i64(token: &str) -> Result<i64, ScanError> {
    let (negative, unsigned) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let (radix, digits) = split_radix(unsigned);
    let digits = strip_separators(digits, radix != 10)
        .ok_or_else(|| ScanError::invalid(token, "misplaced '_' separator"))?;

    if digits.is_empty() {
        return Err(ScanError::invalid(token, "missing digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ScanError::invalid(token, "invalid digit found in string"));
    }

    let signed = if negative { format!("-{digits}") } else { digits };
    i64::from_str_radix(&signed, radix).map_err(|err| ScanError::invalid(token, err.to_string()))
}

fn split_radix(unsigned: &str) -> (u32, &str) {
    let bytes = unsigned.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (10, unsigned);
    }
    match bytes[1] {
        b'b' | b'B' => (2, &unsigned[2..]),
        b'o' | b'O' => (8, &unsigned[2..]),
        b'x' | b'X' => (16, &unsigned[2..]),
        _ => (10, unsigned),
    }
}

fn strip_separators(digits: &str, prefixed: bool) -> Option<String> {
    if digits.ends_with('_') || digits.contains("__") || (!prefixed && digits.starts_with('_')) {
        return None;
    }
    Some(digits.replace('_', ""))
}
