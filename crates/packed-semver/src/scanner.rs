//! Byte-level scanning helpers shared by the version and constraint parsers.
//!
//! Every reader takes the input and a cursor and returns what it read along
//! with the cursor position right after it. Nothing here backtracks.

pub(crate) fn is_num(b: u8) -> bool {
    b.is_ascii_digit()
}

pub(crate) fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

pub(crate) fn is_dot(b: u8) -> bool {
    b == b'.'
}

pub(crate) fn is_dash(b: u8) -> bool {
    b == b'-'
}

pub(crate) fn is_plus(b: u8) -> bool {
    b == b'+'
}

/// `*`, `x` and `X` all stand for "any value" in a constraint component.
pub(crate) fn is_wildcard(b: u8) -> bool {
    b == b'*' || b == b'x' || b == b'X'
}

pub(crate) fn is_op_char(b: u8) -> bool {
    matches!(b, b'=' | b'<' | b'>' | b'^' | b'!' | b'~')
}

fn is_label_char(b: u8) -> bool {
    is_alpha(b) || is_num(b) || is_dot(b) || is_dash(b)
}

/// Skip spaces and `v` prefixes.
pub(crate) fn skip_leading(s: &[u8], i: usize) -> usize {
    let mut j = i;
    while j < s.len() && (s[j] == b' ' || s[j] == b'v') {
        j += 1;
    }
    j
}

pub(crate) fn skip_spaces(s: &[u8], i: usize) -> usize {
    let mut j = i;
    while j < s.len() && s[j] == b' ' {
        j += 1;
    }
    j
}

/// Read a run of decimal digits.
///
/// Returns `None` when there is no digit at `i` or when the run does not fit
/// in a `u64`.
pub(crate) fn read_num(s: &[u8], i: usize) -> Option<(u64, usize)> {
    let mut j = i;
    let mut value: u64 = 0;
    while j < s.len() && is_num(s[j]) {
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(s[j] - b'0'))?;
        j += 1;
    }
    if j == i {
        return None;
    }
    Some((value, j))
}

/// Read a prerelease or build label: alphanumerics, dots and dashes.
pub(crate) fn read_label(s: &str, i: usize) -> (&str, usize) {
    let bytes = s.as_bytes();
    let mut j = i;
    while j < bytes.len() && is_label_char(bytes[j]) {
        j += 1;
    }
    (&s[i..j], j)
}

/// Read the longest run of operator characters.
pub(crate) fn read_op(s: &str, i: usize) -> (&str, usize) {
    let bytes = s.as_bytes();
    let mut j = i;
    while j < bytes.len() && is_op_char(bytes[j]) {
        j += 1;
    }
    (&s[i..j], j)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(is_num(b'0') && is_num(b'9') && !is_num(b'a'));
        assert!(is_alpha(b'a') && is_alpha(b'Z') && !is_alpha(b'1'));
        assert!(is_wildcard(b'*') && is_wildcard(b'x') && is_wildcard(b'X'));
        assert!(!is_wildcard(b'y'));
        for b in b"=<>^!~" {
            assert!(is_op_char(*b));
        }
        assert!(!is_op_char(b'-'));
    }

    #[test]
    fn test_skip_leading() {
        assert_eq!(skip_leading(b"  v1.0", 0), 3);
        assert_eq!(skip_leading(b"1.0", 0), 0);
        assert_eq!(skip_leading(b"vv", 0), 2);
    }

    #[test]
    fn test_read_num() {
        assert_eq!(read_num(b"123.4", 0), Some((123, 3)));
        assert_eq!(read_num(b"1.24", 2), Some((24, 4)));
        assert_eq!(read_num(b".1", 0), None);
        assert_eq!(read_num(b"", 0), None);
        assert_eq!(read_num(b"99999999999999999999999", 0), None);
    }

    #[test]
    fn test_read_label() {
        assert_eq!(read_label("beta.2+build", 0), ("beta.2", 6));
        assert_eq!(read_label("rc-1 ", 0), ("rc-1", 4));
        assert_eq!(read_label("", 0), ("", 0));
    }

    #[test]
    fn test_read_op() {
        assert_eq!(read_op(">=1.0", 0), (">=", 2));
        assert_eq!(read_op("~>1", 0), ("~>", 2));
        assert_eq!(read_op("1.0", 0), ("", 0));
        assert_eq!(read_op("<>=1", 0), ("<>=", 3));
    }
}
