//! Bisection search over a monotone table.
//!
//! [`find_bin`] locates the bracketing interval of a query value in an ordered slice,
//! for either increasing or decreasing sequences. The direction is inferred from the
//! two end points only; the interior is trusted to be monotone.

/// Position of a query value relative to a monotone table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// At or before the first element (in the direction of the table).
    Below,
    /// Strictly inside the table: `list[b-1] <= y < list[b]` for increasing tables,
    /// `1 <= b <= len - 1`.
    Within(usize),
    /// At or beyond the last element.
    Above,
}

impl Bracket {
    /// Integer form of the bracket for a table of length `len`.
    ///
    /// `Below` maps to `-1`, `Above` maps to `len`, and `Within(b)` maps to `b`,
    /// so that the result always lies in `-1..=len`.
    pub fn index(&self, len: usize) -> isize {
        match self {
            Bracket::Below => -1,
            Bracket::Within(b) => *b as isize,
            Bracket::Above => len as isize,
        }
    }
}

/// Find the right end `b` of the interval of `list` that brackets `y`.
///
/// Arguments
/// -----------------
/// * `list`: a monotone sequence (increasing or decreasing) of length ≥ 2.
/// * `y`: the query value.
///
/// Return
/// ----------
/// * [`Bracket::Below`] if `y` is at or before `list[0]`,
/// * [`Bracket::Above`] if `y` is at or beyond the last element,
/// * [`Bracket::Within(b)`](Bracket::Within) otherwise, with `list[b-1] <= y <= list[b]`
///   (reversed for decreasing lists).
///
/// Note
/// ----------
/// * A two-element list with equal values is treated as decreasing, so every query falls
///   into one of the two out-of-range branches.
/// * An empty list is reported as `Above`.
pub fn find_bin(list: &[f64], y: f64) -> Bracket {
    let (Some(&first), Some(&last)) = (list.first(), list.last()) else {
        return Bracket::Above;
    };

    let s = if first >= last { -1.0 } else { 1.0 };

    if s * y <= s * first {
        return Bracket::Below;
    }
    if s * y >= s * last {
        return Bracket::Above;
    }

    let mut up = list.len() - 1;
    let mut low = 0;
    while up - low > 1 {
        let b = (low + up) / 2;
        if s * y < s * list[b] {
            up = b;
        } else {
            low = b;
        }
    }
    Bracket::Within(up)
}
