//! QWERTY key proximity, used to turn typed text into alternatives.

use suggest_core::InputCodes;

const ROWS: [&[u8]; 3] = [b"qwertyuiop", b"asdfghjkl", b"zxcvbnm"];

fn position(key: u8) -> Option<(usize, usize)> {
    ROWS.iter()
        .enumerate()
        .find_map(|(row, keys)| keys.iter().position(|&k| k == key).map(|col| (row, col)))
}

/// Keys touching `c` on a staggered QWERTY layout: same row first, then the
/// row above, then the row below. Empty for keys off the letter block.
pub fn neighbors(c: char) -> Vec<char> {
    let Some((row, col)) = u8::try_from(c.to_ascii_lowercase())
        .ok()
        .and_then(position)
    else {
        return Vec::new();
    };

    let mut keys = Vec::new();
    let mut take = |row: usize, cols: [Option<usize>; 2]| {
        for col in cols.into_iter().flatten() {
            if let Some(&key) = ROWS[row].get(col) {
                keys.push(key as char);
            }
        }
    };
    take(row, [col.checked_sub(1), Some(col + 1)]);
    if row > 0 {
        take(row - 1, [Some(col), Some(col + 1)]);
    }
    if row + 1 < ROWS.len() {
        take(row + 1, [col.checked_sub(1), Some(col)]);
    }
    keys
}

/// One position per typed character: the character itself, then its
/// neighbors, cut at `max_alternatives`.
pub fn input_for(typed: &str, max_alternatives: usize) -> InputCodes {
    let mut input = InputCodes::new(max_alternatives);
    let mut units = [0u16; 2];
    for c in typed.chars() {
        let encoded = c.encode_utf16(&mut units);
        if encoded.len() > 1 {
            for &unit in encoded.iter() {
                input.push(&[unit]);
            }
            continue;
        }
        let mut alternatives = vec![encoded[0]];
        alternatives.extend(neighbors(c).into_iter().map(|n| n as u16));
        input.push(&alternatives);
    }
    input
}
