use crate::engine::{State, BLANK, CELL_COUNT, GRID_SIZE};

/// Parses an array of string slices into a puzzle [`State`].
///
/// Each string slice is one row, top to bottom; exactly `GRID_SIZE` rows
/// of `GRID_SIZE` characters are required. Valid characters are the
/// digits `'1'`–`'8'` for tiles and `'0'` or `'_'` for the blank. The
/// parser rejects duplicate values; since all nine cells must be filled
/// with distinct values from a nine-value alphabet, every value is
/// guaranteed present when parsing succeeds — the result is always a
/// valid permutation state.
///
/// # Arguments
/// * `rows`: A slice of string slices (`&[&str]`), one per board row.
///
/// # Returns
/// * `Ok(State)` if parsing succeeds.
/// * `Err(String)` if the row count or a row length is wrong, a
///   character is unrecognized, or a value appears twice.
///
/// # Examples
/// ```
/// use slidestar_solver::utils::state_from_str_rows;
///
/// let state = state_from_str_rows(&["_13", "826", "754"]).unwrap();
/// assert_eq!(state.blank_position(), (0, 0));
/// assert_eq!(state.get(1, 0), 8);
///
/// assert!(state_from_str_rows(&["113", "826", "754"]).is_err());
/// assert!(state_from_str_rows(&["_13", "826"]).is_err());
/// ```
pub fn state_from_str_rows(rows: &[&str]) -> Result<State, String> {
    if rows.len() != GRID_SIZE {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            GRID_SIZE,
            rows.len()
        ));
    }

    let mut cells = [BLANK; CELL_COUNT];
    let mut seen = [false; CELL_COUNT];

    for (r, row_str) in rows.iter().enumerate() {
        if row_str.chars().count() != GRID_SIZE {
            return Err(format!(
                "Row {} has {} cells (expected {})",
                r,
                row_str.chars().count(),
                GRID_SIZE
            ));
        }

        for (c, char_cell) in row_str.chars().enumerate() {
            let value = match char_cell {
                '_' => BLANK,
                '0'..='8' => char_cell as u8 - b'0',
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        char_cell, r, c
                    ))
                }
            };

            if seen[value as usize] {
                return Err(format!(
                    "Value {} appears more than once (row {} col {})",
                    value, r, c
                ));
            }
            seen[value as usize] = true;
            cells[r * GRID_SIZE + c] = value;
        }
    }

    Ok(State::new(cells))
}
