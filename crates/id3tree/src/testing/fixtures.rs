//! Small hand-written datasets with known trees.

use crate::data::Dataset;

fn dataset<const N: usize>(headers: [&str; N], rows: &[[&str; N]]) -> Dataset {
    Dataset::new(headers, rows.iter().copied()).expect("fixture is well formed")
}

/// Four rows, perfectly separated by `Weather`.
///
/// Tree: `Weather` → `Overcast: Yes`, `Rain: Yes`, `Sunny: No`.
pub fn weather() -> Dataset {
    dataset(
        ["Weather", "Outlook", "Play"],
        &[
            ["Sunny", "Hot", "No"],
            ["Sunny", "Hot", "No"],
            ["Overcast", "Hot", "Yes"],
            ["Rain", "Mild", "Yes"],
        ],
    )
}

/// `Sunny,Hot` is observed with both `No` (lines 3 and 6) and `Yes` (line 4).
///
/// The root splits on `Weather`; the `Sunny` branch is a conflict leaf.
pub fn conflicting_weather() -> Dataset {
    dataset(
        ["Weather", "Outlook", "Play"],
        &[
            ["Rain", "Mild", "Yes"],
            ["Sunny", "Hot", "No"],
            ["Sunny", "Hot", "Yes"],
            ["Overcast", "Hot", "Yes"],
            ["Sunny", "Hot", "No"],
        ],
    )
}

/// Quinlan's play-tennis table (14 rows, 9 yes / 5 no).
pub fn play_tennis() -> Dataset {
    dataset(
        ["Outlook", "Temperature", "Humidity", "Wind", "PlayTennis"],
        &[
            ["Sunny", "Hot", "High", "Weak", "No"],
            ["Sunny", "Hot", "High", "Strong", "No"],
            ["Overcast", "Hot", "High", "Weak", "Yes"],
            ["Rain", "Mild", "High", "Weak", "Yes"],
            ["Rain", "Cool", "Normal", "Weak", "Yes"],
            ["Rain", "Cool", "Normal", "Strong", "No"],
            ["Overcast", "Cool", "Normal", "Strong", "Yes"],
            ["Sunny", "Mild", "High", "Weak", "No"],
            ["Sunny", "Cool", "Normal", "Weak", "Yes"],
            ["Rain", "Mild", "Normal", "Weak", "Yes"],
            ["Sunny", "Mild", "Normal", "Strong", "Yes"],
            ["Overcast", "Mild", "High", "Strong", "Yes"],
            ["Overcast", "Hot", "Normal", "Weak", "Yes"],
            ["Rain", "Mild", "High", "Strong", "No"],
        ],
    )
}

/// Two-bit XOR. Neither attribute has gain at the root.
pub fn xor() -> Dataset {
    dataset(
        ["A", "B", "Out"],
        &[["0", "0", "0"], ["0", "1", "1"], ["1", "0", "1"], ["1", "1", "0"]],
    )
}
