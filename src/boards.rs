//! Ready-made boards, as the rows of tokens accepted by `Board::parse`.

/// A narrow bridge between a small and a large reward, flanked by cliffs.
pub const BRIDGE: &[&[&str]] = &[
    &["#", "-100", "-100", "-100", "-100", "-100", "#"],
    &["1", "S", " ", " ", " ", " ", "10"],
    &["#", "-100", "-100", "-100", "-100", "-100", "#"],
];

/// The 4x3 grid of Russell & Norvig, with the pit next to the goal.
pub const CLASSIC: &[&[&str]] = &[
    &[" ", " ", " ", "1"],
    &[" ", "#", " ", "-1"],
    &["S", " ", " ", " "],
];
