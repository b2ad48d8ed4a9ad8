/// Whole units of stored value. Signed: balances may go negative.
pub type Amount = i32;

/// Academic credit units of a course.
pub type Credits = u32;

/// Identifies one offering of a course. Not restricted to positive numbers.
pub type Section = i32;
