/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, at `debug` and `trace` levels for the steps of a method and at `warn` for behaviour a caller may not expect.

Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to reading [expressions](crate::structures::expression), clauses and problems.
    pub const PARSE: &str = "parse";

    /// Logs related to the [truth table](crate::procedures::truth_table) method.
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to [forward chaining](crate::procedures::forward).
    pub const FORWARD: &str = "forward";

    /// Logs related to [backward chaining](crate::procedures::backward).
    pub const BACKWARD: &str = "backward";

    /// Logs related to [DPLL](crate::procedures::dpll).
    pub const DPLL: &str = "dpll";

    /// Logs related to the [Horn database](crate::db).
    pub const HORN_DB: &str = "horn_db";
}
