//! Keys to access rules stored in the [Horn database](crate::db::HornDB).

slotmap::new_key_type! {
    /// A key to a rule.
    ///
    /// Keys are stable for the life of a database, and are never shared between databases.
    pub struct RuleKey;
}
