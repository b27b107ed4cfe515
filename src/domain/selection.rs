/// A category's current pick plus its lock flag.
///
/// `value` is either `None` or a member of the owning category's option
/// list; the store is the only mutator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub value: Option<String>,
    pub locked: bool,
}
