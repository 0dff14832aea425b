//! Class/modifier combination rules.
//!
//! Given base classes from a style operation and the modifiers in effect,
//! these functions produce the final list appended to a node. Two documented
//! strategies coexist:
//!
//! 1. [`combine`] - the *merged* strategy (default): keep the unscoped class
//!    as a baseline and add one prefixed copy per modifier, so one call sets
//!    an unconditional default and its per-state overrides.
//! 2. [`combine_separate`] - the *separate* strategy: only modifier-prefixed
//!    copies, used by concerns where an unscoped duplicate is not meaningful.
//!
//! [`scope`] is the scoped-once variant used by the declarative block
//! builder: one copy per base class carrying the whole modifier stack's
//! prefixes concatenated outer-to-inner.

use crate::modifier::Modifier;

/// Which combination rule a style operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Unscoped baseline plus one prefixed copy per modifier.
    #[default]
    Merged,
    /// One prefixed copy per modifier, no unscoped duplicate.
    Separate,
}

/// Merged-modifier combination.
///
/// Per base class: the unscoped class, then one prefixed copy per modifier
/// in the order given. One copy per distinct modifier - never a cross
/// product of all active modifiers.
///
/// ```
/// use crosswind::Modifier;
/// use crosswind::combine::combine;
///
/// let out = combine(&["p-4".into()], &[Modifier::Hover]);
/// assert_eq!(out, ["p-4", "hover:p-4"]);
/// ```
pub fn combine(classes: &[String], modifiers: &[Modifier]) -> Vec<String> {
    let mut out = Vec::with_capacity(classes.len() * (modifiers.len() + 1));
    for class in classes {
        out.push(class.clone());
        for modifier in modifiers {
            out.push(format!("{}{class}", modifier.prefix()));
        }
    }
    out
}

/// Separate-modifier combination: no unscoped duplicate.
///
/// With zero modifiers the base classes pass through unchanged, so an
/// unmodified call still emits its classes.
pub fn combine_separate(classes: &[String], modifiers: &[Modifier]) -> Vec<String> {
    if modifiers.is_empty() {
        return classes.to_vec();
    }
    let mut out = Vec::with_capacity(classes.len() * modifiers.len());
    for class in classes {
        for modifier in modifiers {
            out.push(format!("{}{class}", modifier.prefix()));
        }
    }
    out
}

/// Scoped-once combination for nested block scopes.
///
/// The whole stack becomes a single concatenated prefix, outer-to-inner
/// (`[Md, Hover]` scopes `p-4` to `md:hover:p-4`). No intermediate partial
/// prefixes are emitted. An empty stack passes the classes through.
pub fn scope(classes: &[String], stack: &[Modifier]) -> Vec<String> {
    if stack.is_empty() {
        return classes.to_vec();
    }
    let prefix: String = stack.iter().map(Modifier::prefix).collect();
    classes.iter().map(|class| format!("{prefix}{class}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_law() {
        let out = combine(&["p-4".into()], &[Modifier::Md, Modifier::Hover]);
        assert_eq!(out, ["p-4", "md:p-4", "hover:p-4"]);
    }

    #[test]
    fn test_merged_without_modifiers() {
        let out = combine(&["p-4".into()], &[]);
        assert_eq!(out, ["p-4"]);
    }

    #[test]
    fn test_separate_law() {
        let out = combine_separate(&["transition".into()], &[Modifier::Md, Modifier::Hover]);
        assert_eq!(out, ["md:transition", "hover:transition"]);
    }

    #[test]
    fn test_separate_without_modifiers_passes_through() {
        let out = combine_separate(&["transition".into()], &[]);
        assert_eq!(out, ["transition"]);
    }

    #[test]
    fn test_scope_concatenates_stack_in_order() {
        let out = scope(&["p-4".into()], &[Modifier::Md, Modifier::Hover]);
        assert_eq!(out, ["md:hover:p-4"]);
    }

    #[test]
    fn test_scope_empty_stack() {
        let out = scope(&["p-4".into(), "m-2".into()], &[]);
        assert_eq!(out, ["p-4", "m-2"]);
    }
}
