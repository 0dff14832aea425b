//! Scoping qualifiers and their selector-prefix serialization.
//!
//! A [`Modifier`] restricts when a utility class applies. The vocabulary is
//! partitioned into two families:
//!
//! - **State modifiers**: pseudo-class states (`hover`, `focus`, `disabled`)
//!   and ARIA states (`aria-required`, `aria-selected`)
//! - **Breakpoint modifiers**: an ordered ladder of minimum-width thresholds
//!   (`sm` through `2xl`)
//!
//! Breakpoints carry a total order used for documentation and consistency
//! only. Each breakpoint is applied independently - the consuming CSS
//! framework resolves min-width semantics in the browser, not this engine.
//!
//! Modifiers serialize to colon-terminated prefixes that stack left-to-right
//! in application order: `md:hover:bg-blue-500`.

/// ARIA states usable as scoping qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaState {
    Busy,
    Checked,
    Disabled,
    Expanded,
    Hidden,
    Pressed,
    Required,
    Selected,
}

impl AriaState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Busy => "busy",
            Self::Checked => "checked",
            Self::Disabled => "disabled",
            Self::Expanded => "expanded",
            Self::Hidden => "hidden",
            Self::Pressed => "pressed",
            Self::Required => "required",
            Self::Selected => "selected",
        }
    }
}

/// A scoping qualifier for utility classes.
///
/// Immutable value type; equality and hashing only, never owns other data
/// beyond the [`Custom`](Modifier::Custom) escape string.
///
/// # Examples
///
/// ```
/// use crosswind::Modifier;
///
/// assert_eq!(Modifier::Hover.prefix(), "hover:");
/// assert_eq!(Modifier::Xl2.prefix(), "2xl:");
/// assert!(Modifier::Md.is_breakpoint());
/// assert!(!Modifier::Hover.is_breakpoint());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Modifier {
    // Pseudo-class states
    Hover,
    Focus,
    FocusWithin,
    Active,
    Visited,
    Disabled,
    Checked,
    Placeholder,
    First,
    Last,
    Dark,

    /// ARIA state qualifier (`aria-required:`, `aria-selected:`, ...).
    Aria(AriaState),

    // Responsive breakpoints, smallest to largest
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,

    /// Escape hatch for qualifiers outside the closed vocabulary
    /// (e.g. `"group-hover"`). The trailing colon is appended if absent.
    Custom(String),
}

impl Modifier {
    /// The colon-terminated selector prefix for this modifier.
    pub fn prefix(&self) -> String {
        match self {
            Self::Hover => "hover:".into(),
            Self::Focus => "focus:".into(),
            Self::FocusWithin => "focus-within:".into(),
            Self::Active => "active:".into(),
            Self::Visited => "visited:".into(),
            Self::Disabled => "disabled:".into(),
            Self::Checked => "checked:".into(),
            Self::Placeholder => "placeholder:".into(),
            Self::First => "first:".into(),
            Self::Last => "last:".into(),
            Self::Dark => "dark:".into(),
            Self::Aria(state) => format!("aria-{}:", state.name()),
            Self::Sm => "sm:".into(),
            Self::Md => "md:".into(),
            Self::Lg => "lg:".into(),
            Self::Xl => "xl:".into(),
            Self::Xl2 => "2xl:".into(),
            Self::Custom(raw) => {
                if raw.ends_with(':') {
                    raw.clone()
                } else {
                    format!("{raw}:")
                }
            }
        }
    }

    /// Position in the breakpoint ladder, smallest first.
    ///
    /// Returns `None` for state modifiers.
    pub fn breakpoint_rank(&self) -> Option<u8> {
        match self {
            Self::Sm => Some(1),
            Self::Md => Some(2),
            Self::Lg => Some(3),
            Self::Xl => Some(4),
            Self::Xl2 => Some(5),
            _ => None,
        }
    }

    pub fn is_breakpoint(&self) -> bool {
        self.breakpoint_rank().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_prefixes() {
        assert_eq!(Modifier::Hover.prefix(), "hover:");
        assert_eq!(Modifier::FocusWithin.prefix(), "focus-within:");
        assert_eq!(Modifier::Placeholder.prefix(), "placeholder:");
        assert_eq!(Modifier::Dark.prefix(), "dark:");
    }

    #[test]
    fn test_breakpoint_prefixes() {
        assert_eq!(Modifier::Sm.prefix(), "sm:");
        assert_eq!(Modifier::Xl.prefix(), "xl:");
        assert_eq!(Modifier::Xl2.prefix(), "2xl:");
    }

    #[test]
    fn test_aria_prefixes() {
        assert_eq!(Modifier::Aria(AriaState::Required).prefix(), "aria-required:");
        assert_eq!(Modifier::Aria(AriaState::Selected).prefix(), "aria-selected:");
    }

    #[test]
    fn test_breakpoint_ladder_is_ordered() {
        let ladder = [
            Modifier::Sm,
            Modifier::Md,
            Modifier::Lg,
            Modifier::Xl,
            Modifier::Xl2,
        ];
        let ranks: Vec<u8> = ladder
            .iter()
            .map(|m| m.breakpoint_rank().unwrap())
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted, "breakpoints must rank smallest to largest");
    }

    #[test]
    fn test_states_have_no_rank() {
        assert_eq!(Modifier::Hover.breakpoint_rank(), None);
        assert_eq!(Modifier::Aria(AriaState::Busy).breakpoint_rank(), None);
    }

    #[test]
    fn test_custom_prefix_appends_colon_once() {
        assert_eq!(Modifier::Custom("group-hover".into()).prefix(), "group-hover:");
        assert_eq!(Modifier::Custom("print:".into()).prefix(), "print:");
    }
}
