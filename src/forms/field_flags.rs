//! Field flags for choice fields.
//!
//! Implements field flags per ISO 32000-1:2008 Section 12.7.3 (Field Flags)
//! and Section 12.7.4.4 (Choice Fields). Two of the bits, `COMBO` and
//! `EDIT`, together with `MULTI_SELECT`, decide what kind of choice field a
//! dictionary describes; [`ChoiceKind::from_flags`] is the one place that
//! decision is made.

use bitflags::bitflags;

bitflags! {
    /// Choice field flags (field type Ch).
    ///
    /// Per PDF spec Table 221 (common) and Table 230 (choice specific).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ChoiceFieldFlags: u32 {
        // --- Common flags (bits 1-3) ---
        /// Bit 1: Field is read-only
        const READ_ONLY = 1 << 0;
        /// Bit 2: Field is required
        const REQUIRED = 1 << 1;
        /// Bit 3: Field should not be exported
        const NO_EXPORT = 1 << 2;

        // --- Choice-specific flags ---
        /// Bit 18: This is a combo box (dropdown); if not set, it's a list box
        const COMBO = 1 << 17;

        /// Bit 19: (combo only) User may enter custom text
        const EDIT = 1 << 18;

        /// Bit 20: Options should be sorted alphabetically
        const SORT = 1 << 19;

        /// Bit 22: (list only) Allow multiple selections
        const MULTI_SELECT = 1 << 21;

        /// Bit 23: Text should not be spell-checked (for editable combo)
        const DO_NOT_SPELL_CHECK = 1 << 22;

        /// Bit 27: Value is committed when selection changes (not on blur)
        const COMMIT_ON_SEL_CHANGE = 1 << 26;
    }
}

/// Concrete kind of a choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcreteFieldType {
    /// Scrollable list
    ListBox,
    /// Dropdown
    ComboBox,
}

/// Concrete kind of a choice field together with the capability that
/// matters for that kind.
///
/// `EDIT` is meaningless on a list box and `MULTI_SELECT` on a combo box;
/// each variant only carries the bit that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    /// List box; `multi_select` allows a sequence value
    ListBox {
        /// Whether several options may be selected
        multi_select: bool,
    },
    /// Combo box; `editable` allows text outside the option list
    ComboBox {
        /// Whether arbitrary text may be entered
        editable: bool,
    },
}

impl ChoiceKind {
    /// Derive the kind from the `Ff` bits.
    pub fn from_flags(flags: ChoiceFieldFlags) -> Self {
        if flags.contains(ChoiceFieldFlags::COMBO) {
            ChoiceKind::ComboBox {
                editable: flags.contains(ChoiceFieldFlags::EDIT),
            }
        } else {
            ChoiceKind::ListBox {
                multi_select: flags.contains(ChoiceFieldFlags::MULTI_SELECT),
            }
        }
    }

    /// List box or combo box.
    pub fn concrete_field_type(&self) -> ConcreteFieldType {
        match self {
            ChoiceKind::ListBox { .. } => ConcreteFieldType::ListBox,
            ChoiceKind::ComboBox { .. } => ConcreteFieldType::ComboBox,
        }
    }

    /// Whether a value must be one of the export values.
    pub fn requires_listed_value(&self) -> bool {
        !matches!(self, ChoiceKind::ComboBox { editable: true })
    }

    /// Whether the value may be a sequence.
    pub fn allows_multiple_values(&self) -> bool {
        matches!(self, ChoiceKind::ListBox { multi_select: true })
    }
}

/// Text alignment for variable text.
///
/// Per PDF spec Section 12.7.3.3 (Variable Text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// Left-aligned (Q=0)
    #[default]
    Left,
    /// Centered (Q=1)
    Center,
    /// Right-aligned (Q=2)
    Right,
}

impl TextAlignment {
    /// Get the PDF Q value for this alignment.
    pub fn q_value(&self) -> i64 {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
        }
    }

    /// Parse a `/Q` value; anything unknown is left-aligned.
    pub fn from_q_value(q: i64) -> Self {
        match q {
            1 => Self::Center,
            2 => Self::Right,
            _ => Self::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_field_flags_bits() {
        assert_eq!(ChoiceFieldFlags::COMBO.bits(), 1 << 17);
        assert_eq!(ChoiceFieldFlags::EDIT.bits(), 1 << 18);
        assert_eq!(ChoiceFieldFlags::MULTI_SELECT.bits(), 1 << 21);
        assert_eq!(ChoiceFieldFlags::default(), ChoiceFieldFlags::empty());
    }

    #[test]
    fn test_kind_from_flags() {
        assert_eq!(
            ChoiceKind::from_flags(ChoiceFieldFlags::empty()),
            ChoiceKind::ListBox { multi_select: false }
        );
        assert_eq!(
            ChoiceKind::from_flags(ChoiceFieldFlags::MULTI_SELECT),
            ChoiceKind::ListBox { multi_select: true }
        );
        assert_eq!(
            ChoiceKind::from_flags(ChoiceFieldFlags::COMBO | ChoiceFieldFlags::EDIT),
            ChoiceKind::ComboBox { editable: true }
        );
        // EDIT without COMBO does nothing
        assert_eq!(
            ChoiceKind::from_flags(ChoiceFieldFlags::EDIT),
            ChoiceKind::ListBox { multi_select: false }
        );
        // MULTI_SELECT is ignored on combo boxes
        assert_eq!(
            ChoiceKind::from_flags(ChoiceFieldFlags::COMBO | ChoiceFieldFlags::MULTI_SELECT),
            ChoiceKind::ComboBox { editable: false }
        );
    }

    #[test]
    fn test_kind_capabilities() {
        let editable_combo = ChoiceKind::ComboBox { editable: true };
        assert!(!editable_combo.requires_listed_value());
        assert!(!editable_combo.allows_multiple_values());
        assert_eq!(editable_combo.concrete_field_type(), ConcreteFieldType::ComboBox);

        let multi_list = ChoiceKind::ListBox { multi_select: true };
        assert!(multi_list.requires_listed_value());
        assert!(multi_list.allows_multiple_values());
    }

    #[test]
    fn test_text_alignment_q_value() {
        for alignment in [TextAlignment::Left, TextAlignment::Center, TextAlignment::Right] {
            assert_eq!(TextAlignment::from_q_value(alignment.q_value()), alignment);
        }
        assert_eq!(TextAlignment::from_q_value(7), TextAlignment::Left);
    }
}
