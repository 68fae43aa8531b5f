//! Equipment slot definitions

/// Where a slot sits on the wearer, which decides the preview header wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Held item ("When in Main Hand:")
    Hand,
    /// Worn armor piece ("When on Head:")
    Worn,
    /// Applies wherever the item is equipped
    Any,
}

/// Equipment slot information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: SlotKind,
}

impl Slot {
    /// Header line shown above the slot's stat group in the preview
    pub fn header(&self) -> String {
        match self.kind {
            SlotKind::Hand => format!("When in {}:", self.label),
            SlotKind::Worn => format!("When on {}:", self.label),
            SlotKind::Any => "When equipped:".to_string(),
        }
    }

    /// Record field name for a stat in this slot (e.g. `MainHand_Damage`)
    pub fn field(&self, stat: &str) -> String {
        format!("{}_{}", self.name, stat)
    }
}

/// All slots, in preview and serialization order
pub const SLOTS: &[Slot] = &[
    Slot {
        name: "MainHand",
        label: "Main Hand",
        kind: SlotKind::Hand,
    },
    Slot {
        name: "OffHand",
        label: "Off Hand",
        kind: SlotKind::Hand,
    },
    Slot {
        name: "Head",
        label: "Head",
        kind: SlotKind::Worn,
    },
    Slot {
        name: "Chest",
        label: "Chest",
        kind: SlotKind::Worn,
    },
    Slot {
        name: "Legs",
        label: "Legs",
        kind: SlotKind::Worn,
    },
    Slot {
        name: "Feet",
        label: "Feet",
        kind: SlotKind::Worn,
    },
    Slot {
        name: "All",
        label: "All",
        kind: SlotKind::Any,
    },
];

/// Get slot by its record name
pub fn slot_by_name(name: &str) -> Option<&'static Slot> {
    SLOTS.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_lookup() {
        assert_eq!(slot_by_name("MainHand").map(|s| s.label), Some("Main Hand"));
        assert_eq!(slot_by_name("Feet").map(|s| s.kind), Some(SlotKind::Worn));
        assert!(slot_by_name("Tail").is_none());
    }

    #[test]
    fn test_slot_headers() {
        assert_eq!(SLOTS[0].header(), "When in Main Hand:");
        assert_eq!(slot_by_name("Chest").unwrap().header(), "When on Chest:");
        assert_eq!(slot_by_name("All").unwrap().header(), "When equipped:");
    }

    #[test]
    fn test_slot_field() {
        assert_eq!(SLOTS[0].field("Damage"), "MainHand_Damage");
    }
}
