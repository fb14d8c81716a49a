/// Quick-action shortcuts shown in the popup grid
///
/// Static configuration, defined at load time and never mutated. Each
/// entry opens a fixed internal browser page in a new tab.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortcutAction {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const QUICK_ACTIONS: [ShortcutAction; 4] = [
    ShortcutAction {
        name: "Bookmarks",
        icon: "⭐",
        url: "chrome://bookmarks",
    },
    ShortcutAction {
        name: "History",
        icon: "📖",
        url: "chrome://history",
    },
    ShortcutAction {
        name: "Extensions",
        icon: "🧩",
        url: "chrome://extensions",
    },
    ShortcutAction {
        name: "Settings",
        icon: "⚙️",
        url: "chrome://settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shortcut_targets_its_fixed_url() {
        let expected = [
            ("Bookmarks", "chrome://bookmarks"),
            ("History", "chrome://history"),
            ("Extensions", "chrome://extensions"),
            ("Settings", "chrome://settings"),
        ];

        assert_eq!(QUICK_ACTIONS.len(), expected.len());
        for (action, (name, url)) in QUICK_ACTIONS.iter().zip(expected) {
            assert_eq!(action.name, name);
            assert_eq!(action.url, url);
        }
    }

    #[test]
    fn test_every_shortcut_has_a_glyph() {
        for action in &QUICK_ACTIONS {
            assert!(!action.icon.is_empty());
        }
    }

    #[test]
    fn test_shortcut_urls_are_internal_pages() {
        for action in &QUICK_ACTIONS {
            assert!(action.url.starts_with("chrome://"));
        }
    }
}
