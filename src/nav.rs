/// Correction added to the scroll offset so a section counts as active once
/// it reaches the bottom edge of the fixed navbar.
pub const HEADER_OFFSET: f64 = 100.0;
/// Minimum spacing between two recomputations of the active section.
pub const SCROLL_THROTTLE_MS: f64 = 100.0;
/// Used for anchor scrolling when the navbar can't be measured.
pub const FALLBACK_NAVBAR_HEIGHT: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: [NavSection; 5] = [
    NavSection {
        id: "home",
        label: "Home",
    },
    NavSection {
        id: "about",
        label: "About",
    },
    NavSection {
        id: "skills",
        label: "Skills",
    },
    NavSection {
        id: "portfolio",
        label: "Portfolio",
    },
    NavSection {
        id: "contact",
        label: "Contact",
    },
];

pub fn section_ids() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().map(|s| s.id)
}

/// Measured layout of one section, as `offsetTop` / `offsetHeight`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The single section whose bounds contain `scroll_y + correction`.
///
/// Returns `None` when no section matches or when overlapping bounds make
/// more than one match.
pub fn section_at(bounds: &[SectionBounds], scroll_y: f64, correction: f64) -> Option<&'static str> {
    let y = scroll_y + correction;
    let mut hits = bounds.iter().filter(|b| b.contains(y));
    match (hits.next(), hits.next()) {
        (Some(only), None) => Some(only.id),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSection(Option<&'static str>);

impl ActiveSection {
    pub fn get(&self) -> Option<&'static str> {
        self.0
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.0 == Some(id)
    }

    /// Recomputes the highlight; keeps the previous one when nothing matches.
    /// Returns `true` if the active section changed.
    pub fn update(&mut self, bounds: &[SectionBounds], scroll_y: f64, correction: f64) -> bool {
        match section_at(bounds, scroll_y, correction) {
            Some(id) if self.0 != Some(id) => {
                self.0 = Some(id);
                true
            }
            _ => false,
        }
    }
}

/// Section id targeted by an in-page link, e.g. `#about` -> `about`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the section starts just below the navbar.
pub fn scroll_target(offset_top: f64, navbar_height: f64) -> f64 {
    (offset_top - navbar_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        let heights = [800.0, 600.0, 700.0, 900.0, 650.0];
        let mut top = 0.0;
        SECTIONS
            .iter()
            .zip(heights)
            .map(|(s, height)| {
                let b = SectionBounds {
                    id: s.id,
                    top,
                    height,
                };
                top += height;
                b
            })
            .collect()
    }

    #[test]
    fn test_section_at_uses_correction() {
        let bounds = layout();
        assert_eq!(section_at(&bounds, 0.0, HEADER_OFFSET), Some("home"));
        // 750 + 100 lands inside about, which starts at 800
        assert_eq!(section_at(&bounds, 750.0, HEADER_OFFSET), Some("about"));
        assert_eq!(section_at(&bounds, 699.0, HEADER_OFFSET), Some("home"));
        assert_eq!(section_at(&bounds, 700.0, HEADER_OFFSET), Some("about"));
    }

    #[test]
    fn test_bounds_are_half_open() {
        let b = SectionBounds {
            id: "home",
            top: 0.0,
            height: 100.0,
        };
        assert!(b.contains(0.0));
        assert!(b.contains(99.9));
        assert!(!b.contains(100.0));
    }

    #[test]
    fn test_past_the_end_keeps_previous() {
        let bounds = layout();
        let mut active = ActiveSection::default();
        assert!(active.update(&bounds, 3100.0, HEADER_OFFSET));
        assert_eq!(active.get(), Some("contact"));

        assert!(!active.update(&bounds, 10_000.0, HEADER_OFFSET));
        assert_eq!(active.get(), Some("contact"));
    }

    #[test]
    fn test_nothing_active_initially_when_no_match() {
        let mut active = ActiveSection::default();
        assert!(!active.update(&[], 0.0, HEADER_OFFSET));
        assert_eq!(active.get(), None);
    }

    #[test]
    fn test_overlap_keeps_previous() {
        let bounds = vec![
            SectionBounds {
                id: "about",
                top: 0.0,
                height: 500.0,
            },
            SectionBounds {
                id: "skills",
                top: 400.0,
                height: 500.0,
            },
        ];
        let mut active = ActiveSection::default();
        active.update(&bounds, 100.0, HEADER_OFFSET);
        assert_eq!(active.get(), Some("about"));

        assert!(!active.update(&bounds, 350.0, HEADER_OFFSET));
        assert_eq!(active.get(), Some("about"));

        assert!(active.update(&bounds, 450.0, HEADER_OFFSET));
        assert_eq!(active.get(), Some("skills"));
    }

    #[test]
    fn test_at_most_one_active_for_all_offsets() {
        let bounds = layout();
        let mut active = ActiveSection::default();
        let mut y = 0.0;
        while y < 4000.0 {
            active.update(&bounds, y, HEADER_OFFSET);
            let count = SECTIONS.iter().filter(|s| active.is_active(s.id)).count();
            assert!(count <= 1);
            if let Some(id) = section_at(&bounds, y, HEADER_OFFSET) {
                assert_eq!(active.get(), Some(id));
            }
            y += 37.0;
        }
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn test_scroll_target_clamps_at_top() {
        assert_eq!(scroll_target(800.0, 72.0), 728.0);
        assert_eq!(scroll_target(0.0, 72.0), 0.0);
    }
}
