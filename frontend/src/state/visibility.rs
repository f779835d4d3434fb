use std::collections::BTreeSet;

/// Page sections that fade in the first time they scroll into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Menu,
    Experience,
    Story,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Menu,
        SectionId::Experience,
        SectionId::Story,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// The DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Menu => "menu",
            SectionId::Experience => "experience",
            SectionId::Story => "story",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

/// Sections that have been seen at least once. Only ever grows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibleSections {
    seen: BTreeSet<SectionId>,
}

impl VisibleSections {
    pub fn all() -> Self {
        Self { seen: SectionId::ALL.into_iter().collect() }
    }

    pub fn contains(&self, section: SectionId) -> bool {
        self.seen.contains(&section)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Records a section as seen. Returns whether anything changed.
    pub fn mark_seen(&mut self, section: SectionId) -> bool {
        self.seen.insert(section)
    }

    /// Class names driving the one-shot reveal transition.
    pub fn reveal_class(&self, section: SectionId) -> &'static str {
        if self.contains(section) {
            "reveal reveal-shown"
        } else {
            "reveal reveal-hidden"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_round_trip_for_every_section() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_dom_id(section.as_str()), Some(section));
        }
        assert_eq!(SectionId::from_dom_id(""), None);
    }

    #[test]
    fn marking_never_removes_earlier_sections() {
        let events = [
            SectionId::Story,
            SectionId::Menu,
            SectionId::Story,
            SectionId::Contact,
            SectionId::Menu,
        ];
        let mut visible = VisibleSections::default();
        for section in events {
            let before = visible.clone();
            visible.mark_seen(section);
            assert!(SectionId::ALL
                .iter()
                .filter(|s| before.contains(**s))
                .all(|s| visible.contains(*s)));
        }
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn repeated_marks_report_no_change() {
        let mut visible = VisibleSections::default();
        assert!(visible.mark_seen(SectionId::Experience));
        assert!(!visible.mark_seen(SectionId::Experience));
    }

    #[test]
    fn reveal_class_flips_once_seen() {
        let mut visible = VisibleSections::default();
        assert_eq!(visible.reveal_class(SectionId::Menu), "reveal reveal-hidden");
        visible.mark_seen(SectionId::Menu);
        assert_eq!(visible.reveal_class(SectionId::Menu), "reveal reveal-shown");
        assert_eq!(VisibleSections::all().len(), SectionId::ALL.len());
    }
}
