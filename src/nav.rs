/// In-page anchors, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    AllProjects,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::AllProjects,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::AllProjects => "allprojects",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AllProjects => "All Projects",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Element(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationPlan {
    pub fragment: &'static str,
    pub scroll: ScrollTarget,
}

pub fn plan(section: Section) -> NavigationPlan {
    let scroll = match section {
        Section::Home => ScrollTarget::Top,
        other => ScrollTarget::Element(other.id()),
    };

    NavigationPlan {
        fragment: section.id(),
        scroll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_scrolls_to_top() {
        assert_eq!(
            plan(Section::Home),
            NavigationPlan {
                fragment: "home",
                scroll: ScrollTarget::Top,
            }
        );
    }

    #[test]
    fn other_sections_scroll_their_element_into_view() {
        for section in &Section::ALL[1..] {
            let plan = plan(*section);
            assert_eq!(plan.fragment, section.id());
            assert_eq!(plan.scroll, ScrollTarget::Element(section.id()));
        }
    }

    #[test]
    fn ids_match_labels_without_spaces() {
        for section in Section::ALL {
            let squashed = section.label().replace(' ', "").to_lowercase();
            assert_eq!(section.id(), squashed);
        }
    }

    #[test]
    fn hrefs_point_at_section_ids() {
        assert_eq!(Section::Skills.href(), "#skills");
        assert_eq!(Section::AllProjects.href(), "#allprojects");
    }
}
