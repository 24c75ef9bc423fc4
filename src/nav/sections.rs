/// A link inside a nav dropdown. `href` is `"/path#fragment"` or `"/path"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub fn fragment(&self) -> Option<&'static str> {
        self.href.split_once('#').map(|(_, fragment)| fragment).filter(|f| !f.is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub links: &'static [NavLink],
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        id: "home",
        label: "Our Van",
        path: "/",
        links: &[
            NavLink { label: "About Us", href: "/#about" },
            NavLink { label: "How It Works", href: "/#how-it-works" },
            NavLink { label: "Plans", href: "/#plans" },
            NavLink { label: "Kind Words", href: "/#testimonials" },
        ],
    },
    NavSection {
        id: "faq",
        label: "FAQ",
        path: "/faq",
        links: &[
            NavLink { label: "Booking", href: "/faq#booking-faq" },
            NavLink { label: "The Menu", href: "/faq#menu-faq" },
        ],
    },
];

/// Every in-page anchor across all sections, in declared order.
pub fn all_anchors() -> impl Iterator<Item = &'static str> {
    NAV_SECTIONS
        .iter()
        .flat_map(|section| section.links.iter())
        .filter_map(NavLink::fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_flatten_in_declared_order() {
        let anchors: Vec<_> = all_anchors().collect();
        assert_eq!(
            anchors,
            vec!["about", "how-it-works", "plans", "testimonials", "booking-faq", "menu-faq"]
        );
    }

    #[test]
    fn plain_route_links_have_no_fragment() {
        let link = NavLink { label: "Book", href: "/book" };
        assert_eq!(link.fragment(), None);
        assert_eq!(NavLink { label: "x", href: "/faq#" }.fragment(), None);
    }
}
