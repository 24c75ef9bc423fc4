use std::rc::Rc;

use yew::Reducible;

/// Past this many pixels of scroll the header turns opaque.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// How far below the top of the viewport a section counts as "in view".
pub const SPY_CURSOR_OFFSET: f64 = 150.0;
/// Space left for the sticky header when scrolling to an anchor.
pub const HEADER_OFFSET: f64 = 100.0;

/// Vertical layout box of an anchor target, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorBounds {
    pub top: f64,
    pub height: f64,
}

impl AnchorBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub fn spy_cursor(scroll_y: f64) -> f64 {
    scroll_y + SPY_CURSOR_OFFSET
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// The anchor whose bounds contain `cursor`. Anchors that aren't rendered
/// (`None` bounds) never match. When several match, the one declared last
/// wins.
pub fn active_section<'a>(cursor: f64, anchors: &[(&'a str, Option<AnchorBounds>)]) -> Option<&'a str> {
    anchors
        .iter()
        .filter(|(_, bounds)| bounds.map_or(false, |b| b.contains(cursor)))
        .map(|(id, _)| *id)
        .last()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Target is on the page being shown; scroll instead of navigating.
    InPage { fragment: String },
    /// Target is another route, optionally with an anchor to land on.
    Route { path: String, fragment: Option<String> },
}

/// Decides how a clicked nav link should be handled given the path that is
/// currently displayed.
pub fn resolve_link(href: &str, current_path: &str) -> LinkAction {
    let (path, fragment) = match href.split_once('#') {
        Some((path, fragment)) if !fragment.is_empty() => (path, Some(fragment)),
        Some((path, _)) => (path, None),
        None => (href, None),
    };
    let path = if path.is_empty() { current_path } else { path };

    match fragment {
        Some(fragment) if same_path(path, current_path) => LinkAction::InPage {
            fragment: fragment.to_string(),
        },
        fragment => LinkAction::Route {
            path: path.to_string(),
            fragment: fragment.map(str::to_string),
        },
    }
}

fn same_path(a: &str, b: &str) -> bool {
    let trim = |p: &str| {
        let trimmed = p.trim_end_matches('/');
        if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() }
    };
    trim(a) == trim(b)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavSpyState {
    pub active_path: String,
    pub active_section: Option<String>,
    pub scrolled: bool,
    pub drawer_open: bool,
    pub open_dropdown: Option<&'static str>,
}

impl NavSpyState {
    pub fn new(active_path: impl Into<String>) -> Self {
        Self {
            active_path: active_path.into(),
            ..Self::default()
        }
    }

    pub fn is_section_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }
}

pub enum NavAction {
    Scrolled {
        scroll_y: f64,
        anchors: Vec<(&'static str, Option<AnchorBounds>)>,
    },
    RouteChanged(String),
    ToggleDrawer,
    ToggleDropdown(&'static str),
    CloseMenus,
}

impl Reducible for NavSpyState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Scrolled { scroll_y, anchors } => {
                next.scrolled = is_scrolled(scroll_y);
                next.active_section = active_section(spy_cursor(scroll_y), &anchors).map(str::to_string);
            }
            NavAction::RouteChanged(path) => next.active_path = path,
            NavAction::ToggleDrawer => {
                next.drawer_open = !next.drawer_open;
                next.open_dropdown = None;
            }
            NavAction::ToggleDropdown(id) => {
                next.open_dropdown = if next.open_dropdown == Some(id) { None } else { Some(id) };
            }
            NavAction::CloseMenus => {
                next.drawer_open = false;
                next.open_dropdown = None;
            }
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, height: f64) -> Option<AnchorBounds> {
        Some(AnchorBounds { top, height })
    }

    fn page() -> Vec<(&'static str, Option<AnchorBounds>)> {
        vec![
            ("about", bounds(600.0, 400.0)),
            ("how-it-works", bounds(1000.0, 500.0)),
            ("plans", bounds(1500.0, 700.0)),
            ("booking-faq", None),
        ]
    }

    #[test]
    fn cursor_sits_below_scroll_position() {
        assert_eq!(active_section(spy_cursor(0.0), &page()), None);
        assert_eq!(active_section(spy_cursor(450.0), &page()), Some("about"));
        // Bounds are half-open: exactly at the next section's top.
        assert_eq!(active_section(spy_cursor(850.0), &page()), Some("how-it-works"));
    }

    #[test]
    fn later_anchor_wins_when_bounds_overlap() {
        let anchors = vec![("outer", bounds(0.0, 3000.0)), ("inner", bounds(900.0, 200.0))];
        assert_eq!(active_section(1000.0, &anchors), Some("inner"));
        let reversed = vec![("inner", bounds(900.0, 200.0)), ("outer", bounds(0.0, 3000.0))];
        assert_eq!(active_section(1000.0, &reversed), Some("outer"));
    }

    #[test]
    fn unrendered_anchors_never_match() {
        let anchors = vec![("ghost", None), ("real", bounds(0.0, 10.0))];
        assert_eq!(active_section(5.0, &anchors), Some("real"));
        assert_eq!(active_section(50.0, &anchors), None);
    }

    #[test]
    fn header_turns_solid_after_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn repeated_scroll_produces_no_new_state() {
        let state = Rc::new(NavSpyState::new("/"));
        let first = state.reduce(NavAction::Scrolled { scroll_y: 1200.0, anchors: page() });
        assert_eq!(first.active_section.as_deref(), Some("how-it-works"));
        assert!(first.scrolled);

        let second = first.clone().reduce(NavAction::Scrolled { scroll_y: 1200.0, anchors: page() });
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn scrolling_off_every_section_clears_it() {
        let state = Rc::new(NavSpyState::new("/"))
            .reduce(NavAction::Scrolled { scroll_y: 600.0, anchors: page() });
        assert!(state.is_section_active("about"));
        let state = state.reduce(NavAction::Scrolled { scroll_y: 10.0, anchors: page() });
        assert_eq!(state.active_section, None);
        assert!(!state.scrolled);
    }

    #[test]
    fn menus_toggle_and_close() {
        let state = Rc::new(NavSpyState::new("/"))
            .reduce(NavAction::ToggleDropdown("home"))
            .reduce(NavAction::ToggleDropdown("faq"));
        assert_eq!(state.open_dropdown, Some("faq"));
        let state = state.reduce(NavAction::ToggleDropdown("faq"));
        assert_eq!(state.open_dropdown, None);

        let state = state.reduce(NavAction::ToggleDropdown("home")).reduce(NavAction::ToggleDrawer);
        assert!(state.drawer_open);
        assert_eq!(state.open_dropdown, None);

        let closed = state.reduce(NavAction::CloseMenus);
        assert!(!closed.drawer_open);
        let again = closed.clone().reduce(NavAction::CloseMenus);
        assert!(Rc::ptr_eq(&closed, &again));
    }

    #[test]
    fn route_change_updates_path() {
        let state = Rc::new(NavSpyState::new("/")).reduce(NavAction::RouteChanged("/faq".into()));
        assert_eq!(state.active_path, "/faq");
    }

    #[test]
    fn links_on_current_route_scroll_in_page() {
        assert_eq!(
            resolve_link("/#plans", "/"),
            LinkAction::InPage { fragment: "plans".into() }
        );
        assert_eq!(
            resolve_link("#menu-faq", "/faq"),
            LinkAction::InPage { fragment: "menu-faq".into() }
        );
        assert_eq!(
            resolve_link("/faq#menu-faq", "/faq/"),
            LinkAction::InPage { fragment: "menu-faq".into() }
        );
    }

    #[test]
    fn links_to_other_routes_navigate() {
        assert_eq!(
            resolve_link("/faq#booking-faq", "/"),
            LinkAction::Route { path: "/faq".into(), fragment: Some("booking-faq".into()) }
        );
        assert_eq!(
            resolve_link("/book", "/"),
            LinkAction::Route { path: "/book".into(), fragment: None }
        );
        assert_eq!(
            resolve_link("/", "/"),
            LinkAction::Route { path: "/".into(), fragment: None }
        );
    }
}
