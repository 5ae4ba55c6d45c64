#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Profile,
    Calendar,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Profile => "profile",
            Screen::Calendar => "calendar",
        }
    }

    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|route| route.screen == self)
            .map(|route| route.path)
            .unwrap_or("/")
    }

    /// First route in table order whose path matches wins.
    pub fn match_path(path: &str) -> Option<Screen> {
        ROUTES
            .iter()
            .find(|route| route.matches(path))
            .map(|route| route.screen)
    }
}

pub struct Route {
    pub path: &'static str,
    pub label: &'static str,
    pub screen: Screen,
}

impl Route {
    /// Root matches exactly; anything else matches itself or a deeper segment.
    pub fn matches(&self, path: &str) -> bool {
        if self.path == "/" {
            return path == "/";
        }
        match path.strip_prefix(self.path) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        label: "HOME",
        screen: Screen::Welcome,
    },
    Route {
        path: "/profile",
        label: "PROFILE",
        screen: Screen::Profile,
    },
    Route {
        path: "/calendar",
        label: "CALENDAR",
        screen: Screen::Calendar,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_matches_welcome_only_exactly() {
        assert_eq!(Screen::match_path("/"), Some(Screen::Welcome));
        assert_eq!(Screen::match_path("/unknown"), None);
    }

    #[test]
    fn prefixes_match_on_segment_boundaries() {
        assert_eq!(Screen::match_path("/profile"), Some(Screen::Profile));
        assert_eq!(Screen::match_path("/profile/"), Some(Screen::Profile));
        assert_eq!(Screen::match_path("/profile/edit"), Some(Screen::Profile));
        assert_eq!(Screen::match_path("/calendar"), Some(Screen::Calendar));
        assert_eq!(Screen::match_path("/profiles"), None);
        assert_eq!(Screen::match_path("/about"), None);
    }

    #[test]
    fn every_screen_has_exactly_one_route() {
        for screen in [Screen::Welcome, Screen::Profile, Screen::Calendar] {
            let count = ROUTES.iter().filter(|r| r.screen == screen).count();
            assert_eq!(count, 1, "{screen:?}");
            assert_eq!(Screen::match_path(screen.path()), Some(screen));
        }
    }
}
