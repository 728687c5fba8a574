//! Site routes the terminal can navigate to

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A page of the InnoHacks site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    About,
    Schedule,
    Tracks,
    Sponsors,
    Contact,
    Register,
    Login,
    Portal,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::About,
        Route::Schedule,
        Route::Tracks,
        Route::Sponsors,
        Route::Contact,
        Route::Register,
        Route::Login,
        Route::Portal,
    ];

    /// URL path of the route
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Schedule => "/schedule",
            Route::Tracks => "/tracks",
            Route::Sponsors => "/sponsors",
            Route::Contact => "/contact",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::Portal => "/portal",
        }
    }

    /// Human-readable page title
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Schedule => "Schedule",
            Route::Tracks => "Tracks",
            Route::Sponsors => "Sponsors",
            Route::Contact => "Contact",
            Route::Register => "Register",
            Route::Login => "Login",
            Route::Portal => "Portal",
        }
    }

    /// Look up a route by its path. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Self::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Next route in navbar order, wrapping around
    pub fn next(self) -> Route {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous route in navbar order, wrapping around
    pub fn previous(self) -> Route {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
