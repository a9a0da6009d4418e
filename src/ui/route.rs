use crate::config::StartRoute;

/// Top-level pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Data,
    AboutUs,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 3] = [Route::Home, Route::Data, Route::AboutUs];

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Data => "Data",
            Route::AboutUs => "About Us",
        }
    }

    /// Function key bound to this route.
    pub fn hotkey(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn index(self) -> usize {
        match self {
            Route::Home => 0,
            Route::Data => 1,
            Route::AboutUs => 2,
        }
    }

    pub fn next(self) -> Route {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    pub fn prev(self) -> Route {
        Route::ALL[(self.index() + Route::ALL.len() - 1) % Route::ALL.len()]
    }
}

impl From<StartRoute> for Route {
    fn from(route: StartRoute) -> Self {
        match route {
            StartRoute::Home => Route::Home,
            StartRoute::Data => Route::Data,
            StartRoute::About => Route::AboutUs,
        }
    }
}
