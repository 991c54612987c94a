use crate::domain::{PopularRoute, Route, TransportMode};

use super::selection::DetailSelection;

/// Text field of the route form that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavField {
    #[default]
    From,
    To,
}

/// A validated route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
    pub mode: TransportMode,
}

/// Street navigator form and results.
#[derive(Debug, Default)]
pub struct NavigatorView {
    pub from: String,
    pub to: String,
    pub mode: TransportMode,
    pub field: NavField,
    /// Whether typed characters go into the form.
    pub editing: bool,
    pub routes: Vec<Route>,
    pub selected: DetailSelection<String>,
    /// Route cursor in the results list.
    pub cursor: usize,
    /// Cursor over landmarks then popular routes in the side panel.
    pub suggestion: usize,
    pub searching: bool,
}

impl NavigatorView {
    /// Query for the current form, or `None` when either endpoint is blank.
    pub fn query(&self) -> Option<RouteQuery> {
        let from = self.from.trim();
        let to = self.to.trim();
        if from.is_empty() || to.is_empty() {
            return None;
        }
        Some(RouteQuery {
            from: from.to_string(),
            to: to.to_string(),
            mode: self.mode,
        })
    }

    pub fn input_mut(&mut self) -> &mut String {
        match self.field {
            NavField::From => &mut self.from,
            NavField::To => &mut self.to,
        }
    }

    pub fn switch_field(&mut self) {
        self.field = match self.field {
            NavField::From => NavField::To,
            NavField::To => NavField::From,
        };
    }

    /// Store search results and open the first route.
    pub fn apply_routes(&mut self, routes: Vec<Route>) {
        self.searching = false;
        self.cursor = 0;
        match routes.first() {
            Some(first) => self.selected.open(first.id.clone()),
            None => self.selected.close(),
        }
        self.routes = routes;
    }

    pub fn selected_route(&self) -> Option<&Route> {
        self.selected.resolve(&self.routes, |r| &r.id)
    }

    pub fn select_at_cursor(&mut self) {
        if let Some(route) = self.routes.get(self.cursor) {
            self.selected.open(route.id.clone());
        }
    }

    pub fn use_popular(&mut self, route: &PopularRoute) {
        self.from = route.from.to_string();
        self.to = route.to.to_string();
    }

    pub fn use_landmark(&mut self, landmark: &str) {
        self.to = landmark.to_string();
    }

    /// Clear results when the view is left; the form text is kept.
    pub fn reset_transient(&mut self) {
        self.searching = false;
        self.editing = false;
        self.routes.clear();
        self.selected.close();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mock;

    #[test]
    fn test_query_requires_both_endpoints() {
        let mut view = NavigatorView::default();
        assert!(view.query().is_none());

        view.from = "Central Park".to_string();
        view.to = "   ".to_string();
        assert!(view.query().is_none());

        view.to = "Times Square".to_string();
        let query = view.query().unwrap();
        assert_eq!(query.mode, TransportMode::Walking);
        assert_eq!(query.to, "Times Square");
    }

    #[test]
    fn test_apply_routes_selects_first() {
        let mut view = NavigatorView {
            searching: true,
            ..NavigatorView::default()
        };
        view.apply_routes(mock::routes("A", "B", TransportMode::Transit));

        assert!(!view.searching);
        assert_eq!(
            view.selected_route().map(|r| r.name.as_str()),
            Some("Fastest Route")
        );
    }

    #[test]
    fn test_popular_route_fills_both_fields() {
        let mut view = NavigatorView::default();
        view.use_popular(&mock::POPULAR_ROUTES[1]);
        assert_eq!(view.from, "Brooklyn Bridge");
        assert_eq!(view.to, "Wall Street");

        view.use_landmark("High Line");
        assert_eq!(view.from, "Brooklyn Bridge");
        assert_eq!(view.to, "High Line");
    }

    #[test]
    fn test_typing_goes_to_active_field() {
        let mut view = NavigatorView::default();
        view.input_mut().push_str("Chelsea");
        view.switch_field();
        view.input_mut().push_str("SoHo");
        assert_eq!(view.from, "Chelsea");
        assert_eq!(view.to, "SoHo");
    }
}
