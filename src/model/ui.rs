//! UI state shared across components

/// Top-level tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Forecast,
    Dashboard,
    About,
}

impl Tab {
    pub fn all() -> [Tab; 3] {
        [Tab::Forecast, Tab::Dashboard, Tab::About]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Forecast => "Forecast",
            Tab::Dashboard => "Dashboard",
            Tab::About => "About",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Forecast => 0,
            Tab::Dashboard => 1,
            Tab::About => 2,
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Forecast => Tab::Dashboard,
            Tab::Dashboard => Tab::About,
            Tab::About => Tab::Forecast,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Forecast => Tab::About,
            Tab::Dashboard => Tab::Forecast,
            Tab::About => Tab::Dashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        let mut tab = Tab::Forecast;
        for _ in 0..Tab::all().len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Forecast);
        assert_eq!(Tab::Forecast.prev(), Tab::About);
    }
}
