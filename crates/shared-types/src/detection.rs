use serde::{Deserialize, Serialize};

use crate::route_table::RouteTable;
use crate::view::View;

/// Outcome of comparing the view implied by a route with the stored view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewDetection {
    /// View the route belongs to; `None` for view-agnostic routes.
    pub target_view: Option<View>,
    pub should_switch_view: bool,
}

impl ViewDetection {
    /// The view to switch to, only when a switch is warranted.
    pub fn switch_target(&self) -> Option<View> {
        if self.should_switch_view {
            self.target_view
        } else {
            None
        }
    }
}

/// Derive whether navigating to `path` implies a different view than
/// `current`. Pure: acting on the result is left to the caller.
pub fn detect(table: &RouteTable, path: &str, current: View) -> ViewDetection {
    match table.classify(path) {
        Some(target) => ViewDetection {
            target_view: Some(target),
            should_switch_view: target != current,
        },
        None => ViewDetection::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_entering_admin_area_should_switch() {
        let table = RouteTable::dashboard();
        assert_eq!(
            detect(&table, "/admin/customers", View::User),
            ViewDetection {
                target_view: Some(View::Admin),
                should_switch_view: true,
            }
        );
    }

    #[test]
    fn admin_entering_user_area_should_switch() {
        let table = RouteTable::dashboard();
        assert_eq!(
            detect(&table, "/reservations", View::Admin),
            ViewDetection {
                target_view: Some(View::User),
                should_switch_view: true,
            }
        );
    }

    #[test]
    fn view_agnostic_route_never_switches() {
        let table = RouteTable::dashboard();
        for current in View::ALL {
            assert_eq!(
                detect(&table, "/profile", current),
                ViewDetection {
                    target_view: None,
                    should_switch_view: false,
                }
            );
        }
    }

    #[test]
    fn matching_view_does_not_switch() {
        let table = RouteTable::dashboard();
        let detection = detect(&table, "/admin/rooms", View::Admin);
        assert_eq!(detection.target_view, Some(View::Admin));
        assert!(!detection.should_switch_view);
        assert_eq!(detection.switch_target(), None);
    }

    #[test]
    fn detection_is_deterministic() {
        let table = RouteTable::dashboard();
        let first = detect(&table, "/payments?status=due", View::Admin);
        let second = detect(&table, "/payments?status=due", View::Admin);
        assert_eq!(first, second);
        assert_eq!(first.switch_target(), Some(View::User));
    }
}
