//! 顶部导航栏

use super::Outcome;
use crate::request::HttpClient;
use crate::route::AppRoute;
use crate::session::{SessionState, SessionStore};

pub const BRAND: &str = "MovieHub";
pub const LOGOUT_FAILED: &str = "Logout failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, route: AppRoute },
    Logout,
}

/// 按会话状态决定导航项
pub fn nav_items(session: &SessionState) -> Vec<NavItem> {
    let mut items = vec![NavItem::Link {
        label: "Home",
        route: AppRoute::Home,
    }];

    if session.is_authenticated() {
        items.push(NavItem::Link {
            label: "Add Movie",
            route: AppRoute::AddMovie,
        });
        items.push(NavItem::Logout);
    } else {
        items.push(NavItem::Link {
            label: "Login",
            route: AppRoute::Login,
        });
        items.push(NavItem::Link {
            label: "Register",
            route: AppRoute::Register,
        });
    }
    items
}

pub async fn submit_logout<C: HttpClient>(session: &SessionStore<C>) -> Outcome {
    if session.logout().await {
        Outcome::navigate(AppRoute::Login)
    } else {
        Outcome::inline(LOGOUT_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MovieApi;
    use crate::config::ApiConfig;
    use crate::request::{HttpMethod, MockHttpClient};
    use crate::views::detail::shows_owner_actions;
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn labels(items: &[NavItem]) -> Vec<&'static str> {
        items
            .iter()
            .map(|item| match item {
                NavItem::Link { label, .. } => *label,
                NavItem::Logout => "Logout",
            })
            .collect()
    }

    #[test]
    fn test_nav_items_by_session() {
        assert_eq!(
            labels(&nav_items(&SessionState::Anonymous)),
            vec!["Home", "Login", "Register"]
        );
        let signed_in = SessionState::Authenticated(Default::default());
        assert_eq!(
            labels(&nav_items(&signed_in)),
            vec!["Home", "Add Movie", "Logout"]
        );
    }

    #[tokio::test]
    async fn test_logout_hides_owner_actions() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Post,
            &format!("{}/api/login", BASE),
            200,
            json!({ "user": { "_id": "u1" } }),
        );
        client.mock_raw(HttpMethod::Get, &format!("{}/api/logout", BASE), 200, "");
        let session = SessionStore::new(MovieApi::new(&client, ApiConfig::new(BASE)));

        assert!(session.login("a@b.c", "pw").await);
        assert!(shows_owner_actions(&session.state()));

        let out = submit_logout(&session).await;
        assert_eq!(out, Outcome::navigate(AppRoute::Login));
        assert!(session.current_user().is_none());
        assert!(!shows_owner_actions(&session.state()));
        assert!(!nav_items(&session.state()).contains(&NavItem::Logout));
    }

    #[tokio::test]
    async fn test_logout_failure_is_inline() {
        let client = MockHttpClient::new();
        client.mock_network_error(HttpMethod::Get, &format!("{}/api/logout", BASE));
        let session = SessionStore::new(MovieApi::new(&client, ApiConfig::new(BASE)));

        assert_eq!(submit_logout(&session).await, Outcome::inline(LOGOUT_FAILED));
    }
}
