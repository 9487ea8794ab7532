// Unit tests for user-browser
// These tests drive the public API without touching the network.

#[cfg(test)]
mod api_tests {
    use user_browser::api::{Gender, Status, UserRecord, UsersPage, total_pages};

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_user_record_array_decodes() {
        let body = r#"[
            {"id": 1, "name": "Ann", "email": "ann@example.org", "gender": "female", "status": "active"},
            {"id": 2, "name": "Bram", "email": "bram@example.org", "gender": "male", "status": "inactive"}
        ]"#;
        let users: Vec<UserRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].gender, Gender::Female);
        assert_eq!(users[1].status, Status::Inactive);
    }

    #[test]
    fn test_users_page_struct() {
        let page = UsersPage {
            users: vec![],
            total: Some(42),
        };
        assert!(page.users.is_empty());
        assert_eq!(page.total, Some(42));
    }
}

#[cfg(test)]
mod state_tests {
    use user_browser::api::{FetchOutcome, Gender, Status, UserRecord, UsersPage};
    use user_browser::app::query::PageSize;
    use user_browser::app::{AppState, Theme};
    use user_browser::error::ApiError;

    fn mk_user(id: u64, name: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase()),
            gender: Gender::Female,
            status: Status::Active,
        }
    }

    fn mk_app() -> AppState {
        AppState::new(PageSize::Five, Theme::dark())
    }

    fn ok_outcome(generation: u64, users: Vec<UserRecord>, total: Option<u64>) -> FetchOutcome {
        FetchOutcome {
            generation,
            result: Ok(UsersPage { users, total }),
        }
    }

    #[test]
    fn test_new_state_wants_a_fetch() {
        let app = mk_app();
        assert!(app.dirty);
        assert!(!app.loading);
        assert!(app.results.users.is_empty());
    }

    #[test]
    fn test_begin_fetch_bumps_generation_and_loads() {
        let mut app = mk_app();
        let g1 = app.begin_fetch();
        assert_eq!(g1, 1);
        assert!(app.loading);
        assert!(!app.dirty);
        let g2 = app.begin_fetch();
        assert_eq!(g2, 2);
    }

    #[test]
    fn test_success_replaces_results_and_derives_pages() {
        let mut app = mk_app();
        let g = app.begin_fetch();
        app.apply_fetch(ok_outcome(g, vec![mk_user(1, "Ann")], Some(12)));

        assert!(!app.loading);
        assert!(app.error.is_none());
        assert_eq!(app.results.users.len(), 1);
        // ceil(12 / 5) = 3
        assert_eq!(app.results.total_pages, 3);
    }

    #[test]
    fn test_missing_total_header_keeps_previous_page_count() {
        let mut app = mk_app();
        let g = app.begin_fetch();
        app.apply_fetch(ok_outcome(g, vec![mk_user(1, "Ann")], Some(12)));
        assert_eq!(app.results.total_pages, 3);

        let g = app.begin_fetch();
        app.apply_fetch(ok_outcome(g, vec![mk_user(2, "Bram")], None));
        assert_eq!(app.results.total_pages, 3);
        assert_eq!(app.results.users[0].name, "Bram");
    }

    #[test]
    fn test_failure_sets_error_and_keeps_last_good_rows() {
        let mut app = mk_app();
        let g = app.begin_fetch();
        app.apply_fetch(ok_outcome(g, vec![mk_user(1, "Ann")], Some(5)));

        let g = app.begin_fetch();
        app.apply_fetch(FetchOutcome {
            generation: g,
            result: Err(ApiError::Status(reqwest::StatusCode::BAD_GATEWAY)),
        });

        assert!(!app.loading);
        assert!(app.error.as_deref().unwrap().contains("502"));
        // Display keeps the last-good result set.
        assert_eq!(app.results.users.len(), 1);
        assert_eq!(app.results.users[0].name, "Ann");
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut app = mk_app();
        let old = app.begin_fetch();
        let _new = app.begin_fetch();

        app.apply_fetch(ok_outcome(old, vec![mk_user(9, "Stale")], Some(99)));

        // Nothing applied: the newer request is still in flight.
        assert!(app.loading);
        assert!(app.results.users.is_empty());
        assert_eq!(app.results.total_pages, 0);
    }

    #[test]
    fn test_shrunken_page_count_clamps_and_refetches() {
        let mut app = mk_app();
        app.query.page = 5;
        let g = app.begin_fetch();
        // Remote now reports only 2 pages worth of records.
        app.apply_fetch(ok_outcome(g, vec![], Some(8)));

        assert_eq!(app.results.total_pages, 2);
        assert_eq!(app.query.page, 2);
        assert!(app.dirty);
    }
}
