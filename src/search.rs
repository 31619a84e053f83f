use crate::app::AppState;

/// Rebuilds the visible projection from the full collection under the
/// current query. Called after every search change and after every local
/// mutation so the view never goes stale. Matching is a case-insensitive
/// substring test; the collection itself is never touched.
pub fn apply_search(app: &mut AppState) {
    let q = app.search_query.to_lowercase();
    if q.is_empty() {
        app.users = app.users_all.clone();
    } else {
        app.users = app
            .users_all
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&q)
                    || u.username.to_lowercase().contains(&q)
                    || u.email.to_lowercase().contains(&q)
                    || u.phone.to_lowercase().contains(&q)
                    || u.website.to_lowercase().contains(&q)
                    || u.id.to_string().contains(&q)
            })
            .cloned()
            .collect();
    }
    app.selected_index = app.selected_index.min(app.users.len().saturating_sub(1));
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::User;

	fn mk_user(id: u64, name: &str, username: &str, email: &str) -> User {
		User {
			id,
			name: name.to_string(),
			username: username.to_string(),
			email: email.to_string(),
			phone: format!("1-770-736-80{id:02}"),
			website: format!("{username}.org").to_lowercase(),
			liked: false,
		}
	}

	fn mk_app(users: Vec<User>) -> AppState {
		let mut app = AppState::new("http://directory.test/users".to_string());
		app.finish_load(users);
		app
	}

	#[test]
	fn filters_by_multiple_fields_case_insensitively() {
		let mut app = mk_app(vec![
			mk_user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
			mk_user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
		]);

		app.search_query = "aNtOn".to_string();
		apply_search(&mut app);
		assert_eq!(app.users.len(), 1);
		assert_eq!(app.users[0].name, "Ervin Howell");

		app.search_query = "april".to_string();
		apply_search(&mut app);
		assert_eq!(app.users.len(), 1);
		assert_eq!(app.users[0].name, "Leanne Graham");
	}

	#[test]
	fn empty_query_restores_the_full_view_and_clamps_selection() {
		let mut app = mk_app(vec![
			mk_user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
			mk_user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
			mk_user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
		]);
		app.selected_index = 2;

		app.search_query = "graham".to_string();
		apply_search(&mut app);
		assert_eq!(app.users.len(), 1);
		assert_eq!(app.selected_index, 0);

		app.search_query.clear();
		apply_search(&mut app);
		assert_eq!(app.users.len(), 3);
	}

	#[test]
	fn searching_never_mutates_the_collection() {
		let mut app = mk_app(vec![
			mk_user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
			mk_user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
		]);
		let before = app.users_all.clone();

		app.search_query = "nomatch".to_string();
		apply_search(&mut app);
		assert!(app.users.is_empty());
		assert_eq!(app.users_all, before);
	}
}
