use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use crate::api::{self, FetchOutcome};
use crate::app::{AppState, InputMode, LoadState};
use crate::search::apply_search;
use crate::ui;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    endpoint: String,
) -> Result<()> {
    let fetch = api::spawn_fetch(endpoint.clone());
    let mut app = AppState::new(endpoint);

    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        poll_fetch(&mut app, &fetch);

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.show_help {
                        match key.code {
                            KeyCode::Char('q') => break,
                            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => {
                                app.show_help = false;
                            }
                            _ => {}
                        }
                        continue;
                    }
                    match app.input_mode {
                        InputMode::Normal => match key.code {
                            KeyCode::Char('q') => break,
                            KeyCode::Esc => { /* ignore */ }
                            KeyCode::Char('?') => {
                                app.show_help = true;
                            }
                            KeyCode::Char('/') => {
                                app.search_query.clear();
                                app.input_mode = InputMode::Search;
                            }
                            KeyCode::Char(' ') => {
                                if let Some(id) = app.selected_user().map(|u| u.id) {
                                    app.toggle_like(id);
                                }
                            }
                            KeyCode::Enter | KeyCode::Char('e') => {
                                app.open_editor();
                            }
                            KeyCode::Char('d') | KeyCode::Delete => {
                                if let Some(id) = app.selected_user().map(|u| u.id) {
                                    app.delete_user(id);
                                }
                            }
                            KeyCode::Left | KeyCode::Char('h') => {
                                if app.selected_index > 0 {
                                    app.selected_index -= 1;
                                }
                            }
                            KeyCode::Right | KeyCode::Char('l') => {
                                if app.selected_index + 1 < app.users.len() {
                                    app.selected_index += 1;
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                let step = app.grid_cols.max(1);
                                if app.selected_index >= step {
                                    app.selected_index -= step;
                                } else {
                                    app.selected_index = 0;
                                }
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                let step = app.grid_cols.max(1);
                                let new_idx = app.selected_index.saturating_add(step);
                                app.selected_index = new_idx.min(app.users.len().saturating_sub(1));
                            }
                            KeyCode::PageUp => {
                                let page = (app.grid_cols * app.rows_per_page).max(1);
                                if app.selected_index >= page {
                                    app.selected_index -= page;
                                } else {
                                    app.selected_index = 0;
                                }
                            }
                            KeyCode::PageDown => {
                                let page = (app.grid_cols * app.rows_per_page).max(1);
                                let new_idx = app.selected_index.saturating_add(page);
                                app.selected_index = new_idx.min(app.users.len().saturating_sub(1));
                            }
                            _ => {}
                        },
                        InputMode::Modal => {
                            handle_editor_key(&mut app, key.code);
                        }
                        InputMode::Search => {
                            handle_search_key(&mut app, key.code);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Drains the fetch channel while the directory is still loading. At most
/// one outcome ever arrives; a worker that died without sending is surfaced
/// as a failure rather than an eternal spinner.
fn poll_fetch(app: &mut AppState, fetch: &Receiver<FetchOutcome>) {
    if app.load != LoadState::Loading {
        return;
    }
    match fetch.try_recv() {
        Ok(Ok(users)) => app.finish_load(users),
        Ok(Err(err)) => app.fail_load(err.to_string()),
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            app.fail_load("directory fetch worker exited unexpectedly".to_string());
        }
    }
}

fn handle_search_key(app: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Enter => {
            apply_search(app);
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            // A cancelled search restores the unfiltered view.
            app.input_mode = InputMode::Normal;
            app.search_query.clear();
            apply_search(app);
        }
        KeyCode::Backspace => {
            app.search_query.pop();
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
        }
        _ => {}
    }
}

fn handle_editor_key(app: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_editor(),
        KeyCode::Enter => app.save_editor(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.editor.as_mut() {
                form.focus = form.focus.next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.editor.as_mut() {
                form.focus = form.focus.prev();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.editor.as_mut() {
                let focus = form.focus;
                form.value_mut(focus).pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.editor.as_mut() {
                let focus = form.focus;
                form.value_mut(focus).push(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{FetchError, User};
	use std::sync::mpsc;

	fn loading_app() -> AppState {
		AppState::new("http://directory.test/users".to_string())
	}

	fn mk_user(id: u64, name: &str, username: &str) -> User {
		User {
			id,
			name: name.to_string(),
			username: username.to_string(),
			email: format!("{username}@april.biz"),
			phone: format!("1-770-736-80{id:02}"),
			website: format!("{}.org", username.to_lowercase()),
			liked: false,
		}
	}

	#[test]
	fn delivered_outcome_resolves_the_load() {
		let (tx, rx) = mpsc::channel::<FetchOutcome>();
		let mut app = loading_app();

		tx.send(Ok(vec![mk_user(1, "Leanne Graham", "Bret")])).unwrap();
		poll_fetch(&mut app, &rx);

		assert_eq!(app.load, LoadState::Loaded);
		assert_eq!(app.users_all.len(), 1);
	}

	#[test]
	fn delivered_error_becomes_the_failure_message() {
		let (tx, rx) = mpsc::channel::<FetchOutcome>();
		let mut app = loading_app();

		tx.send(Err(FetchError::Timeout)).unwrap();
		poll_fetch(&mut app, &rx);

		assert_eq!(
			app.load,
			LoadState::Failed("directory request timed out".to_string())
		);
	}

	#[test]
	fn an_empty_channel_keeps_the_load_pending() {
		let (_tx, rx) = mpsc::channel::<FetchOutcome>();
		let mut app = loading_app();

		poll_fetch(&mut app, &rx);

		assert_eq!(app.load, LoadState::Loading);
	}

	#[test]
	fn disconnected_worker_without_outcome_fails_the_load() {
		let (tx, rx) = mpsc::channel::<FetchOutcome>();
		drop(tx);
		let mut app = loading_app();

		poll_fetch(&mut app, &rx);

		assert_eq!(
			app.load,
			LoadState::Failed("directory fetch worker exited unexpectedly".to_string())
		);
	}

	#[test]
	fn late_disconnect_after_resolution_is_ignored() {
		let (tx, rx) = mpsc::channel::<FetchOutcome>();
		let mut app = loading_app();
		app.finish_load(vec![mk_user(1, "Leanne Graham", "Bret")]);
		drop(tx);

		poll_fetch(&mut app, &rx);

		assert_eq!(app.load, LoadState::Loaded);
		assert_eq!(app.users_all.len(), 1);
	}

	#[test]
	fn enter_applies_the_query_and_leaves_search() {
		let mut app = loading_app();
		app.finish_load(vec![
			mk_user(1, "Leanne Graham", "Bret"),
			mk_user(2, "Ervin Howell", "Antonette"),
		]);
		app.input_mode = InputMode::Search;
		app.search_query = "howell".to_string();

		handle_search_key(&mut app, KeyCode::Enter);

		assert_eq!(app.input_mode, InputMode::Normal);
		assert_eq!(app.users.len(), 1);
		assert_eq!(app.users[0].name, "Ervin Howell");
	}

	#[test]
	fn leaving_search_with_esc_restores_the_full_view() {
		let mut app = loading_app();
		app.finish_load(vec![
			mk_user(1, "Leanne Graham", "Bret"),
			mk_user(2, "Ervin Howell", "Antonette"),
		]);
		app.input_mode = InputMode::Search;
		app.search_query = "howell".to_string();
		apply_search(&mut app);
		assert_eq!(app.users.len(), 1);

		handle_search_key(&mut app, KeyCode::Esc);

		assert_eq!(app.input_mode, InputMode::Normal);
		assert!(app.search_query.is_empty());
		assert_eq!(app.users.len(), 2);
	}
}
