use iced::{Application, Command, Element, Settings, Size, Subscription, Theme};
use std::sync::Arc;
use anyhow::{Result, Context};
use log::{error, info};

use crate::config::AppConfig;
use crate::session::{self, Credentials, SessionContext};
use crate::utils::api_client::Transport;
use crate::utils::csv_exporter;
use super::catalog_view::CatalogRenderer;
use super::constants::TOAST_TICK;
use super::login_view::LoginRenderer;
use super::state::AppState;
use super::types::{Message, Screen};
use super::views::DashboardRenderer;

/// Everything the GUI needs from startup.
pub struct Flags {
	pub config: AppConfig,
	pub session: SessionContext,
	pub transport: Arc<dyn Transport>,
}

pub struct AdminApp {
	state: AppState,
}

impl Application for AdminApp {
	type Executor = iced::executor::Default;
	type Message = Message;
	type Theme = Theme;
	type Flags = Flags;

	fn new(flags: Self::Flags) -> (Self, Command<Self::Message>) {
		let mut state = AppState::new(flags.config, flags.session, flags.transport);
		let command = state.load_catalog();
		(AdminApp { state }, command)
	}

	fn title(&self) -> String {
		match self.state.screen {
			Screen::Catalog => String::from("Pulse Robot"),
			Screen::Login => String::from("Pulse Robot - Área Administrativa"),
			Screen::Dashboard => String::from("Pulse Robot - Painel Administrativo"),
		}
	}

	fn update(&mut self, message: Message) -> Command<Message> {
		match message {
			Message::ShowCatalog => self.state.load_catalog(),

			Message::ShowAdmin => self.state.enter_dashboard(),

			Message::TabSelected(tab) => {
				self.state.current_tab = tab;
				Command::none()
			}

			Message::CatalogLoaded(result) => {
				self.state.apply_catalog(result);
				Command::none()
			}

			Message::RefreshCatalog => self.state.load_catalog(),

			// Purchase buttons are decorative
			Message::CatalogActionPressed => Command::none(),

			Message::UsernameChanged(username) => {
				self.state.login.username = username;
				Command::none()
			}

			Message::PasswordChanged(password) => {
				self.state.login.password = password;
				Command::none()
			}

			Message::TogglePasswordVisibility => {
				self.state.login.show_password = !self.state.login.show_password;
				Command::none()
			}

			Message::LoginSubmitted => {
				if self.state.login.submitting {
					return Command::none();
				}
				self.state.login.submitting = true;
				let credentials = Credentials {
					username: self.state.login.username.clone(),
					password: self.state.login.password.clone(),
				};
				Command::perform(
					session::login(
						self.state.session.clone(),
						credentials,
						self.state.config.login_delay,
					),
					|result| Message::LoginFinished(result.map_err(|e| e.to_string())),
				)
			}

			Message::LoginFinished(result) => {
				self.state.login.submitting = false;
				match result {
					Ok(username) => {
						info!("Login succeeded for {}", username);
						self.state.login.password.clear();
						self.state.toasts.success("Login realizado com sucesso!");
						self.state.enter_dashboard()
					}
					Err(err) => {
						error!("Login failed: {}", err);
						self.state.toasts.error("Credenciais inválidas. Tente novamente.");
						Command::none()
					}
				}
			}

			Message::Logout => self.state.logout(),

			Message::Robots(msg) => self
				.state
				.robots
				.update(msg, &mut self.state.toasts)
				.map(Message::Robots),

			Message::Testimonials(msg) => self
				.state
				.testimonials
				.update(msg, &mut self.state.toasts)
				.map(Message::Testimonials),

			Message::Contacts(msg) => self
				.state
				.contacts
				.update(msg, &mut self.state.toasts)
				.map(Message::Contacts),

			Message::Waitlist(msg) => self
				.state
				.waitlist
				.update(msg, &mut self.state.toasts)
				.map(Message::Waitlist),

			Message::ExportWaitlist => {
				if self.state.waitlist.items.is_empty() {
					self.state.toasts.error("Não há dados para exportar");
					return Command::none();
				}
				if self.state.exporting {
					return Command::none();
				}
				self.state.exporting = true;

				let entries = self.state.waitlist.items.clone();
				let dir = self.state.config.export_dir.clone();
				Command::perform(
					async move {
						tokio::task::spawn_blocking(move || csv_exporter::export_waitlist(&entries, &dir))
							.await
							.context("Export task join error")?
					},
					|result: Result<std::path::PathBuf>| {
						Message::WaitlistExported(result.map_err(|e| format!("{:#}", e)))
					},
				)
			}

			Message::WaitlistExported(result) => {
				self.state.exporting = false;
				match result {
					Ok(path) => {
						info!("Waitlist exported to {:?}", path);
						self.state.toasts.success("Lista de espera exportada com sucesso!");
					}
					Err(err) => {
						error!("Failed to export waitlist: {}", err);
						self.state.toasts.error("Não foi possível exportar a lista de espera");
					}
				}
				Command::none()
			}

			Message::Tick => {
				self.state.toasts.expire(std::time::Instant::now());
				Command::none()
			}

			Message::DismissToast(id) => {
				self.state.toasts.dismiss(id);
				Command::none()
			}
		}
	}

	fn subscription(&self) -> Subscription<Message> {
		if self.state.toasts.is_empty() {
			Subscription::none()
		} else {
			iced::time::every(TOAST_TICK).map(|_| Message::Tick)
		}
	}

	fn view(&self) -> Element<Message> {
		let screen = match self.state.screen {
			Screen::Catalog => self.state.catalog_screen(),
			Screen::Login => self.state.login_screen(),
			Screen::Dashboard => self.state.dashboard(),
		};

		let content = iced::widget::column![
			self.state.toast_bar(),
			screen,
		]
			.spacing(10)
			.padding(20)
			.width(iced::Length::Fill);

		iced::widget::container(content)
			.width(iced::Length::Fill)
			.height(iced::Length::Fill)
			.center_x()
			.into()
	}
}

pub fn run(flags: Flags) -> Result<()> {
	let mut settings = Settings::with_flags(flags);
	settings.window.size = Size::new(1200.0, 800.0);
	settings.window.min_size = Some(Size::new(900.0, 600.0));
	settings.window.resizable = true;

	AdminApp::run(settings)
		.context("Failed to run admin application")?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::repositories::local_storage::MemoryStore;
	use crate::testing::FakeBackend;

	fn app() -> AdminApp {
		let session = SessionContext::new(Arc::new(MemoryStore::new()));
		AdminApp {
			state: AppState::new(AppConfig::load(), session, Arc::new(FakeBackend::new())),
		}
	}

	#[test]
	fn failed_login_keeps_form_and_unlocks_it() {
		let mut app = app();
		app.state.screen = Screen::Login;
		app.state.login.username = "admin".into();
		app.state.login.password = "wrong".into();
		app.state.login.submitting = true;

		let _ = app.update(Message::LoginFinished(Err("invalid credentials".into())));

		assert_eq!(app.state.screen, Screen::Login);
		assert_eq!(app.state.login.username, "admin");
		assert_eq!(app.state.login.password, "wrong");
		assert!(!app.state.login.submitting);
		assert_eq!(
			app.state.toasts.last().unwrap().text,
			"Credenciais inválidas. Tente novamente."
		);
	}

	#[test]
	fn successful_login_opens_dashboard() {
		let mut app = app();
		app.state.screen = Screen::Login;
		app.state.login.submitting = true;
		app.state
			.session
			.save(&crate::session::SessionRecord::authenticated("admin"))
			.unwrap();

		let _ = app.update(Message::LoginFinished(Ok("admin".into())));

		assert_eq!(app.state.screen, Screen::Dashboard);
		assert!(!app.state.login.submitting);
		assert!(app.state.login.password.is_empty());
	}
}
