use std::sync::Arc;
use iced::Command;
use log::{error, info};

use crate::catalog::{self, CatalogItem};
use crate::config::AppConfig;
use crate::models::robot::Robot;
use crate::models::contact::Contact;
use crate::models::testimonial::Testimonial;
use crate::models::waitlist::WaitlistEntry;
use crate::repositories::remote::Repository;
use crate::session::{GuardOutcome, SessionContext};
use crate::utils::api_client::Transport;
use super::panel::PanelState;
use super::toast::Toasts;
use super::types::{Message, Screen, Tab};

#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub show_password: bool,
    pub submitting: bool,
}

#[derive(Debug, Default)]
pub struct CatalogState {
    pub loading: bool,
    pub items: Vec<CatalogItem>,
    pub error: Option<String>,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: SessionContext,
    catalog_repo: Repository<Robot>,

    // Navigation
    pub screen: Screen,
    pub current_tab: Tab,
    pub admin_user: Option<String>,

    // Public and login screens
    pub catalog: CatalogState,
    pub login: LoginForm,

    // Admin panels
    pub robots: PanelState<Robot>,
    pub testimonials: PanelState<Testimonial>,
    pub contacts: PanelState<Contact>,
    pub waitlist: PanelState<WaitlistEntry>,
    pub exporting: bool,

    pub toasts: Toasts,
}

impl AppState {
    pub fn new(config: AppConfig, session: SessionContext, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            session,
            catalog_repo: Repository::new(transport.clone()),

            screen: Screen::Catalog,
            current_tab: Tab::Robots,
            admin_user: None,

            catalog: CatalogState::default(),
            login: LoginForm::default(),

            robots: PanelState::new(Repository::new(transport.clone())),
            testimonials: PanelState::new(Repository::new(transport.clone())),
            contacts: PanelState::new(Repository::new(transport.clone())),
            waitlist: PanelState::new(Repository::new(transport)),
            exporting: false,

            toasts: Toasts::default(),
        }
    }

    /// Shows the public catalog and fetches it again.
    pub fn load_catalog(&mut self) -> Command<Message> {
        self.screen = Screen::Catalog;
        self.catalog.loading = true;
        self.catalog.error = None;

        let repo = self.catalog_repo.clone();
        Command::perform(catalog::load_catalog(repo), |result| {
            Message::CatalogLoaded(result.map_err(|e| e.to_string()))
        })
    }

    pub fn apply_catalog(&mut self, result: Result<Vec<CatalogItem>, String>) {
        self.catalog.loading = false;
        match result {
            Ok(items) => {
                self.catalog.items = items;
                self.catalog.error = None;
            }
            Err(err) => {
                error!("Failed to load catalog: {}", err);
                self.catalog.items.clear();
                self.catalog.error = Some(
                    "Erro ao carregar os robôs. Por favor, tente novamente mais tarde.".to_string(),
                );
            }
        }
    }

    /// Runs the session guard; on success opens the dashboard and loads every panel.
    pub fn enter_dashboard(&mut self) -> Command<Message> {
        match self.session.guard() {
            GuardOutcome::Admitted { username } => {
                info!("Opening dashboard for {}", username);
                self.admin_user = Some(username);
                self.screen = Screen::Dashboard;
                Command::batch(vec![
                    self.robots.reload().map(Message::Robots),
                    self.testimonials.reload().map(Message::Testimonials),
                    self.contacts.reload().map(Message::Contacts),
                    self.waitlist.reload().map(Message::Waitlist),
                ])
            }
            GuardOutcome::Missing => {
                self.toasts.error("Você precisa fazer login para acessar esta página");
                self.show_login();
                Command::none()
            }
            GuardOutcome::Unauthenticated | GuardOutcome::Corrupt => {
                self.toasts.error("Sessão inválida. Faça login novamente.");
                self.show_login();
                Command::none()
            }
        }
    }

    fn show_login(&mut self) {
        self.admin_user = None;
        self.screen = Screen::Login;
    }

    pub fn logout(&mut self) -> Command<Message> {
        if let Err(e) = self.session.logout() {
            error!("Failed to clear admin session: {:#}", e);
            self.toasts.error("Não foi possível encerrar a sessão. Tente novamente.");
            return Command::none();
        }
        self.admin_user = None;
        self.login = LoginForm::default();
        self.toasts.success("Logout realizado com sucesso");
        self.load_catalog()
    }
}
