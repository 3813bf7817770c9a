use crate::course::CompletionOutcome;
use crate::dashboard::Dashboard;
use crate::data::read_catalog_embedded;
use crate::error::{DriveError, LoginError};
use crate::games::ActiveGame;
use crate::login::{LoginEvent, LoginStep, LoginWorker};
use crate::model::{AppState, Catalog};
use crate::session::Session;
use eframe::egui;
use egui_commonmark::CommonMarkCache;
use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use crate::api::AuthApi;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

// Submodules
pub mod completion;
pub mod course;
pub mod login;
pub mod view_models;

pub use crate::view_models::{CourseCard, ModuleNavInfo};

/// The only thing kept between runs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Login window state. Closing the window abandons any running attempt.
#[derive(Default)]
pub struct LoginPanel {
    pub open: bool,
    pub step: LoginStep,
    pub worker: Option<LoginWorker>,
    pub name: String,
    pub surname: String,
    pub submitting: bool,
}

pub struct AcademyApp {
    pub prefs: Preferences,
    pub state: AppState,
    pub catalog: Catalog,
    pub session: Option<Session>,
    pub dashboard: Option<Dashboard>,
    pub game: Option<ActiveGame>,
    pub completion: Option<CompletionOutcome>,
    pub login: LoginPanel,
    pub message: String,
    pub cm_cache: CommonMarkCache,
    #[cfg(not(target_arch = "wasm32"))]
    pub api: Arc<dyn AuthApi>,
}

impl AcademyApp {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        use crate::api::HttpAuthApi;
        use crate::config::ApiConfig;

        let config = ApiConfig::default();
        log::info!("backend: {}", config.host);
        Self::with_api(Arc::new(HttpAuthApi::new(config)))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_api(api: Arc<dyn AuthApi>) -> Self {
        Self::build(api)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self::build()
    }

    fn build(#[cfg(not(target_arch = "wasm32"))] api: Arc<dyn AuthApi>) -> Self {
        let (catalog, message) = match read_catalog_embedded() {
            Ok(catalog) => (catalog, String::new()),
            Err(err) => {
                log::error!("catalog failed to load: {err}");
                (
                    Catalog {
                        courses: Vec::new(),
                        achievements: Vec::new(),
                    },
                    "Kurs kataloğu yüklenemedi.".to_string(),
                )
            }
        };

        Self {
            prefs: Preferences::default(),
            state: AppState::Landing,
            catalog,
            session: None,
            dashboard: None,
            game: None,
            completion: None,
            login: LoginPanel::default(),
            message,
            cm_cache: CommonMarkCache::default(),
            #[cfg(not(target_arch = "wasm32"))]
            api,
        }
    }

    /// Restores the saved preferences and applies the theme.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::new();
        if let Some(prefs) = cc
            .storage
            .and_then(|storage| eframe::get_value::<Preferences>(storage, eframe::APP_KEY))
        {
            app.prefs = prefs;
        }
        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_visuals(if self.prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark: bool) {
        self.prefs.dark_mode = dark;
        self.apply_theme(ctx);
    }

    /// Whether this platform can reach a flash drive at all.
    pub fn login_supported(&self) -> bool {
        cfg!(not(target_arch = "wasm32"))
    }

    pub fn unsupported_warning(&self) -> String {
        DriveError::Unsupported.to_string()
    }

    /// Signed-in state: fresh dashboard for the new session.
    pub fn begin_session(&mut self, session: Session) {
        log::info!("signed in as {}", session.short_wallet());
        self.dashboard = Some(Dashboard::new(self.catalog.clone()));
        self.session = Some(session);
        self.game = None;
        self.completion = None;
        self.message.clear();
        self.state = AppState::Dashboard;
    }

    pub fn logout(&mut self) {
        log::info!("signed out");
        self.session = None;
        self.dashboard = None;
        self.game = None;
        self.completion = None;
        self.login = LoginPanel::default();
        self.message.clear();
        self.state = AppState::Landing;
    }

    pub(crate) fn apply_login_event(&mut self, event: LoginEvent) {
        match self.login.step.next(event.clone()) {
            Some(step) => self.login.step = step,
            None => log::warn!("ignored login event {event:?} in {:?}", self.login.step),
        }
    }

    pub(crate) fn login_error(&self) -> Option<&LoginError> {
        match &self.login.step {
            LoginStep::Initial { error } | LoginStep::Registration { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}
