use super::*;
use crate::wallet::DriveAccess;

impl AcademyApp {
    pub fn open_login(&mut self) {
        self.login = LoginPanel {
            open: true,
            ..LoginPanel::default()
        };
    }

    /// Closes the window; a running worker is abandoned.
    pub fn close_login(&mut self) {
        self.login = LoginPanel::default();
    }

    pub fn start_login(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        self.start_login_with(Box::new(crate::wallet::FolderDrive));
        #[cfg(target_arch = "wasm32")]
        self.start_login_with(Box::new(crate::wallet::UnsupportedDrive));
    }

    pub fn start_login_with(&mut self, drive: Box<dyn DriveAccess>) {
        if !drive.is_supported() {
            self.login.step = LoginStep::Initial {
                error: Some(LoginError::Drive(DriveError::Unsupported)),
            };
            return;
        }
        let Some(step) = self.login.step.next(LoginEvent::Start) else {
            return;
        };
        self.login.step = step;

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.login.worker = Some(LoginWorker::spawn_login(drive, self.api.clone()));
        }
    }

    pub fn submit_registration(&mut self) {
        let wallet_code = match &self.login.step {
            LoginStep::Registration { wallet_code, .. } => wallet_code.clone(),
            _ => return,
        };
        if self.login.submitting {
            return;
        }
        if self.login.name.trim().is_empty() || self.login.surname.trim().is_empty() {
            self.apply_login_event(LoginEvent::RegistrationRejected(LoginError::MissingName));
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.login.submitting = true;
            self.login.worker = Some(LoginWorker::spawn_registration(
                self.api.clone(),
                wallet_code,
                self.login.name.clone(),
                self.login.surname.clone(),
            ));
        }
        #[cfg(target_arch = "wasm32")]
        let _ = wallet_code;
    }

    /// Registration back button.
    pub fn cancel_registration(&mut self) {
        self.login.submitting = false;
        self.login.worker = None;
        self.apply_login_event(LoginEvent::Back);
    }

    /// Drains worker events; called once per frame.
    pub fn poll_login(&mut self) {
        let mut events = Vec::new();
        if let Some(worker) = &self.login.worker {
            while let Some(event) = worker.try_recv() {
                events.push(event);
            }
        }
        if events.is_empty() {
            return;
        }

        for event in events {
            if matches!(
                event,
                LoginEvent::Authenticated(_) | LoginEvent::RegistrationRejected(_)
            ) {
                self.login.submitting = false;
            }
            self.apply_login_event(event);
        }

        if !self.login.step.is_in_progress() && !self.login.submitting {
            self.login.worker = None;
        }

        if let LoginStep::Success(session) = &self.login.step {
            let session = session.clone();
            self.close_login();
            self.begin_session(session);
        }
    }

    pub fn is_login_busy(&self) -> bool {
        self.login.step.is_in_progress() || self.login.submitting
    }
}
