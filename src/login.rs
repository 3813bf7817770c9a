//! Wallet login wizard: drive access, token file, backend validation and
//! registration.

use crate::api::{AuthApi, CreateUserRequest, UserStatus};
use crate::error::LoginError;
use crate::session::Session;
use crate::wallet::token_file::parse_wallet_code;
use crate::wallet::{DriveAccess, WALLET_FILE_NAME, WalletDescriptor, generate_wallet_code};
use chrono::Utc;
use std::sync::mpsc::Receiver;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, mpsc::Sender};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginStep {
    Initial { error: Option<LoginError> },
    RequestingAccess,
    CheckingDrive,
    CheckingWallet,
    CreatingWallet,
    Validating,
    Registration {
        wallet_code: String,
        error: Option<LoginError>,
    },
    Success(Session),
}

impl Default for LoginStep {
    fn default() -> Self {
        LoginStep::Initial { error: None }
    }
}

impl LoginStep {
    /// Steps where the worker is busy and the learner can only wait.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            LoginStep::RequestingAccess
                | LoginStep::CheckingDrive
                | LoginStep::CheckingWallet
                | LoginStep::CreatingWallet
                | LoginStep::Validating
        )
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            LoginStep::Initial { .. } => "Flash belleğinizi seçerek giriş yapın.",
            LoginStep::RequestingAccess => "Flash bellek erişimi isteniyor...",
            LoginStep::CheckingDrive => "Flash bellek kontrol ediliyor...",
            LoginStep::CheckingWallet => "Wallet dosyası aranıyor...",
            LoginStep::CreatingWallet => "Yeni wallet oluşturuluyor...",
            LoginStep::Validating => "Wallet doğrulanıyor...",
            LoginStep::Registration { .. } => "Kayıt bilgilerinizi girin.",
            LoginStep::Success(_) => "Giriş başarılı!",
        }
    }

    /// Next step for `event`, or `None` when the event is not legal here.
    pub fn next(&self, event: LoginEvent) -> Option<LoginStep> {
        use LoginEvent as E;
        use LoginStep as S;

        let step = match (self, event) {
            (_, E::Reset) => S::default(),
            (S::Initial { .. }, E::Start) => S::RequestingAccess,
            (S::RequestingAccess, E::AccessGranted) => S::CheckingDrive,
            (S::CheckingDrive, E::DriveAccepted) => S::CheckingWallet,
            (S::CheckingWallet, E::WalletFound) => S::Validating,
            (S::CheckingWallet, E::WalletMissing) => S::CreatingWallet,
            (S::CreatingWallet, E::WalletCreated) => S::Validating,
            (S::Validating, E::Authenticated(session)) => S::Success(session),
            (S::Validating, E::RegistrationRequired { wallet_code }) => S::Registration {
                wallet_code,
                error: None,
            },
            (S::Registration { .. }, E::Authenticated(session)) => S::Success(session),
            (S::Registration { wallet_code, .. }, E::RegistrationRejected(err)) => {
                S::Registration {
                    wallet_code: wallet_code.clone(),
                    error: Some(err),
                }
            }
            (S::Registration { .. }, E::Back) => S::default(),
            (step, E::Failed(err)) if step.is_in_progress() => S::Initial { error: Some(err) },
            _ => return None,
        };
        Some(step)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    Start,
    AccessGranted,
    DriveAccepted,
    WalletFound,
    WalletMissing,
    WalletCreated,
    Authenticated(Session),
    RegistrationRequired { wallet_code: String },
    RegistrationRejected(LoginError),
    Failed(LoginError),
    Back,
    Reset,
}

/// Runs everything after `Start`: picks the directory, reads or creates the
/// token file and validates the code. Each step is reported through `emit`,
/// ending with `Authenticated`, `RegistrationRequired` or `Failed`.
pub fn run_login(
    drive: &mut dyn DriveAccess,
    api: &dyn AuthApi,
    emit: &mut dyn FnMut(LoginEvent),
) {
    match login_steps(drive, api, emit) {
        Ok(event) => emit(event),
        Err(err) => {
            log::warn!("login failed: {err}");
            emit(LoginEvent::Failed(err));
        }
    }
}

fn login_steps(
    drive: &mut dyn DriveAccess,
    api: &dyn AuthApi,
    emit: &mut dyn FnMut(LoginEvent),
) -> Result<LoginEvent, LoginError> {
    let dir = drive.request_directory()?;
    emit(LoginEvent::AccessGranted);
    log::info!("drive selected: {}", dir.name);

    // Any directory is accepted as a flash drive.
    emit(LoginEvent::DriveAccepted);

    let existing = drive
        .read_file(&dir, WALLET_FILE_NAME)?
        .map(|content| parse_wallet_code(&content))
        .filter(|code| !code.is_empty());

    let wallet_code = match existing {
        Some(code) => {
            emit(LoginEvent::WalletFound);
            code
        }
        None => {
            emit(LoginEvent::WalletMissing);
            let code = generate_wallet_code();
            let descriptor = WalletDescriptor::new(&code, &dir.name, Utc::now());
            drive
                .write_file(&dir, WALLET_FILE_NAME, &descriptor.to_file_contents())
                .map_err(LoginError::WalletWrite)?;
            log::info!("new wallet written to {}", dir.name);
            emit(LoginEvent::WalletCreated);
            code
        }
    };

    validate(api, &wallet_code)
}

fn validate(api: &dyn AuthApi, wallet_code: &str) -> Result<LoginEvent, LoginError> {
    let response = match api.check_user(wallet_code) {
        Ok(response) => response,
        Err(LoginError::Http { status: 404 }) => {
            return Ok(LoginEvent::RegistrationRequired {
                wallet_code: wallet_code.to_string(),
            });
        }
        Err(err) => return Err(err),
    };

    match response.user_status() {
        UserStatus::Success => {
            let token = response
                .token
                .as_deref()
                .filter(|t| !t.is_empty())
                .ok_or_else(|| LoginError::MalformedResponse("token eksik".to_string()))?;
            Ok(LoginEvent::Authenticated(Session::new(
                wallet_code,
                token,
                &response.name,
                &response.surname,
            )))
        }
        UserStatus::RegistrationRequired => Ok(LoginEvent::RegistrationRequired {
            wallet_code: wallet_code.to_string(),
        }),
        UserStatus::InvalidCode => Err(LoginError::InvalidWalletCode),
        UserStatus::Unknown => Err(LoginError::UnexpectedStatus(response.status)),
    }
}

/// Registers the learner for `wallet_code`. Names are trimmed and both are
/// required.
pub fn register(
    api: &dyn AuthApi,
    wallet_code: &str,
    name: &str,
    surname: &str,
) -> Result<Session, LoginError> {
    let (name, surname) = (name.trim(), surname.trim());
    if name.is_empty() || surname.is_empty() {
        return Err(LoginError::MissingName);
    }

    let request = CreateUserRequest {
        name: name.to_string(),
        surname: surname.to_string(),
        public_key: wallet_code.to_string(),
    };
    let (_, token) = api
        .create_user(&request)?
        .accepted()
        .ok_or(LoginError::RegistrationFailed)?;
    log::info!("registered new learner");
    Ok(Session::new(wallet_code, &token, name, surname))
}

/// Events from a background login or registration attempt, polled by the UI
/// once per frame.
pub struct LoginWorker {
    rx: Receiver<LoginEvent>,
}

impl LoginWorker {
    pub fn try_recv(&self) -> Option<LoginEvent> {
        self.rx.try_recv().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn_login(
        mut drive: Box<dyn DriveAccess>,
        api: Arc<dyn AuthApi>,
    ) -> Self {
        let (tx, rx) = std::sync::mpsc::channel::<LoginEvent>();
        std::thread::spawn(move || {
            run_login(drive.as_mut(), api.as_ref(), &mut sender(&tx));
        });
        Self { rx }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn_registration(
        api: Arc<dyn AuthApi>,
        wallet_code: String,
        name: String,
        surname: String,
    ) -> Self {
        let (tx, rx) = std::sync::mpsc::channel::<LoginEvent>();
        std::thread::spawn(move || {
            let event = match register(api.as_ref(), &wallet_code, &name, &surname) {
                Ok(session) => LoginEvent::Authenticated(session),
                Err(err) => LoginEvent::RegistrationRejected(err),
            };
            let _ = tx.send(event);
        });
        Self { rx }
    }
}

// The receiver may be gone if the learner closed the login window.
#[cfg(not(target_arch = "wasm32"))]
fn sender(tx: &Sender<LoginEvent>) -> impl FnMut(LoginEvent) + '_ {
    move |event| {
        let _ = tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CheckUserResponse, CreateUserResponse, CreatedUser};
    use crate::error::DriveError;
    use crate::wallet::MemoryDrive;
    use std::sync::Mutex;

    struct FakeApi {
        check: Result<CheckUserResponse, LoginError>,
        create: Result<CreateUserResponse, LoginError>,
        checked: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn with_status(status: &str, token: Option<&str>) -> Self {
            Self::with_check(Ok(CheckUserResponse {
                name: "Ayşe".into(),
                surname: "Yılmaz".into(),
                token: token.map(str::to_string),
                status: status.into(),
            }))
        }

        fn with_check(check: Result<CheckUserResponse, LoginError>) -> Self {
            Self {
                check,
                create: Err(LoginError::Transport("unused".into())),
                checked: Mutex::new(Vec::new()),
            }
        }

        fn creating(mut self, create: Result<CreateUserResponse, LoginError>) -> Self {
            self.create = create;
            self
        }
    }

    impl AuthApi for FakeApi {
        fn check_user(&self, wallet_code: &str) -> Result<CheckUserResponse, LoginError> {
            self.checked.lock().unwrap().push(wallet_code.to_string());
            self.check.clone()
        }

        fn create_user(
            &self,
            _request: &CreateUserRequest,
        ) -> Result<CreateUserResponse, LoginError> {
            self.create.clone()
        }
    }

    fn drive_steps(drive: &mut MemoryDrive, api: &FakeApi) -> (Vec<LoginEvent>, LoginStep) {
        let mut events = Vec::new();
        run_login(drive, api, &mut |e| events.push(e));
        let mut step = LoginStep::default().next(LoginEvent::Start).unwrap();
        for event in events.clone() {
            step = step.next(event).expect("every emitted event is legal");
        }
        (events, step)
    }

    #[test]
    fn existing_wallet_logs_in() {
        let mut drive = MemoryDrive::new("USB").with_file("wallet.txt", "PUBLIC=ABC123\n");
        let api = FakeApi::with_status("başarılı", Some("tok"));
        let (events, step) = drive_steps(&mut drive, &api);

        assert!(events.contains(&LoginEvent::WalletFound));
        assert_eq!(*api.checked.lock().unwrap(), vec!["ABC123".to_string()]);
        match step {
            LoginStep::Success(session) => {
                assert_eq!(session.wallet_code, "ABC123");
                assert_eq!(session.token, "tok");
                assert_eq!(session.first_name(), "Ayşe");
            }
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn missing_wallet_is_created_then_validated() {
        let mut drive = MemoryDrive::new("KINGSTON");
        let api = FakeApi::with_status("başarısız", None);
        let (events, step) = drive_steps(&mut drive, &api);

        assert!(events.contains(&LoginEvent::WalletCreated));
        let written = drive.file("wallet.txt").unwrap();
        assert!(written.contains("DEVICE=KINGSTON"));
        assert!(written.contains("PLATFORM=Stellar Academy"));
        let code = parse_wallet_code(written);
        assert_eq!(code.len(), 32);
        assert_eq!(
            step,
            LoginStep::Registration {
                wallet_code: code,
                error: None
            }
        );
    }

    #[test]
    fn cancelled_picker_returns_to_initial() {
        let mut drive = MemoryDrive::new("USB").failing_pick(DriveError::Cancelled);
        let api = FakeApi::with_status("başarılı", Some("tok"));
        let (_, step) = drive_steps(&mut drive, &api);
        assert_eq!(
            step,
            LoginStep::Initial {
                error: Some(LoginError::Drive(DriveError::Cancelled))
            }
        );
        assert!(api.checked.lock().unwrap().is_empty());
    }

    #[test]
    fn write_failure_aborts_attempt() {
        let mut drive =
            MemoryDrive::new("USB").failing_write(DriveError::Io("read-only".into()));
        let api = FakeApi::with_status("başarılı", Some("tok"));
        let (_, step) = drive_steps(&mut drive, &api);
        assert!(matches!(
            step,
            LoginStep::Initial {
                error: Some(LoginError::WalletWrite(_))
            }
        ));
        assert!(api.checked.lock().unwrap().is_empty());
    }

    #[test]
    fn invalid_and_unknown_statuses_fail() {
        let mut drive = MemoryDrive::new("USB").with_file("wallet.txt", "abc");
        let api = FakeApi::with_status("Geçersiz Cüzdan Kodu", None);
        let (_, step) = drive_steps(&mut drive, &api);
        assert_eq!(
            step,
            LoginStep::Initial {
                error: Some(LoginError::InvalidWalletCode)
            }
        );

        let api = FakeApi::with_status("??", None);
        let (_, step) = drive_steps(&mut drive, &api);
        assert!(matches!(
            step,
            LoginStep::Initial {
                error: Some(LoginError::UnexpectedStatus(_))
            }
        ));
    }

    #[test]
    fn not_found_means_registration_other_http_errors_fail() {
        let mut drive = MemoryDrive::new("USB").with_file("wallet.txt", "abc");
        let api = FakeApi::with_check(Err(LoginError::Http { status: 404 }));
        let (_, step) = drive_steps(&mut drive, &api);
        assert!(matches!(step, LoginStep::Registration { .. }));

        let api = FakeApi::with_check(Err(LoginError::Http { status: 500 }));
        let (_, step) = drive_steps(&mut drive, &api);
        assert_eq!(
            step,
            LoginStep::Initial {
                error: Some(LoginError::Http { status: 500 })
            }
        );
    }

    #[test]
    fn registration_requires_both_names() {
        let api = FakeApi::with_status("başarısız", None);
        assert_eq!(
            register(&api, "code", "  ", "Veli"),
            Err(LoginError::MissingName)
        );
    }

    #[test]
    fn registration_success_and_failure() {
        let ok = CreateUserResponse {
            message: "Kullanıcı başarıyla oluşturuldu".into(),
            user: Some(CreatedUser {
                token: Some("t9".into()),
                ..CreatedUser::default()
            }),
        };
        let api = FakeApi::with_status("başarısız", None).creating(Ok(ok));
        let session = register(&api, "code", " Ali ", "Veli").unwrap();
        assert_eq!(session.display_name, "Ali Veli");
        assert_eq!(session.token, "t9");

        let api = FakeApi::with_status("başarısız", None)
            .creating(Ok(CreateUserResponse::default()));
        assert_eq!(
            register(&api, "code", "Ali", "Veli"),
            Err(LoginError::RegistrationFailed)
        );
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        let initial = LoginStep::default();
        assert_eq!(initial.next(LoginEvent::WalletFound), None);
        assert_eq!(initial.next(LoginEvent::Failed(LoginError::MissingName)), None);
        assert_eq!(LoginStep::Validating.next(LoginEvent::Back), None);

        let reg = LoginStep::Registration {
            wallet_code: "c".into(),
            error: None,
        };
        assert_eq!(reg.next(LoginEvent::Back), Some(LoginStep::default()));
        assert_eq!(
            reg.next(LoginEvent::RegistrationRejected(LoginError::MissingName)),
            Some(LoginStep::Registration {
                wallet_code: "c".into(),
                error: Some(LoginError::MissingName)
            })
        );
        assert_eq!(
            LoginStep::CreatingWallet.next(LoginEvent::Reset),
            Some(LoginStep::default())
        );
    }
}
