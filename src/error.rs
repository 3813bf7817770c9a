// src/error.rs

use std::fmt;

/// Failures of the directory/file port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveError {
    /// The learner closed the picker without choosing.
    Cancelled,
    PermissionDenied,
    /// No directory access on this platform.
    Unsupported,
    Io(String),
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::Cancelled => write!(f, "Flash bellek seçimi iptal edildi."),
            DriveError::PermissionDenied => {
                write!(f, "Flash bellek erişimi reddedildi. Lütfen izin verin.")
            }
            DriveError::Unsupported => write!(
                f,
                "Tarayıcınız dosya sistemi erişimini desteklemiyor. Chrome veya Edge kullanın."
            ),
            DriveError::Io(msg) => {
                write!(f, "Flash bellek erişimi sırasında hata oluştu: {msg}")
            }
        }
    }
}

impl std::error::Error for DriveError {}

impl From<std::io::Error> for DriveError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => DriveError::PermissionDenied,
            _ => DriveError::Io(err.to_string()),
        }
    }
}

/// Everything that can send the login wizard back to an interactive step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    Drive(DriveError),
    WalletWrite(DriveError),
    Http { status: u16 },
    Transport(String),
    MalformedResponse(String),
    InvalidWalletCode,
    UnexpectedStatus(String),
    RegistrationFailed,
    MissingName,
}

impl LoginError {
    /// Whether the learner can simply try again from the same screen.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LoginError::Drive(DriveError::Unsupported))
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::Drive(err) => write!(f, "{err}"),
            LoginError::WalletWrite(err) => write!(f, "Wallet dosyası oluşturulamadı: {err}"),
            LoginError::Http { status } => {
                write!(f, "HTTP {status}: {}", http_error_message(*status))
            }
            LoginError::Transport(msg) => write!(f, "Sunucuya ulaşılamadı: {msg}"),
            LoginError::MalformedResponse(msg) => write!(f, "Sunucu yanıtı okunamadı: {msg}"),
            LoginError::InvalidWalletCode => write!(
                f,
                "Geçersiz cüzdan kodu. Lütfen wallet dosyanızı kontrol edin."
            ),
            LoginError::UnexpectedStatus(_) => {
                write!(f, "Beklenmeyen bir yanıt alındı. Lütfen tekrar deneyin.")
            }
            LoginError::RegistrationFailed => write!(f, "Kullanıcı kaydı başarısız."),
            LoginError::MissingName => write!(f, "Ad ve soyad alanları zorunludur."),
        }
    }
}

impl std::error::Error for LoginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoginError::Drive(err) | LoginError::WalletWrite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DriveError> for LoginError {
    fn from(err: DriveError) -> Self {
        LoginError::Drive(err)
    }
}

/// Fixed learner-facing text per HTTP status.
pub fn http_error_message(status: u16) -> &'static str {
    match status {
        400 => "Geçersiz istek. Lütfen wallet kodunuzu kontrol edin.",
        401 => "Yetkilendirme hatası. Lütfen tekrar giriş yapmayı deneyin.",
        403 => "Bu işlem için yetkiniz bulunmuyor.",
        404 => "Kullanıcı bulunamadı. Lütfen kayıt olmayı deneyin.",
        429 => "Çok fazla istek gönderildi. Lütfen biraz bekleyin.",
        500 => "Sunucu hatası. Lütfen daha sonra tekrar deneyin.",
        502 => "Sunucu geçici olarak kullanılamıyor.",
        503 => "Servis geçici olarak kullanılamıyor.",
        _ => "Bilinmeyen bir hata oluştu.",
    }
}
