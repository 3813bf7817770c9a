//! `wallet.txt`: plain `KEY=VALUE` lines.

use chrono::{DateTime, SecondsFormat, Utc};

pub const WALLET_FILE_NAME: &str = "wallet.txt";
pub const WALLET_VERSION: &str = "1.0";
pub const PLATFORM_NAME: &str = "Stellar Academy";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKey {
    Public,
    Created,
    Version,
    Device,
    Platform,
}

impl TokenKey {
    pub const ALL: [TokenKey; 5] = [
        TokenKey::Public,
        TokenKey::Created,
        TokenKey::Version,
        TokenKey::Device,
        TokenKey::Platform,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKey::Public => "PUBLIC",
            TokenKey::Created => "CREATED",
            TokenKey::Version => "VERSION",
            TokenKey::Device => "DEVICE",
            TokenKey::Platform => "PLATFORM",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Recognized `KEY=VALUE` entries of a token file, in file order. Unknown keys
/// and lines without `=` are skipped.
pub fn parse_entries(content: &str) -> Vec<(TokenKey, String)> {
    content
        .lines()
        .filter_map(|line| {
            let (key, value) = line.trim().split_once('=')?;
            Some((TokenKey::parse(key.trim())?, value.trim().to_string()))
        })
        .collect()
}

/// Wallet code stored in a token file: the `PUBLIC` value when there is one,
/// otherwise the whole trimmed content.
pub fn parse_wallet_code(content: &str) -> String {
    parse_entries(content)
        .into_iter()
        .find(|(key, value)| *key == TokenKey::Public && !value.is_empty())
        .map(|(_, value)| value)
        .unwrap_or_else(|| content.trim().to_string())
}

/// Descriptor written when a new wallet is created on a drive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletDescriptor {
    pub public: String,
    pub created: DateTime<Utc>,
    pub version: String,
    pub device: String,
    pub platform: String,
}

impl WalletDescriptor {
    pub fn new(public: &str, device: &str, created: DateTime<Utc>) -> Self {
        Self {
            public: public.to_string(),
            created,
            version: WALLET_VERSION.to_string(),
            device: device.to_string(),
            platform: PLATFORM_NAME.to_string(),
        }
    }

    pub fn to_file_contents(&self) -> String {
        let created = self.created.to_rfc3339_opts(SecondsFormat::Millis, true);
        TokenKey::ALL
            .iter()
            .map(|key| {
                let value = match key {
                    TokenKey::Public => self.public.as_str(),
                    TokenKey::Created => created.as_str(),
                    TokenKey::Version => self.version.as_str(),
                    TokenKey::Device => self.device.as_str(),
                    TokenKey::Platform => self.platform.as_str(),
                };
                format!("{}={}", key.as_str(), value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn public_key_wins() {
        assert_eq!(parse_wallet_code("PUBLIC=ABC123\nCREATED=2024-01-01"), "ABC123");
        assert_eq!(parse_wallet_code("CREATED=2024-01-01\r\nPUBLIC=XYZ\r\n"), "XYZ");
    }

    #[test]
    fn bare_code_is_taken_verbatim() {
        assert_eq!(parse_wallet_code("justacode"), "justacode");
        assert_eq!(parse_wallet_code("  justacode \n"), "justacode");
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let entries = parse_entries("FOO=bar\nVERSION=1.0\nnoise");
        assert_eq!(entries, vec![(TokenKey::Version, "1.0".to_string())]);
    }

    #[test]
    fn descriptor_round_trips_its_public_key() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let descriptor = WalletDescriptor::new("Q7w", "KINGSTON", created);
        let contents = descriptor.to_file_contents();

        assert_eq!(
            contents,
            "PUBLIC=Q7w\nCREATED=2024-01-01T12:00:00.000Z\nVERSION=1.0\nDEVICE=KINGSTON\nPLATFORM=Stellar Academy"
        );
        assert_eq!(parse_wallet_code(&contents), "Q7w");
        assert_eq!(parse_entries(&contents).len(), 5);
    }
}
