/// Authenticated learner, owned by the app between login and logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub wallet_code: String,
    pub token: String,
    pub display_name: String,
}

impl Session {
    pub fn new(wallet_code: &str, token: &str, name: &str, surname: &str) -> Self {
        let display_name = format!("{} {}", name.trim(), surname.trim())
            .trim()
            .to_string();
        Self {
            wallet_code: wallet_code.to_string(),
            token: token.to_string(),
            display_name,
        }
    }

    /// First eight characters of the wallet code followed by `...`.
    pub fn short_wallet(&self) -> String {
        let head: String = self.wallet_code.chars().take(8).collect();
        format!("{head}...")
    }

    pub fn first_name(&self) -> &str {
        self.display_name.split_whitespace().next().unwrap_or("")
    }
}
