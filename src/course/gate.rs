//! Pass/fail decision for a finished course attempt.

pub const PASS_THRESHOLD: u8 = 80;

pub fn passes(success_rate: u8) -> bool {
    success_rate >= PASS_THRESHOLD
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub success_rate: u8,
    pub passed: bool,
    /// Badge tier; never true without `passed`.
    pub excellent: bool,
}

impl CompletionOutcome {
    pub fn evaluate(success_rate: u8) -> Self {
        let passed = passes(success_rate);
        Self {
            success_rate,
            passed,
            excellent: passed,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.passed {
            "Kurs Tamamlandı!"
        } else {
            "Kurs Başarısız"
        }
    }

    pub fn grade(&self) -> &'static str {
        if self.excellent {
            "Mükemmel"
        } else {
            "Başarısız"
        }
    }

    pub fn message(&self) -> &'static str {
        if self.passed {
            "Tebrikler! Stellar blockchain konusunda gerçekten uzmanlaştın! 🎉"
        } else {
            "Maalesef kursu geçemedin. Ancak vazgeçme! 💪"
        }
    }

    pub fn description(&self) -> &'static str {
        if self.passed {
            "Bu başarı oranı ile blockchain dünyasında kendine güvenle yer açabilirsin."
        } else {
            "Başarılı olmak için en az %80 puan alman gerekiyor. Konuları tekrar ederek yeniden deneyebilirsin."
        }
    }

    pub fn next_steps_title(&self) -> &'static str {
        if self.passed {
            "Sonraki Adımlar:"
        } else {
            "Tekrar Denemek İçin:"
        }
    }

    pub fn next_steps(&self) -> [&'static str; 3] {
        if self.passed {
            [
                "Stellar Smart Contracts kursuna geç",
                "Pratik projeler ile deneyim kazan",
                "Topluluk etkinliklerine katıl",
            ]
        } else {
            [
                "Ders notlarını tekrar gözden geçir",
                "Oyunları tekrar oynayarak pratik yap",
                "Anlamadığın konuları araştır",
            ]
        }
    }

    pub fn close_label(&self) -> &'static str {
        if self.passed {
            "Dashboard'a Dön"
        } else {
            "Tekrar Dene"
        }
    }
}
