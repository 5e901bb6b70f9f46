use serde::{Deserialize, Serialize};

/// 寵物種類。未知種類保留原始字串，模板會走通用路徑。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
    Other(String),
}

impl Species {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "dog" => Species::Dog,
            "cat" => Species::Cat,
            other => Species::Other(if other.is_empty() {
                "pet".to_string()
            } else {
                other.to_string()
            }),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Other(name) => name,
        }
    }
}

/// 六個照護計畫類別；未知類別保留原始字串並走通用模板。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanCategory {
    Nutrition,
    Training,
    Health,
    Activities,
    Grooming,
    Social,
    Other(String),
}

impl PlanCategory {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "nutrition" => PlanCategory::Nutrition,
            "training" => PlanCategory::Training,
            "health" => PlanCategory::Health,
            "activities" => PlanCategory::Activities,
            "grooming" => PlanCategory::Grooming,
            "social" => PlanCategory::Social,
            other => PlanCategory::Other(if other.is_empty() {
                "general".to_string()
            } else {
                other.to_string()
            }),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PlanCategory::Nutrition => "nutrition",
            PlanCategory::Training => "training",
            PlanCategory::Health => "health",
            PlanCategory::Activities => "activities",
            PlanCategory::Grooming => "grooming",
            PlanCategory::Social => "social",
            PlanCategory::Other(name) => name,
        }
    }
}

/// 活動量等級。無法辨識的輸入一律視為 Moderate。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ActivityLevel {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => ActivityLevel::Low,
            "high" => ActivityLevel::High,
            "very high" | "very_high" | "veryhigh" => ActivityLevel::VeryHigh,
            _ => ActivityLevel::Moderate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
            ActivityLevel::VeryHigh => "Very High",
        }
    }
}

/// 依種類與體重推導的體型分級，不另外儲存。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::ExtraLarge => "extra-large",
        }
    }
}

/// 單次請求的寵物資料。數字欄位解析失敗時退回預設值，
/// 因為 fallback 路徑必須保證永遠能產出文字。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetProfile {
    pub species: Species,
    pub breed: String,
    pub age_years: f64,
    pub weight: f64,
    pub activity: ActivityLevel,
    pub notes: Option<String>,
}

pub const DEFAULT_AGE_YEARS: f64 = 1.0;
pub const DEFAULT_WEIGHT: f64 = 10.0;

impl PetProfile {
    /// 由原始字串欄位建立 profile。age/weight 解析失敗分別退回 1 與 10。
    pub fn from_raw(
        species: &str,
        breed: &str,
        age: &str,
        weight: &str,
        activity: &str,
        notes: Option<&str>,
    ) -> Self {
        let breed = breed.trim();
        Self {
            species: Species::parse(species),
            breed: if breed.is_empty() {
                "mixed".to_string()
            } else {
                breed.to_string()
            },
            age_years: parse_number_or(age, DEFAULT_AGE_YEARS),
            weight: parse_number_or(weight, DEFAULT_WEIGHT),
            activity: ActivityLevel::parse(activity),
            notes: normalize_notes(notes),
        }
    }
}

fn parse_number_or(raw: &str, default: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => default,
    }
}

/// 空白字串與未提供視為相同：都沒有備註。
fn normalize_notes(notes: Option<&str>) -> Option<String> {
    notes.and_then(|n| {
        let trimmed = n.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 為什麼走了 fallback 路徑。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// 呼叫端明確要求離線產生
    Offline,
    /// 遠端回應非 2xx
    HttpStatus(u16),
    /// 網路層或回應解析失敗
    Transport(String),
    /// 遠端回傳了空白內容
    EmptyCompletion,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Offline => write!(f, "offline mode requested"),
            FallbackReason::HttpStatus(status) => write!(f, "remote returned HTTP {}", status),
            FallbackReason::Transport(message) => write!(f, "transport failure: {}", message),
            FallbackReason::EmptyCompletion => write!(f, "remote returned an empty completion"),
        }
    }
}

/// 計畫產生結果。遠端失敗不會以錯誤形式往外傳，
/// 而是明確標示為 Fallback,讓呼叫端看得見降級。
#[derive(Debug, Clone)]
pub enum PlanOutcome {
    Remote { text: String, model: String },
    Fallback { text: String, reason: FallbackReason },
}

impl PlanOutcome {
    pub fn text(&self) -> &str {
        match self {
            PlanOutcome::Remote { text, .. } => text,
            PlanOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, PlanOutcome::Fallback { .. })
    }
}

/// 遠端 completion 的成功結果。
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub model: String,
}
