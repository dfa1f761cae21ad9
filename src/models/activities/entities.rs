use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 活动类型（英语技能）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub enum ActivityType {
    Reading,
    Writing,
    Speaking,
    Listening,
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::Reading => write!(f, "reading"),
            ActivityType::Writing => write!(f, "writing"),
            ActivityType::Speaking => write!(f, "speaking"),
            ActivityType::Listening => write!(f, "listening"),
        }
    }
}

impl std::str::FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reading" => Ok(ActivityType::Reading),
            "writing" => Ok(ActivityType::Writing),
            "speaking" => Ok(ActivityType::Speaking),
            "listening" => Ok(ActivityType::Listening),
            _ => Err(format!("Invalid activity type: {s}")),
        }
    }
}

// HOTS 认知层级（Bloom 分类的高阶部分）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub enum HotsLevel {
    Analyze,
    Evaluate,
    Create,
}

impl std::fmt::Display for HotsLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotsLevel::Analyze => write!(f, "analyze"),
            HotsLevel::Evaluate => write!(f, "evaluate"),
            HotsLevel::Create => write!(f, "create"),
        }
    }
}

impl std::str::FromStr for HotsLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analyze" => Ok(HotsLevel::Analyze),
            "evaluate" => Ok(HotsLevel::Evaluate),
            "create" => Ok(HotsLevel::Create),
            _ => Err(format!("Invalid HOTS level: {s}")),
        }
    }
}

// 活动实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub activity_type: ActivityType,
    pub hots_level: HotsLevel,
    pub content: Option<String>,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
