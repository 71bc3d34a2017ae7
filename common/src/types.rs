//! 検証リクエスト/レスポンスの型定義
//!
//! WASMフロントエンドとネイティブテストで共有される型:
//! - ProjectType: プロジェクト種別（ワイヤ文字列と1対1対応）
//! - VerificationRequest: POST /verify のリクエストボディ
//! - VerificationResult: レスポンスボディ（厳密デコード）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// プロジェクト種別
///
/// ワイヤ上は表示文字列そのままで送受信する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Oil Spill Remediation")]
    OilSpillRemediation,
    Road,
    Building,
    Factory,
}

impl ProjectType {
    /// 選択UI表示順の全種別
    pub const ALL: [ProjectType; 4] = [
        ProjectType::OilSpillRemediation,
        ProjectType::Road,
        ProjectType::Building,
        ProjectType::Factory,
    ];

    /// ワイヤ文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::OilSpillRemediation => "Oil Spill Remediation",
            ProjectType::Road => "Road",
            ProjectType::Building => "Building",
            ProjectType::Factory => "Factory",
        }
    }

    /// 選択UIに出すラベル（ワイヤ文字列とは別物）
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::OilSpillRemediation => "Oil Spill Cleanup",
            ProjectType::Road => "Road Construction",
            ProjectType::Building => "Building / School",
            ProjectType::Factory => "Industrial Facility",
        }
    }
}

impl Default for ProjectType {
    fn default() -> Self {
        ProjectType::OilSpillRemediation
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Oil Spill Remediation" => Ok(ProjectType::OilSpillRemediation),
            "Road" => Ok(ProjectType::Road),
            "Building" => Ok(ProjectType::Building),
            "Factory" => Ok(ProjectType::Factory),
            other => Err(Error::UnknownProjectType(other.to_string())),
        }
    }
}

/// POST /verify のリクエストボディ
///
/// 座標は送信時点でのパース結果をそのまま載せる。
/// 非数値入力はNaNになり、JSONではnullとして送信される。
#[derive(Debug, Clone, Serialize)]
pub struct VerificationRequest {
    pub project_id: String,
    pub project_type: ProjectType,
    pub latitude: f64,
    pub longitude: f64,
}

impl VerificationRequest {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// 対象地点の座標
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// 衛星画像解析の内訳
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteAnalysis {
    pub verdict: String,
    pub reason: String,
    pub risk_flag: bool,
    pub calculated_index: f64,
    pub model_used: String,
}

/// 検証結果（レスポンスボディ全体）
///
/// フィールド欠落は通信失敗として扱うため、defaultは付けない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub location: GeoPoint,
    pub satellite_analysis: SatelliteAnalysis,
}

impl VerificationResult {
    /// 厳密デコード（フィールド欠落・型不一致はエラー）
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 座標入力文字列をf64にパースする
///
/// JSのparseFloatと同じ挙動: 先頭の空白を読み飛ばし、
/// 浮動小数点数として解釈できる最長の接頭辞を数値化する。
/// 1文字も解釈できなければNaNを返す（エラーにはしない）。
pub fn parse_coordinate(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    // 符号
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    // 整数部
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_len = end - int_start;

    // 小数部
    let mut frac_len = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let dot = end;
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_len = end - dot - 1;
    }

    if int_len == 0 && frac_len == 0 {
        return f64::NAN;
    }

    // 指数部（数字が続く場合のみ取り込む）
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
