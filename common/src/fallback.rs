//! デモフォールバック結果の合成
//!
//! バックエンドに到達できないときに表示する決め打ちの解析結果。
//! プロジェクト種別のみから決定論的に生成する。

use crate::types::{GeoPoint, ProjectType, SatelliteAnalysis, VerificationResult};

/// 通信失敗時のバナー文言
pub const CONNECTION_FAILED: &str = "Connection Failed. Backend offline or CORS issue.";

/// フォールバック結果が名乗るモデル名
pub const FALLBACK_MODEL: &str = "ResNet50_Sentinel2_v1";

const SPILL_VERDICT: &str = "SPILL DETECTED";
const SPILL_REASON: &str = "Hydrocarbon signatures detected in water body. Cleanup not verified.";
const SPILL_INDEX: f64 = 0.08;

const GHOST_VERDICT: &str = "GHOST PROJECT RISK";
const GHOST_REASON: &str =
    "Vegetation detected at construction site. Infrastructure missing or incomplete.";
const GHOST_INDEX: f64 = 0.62;

/// デモ用の検証結果を合成する
///
/// 油流出系はSPILL、それ以外はGHOST PROJECT判定。risk_flagは常にtrue。
/// 座標は入力値をそのまま写す（NaNも含めて）。
pub fn demo_result(project_type: ProjectType, lat: f64, lon: f64) -> VerificationResult {
    let (verdict, reason, calculated_index) = match project_type {
        ProjectType::OilSpillRemediation => (SPILL_VERDICT, SPILL_REASON, SPILL_INDEX),
        _ => (GHOST_VERDICT, GHOST_REASON, GHOST_INDEX),
    };

    VerificationResult {
        location: GeoPoint { lat, lon },
        satellite_analysis: SatelliteAnalysis {
            verdict: verdict.to_string(),
            reason: reason.to_string(),
            risk_flag: true,
            calculated_index,
            model_used: FALLBACK_MODEL.to_string(),
        },
    }
}
