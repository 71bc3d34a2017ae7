//! ビュー状態機械
//!
//! 検証フローの状態遷移を純粋データとして扱う。
//! 遅延適用される結果（通信完了・演出ディレイ後）はgenerationで
//! 世代を照合し、追い越された試行の結果は黙って破棄する。

use serde::{Deserialize, Serialize};

use crate::types::VerificationResult;

/// 結果表示までの演出ディレイ（ミリ秒）
pub const REVEAL_DELAY_MS: u32 = 3000;

/// 画面全体のビュー状態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// 地図ウィジェットのロード完了
    pub map_loaded: bool,
    /// 自動回転が有効か
    pub rotating: bool,
    /// 検証リクエスト実行中
    pub loading: bool,
    /// 結果パネル表示中
    pub show_results: bool,
    /// エラーバナー文言（空 = エラーなし）
    pub error: String,
    /// 最後に受理した検証結果
    pub result: Option<VerificationResult>,
    /// 検証試行の世代カウンタ
    pub generation: u64,
}

impl ViewState {
    /// 初期状態（回転は有効、地図ロード待ち）
    pub fn new() -> Self {
        Self {
            map_loaded: false,
            rotating: true,
            loading: false,
            show_results: false,
            error: String::new(),
            result: None,
            generation: 0,
        }
    }

    /// 地図ウィジェットのロード完了を記録する
    pub fn map_ready(&mut self) {
        self.map_loaded = true;
    }

    /// エラーバナーを出すべきか
    ///
    /// 結果が出た後はフォールバックがエラーを覆い隠す
    pub fn has_error(&self) -> bool {
        !self.error.is_empty() && self.result.is_none()
    }

    /// 検証を開始する
    ///
    /// 前回の結果・エラーを消し、回転を止め、世代を進める。
    /// 戻り値はこの試行の世代。遅延適用時の照合に使う。
    pub fn begin_verification(&mut self) -> u64 {
        self.loading = true;
        self.show_results = false;
        self.error.clear();
        self.result = None;
        self.rotating = false;
        self.generation += 1;
        self.generation
    }

    /// 成功レスポンスを適用する
    ///
    /// 世代が現在と一致しなければ何もせずfalseを返す
    pub fn apply_success(&mut self, generation: u64, result: VerificationResult) -> bool {
        if generation != self.generation {
            return false;
        }
        self.result = Some(result);
        self.show_results = true;
        self.loading = false;
        true
    }

    /// 通信失敗を適用する（エラーバナー表示、ロード解除）
    pub fn apply_failure(&mut self, generation: u64, message: &str) -> bool {
        if generation != self.generation {
            return false;
        }
        self.error = message.to_string();
        self.loading = false;
        true
    }

    /// フォールバック結果を適用する
    ///
    /// エラーバナーは消え、合成結果が本物同様に表示される
    pub fn apply_fallback(&mut self, generation: u64, result: VerificationResult) -> bool {
        if generation != self.generation {
            return false;
        }
        self.error.clear();
        self.result = Some(result);
        self.show_results = true;
        self.loading = false;
        true
    }

    /// 結果パネルを閉じ、地球全景へ戻る
    pub fn reset(&mut self) {
        self.show_results = false;
        self.result = None;
        self.error.clear();
        self.rotating = true;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::demo_result;
    use crate::types::ProjectType;

    fn sample_result() -> VerificationResult {
        demo_result(ProjectType::Road, 5.9667, 5.6667)
    }

    #[test]
    fn test_new_state() {
        let state = ViewState::new();
        assert!(!state.map_loaded);
        assert!(state.rotating);
        assert!(!state.loading);
        assert!(!state.show_results);
        assert!(state.error.is_empty());
        assert!(state.result.is_none());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_map_ready() {
        let mut state = ViewState::new();
        state.map_ready();
        assert!(state.map_loaded);
        // 回転フラグには触れない
        assert!(state.rotating);
    }

    #[test]
    fn test_begin_verification_clears_previous() {
        let mut state = ViewState::new();
        state.error = "old error".to_string();
        state.result = Some(sample_result());
        state.show_results = true;

        let generation = state.begin_verification();

        assert_eq!(generation, 1);
        assert!(state.loading);
        assert!(!state.show_results);
        assert!(!state.rotating);
        assert!(state.error.is_empty());
        assert!(state.result.is_none());
    }

    #[test]
    fn test_apply_success() {
        let mut state = ViewState::new();
        let generation = state.begin_verification();

        let accepted = state.apply_success(generation, sample_result());

        assert!(accepted);
        assert!(!state.loading);
        assert!(state.show_results);
        assert_eq!(state.result, Some(sample_result()));
    }

    #[test]
    fn test_apply_success_keeps_response_verbatim() {
        let mut state = ViewState::new();
        let generation = state.begin_verification();

        let mut result = sample_result();
        result.satellite_analysis.verdict = "VERIFIED".to_string();
        result.satellite_analysis.calculated_index = 0.1234;
        state.apply_success(generation, result.clone());

        // 受理した結果は一切書き換えない
        assert_eq!(state.result, Some(result));
    }

    #[test]
    fn test_apply_failure_shows_banner() {
        let mut state = ViewState::new();
        let generation = state.begin_verification();

        let accepted = state.apply_failure(generation, "Connection Failed.");

        assert!(accepted);
        assert!(!state.loading);
        assert_eq!(state.error, "Connection Failed.");
        assert!(state.has_error());
        assert!(!state.show_results);
    }

    #[test]
    fn test_apply_fallback_masks_error() {
        let mut state = ViewState::new();
        let generation = state.begin_verification();
        state.apply_failure(generation, "Connection Failed.");

        let accepted = state.apply_fallback(generation, sample_result());

        assert!(accepted);
        assert!(state.error.is_empty());
        assert!(!state.has_error());
        assert!(state.show_results);
        assert_eq!(state.result, Some(sample_result()));
    }

    #[test]
    fn test_stale_generation_discarded() {
        let mut state = ViewState::new();
        let first = state.begin_verification();
        let second = state.begin_verification();
        assert_ne!(first, second);

        // 追い越された試行の遅延結果はすべて捨てる
        assert!(!state.apply_success(first, sample_result()));
        assert!(!state.apply_failure(first, "late error"));
        assert!(!state.apply_fallback(first, sample_result()));
        assert!(state.result.is_none());
        assert!(state.error.is_empty());
        assert!(state.loading);

        // 現行の試行は通常どおり受理される
        assert!(state.apply_success(second, sample_result()));
    }

    #[test]
    fn test_has_error_hidden_once_result_present() {
        let mut state = ViewState::new();
        let generation = state.begin_verification();
        state.apply_failure(generation, "Connection Failed.");
        assert!(state.has_error());

        state.apply_fallback(generation, sample_result());
        assert!(!state.has_error());
    }

    #[test]
    fn test_reset() {
        let mut state = ViewState::new();
        state.map_ready();
        let generation = state.begin_verification();
        state.apply_success(generation, sample_result());

        state.reset();

        assert!(!state.show_results);
        assert!(state.result.is_none());
        assert!(state.error.is_empty());
        assert!(state.rotating);
        // ロード済みフラグと世代は維持される
        assert!(state.map_loaded);
        assert_eq!(state.generation, generation);
    }
}
