//! Sat Verify Common Library
//!
//! WASMフロントエンドとネイティブテストで共有される型とロジック

pub mod types;
pub mod camera;
pub mod error;
pub mod fallback;
pub mod state;
pub mod surface;

pub use types::{
    parse_coordinate, GeoPoint, ProjectType, SatelliteAnalysis, VerificationRequest,
    VerificationResult,
};
pub use camera::{
    rotate_westward, target_view, CameraView, IDLE_VIEW, ROTATE_EASE_MS, ROTATE_INTERVAL_MS,
    ROTATE_STEP_DEG,
};
pub use error::{Error, Result};
pub use fallback::{demo_result, CONNECTION_FAILED, FALLBACK_MODEL};
pub use state::{ViewState, REVEAL_DELAY_MS};
pub use surface::{approach, return_to_idle, MapSurface, MARKER_COLOR};
