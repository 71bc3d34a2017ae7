//! 地図ウィジェット連携
//!
//! CDNロード、mapboxglバインディング、オプション型、サーフェス実装

pub mod bindings;
pub mod loader;
pub mod options;
pub mod surface;
