//! Style resolution: from interaction state to animation targets.

pub mod intent;
pub mod metrics;
pub mod resolver;
pub mod variant;

pub use intent::{Motion, StyleIntent};
pub use metrics::{resolve_metrics, BoxMetrics};
pub use resolver::{resolve_style, Annotations};
pub use variant::{ControlKind, LoaderKind, LogoKind, Size, VariantConfig};
