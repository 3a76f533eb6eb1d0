pub mod panel;
pub mod strip;
pub mod text;
pub mod theme;
pub mod types;
pub mod util;

pub use panel::{InfoPanel, PanelLayout};
pub use strip::{DimensionSlot, DimensionStrip, StripLayout};
pub use text::{UiTextMeasure, UiTextRenderer, wrap_text};
pub use theme::UiPalette;
pub use types::IRect;
