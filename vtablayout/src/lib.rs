//! Vertical tab selector with an animated selection indicator for terminal UIs.

pub mod animation;
pub mod bridge;
pub mod buffer;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod indicator;
pub mod layout;
pub mod provider;
pub mod render;
pub mod strip;
pub mod tab;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;

pub use bridge::{PageEvent, PagedContent, PagerAdapter, PagerTabs};
pub use buffer::{Brush, Buffer, Cell};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TabLayoutConfig;
pub use controller::{ListenerId, SelectionEvent, StripState, TabSelectionController};
pub use error::TabError;
pub use indicator::{IndicatorEngine, IndicatorGeometry};
pub use layout::{LayoutModeStrategy, Rect};
pub use provider::{StaticTabs, TabDataProvider};
pub use strip::TabStrip;
pub use tab::{TabDisplay, TabItem};
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig};
pub use types::*;

pub type Result<T> = std::result::Result<T, TabError>;
