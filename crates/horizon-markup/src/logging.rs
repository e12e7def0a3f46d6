//! Tracing targets for Horizon Markup.
//!
//! The crate only emits `trace!`/`debug!` events and never installs a
//! subscriber. To see them, install one in your application and filter on
//! these targets:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_markup::parser=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Tag tokenizer target.
    pub const TOKENIZER: &str = "horizon_markup::tokenizer";
    /// Entity decoder target.
    pub const ENTITY: &str = "horizon_markup::entity";
    /// Styled fragment parser target.
    pub const PARSER: &str = "horizon_markup::parser";
    /// Plain-text stripper target.
    pub const PLAIN: &str = "horizon_markup::plain";
}
