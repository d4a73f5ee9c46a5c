//! Game configuration options.

/// What happens when a draw finds the deck empty mid-round.
///
/// Dealer auto-play never stalls under either policy: it stops drawing and
/// the round resolves with the hands as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExhaustionPolicy {
    /// A player hit on an empty deck resolves the round immediately.
    #[default]
    Resolve,
    /// A player hit on an empty deck is ignored and the turn continues.
    Ignore,
}

/// Language of the outcome messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English.
    #[default]
    English,
    /// German.
    German,
}

/// Configuration options for a game.
///
/// ```
/// use bjsolo::{ExhaustionPolicy, GameOptions, Language};
///
/// let options = GameOptions::default()
///     .with_exhaustion(ExhaustionPolicy::Ignore)
///     .with_language(Language::German);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Behavior when the deck runs out during a round.
    pub exhaustion: ExhaustionPolicy,
    /// Language of [`crate::TableView::message`].
    pub language: Language,
}

impl GameOptions {
    /// Sets the deck exhaustion policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{ExhaustionPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Ignore);
    /// assert_eq!(options.exhaustion, ExhaustionPolicy::Ignore);
    /// ```
    #[must_use]
    pub const fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    /// Sets the message language.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{GameOptions, Language};
    ///
    /// let options = GameOptions::default().with_language(Language::German);
    /// assert_eq!(options.language, Language::German);
    /// ```
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
