//! Client-side filter over topic cards.

/// The searchable text of one topic card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TopicCard {
    /// Card heading, e.g. `Topic 42`.
    pub title: String,
    /// Space-separated keywords (`data-words`).
    pub words: String,
}

/// Case-insensitive substring match over keywords or title. An empty term matches everything.
pub fn topic_matches(card: &TopicCard, term: &str) -> bool {
    let term = term.to_lowercase();
    card.words.to_lowercase().contains(&term) || card.title.to_lowercase().contains(&term)
}

/// One visibility flag per card, in card order.
pub fn filter_visibility(cards: &[TopicCard], term: &str) -> Vec<bool> {
    cards.iter().map(|c| topic_matches(c, term)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/page/topics.rs"]
mod tests;
