use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &[
    "😭", "😄", "😌", "🤓", "😎", "😤", "🤖", "😶‍🌫️", "🌏", "📸", "💿", "👋", "🌊", "✨",
];

/// Pick a random emoji for light-hearted replies.
pub fn random_emoji() -> &'static str {
    EMOJIS.choose(&mut rand::thread_rng()).copied().unwrap_or("✨")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_from_the_list() {
        for _ in 0..32 {
            assert!(EMOJIS.contains(&random_emoji()));
        }
    }
}
