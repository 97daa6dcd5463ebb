use rand::Rng;
use rand::seq::IndexedRandom;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Mighty", "Silent", "Golden", "Wild", "Noble",
    "Fierce", "Gentle", "Quick", "Wise", "Bold", "Proud", "Cunning", "Sly",
];

const NOUNS: &[&str] = &[
    "Falcon", "Bear", "Tiger", "Wolf", "Eagle", "Dragon", "Lion", "Panther",
    "Hawk", "Fox", "Raven", "Cobra", "Shark", "Phoenix", "Lynx", "Viper",
];

/// Random "Adjective Noun" name for a player who did not enter one.
///
/// Never returns a name listed in `taken`, so two unnamed players at the
/// same board always end up distinguishable on the scoreboard.
pub fn generate_player_name(taken: &[&str]) -> String {
    let mut rng = rand::rng();
    let free: Vec<String> = ADJECTIVES
        .iter()
        .flat_map(|adjective| NOUNS.iter().map(move |noun| format!("{} {}", adjective, noun)))
        .filter(|name| !taken.contains(&name.as_str()))
        .collect();

    match free.choose(&mut rng) {
        Some(name) => name.clone(),
        // Every combination is taken, disambiguate with a number.
        None => format!("Player {}", rng.random_range(1000..10000)),
    }
}
